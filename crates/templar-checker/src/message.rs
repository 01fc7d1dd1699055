//! Message templates with positional placeholders
//!
//! A template is a string with `{}` placeholders filled in order;
//! `{{` and `}}` produce literal braces.

use crate::error::CheckError;

/// A message format string with a fixed number of `{}` placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    text: String,
    arity: usize,
}

enum Piece {
    Literal(char),
    Placeholder,
}

fn pieces(text: &str) -> impl Iterator<Item = Piece> + '_ {
    let mut chars = text.chars().peekable();
    std::iter::from_fn(move || {
        let c = chars.next()?;
        Some(match (c, chars.peek()) {
            ('{', Some('}')) => {
                chars.next();
                Piece::Placeholder
            }
            ('{', Some('{')) | ('}', Some('}')) => {
                chars.next();
                Piece::Literal(c)
            }
            _ => Piece::Literal(c),
        })
    })
}

impl MessageTemplate {
    /// Create a template, requiring exactly `arity` placeholders
    pub fn new(text: impl Into<String>, arity: usize) -> Result<Self, CheckError> {
        let text = text.into();
        let actual = pieces(&text)
            .filter(|piece| matches!(piece, Piece::Placeholder))
            .count();
        if actual != arity {
            return Err(CheckError::MessageArity {
                template: text,
                expected: arity,
                actual,
            });
        }
        Ok(Self { text, arity })
    }

    /// Number of placeholders
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The raw template text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fill the placeholders in order. Missing arguments render as empty,
    /// extra arguments are ignored.
    pub fn format(&self, args: &[&str]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut args = args.iter();
        for piece in pieces(&self.text) {
            match piece {
                Piece::Literal(c) => out.push(c),
                Piece::Placeholder => out.push_str(args.next().copied().unwrap_or_default()),
            }
        }
        out
    }
}

/// The four messages a template check reports with.
///
/// Placeholders, in order:
/// - `same_as_class`: parameter name
/// - `same_as_alias`: parameter name
/// - `invalid_bound`: parameter name, referenced class name
/// - `unsupported_bound`: parameter name, bound description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateMessages {
    pub(crate) same_as_class: MessageTemplate,
    pub(crate) same_as_alias: MessageTemplate,
    pub(crate) invalid_bound: MessageTemplate,
    pub(crate) unsupported_bound: MessageTemplate,
}

impl TemplateMessages {
    /// Build the message set, checking each template's placeholder count
    pub fn new(
        same_as_class: impl Into<String>,
        same_as_alias: impl Into<String>,
        invalid_bound: impl Into<String>,
        unsupported_bound: impl Into<String>,
    ) -> Result<Self, CheckError> {
        Ok(Self {
            same_as_class: MessageTemplate::new(same_as_class, 1)?,
            same_as_alias: MessageTemplate::new(same_as_alias, 1)?,
            invalid_bound: MessageTemplate::new(invalid_bound, 2)?,
            unsupported_bound: MessageTemplate::new(unsupported_bound, 2)?,
        })
    }
}
