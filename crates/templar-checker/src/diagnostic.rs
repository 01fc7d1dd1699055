//! Diagnostics reported by the template checks
//!
//! A [`Diagnostic`] is plain data: a kind, a single-line message and the
//! declaration it belongs to. Rendering to a terminal or to JSON is offered
//! for drivers that want it.

use std::fmt;
use std::path::PathBuf;

use codespan_reporting::diagnostic::{Diagnostic as CsDiagnostic, Label, LabelStyle, Severity};
use codespan_reporting::files::{Files, SimpleFiles};
use codespan_reporting::term;
use serde::{Deserialize, Serialize};
use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::site::DeclarationSite;
use crate::span::Span;

/// Category of a template diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A template parameter shadows an existing class-like name
    NameCollidesWithClass,
    /// A template parameter shadows a registered type alias
    NameCollidesWithTypeAlias,
    /// A bound references a missing class or a trait
    InvalidBoundReference,
    /// A bound has a shape templates do not support
    UnsupportedBoundKind,
    /// A class is referenced with the wrong letter case
    CaseMismatch,
    /// A method template reuses the name of a class template
    ShadowsClassTemplate,
}

impl DiagnosticKind {
    /// Error code, e.g. "T1003"
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::NameCollidesWithClass => "T1001",
            DiagnosticKind::NameCollidesWithTypeAlias => "T1002",
            DiagnosticKind::InvalidBoundReference => "T1003",
            DiagnosticKind::UnsupportedBoundKind => "T1004",
            DiagnosticKind::CaseMismatch => "T1005",
            DiagnosticKind::ShadowsClassTemplate => "T1006",
        }
    }

    /// Stable identifier, e.g. "template-invalid-bound"
    pub fn identifier(&self) -> &'static str {
        match self {
            DiagnosticKind::NameCollidesWithClass => "template-name-is-class",
            DiagnosticKind::NameCollidesWithTypeAlias => "template-name-is-type-alias",
            DiagnosticKind::InvalidBoundReference => "template-invalid-bound",
            DiagnosticKind::UnsupportedBoundKind => "template-unsupported-bound",
            DiagnosticKind::CaseMismatch => "class-name-case",
            DiagnosticKind::ShadowsClassTemplate => "template-shadows-class-template",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A single reported problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Category
    pub kind: DiagnosticKind,
    /// Single-line message
    pub message: String,
    /// Location of the offending declaration
    pub span: Span,
    /// File of the offending declaration
    pub file_id: usize,
}

impl Diagnostic {
    /// Create a diagnostic attached to a declaration site
    pub fn at(kind: DiagnosticKind, message: impl Into<String>, site: &DeclarationSite) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            span: site.span,
            file_id: site.file_id,
        }
    }

    /// Error code of this diagnostic's kind
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Convert to a codespan diagnostic for rendering
    pub fn to_codespan(&self) -> CsDiagnostic<usize> {
        CsDiagnostic::new(Severity::Error)
            .with_message(self.message.clone())
            .with_code(self.kind.code())
            .with_labels(vec![Label::primary(self.file_id, self.span.range())
                .with_message(self.kind.identifier())])
    }

    /// Render to `writer`
    pub fn emit_to(
        &self,
        writer: &mut dyn WriteColor,
        files: &SimpleFiles<String, String>,
    ) -> Result<(), codespan_reporting::files::Error> {
        let config = term::Config::default();
        term::emit(writer, &config, files, &self.to_codespan())
    }

    /// Emit the diagnostic to stderr with colors
    pub fn emit(&self, files: &SimpleFiles<String, String>) -> Result<(), codespan_reporting::files::Error> {
        let mut writer = StandardStream::stderr(ColorChoice::Auto);
        self.emit_to(&mut writer, files)
    }

    /// Convert to JSON representation for IDE integration
    pub fn to_json(&self, files: &SimpleFiles<String, String>) -> Result<String, serde_json::Error> {
        let json_diag = JsonDiagnostic::from_diagnostic(self, files);
        serde_json::to_string_pretty(&json_diag)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.code(), self.message)
    }
}

/// JSON representation of a diagnostic for IDE integration
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonDiagnostic {
    /// Error code (e.g., "T1001")
    pub code: String,
    /// Stable identifier (e.g., "template-name-is-class")
    pub identifier: String,
    /// Severity level
    pub severity: String,
    /// Main error message
    pub message: String,
    /// Source locations with labels
    pub labels: Vec<JsonLabel>,
}

/// JSON representation of a diagnostic label
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonLabel {
    /// File path
    pub file: String,
    /// Start line (1-indexed)
    pub start_line: usize,
    /// Start column (1-indexed)
    pub start_column: usize,
    /// End line (1-indexed)
    pub end_line: usize,
    /// End column (1-indexed)
    pub end_column: usize,
    /// Label message
    pub message: Option<String>,
    /// Label style (primary or secondary)
    pub style: String,
}

impl JsonDiagnostic {
    /// Convert a Diagnostic to JSON representation
    pub fn from_diagnostic(diag: &Diagnostic, files: &SimpleFiles<String, String>) -> Self {
        let inner = diag.to_codespan();

        let labels = inner
            .labels
            .iter()
            .filter_map(|label| {
                let file = files.get(label.file_id).ok()?;
                let start_location = file.location((), label.range.start).ok()?;
                let end_location = file.location((), label.range.end).ok()?;

                Some(JsonLabel {
                    file: file.name().to_string(),
                    start_line: start_location.line_number,
                    start_column: start_location.column_number,
                    end_line: end_location.line_number,
                    end_column: end_location.column_number,
                    message: Some(label.message.clone()),
                    style: match label.style {
                        LabelStyle::Primary => "primary",
                        LabelStyle::Secondary => "secondary",
                    }
                    .to_string(),
                })
            })
            .collect();

        JsonDiagnostic {
            code: diag.kind.code().to_string(),
            identifier: diag.kind.identifier().to_string(),
            severity: "error".to_string(),
            message: diag.message.clone(),
            labels,
        }
    }
}

/// Helper to create a SimpleFiles instance from source code
pub fn create_files(path: impl Into<PathBuf>, source: impl Into<String>) -> SimpleFiles<String, String> {
    let mut files = SimpleFiles::new();
    files.add(path.into().display().to_string(), source.into());
    files
}
