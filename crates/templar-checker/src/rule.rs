//! Template rule trait and supporting types.
//!
//! Each rule handles one kind of declaration (class, function, method),
//! supplies the messages for that kind, and delegates the actual checks to
//! [`TemplateTypeCheck`].

use crate::diagnostic::Diagnostic;
use crate::error::CheckError;
use crate::message::TemplateMessages;
use crate::site::{DeclarationSite, TemplateTypeScope};
use crate::template_check::{TemplateTag, TemplateTags, TemplateTypeCheck};

/// Static metadata for a template rule.
pub struct RuleMeta {
    /// Rule name, e.g. "class-template-type".
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// A declaration and the template parameters it introduces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Where the declaration is
    pub site: DeclarationSite,
    /// Owner of the template parameters
    pub scope: TemplateTypeScope,
    /// Declared template parameters, in declaration order
    pub template_tags: TemplateTags,
    /// Template names of the enclosing class (methods only)
    pub enclosing_template_names: Vec<String>,
}

impl Declaration {
    /// Create a declaration with the given template parameters
    pub fn new(site: DeclarationSite, scope: TemplateTypeScope, template_tags: Vec<TemplateTag>) -> Self {
        Self {
            site,
            scope,
            template_tags: template_tags
                .into_iter()
                .map(|tag| (tag.name.clone(), tag))
                .collect(),
            enclosing_template_names: Vec::new(),
        }
    }

    /// Set the template names of the enclosing class
    pub fn with_enclosing_templates(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.enclosing_template_names = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Messages shared by every declaration kind, with `subject` naming the
/// declaration, e.g. `function map()`.
pub(crate) fn template_messages(subject: &str) -> Result<TemplateMessages, CheckError> {
    // Braces in declaration names are literal text, not placeholders.
    let subject = subject.replace('{', "{{").replace('}', "}}");
    TemplateMessages::new(
        format!("@template for {} cannot have existing class {{}} as its name.", subject),
        format!("@template for {} cannot have existing type alias {{}} as its name.", subject),
        format!("@template {{}} for {} has invalid bound type {{}}.", subject),
        format!("@template {{}} for {} with bound type {{}} is not supported.", subject),
    )
}

/// Trait that every template rule must implement.
pub trait TemplateRule: Send + Sync {
    /// Static metadata for this rule.
    fn meta(&self) -> &RuleMeta;

    /// Check a declaration. Rules return nothing for declaration kinds they
    /// do not handle.
    fn check(
        &self,
        declaration: &Declaration,
        check: &TemplateTypeCheck<'_>,
    ) -> Result<Vec<Diagnostic>, CheckError>;
}
