//! Declaration sites and template scopes

use std::fmt;

use crate::span::Span;
use crate::symbols::ClassKind;

/// What kind of declaration introduces the template parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// A class, interface, trait or enum declaration
    Class {
        /// Class name
        name: String,
        /// Which class-like kind it is
        kind: ClassKind,
    },
    /// A free function
    Function {
        /// Function name
        name: String,
    },
    /// A method of a class
    Method {
        /// Declaring class
        class_name: String,
        /// Method name
        name: String,
    },
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Class { name, kind } => write!(f, "{} {}", kind, name),
            DeclarationKind::Function { name } => write!(f, "function {}()", name),
            DeclarationKind::Method { class_name, name } => {
                write!(f, "method {}::{}()", class_name, name)
            }
        }
    }
}

/// The declaration node diagnostics are attached to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSite {
    /// What is being declared
    pub kind: DeclarationKind,
    /// Location of the declaration
    pub span: Span,
    /// File the declaration lives in
    pub file_id: usize,
}

impl DeclarationSite {
    /// Create a declaration site
    pub fn new(kind: DeclarationKind, span: Span, file_id: usize) -> Self {
        Self {
            kind,
            span,
            file_id,
        }
    }
}

/// Owner of a set of template parameters: a class, a function, or a method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateTypeScope {
    class_name: Option<String>,
    function_name: Option<String>,
}

impl TemplateTypeScope {
    /// Scope of a class-level template
    pub fn for_class(class_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            function_name: None,
        }
    }

    /// Scope of a function-level template
    pub fn for_function(function_name: impl Into<String>) -> Self {
        Self {
            class_name: None,
            function_name: Some(function_name.into()),
        }
    }

    /// Scope of a method-level template
    pub fn for_method(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self {
            class_name: Some(class_name.into()),
            function_name: Some(method_name.into()),
        }
    }

    /// Owning class, if any
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Owning function or method, if any
    pub fn function_name(&self) -> Option<&str> {
        self.function_name.as_deref()
    }
}

impl fmt::Display for TemplateTypeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.class_name, &self.function_name) {
            (Some(class), Some(function)) => write!(f, "{}::{}()", class, function),
            (Some(class), None) => write!(f, "{}", class),
            (None, Some(function)) => write!(f, "{}()", function),
            (None, None) => write!(f, "<unknown>"),
        }
    }
}
