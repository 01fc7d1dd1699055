//! Templar Template Checker
//!
//! Validation of the template (generic) parameters declared on classes,
//! functions and methods.
//!
//! This crate provides:
//! - Collaborator seams for symbol lookup and class-name case checks
//! - The per-declaration template validator
//! - Class, function and method rules wrapping it with their messages
//! - Diagnostics with terminal and JSON rendering
//!
//! # Usage
//!
//! ```ignore
//! use templar_checker::{
//!     ClassKind, Declaration, DeclarationKind, DeclarationSite, Span, SymbolTable,
//!     TemplateChecker, TemplateTag, TemplateTypeScope,
//! };
//! use templar_types::Type;
//!
//! let symbols = SymbolTable::new().with_class("Foo\\Bar", ClassKind::Class);
//! let checker = TemplateChecker::new(&symbols);
//!
//! let site = DeclarationSite::new(
//!     DeclarationKind::Function { name: "wrap".into() },
//!     Span::new(0, 4, 1, 1),
//!     0,
//! );
//! let decl = Declaration::new(
//!     site,
//!     TemplateTypeScope::for_function("wrap"),
//!     vec![TemplateTag::new("T", Type::object("Foo\\Bar"))],
//! );
//!
//! let diagnostics = checker.check_declaration(&decl)?;
//! ```

#![warn(missing_docs)]

pub mod aliases;
pub mod case_sensitivity;
pub mod checker;
pub mod config;
pub mod diagnostic;
pub mod error;
pub mod message;
pub mod rule;
pub mod rules;
pub mod site;
pub mod span;
pub mod symbols;
pub mod template_check;

// Re-export main types
pub use aliases::TypeAliases;
pub use case_sensitivity::{CaseSensitivityChecker, ClassCaseSensitivityCheck, ClassNamePair};
pub use checker::{CheckResult, TemplateChecker};
pub use config::CheckConfig;
pub use diagnostic::{create_files, Diagnostic, DiagnosticKind, JsonDiagnostic, JsonLabel};
pub use error::{CheckError, ConfigError};
pub use message::{MessageTemplate, TemplateMessages};
pub use rule::{Declaration, RuleMeta, TemplateRule};
pub use site::{DeclarationKind, DeclarationSite, TemplateTypeScope};
pub use span::Span;
pub use symbols::{ClassKind, ClassSymbol, SymbolResolver, SymbolTable};
pub use template_check::{TemplateTag, TemplateTags, TemplateTypeCheck};
