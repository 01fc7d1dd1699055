//! Rule registry — all available template rules.

pub mod class_template;
pub mod function_template;
pub mod method_template;

use super::rule::TemplateRule;

/// Returns all available template rules.
pub fn all_rules() -> Vec<Box<dyn TemplateRule>> {
    vec![
        Box::new(class_template::ClassTemplateTypeRule),
        Box::new(function_template::FunctionTemplateTypeRule),
        Box::new(method_template::MethodTemplateTypeRule),
    ]
}
