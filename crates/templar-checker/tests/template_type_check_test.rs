//! Integration tests for template parameter validation
//!
//! Collaborators are in-memory fakes so each check can be observed in
//! isolation.

use std::sync::Mutex;

use templar_checker::{
    CaseSensitivityChecker, ClassCaseSensitivityCheck, ClassKind, ClassNamePair, Diagnostic,
    DiagnosticKind, DeclarationKind, DeclarationSite, Span, SymbolTable, TemplateMessages,
    TemplateTag, TemplateTags, TemplateTypeCheck, TemplateTypeScope, TypeAliases,
};
use templar_types::{ScalarType, Type};

fn messages() -> TemplateMessages {
    TemplateMessages::new(
        "same-as-class {}",
        "same-as-alias {}",
        "invalid-bound {} {}",
        "unsupported-bound {} {}",
    )
    .unwrap()
}

fn site() -> DeclarationSite {
    DeclarationSite::new(
        DeclarationKind::Class {
            name: "Collection".to_string(),
            kind: ClassKind::Class,
        },
        Span::new(0, 30, 1, 1),
        0,
    )
}

fn scope() -> TemplateTypeScope {
    TemplateTypeScope::for_class("Collection")
}

fn tags(list: Vec<TemplateTag>) -> TemplateTags {
    list.into_iter().map(|tag| (tag.name.clone(), tag)).collect()
}

fn symbols() -> SymbolTable {
    SymbolTable::new()
        .with_class("Foo\\Bar", ClassKind::Class)
        .with_class("Countable", ClassKind::Interface)
        .with_class("Loggable", ClassKind::Trait)
        .with_class("Suit", ClassKind::Enum)
}

fn aliases() -> TypeAliases {
    [("MyAlias".to_string(), "int|string".to_string())]
        .into_iter()
        .collect()
}

fn check_with(
    table: &SymbolTable,
    case_check: &dyn CaseSensitivityChecker,
    case_enabled: bool,
    list: Vec<TemplateTag>,
) -> Vec<Diagnostic> {
    let aliases = aliases();
    let check = TemplateTypeCheck::new(table, case_check, &aliases, case_enabled);
    check.check(&site(), &scope(), &tags(list), &messages()).unwrap()
}

fn check(list: Vec<TemplateTag>, case_enabled: bool) -> Vec<Diagnostic> {
    let table = symbols();
    let case_check = ClassCaseSensitivityCheck::new(&table);
    check_with(&table, &case_check, case_enabled, list)
}

fn count(diags: &[Diagnostic], kind: DiagnosticKind) -> usize {
    diags.iter().filter(|d| d.kind == kind).count()
}

/// Records every class name it is asked about and answers with a canned list.
struct RecordingCaseCheck {
    seen: Mutex<Vec<String>>,
    reply: Vec<Diagnostic>,
}

impl RecordingCaseCheck {
    fn new(reply: Vec<Diagnostic>) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            reply,
        }
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl CaseSensitivityChecker for RecordingCaseCheck {
    fn check_class_names(&self, pairs: &[ClassNamePair<'_>]) -> Vec<Diagnostic> {
        self.seen
            .lock()
            .unwrap()
            .extend(pairs.iter().map(|pair| pair.class_name.to_string()));
        self.reply.clone()
    }
}

#[test]
fn test_well_formed_declaration_is_clean() {
    let diags = check(
        vec![
            TemplateTag::unbounded("T"),
            TemplateTag::new("TKey", Type::ObjectWithoutClass),
            TemplateTag::new("TValue", Type::object("Countable")),
            TemplateTag::new("TSuit", Type::object("\\Suit")),
        ],
        true,
    );
    assert!(diags.is_empty(), "Expected no diagnostics, got: {:?}", diags);
}

#[test]
fn test_repeated_calls_are_identical() {
    let list = vec![
        TemplateTag::new("Foo\\Bar", Type::union(vec![Type::object("Loggable"), Type::int()])),
        TemplateTag::new("MyAlias", Type::object("foo\\bar")),
    ];

    let first = check(list.clone(), true);
    let second = check(list, true);

    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_class_and_alias_collisions_both_reported() {
    let table = symbols().with_class("MyAlias", ClassKind::Class);
    let case_check = ClassCaseSensitivityCheck::new(&table);

    for list in [
        vec![TemplateTag::unbounded("MyAlias"), TemplateTag::unbounded("T")],
        vec![TemplateTag::unbounded("T"), TemplateTag::unbounded("MyAlias")],
    ] {
        let diags = check_with(&table, &case_check, false, list);
        let messages: Vec<&str> = diags.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["same-as-class MyAlias", "same-as-alias MyAlias"]);
    }
}

#[test]
fn test_trait_bound_rejected() {
    let diags = check(vec![TemplateTag::new("T", Type::object("Loggable"))], false);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::InvalidBoundReference);
    assert_eq!(diags[0].message, "invalid-bound T Loggable");
}

#[test]
fn test_missing_class_bound_rejected() {
    let diags = check(vec![TemplateTag::new("T", Type::object("App\\Missing"))], false);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::InvalidBoundReference);
    assert_eq!(diags[0].message, "invalid-bound T App\\Missing");
}

#[test]
fn test_accepted_bound_kinds() {
    for bound in [
        Type::Mixed,
        Type::ObjectWithoutClass,
        Type::object("Countable"),
        Type::object("Missing"),
        Type::generic_object("Countable", vec![Type::int()]),
    ] {
        let diags = check(vec![TemplateTag::new("T", bound.clone())], false);
        assert_eq!(
            count(&diags, DiagnosticKind::UnsupportedBoundKind),
            0,
            "bound {} should be accepted",
            bound
        );
    }
}

#[test]
fn test_unsupported_bound_kind() {
    let bound = Type::union(vec![Type::int(), Type::Scalar(ScalarType::Bool)]);
    let diags = check(vec![TemplateTag::new("T", bound)], false);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::UnsupportedBoundKind);
    assert_eq!(diags[0].message, "unsupported-bound T int|bool");
}

#[test]
fn test_union_of_classes_reports_each_bad_member_and_shape() {
    let bound = Type::union(vec![
        Type::object("Loggable"),
        Type::object("Countable"),
        Type::object("Nope"),
    ]);
    let diags = check(vec![TemplateTag::new("T", bound)], false);

    let messages: Vec<&str> = diags.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "invalid-bound T Loggable",
            "invalid-bound T Nope",
            "unsupported-bound T Loggable|Countable|Nope",
        ]
    );
}

#[test]
fn test_case_check_disabled_reports_nothing() {
    let diags = check(vec![TemplateTag::new("T", Type::object("foo\\bar"))], false);
    assert!(diags.is_empty(), "got: {:?}", diags);
}

#[test]
fn test_case_check_output_passed_through_verbatim() {
    let table = symbols();
    let canned = vec![
        Diagnostic::at(DiagnosticKind::CaseMismatch, "first", &site()),
        Diagnostic::at(DiagnosticKind::CaseMismatch, "second", &site()),
    ];
    let case_check = RecordingCaseCheck::new(canned.clone());

    let diags = check_with(
        &table,
        &case_check,
        true,
        vec![TemplateTag::new("T", Type::object("Countable"))],
    );

    assert_eq!(diags, canned);
}

#[test]
fn test_case_check_sees_every_referenced_class() {
    let table = symbols();
    let case_check = RecordingCaseCheck::new(vec![]);

    let diags = check_with(
        &table,
        &case_check,
        true,
        vec![
            TemplateTag::new("T", Type::object("Missing")),
            TemplateTag::new(
                "U",
                Type::intersection(vec![Type::object("Countable"), Type::object("Loggable")]),
            ),
        ],
    );

    assert_eq!(case_check.seen(), vec!["Missing", "Countable", "Loggable"]);
    assert_eq!(count(&diags, DiagnosticKind::InvalidBoundReference), 2);
}

#[test]
fn test_case_check_disabled_never_consults_checker() {
    let table = symbols();
    let case_check = RecordingCaseCheck::new(vec![]);

    check_with(&table, &case_check, false, vec![TemplateTag::new("T", Type::object("Countable"))]);

    assert!(case_check.seen().is_empty());
}

#[test]
fn test_end_to_end_wrong_case_bound() {
    let diags = check(vec![TemplateTag::new("T", Type::object("foo\\bar"))], true);

    assert_eq!(count(&diags, DiagnosticKind::NameCollidesWithClass), 0);
    assert_eq!(count(&diags, DiagnosticKind::NameCollidesWithTypeAlias), 0);
    assert_eq!(count(&diags, DiagnosticKind::InvalidBoundReference), 0);
    assert_eq!(count(&diags, DiagnosticKind::UnsupportedBoundKind), 0);
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::CaseMismatch);
    assert_eq!(
        diags[0].message,
        "Class Foo\\Bar referenced with incorrect case: foo\\bar."
    );
}

#[test]
fn test_end_to_end_alias_named_parameter() {
    let diags = check(vec![TemplateTag::unbounded("MyAlias")], true);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::NameCollidesWithTypeAlias);
    assert_eq!(diags[0].message, "same-as-alias MyAlias");
}

#[test]
fn test_diagnostics_follow_declaration_order() {
    let diags = check(
        vec![
            TemplateTag::new("B", Type::string()),
            TemplateTag::new("A", Type::object("Gone")),
            TemplateTag::new("C", Type::float()),
        ],
        false,
    );

    let messages: Vec<&str> = diags.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "unsupported-bound B string",
            "invalid-bound A Gone",
            "unsupported-bound C float",
        ]
    );
}

#[test]
fn test_diagnostics_attached_to_site() {
    let diags = check(vec![TemplateTag::new("T", Type::int())], false);
    assert_eq!(diags[0].span, site().span);
    assert_eq!(diags[0].file_id, site().file_id);
}

#[test]
fn test_degenerate_composite_bounds() {
    let diags = check(
        vec![
            TemplateTag::new("T", Type::union(vec![Type::object("Countable")])),
            TemplateTag::new("U", Type::union(vec![])),
        ],
        false,
    );

    let messages: Vec<&str> = diags.iter().map(|d| d.message.as_str()).collect();
    assert_eq!(messages, vec!["unsupported-bound U never"]);
}
