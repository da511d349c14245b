use super::*;
use pretty_assertions::assert_eq;
use rest_diagnostic::{DiagnosticConfig, ErrorCode};

#[test]
fn set_key_defaults_to_property_name() {
    let mut program = Program::new();
    let string = program.define_scalar("string");
    let org = program.define_model("Org");
    let id = program.add_property(org, "id", string).expect("id");

    assert!(!program.is_key(id));
    program.set_key(id, None).expect("key");

    assert!(program.is_key(id));
    assert_eq!(program.key_name(id).map(|n| program.name_str(n)), Some("id"));
    let decorators = &program.graph().property(id).expect("id").decorators;
    assert_eq!(decorators, &vec![DecoratorApplication::bare(KEY_DECORATOR)]);
}

#[test]
fn set_key_with_declared_name() {
    let mut program = Program::new();
    let string = program.define_scalar("string");
    let org = program.define_model("Org");
    let name = program.add_property(org, "name", string).expect("name");

    program.set_key(name, Some("orgName")).expect("key");

    assert_eq!(
        program.key_name(name).map(|n| program.name_str(n)),
        Some("orgName")
    );
    // The in-model name is untouched.
    let prop = program.graph().property(name).expect("name");
    assert_eq!(program.name_str(prop.name), "name");
}

#[test]
fn insert_property_reapplies_key_state() {
    let mut program = Program::new();
    let string = program.define_scalar("string");
    let org = program.define_model("Org");
    let params = program.define_model("Params");
    let name = program.add_property(org, "name", string).expect("name");
    program.set_key(name, Some("orgName")).expect("key");

    let mut copy = program.graph().clone_property(name).expect("clone");
    copy.name = program.intern("orgName");
    let inserted = program.insert_property(params, copy).expect("insert");
    let clone = inserted.id;

    assert_eq!(inserted.replaced, None);
    assert_ne!(clone, name);
    assert!(program.is_key(clone));
    assert_eq!(program.key_name(clone), program.key_name(name));
    assert_eq!(program.graph().property(clone).expect("clone").model, Some(params));
}

#[test]
fn insert_property_without_key_is_not_key() {
    let mut program = Program::new();
    let string = program.define_scalar("string");
    let params = program.define_model("Params");
    let def = PropertyDef::new(program.intern("filter"), string, Span::DUMMY);
    let id = program.insert_property(params, def).expect("insert").id;
    assert!(!program.is_key(id));
}

#[test]
fn insert_property_detaches_the_replaced_key() {
    let mut program = Program::new();
    let string = program.define_scalar("string");
    let org = program.define_model("Org");
    let params = program.define_model("Params");
    let id = program.add_property(org, "id", string).expect("id");
    program.set_key(id, None).expect("key");

    let copy = program.graph().clone_property(id).expect("clone");
    let first = program.insert_property(params, copy.clone()).expect("first");
    let second = program.insert_property(params, copy).expect("second");

    assert_eq!(second.replaced, Some(first.id));
    assert!(!program.is_key(first.id));
    assert!(program.is_key(second.id));
    assert_eq!(program.graph().property(first.id).expect("first").model, None);
    assert_eq!(program.graph().model(params).expect("params").properties.len(), 1);
}

#[test]
fn validate_model_target_reports_invalid_target() {
    let mut program = Program::new();
    let string = program.define_scalar("string");
    let org = program.define_model("Org");

    assert_eq!(program.validate_model_target(org, "@parentResource"), Ok(true));
    assert!(program.diagnostics().is_empty());

    assert_eq!(
        program.validate_model_target(string, "@parentResource"),
        Ok(false)
    );
    let diags = program.take_diagnostics();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E1001);
    assert_eq!(diags[0].target, Some(Target::Type(string)));
    assert_eq!(diags[0].data("expected"), Some("Model"));
    assert_eq!(diags[0].data("found"), Some("Scalar"));
}

#[test]
fn validate_model_target_on_property() {
    let mut program = Program::new();
    let string = program.define_scalar("string");
    let org = program.define_model("Org");
    let id = program.add_property(org, "id", string).expect("id");

    assert_eq!(program.validate_model_target(id, "@parentResource"), Ok(false));
    assert_eq!(
        program.diagnostics().peek().next().and_then(|d| d.data("found")),
        Some("ModelProperty")
    );
}

#[test]
fn foreign_ids_are_errors_not_diagnostics() {
    let mut program = Program::new();
    let missing = TypeId::from_raw(9);
    assert_eq!(
        program.validate_model_target(missing, "@parentResource"),
        Err(TypeGraphError::UnknownType(missing))
    );
    assert!(program.diagnostics().is_empty());
    assert_eq!(program.type_name(missing), "<unknown>");
}

#[test]
fn programs_are_independent() {
    let mut a = Program::new();
    let mut b = Program::with_options(
        ProgramOptions::default().with_diagnostics(DiagnosticConfig::strict(5)),
    );
    let scalar = a.define_scalar("string");
    a.validate_model_target(scalar, "@parentResource").expect("validate");

    assert!(a.has_errors().is_some());
    assert!(b.has_errors().is_none());
    assert_eq!(b.options().diagnostics.error_limit, 5);
    assert_eq!(b.graph().type_count(), 0);
    assert_eq!(b.intern("string"), b.intern("string"));
}
