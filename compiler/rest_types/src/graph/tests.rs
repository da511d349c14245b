use super::*;
use pretty_assertions::assert_eq;
use rest_ir::StringInterner;

struct Fixture {
    interner: StringInterner,
    graph: TypeGraph,
    string: TypeId,
}

impl Fixture {
    fn new() -> Self {
        let mut interner = StringInterner::new();
        let mut graph = TypeGraph::new();
        let string = graph.add_scalar(interner.intern("string"), Span::DUMMY);
        Fixture {
            interner,
            graph,
            string,
        }
    }

    fn name(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn names_of(&self, model: TypeId) -> Vec<&str> {
        self.graph
            .model(model)
            .expect("model")
            .properties
            .keys()
            .map(|n| self.interner.lookup(*n))
            .collect()
    }
}

#[test]
fn properties_keep_declaration_order() {
    let mut fx = Fixture::new();
    let org = fx.name("Org");
    let model = fx.graph.add_model(org, Span::new(0, 10));
    for prop in ["name", "id", "createdAt"] {
        let n = fx.name(prop);
        fx.graph
            .add_property(model, n, fx.string, Span::DUMMY)
            .expect("add property");
    }
    assert_eq!(fx.names_of(model), vec!["name", "id", "createdAt"]);
}

#[test]
fn set_property_replaces_in_place() {
    let mut fx = Fixture::new();
    let model_name = fx.name("Params");
    let model = fx.graph.add_model(model_name, Span::DUMMY);
    let a = fx.name("a");
    let b = fx.name("b");
    let old = fx.graph.add_property(model, a, fx.string, Span::DUMMY).expect("a");
    fx.graph.add_property(model, b, fx.string, Span::DUMMY).expect("b");

    let replacement = fx.graph.alloc_property(PropertyDef::new(a, fx.string, Span::DUMMY));
    let replaced = fx.graph.set_property(model, a, replacement).expect("set");

    assert_eq!(replaced, Some(old));
    assert_eq!(fx.names_of(model), vec!["a", "b"]);
    assert_eq!(fx.graph.find_property(model, a).expect("find"), Some(replacement));
    assert_eq!(
        fx.graph.property(replacement).expect("prop").model,
        Some(model)
    );
    assert_eq!(fx.graph.property(old).expect("old").model, None);
}

#[test]
fn set_property_again_keeps_attachment() {
    let mut fx = Fixture::new();
    let model_name = fx.name("Params");
    let model = fx.graph.add_model(model_name, Span::DUMMY);
    let a = fx.name("a");
    let id = fx.graph.add_property(model, a, fx.string, Span::DUMMY).expect("a");

    let replaced = fx.graph.set_property(model, a, id).expect("set");

    assert_eq!(replaced, Some(id));
    assert_eq!(fx.graph.property(id).expect("a").model, Some(model));
}

#[test]
fn clone_property_is_independent() {
    let mut fx = Fixture::new();
    let model_name = fx.name("Org");
    let model = fx.graph.add_model(model_name, Span::DUMMY);
    let id_name = fx.name("id");
    let source = fx
        .graph
        .add_property(model, id_name, fx.string, Span::new(4, 6))
        .expect("id");

    let mut copy = fx.graph.clone_property(source).expect("clone");
    assert_eq!(copy.source, Some(source));
    assert_eq!(copy.model, None);
    assert_eq!(copy.span, Span::new(4, 6));

    copy.name = fx.name("orgId");
    copy.decorators.push(DecoratorApplication::bare("@path"));
    let original = fx.graph.property(source).expect("source");
    assert_eq!(original.name, id_name);
    assert!(original.decorators.is_empty());
}

#[test]
fn instantiate_records_template_args() {
    let mut fx = Fixture::new();
    let member_name = fx.name("Member");
    let member = fx.graph.add_model(member_name, Span::DUMMY);
    let keys_of = fx.name("KeysOf");
    let inst = fx.graph.instantiate(keys_of, vec![member], Span::DUMMY);

    let model = fx.graph.model(inst).expect("instance");
    assert_eq!(model.template_args(), &[member]);
    assert_eq!(model.name, keys_of);
    assert!(fx.graph.model(member).expect("member").template_args().is_empty());
}

#[test]
fn lookups_report_invariant_violations() {
    let fx = Fixture::new();
    let missing = TypeId::from_raw(42);
    assert_eq!(fx.graph.kind(missing), Err(TypeGraphError::UnknownType(missing)));
    assert_eq!(
        fx.graph.model(fx.string).map(|m| m.name),
        Err(TypeGraphError::NotAModel(fx.string))
    );
    assert_eq!(
        fx.graph.property(PropertyId::from_raw(0)).map(|p| p.name),
        Err(TypeGraphError::UnknownProperty(PropertyId::from_raw(0)))
    );
    assert!(!fx.graph.is_model(missing));
}

#[test]
fn add_property_to_scalar_leaves_no_orphan() {
    let mut fx = Fixture::new();
    let id_name = fx.name("id");
    let before = fx.graph.property_count();
    let result = fx.graph.add_property(fx.string, id_name, fx.string, Span::DUMMY);
    assert_eq!(result, Err(TypeGraphError::NotAModel(fx.string)));
    assert_eq!(fx.graph.property_count(), before);
}

#[test]
fn kind_names() {
    let mut fx = Fixture::new();
    let n = fx.name("Org");
    let org = fx.graph.add_model(n, Span::DUMMY);
    assert_eq!(fx.graph.kind(org).map(TypeKind::kind_name), Ok("Model"));
    assert_eq!(fx.graph.kind(fx.string).map(TypeKind::kind_name), Ok("Scalar"));
}
