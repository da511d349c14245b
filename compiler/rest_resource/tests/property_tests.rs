//! Property-based tests for key chain cloning.
//!
//! Random parent chains verify that `ALL` on the leaf yields every level's key
//! root first, that `PARENT_ONLY` drops exactly the leaf key, and that reruns
//! never grow the target.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use rest_ir::TypeId;
use rest_resource::{copy_resource_key_parameters, parent_resource, ResourceContext};
use rest_types::Program;

/// Build `R0 <- R1 <- ... <- R{n-1}`; level `i` has key `k{i}` if `keyed[i]`.
/// Returns the leaf.
fn chain(program: &mut Program, cx: &mut ResourceContext, keyed: &[bool]) -> TypeId {
    let string = program.define_scalar("string");
    let mut parent = None;
    let mut leaf = string;
    for (i, &has_key) in keyed.iter().enumerate() {
        let model = program.define_model(&format!("R{i}"));
        if has_key {
            let id = program
                .add_property(model, &format!("k{i}"), string)
                .expect("key property");
            program.set_key(id, None).expect("key");
        }
        if let Some(parent) = parent {
            parent_resource(cx, program, model, parent).expect("parent");
        }
        parent = Some(model);
        leaf = model;
    }
    leaf
}

fn names(program: &Program, model: TypeId) -> Vec<String> {
    program
        .graph()
        .model(model)
        .expect("model")
        .properties
        .keys()
        .map(|n| program.name_str(*n).to_owned())
        .collect()
}

fn expected(keyed: &[bool], skip_leaf: bool) -> Vec<String> {
    let levels = if skip_leaf { keyed.len() - 1 } else { keyed.len() };
    keyed[..levels]
        .iter()
        .enumerate()
        .filter(|(_, has_key)| **has_key)
        .map(|(i, _)| format!("k{i}"))
        .collect()
}

proptest! {
    #[test]
    fn all_keys_root_first(keyed in prop::collection::vec(any::<bool>(), 1..24)) {
        let mut program = Program::new();
        let mut cx = ResourceContext::new();
        let leaf = chain(&mut program, &mut cx, &keyed);
        let target = program.instantiate("KeysOf", &[leaf]);

        copy_resource_key_parameters(&mut cx, &mut program, target, None).expect("copy");
        prop_assert_eq!(names(&program, target), expected(&keyed, false));

        copy_resource_key_parameters(&mut cx, &mut program, target, None).expect("rerun");
        prop_assert_eq!(names(&program, target), expected(&keyed, false));
        prop_assert!(program.diagnostics().is_empty());
    }

    #[test]
    fn parent_keys_drop_leaf(keyed in prop::collection::vec(any::<bool>(), 1..24)) {
        let mut program = Program::new();
        let mut cx = ResourceContext::new();
        let leaf = chain(&mut program, &mut cx, &keyed);
        let target = program.instantiate("ParentKeysOf", &[leaf]);

        copy_resource_key_parameters(&mut cx, &mut program, target, Some("parent"))
            .expect("copy");
        prop_assert_eq!(names(&program, target), expected(&keyed, true));
    }
}
