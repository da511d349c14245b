use super::*;
use pretty_assertions::assert_eq;

fn ty(raw: u32) -> TypeId {
    TypeId::from_raw(raw)
}

#[test]
fn unset_parent_is_absent() {
    let graph = ParentResourceGraph::new();
    assert_eq!(graph.parent(ty(1)), None);
    assert!(graph.is_empty());
}

#[test]
fn last_write_wins() {
    let mut graph = ParentResourceGraph::new();
    assert_eq!(graph.set_parent(ty(1), ty(2)), None);
    assert_eq!(graph.set_parent(ty(1), ty(3)), Some(ty(2)));
    assert_eq!(graph.parent(ty(1)), Some(ty(3)));
    assert_eq!(graph.len(), 1);
}

#[test]
fn ancestors_nearest_first() {
    let mut graph = ParentResourceGraph::new();
    graph.set_parent(ty(3), ty(2));
    graph.set_parent(ty(2), ty(1));

    assert_eq!(graph.ancestors(ty(3)).collect::<Vec<_>>(), vec![ty(2), ty(1)]);
    assert_eq!(graph.ancestors(ty(1)).count(), 0);
}

#[test]
fn ancestors_stop_at_a_cycle() {
    let mut graph = ParentResourceGraph::new();
    graph.set_parent(ty(1), ty(2));
    graph.set_parent(ty(2), ty(3));
    graph.set_parent(ty(3), ty(2));

    assert_eq!(graph.ancestors(ty(1)).collect::<Vec<_>>(), vec![ty(2), ty(3)]);
}

#[test]
fn self_parent_has_no_ancestors() {
    let mut graph = ParentResourceGraph::new();
    graph.set_parent(ty(1), ty(1));
    assert_eq!(graph.ancestors(ty(1)).count(), 0);
}
