//! Class/module companion linking.

use crate::helpers::symbol_assertions::*;
use facade::{FacadeGraph, Name};

#[test]
fn test_class_then_module_links_both_ways() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Foo");
    assert_eq!(graph.companion(class), None);
    let module = graph.get_module_or_create(root, "Foo");
    assert_companions(&graph, class, module);
}

#[test]
fn test_module_then_class_links_both_ways() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let module = graph.get_module_or_create(root, "Foo");
    assert_eq!(graph.companion(module), None);
    let class = graph.get_class_or_create(root, "Foo");
    assert_companions(&graph, class, module);
}

#[test]
fn test_find_module_after_create() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Foo");
    let foo = Name::new("Foo");
    assert_eq!(graph.find_module(root, &foo), None);

    let module = graph.get_module_or_create(root, "Foo");
    assert_eq!(graph.find_module(root, &foo), Some(module));
    assert_companions(&graph, class, module);
}

#[test]
fn test_pair_is_unique_per_name() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Foo");
    let module = graph.get_module_or_create(root, "Foo");
    // Neither side can be created twice, so the pair stays as it was
    assert_eq!(graph.get_class_or_create(root, "Foo"), class);
    assert_eq!(graph.get_module_or_create(root, "Foo"), module);
    assert_companions(&graph, class, module);
    assert_eq!(graph.members(root).len(), 2);
}

#[test]
fn test_different_names_do_not_link() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Foo");
    let module = graph.get_module_or_create(root, "Bar");
    assert_eq!(graph.companion(class), None);
    assert_eq!(graph.companion(module), None);
}

#[test]
fn test_companion_survives_refinement() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Foo");
    let module = graph.get_module_or_create(root, "Foo");
    graph.new_field(module, "default");
    graph.class_mut(class).expect("class").is_trait = false;
    assert_companions(&graph, class, module);
}
