//! Get-or-create semantics and member ordering.

use crate::helpers::symbol_assertions::*;
use facade::{FacadeGraph, Name, QualifiedName, SymbolKind};
use rstest::rstest;

#[rstest]
#[case("Foo")]
#[case("type")]
#[case("anon$1")]
#[case("")]
fn test_get_class_or_create_twice_returns_same(#[case] name: &str) {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let first = graph.get_class_or_create(root, name);
    assert_eq!(graph.members(root).len(), 1);
    let second = graph.get_class_or_create(root, name);
    assert_eq!(first, second);
    assert_eq!(graph.members(root).len(), 1);
}

#[rstest]
#[case("Foo")]
#[case("object")]
fn test_get_module_or_create_twice_returns_same(#[case] name: &str) {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let first = graph.get_module_or_create(root, name);
    let second = graph.get_module_or_create(root, name);
    assert_eq!(first, second);
    assert_eq!(graph.members(root).len(), 1);
}

#[test]
fn test_package_chain() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = graph.get_package_or_create(root, "a");
    let b = graph.get_package_or_create(a, "b");

    assert_eq!(graph.members(root), &[a]);
    assert_eq!(graph.members(a), &[b]);
    assert!(graph.members(b).is_empty());
    assert_eq!(graph.qualified_name(b).to_string(), "a.b");

    let (id, symbol) = get_symbol(&graph, "a.b");
    assert_eq!(id, b);
    assert_symbol_kind(symbol, SymbolKind::Package);
}

#[test]
fn test_package_chain_is_reused() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = graph.get_package_or_create(root, "a");
    let b = graph.get_package_or_create(a, "b");
    let a_again = graph.get_package_or_create(root, "a");
    let b_again = graph.get_package_or_create(a_again, "b");
    assert_eq!((a, b), (a_again, b_again));
    assert_eq!(graph.slot_count(), 3);
}

#[test]
fn test_find_reports_absence() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let foo = Name::new("Foo");
    assert_eq!(graph.find_class(root, &foo), None);
    assert_eq!(graph.find_module(root, &foo), None);
    assert_eq!(graph.find_package(root, &foo), None);

    let class = graph.get_class_or_create(root, foo.clone());
    assert_eq!(graph.find_class(root, &foo), Some(class));
    assert_eq!(graph.find_module(root, &foo), None);
}

#[test]
fn test_fields_and_methods_always_append() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Foo");
    let f1 = graph.new_field(class, "x");
    let f2 = graph.new_field(class, "x");
    let m1 = graph.new_method(class, "run");
    let m2 = graph.new_method(class, "run");

    assert_eq!(graph.members(class), &[f1, f2, m1, m2]);
    assert_eq!(member_names(&graph, class), vec!["x", "x", "run", "run"]);
}

#[test]
fn test_members_keep_declaration_order() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    graph.get_module_or_create(root, "Zeta");
    graph.add_comment(root, "between");
    graph.get_package_or_create(root, "alpha");
    graph.get_class_or_create(root, "Mid");
    graph.new_field(root, "last");

    assert_eq!(
        member_names(&graph, root),
        vec!["Zeta", "/*", "alpha", "Mid", "last"]
    );
}

#[test]
fn test_refinement_after_creation() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Widget");
    graph.new_field(class, "size");

    // A later declaration about the same class adds to it
    let again = graph.get_class_or_create(root, "Widget");
    graph.new_method(again, "render");
    graph
        .class_mut(again)
        .expect("class")
        .parents
        .push(facade::TypeRef::object());

    assert_eq!(member_names(&graph, class), vec!["size", "render"]);
    assert_eq!(graph.class(class).expect("class").parents.len(), 1);
}

#[test]
fn test_anon_names_are_unique_within_container() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let mut names = Vec::new();
    for _ in 0..3 {
        let name = graph.new_anon_member_name(root);
        graph.get_class_or_create(root, name.clone());
        names.push(name.as_str().to_string());
    }
    assert_eq!(names, vec!["anon$1", "anon$2", "anon$3"]);
    assert_eq!(graph.members(root).len(), 3);
}

#[test]
fn test_resolve_matches_qualified_name() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = graph.get_package_or_create(root, "a");
    let class = graph.get_class_or_create(a, "Foo");
    let module = graph.get_module_or_create(class, "Inner");

    let path = graph.qualified_name(module);
    assert_eq!(path, QualifiedName::ROOT.dot("a").dot("Foo").dot("Inner"));
    assert_eq!(graph.resolve(&path), Some(module));
}
