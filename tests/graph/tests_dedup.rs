//! Duplicate method elimination.

use crate::helpers::graph_fixtures::add_method;
use facade::{FacadeGraph, Name, TypeParamSymbol, TypeRef};

#[test]
fn test_identical_methods_collapse_to_first() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let params = [("x", TypeRef::number())];
    let first = add_method(&mut graph, root, "bar", &params, TypeRef::string());
    let second = add_method(&mut graph, root, "bar", &params, TypeRef::string());

    assert!(graph.remove_if_duplicate(root, second));
    assert_eq!(graph.members(root), &[first]);
    assert_eq!(graph.symbol(first).name(), Some(&Name::new("bar")));
}

#[test]
fn test_overloads_with_different_param_names_survive() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = add_method(&mut graph, root, "on", &[("x", TypeRef::number())], TypeRef::unit());
    let b = add_method(&mut graph, root, "on", &[("y", TypeRef::number())], TypeRef::unit());
    assert!(!graph.remove_if_duplicate(root, b));
    assert_eq!(graph.members(root), &[a, b]);
}

#[test]
fn test_overloads_differing_only_in_param_type_collapse() {
    // Parameter equality is by name, so these count as the same signature
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = add_method(&mut graph, root, "on", &[("x", TypeRef::number())], TypeRef::unit());
    let b = add_method(&mut graph, root, "on", &[("x", TypeRef::string())], TypeRef::unit());
    assert!(graph.remove_if_duplicate(root, b));
    assert_eq!(graph.members(root), &[a]);
}

#[test]
fn test_result_type_and_type_params_matter() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = add_method(&mut graph, root, "get", &[], TypeRef::number());
    let b = add_method(&mut graph, root, "get", &[], TypeRef::string());
    assert!(!graph.remove_if_duplicate(root, b));

    let c = add_method(&mut graph, root, "get", &[], TypeRef::number());
    graph
        .method_mut(c)
        .expect("method")
        .tparams
        .push(TypeParamSymbol::new(Name::new("T")));
    assert!(!graph.remove_if_duplicate(root, c));
    assert_eq!(graph.members(root), &[a, b, c]);
}

#[test]
fn test_annotations_do_not_matter() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = add_method(&mut graph, root, "apply", &[("i", TypeRef::number())], TypeRef::any());
    let b = add_method(&mut graph, root, "apply", &[("i", TypeRef::number())], TypeRef::any());
    {
        let method = graph.method_mut(b).expect("method");
        method.is_bracket_access = true;
        method.js_name = Some("item".to_string());
    }
    assert!(graph.remove_if_duplicate(root, b));
    assert_eq!(graph.members(root), &[a]);
}

#[test]
fn test_three_copies_remove_only_the_given_one() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let a = add_method(&mut graph, root, "f", &[], TypeRef::unit());
    let b = add_method(&mut graph, root, "f", &[], TypeRef::unit());
    let c = add_method(&mut graph, root, "f", &[], TypeRef::unit());

    assert!(graph.remove_if_duplicate(root, c));
    assert_eq!(graph.members(root), &[a, b]);
    assert!(graph.remove_if_duplicate(root, b));
    assert_eq!(graph.members(root), &[a]);
    assert!(!graph.remove_if_duplicate(root, a));
}

#[test]
fn test_dedup_keeps_surrounding_order() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let x = graph.new_field(root, "x");
    let a = add_method(&mut graph, root, "f", &[], TypeRef::unit());
    let y = graph.new_field(root, "y");
    let b = add_method(&mut graph, root, "f", &[], TypeRef::unit());
    let z = graph.new_field(root, "z");

    assert!(graph.remove_if_duplicate(root, b));
    assert_eq!(graph.members(root), &[x, a, y, z]);
}
