//! Canonical text form of whole graphs.

use crate::helpers::graph_fixtures::*;
use facade::{FacadeGraph, ParamSymbol, TypeRef};

#[test]
fn test_dom_fixture_snapshot() {
    let graph = dom_fixture();
    let expected = "\
package dom
  /* generated */
  trait EventTarget<E> // companion
    var `type`: String[]
    def dispatch(event: E[]): scala.Boolean[]
  object EventTarget // companion
    def `<init>`(): scala.Unit[]
";
    assert_eq!(graph.snapshot(graph.root()), expected);
}

#[test]
fn test_snapshot_of_sub_container() {
    let graph = dom_fixture();
    let (dom, _) = crate::helpers::symbol_assertions::get_symbol(&graph, "dom");
    let snapshot = graph.snapshot(dom);
    assert!(snapshot.starts_with("/* generated */\n"));
}

#[test]
fn test_snapshot_of_empty_graph() {
    let graph = FacadeGraph::new();
    assert_eq!(graph.snapshot(graph.root()), "");
}

#[test]
fn test_snapshot_of_concrete_class_with_varargs() {
    let mut graph = FacadeGraph::new();
    let root = graph.root();
    let class = graph.get_class_or_create(root, "Console");
    graph.class_mut(class).expect("class").is_trait = false;
    let log = graph.new_method(class, "log");
    {
        let method = graph.method_mut(log).expect("method");
        let mut rest = ParamSymbol::typed("args".into(), TypeRef::repeated(TypeRef::any()));
        rest.optional = true;
        method.params.push(rest);
        method.result_type = TypeRef::unit();
    }
    add_field(&mut graph, class, "count", TypeRef::number());

    assert_eq!(
        graph.snapshot(root),
        "class Console\n  def log(args: *[scala.scalajs.js.Any[]] = _): scala.Unit[]\n  var count: scala.Double[]\n"
    );
}
