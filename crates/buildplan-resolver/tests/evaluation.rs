use std::collections::BTreeMap;

use buildplan_core::settings::ProjectSettings;
use buildplan_resolver::evaluation::EvaluationGraph;
use buildplan_util::errors::BuildError;

fn projects(decls: &[(&str, &[&str])]) -> BTreeMap<String, ProjectSettings> {
    decls.iter()
        .map(|(name, deps)| {
            (
                name.to_string(),
                ProjectSettings {
                    evaluation_depends_on: deps.iter().map(|d| d.to_string()).collect(),
                    ..Default::default()
                },
            )
        })
        .collect()
}

#[test]
fn primary_is_evaluated_first() {
    let p = projects(&[("app", &[]), ("camera", &[]), ("a_plugin", &[])]);
    let graph = EvaluationGraph::build(&p, Some("app")).unwrap();
    assert_eq!(graph.order().unwrap(), vec!["app", "a_plugin", "camera"]);
}

#[test]
fn ties_are_broken_by_name_without_primary() {
    let p = projects(&[("zeta", &[]), ("alpha", &[]), ("mid", &[])]);
    let graph = EvaluationGraph::build(&p, None).unwrap();
    assert_eq!(graph.order().unwrap(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn explicit_dependencies_are_respected() {
    let p = projects(&[("app", &[]), ("a", &["b"]), ("b", &[])]);
    let graph = EvaluationGraph::build(&p, Some("app")).unwrap();
    assert_eq!(graph.order().unwrap(), vec!["app", "b", "a"]);
    assert_eq!(graph.evaluated_before("a"), vec!["app", "b"]);
    assert!(graph.evaluated_before("app").is_empty());
}

#[test]
fn missing_primary_is_a_dependency_order_error() {
    let p = projects(&[("lib", &[])]);
    assert!(matches!(
        EvaluationGraph::build(&p, Some("app")),
        Err(BuildError::DependencyOrder { .. })
    ));
}

#[test]
fn undeclared_dependency_is_a_dependency_order_error() {
    let p = projects(&[("app", &["ghost"])]);
    let err = EvaluationGraph::build(&p, None).err().unwrap();
    assert!(err.to_string().contains("ghost"), "got: {err}");
}

#[test]
fn self_dependency_is_rejected() {
    let p = projects(&[("app", &["app"])]);
    assert!(EvaluationGraph::build(&p, None).is_err());
}

#[test]
fn cycle_is_reported_with_members() {
    let p = projects(&[("app", &[]), ("a", &["b"]), ("b", &["a"])]);
    let graph = EvaluationGraph::build(&p, Some("app")).unwrap();
    let err = graph.order().unwrap_err();
    assert!(matches!(err, BuildError::DependencyOrder { .. }));
    let msg = err.to_string();
    assert!(msg.contains("a, b"), "got: {msg}");
}

#[test]
fn primary_depending_on_a_subproject_is_a_cycle() {
    let p = projects(&[("app", &["lib"]), ("lib", &[])]);
    let graph = EvaluationGraph::build(&p, Some("app")).unwrap();
    assert!(graph.order().is_err());
}
