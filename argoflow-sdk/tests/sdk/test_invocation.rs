//! Tests for invocation-context queries

use argoflow_sdk::{EntryPointPolicy, Error, InvocationStack};

#[test]
fn test_invocation_location_inner_frame() {
    let mut calls = InvocationStack::new();
    calls.enter("main");
    calls.enter("test_invocation_location");

    let (name, location) = calls.invocation_location().unwrap();
    assert_eq!(name, "test-invocation-location");
    assert!(location.file.ends_with("test_invocation.rs"));
}

#[test]
fn test_workflow_filename_from_entry_point() {
    let mut calls = InvocationStack::new();
    calls.enter("main");
    calls.enter("build_step");

    // Both frames live in this file; the recognized entry point wins.
    assert_eq!(calls.workflow_filename().unwrap(), "test-invocation");
}

#[test]
fn test_workflow_filename_with_custom_policy() {
    let policy = EntryPointPolicy::recognize(["run_pipeline"]);
    let mut calls = InvocationStack::with_policy(policy);
    calls.enter("setup");
    calls.enter("run_pipeline");
    calls.enter("build_step");

    assert_eq!(calls.root_caller().unwrap().name, "run_pipeline");
}

#[test]
fn test_stack_exhausted_is_reported() {
    let calls = InvocationStack::new();
    let err = calls.invocation_location().unwrap_err();
    assert!(matches!(err, Error::StackExhausted(_)));
    assert!(err.to_string().contains("no caller frame available"));
}

#[test]
fn test_enter_exit_balance() {
    let mut calls = InvocationStack::new();
    assert!(calls.is_empty());

    calls.enter("main");
    calls.enter("helper");
    assert_eq!(calls.depth(), 2);

    assert_eq!(calls.exit().unwrap().name, "helper");
    assert_eq!(calls.exit().unwrap().name, "main");
    assert!(calls.exit().is_none());
    assert!(calls.is_empty());
}
