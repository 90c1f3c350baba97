//! Tests for GPU-request classification over parsed YAML

use argoflow_sdk::{gpu_requested, Error};

use super::common::yaml;

#[test]
fn test_gpu_requested_none() {
    assert!(!gpu_requested(None).unwrap());
}

#[test]
fn test_gpu_requested_empty_mapping() {
    assert!(!gpu_requested(Some(&yaml("{}"))).unwrap());
}

#[test]
fn test_gpu_requested_cpu_only() {
    assert!(!gpu_requested(Some(&yaml("cpu: 1"))).unwrap());
    assert!(!gpu_requested(Some(&yaml("cpu: 1\nmemory: 2"))).unwrap());
}

#[test]
fn test_gpu_requested_gpu_key() {
    assert!(gpu_requested(Some(&yaml("gpu: 1"))).unwrap());
    assert!(gpu_requested(Some(&yaml("cpu: 1\nmemory: 2\ngpu: 1"))).unwrap());
}

#[test]
fn test_gpu_requested_normalizes_keys() {
    assert!(gpu_requested(Some(&yaml("GPU: 1"))).unwrap());
    assert!(gpu_requested(Some(&yaml("\" gpu \": 1"))).unwrap());
}

#[test]
fn test_gpu_requested_quantity_is_irrelevant() {
    assert!(gpu_requested(Some(&yaml("gpu: 0"))).unwrap());
    assert!(gpu_requested(Some(&yaml("gpu: \"2\""))).unwrap());
}

#[test]
fn test_gpu_requested_rejects_scalar_spec() {
    let err = gpu_requested(Some(&yaml("\"cpu=1\""))).unwrap_err();
    assert!(matches!(err, Error::ResourceSpecType { found: "string" }));
    assert_eq!(
        err.to_string(),
        "resource request must be a mapping, got string"
    );
}

#[test]
fn test_gpu_requested_rejects_sequence_spec() {
    let err = gpu_requested(Some(&yaml("- gpu"))).unwrap_err();
    assert!(matches!(err, Error::ResourceSpecType { found: "sequence" }));
}
