//! Tests for emptiness checks over parsed YAML

use argoflow_sdk::non_empty;

use super::common::yaml;

#[test]
fn test_non_empty_absent() {
    assert!(!non_empty(None));
    assert!(!non_empty(Some(&yaml("null"))));
}

#[test]
fn test_non_empty_containers() {
    assert!(!non_empty(Some(&yaml("[]"))));
    assert!(!non_empty(Some(&yaml("{}"))));
    assert!(non_empty(Some(&yaml("[a]"))));
    assert!(non_empty(Some(&yaml("a: b"))));
}

#[test]
fn test_non_empty_does_not_need_the_shape() {
    // Same call site handles both container shapes.
    for doc in ["- 1\n- 2", "cpu: 1"] {
        assert!(non_empty(Some(&yaml(doc))));
    }
}
