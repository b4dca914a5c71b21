//! Root server label parsing

use crate::{QueryError, Result};
use k8s_openapi::api::core::v1::Node;
use rootserver_api::INSTANCE_IS_ROOT_SERVER;

/// Parse a boolean label value.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Whether `node` is labeled as a root server.
///
/// A missing label means the node is a regular cloud node. A label whose
/// value is not a boolean is an error naming the node and the value.
pub fn has_root_server_label(node: &Node) -> Result<bool> {
    let Some(value) = node
        .metadata
        .labels
        .as_ref()
        .and_then(|labels| labels.get(INSTANCE_IS_ROOT_SERVER))
    else {
        return Ok(false);
    };

    parse_bool(value).ok_or_else(|| QueryError::InvalidLabel {
        node: node_name(node).to_string(),
        label: INSTANCE_IS_ROOT_SERVER,
        value: value.clone(),
    })
}

/// Name of `node`, empty if unset
pub fn node_name(node: &Node) -> &str {
    node.metadata.name.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{labeled, node};
    use std::collections::BTreeMap;

    #[test]
    fn test_parse_bool_true_forms() {
        for value in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(value), Some(true), "value {value:?}");
        }
    }

    #[test]
    fn test_parse_bool_false_forms() {
        for value in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(value), Some(false), "value {value:?}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_values() {
        for value in ["", "yes", "no", "tRUE", " true", "2", "on"] {
            assert_eq!(parse_bool(value), None, "value {value:?}");
        }
    }

    #[test]
    fn test_missing_label_is_not_root_server() {
        assert!(!has_root_server_label(&node("cloud-1")).unwrap());
    }

    #[test]
    fn test_unrelated_labels_are_ignored() {
        let mut cloud = node("cloud-1");
        cloud.metadata.labels = Some(BTreeMap::from([(
            "kubernetes.io/hostname".to_string(),
            "cloud-1".to_string(),
        )]));
        assert!(!has_root_server_label(&cloud).unwrap());
    }

    #[test]
    fn test_true_label() {
        assert!(has_root_server_label(&labeled("root-1", "true")).unwrap());
    }

    #[test]
    fn test_false_label() {
        assert!(!has_root_server_label(&labeled("root-1", "false")).unwrap());
    }

    #[test]
    fn test_invalid_label_names_node_and_value() {
        let err = has_root_server_label(&labeled("root-1", "maybe")).unwrap_err();
        match &err {
            QueryError::InvalidLabel { node, label, value } => {
                assert_eq!(node, "root-1");
                assert_eq!(*label, INSTANCE_IS_ROOT_SERVER);
                assert_eq!(value, "maybe");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let message = err.to_string();
        assert!(message.contains("root-1"));
        assert!(message.contains("maybe"));
    }
}
