use pretty_assertions::assert_eq;
use serde_json::json;
use value_diff_core::{diff, DiffOp};

fn service_block(port: &str, description: &str) -> serde_json::Value {
    json!({
        "IsEnabled": "true",
        "Pool": [{
            "Name": "pool-1",
            "Description": description,
            "ServicePort": [
                {"Protocol": "HTTP", "Port": port},
                {"Protocol": "HTTPS", "Port": "443"}
            ]
        }]
    })
}

#[test]
fn nested_sequences_report_leaf_paths() {
    let left = service_block("8080", "A pool");
    let right = service_block("8081", "A pool that has been updated");

    let ops = diff(&left, &right);
    let paths: Vec<String> = ops.iter().map(|op| op.path().to_string()).collect();

    assert_eq!(
        paths,
        vec!["Pool[0].Description", "Pool[0].ServicePort[0].Port"]
    );
    assert!(ops.iter().all(|op| matches!(op, DiffOp::Changed { .. })));
}

#[test]
fn reordered_sequences_are_a_real_diff() {
    let left = json!({"routes": [{"Name": "a"}, {"Name": "b"}]});
    let right = json!({"routes": [{"Name": "b"}, {"Name": "a"}]});

    let ops = diff(&left, &right);
    assert_eq!(ops.len(), 2);
}

#[test]
fn whole_subtree_addition_is_one_op() {
    let left = json!({});
    let right = json!({"NatService": {"IsEnabled": "true", "NatRule": []}});

    let ops = diff(&left, &right);
    assert_eq!(ops.len(), 1);
    match &ops[0] {
        DiffOp::Added { path, new } => {
            assert_eq!(path.to_string(), "NatService");
            assert_eq!(new, &json!({"IsEnabled": "true", "NatRule": []}));
        }
        other => panic!("unexpected op: {other:?}"),
    }
}
