use super::*;

const MACHINE: &str = r#"{
    "apiVersion": "machine.openshift.io/v1beta1",
    "kind": "Machine",
    "metadata": {
        "name": "ocp-abcde-worker-us-east-1a-x7k2p",
        "namespace": "openshift-machine-api",
        "creationTimestamp": "2025-01-02T03:04:05Z",
        "annotations": {
            "machine.openshift.io/instance-state": "running"
        },
        "labels": {
            "machine.openshift.io/cluster-api-cluster": "ocp-abcde",
            "machine.openshift.io/cluster-api-machine-role": "worker",
            "machine.openshift.io/cluster-api-machine-type": "worker"
        }
    },
    "spec": {
        "providerID": "aws:///us-east-1a/i-0123456789abcdef0",
        "providerSpec": {
            "value": {
                "instanceType": "m6i.xlarge"
            }
        }
    },
    "status": {
        "phase": "Running",
        "nodeRef": {
            "kind": "Node",
            "name": "ip-10-0-1-23.ec2.internal"
        }
    }
}"#;

#[test]
fn decode_machine() {
    let machine: Machine = serde_json::from_str(MACHINE).unwrap();
    assert_eq!(
        machine.metadata.name.as_deref(),
        Some("ocp-abcde-worker-us-east-1a-x7k2p")
    );
    assert!(machine.metadata.creation_timestamp.is_some());
    assert_eq!(
        machine.spec.provider_id.as_deref(),
        Some("aws:///us-east-1a/i-0123456789abcdef0")
    );
    let status = machine.status.as_ref().unwrap();
    assert_eq!(status.phase.as_deref(), Some("Running"));
    assert_eq!(
        status.node_ref.as_ref().and_then(|node| node.name.as_deref()),
        Some("ip-10-0-1-23.ec2.internal")
    );
    assert_eq!(machine.role(), Role::Worker);
    assert!(!machine.is_deleting());
}

#[test]
fn decode_deleting_machine_without_spec() {
    let json = r#"{
        "metadata": {
            "name": "ocp-abcde-master-0",
            "creationTimestamp": "2025-01-02T03:04:05Z",
            "deletionTimestamp": "2025-02-02T03:04:05Z",
            "labels": {
                "machine.openshift.io/cluster-api-machine-role": "master"
            }
        }
    }"#;
    let machine: Machine = serde_json::from_str(json).unwrap();
    assert_eq!(machine.spec, MachineSpec::default());
    assert!(machine.status.is_none());
    assert!(machine.is_deleting());
    assert_eq!(machine.role(), Role::Master);
}

#[test]
fn role_label() {
    assert_eq!(
        MACHINE_ROLE_LABEL,
        "machine.openshift.io/cluster-api-machine-role"
    );
    assert_eq!(Role::from_label(Some("worker")), Role::Worker);
    assert_eq!(Role::from_label(Some("master")), Role::Master);
    assert_eq!(Role::from_label(Some("infra")), Role::Unclassified);
    assert_eq!(Role::from_label(Some("")), Role::Unclassified);
    assert_eq!(Role::from_label(None), Role::Unclassified);
    assert_eq!(Machine::default().role(), Role::Unclassified);
}

#[test]
fn role_display() {
    assert_eq!(Role::Worker.to_string(), "worker");
    assert_eq!(Role::Master.to_string(), "master");
    assert_eq!(Role::Unclassified.to_string(), "unclassified");
    assert!(Role::Master.is_classified());
    assert!(!Role::Unclassified.is_classified());
}

#[test]
fn resource_metadata() {
    use k8s_openapi::Resource as _;

    assert_eq!(Machine::API_VERSION, "machine.openshift.io/v1beta1");
    assert_eq!(Machine::GROUP, MACHINE_API_GROUP);
    assert_eq!(Machine::KIND, "Machine");
    assert_eq!(Machine::URL_PATH_SEGMENT, "machines");
}
