use std::fs;
use std::path::PathBuf;

use super::*;

const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
- name: ocp
  cluster:
    server: https://api.ocp.example.com:6443
contexts:
- name: admin@ocp
  context:
    cluster: ocp
    user: admin
current-context: admin@ocp
users:
- name: admin
  user:
    token: sha256~not-a-real-token
"#;

fn kubeconfig_file(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "machine-api-kubeapi-{}-{name}.yaml",
        std::process::id()
    ));
    fs::write(&path, KUBECONFIG).unwrap();
    path
}

#[tokio::test]
async fn missing_kubeconfig() {
    let path = std::env::temp_dir().join("machine-api-kubeapi-does-not-exist.yaml");
    let err = KubeApi::from_kubeconfig(&path, None).await.unwrap_err();
    assert!(matches!(err, ConfigError::Kubeconfig(_)), "{err:?}");
    assert!(err.to_string().starts_with("failed to load kubeconfig"));
}

#[tokio::test]
async fn unknown_context() {
    let path = kubeconfig_file("unknown-context");
    let err = KubeApi::from_kubeconfig(&path, Some("nope".to_string()))
        .await
        .unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err, ConfigError::Kubeconfig(_)), "{err:?}");
}
