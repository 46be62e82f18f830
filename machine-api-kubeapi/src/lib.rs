use std::fmt::Debug;
use std::path::Path;

use kube::api;
use kube::config;
use machine_api_ext as k8s;

use k8s::machinev1;

/// Failure to turn cluster credentials into a working client.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load kubeconfig: {0}")]
    Kubeconfig(#[from] config::KubeconfigError),
    #[error("failed to create kube client: {0}")]
    Client(#[from] kube::Error),
}

pub struct KubeApi {
    list_params: api::ListParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    ///
    /// The client configuration is inferred the usual way: `KUBECONFIG`,
    /// then `~/.kube/config`, then the in-cluster service account.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), machine_api_kubeapi::ConfigError> {
    /// let api = machine_api_kubeapi::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> Result<Self, ConfigError> {
        let client = kube::Client::try_default().await?;
        Ok(Self::with_client(client))
    }

    /// Create a KubeApi from an explicit kubeconfig file.
    ///
    /// `context` selects a kubeconfig context other than the current one.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), machine_api_kubeapi::ConfigError> {
    /// let api = machine_api_kubeapi::KubeApi::from_kubeconfig("/home/me/.kube/config", None).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_kubeconfig(
        path: impl AsRef<Path>,
        context: Option<String>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), ?context, "Loading kubeconfig");
        let kubeconfig = config::Kubeconfig::read_from(path)?;
        let options = config::KubeConfigOptions {
            context,
            ..k8s::default()
        };
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &options).await?;
        let client = kube::Client::try_from(config)?;
        Ok(Self::with_client(client))
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    ///
    /// The returned KubeApi is initialized with default `ListParams`
    /// and uses `client` for all Kubernetes interactions.
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            client,
        }
    }

    /// Lists all Machines in `namespace`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use machine_api_kubeapi::KubeApi;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let api = KubeApi::new().await?;
    /// let machines = api.list_machines("openshift-machine-api").await?;
    /// println!("discovered {} machines", machines.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_machines(&self, namespace: &str) -> kube::Result<Vec<machinev1::Machine>> {
        let lp = self.list_params();
        let machines = self.machines(namespace).list(lp).await?.items;
        tracing::debug!(namespace, count = machines.len(), "Listed machines");
        Ok(machines)
    }

    fn machines(&self, namespace: &str) -> api::Api<machinev1::Machine> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}

#[cfg(test)]
mod tests;
