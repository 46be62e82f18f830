use std::future::Future;

use machine_api_ext as k8s;
use machine_api_kubeapi::KubeApi;

use k8s::machinev1;
use k8s::metav1;
use k8s::TimeExt as _;

pub use max_age::{MaxAge, MaxAgeError};
pub use report::Report;
pub use selection::{Selection, StaleMachine};

mod max_age;
mod report;
mod selection;

/// Source of `Machine` objects.
pub trait MachineFetcher {
    type Error: std::error::Error + Send + Sync + 'static;

    fn list_machines(
        &self,
        namespace: &str,
    ) -> impl Future<Output = Result<Vec<machinev1::Machine>, Self::Error>> + Send;
}

impl MachineFetcher for KubeApi {
    type Error = kube::Error;

    fn list_machines(
        &self,
        namespace: &str,
    ) -> impl Future<Output = kube::Result<Vec<machinev1::Machine>>> + Send {
        Self::list_machines(self, namespace)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError<E> {
    #[error("failed to list machines in namespace {namespace}: {source}")]
    List {
        namespace: String,
        #[source]
        source: E,
    },
}

#[derive(Debug)]
pub struct OldestMachineReporter<F> {
    fetcher: F,
    namespace: String,
    max_age: MaxAge,
}

impl<F: MachineFetcher> OldestMachineReporter<F> {
    /// Reporter listing machines in the machine-api namespace through
    /// `fetcher`.
    pub fn new(fetcher: F, max_age: MaxAge) -> Self {
        Self {
            fetcher,
            namespace: machinev1::MACHINE_API_NAMESPACE.to_string(),
            max_age,
        }
    }

    pub fn namespace(self, namespace: impl ToString) -> Self {
        Self {
            namespace: namespace.to_string(),
            ..self
        }
    }

    pub fn max_age(&self) -> MaxAge {
        self.max_age
    }

    /// Fetch the machines once and report on them as of now.
    pub async fn report(&self) -> Result<Report, ReportError<F::Error>> {
        self.report_at(&metav1::Time::now()).await
    }

    /// Fetch the machines once and report on them as of `now`.
    pub async fn report_at(&self, now: &metav1::Time) -> Result<Report, ReportError<F::Error>> {
        let namespace = self.namespace.as_str();
        let machines = self
            .fetcher
            .list_machines(namespace)
            .await
            .map_err(|source| ReportError::List {
                namespace: namespace.to_string(),
                source,
            })?;
        tracing::debug!(namespace, count = machines.len(), "Fetched machines");
        let selection = Selection::select(machines, now, self.max_age);
        match selection.oldest() {
            Some(oldest) if !oldest.role().is_classified() => {
                tracing::info!(name = oldest.name(), "Oldest machine has no recognized role");
            }
            Some(_) => {}
            None => tracing::info!(max_age = %self.max_age, "No stale machines found"),
        }
        Ok(Report::new(selection))
    }
}
