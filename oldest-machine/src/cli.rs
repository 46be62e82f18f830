use std::path::PathBuf;

use machine_api_ext::machinev1::MACHINE_API_NAMESPACE;
use machine_reporter::MaxAge;

/// Report the oldest OpenShift machine past a maximum age that is not
/// already being deleted.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// Path to the kubeconfig file. When omitted the configuration is
    /// inferred from KUBECONFIG, ~/.kube/config or the in-cluster service account.
    #[arg(long, value_name = "PATH")]
    pub(crate) kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long, requires = "kubeconfig")]
    pub(crate) context: Option<String>,

    /// Maximum machine age in (fractional) days
    #[arg(
        long,
        value_name = "DAYS",
        default_value_t = MaxAge::default(),
        allow_negative_numbers = true
    )]
    pub(crate) max_age_days: MaxAge,

    /// Maximum machine age as a duration such as 672h
    #[arg(
        long,
        value_name = "DURATION",
        value_parser = MaxAge::from_duration,
        conflicts_with = "max_age_days"
    )]
    pub(crate) max_age: Option<MaxAge>,

    /// Namespace holding the Machine objects
    #[arg(short, long, default_value = MACHINE_API_NAMESPACE)]
    pub(crate) namespace: String,
}

impl Cli {
    pub(crate) fn max_age(&self) -> MaxAge {
        self.max_age.unwrap_or(self.max_age_days)
    }
}
