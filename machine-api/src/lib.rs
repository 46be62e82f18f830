//! OpenShift Machine API (`machine.openshift.io`) resource definitions.
//!
//! Only the parts of the `Machine` resource needed for read-only reporting
//! are modelled; unknown fields are ignored when decoding.

use k8s_openapi as k8s;
use serde::{Deserialize, Serialize};

use k8s::api::core::v1 as corev1;
use k8s::apimachinery::pkg::apis::meta::v1 as metav1;

pub use machine::v1beta1;

pub mod machine {
    use super::*;

    pub mod v1beta1;
}
