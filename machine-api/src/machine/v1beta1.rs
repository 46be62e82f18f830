use constcat::concat;

use super::*;

pub use role::Role;

pub const MACHINE_API_GROUP: &str = "machine.openshift.io";
pub const MACHINE_API_VERSION: &str = "v1beta1";
pub const MACHINE_API_GROUP_VERSION: &str = concat!(MACHINE_API_GROUP, "/", MACHINE_API_VERSION);

/// Namespace the machine-api operator keeps its `Machine` objects in.
pub const MACHINE_API_NAMESPACE: &str = "openshift-machine-api";

/// Label carrying the role of the node backing a machine.
pub const MACHINE_ROLE_LABEL: &str = concat!(MACHINE_API_GROUP, "/cluster-api-machine-role");

mod role;

/// `Machine` is the schema for the machines API.
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    #[serde(default)]
    pub metadata: metav1::ObjectMeta,

    #[serde(default)]
    pub spec: MachineSpec,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MachineStatus>,
}

/// `MachineSpec` defines the desired state of a machine
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSpec {
    /// the identification ID of the machine provided by the provider
    /// +optional
    ///
    #[serde(rename = "providerID", skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

/// `MachineStatus` defines the observed state of a machine
///
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineStatus {
    /// reference to the node backing this machine, once it has one
    /// +optional
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_ref: Option<corev1::ObjectReference>,

    /// current phase of machine actuation, one of
    /// Provisioning, Provisioned, Running, Deleting or Failed
    /// +optional
    ///
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
}

impl Machine {
    /// Role of the machine, read from [`MACHINE_ROLE_LABEL`].
    pub fn role(&self) -> Role {
        let role = self
            .metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(MACHINE_ROLE_LABEL))
            .map(String::as_str);
        Role::from_label(role)
    }

    /// Whether the machine already carries a deletion timestamp.
    pub fn is_deleting(&self) -> bool {
        self.metadata.deletion_timestamp.is_some()
    }
}

impl k8s::Resource for Machine {
    const API_VERSION: &'static str = MACHINE_API_GROUP_VERSION;
    const GROUP: &'static str = MACHINE_API_GROUP;
    const KIND: &'static str = "Machine";
    const VERSION: &'static str = MACHINE_API_VERSION;
    const URL_PATH_SEGMENT: &'static str = "machines";
    type Scope = k8s::NamespaceResourceScope;
}

impl k8s::ListableResource for Machine {
    const LIST_KIND: &'static str = "MachineList";
}

impl k8s::Metadata for Machine {
    type Ty = metav1::ObjectMeta;

    fn metadata(&self) -> &<Self as k8s::Metadata>::Ty {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut <Self as k8s::Metadata>::Ty {
        &mut self.metadata
    }
}

#[cfg(test)]
mod tests;
