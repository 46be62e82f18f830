pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
pub use machine_api::v1beta1 as machinev1;

pub use time::TimeExt;

use std::collections::BTreeMap;

mod time;

pub trait ObjectMetaExt {
    fn new(name: impl ToString) -> Self;
    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self;
    fn created(self, ts: impl Into<Option<metav1::Time>>) -> Self;
    fn deleted(self, ts: impl Into<Option<metav1::Time>>) -> Self;
    fn label(self, key: impl ToString, value: impl ToString) -> Self;
    fn annotation(self, key: impl ToString, value: impl ToString) -> Self;
}

impl ObjectMetaExt for metav1::ObjectMeta {
    fn new(name: impl ToString) -> Self {
        let name = Some(name.to_string());
        Self { name, ..default() }
    }

    fn with_namespace(name: impl ToString, namespace: impl ToString) -> Self {
        Self {
            namespace: Some(namespace.to_string()),
            ..Self::new(name)
        }
    }

    fn created(self, ts: impl Into<Option<metav1::Time>>) -> Self {
        Self {
            creation_timestamp: ts.into(),
            ..self
        }
    }

    fn deleted(self, ts: impl Into<Option<metav1::Time>>) -> Self {
        Self {
            deletion_timestamp: ts.into(),
            ..self
        }
    }

    fn label(mut self, key: impl ToString, value: impl ToString) -> Self {
        insert(&mut self.labels, key, value);
        self
    }

    fn annotation(mut self, key: impl ToString, value: impl ToString) -> Self {
        insert(&mut self.annotations, key, value);
        self
    }
}

fn insert(map: &mut Option<BTreeMap<String, String>>, key: impl ToString, value: impl ToString) {
    map.get_or_insert_with(BTreeMap::new)
        .insert(key.to_string(), value.to_string());
}

pub trait MachineExt {
    fn new(name: impl ToString, namespace: impl ToString) -> Self;
    fn with_metadata(metadata: metav1::ObjectMeta) -> Self;
    fn name(&self) -> &str;
    fn age_days(&self, now: &metav1::Time) -> Option<f64>;
}

impl MachineExt for machinev1::Machine {
    fn new(name: impl ToString, namespace: impl ToString) -> Self {
        let metadata = metav1::ObjectMeta::with_namespace(name, namespace);
        Self::with_metadata(metadata)
    }

    fn with_metadata(metadata: metav1::ObjectMeta) -> Self {
        Self {
            metadata,
            ..default()
        }
    }

    fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }

    /// Age of the machine at `now` in fractional days, or `None` when the
    /// machine has no creation timestamp.
    fn age_days(&self, now: &metav1::Time) -> Option<f64> {
        self.metadata
            .creation_timestamp
            .as_ref()
            .map(|created| now.days_since(created))
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}

#[cfg(test)]
mod tests;
