use machine_api_ext::MachineExt as _;

use super::*;

/// A machine past the age threshold together with its age in days.
#[derive(Clone, Debug, PartialEq)]
pub struct StaleMachine {
    pub machine: machinev1::Machine,
    pub age_days: f64,
}

impl StaleMachine {
    pub fn name(&self) -> &str {
        self.machine.name()
    }

    pub fn role(&self) -> machinev1::Role {
        self.machine.role()
    }
}

/// Stale machines in listing order and the oldest of them.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    max_age: MaxAge,
    stale: Vec<StaleMachine>,
    oldest: Option<usize>,
}

impl Selection {
    /// Keep machines older than `max_age` at `now` that are not being
    /// deleted, tracking the oldest as they go by.
    ///
    /// The first machine seen at the maximum age wins ties. Machines without
    /// a creation timestamp have no age and are never stale.
    pub fn select(
        machines: impl IntoIterator<Item = machinev1::Machine>,
        now: &metav1::Time,
        max_age: MaxAge,
    ) -> Self {
        let mut stale = Vec::new();
        let mut oldest = None::<(usize, f64)>;

        for machine in machines {
            let name = machine.name();
            let Some(age_days) = machine.age_days(now) else {
                tracing::trace!(name, "Skipping machine without creation timestamp");
                continue;
            };
            if machine.is_deleting() {
                tracing::trace!(name, age_days, "Skipping machine being deleted");
                continue;
            }
            if age_days <= max_age.days() {
                tracing::trace!(name, age_days, "Skipping machine within max age");
                continue;
            }

            if oldest.is_none_or(|(_, oldest_days)| age_days > oldest_days) {
                oldest = Some((stale.len(), age_days));
            }
            stale.push(StaleMachine { machine, age_days });
        }

        let oldest = oldest.map(|(index, _)| index);
        Self {
            max_age,
            stale,
            oldest,
        }
    }

    pub fn max_age(&self) -> MaxAge {
        self.max_age
    }

    pub fn stale(&self) -> &[StaleMachine] {
        &self.stale
    }

    pub fn oldest(&self) -> Option<&StaleMachine> {
        self.oldest.and_then(|index| self.stale.get(index))
    }

    pub fn is_empty(&self) -> bool {
        self.stale.is_empty()
    }
}
