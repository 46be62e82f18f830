use std::collections::BTreeMap;
use std::fmt;

use super::*;

use machine_api_ext::machinev1::Role;

/// Human readable report over a [`Selection`].
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    selection: Selection,
}

impl Report {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn oldest(&self) -> Option<&StaleMachine> {
        self.selection.oldest()
    }

    /// Removal prompt for the oldest machine, if it has a known role.
    ///
    /// The prompt is advisory text only; nothing reads an answer to it.
    pub fn advisory(&self) -> Option<String> {
        let oldest = self.oldest()?;
        let name = oldest.name();
        match oldest.role() {
            Role::Worker | Role::Master => Some(format!(
                "The oldest machine {name} is a {} node. Would you like to proceed to delete? Y/N:",
                oldest.role()
            )),
            Role::Unclassified => None,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_age = self.selection.max_age();
        writeln!(
            f,
            "Machines that are older than {max_age} days, that are not in Deleting state:"
        )?;
        writeln!(f)?;

        for stale in self.selection.stale() {
            let metadata = &stale.machine.metadata;
            writeln!(f, "{}", stale.name())?;
            writeln!(f, "  annotations: {}", Pairs(metadata.annotations.as_ref()))?;
            writeln!(f, "  labels: {}", Pairs(metadata.labels.as_ref()))?;
        }

        let Some(oldest) = self.oldest() else {
            writeln!(f)?;
            return writeln!(f, "No machines older than {max_age} days found");
        };

        writeln!(f)?;
        writeln!(
            f,
            "Found the oldest machine {} aged {:.2} days",
            oldest.name(),
            oldest.age_days
        )?;
        writeln!(f)?;
        match self.advisory() {
            Some(advisory) => writeln!(f, "{advisory}"),
            None => writeln!(
                f,
                "The oldest machine {} has no recognized role",
                oldest.name()
            ),
        }
    }
}

struct Pairs<'a>(Option<&'a BTreeMap<String, String>>);

impl fmt::Display for Pairs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(map) = self.0.filter(|map| !map.is_empty()) else {
            return f.write_str("<none>");
        };
        for (index, (key, value)) in map.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}
