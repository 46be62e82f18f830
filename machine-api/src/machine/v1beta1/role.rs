use std::fmt;

/// Role of the node a machine provisions, as far as this crate cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Worker,
    Master,
    Unclassified,
}

impl Role {
    /// Classify a role label value. Anything other than `worker` or
    /// `master`, including a missing label, is [`Role::Unclassified`].
    pub fn from_label(value: Option<&str>) -> Self {
        match value {
            Some("worker") => Self::Worker,
            Some("master") => Self::Master,
            _ => Self::Unclassified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "worker",
            Self::Master => "master",
            Self::Unclassified => "unclassified",
        }
    }

    pub fn is_classified(&self) -> bool {
        !matches!(self, Self::Unclassified)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
