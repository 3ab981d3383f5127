use super::*;

/// Result of re-checking a single listed pod by name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollOutcome {
    /// The pod still exists.
    Found,
    /// The pod was deleted between the list and the get.
    NotFound,
    /// The get failed for any other reason.
    TransportError(String),
}

impl PollOutcome {
    /// Stable label used as the `outcome` field of log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::NotFound => "not-found",
            Self::TransportError(_) => "error",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::TransportError(_))
    }
}

impl fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransportError(detail) => write!(f, "{}: {detail}", self.as_str()),
            other => f.write_str(other.as_str()),
        }
    }
}
