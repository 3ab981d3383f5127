use super::*;

/// What the poll loop does when listing pods fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListFailurePolicy {
    /// Stop polling and hand the error back to the caller.
    #[default]
    Halt,
    /// Log the error and retry the whole cycle after the next interval.
    SkipCycle,
}

impl ListFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Halt => "halt",
            Self::SkipCycle => "skip-cycle",
        }
    }
}

impl fmt::Display for ListFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListFailurePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "halt" => Ok(Self::Halt),
            "skip-cycle" | "skip" => Ok(Self::SkipCycle),
            _ => Err(Error::UnknownListFailurePolicy(s.to_string())),
        }
    }
}

/// Immutable settings of the pod poll loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    interval: Duration,
    max_checks_per_cycle: u64,
    on_list_failure: ListFailurePolicy,
}

impl PollConfig {
    /// Poll every `interval`, checking every listed pod and halting on list
    /// failures.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::ZeroInterval);
        }
        Ok(Self {
            interval,
            max_checks_per_cycle: 0,
            on_list_failure: ListFailurePolicy::default(),
        })
    }

    /// Limit the number of pods re-checked per cycle, 0 means all of them.
    pub fn max_checks_per_cycle(self, max_checks_per_cycle: u64) -> Self {
        Self {
            max_checks_per_cycle,
            ..self
        }
    }

    pub fn on_list_failure(self, on_list_failure: ListFailurePolicy) -> Self {
        Self {
            on_list_failure,
            ..self
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn list_failure_policy(&self) -> ListFailurePolicy {
        self.on_list_failure
    }

    /// Number of checks allowed per cycle, `None` when unbounded.
    pub fn check_bound(&self) -> Option<usize> {
        match self.max_checks_per_cycle {
            0 => None,
            n => Some(usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_LIST_INTERVAL_SECONDS.std_seconds(),
            max_checks_per_cycle: 0,
            on_list_failure: ListFailurePolicy::default(),
        }
    }
}

/// Parse a poll interval.
///
/// A bare integer is a number of seconds, anything else is read as a Go
/// style duration such as `1m30s` or `500ms`.
pub fn parse_interval(text: &str) -> Result<Duration> {
    let text = text.trim();
    let invalid = |reason: String| Error::InvalidInterval {
        input: text.to_string(),
        reason,
    };

    let interval = if let Ok(seconds) = text.parse::<u64>() {
        seconds.std_seconds()
    } else {
        let nanos = go_parse_duration::parse_duration(text)
            .map_err(|err| invalid(format!("{err:?}")))?;
        let nanos = u64::try_from(nanos).map_err(|_| invalid("negative duration".to_string()))?;
        nanos.std_nanoseconds()
    };

    if interval.is_zero() {
        return Err(Error::ZeroInterval);
    }
    Ok(interval)
}
