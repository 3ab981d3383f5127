use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use constcat::concat;
use kube::core::GroupVersionKind;
use time::ext::NumericalStdDuration as _;

pub use config::ListFailurePolicy;
pub use config::PollConfig;
pub use config::parse_interval;
pub use error::Error;
pub use outcome::PollOutcome;
pub use pod::PodRecord;
pub use workload::ResolvedWorkload;
pub use workload::WorkloadRef;

pub const APPS_API_GROUP: &str = "apps";
pub const APPS_API_VERSION: &str = "v1";
pub const DEFAULT_WORKLOAD_GROUP_VERSION: &str = concat!(APPS_API_GROUP, "/", APPS_API_VERSION);
pub const DEFAULT_WORKLOAD_KIND: &str = "Deployment";
pub const DEFAULT_LIST_INTERVAL_SECONDS: u64 = 5;

mod config;
mod error;
mod outcome;
mod pod;
mod workload;

pub type Result<T, E = Error> = std::result::Result<T, E>;
