use thiserror::Error;

/// Everything that can stop the probe from resolving or polling a workload.
///
/// Configuration errors are terminal: the workload cannot be located, so the
/// poll loop must never start. Transport errors carry the underlying
/// `kube::Error`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("workload kind {0:?} is not a capitalized type name")]
    MalformedKind(String),

    #[error(r#"apiVersion {0:?} must be of the form "group/version" or "version""#)]
    MalformedApiVersion(String),

    #[error("workload name must not be empty")]
    EmptyWorkloadName,

    #[error("can not find {kind} {name:?} in any namespace")]
    WorkloadNotFound { kind: String, name: String },

    #[error("poll interval must be greater than zero")]
    ZeroInterval,

    #[error("invalid poll interval {input:?}: {reason}")]
    InvalidInterval { input: String, reason: String },

    #[error(r#"unknown list failure policy {0:?}, expected "halt" or "skip-cycle""#)]
    UnknownListFailurePolicy(String),

    #[error("failed to list pods in namespace {namespace:?}")]
    ListPods {
        namespace: String,
        #[source]
        source: kube::Error,
    },

    #[error(transparent)]
    Kube(#[from] kube::Error),
}

impl Error {
    /// True for errors caused by the supplied workload or poll settings rather
    /// than by the cluster API transport.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::ListPods { .. } | Self::Kube(_))
    }
}
