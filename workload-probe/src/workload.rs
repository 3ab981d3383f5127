use super::*;

/// Identifies the workload whose namespace is being probed.
///
/// Validated once at construction and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadRef {
    kind: String,
    api_version: String,
    name: String,
}

impl WorkloadRef {
    /// Build a workload reference, rejecting kinds and apiVersions that can
    /// not be turned into a resource identifier.
    pub fn new(
        kind: impl ToString,
        api_version: impl ToString,
        name: impl ToString,
    ) -> Result<Self> {
        let kind = kind.to_string();
        let api_version = api_version.to_string();
        let name = name.to_string();

        if !is_type_name(&kind) {
            return Err(Error::MalformedKind(kind));
        }
        if split_api_version(&api_version).is_none() {
            return Err(Error::MalformedApiVersion(api_version));
        }
        if name.is_empty() {
            return Err(Error::EmptyWorkloadName);
        }

        Ok(Self {
            kind,
            api_version,
            name,
        })
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Group of the workload's API, empty for the core group.
    pub fn group(&self) -> &str {
        split_api_version(&self.api_version)
            .map(|(group, _)| group)
            .unwrap_or_default()
    }

    pub fn version(&self) -> &str {
        split_api_version(&self.api_version)
            .map(|(_, version)| version)
            .unwrap_or_default()
    }

    pub fn gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(self.group(), self.version(), &self.kind)
    }

    pub fn not_found(&self) -> Error {
        Error::WorkloadNotFound {
            kind: self.kind.clone(),
            name: self.name.clone(),
        }
    }
}

impl fmt::Display for WorkloadRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.api_version, self.kind, self.name)
    }
}

/// A workload together with the namespace that owns it.
///
/// The namespace is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWorkload {
    workload: WorkloadRef,
    namespace: String,
}

impl ResolvedWorkload {
    pub fn new(workload: WorkloadRef, namespace: impl ToString) -> Result<Self> {
        let namespace = namespace.to_string();
        if namespace.is_empty() {
            return Err(workload.not_found());
        }
        Ok(Self {
            workload,
            namespace,
        })
    }

    pub fn workload(&self) -> &WorkloadRef {
        &self.workload
    }

    pub fn kind(&self) -> &str {
        self.workload.kind()
    }

    pub fn name(&self) -> &str {
        self.workload.name()
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

fn is_type_name(kind: &str) -> bool {
    let mut chars = kind.chars();
    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

// "apps/v1" -> ("apps", "v1"), "v1" -> ("", "v1")
fn split_api_version(api_version: &str) -> Option<(&str, &str)> {
    let (group, version) = api_version.split_once('/').unwrap_or(("", api_version));
    let group_ok = !api_version.contains('/') || !group.is_empty();
    let valid = group_ok && !version.is_empty() && !version.contains('/');
    valid.then_some((group, version))
}
