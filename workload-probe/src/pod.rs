use super::*;

/// Name and namespace of a listed pod, rebuilt from the live list every cycle.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PodRecord {
    pub name: String,
    pub namespace: String,
}

impl PodRecord {
    pub fn new(name: impl ToString, namespace: impl ToString) -> Self {
        let name = name.to_string();
        let namespace = namespace.to_string();
        Self { name, namespace }
    }
}

impl fmt::Display for PodRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
