use super::*;

/// Read-only view of an object fetched without a statically known schema.
///
/// Only the two metadata fields needed to locate a workload are exposed.
pub trait GenericRecord {
    fn metadata_name(&self) -> Option<&str>;
    fn metadata_namespace(&self) -> Option<&str>;
}

impl GenericRecord for metav1::ObjectMeta {
    fn metadata_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn metadata_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}

impl GenericRecord for DynamicObject {
    fn metadata_name(&self) -> Option<&str> {
        self.metadata.metadata_name()
    }

    fn metadata_namespace(&self) -> Option<&str> {
        self.metadata.metadata_namespace()
    }
}

impl<K> GenericRecord for PartialObjectMeta<K>
where
    K: kube::Resource,
{
    fn metadata_name(&self) -> Option<&str> {
        self.metadata.metadata_name()
    }

    fn metadata_namespace(&self) -> Option<&str> {
        self.metadata.metadata_namespace()
    }
}
