pub use k8s_openapi as openapi;
pub use k8s_openapi::api::core::v1 as corev1;
pub use k8s_openapi::apimachinery::pkg::apis::meta::v1 as metav1;
pub use kube::api::ApiResource;
pub use kube::api::DynamicObject;
pub use kube::api::GroupVersionKind;
pub use kube::api::PartialObjectMeta;

pub use cluster::ClusterApi;
pub use record::GenericRecord;

use workload_probe::PodRecord;

mod cluster;
mod record;

pub trait PodRecordExt: Sized {
    /// Build a pod record from object metadata, `None` when the name or
    /// namespace is missing.
    fn from_meta(metadata: &metav1::ObjectMeta) -> Option<Self>;
}

impl PodRecordExt for PodRecord {
    fn from_meta(metadata: &metav1::ObjectMeta) -> Option<Self> {
        let name = metadata.name.as_deref()?;
        let namespace = metadata.namespace.as_deref()?;
        Some(Self::new(name, namespace))
    }
}

pub trait APIResourceExt {
    fn new(name: impl ToString, kind: impl ToString, namespaced: bool) -> Self;
    /// Subresources such as `deployments/status` share their parent's kind
    /// but can not be listed on their own.
    fn is_subresource(&self) -> bool;
}

impl APIResourceExt for metav1::APIResource {
    fn new(name: impl ToString, kind: impl ToString, namespaced: bool) -> Self {
        Self {
            name: name.to_string(),
            namespaced,
            kind: kind.to_string(),
            verbs: vec!["get".to_string(), "list".to_string()],
            ..default()
        }
    }

    fn is_subresource(&self) -> bool {
        self.name.contains('/')
    }
}

pub fn default<T: Default>() -> T {
    T::default()
}
