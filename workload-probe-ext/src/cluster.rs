use std::future::Future;

use super::*;

/// The slice of the cluster API the probe depends on.
///
/// Every call returns `kube::Result`; an `Err` is a transport failure. A pod
/// that does not exist is reported as `Ok(None)` by [`ClusterApi::get_pod`].
pub trait ClusterApi {
    /// Record type produced by generic (schema-less) lists.
    type Record: GenericRecord + Send;

    /// Resources served under `group_version` ("v1" or "apps/v1").
    fn api_resources(
        &self,
        group_version: &str,
    ) -> impl Future<Output = kube::Result<Vec<metav1::APIResource>>> + Send;

    /// List every object of `resource` across all namespaces.
    fn list_generic(
        &self,
        resource: &ApiResource,
    ) -> impl Future<Output = kube::Result<Vec<Self::Record>>> + Send;

    fn list_pods(
        &self,
        namespace: &str,
    ) -> impl Future<Output = kube::Result<Vec<PodRecord>>> + Send;

    fn get_pod(
        &self,
        namespace: &str,
        name: &str,
    ) -> impl Future<Output = kube::Result<Option<PodRecord>>> + Send;
}
