use std::fmt::Debug;
use std::path::Path;
use std::path::PathBuf;

use kube::api;
use kube::config::KubeConfigOptions;
use kube::config::Kubeconfig;
use kube::config::KubeconfigError;
use workload_probe::PodRecord;
use workload_probe_ext as k8s;

use k8s::corev1;
use k8s::metav1;
use k8s::ClusterApi;
use k8s::PodRecordExt as _;

/// Failure to build a [`KubeApi`].
#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("failed to load kubeconfig {}", .path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    #[error(transparent)]
    Client(#[from] kube::Error),
}

pub struct KubeApi {
    list_params: api::ListParams,
    client: kube::Client,
}

impl KubeApi {
    /// Create a KubeApi configured with a default Kubernetes client.
    ///
    /// The configuration is inferred from the environment: `KUBECONFIG`,
    /// `~/.kube/config`, or the in-cluster service account.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), kube::Error> {
    /// let api = workload_probe_kubeapi::KubeApi::new().await?;
    /// // use `api`...
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new() -> kube::Result<Self> {
        kube::Client::try_default().await.map(Self::with_client)
    }

    /// Create a KubeApi from an explicit kubeconfig file, using its current
    /// context.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), workload_probe_kubeapi::ConnectError> {
    /// let api = workload_probe_kubeapi::KubeApi::from_kubeconfig("/etc/probe/kubeconfig").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_kubeconfig(path: impl AsRef<Path>) -> Result<Self, ConnectError> {
        let path = path.as_ref();
        let kubeconfig_error = |source| ConnectError::Kubeconfig {
            path: path.to_path_buf(),
            source,
        };
        let kubeconfig = Kubeconfig::read_from(path).map_err(kubeconfig_error)?;
        let options = KubeConfigOptions::default();
        let config = kube::Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(kubeconfig_error)?;
        let client = kube::Client::try_from(config)?;
        Ok(Self::with_client(client))
    }

    /// Create a KubeApi backed by the provided Kubernetes client.
    pub fn with_client(client: kube::Client) -> Self {
        Self {
            list_params: api::ListParams::default(),
            client,
        }
    }

    /// Api handle for all objects of a resource not known at compile time.
    fn dynamic(&self, resource: &api::ApiResource) -> api::Api<api::DynamicObject> {
        api::Api::all_with(self.client.clone(), resource)
    }

    /// Get an Api handle scoped to the Pods of one namespace.
    fn pods(&self, namespace: &str) -> api::Api<corev1::Pod> {
        api::Api::namespaced(self.client.clone(), namespace)
    }

    fn list_params(&self) -> &api::ListParams {
        &self.list_params
    }
}

impl ClusterApi for KubeApi {
    type Record = api::PartialObjectMeta<api::DynamicObject>;

    /// Fetches the resource list served under `group_version`.
    ///
    /// The core group lives under `/api/{version}`, named groups under
    /// `/apis/{group}/{version}`.
    async fn api_resources(&self, group_version: &str) -> kube::Result<Vec<metav1::APIResource>> {
        let list = if is_core_group(group_version) {
            self.client.list_core_api_resources(group_version).await?
        } else {
            self.client.list_api_group_resources(group_version).await?
        };
        Ok(list.resources)
    }

    /// Lists metadata for every object of `resource` in all namespaces.
    async fn list_generic(&self, resource: &api::ApiResource) -> kube::Result<Vec<Self::Record>> {
        let lp = self.list_params();
        self.dynamic(resource)
            .list_metadata(lp)
            .await
            .map(|list| list.items)
    }

    async fn list_pods(&self, namespace: &str) -> kube::Result<Vec<PodRecord>> {
        let lp = self.list_params();
        let list = self.pods(namespace).list_metadata(lp).await?;
        let pods = list
            .items
            .iter()
            .filter_map(|pod| PodRecord::from_meta(&pod.metadata))
            .collect();
        Ok(pods)
    }

    /// Re-reads a single pod, `None` when the API server answers 404.
    async fn get_pod(&self, namespace: &str, name: &str) -> kube::Result<Option<PodRecord>> {
        let pod = self.pods(namespace).get_metadata_opt(name).await?;
        let pod = pod.map(|pod| {
            PodRecord::from_meta(&pod.metadata)
                .unwrap_or_else(|| PodRecord::new(name, namespace))
        });
        Ok(pod)
    }
}

impl Debug for KubeApi {
    /// Formats the `KubeApi` for debugging, showing `list_params` while redacting the `client`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeApi")
            .field("list_params", &self.list_params)
            .field("client", &"<kube::Client>")
            .finish()
    }
}

fn is_core_group(group_version: &str) -> bool {
    !group_version.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_group_detection() {
        assert!(is_core_group("v1"));
        assert!(!is_core_group("apps/v1"));
        assert!(!is_core_group("batch/v1"));
    }
}
