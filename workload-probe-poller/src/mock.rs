use std::collections::HashSet;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::time::Duration;

use workload_probe::PodRecord;
use workload_probe_ext::ApiResource;
use workload_probe_ext::ClusterApi;
use workload_probe_ext::DynamicObject;
use workload_probe_ext::metav1;

/// In-memory cluster that records every call made against it.
#[derive(Debug, Default)]
pub(crate) struct MockCluster {
    discovery: Vec<metav1::APIResource>,
    discovery_fails: bool,
    workloads: Vec<DynamicObject>,
    workload_list_fails: bool,
    pods: Vec<PodRecord>,
    deleted: HashSet<String>,
    broken: HashSet<String>,
    get_delay: Option<Duration>,
    failing_pod_lists: AtomicUsize,
    generic_lists: Mutex<Vec<ApiResource>>,
    pod_lists: AtomicUsize,
    pod_gets: Mutex<Vec<String>>,
}

impl MockCluster {
    pub(crate) fn with_discovery(mut self, resource: metav1::APIResource) -> Self {
        self.discovery.push(resource);
        self
    }

    pub(crate) fn with_failing_discovery(self) -> Self {
        Self {
            discovery_fails: true,
            ..self
        }
    }

    pub(crate) fn with_workload(mut self, workload: DynamicObject) -> Self {
        self.workloads.push(workload);
        self
    }

    pub(crate) fn with_failing_workload_list(self) -> Self {
        Self {
            workload_list_fails: true,
            ..self
        }
    }

    pub(crate) fn with_pods(mut self, namespace: &str, names: &[&str]) -> Self {
        let pods = names.iter().map(|name| PodRecord::new(name, namespace));
        self.pods.extend(pods);
        self
    }

    /// The pod is listed but gone by the time it is fetched.
    pub(crate) fn deleted_before_get(mut self, name: &str) -> Self {
        self.deleted.insert(name.to_string());
        self
    }

    /// Fetching the pod fails with a transport error.
    pub(crate) fn broken(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }

    /// Every pod fetch takes `delay` to answer.
    pub(crate) fn slow_gets(self, delay: Duration) -> Self {
        Self {
            get_delay: Some(delay),
            ..self
        }
    }

    /// The next `count` pod lists fail.
    pub(crate) fn with_failing_pod_lists(self, count: usize) -> Self {
        Self {
            failing_pod_lists: AtomicUsize::new(count),
            ..self
        }
    }

    pub(crate) fn generic_lists(&self) -> Vec<ApiResource> {
        let lists = self.generic_lists.lock().unwrap();
        lists.clone()
    }

    pub(crate) fn pod_lists(&self) -> usize {
        self.pod_lists.load(Ordering::SeqCst)
    }

    pub(crate) fn pod_gets(&self) -> Vec<String> {
        let gets = self.pod_gets.lock().unwrap();
        gets.clone()
    }
}

impl ClusterApi for MockCluster {
    type Record = DynamicObject;

    async fn api_resources(&self, _group_version: &str) -> kube::Result<Vec<metav1::APIResource>> {
        if self.discovery_fails {
            return Err(transport_error("discovery unavailable"));
        }
        Ok(self.discovery.clone())
    }

    async fn list_generic(&self, resource: &ApiResource) -> kube::Result<Vec<DynamicObject>> {
        self.generic_lists.lock().unwrap().push(resource.clone());
        if self.workload_list_fails {
            return Err(transport_error("workload list unavailable"));
        }
        Ok(self.workloads.clone())
    }

    async fn list_pods(&self, namespace: &str) -> kube::Result<Vec<PodRecord>> {
        self.pod_lists.fetch_add(1, Ordering::SeqCst);
        #[allow(deprecated_in_future)]
        let fail = self
            .failing_pod_lists
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if fail {
            return Err(transport_error("pod list unavailable"));
        }
        let pods = self
            .pods
            .iter()
            .filter(|pod| pod.namespace == namespace)
            .cloned()
            .collect();
        Ok(pods)
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> kube::Result<Option<PodRecord>> {
        self.pod_gets.lock().unwrap().push(name.to_string());
        if let Some(delay) = self.get_delay {
            tokio::time::sleep(delay).await;
        }
        if self.broken.contains(name) {
            return Err(transport_error("connection reset by peer"));
        }
        if self.deleted.contains(name) {
            return Ok(None);
        }
        let pod = self
            .pods
            .iter()
            .find(|pod| pod.namespace == namespace && pod.name == name)
            .cloned();
        Ok(pod)
    }
}

pub(crate) fn transport_error(message: &str) -> kube::Error {
    kube::Error::ReadEvents(io::Error::other(message.to_string()))
}
