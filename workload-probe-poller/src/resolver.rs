use workload_probe::WorkloadRef;
use workload_probe_ext::APIResourceExt as _;
use workload_probe_ext::ApiResource;
use workload_probe_ext::ClusterApi;

/// Maps a workload's group/version/kind to the resource collection that can
/// be listed generically.
///
/// The plural is first guessed from the kind, then corrected with a single
/// lookup of the resources served under the workload's group/version.
#[derive(Debug)]
pub struct ResourceResolver<'a, C> {
    api: &'a C,
}

impl<'a, C> ResourceResolver<'a, C>
where
    C: ClusterApi,
{
    pub fn new(api: &'a C) -> Self {
        Self { api }
    }

    pub async fn resolve(&self, workload: &WorkloadRef) -> ApiResource {
        let gvk = workload.gvk();
        let guess = ApiResource::from_gvk(&gvk);

        let served = match self.api.api_resources(workload.api_version()).await {
            Ok(resources) => resources
                .into_iter()
                .find(|resource| !resource.is_subresource() && resource.kind == workload.kind()),
            Err(err) => {
                tracing::warn!(
                    api_version = workload.api_version(),
                    kind = workload.kind(),
                    %err,
                    "Resource discovery failed"
                );
                None
            }
        };

        match served {
            Some(resource) => {
                tracing::debug!(
                    kind = workload.kind(),
                    plural = %resource.name,
                    "Resolved resource from discovery"
                );
                ApiResource::from_gvk_with_plural(&gvk, &resource.name)
            }
            None => {
                tracing::warn!(
                    kind = workload.kind(),
                    plural = %guess.plural,
                    "Using guessed resource name"
                );
                guess
            }
        }
    }
}
