use workload_probe::ResolvedWorkload;
use workload_probe::Result;
use workload_probe::WorkloadRef;
use workload_probe_ext::ClusterApi;
use workload_probe_ext::GenericRecord as _;

use super::ResourceResolver;

/// Finds the namespace that owns a workload of an arbitrary kind.
///
/// Runs once at startup. A workload that moves to another namespace later is
/// not rediscovered.
#[derive(Debug)]
pub struct WorkloadLocator<'a, C> {
    api: &'a C,
    resolver: ResourceResolver<'a, C>,
}

impl<'a, C> WorkloadLocator<'a, C>
where
    C: ClusterApi,
{
    pub fn new(api: &'a C) -> Self {
        let resolver = ResourceResolver::new(api);
        Self { api, resolver }
    }

    /// Lists every object of the workload's kind across all namespaces and
    /// returns the namespace of the first one with a matching name.
    pub async fn resolve(&self, workload: WorkloadRef) -> Result<ResolvedWorkload> {
        let resource = self.resolver.resolve(&workload).await;
        let records = self
            .api
            .list_generic(&resource)
            .await
            .inspect_err(|err| {
                tracing::error!(kind = workload.kind(), %err, "Failed to list workloads");
            })?;
        tracing::debug!(
            kind = workload.kind(),
            count = records.len(),
            "Listed workloads in all namespaces"
        );

        let namespace = records
            .iter()
            .find(|record| record.metadata_name() == Some(workload.name()))
            .and_then(|record| record.metadata_namespace())
            .filter(|namespace| !namespace.is_empty());

        let Some(namespace) = namespace else {
            tracing::error!(
                kind = workload.kind(),
                name = workload.name(),
                "Can not find workload"
            );
            return Err(workload.not_found());
        };

        let resolved = ResolvedWorkload::new(workload, namespace)?;
        tracing::info!(
            kind = resolved.kind(),
            name = resolved.name(),
            namespace = resolved.namespace(),
            "Resolved workload namespace"
        );
        Ok(resolved)
    }
}
