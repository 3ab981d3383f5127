use std::future::Future;

use workload_probe::PollConfig;
use workload_probe::Result;
use workload_probe::WorkloadRef;
use workload_probe_ext::ClusterApi;

pub use locator::WorkloadLocator;
pub use poller::CycleReport;
pub use poller::PodPoller;
pub use resolver::ResourceResolver;

mod locator;
mod poller;
mod resolver;

/// Locate the namespace that owns `workload`, then poll the pods in it until
/// `shutdown` completes.
///
/// Resolution failures are returned before the first poll cycle starts.
pub async fn probe<C>(
    api: &C,
    workload: WorkloadRef,
    config: PollConfig,
    shutdown: impl Future<Output = ()>,
) -> Result<()>
where
    C: ClusterApi,
{
    let workload = WorkloadLocator::new(api).resolve(workload).await?;
    PodPoller::new(api, workload, config)
        .run(shutdown)
        .await
        .map(|_cycles| ())
}

#[cfg(test)]
mod mock;
