use std::future::Future;

use workload_probe::Error;
use workload_probe::ListFailurePolicy;
use workload_probe::PodRecord;
use workload_probe::PollConfig;
use workload_probe::PollOutcome;
use workload_probe::ResolvedWorkload;
use workload_probe::Result;
use workload_probe_ext::ClusterApi;

/// Per-pod outcomes of a single poll cycle, in list order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Number of pods returned by the list call.
    pub listed: usize,
    pub outcomes: Vec<(PodRecord, PollOutcome)>,
}

impl CycleReport {
    pub fn checked(&self) -> usize {
        self.outcomes.len()
    }

    pub fn found(&self) -> usize {
        self.count(PollOutcome::is_found)
    }

    pub fn not_found(&self) -> usize {
        self.count(PollOutcome::is_not_found)
    }

    pub fn errors(&self) -> usize {
        self.count(PollOutcome::is_error)
    }

    fn count(&self, predicate: impl Fn(&PollOutcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| predicate(outcome))
            .count()
    }
}

/// Re-verifies the existence of the pods in a workload's namespace on a fixed
/// cadence.
///
/// Every cycle starts from a fresh pod list; nothing is carried over between
/// cycles, so a cycle can be abandoned at any point.
#[derive(Debug)]
pub struct PodPoller<'a, C> {
    api: &'a C,
    workload: ResolvedWorkload,
    config: PollConfig,
}

impl<'a, C> PodPoller<'a, C>
where
    C: ClusterApi,
{
    pub fn new(api: &'a C, workload: ResolvedWorkload, config: PollConfig) -> Self {
        Self {
            api,
            workload,
            config,
        }
    }

    /// Run poll cycles until `shutdown` completes.
    ///
    /// The first cycle starts immediately and every following cycle starts one
    /// interval after the previous one finished. A failed pod list either
    /// stops the loop with the error or is retried on the next interval,
    /// depending on the configured [`ListFailurePolicy`].
    ///
    /// Returns the number of cycles that ran to the end. A cycle interrupted
    /// by `shutdown` is not counted.
    pub async fn run(&self, shutdown: impl Future<Output = ()>) -> Result<u64> {
        tokio::pin!(shutdown);

        tracing::info!(
            kind = self.workload.kind(),
            name = self.workload.name(),
            namespace = self.workload.namespace(),
            interval = ?self.config.interval(),
            check_bound = ?self.config.check_bound(),
            on_list_failure = %self.config.list_failure_policy(),
            "Starting pod poller"
        );

        let mut cycles = 0_u64;
        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                result = self.run_cycle() => {
                    cycles += 1;
                    self.finish_cycle(cycles, result)?;
                }
            }

            tokio::select! {
                biased;
                () = &mut shutdown => break,
                () = tokio::time::sleep(self.config.interval()) => {}
            }
        }

        tracing::info!(
            namespace = self.workload.namespace(),
            cycles,
            "Stop signal received, pod poller stopped"
        );
        Ok(cycles)
    }

    /// List the pods in the workload's namespace and re-check up to the
    /// configured number of them by name.
    #[tracing::instrument(
        skip_all,
        fields(
            kind = %self.workload.kind(),
            name = %self.workload.name(),
            namespace = %self.workload.namespace(),
        )
    )]
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let namespace = self.workload.namespace();

        tracing::info!("Listing pods");
        let pods = self
            .api
            .list_pods(namespace)
            .await
            .map_err(|source| Error::ListPods {
                namespace: namespace.to_string(),
                source,
            })?;
        let listed = pods.len();
        tracing::info!(count = listed, "Listed pods");

        let bound = self.config.check_bound().unwrap_or(listed);
        let mut outcomes = Vec::with_capacity(bound.min(listed));
        for pod in pods.into_iter().take(bound) {
            let outcome = self.check(&pod).await;
            outcomes.push((pod, outcome));
        }

        Ok(CycleReport { listed, outcomes })
    }

    async fn check(&self, pod: &PodRecord) -> PollOutcome {
        let outcome = match self.api.get_pod(&pod.namespace, &pod.name).await {
            Ok(Some(_)) => PollOutcome::Found,
            Ok(None) => PollOutcome::NotFound,
            Err(err) => PollOutcome::TransportError(err.to_string()),
        };

        let label = outcome.as_str();
        match &outcome {
            PollOutcome::Found => {
                tracing::info!(pod = %pod.name, namespace = %pod.namespace, outcome = label, "Found pod");
            }
            PollOutcome::NotFound => {
                tracing::info!(pod = %pod.name, namespace = %pod.namespace, outcome = label, "Pod not found");
            }
            PollOutcome::TransportError(detail) => {
                tracing::error!(
                    pod = %pod.name,
                    namespace = %pod.namespace,
                    outcome = label,
                    error = %detail,
                    "Error getting pod"
                );
            }
        }

        outcome
    }

    fn finish_cycle(&self, cycle: u64, result: Result<CycleReport>) -> Result<()> {
        let err = match result {
            Ok(report) => {
                tracing::debug!(
                    cycle,
                    listed = report.listed,
                    checked = report.checked(),
                    found = report.found(),
                    not_found = report.not_found(),
                    errors = report.errors(),
                    "Poll cycle complete"
                );
                return Ok(());
            }
            Err(err) => err,
        };

        match self.config.list_failure_policy() {
            ListFailurePolicy::Halt => {
                tracing::error!(cycle, %err, "Poll cycle failed, stopping pod poller");
                Err(err)
            }
            ListFailurePolicy::SkipCycle => {
                tracing::error!(cycle, %err, "Poll cycle failed, retrying after the interval");
                Ok(())
            }
        }
    }
}
