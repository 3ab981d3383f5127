use super::*;

/// Poll the pods of a Kubernetes workload and log whether each one still exists
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Args {
    /// Path to a kubeconfig file, the default client configuration is used when omitted
    #[arg(long, alias = "kubeConfig")]
    pub(crate) kubeconfig: Option<PathBuf>,

    /// Name of the workload whose pods are polled
    #[arg(long, alias = "workloadName")]
    workload_name: String,

    /// Kind of the workload
    #[arg(long, alias = "workloadKind", default_value = DEFAULT_WORKLOAD_KIND)]
    workload_kind: String,

    /// API group/version of the workload, a bare version for the core group
    #[arg(long, alias = "workloadGV", default_value = DEFAULT_WORKLOAD_GROUP_VERSION)]
    workload_gv: String,

    /// Interval between poll cycles, in seconds or as a duration such as 1m30s
    #[arg(long, alias = "listInterval", default_value = "5", value_parser = parse_interval)]
    list_interval: Duration,

    /// Maximum number of pods checked per cycle, 0 checks all of them
    #[arg(long, alias = "maxPodsCount", default_value_t = 0)]
    max_pods_count: u64,

    /// What to do when listing pods fails: halt or skip-cycle
    #[arg(long, default_value_t = ListFailurePolicy::Halt)]
    on_list_error: ListFailurePolicy,
}

impl Args {
    pub(crate) fn workload(&self) -> workload_probe::Result<WorkloadRef> {
        WorkloadRef::new(&self.workload_kind, &self.workload_gv, &self.workload_name)
    }

    pub(crate) fn poll_config(&self) -> workload_probe::Result<PollConfig> {
        PollConfig::new(self.list_interval).map(|config| {
            config
                .max_checks_per_cycle(self.max_pods_count)
                .on_list_failure(self.on_list_error)
        })
    }
}
