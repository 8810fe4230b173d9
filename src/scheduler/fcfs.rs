use super::process::{working_set, Process};
use super::run_to_completion;

/// First-Come-First-Served: processes run in arrival order, ties broken by
/// input order (the sort is stable).
pub fn schedule(processes: &[Process]) -> Vec<Process> {
    let mut scheduled = working_set(processes);
    scheduled.sort_by_key(Process::arrival);
    run_to_completion(&mut scheduled);
    scheduled
}
