use super::process::{working_set, Process};
use super::run_to_completion;

/// Non-preemptive priority scheduling. Arrival time dominates; the priority
/// number (lower = more urgent) only breaks ties between equal arrivals.
/// `priorities` is indexed by input order, one value per process.
pub fn schedule(processes: &[Process], priorities: &[i32]) -> Vec<Process> {
    let mut scheduled = working_set(processes);
    for (process, &priority) in scheduled.iter_mut().zip(priorities) {
        process.set_priority(priority);
    }

    scheduled.sort_by_key(|process| (process.arrival(), process.priority()));
    run_to_completion(&mut scheduled);
    scheduled
}
