mod deadline;
mod display;
mod fcfs;
mod mlq;
mod priority;
mod process;
mod session;
mod sjf;
mod stats;

use std::fmt;

pub use process::Process;
pub use session::Session;
pub use stats::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Fcfs,
    Sjf,
    Priority,
    Deadline,
    Mlq,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::Deadline,
        Algorithm::Mlq,
    ];

    pub fn key(self) -> char {
        match self {
            Algorithm::Fcfs => 'A',
            Algorithm::Sjf => 'B',
            Algorithm::Priority => 'C',
            Algorithm::Deadline => 'D',
            Algorithm::Mlq => 'E',
        }
    }

    pub fn from_choice(choice: char) -> Option<Self> {
        let choice = choice.to_ascii_uppercase();
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.key() == choice)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Algorithm::Fcfs => write!(f, "First Come First Serve (FCFS)"),
            Algorithm::Sjf => write!(f, "Shortest Job First (SJF)"),
            Algorithm::Priority => write!(f, "Priority (Prio)"),
            Algorithm::Deadline => write!(f, "Deadline"),
            Algorithm::Mlq => write!(f, "Multilevel Queue (MLQ)"),
        }
    }
}

// Shared non-preemptive clock loop: runs the processes to completion in the
// order they were sorted into, inserting idle time before late arrivals.
pub(crate) fn run_to_completion(processes: &mut [Process]) {
    let mut time = 0;
    for process in processes.iter_mut() {
        time = time.max(process.arrival());
        process.record_start(time);
        time += process.burst();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_maps_to_algorithm_case_insensitively() {
        assert_eq!(Algorithm::from_choice('a'), Some(Algorithm::Fcfs));
        assert_eq!(Algorithm::from_choice('E'), Some(Algorithm::Mlq));
        assert_eq!(Algorithm::from_choice('f'), None);
        assert_eq!(Algorithm::from_choice('?'), None);
    }

    #[test]
    fn clock_loop_inserts_idle_time_before_late_arrival() {
        let mut processes = vec![Process::new(1, 0, 2), Process::new(2, 7, 3)];
        run_to_completion(&mut processes);

        assert_eq!(processes[0].waiting(), 0);
        assert_eq!(processes[0].turnaround(), 2);
        // Clock idles from 2 to 7, then P2 runs immediately
        assert_eq!(processes[1].waiting(), 0);
        assert_eq!(processes[1].turnaround(), 3);
    }
}
