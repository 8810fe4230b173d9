use super::process::Process;

/// Summary of one scheduling run: the processes in the order the algorithm
/// reported them, plus averaged waiting/turnaround figures.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    processes: Vec<Process>,
    average_waiting: f64,
    average_turnaround: f64,
}

impl Report {
    pub fn new(processes: Vec<Process>) -> Self {
        // An empty run (possible only for a degenerate queue subset) reports
        // zero averages instead of dividing by zero.
        let count = processes.len().max(1) as f64;
        let average_waiting = processes
            .iter()
            .map(|process| process.waiting() as f64)
            .sum::<f64>()
            / count;
        let average_turnaround = processes
            .iter()
            .map(|process| process.turnaround() as f64)
            .sum::<f64>()
            / count;

        Self {
            processes,
            average_waiting,
            average_turnaround,
        }
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn average_waiting(&self) -> f64 {
        self.average_waiting
    }

    pub fn average_turnaround(&self) -> f64 {
        self.average_turnaround
    }
}
