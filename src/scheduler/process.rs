/// A single simulated process: the immutable attributes it was created with,
/// plus the waiting/turnaround figures a scheduling run fills in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: u32,
    arrival: u32,
    burst: u32,
    priority: i32,
    deadline: i32,
    waiting: u32,
    turnaround: u32,
}

impl Process {
    pub fn new(id: u32, arrival: u32, burst: u32) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: 0,
            deadline: 0,
            waiting: 0,
            turnaround: 0,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn arrival(&self) -> u32 {
        self.arrival
    }

    pub fn burst(&self) -> u32 {
        self.burst
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn deadline(&self) -> i32 {
        self.deadline
    }

    pub fn waiting(&self) -> u32 {
        self.waiting
    }

    pub fn turnaround(&self) -> u32 {
        self.turnaround
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    pub fn set_deadline(&mut self, deadline: i32) {
        self.deadline = deadline;
    }

    // Callers guarantee start >= arrival (the clock never selects a process
    // before it has arrived).
    pub(crate) fn record_start(&mut self, start: u32) {
        self.waiting = start - self.arrival;
        self.turnaround = self.waiting + self.burst;
    }

    /// Duplicate of this process with the computed fields zeroed, ready for
    /// a fresh scheduling run.
    pub fn fresh_copy(&self) -> Self {
        Self {
            waiting: 0,
            turnaround: 0,
            ..self.clone()
        }
    }
}

// Every algorithm schedules a private copy so the caller's set survives
// unchanged for later runs.
pub(crate) fn working_set(processes: &[Process]) -> Vec<Process> {
    processes.iter().map(Process::fresh_copy).collect()
}
