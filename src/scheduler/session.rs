use super::display::Console;
use super::{deadline, fcfs, mlq, priority, sjf};
use super::{Algorithm, Process, Report};
use crate::error::Error;

pub enum MenuChoice {
    Run(Algorithm),
    Exit,
}

/// Interactive session driver: collects a process set, dispatches menu
/// selections to the scheduling functions, and repeats until the user is
/// done.
pub struct Session {
    console: Console,
}

impl Session {
    pub fn new() -> Self {
        Self {
            console: Console::new(),
        }
    }

    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            let processes = self.collect_processes()?;

            loop {
                match self.console.prompt_choice()? {
                    MenuChoice::Run(algorithm) => self.run_algorithm(algorithm, &processes)?,
                    MenuChoice::Exit => break,
                }
            }

            if !self.console.prompt_again()? {
                break;
            }
            self.console.clear()?;
        }

        self.console.print_line("Program terminated.")
    }

    // The set built here is the session's source of truth: every algorithm
    // run works on its own copy and leaves these records untouched.
    fn collect_processes(&mut self) -> Result<Vec<Process>, Error> {
        let count = self.console.prompt_process_count()?;

        self.console.print_line("Input individual arrival time:")?;
        let mut arrivals: Vec<u32> = Vec::with_capacity(count);
        for id in 1..=count {
            arrivals.push(self.console.prompt_number(&format!("AT{}: ", id))?);
        }

        self.console.print_line("Input individual burst time:")?;
        let mut bursts = Vec::with_capacity(count);
        for id in 1..=count {
            bursts.push(self.console.prompt_positive(&format!("BT{}: ", id))?);
        }

        Ok(arrivals
            .into_iter()
            .zip(bursts)
            .enumerate()
            .map(|(index, (arrival, burst))| Process::new(index as u32 + 1, arrival, burst))
            .collect())
    }

    fn run_algorithm(&mut self, algorithm: Algorithm, processes: &[Process]) -> Result<(), Error> {
        match algorithm {
            Algorithm::Fcfs => self.report(fcfs::schedule(processes))?,
            Algorithm::Sjf => self.report(sjf::schedule(processes))?,
            Algorithm::Priority => {
                self.console.print_line("Input individual priority number:")?;
                let priorities = self.collect_attributes(processes, "Prio")?;
                self.report(priority::schedule(processes, &priorities))?;
            }
            Algorithm::Deadline => {
                self.console.print_line("Input deadline for each process:")?;
                let deadlines = self.collect_attributes(processes, "P")?;
                let requested: i32 = self
                    .console
                    .prompt_number("Enter number of output (max 3): ")?;
                // Zero or negative means no output at all
                let rounds = requested.clamp(0, deadline::MAX_REPORTS as i32) as usize;

                for (round, scheduled) in deadline::schedule(processes, &deadlines, rounds)
                    .into_iter()
                    .enumerate()
                {
                    self.console
                        .print_heading(&format!("\nOutput {}:", round + 1))?;
                    self.report(scheduled)?;
                }
            }
            Algorithm::Mlq => {
                let (queue1, queue2) = mlq::schedule(processes);
                self.console.print_heading("\n--- Queue 1: FCFS ---")?;
                self.report(queue1)?;
                self.console.print_heading("\n--- Queue 2: SJF ---")?;
                self.report(queue2)?;
            }
        }
        Ok(())
    }

    // Priority and deadline values are re-collected on every selection, never
    // cached across runs.
    fn collect_attributes(
        &mut self,
        processes: &[Process],
        label: &str,
    ) -> Result<Vec<i32>, Error> {
        let mut values = Vec::with_capacity(processes.len());
        for process in processes {
            values.push(
                self.console
                    .prompt_number(&format!("{}{}: ", label, process.id()))?,
            );
        }
        Ok(values)
    }

    fn report(&mut self, scheduled: Vec<Process>) -> Result<(), Error> {
        self.console.print_report(&Report::new(scheduled))
    }
}
