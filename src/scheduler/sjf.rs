use super::process::{working_set, Process};

/// Non-preemptive Shortest-Job-First. The returned sequence is sorted by
/// (arrival, burst); that order is the report order, while the simulation
/// below decides the actual execution order.
pub fn schedule(processes: &[Process]) -> Vec<Process> {
    let mut scheduled = working_set(processes);
    scheduled.sort_by_key(|process| (process.arrival(), process.burst()));

    let mut done = vec![false; scheduled.len()];
    let mut completed = 0;
    let mut time = 0;

    while completed < scheduled.len() {
        // Among arrived, uncompleted processes pick the shortest burst;
        // min_by_key keeps the first on ties, so scan order breaks them.
        let next = scheduled
            .iter()
            .enumerate()
            .filter(|&(index, process)| !done[index] && process.arrival() <= time)
            .min_by_key(|&(_, process)| process.burst())
            .map(|(index, _)| index);

        match next {
            Some(index) => {
                let process = &mut scheduled[index];
                process.record_start(time);
                time += process.burst();
                done[index] = true;
                completed += 1;
            }
            None => {
                // Nothing has arrived yet; idle until the next arrival
                let next_arrival = scheduled
                    .iter()
                    .enumerate()
                    .filter(|&(index, _)| !done[index])
                    .map(|(_, process)| process.arrival())
                    .min();
                if let Some(arrival) = next_arrival {
                    time = arrival;
                }
            }
        }
    }

    scheduled
}
