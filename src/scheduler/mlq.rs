use super::process::Process;
use super::{fcfs, sjf};

/// Two-level multilevel queue. The split is structural: odd ids go to queue 1
/// (scheduled FCFS), even ids to queue 2 (scheduled SJF). The queues never
/// share CPU time; each subset's clock starts at 0 and only sees arrivals
/// within that subset.
pub fn schedule(processes: &[Process]) -> (Vec<Process>, Vec<Process>) {
    let (queue1, queue2): (Vec<Process>, Vec<Process>) = processes
        .iter()
        .cloned()
        .partition(|process| process.id() % 2 == 1);

    (fcfs::schedule(&queue1), sjf::schedule(&queue2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_by_id_parity() {
        let processes: Vec<Process> = (1..=5)
            .map(|id| Process::new(id, 0, id))
            .collect();
        let (queue1, queue2) = schedule(&processes);

        let mut ids1: Vec<u32> = queue1.iter().map(Process::id).collect();
        let mut ids2: Vec<u32> = queue2.iter().map(Process::id).collect();
        ids1.sort_unstable();
        ids2.sort_unstable();
        assert_eq!(ids1, vec![1, 3, 5]);
        assert_eq!(ids2, vec![2, 4]);
    }

    #[test]
    fn every_process_lands_in_exactly_one_queue() {
        let processes: Vec<Process> = (1..=7)
            .map(|id| Process::new(id, id % 3, 2))
            .collect();
        let (queue1, queue2) = schedule(&processes);

        let mut ids: Vec<u32> = queue1
            .iter()
            .chain(queue2.iter())
            .map(Process::id)
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn queue_clocks_are_independent() {
        // P1 (odd queue) arrives late; P2 (even queue) arrives at 0. Neither
        // waits, because neither queue sees the other's processes.
        let processes = vec![Process::new(1, 6, 2), Process::new(2, 0, 9)];
        let (queue1, queue2) = schedule(&processes);

        assert_eq!(queue1[0].waiting(), 0);
        assert_eq!(queue2[0].waiting(), 0);
    }

    #[test]
    fn queue2_uses_shortest_job_first() {
        let processes = vec![
            Process::new(1, 0, 1),
            Process::new(2, 0, 6),
            Process::new(3, 0, 1),
            Process::new(4, 0, 2),
        ];
        let (_, queue2) = schedule(&processes);

        // P4 (burst 2) runs before P2 (burst 6)
        let p2 = queue2.iter().find(|p| p.id() == 2).unwrap();
        let p4 = queue2.iter().find(|p| p.id() == 4).unwrap();
        assert_eq!(p4.waiting(), 0);
        assert_eq!(p2.waiting(), 2);
    }
}
