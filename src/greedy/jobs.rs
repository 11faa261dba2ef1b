use std::cmp::Reverse;

use tracing::{debug, trace};

/// A unit-time job that earns `profit` if it finishes no later than `deadline`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job<I> {
    pub id: I,
    pub deadline: usize,
    pub profit: u64,
}

impl<I> Job<I> {
    pub fn new(id: I, deadline: usize, profit: u64) -> Self {
        Self {
            id,
            deadline,
            profit,
        }
    }
}

/// Scheduled job ids in time-slot order together with their total profit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSchedule<I> {
    pub ids: Vec<I>,
    pub profit: u64,
}

/// Schedules unit-time jobs on a single machine to maximize the total profit.
///
/// Jobs are considered by descending profit (ties keep input order); each one is put into the
/// latest free slot before its deadline, or dropped if there is none.
///
/// # Examples
/// ```
/// use algo_classics::greedy::{sequence_jobs, Job};
///
/// let jobs = [
///     Job::new('a', 2, 100),
///     Job::new('b', 2, 20),
///     Job::new('c', 1, 40),
///     Job::new('d', 3, 35),
/// ];
/// let schedule = sequence_jobs(&jobs);
/// assert_eq!(schedule.ids, vec!['c', 'a', 'd']);
/// assert_eq!(schedule.profit, 175);
/// ```
pub fn sequence_jobs<I: Clone>(jobs: &[Job<I>]) -> JobSchedule<I> {
    let max_deadline = jobs.iter().map(|job| job.deadline).max().unwrap_or(0);
    let mut slots: Vec<Option<&Job<I>>> = vec![None; max_deadline];

    let mut by_profit: Vec<&Job<I>> = jobs.iter().collect();
    by_profit.sort_by_key(|job| Reverse(job.profit));

    for job in by_profit {
        match (0..job.deadline).rev().find(|&slot| slots[slot].is_none()) {
            Some(slot) => slots[slot] = Some(job),
            None => trace!(profit = job.profit, deadline = job.deadline, "drop job"),
        }
    }

    let scheduled: Vec<&Job<I>> = slots.into_iter().flatten().collect();
    let profit: u64 = scheduled.iter().map(|job| job.profit).sum();
    debug!(n = jobs.len(), scheduled = scheduled.len(), profit, "sequenced jobs");

    JobSchedule {
        ids: scheduled.into_iter().map(|job| job.id.clone()).collect(),
        profit,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn jobs(list: &[(&'static str, usize, u64)]) -> Vec<Job<&'static str>> {
        list.iter()
            .map(|&(id, deadline, profit)| Job::new(id, deadline, profit))
            .collect()
    }

    #[rstest]
    #[case::all_fit(&[("J1", 5, 85), ("J2", 4, 25), ("J3", 3, 16), ("J4", 3, 40)], &["J3", "J4", "J2", "J1"], 166)]
    #[case::one_dropped(&[("a", 2, 100), ("b", 2, 20), ("c", 1, 40), ("d", 3, 35)], &["c", "a", "d"], 175)]
    #[case::same_deadline(&[("a", 1, 10), ("b", 1, 15)], &["b"], 15)]
    #[case::equal_profit(&[("x", 1, 10), ("y", 1, 10)], &["x"], 10)]
    #[case::zero_deadline(&[("late", 0, 99), ("ok", 1, 1)], &["ok"], 1)]
    #[case::empty(&[], &[], 0)]
    fn fixtures(
        #[case] list: &[(&'static str, usize, u64)],
        #[case] ids: &[&'static str],
        #[case] profit: u64,
    ) {
        let schedule = sequence_jobs(&jobs(list));
        assert_eq!(schedule.ids, ids);
        assert_eq!(schedule.profit, profit);
    }

    #[test]
    fn textbook_instance() {
        let schedule = sequence_jobs(&jobs(&[
            ("a", 4, 20),
            ("b", 1, 10),
            ("c", 1, 40),
            ("d", 1, 30),
        ]));
        assert_eq!(schedule.ids, vec!["c", "a"]);
        assert_eq!(schedule.profit, 60);
    }
}
