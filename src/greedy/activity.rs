use tracing::debug;

/// Returns the indices of all activities sorted by end time (stable, so ties keep input order)
fn by_end_time<T: Ord + Copy>(activities: &[(T, T)]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&i| activities[i].1);
    order
}

/// Selects a maximum number of pairwise compatible activities `(start, end)`.
/// Two activities are compatible if one starts no earlier than the other ends.
/// Returns the indices of the chosen activities in order of their end times.
///
/// # Examples
/// ```
/// use algo_classics::greedy::select_activities;
///
/// let activities = [(1, 3), (2, 5), (4, 6), (6, 7), (5, 9), (8, 9)];
/// assert_eq!(select_activities(&activities), vec![0, 2, 3, 5]);
/// ```
pub fn select_activities<T: Ord + Copy>(activities: &[(T, T)]) -> Vec<usize> {
    let mut selected: Vec<usize> = Vec::new();
    let mut last_end = None;

    for i in by_end_time(activities) {
        let (start, end) = activities[i];
        if last_end.is_none_or(|last| start >= last) {
            selected.push(i);
            last_end = Some(end);
        }
    }

    debug!(n = activities.len(), selected = selected.len(), "selected activities");
    selected
}

/// Same as [`select_activities`] but finds each next compatible activity recursively
pub fn select_activities_recursive<T: Ord + Copy>(activities: &[(T, T)]) -> Vec<usize> {
    fn select_from<T: Ord + Copy>(
        activities: &[(T, T)],
        order: &[usize],
        last_end: Option<T>,
        selected: &mut Vec<usize>,
    ) {
        let Some((&i, rest)) = order.split_first() else {
            return;
        };

        let (start, end) = activities[i];
        if last_end.is_none_or(|last| start >= last) {
            selected.push(i);
            select_from(activities, rest, Some(end), selected);
        } else {
            select_from(activities, rest, last_end, selected);
        }
    }

    let mut selected = Vec::new();
    select_from(activities, &by_end_time(activities), None, &mut selected);
    selected
}
