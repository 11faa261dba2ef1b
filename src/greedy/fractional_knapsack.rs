use tracing::{debug, trace};

/// An item that can be split into arbitrary fractions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    /// Value per unit of weight; weightless items come first
    fn ratio(&self) -> f64 {
        if self.weight > 0.0 {
            self.value / self.weight
        } else {
            f64::INFINITY
        }
    }
}

/// Returns the largest total value that fits into `capacity` if items may be taken partially.
///
/// Items are taken by descending value per weight; the first item that does not fit completely
/// fills the remaining capacity. A non-positive capacity still takes weightless items.
///
/// # Examples
/// ```
/// use algo_classics::greedy::{fractional_knapsack, Item};
///
/// let items = [Item::new(10.0, 60.0), Item::new(20.0, 100.0), Item::new(30.0, 120.0)];
/// assert_eq!(fractional_knapsack(&items, 50.0), 240.0);
/// ```
pub fn fractional_knapsack(items: &[Item], capacity: f64) -> f64 {
    let mut by_ratio = items.to_vec();
    by_ratio.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));

    let mut remaining = capacity.max(0.0);
    let mut total = 0.0;

    for item in by_ratio {
        if item.weight <= remaining {
            total += item.value;
            remaining -= item.weight;
        } else {
            let fraction = remaining / item.weight;
            trace!(fraction, "take item partially");
            total += item.value * fraction;
            break;
        }
    }

    debug!(n = items.len(), capacity, total, "filled fractional knapsack");
    total
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn items(weights: &[f64], values: &[f64]) -> Vec<Item> {
        weights
            .iter()
            .zip(values)
            .map(|(&weight, &value)| Item::new(weight, value))
            .collect()
    }

    #[rstest]
    #[case::basic(&[10.0, 20.0, 30.0], &[60.0, 100.0, 120.0], 50.0, 240.0)]
    #[case::mixed_ratios(&[3.0, 3.0, 2.0, 5.0, 1.0], &[10.0, 15.0, 10.0, 12.0, 8.0], 10.0, 45.4)]
    #[case::smaller_than_any(&[10.0, 20.0, 30.0], &[60.0, 100.0, 120.0], 5.0, 30.0)]
    #[case::all_items(&[10.0, 20.0, 30.0], &[60.0, 100.0, 120.0], 100.0, 280.0)]
    #[case::zero_capacity(&[10.0, 20.0, 30.0], &[60.0, 100.0, 120.0], 0.0, 0.0)]
    #[case::empty(&[], &[], 50.0, 0.0)]
    #[case::weightless(&[0.0, 4.0], &[7.0, 8.0], 2.0, 11.0)]
    #[case::weightless_no_capacity(&[0.0, 4.0], &[7.0, 8.0], 0.0, 7.0)]
    fn fixtures(
        #[case] weights: &[f64],
        #[case] values: &[f64],
        #[case] capacity: f64,
        #[case] expected: f64,
    ) {
        let total = fractional_knapsack(&items(weights, values), capacity);
        assert!((total - expected).abs() < 1e-9, "{total} != {expected}");
    }
}
