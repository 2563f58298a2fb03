/// Sorted snapshot of one metric across a batch.
#[derive(Debug, Clone, Default)]
pub struct MetricDistribution {
    sorted: Vec<u64>,
}

impl MetricDistribution {
    pub fn from_values(values: impl IntoIterator<Item = u64>) -> Self {
        let mut sorted: Vec<u64> = values.into_iter().collect();
        sorted.sort_unstable();
        Self { sorted }
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Share of the batch strictly below `value`, scaled to 0..=100.
    ///
    /// Ties rank at the position of the first tied element, so a batch of
    /// identical values ranks every member at 0. A value above every element
    /// ranks at 100.
    pub fn percentile_rank(&self, value: u64) -> f64 {
        if self.sorted.is_empty() {
            return 0.0;
        }
        let index = self.sorted.partition_point(|candidate| *candidate < value);
        if index == self.sorted.len() {
            return 100.0;
        }
        index as f64 / self.sorted.len() as f64 * 100.0
    }
}
