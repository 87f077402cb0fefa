use serde::Serialize;

/// CPU % samples, one row per resolved process, one column per iteration.
///
/// Cells start at 0.0, the sentinel for "not yet sampled" and for "process
/// gone", and are written one (process, iteration) pair at a time. Stored
/// values are clamped to [0, 100].
#[derive(Debug, Clone, Serialize)]
pub struct SampleMatrix {
    iterations: usize,
    rows: Vec<Vec<f32>>,
}

impl SampleMatrix {
    pub fn new(process_count: usize, iterations: usize) -> Self {
        Self {
            iterations,
            rows: vec![vec![0.0; iterations]; process_count],
        }
    }

    pub fn process_count(&self) -> usize {
        self.rows.len()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Record one sample, clamped to the [0, 100] plot range.
    pub fn record(&mut self, process_index: usize, iteration: usize, cpu_percent: f32) {
        self.rows[process_index][iteration] = cpu_percent.clamp(0.0, 100.0);
    }

    /// The full series for one process, in iteration order.
    pub fn row(&self, process_index: usize) -> &[f32] {
        &self.rows[process_index]
    }
}
