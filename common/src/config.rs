/// Record queue bound. Keeps memory proportional to the queue, not the
/// input, while leaving enough slack that the reader rarely stalls.
pub const DEFAULT_QUEUE_CAPACITY: usize = 10_000;

/// Pipeline tuning, fixed per run.
///
/// Passed into the pipeline explicitly so tests can pin the worker count.
#[derive(Clone, Debug)]
pub struct Config {
    /// Number of classifier workers.
    pub workers: usize,
    /// Capacity of the bounded record queue; the reader blocks when full.
    pub queue_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}
