//! Engine configuration

use crate::executor::ExecutionMode;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Worker count for parallel execution (None = detected cores)
    pub threads: Option<usize>,
    /// Minimum sentence count before the parallel path engages;
    /// smaller documents degrade to the sequential executor
    pub min_parallel_sentences: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Auto,
            threads: None,
            min_parallel_sentences: 64,
        }
    }
}

impl EngineConfig {
    /// Single-threaded configuration
    pub fn sequential() -> Self {
        Self {
            execution_mode: ExecutionMode::Sequential,
            threads: Some(1),
            ..Default::default()
        }
    }

    /// Parallel configuration; still degrades below the sentence
    /// threshold
    pub fn parallel() -> Self {
        Self {
            execution_mode: ExecutionMode::Parallel,
            ..Default::default()
        }
    }

    /// Effective worker count for the parallel path
    pub fn worker_count(&self) -> usize {
        match self.threads {
            Some(count) => count.max(1),
            None => detected_cores(),
        }
    }
}

#[cfg(feature = "parallel")]
fn detected_cores() -> usize {
    num_cpus::get()
}

#[cfg(not(feature = "parallel"))]
fn detected_cores() -> usize {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_auto() {
        let config = EngineConfig::default();
        assert_eq!(config.execution_mode, ExecutionMode::Auto);
        assert_eq!(config.min_parallel_sentences, 64);
    }

    #[test]
    fn sequential_preset_pins_one_worker() {
        let config = EngineConfig::sequential();
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
        assert_eq!(config.worker_count(), 1);
    }

    #[test]
    fn explicit_zero_threads_is_lifted_to_one() {
        let config = EngineConfig {
            threads: Some(0),
            ..Default::default()
        };
        assert_eq!(config.worker_count(), 1);
    }
}
