//! Thresholds and sample sizes for timing comparisons

/// Sample sizes and the score above which two timing sets are considered
/// distinguishable
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub t_stat_threshold: f64,
    pub combined_score_threshold: f64,
    pub num_warmup: usize,
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            t_stat_threshold: 1.7,
            combined_score_threshold: 1.8,
            num_warmup: 100,
            num_samples: 25,
            num_iterations: 100,
        }
    }
}

impl TestConfig {
    pub fn with_warmup(mut self, warmup: usize) -> Self {
        self.num_warmup = warmup;
        self
    }

    pub fn with_samples_and_iterations(mut self, samples: usize, iterations: usize) -> Self {
        self.num_samples = samples;
        self.num_iterations = iterations;
        self
    }

    pub fn with_t_stat_threshold(mut self, threshold: f64) -> Self {
        self.t_stat_threshold = threshold;
        self
    }

    pub fn with_combined_score_threshold(mut self, threshold: f64) -> Self {
        self.combined_score_threshold = threshold;
        self
    }
}

// Per-operation presets
impl TestConfig {
    /// Cheap field operations: comparisons, decoding
    pub fn for_field_op() -> Self {
        Self::default()
            .with_warmup(1000)
            .with_samples_and_iterations(25, 1000)
    }

    /// Fixed-length exponentiation, a few hundred multiplications per call
    pub fn for_pow() -> Self {
        Self::default()
            .with_samples_and_iterations(20, 50)
            .with_t_stat_threshold(2.0)
            .with_combined_score_threshold(2.0)
    }

    /// `Fp12` exponentiation, much slower per call
    pub fn for_fp12_pow() -> Self {
        Self::default()
            .with_warmup(5)
            .with_samples_and_iterations(10, 5)
            .with_t_stat_threshold(2.2)
            .with_combined_score_threshold(2.2)
    }
}
