//! Welch's t-test over two sets of per-call timings

use statrs::distribution::{ContinuousCDF, StudentsT};
use std::time::Instant;

use super::config::TestConfig;

/// Summary of a timing comparison
#[derive(Debug)]
pub struct TimingAnalysis {
    pub mean_a: f64,
    pub mean_b: f64,
    pub std_dev_a: f64,
    pub std_dev_b: f64,
    pub mean_ratio: f64,
    pub t_statistic: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
    pub combined_score: f64,
    pub is_constant_time: bool,
}

impl TimingAnalysis {
    /// Print the figures a failing run needs to be diagnosed
    pub fn report(&self, name: &str) {
        println!("{} timing analysis:", name);
        println!("  Mean times: {:.2} ns vs {:.2} ns", self.mean_a, self.mean_b);
        println!("  Mean ratio: {:.3}", self.mean_ratio);
        println!(
            "  t-statistic: {:.3} (df {:.1}, p {:.4})",
            self.t_statistic, self.degrees_of_freedom, self.p_value
        );
        println!("  Combined score: {:.3}", self.combined_score);
    }
}

pub struct TimingTester {
    pub num_samples: usize,
    pub num_iterations: usize,
}

impl TimingTester {
    pub fn new(num_samples: usize, num_iterations: usize) -> Self {
        Self {
            num_samples,
            num_iterations,
        }
    }

    pub fn from_config(config: &TestConfig) -> Self {
        Self::new(config.num_samples, config.num_iterations)
    }

    /// Average nanoseconds per call of `f`, one entry per sample
    pub fn measure<F>(&self, mut f: F) -> Vec<u128>
    where
        F: FnMut(),
    {
        let iterations = self.num_iterations.max(1) as u128;
        (0..self.num_samples)
            .map(|_| {
                let start = Instant::now();
                for _ in 0..iterations {
                    f();
                }
                start.elapsed().as_nanos() / iterations
            })
            .collect()
    }

    pub fn mean(times: &[u128]) -> f64 {
        times.iter().sum::<u128>() as f64 / times.len() as f64
    }

    pub fn variance(times: &[u128], mean: f64) -> f64 {
        let ss: f64 = times
            .iter()
            .map(|&t| {
                let d = t as f64 - mean;
                d * d
            })
            .sum();
        ss / (times.len() as f64 - 1.0)
    }

    /// Drop samples outside 1.5 IQR of the quartiles
    pub fn remove_outliers(times: &[u128]) -> Vec<u128> {
        if times.len() < 4 {
            return times.to_vec();
        }

        let mut sorted = times.to_vec();
        sorted.sort_unstable();
        let q1 = sorted[sorted.len() / 4] as f64;
        let q3 = sorted[sorted.len() * 3 / 4] as f64;
        let iqr = q3 - q1;
        let (lo, hi) = (q1 - 1.5 * iqr, q3 + 1.5 * iqr);

        times
            .iter()
            .filter(|&&t| (t as f64) >= lo && (t as f64) <= hi)
            .copied()
            .collect()
    }

    fn p_value(t_stat: f64, df: f64) -> f64 {
        if !(df >= 1.0 && df.is_finite()) {
            return 0.0;
        }
        match StudentsT::new(0.0, 1.0, df) {
            Ok(dist) => (2.0 * (1.0 - dist.cdf(t_stat.abs()))).clamp(0.0, 1.0),
            Err(_) => 0.0,
        }
    }

    fn combined_score(mean_ratio: f64, t_stat: f64, rel_std_dev: f64) -> f64 {
        let score = 1.0 + (mean_ratio - 1.0) * 0.5 + (t_stat / 10.0) * 0.2 + rel_std_dev * 0.3;
        if score.is_finite() && score >= 1.0 {
            score
        } else {
            mean_ratio
        }
    }

    /// Compare two timing sets after outlier removal
    pub fn analyze(
        &self,
        times_a: &[u128],
        times_b: &[u128],
        config: &TestConfig,
    ) -> Result<TimingAnalysis, String> {
        let a = Self::remove_outliers(times_a);
        let b = Self::remove_outliers(times_b);
        if a.len() < 2 || b.len() < 2 {
            return Err("not enough samples left after outlier removal".to_string());
        }

        let mean_a = Self::mean(&a);
        let mean_b = Self::mean(&b);
        let var_a = Self::variance(&a, mean_a);
        let var_b = Self::variance(&b, mean_b);
        let (n_a, n_b) = (a.len() as f64, b.len() as f64);

        let se2_a = var_a / n_a;
        let se2_b = var_b / n_b;
        let t_statistic = (mean_a - mean_b).abs() / (se2_a + se2_b).sqrt();
        let degrees_of_freedom =
            (se2_a + se2_b).powi(2) / (se2_a.powi(2) / (n_a - 1.0) + se2_b.powi(2) / (n_b - 1.0));
        let p_value = Self::p_value(t_statistic, degrees_of_freedom);

        let mean_ratio = mean_a.max(mean_b) / mean_a.min(mean_b);
        let rel_std_dev = f64::max(var_a.sqrt() / mean_a, var_b.sqrt() / mean_b);
        let combined_score = Self::combined_score(mean_ratio, t_statistic, rel_std_dev);

        Ok(TimingAnalysis {
            mean_a,
            mean_b,
            std_dev_a: var_a.sqrt(),
            std_dev_b: var_b.sqrt(),
            mean_ratio,
            t_statistic,
            degrees_of_freedom,
            p_value,
            combined_score,
            is_constant_time: combined_score <= config.combined_score_threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_samples_pass() {
        let tester = TimingTester::new(10, 1);
        let a = vec![100, 101, 99, 100, 102, 98, 100, 101, 99, 100];
        let analysis = tester.analyze(&a, &a, &TestConfig::default()).unwrap();
        assert!(analysis.is_constant_time);
        assert!((analysis.mean_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_samples_fail() {
        let tester = TimingTester::new(10, 1);
        let a = vec![100, 101, 99, 100, 102, 98, 100, 101, 99, 100];
        let b: Vec<u128> = a.iter().map(|t| t * 3).collect();
        let analysis = tester.analyze(&a, &b, &TestConfig::default()).unwrap();
        assert!(!analysis.is_constant_time);
    }

    #[test]
    fn test_outliers_removed() {
        let times = vec![10, 11, 10, 12, 11, 10, 1000];
        assert_eq!(TimingTester::remove_outliers(&times).len(), 6);
    }
}
