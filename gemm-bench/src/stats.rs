use crate::BenchConfig;
use std::time::Duration;

/// The two statistics the report derives from the sample sequence: the
/// arithmetic mean ("average") and the minimum ("peak", the most
/// favorable single run).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Summary {
    pub avg: Duration,
    pub min: Duration,
}

impl Summary {
    /// Reduces a sample sequence; `None` when it is empty.
    pub fn of(samples: &[Duration]) -> Option<Self> {
        let min = samples.iter().min().copied()?;
        let avg = samples.iter().sum::<Duration>() / samples.len() as u32;
        Some(Self { avg, min })
    }

    /// Throughput for `flops` operations finished in `time`, in billions
    /// of floating-point operations per second.
    #[inline]
    pub fn gflops(flops: u64, time: Duration) -> f64 {
        flops as f64 / (time.as_secs_f64() * 1e9)
    }

    /// Prints the report block in the fixed reference format.
    pub fn print(&self, cfg: &BenchConfig) {
        let flops = cfg.flops();
        println!("Matrix dimensions: {}x{} * {}x{}", cfg.m, cfg.k, cfg.k, cfg.n);
        println!("Average time: {} ms", self.avg.as_secs_f64() * 1000.);
        println!("Best time: {} ms", self.min.as_secs_f64() * 1000.);
        println!(
            "Average Performance: {} GFLOPS",
            Self::gflops(flops, self.avg)
        );
        println!("Peak Performance: {} GFLOPS", Self::gflops(flops, self.min));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn min_avg_max_ordered() {
        let samples = [14, 10, 12, 11, 18, 10, 13, 12, 11, 15].map(Duration::from_millis);
        let max = samples.iter().max().copied().unwrap();
        let Summary { avg, min } = Summary::of(&samples).unwrap();
        assert_eq!(min, Duration::from_millis(10));
        assert!(min <= avg && avg <= max);
    }

    #[test]
    fn peak_at_least_avg() {
        let samples = [10, 11, 12].map(Duration::from_millis);
        let summary = Summary::of(&samples).unwrap();
        let flops = BenchConfig::default().flops();
        assert!(Summary::gflops(flops, summary.min) >= Summary::gflops(flops, summary.avg));
    }

    #[test]
    fn gflops_formula() {
        // 2·2048³ = 17,179,869,184 operations in 10 ms.
        let flops = BenchConfig::default().flops();
        let peak = Summary::gflops(flops, Duration::from_millis(10));
        assert!((peak - 1717.9869184).abs() < 1e-9);
    }
}
