/// Benchmark parameters. The defaults reproduce the reference workload:
/// square 2048 matrices, one untimed warmup run, ten measured runs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BenchConfig {
    /// Rows of A and C.
    pub m: usize,
    /// Columns of B and C.
    pub n: usize,
    /// Columns of A and rows of B.
    pub k: usize,
    /// Untimed invocations before measurement starts.
    pub warmup: usize,
    /// Timed invocations; also the exact length of the sample sequence.
    pub repetitions: usize,
}

impl Default for BenchConfig {
    #[inline]
    fn default() -> Self {
        Self {
            m: 2048,
            n: 2048,
            k: 2048,
            warmup: 1,
            repetitions: 10,
        }
    }
}

impl BenchConfig {
    /// Floating-point operations in one m×n×k multiply: one multiply and
    /// one add per inner-product term.
    #[inline]
    pub fn flops(&self) -> u64 {
        2 * self.m as u64 * self.n as u64 * self.k as u64
    }
}

#[test]
fn test_flops() {
    assert_eq!(BenchConfig::default().flops(), 17_179_869_184);
    let small = BenchConfig {
        m: 3,
        n: 2,
        k: 4,
        ..Default::default()
    };
    assert_eq!(small.flops(), 48);
}
