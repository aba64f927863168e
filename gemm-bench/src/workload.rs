use crate::BenchConfig;
use rand::Rng;

/// Host-side matrices for one run: `a` is m×k, `b` is k×n, both row-major;
/// `c` is m×n and starts zeroed.
pub struct Workload {
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub c: Vec<f32>,
}

impl Workload {
    /// Fills `a` and `b` with values uniform over [-1, 1) from an
    /// entropy-seeded generator. Contents differ run to run; the benchmark
    /// measures throughput, not reproducible numerics.
    pub fn random(cfg: &BenchConfig) -> Self {
        let mut rng = rand::rng();
        let mut rand_mat = |len: usize| -> Vec<f32> {
            (0..len).map(|_| rng.random_range(-1.0f32..1.0)).collect()
        };
        Self {
            a: rand_mat(cfg.m * cfg.k),
            b: rand_mat(cfg.k * cfg.n),
            c: vec![0.; cfg.m * cfg.n],
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_random() {
        let cfg = BenchConfig {
            m: 3,
            n: 5,
            k: 4,
            ..Default::default()
        };
        let workload = Workload::random(&cfg);
        assert_eq!(workload.a.len(), 12);
        assert_eq!(workload.b.len(), 20);
        assert_eq!(workload.c.len(), 15);
        assert!(workload.a.iter().all(|x| (-1.0..1.0).contains(x)));
        assert!(workload.b.iter().all(|x| (-1.0..1.0).contains(x)));
        assert!(workload.c.iter().all(|&x| x == 0.));
    }
}
