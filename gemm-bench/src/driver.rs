use crate::BenchConfig;
use opencl::Result;
use std::time::{Duration, Instant};

/// One synchronous kernel invocation: submit, then block until the device
/// has finished. A successful return means the computation is complete, so
/// a timestamp taken afterwards reflects true completion, not submission.
pub trait Gemm {
    fn run(&mut self) -> Result<()>;
}

/// Runs the warmup invocations untimed, then takes one wall-clock sample
/// per measured invocation. Invocations are strictly sequential; each
/// sample covers exactly one submission and its completion wait.
///
/// Any error aborts the whole measurement; no partial sample sequence is
/// ever returned.
pub fn measure(gemm: &mut impl Gemm, cfg: &BenchConfig) -> Result<Vec<Duration>> {
    for _ in 0..cfg.warmup {
        gemm.run()?;
    }
    let mut samples = Vec::with_capacity(cfg.repetitions);
    for _ in 0..cfg.repetitions {
        let start = Instant::now();
        gemm.run()?;
        samples.push(start.elapsed());
    }
    Ok(samples)
}

#[cfg(test)]
mod test {
    use super::*;
    use opencl::Error;

    #[derive(Default)]
    struct FakeGemm {
        calls: usize,
        log: Vec<&'static str>,
        fail_at: Option<usize>,
    }

    impl Gemm for FakeGemm {
        fn run(&mut self) -> Result<()> {
            self.calls += 1;
            if self.fail_at == Some(self.calls) {
                return Err(Error {
                    step: "Running SGEMM",
                    code: -36,
                });
            }
            self.log.push("submit");
            self.log.push("wait");
            Ok(())
        }
    }

    #[test]
    fn sample_count_excludes_warmup() {
        let cfg = BenchConfig {
            m: 4,
            n: 4,
            k: 4,
            warmup: 1,
            repetitions: 10,
        };
        let mut gemm = FakeGemm::default();
        let samples = measure(&mut gemm, &cfg).unwrap();
        assert_eq!(samples.len(), 10);
        assert_eq!(gemm.calls, 11);
        assert!(samples.iter().all(|d| *d >= Duration::ZERO));
    }

    #[test]
    fn submit_then_wait_each_call() {
        let cfg = BenchConfig {
            m: 4,
            n: 4,
            k: 4,
            warmup: 2,
            repetitions: 3,
        };
        let mut gemm = FakeGemm::default();
        measure(&mut gemm, &cfg).unwrap();
        // Every invocation completes before the next one is submitted.
        assert_eq!(gemm.log.len(), 2 * (2 + 3));
        for call in gemm.log.chunks(2) {
            assert_eq!(call, ["submit", "wait"]);
        }
    }

    #[test]
    fn error_aborts_without_partial_samples() {
        let cfg = BenchConfig {
            warmup: 1,
            repetitions: 10,
            ..Default::default()
        };
        let mut gemm = FakeGemm {
            fail_at: Some(5),
            ..Default::default()
        };
        let err = measure(&mut gemm, &cfg).unwrap_err();
        assert_eq!(err.code, -36);
        assert_eq!(err.exit_code(), -36);
        assert_eq!(gemm.calls, 5);
    }
}
