mod config;
mod driver;
mod stats;
mod workload;

#[cfg(detected_clblast)]
mod engine;

pub use config::BenchConfig;
pub use driver::{Gemm, measure};
pub use stats::Summary;
pub use workload::Workload;

#[cfg(detected_clblast)]
pub use engine::ClblastGemm;

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    struct Tracked {
        name: &'static str,
        released: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.released.borrow_mut().push(self.name)
        }
    }

    /// Mirrors the resource nesting in `run`: context, then queue, then the
    /// three buffers, dropped once each in reverse order of acquisition.
    #[test]
    fn release_reverses_acquisition() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let track = |name| Tracked {
            name,
            released: released.clone(),
        };
        {
            let _ctx = track("context");
            let _queue = track("queue");
            let _bufs = [track("buffer a"), track("buffer b"), track("buffer c")];
        }
        assert_eq!(
            *released.borrow(),
            ["buffer a", "buffer b", "buffer c", "queue", "context"]
        );
    }
}
