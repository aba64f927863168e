use crate::{BenchConfig, Workload, driver::Gemm};
use opencl::{Access, CommandQueue, Context, DevBlob, Result};

/// The CLBlast-backed execution engine. Owns the device-resident copies of
/// the workload; they are uploaded once here and released when the engine
/// is dropped, never read back.
pub struct ClblastGemm<'a> {
    queue: &'a CommandQueue<'a>,
    a: DevBlob<'a>,
    b: DevBlob<'a>,
    c: DevBlob<'a>,
    dims: (usize, usize, usize),
}

impl<'a> ClblastGemm<'a> {
    pub fn new(
        ctx: &'a Context,
        queue: &'a CommandQueue<'a>,
        workload: &Workload,
        cfg: &BenchConfig,
    ) -> Result<Self> {
        Ok(Self {
            queue,
            a: ctx.from_host(&workload.a, Access::ReadOnly, "Creating buffer A")?,
            b: ctx.from_host(&workload.b, Access::ReadOnly, "Creating buffer B")?,
            c: ctx.from_host(&workload.c, Access::ReadWrite, "Creating buffer C")?,
            dims: (cfg.m, cfg.n, cfg.k),
        })
    }
}

impl Gemm for ClblastGemm<'_> {
    fn run(&mut self) -> Result<()> {
        let event = clblast::sgemm(self.queue, self.dims, 1., &self.a, &self.b, 0., &mut self.c)?;
        event.synchronize()
    }
}
