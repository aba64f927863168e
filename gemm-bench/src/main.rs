use std::process::exit;

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        exit(e.exit_code())
    }
}

#[cfg(detected_clblast)]
fn run() -> opencl::Result<()> {
    use gemm_bench::{BenchConfig, ClblastGemm, Summary, Workload, measure};
    use opencl::Platform;

    let cfg = BenchConfig::default();

    let device = Platform::first()?.first_gpu()?;
    println!("\n{}\n", device.info()?);

    let ctx = device.context()?;
    let queue = ctx.queue()?;

    let workload = Workload::random(&cfg);
    let mut gemm = ClblastGemm::new(&ctx, &queue, &workload, &cfg)?;

    let samples = measure(&mut gemm, &cfg)?;
    if let Some(summary) = Summary::of(&samples) {
        summary.print(&cfg)
    }
    Ok(())
}

#[cfg(not(detected_clblast))]
fn run() -> opencl::Result<()> {
    // Built without an OpenCL SDK and CLBlast; there is nothing to select.
    Err(opencl::Error {
        step: "Locating OpenCL and CLBlast",
        code: -1001, // CL_PLATFORM_NOT_FOUND_KHR
    })
}
