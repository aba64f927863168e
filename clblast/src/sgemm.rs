use crate::bindings as blast;
use opencl::{AsRaw, CommandQueue, DevBlob, Error, Event, Result};
use std::ptr::null_mut;

/// Submits one row-major single-precision `C = alpha A B + beta C` to the
/// queue and returns its completion event without waiting for it.
///
/// Neither operand is transposed. Leading dimensions are the packed row
/// lengths: `k` for A, `n` for B and C.
#[allow(clippy::too_many_arguments)]
pub fn sgemm(
    queue: &CommandQueue,
    (m, n, k): (usize, usize, usize),
    alpha: f32,
    a: &DevBlob,
    b: &DevBlob,
    beta: f32,
    c: &mut DevBlob,
) -> Result<Event> {
    let mut q = unsafe { queue.as_raw() } as _;
    let mut event = null_mut();
    let status = unsafe {
        blast::CLBlastSgemm(
            blast::CLBlastLayout_::CLBlastLayoutRowMajor,
            blast::CLBlastTranspose_::CLBlastTransposeNo,
            blast::CLBlastTranspose_::CLBlastTransposeNo,
            m,
            n,
            k,
            alpha,
            a.as_raw() as _,
            0,
            k,
            b.as_raw() as _,
            0,
            n,
            beta,
            c.as_raw() as _,
            0,
            n,
            &mut q,
            &mut event,
        )
    };
    Error::check(status as i32, "Running SGEMM")?;
    Ok(unsafe { Event::from_raw(event as _) })
}
