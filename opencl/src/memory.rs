use crate::{AsRaw, CommandQueue, Context, Error, Result, bindings as cl};
use std::mem::size_of_val;

/// Device access mode for a buffer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Access {
    ReadOnly,
    ReadWrite,
}

/// A device-resident buffer, populated from a host slice at creation.
pub struct DevBlob<'a> {
    mem: cl::cl_mem,
    len: usize,
    _ctx: &'a Context,
}

impl Context {
    /// Allocates a device buffer of the slice's byte size and copies the
    /// slice into it. `step` names the buffer in any diagnostic.
    pub fn from_host<T: Copy>(
        &self,
        slice: &[T],
        access: Access,
        step: &'static str,
    ) -> Result<DevBlob<'_>> {
        let len = size_of_val(slice);
        let flags = match access {
            Access::ReadOnly => cl::CL_MEM_READ_ONLY,
            Access::ReadWrite => cl::CL_MEM_READ_WRITE,
        } | cl::CL_MEM_COPY_HOST_PTR;
        let mut err = 0;
        let mem = unsafe {
            cl::clCreateBuffer(
                self.as_raw(),
                flags as _,
                len,
                slice.as_ptr().cast_mut().cast(),
                &mut err,
            )
        };
        Error::check(err, step)?;
        Ok(DevBlob {
            mem,
            len,
            _ctx: self,
        })
    }
}

impl Drop for DevBlob<'_> {
    #[inline]
    fn drop(&mut self) {
        if let Err(e) = cl!(clReleaseMemObject(self.mem), "Releasing buffer") {
            log::warn!("{e}")
        }
    }
}

impl AsRaw for DevBlob<'_> {
    type Raw = cl::cl_mem;
    #[inline]
    unsafe fn as_raw(&self) -> Self::Raw {
        self.mem
    }
}

impl DevBlob<'_> {
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Blocking read of the device contents back into `slice`.
    pub fn copy_out<T: Copy>(&self, slice: &mut [T], queue: &CommandQueue) -> Result<()> {
        let len = size_of_val(slice);
        assert_eq!(len, self.len);
        cl!(
            clEnqueueReadBuffer(
                queue.as_raw(),
                self.mem,
                CL_TRUE,
                0,
                len,
                slice.as_mut_ptr().cast(),
                0,
                core::ptr::null(),
                core::ptr::null_mut()
            ),
            "Reading buffer"
        )
    }
}
