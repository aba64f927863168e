use crate::{AsRaw, Device, Error, Result, bindings as cl};
use std::ptr::{null, null_mut};

/// A device-bound session. Owns the raw context and remembers the device it
/// was created from, so queues can be bound to the same device.
#[derive(PartialEq, Eq, Hash, Debug)]
pub struct Context {
    ctx: cl::cl_context,
    dev: cl::cl_device_id,
}

impl Device {
    pub fn context(&self) -> Result<Context> {
        let dev = unsafe { self.as_raw() };
        let mut err = 0;
        let ctx = unsafe { cl::clCreateContext(null(), 1, &dev, None, null_mut(), &mut err) };
        Error::check(err, "Creating context")?;
        Ok(Context { ctx, dev })
    }
}

impl Drop for Context {
    #[inline]
    fn drop(&mut self) {
        if let Err(e) = cl!(clReleaseContext(self.ctx), "Releasing context") {
            log::warn!("{e}")
        }
    }
}

impl AsRaw for Context {
    type Raw = cl::cl_context;
    #[inline]
    unsafe fn as_raw(&self) -> Self::Raw {
        self.ctx
    }
}

impl Context {
    #[inline]
    pub(crate) fn dev_raw(&self) -> cl::cl_device_id {
        self.dev
    }
}
