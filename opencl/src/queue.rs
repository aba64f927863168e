use crate::{AsRaw, Context, Error, Result, bindings as cl};

/// An in-order channel for submitting operations to the device that owns it.
/// Borrows its context, so it can never outlive it.
pub struct CommandQueue<'a> {
    queue: cl::cl_command_queue,
    _ctx: &'a Context,
}

impl Context {
    pub fn queue(&self) -> Result<CommandQueue<'_>> {
        let mut err = 0;
        let queue =
            unsafe { cl::clCreateCommandQueue(self.as_raw(), self.dev_raw(), 0, &mut err) };
        Error::check(err, "Creating command queue")?;
        Ok(CommandQueue { queue, _ctx: self })
    }
}

impl Drop for CommandQueue<'_> {
    #[inline]
    fn drop(&mut self) {
        let released = self
            .finish()
            .and_then(|()| cl!(clReleaseCommandQueue(self.queue), "Releasing command queue"));
        if let Err(e) = released {
            log::warn!("{e}")
        }
    }
}

impl AsRaw for CommandQueue<'_> {
    type Raw = cl::cl_command_queue;
    #[inline]
    unsafe fn as_raw(&self) -> Self::Raw {
        self.queue
    }
}

impl CommandQueue<'_> {
    /// Blocks until every submitted operation has completed.
    #[inline]
    pub fn finish(&self) -> Result<()> {
        cl!(clFinish(self.queue), "Finishing command queue")
    }
}
