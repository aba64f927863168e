use crate::{AsRaw, Result, bindings as cl};

/// A completion token for one submitted operation.
#[repr(transparent)]
pub struct Event(cl::cl_event);

impl Event {
    /// # Safety
    ///
    /// `raw` must be a valid event that no other wrapper owns.
    #[inline]
    pub unsafe fn from_raw(raw: cl::cl_event) -> Self {
        Self(raw)
    }

    /// Blocks the calling thread until the operation that produced this
    /// event has completed on the device.
    #[inline]
    pub fn synchronize(&self) -> Result<()> {
        cl!(clWaitForEvents(1, &self.0), "Waiting for event")
    }
}

impl Drop for Event {
    #[inline]
    fn drop(&mut self) {
        if let Err(e) = cl!(clReleaseEvent(self.0), "Releasing event") {
            log::warn!("{e}")
        }
    }
}

impl AsRaw for Event {
    type Raw = cl::cl_event;
    #[inline]
    unsafe fn as_raw(&self) -> Self::Raw {
        self.0
    }
}
