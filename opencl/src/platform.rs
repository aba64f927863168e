use crate::{AsRaw, Error, Result, bindings as cl};
use std::ptr::null_mut;

// Reported by the ICD loader when no platform is installed; the constant
// lives in the khr extension header, not in the core bindings.
const CL_PLATFORM_NOT_FOUND_KHR: i32 = -1001;

/// One OpenCL platform reported by the runtime.
#[repr(transparent)]
pub struct Platform(cl::cl_platform_id);

impl AsRaw for Platform {
    type Raw = cl::cl_platform_id;
    #[inline]
    unsafe fn as_raw(&self) -> Self::Raw {
        self.0
    }
}

impl Platform {
    /// Selects the first platform the runtime reports. Zero platforms is an
    /// error even when the query itself succeeds.
    pub fn first() -> Result<Self> {
        let mut platform = null_mut();
        let mut count = 0;
        cl!(
            clGetPlatformIDs(1, &mut platform, &mut count),
            "Getting platform ID"
        )?;
        if count == 0 {
            return Err(Error {
                step: "Getting platform ID",
                code: CL_PLATFORM_NOT_FOUND_KHR,
            });
        }
        Ok(Self(platform))
    }
}
