#[cfg(detected_opencl)]
#[macro_use]
pub mod bindings {
    #![allow(unused, non_upper_case_globals, non_camel_case_types, non_snake_case)]
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));

    #[macro_export]
    macro_rules! cl {
        ($f:expr, $step:expr) => {{
            #[allow(unused_imports)]
            use $crate::bindings::*;
            #[allow(unused_unsafe)]
            let err = unsafe { $f };
            $crate::Error::check(err as _, $step)
        }};
    }
}

mod error;

#[cfg(detected_opencl)]
mod context;
#[cfg(detected_opencl)]
mod device;
#[cfg(detected_opencl)]
mod event;
#[cfg(detected_opencl)]
mod memory;
#[cfg(detected_opencl)]
mod platform;
#[cfg(detected_opencl)]
mod queue;

pub use error::{Error, Result};

#[cfg(detected_opencl)]
pub use {
    context::Context,
    device::{Device, DeviceInfo},
    event::Event,
    memory::{Access, DevBlob},
    platform::Platform,
    queue::CommandQueue,
};

pub trait AsRaw {
    type Raw;

    /// # Safety
    ///
    /// The caller must ensure that the returned item is dropped before the original item.
    unsafe fn as_raw(&self) -> Self::Raw;
}
