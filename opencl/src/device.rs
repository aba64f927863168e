use crate::{AsRaw, Error, Platform, Result, bindings as cl};
use std::{fmt, mem::MaybeUninit, ptr::null_mut};

/// One GPU device exposed by a platform.
#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct Device(cl::cl_device_id);

impl AsRaw for Device {
    type Raw = cl::cl_device_id;
    #[inline]
    unsafe fn as_raw(&self) -> Self::Raw {
        self.0
    }
}

impl Platform {
    /// Selects the first GPU device on this platform. Zero devices is an
    /// error even when the query itself succeeds.
    pub fn first_gpu(&self) -> Result<Device> {
        let mut device = null_mut();
        let mut count = 0;
        cl!(
            clGetDeviceIDs(
                self.as_raw(),
                CL_DEVICE_TYPE_GPU as _,
                1,
                &mut device,
                &mut count
            ),
            "Getting device ID"
        )?;
        if count == 0 {
            return Err(Error {
                step: "Getting device ID",
                code: cl::CL_DEVICE_NOT_FOUND,
            });
        }
        Ok(Device(device))
    }
}

impl Device {
    pub fn name(&self) -> Result<String> {
        self.info_string(cl::CL_DEVICE_NAME, "Getting device name")
    }

    pub fn vendor(&self) -> Result<String> {
        self.info_string(cl::CL_DEVICE_VENDOR, "Getting device vendor")
    }

    pub fn version(&self) -> Result<String> {
        self.info_string(cl::CL_DEVICE_VERSION, "Getting device version")
    }

    pub fn max_compute_units(&self) -> Result<u32> {
        self.info_value(cl::CL_DEVICE_MAX_COMPUTE_UNITS, "Getting compute units")
    }

    pub fn max_work_group_size(&self) -> Result<usize> {
        self.info_value(
            cl::CL_DEVICE_MAX_WORK_GROUP_SIZE,
            "Getting max work group size",
        )
    }

    pub fn global_mem_size(&self) -> Result<u64> {
        self.info_value(cl::CL_DEVICE_GLOBAL_MEM_SIZE, "Getting global memory size")
    }

    pub fn max_clock_frequency(&self) -> Result<u32> {
        self.info_value(
            cl::CL_DEVICE_MAX_CLOCK_FREQUENCY,
            "Getting max clock frequency",
        )
    }

    /// Gathers the attributes printed in the pre-run report.
    pub fn info(&self) -> Result<DeviceInfo> {
        Ok(DeviceInfo {
            name: self.name()?,
            vendor: self.vendor()?,
            version: self.version()?,
            compute_units: self.max_compute_units()?,
            max_work_group_size: self.max_work_group_size()?,
            global_mem_size: self.global_mem_size()?,
            max_clock_frequency: self.max_clock_frequency()?,
        })
    }

    /// String attributes take two queries: one for the size, one for the
    /// value into a buffer of exactly that size.
    fn info_string(&self, param: cl::cl_device_info, step: &'static str) -> Result<String> {
        let mut size = 0;
        cl!(
            clGetDeviceInfo(self.0, param, 0, null_mut(), &mut size),
            step
        )?;
        let mut info = vec![0u8; size];
        cl!(
            clGetDeviceInfo(self.0, param, size, info.as_mut_ptr().cast(), null_mut()),
            step
        )?;
        while info.last() == Some(&0) {
            info.pop();
        }
        Ok(String::from_utf8_lossy(&info).into_owned())
    }

    fn info_value<T: Copy>(&self, param: cl::cl_device_info, step: &'static str) -> Result<T> {
        let mut value = MaybeUninit::<T>::uninit();
        cl!(
            clGetDeviceInfo(
                self.0,
                param,
                size_of::<T>(),
                value.as_mut_ptr().cast(),
                null_mut()
            ),
            step
        )?;
        Ok(unsafe { value.assume_init() })
    }
}

/// Descriptive and capability attributes of a device.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DeviceInfo {
    pub name: String,
    pub vendor: String,
    pub version: String,
    pub compute_units: u32,
    pub max_work_group_size: usize,
    pub global_mem_size: u64,
    pub max_clock_frequency: u32,
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Device Information:")?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Vendor: {}", self.vendor)?;
        writeln!(f, "Version: {}", self.version)?;
        writeln!(f, "Compute Units: {}", self.compute_units)?;
        writeln!(f, "Max Work Group Size: {}", self.max_work_group_size)?;
        writeln!(
            f,
            "Global Memory Size: {} GB",
            self.global_mem_size as f64 / (1024. * 1024. * 1024.)
        )?;
        write!(f, "Max Clock Frequency: {} MHz", self.max_clock_frequency)
    }
}

#[test]
fn test() {
    let Ok(platform) = Platform::first() else {
        return;
    };
    let Ok(dev) = platform.first_gpu() else {
        return;
    };
    println!("{}", dev.info().unwrap());
}
