#![cfg(detected_clblast)]
#![deny(warnings)]

#[allow(unused, non_upper_case_globals, non_camel_case_types, non_snake_case)]
pub mod bindings {
    include!(concat!(env!("OUT_DIR"), "/bindings.rs"));
}

mod sgemm;
#[cfg(test)]
mod test;

pub use sgemm::sgemm;
