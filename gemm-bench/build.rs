use build_script_cfg::Cfg;
use search_opencl_tools::{find_clblast_root, find_opencl_root};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let clblast = Cfg::new("detected_clblast");
    if find_opencl_root().is_some() && find_clblast_root().is_some() {
        clblast.define();
    }
}
