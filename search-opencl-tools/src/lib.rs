use std::{
    env,
    path::{Path, PathBuf},
};

/// Returns the root of an OpenCL SDK, if one can be located.
pub fn find_opencl_root() -> Option<PathBuf> {
    if let Some(root) = env::var_os("OPENCL_PATH") {
        return Some(PathBuf::from(root));
    }
    prefixes().find(|root| root.join("include/CL/cl.h").is_file())
}

pub fn include_opencl(path: impl AsRef<Path>) {
    if env::var_os("DOCS_RS").is_some() || cfg!(doc) {
        return;
    }
    link_search(path.as_ref());
    println!("cargo:rustc-link-lib=dylib=OpenCL")
}

/// Returns the root of a CLBlast installation, if one can be located.
pub fn find_clblast_root() -> Option<PathBuf> {
    if let Some(root) = env::var_os("CLBLAST_PATH") {
        return Some(PathBuf::from(root));
    }
    prefixes().find(|root| root.join("include/clblast_c.h").is_file())
}

pub fn include_clblast(path: impl AsRef<Path>) {
    if env::var_os("DOCS_RS").is_some() || cfg!(doc) {
        return;
    }
    link_search(path.as_ref());
    println!("cargo:rustc-link-lib=dylib=clblast")
}

fn prefixes() -> impl Iterator<Item = PathBuf> {
    ["/usr", "/usr/local", "/opt/rocm", "/usr/local/cuda"]
        .into_iter()
        .map(PathBuf::from)
}

fn link_search(root: &Path) {
    for lib in ["lib", "lib64", "lib/x86_64-linux-gnu"] {
        let lib = root.join(lib);
        if lib.is_dir() {
            println!("cargo:rustc-link-search={}", lib.display());
        }
    }
}

#[test]
fn test() {
    println!("{:?}", find_opencl_root());
    println!("{:?}", find_clblast_root())
}
