use build_script_cfg::Cfg;
use search_opencl_tools::{find_clblast_root, find_opencl_root, include_clblast, include_opencl};
use std::{env, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let clblast = Cfg::new("detected_clblast");
    let (Some(opencl_root), Some(clblast_root)) = (find_opencl_root(), find_clblast_root()) else {
        return;
    };
    clblast.define();
    include_opencl(&opencl_root);
    include_clblast(&clblast_root);

    // Tell cargo to invalidate the built crate whenever the wrapper changes.
    println!("cargo:rerun-if-changed=wrapper.h");

    // The bindgen::Builder is the main entry point to bindgen,
    // and lets you build up options for the resulting bindings.
    let bindings = bindgen::Builder::default()
        // The input header we would like to generate bindings for.
        .header("wrapper.h")
        .clang_arg(format!("-I{}", opencl_root.join("include").display()))
        .clang_arg(format!("-I{}", clblast_root.join("include").display()))
        // Only generate bindings for the API in these namespaces.
        .allowlist_function("CLBlast.*")
        .allowlist_item("CLBlast.*")
        // Annotate the given type with the #[must_use] attribute.
        .must_use_type("CLBlastStatusCode_")
        // Generate rust style enums.
        .default_enum_style(bindgen::EnumVariation::Rust {
            non_exhaustive: true,
        })
        // Use core instead of std in the generated bindings.
        .use_core()
        // Tell cargo to invalidate the built crate whenever any of the included header files changed.
        .parse_callbacks(Box::new(bindgen::CargoCallbacks::new()))
        // Finish the builder and generate the bindings.
        .generate()
        // Unwrap the Result and panic on failure.
        .expect("Unable to generate bindings");

    // Write the bindings to the $OUT_DIR/bindings.rs file.
    let out_path = PathBuf::from(env::var("OUT_DIR").unwrap());
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Couldn't write bindings!");
}
