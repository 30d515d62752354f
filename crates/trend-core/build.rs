// File: crates/trend-core/build.rs
// Summary: Build script to link required Windows system libraries for the Skia raster backend.

fn main() {
    println!("cargo:rerun-if-env-changed=CARGO_FEATURE_RASTER");
    let raster = std::env::var_os("CARGO_FEATURE_RASTER").is_some();
    let windows = std::env::var("CARGO_CFG_TARGET_OS").map(|os| os == "windows").unwrap_or(false);
    if raster && windows {
        // Skia/ICU need RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
