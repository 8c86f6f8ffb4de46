use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    // Put memory.x where cortex-m-rt's link.x can find it
    fs::copy("memory.x", out_dir.join("memory.x")).expect("Couldn't copy memory.x");
    println!("cargo:rustc-link-search={}", out_dir.display());

    let port0 = env::var_os("CARGO_FEATURE_CAN_PORT_0").is_some();
    let port1 = env::var_os("CARGO_FEATURE_CAN_PORT_1").is_some();
    match (port0, port1) {
        (true, false) => println!("cargo:warning=CAN port 0 selected: p9/p10 on CAN1"),
        (false, true) => println!("cargo:warning=CAN port 1 selected: p30/p29 on CAN2"),
        _ => {}
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
