use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=config.toml");

    // OUT_DIR is target/<profile>/build/<pkg>/out; the binary sits three
    // levels up, which is where the runtime config lookup expects the file.
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir)
        .ancestors()
        .nth(3)
        .expect("Unexpected OUT_DIR layout")
        .join("config.toml");

    fs::copy("config.toml", dest_path).expect("Failed to copy config.toml");
}
