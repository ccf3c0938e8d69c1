use std::env;
use std::path::PathBuf;

use schemagen::GenOptions;

const SCHEMA: &str = "schemas/purchase-order.json";

fn main() {
    println!("cargo:rerun-if-changed={}", SCHEMA);

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    let output = PathBuf::from(out_dir).join("purchase_order.rs");

    let options = GenOptions::default().with_module("orders");
    if let Err(e) = schemagen::generate_file(SCHEMA, &output, &options) {
        panic!("failed to generate {}: {}", SCHEMA, e);
    }
}
