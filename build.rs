//! Embeds version metadata (and the icon, when one is shipped) into the
//! Windows executables. Other targets need nothing from this script.

use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=icon.ico");

    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let mut res = winres::WindowsResource::new();
    res.set("ProductName", "SYB");
    res.set("FileDescription", "SYB allophone sender");

    if Path::new("icon.ico").exists() {
        res.set_icon("icon.ico");
    }

    if let Err(e) = res.compile() {
        println!("cargo:warning=failed to embed Windows resources: {}", e);
    }
}
