fn main() {
    compile_header();
}

fn compile_header() {
    let crate_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let header_path = std::path::PathBuf::from(&crate_dir).join("include/geometry.h");

    cbindgen::Builder::new()
        .with_crate(&crate_dir)
        .with_language(cbindgen::Language::C)
        .with_include_guard("GEOMETRY_H")
        .with_style(cbindgen::Style::Type)
        .with_documentation(true)
        .generate()
        .expect("Failed to generate C header")
        .write_to_file(header_path);

    println!("cargo:rerun-if-changed=src");
}
