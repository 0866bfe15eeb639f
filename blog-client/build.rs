fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../proto/blog.proto");

    // The server half is generated too: tests stand up in-process mock backends.
    tonic_prost_build::configure()
        .compile_protos(&["../proto/blog.proto"], &["../proto"])?;
    Ok(())
}
