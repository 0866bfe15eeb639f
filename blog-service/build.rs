fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=../proto/blog.proto");
    println!("cargo:rerun-if-changed=migrations");

    tonic_prost_build::configure()
        .build_client(false)
        .compile_protos(&["../proto/blog.proto"], &["../proto"])?;
    Ok(())
}
