fn main() {
    println!("cargo:rerun-if-changed=proto/workspace_lookup.proto");

    tonic_build::configure()
        .build_server(false)
        .build_client(true)
        .compile_protos(&["proto/workspace_lookup.proto"], &["proto"])
        .expect("failed to compile workspace lookup proto");
}
