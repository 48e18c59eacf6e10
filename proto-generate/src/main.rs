fn main() {
    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .out_dir("../src/generated")
        .include_file("mod.rs")
        .file_descriptor_set_path("../src/generated/file_descriptor_set.bin")
        .extern_path(".google.protobuf.Any", "::prost_types::Any")
        .extern_path(".tendermint", "::tendermint_proto")
        .compile_protos(
            &[
                "../proto/gateway/v1/query.proto",
                "../third_party/proto/cosmos/base/tendermint/v1beta1/query.proto",
            ],
            &["../proto/", "../third_party/proto/"],
        )
        .expect("compile protos");
}
