use rpgsave_core::lzstring::compress_to_base64;

use crate::add_test;
use crate::common::{Fixture, HP_DOCUMENT};

// Test running without a file argument
add_test!(missing_argument, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo(&[]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("no input file given"), "{}", output.stderr);
    assert!(output.stderr.contains("Usage"), "{}", output.stderr);
    assert!(fixture.file_names().is_empty());
});

// Test rejecting files that are neither containers nor documents
add_test!(unsupported_extension, async {
    let mut fixture = Fixture::with_files(
        &["notes.txt", "save.RPGSAVE"],
        &[b"hello", b"IZA="],
    );

    for name in ["notes.txt", "save.RPGSAVE"] {
        let output = fixture.run_cargo(&[&fixture.path(name)]).await;
        assert!(!output.status.success());
        assert!(
            output.stderr.contains("unsupported file format"),
            "{}",
            output.stderr
        );
    }

    assert_eq!(fixture.file_names(), ["notes.txt", "save.RPGSAVE"]);
});

// Test a missing input file
add_test!(missing_input, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo(&[&fixture.path("gone.rpgsave")]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("cannot read"), "{}", output.stderr);
    assert!(fixture.file_names().is_empty());
});

// Test that a corrupt container writes nothing
add_test!(corrupt_container, async {
    let mut fixture = Fixture::with_file("bad.rpgsave", HP_DOCUMENT.as_bytes());

    let output = fixture.run_cargo(&[&fixture.path("bad.rpgsave")]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("cannot decode"), "{}", output.stderr);
    assert!(!fixture.file_exists("bad.json"));
});

// Test that a truncated container writes nothing
add_test!(truncated_container, async {
    let mut fixture = Fixture::with_file("short.rpgsave", b"AAAA");

    let output = fixture.run_cargo(&[&fixture.path("short.rpgsave")]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("truncated"), "{}", output.stderr);
    assert!(!fixture.file_exists("short.json"));
});

// Test that a container with a trailing newline still decodes
add_test!(container_with_trailing_newline, async {
    let container = format!("{}\n", compress_to_base64(HP_DOCUMENT));
    let mut fixture = Fixture::with_file("edited.rpgsave", container.as_bytes());

    let output = fixture.run_cargo(&[&fixture.path("edited.rpgsave")]).await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.assert_files(&["edited.json"], &[HP_DOCUMENT.as_bytes()]);
});

// Test that -qq suppresses the error message but not the exit status
add_test!(double_quiet_hides_errors, async {
    let mut fixture = Fixture::with_file("bad.rpgsave", b"***");

    let output = fixture
        .run_cargo(&["-qq", &fixture.path("bad.rpgsave")])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.is_empty(), "{}", output.stderr);
});

// Test an empty document, which encodes to the empty-string container
add_test!(empty_document, async {
    let mut fixture = Fixture::with_file("empty.json", b"");

    let output = fixture.run_cargo(&[&fixture.path("empty.json")]).await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.assert_files(&["empty.rpgsave"], &[b"Q==="]);
});

// Test that an output path taken by a directory fails without losing it
add_test!(output_is_directory, async {
    let container = compress_to_base64(HP_DOCUMENT);
    let mut fixture = Fixture::with_file("dir.rpgsave", container.as_bytes());
    std::fs::create_dir(fixture.root_dir_path().join("dir.json")).unwrap();

    let output = fixture
        .run_cargo(&["-f", &fixture.path("dir.rpgsave")])
        .await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("cannot write"), "{}", output.stderr);
    assert!(fixture.root_dir_path().join("dir.json").is_dir());
});
