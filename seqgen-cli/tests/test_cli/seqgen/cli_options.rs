use crate::add_test;
use crate::common::Fixture;

// Missing required arguments print usage and exit 1 without touching disk
add_test!(missing_arguments_print_usage, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["test", "bin", "10"]).await;
    assert_eq!(output.status.code(), Some(1));

    assert!(output.stderr.contains("Usage"));
    assert!(fixture.entries().is_empty());
});

// A non-integer size is rejected by name, before any file is created
add_test!(non_integer_size_is_rejected, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["test", "bin", "abc", "3"]).await;
    assert_eq!(output.status.code(), Some(1));

    assert!(output
        .stderr
        .contains("seqgen: size_in_bytes must be an integer"));
    assert!(fixture.entries().is_empty());
});

// Same for the count parameter
add_test!(non_integer_count_is_rejected, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["test", "bin", "10", "xyz"]).await;
    assert_eq!(output.status.code(), Some(1));

    assert!(output.stderr.contains("seqgen: count must be an integer"));
    assert!(fixture.entries().is_empty());
});

// Same for the optional zero-pad parameter
add_test!(non_integer_zero_pad_is_rejected, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["test", "bin", "10", "3", "wide"]).await;
    assert_eq!(output.status.code(), Some(1));

    assert!(output.stderr.contains("seqgen: zero_pad must be an integer"));
    assert!(fixture.entries().is_empty());
});

// Negative sizes don't fit a byte count and are rejected by name
add_test!(negative_size_is_rejected, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_seqgen(&["test", "bin", "--", "-5", "3"])
        .await;
    assert_eq!(output.status.code(), Some(1));

    assert!(output
        .stderr
        .contains("seqgen: size_in_bytes must be an integer"));
    assert!(fixture.entries().is_empty());
});

// -q suppresses progress and summary output but not file creation
add_test!(quiet_suppresses_progress, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["-q", "test", "bin", "10", "2"]).await;
    assert!(output.status.success());

    assert!(output.stdout.is_empty());
    assert_eq!(fixture.entries().len(), 2);
});

// -qq additionally suppresses validation error messages; exit code stays 1
add_test!(double_quiet_suppresses_errors, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_seqgen(&["-qq", "test", "bin", "abc", "3"])
        .await;
    assert_eq!(output.status.code(), Some(1));

    assert!(output.stderr.is_empty());
    assert!(fixture.entries().is_empty());
});

// -C redirects output into another directory, leaving the pattern unchanged
add_test!(directory_option_redirects_output, async {
    let fixture = Fixture::new();
    fixture.create_dir("out");

    let output = fixture
        .run_seqgen(&["-C", "out", "d", "bin", "4", "2"])
        .await;
    assert!(output.status.success());

    assert!(fixture.file_exists("out/d_1.bin"));
    assert!(fixture.file_exists("out/d_2.bin"));
    assert!(!fixture.file_exists("d_1.bin"));
});

// A missing target directory fails without creating anything
add_test!(missing_directory_fails, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_seqgen(&["-C", "nowhere", "d", "bin", "4", "1"])
        .await;
    assert_eq!(output.status.code(), Some(1));

    assert!(output.stderr.contains("d_1.bin"));
    assert!(fixture.entries().is_empty());
});

// --help goes to stdout and exits 0
add_test!(help_exits_zero, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["--help"]).await;
    assert_eq!(output.status.code(), Some(0));

    assert!(output.stdout.contains("Usage"));
    assert!(output.stdout.contains("ZERO_PAD"));
});
