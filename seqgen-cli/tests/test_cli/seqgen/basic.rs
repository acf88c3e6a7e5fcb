use crate::add_test;
use crate::common::Fixture;

// Create three 10-byte files with default naming
add_test!(creates_numbered_files, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["test", "bin", "10", "3"]).await;
    assert!(output.status.success());

    for name in ["test_1.bin", "test_2.bin", "test_3.bin"] {
        assert!(fixture.file_exists(name));
        assert_eq!(fixture.file_len(name), 10);
    }
    assert_eq!(fixture.entries().len(), 3);
});

// One progress line per file plus a final summary line
add_test!(reports_progress_and_summary, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["report", "dat", "4", "2"]).await;
    assert!(output.status.success());

    assert!(output
        .stdout
        .contains("Creating file: report_1.dat (4 bytes) with random data"));
    assert!(output
        .stdout
        .contains("Creating file: report_2.dat (4 bytes) with random data"));
    assert!(output.stdout.contains(
        "Done! Created 2 file(s) with prefix 'report', extension 'dat', and size 4 bytes each."
    ));
    assert!(output.stderr.is_empty());
});

// Zero-padded numbering matching the requested width
add_test!(creates_zero_padded_names, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["myfile", "txt", "8", "5", "3"]).await;
    assert!(output.status.success());

    for name in [
        "myfile_001.txt",
        "myfile_002.txt",
        "myfile_003.txt",
        "myfile_004.txt",
        "myfile_005.txt",
    ] {
        assert!(fixture.file_exists(name));
        assert_eq!(fixture.file_len(name), 8);
    }
});

// Two invocations with identical parameters must produce different bytes
add_test!(content_is_random_across_runs, async {
    let fixture = Fixture::new();

    let output = fixture.run_seqgen(&["rnd", "bin", "64", "1"]).await;
    assert!(output.status.success());
    let first = fixture.read_file("rnd_1.bin");

    let output = fixture.run_seqgen(&["rnd", "bin", "64", "1"]).await;
    assert!(output.status.success());
    let second = fixture.read_file("rnd_1.bin");

    assert_eq!(first.len(), 64);
    assert_eq!(second.len(), 64);
    assert!(first != second);
});
