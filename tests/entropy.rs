use tokengen::entropy::{EntropySource, OsEntropy};

#[test]
fn os_entropy_fills_the_whole_buffer() {
    let mut source = OsEntropy::new();
    let mut buf = [0u8; 256];

    source.fill(&mut buf).unwrap();

    assert!(buf.iter().any(|&b| b != 0));
}

#[test]
fn bytes_returns_the_requested_length() {
    let mut source = OsEntropy::new();

    let bytes = source.bytes(64).unwrap();

    assert_eq!(bytes.len(), 64);
}

#[test]
fn consecutive_reads_differ() {
    let mut source = OsEntropy::new();

    let a = source.bytes(32).unwrap();
    let b = source.bytes(32).unwrap();

    assert_ne!(a, b);
}

#[test]
fn zero_length_read_succeeds() {
    let mut source = OsEntropy::new();

    let bytes = source.bytes(0).unwrap();

    assert!(bytes.is_empty());
}
