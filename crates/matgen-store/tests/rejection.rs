use matgen_core::{FormatError, MatgenError};
use matgen_math::Matrix;
use matgen_store::{read_bin, read_text, write_bin, write_text};
use std::fs;
use std::path::Path;

fn holding_a() -> Matrix {
    let mut m = Matrix::new(2, 2).unwrap();
    m.set(0, 0, 11).unwrap();
    m.set(0, 1, -12).unwrap();
    m.set(1, 0, 13).unwrap();
    m.set(1, 1, 14).unwrap();
    m
}

fn read_text_str(dir: &Path, body: &str) -> (Result<(), MatgenError>, Matrix) {
    let path = dir.join("in.txt");
    fs::write(&path, body).unwrap();
    let mut out = holding_a();
    let res = read_text(&path, &mut out);
    (res, out)
}

fn read_bin_bytes(dir: &Path, body: &[u8]) -> (Result<(), MatgenError>, Matrix) {
    let path = dir.join("in.bin");
    fs::write(&path, body).unwrap();
    let mut out = holding_a();
    let res = read_bin(&path, &mut out);
    (res, out)
}

#[test]
fn test_ragged_rows_rejected_and_output_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let (res, out) = read_text_str(dir.path(), "1 2 3\n4 5\n6 7 8\n");

    match res {
        Err(MatgenError::Format(FormatError::RaggedRow { line, expected, found })) => {
            assert_eq!((line, expected, found), (2, 3, 2));
        }
        other => panic!("expected RaggedRow, got {:?}", other),
    }
    assert_eq!(out, holding_a());
}

#[test]
fn test_longer_row_is_ragged_too() {
    let dir = tempfile::tempdir().unwrap();
    let (res, out) = read_text_str(dir.path(), "1 2\n3 4 5\n");
    assert!(matches!(res, Err(MatgenError::Format(FormatError::RaggedRow { .. }))));
    assert_eq!(out, holding_a());
}

#[test]
fn test_non_numeric_token_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for body in ["1 2\n3 x\n", "1.5 2\n", "1 2\n3 99999999999\n"] {
        let (res, out) = read_text_str(dir.path(), body);
        assert!(
            matches!(res, Err(MatgenError::Format(FormatError::BadToken { .. }))),
            "{:?} accepted",
            body
        );
        assert_eq!(out, holding_a());
    }
}

#[test]
fn test_invalid_utf8_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.txt");
    fs::write(&path, b"1 2\n3 \xff\n").unwrap();

    let mut out = holding_a();
    match read_text(&path, &mut out) {
        Err(MatgenError::Format(FormatError::NotUtf8 { line })) => assert_eq!(line, 2),
        other => panic!("expected NotUtf8, got {:?}", other),
    }
    assert_eq!(out, holding_a());
}

#[test]
fn test_cell_less_matrix_not_written_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    for &(rows, cols) in &[(0, 0), (0, 4), (3, 0)] {
        let m = Matrix::new(rows, cols).unwrap();
        match write_text(&path, &m) {
            Err(MatgenError::Format(FormatError::NoCells { rows: r, cols: c })) => {
                assert_eq!((r, c), (rows, cols));
            }
            other => panic!("{}x{}: expected NoCells, got {:?}", rows, cols, other),
        }
        assert!(!path.exists());
    }
}

#[test]
fn test_empty_text_rejected() {
    let dir = tempfile::tempdir().unwrap();
    for body in ["", "\n\n", "   \n\t\n"] {
        let (res, out) = read_text_str(dir.path(), body);
        assert!(matches!(res, Err(MatgenError::Format(FormatError::Empty))));
        assert_eq!(out, holding_a());
    }
}

#[test]
fn test_blank_lines_and_extra_spacing_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let (res, out) = read_text_str(dir.path(), "  7   8\n\n-9 10  \n\n");
    res.unwrap();
    assert_eq!(out.shape(), (2, 2));
    assert_eq!(out.as_slice(), &[7, 8, -9, 10]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent");
    let mut out = holding_a();

    assert!(matches!(read_text(&path, &mut out), Err(MatgenError::Io(_))));
    assert!(matches!(read_bin(&path, &mut out), Err(MatgenError::Io(_))));
    assert_eq!(out, holding_a());
}

#[test]
fn test_short_header_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let (res, out) = read_bin_bytes(dir.path(), &[2, 0, 0, 0, 2]);
    assert!(matches!(
        res,
        Err(MatgenError::Format(FormatError::TruncatedHeader { len: 5 }))
    ));
    assert_eq!(out, holding_a());
}

#[test]
fn test_truncated_payload_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("full.bin");
    write_bin(&path, &holding_a()).unwrap();
    let raw = fs::read(&path).unwrap();

    for cut in 1..=(raw.len() - 8) {
        let (res, out) = read_bin_bytes(dir.path(), &raw[..raw.len() - cut]);
        match res {
            Err(MatgenError::Format(FormatError::TruncatedPayload { expected, found })) => {
                assert_eq!(expected, raw.len());
                assert_eq!(found, raw.len() - cut);
            }
            other => panic!("cut {}: expected TruncatedPayload, got {:?}", cut, other),
        }
        assert_eq!(out, holding_a());
    }
}

#[test]
fn test_trailing_bytes_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("full.bin");
    write_bin(&path, &holding_a()).unwrap();
    let mut raw = fs::read(&path).unwrap();
    raw.push(0);

    let (res, out) = read_bin_bytes(dir.path(), &raw);
    assert!(matches!(
        res,
        Err(MatgenError::Format(FormatError::TrailingBytes { .. }))
    ));
    assert_eq!(out, holding_a());
}

#[test]
fn test_overflowing_header_rejected_without_allocating() {
    let dir = tempfile::tempdir().unwrap();
    let mut raw = Vec::new();
    raw.extend_from_slice(&u32::MAX.to_le_bytes());
    raw.extend_from_slice(&u32::MAX.to_le_bytes());
    raw.extend_from_slice(&[0u8; 16]);

    let (res, out) = read_bin_bytes(dir.path(), &raw);
    assert!(matches!(
        res,
        Err(MatgenError::Format(FormatError::SizeOverflow { .. }))
    ));
    assert_eq!(out, holding_a());
}

#[test]
fn test_large_header_with_small_file_is_truncation() {
    let dir = tempfile::tempdir().unwrap();
    let mut raw = Vec::new();
    raw.extend_from_slice(&100_000u32.to_le_bytes());
    raw.extend_from_slice(&100_000u32.to_le_bytes());
    raw.extend_from_slice(&[0u8; 4]);

    let (res, out) = read_bin_bytes(dir.path(), &raw);
    assert!(matches!(
        res,
        Err(MatgenError::Format(FormatError::TruncatedPayload { .. }))
    ));
    assert_eq!(out, holding_a());
}
