// Talking to a wall.
// Unwrapping is okay here, since we want unexpected outcomes to fail tests.
#![allow(clippy::unwrap_used)]

// Imports
use std::io::{BufRead, Cursor, ErrorKind, Read};

use crate::error_types::prompt::PromptError;
use crate::header::geometry::Geometry;
use crate::header::header_struct::NhdHeader;
use crate::prompt::comment::read_comment;
use crate::prompt::manual_header::manual_header;
use crate::prompt::parse::{grouped_size, lenient_number};

use test_log::test; // We want to see logs while testing.

// Tests

#[test]
fn typical_disk() {
    let mut input = Cursor::new("8\n17\n512\n615\n");
    let mut output: Vec<u8> = Vec::new();
    let mut header = NhdHeader::new("");

    let size = manual_header(&mut input, &mut output, &mut header).unwrap();

    assert_eq!(size, 42_823_680);
    assert_eq!(
        header.geometry(),
        Geometry {
            heads: 8,
            sectors_per_track: 17,
            bytes_per_sector: 512,
            cylinders: 615,
        }
    );
    let said = String::from_utf8(output).unwrap();
    assert!(said.contains("Please input number of heads."));
    assert!(said.contains("OK, Image file size is 42 823 680 bytes."));
}

#[test]
fn oversized_disk_wraps() {
    // 16 * 63 * 512 * 16383 is just under 8 GiB, it wraps once.
    let mut input = Cursor::new("16\n63\n512\n16383\n");
    let mut output: Vec<u8> = Vec::new();
    let mut header = NhdHeader::new("");

    let size = manual_header(&mut input, &mut output, &mut header).unwrap();

    assert_eq!(size, 4_160_233_472);
    assert_eq!(size, (8_455_200_768u64 % (1u64 << 32)) as u32);
    assert!(String::from_utf8(output).unwrap().contains("4160 233 472 bytes"));
    // The fields themselves are intact.
    assert_eq!(header.geometry().cylinders, 16383);
}

#[test]
fn junk_is_zero() {
    let mut input = Cursor::new("lots\n  12abc\n-5\n\n");
    let mut output: Vec<u8> = Vec::new();
    let mut header = NhdHeader::new("");

    let size = manual_header(&mut input, &mut output, &mut header).unwrap();

    assert_eq!(size, 0);
    assert_eq!(
        header.geometry(),
        Geometry {
            heads: 0,
            sectors_per_track: 12,
            bytes_per_sector: 0,
            cylinders: 0,
        }
    );
}

#[test]
fn sixteen_bit_fields_truncate() {
    let mut input = Cursor::new("65537\n65535\n66048\n70000\n");
    let mut output: Vec<u8> = Vec::new();
    let mut header = NhdHeader::new("");

    let _ = manual_header(&mut input, &mut output, &mut header).unwrap();

    let geometry = header.geometry();
    assert_eq!(geometry.heads, 1);
    assert_eq!(geometry.sectors_per_track, 65535);
    assert_eq!(geometry.bytes_per_sector, 512);
    assert_eq!(geometry.cylinders, 70000);
    assert_eq!(&header.to_bytes()[280..282], &[1, 0]);
}

#[test]
fn running_out_of_input_is_zero() {
    let mut input = Cursor::new("4\n");
    let mut output: Vec<u8> = Vec::new();
    let mut header = NhdHeader::new("");

    let size = manual_header(&mut input, &mut output, &mut header).unwrap();

    assert_eq!(size, 0);
    assert_eq!(header.geometry().heads, 4);
    assert_eq!(header.geometry().cylinders, 0);
}

#[test]
fn broken_input() {
    struct Deaf;
    impl Read for Deaf {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }
    }
    impl BufRead for Deaf {
        fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }
        fn consume(&mut self, _amount: usize) {}
    }

    let mut output: Vec<u8> = Vec::new();
    let mut header = NhdHeader::new("");
    assert_eq!(
        manual_header(&mut Deaf, &mut output, &mut header),
        Err(PromptError::InputUnreadable(ErrorKind::BrokenPipe))
    );
}

#[test]
fn comment_loses_line_ending() {
    let mut output: Vec<u8> = Vec::new();
    let mut input = Cursor::new("My PC-98 drive\r\n8\n");
    assert_eq!(read_comment(&mut input, &mut output).unwrap(), b"My PC-98 drive");

    let mut input = Cursor::new("no newline");
    assert_eq!(read_comment(&mut input, &mut output).unwrap(), b"no newline");

    let mut input = Cursor::new("");
    assert!(read_comment(&mut input, &mut output).unwrap().is_empty());
    assert!(String::from_utf8(output).unwrap().contains("255 letters max"));
}

#[test]
fn shift_jis_comment_survives() {
    // "テスト" in Shift-JIS, which is not valid UTF-8.
    let mut input = Cursor::new(b"\x83\x65\x83\x58\x83\x67\n8\n".to_vec());
    let mut output: Vec<u8> = Vec::new();

    let comment = read_comment(&mut input, &mut output).unwrap();
    assert_eq!(comment, b"\x83\x65\x83\x58\x83\x67");

    let header = NhdHeader::new(&comment);
    assert_eq!(header.comment(), b"\x83\x65\x83\x58\x83\x67");
    assert_eq!(&header.to_bytes()[16..23], b"\x83\x65\x83\x58\x83\x67\0");
}

#[test]
fn binary_junk_is_zero() {
    let mut input = Cursor::new(b"\xff\xfe\n17\n512\n615\n".to_vec());
    let mut output: Vec<u8> = Vec::new();
    let mut header = NhdHeader::new("");

    let size = manual_header(&mut input, &mut output, &mut header).unwrap();

    assert_eq!(size, 0);
    // The bad line was skipped over, the rest still lines up.
    assert_eq!(
        header.geometry(),
        Geometry {
            heads: 0,
            sectors_per_track: 17,
            bytes_per_sector: 512,
            cylinders: 615,
        }
    );
}

#[test]
fn atoi_rules() {
    assert_eq!(lenient_number("42"), 42);
    assert_eq!(lenient_number("   +42  "), 42);
    assert_eq!(lenient_number("42abc"), 42);
    assert_eq!(lenient_number("abc42"), 0);
    assert_eq!(lenient_number("-42"), 0);
    assert_eq!(lenient_number(""), 0);
    assert_eq!(lenient_number("4294967295"), u32::MAX);
    assert_eq!(lenient_number("4294967296"), 0);
}

#[test]
fn size_grouping() {
    assert_eq!(grouped_size(0), "0 000 000");
    assert_eq!(grouped_size(1_474_560), "1 474 560");
    assert_eq!(grouped_size(u32::MAX), "4294 967 295");
}
