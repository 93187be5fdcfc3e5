// Nowhere to put it.
// Unwrapping is okay here, since we want unexpected outcomes to fail tests.
#![allow(clippy::unwrap_used)]

mod test_common;

use std::io::ErrorKind;

use nhdgen::config::HEADER_SIZE;
use nhdgen::error_types::image_io::ImageIOError;
use nhdgen::header::geometry::Geometry;
use nhdgen::header::header_struct::NhdHeader;
use nhdgen::image_io::merge::merge_header;
use nhdgen::image_io::write::write_header;

use test_common::{get_actually_temp_dir, write_fat16_image};
use test_log::test; // We want to see logs while testing.

#[test]
fn header_file_is_one_record() {
    let dir = get_actually_temp_dir();
    let destination = dir.path().join("only.hdr");
    let mut header = NhdHeader::new("");
    header.set_geometry(Geometry {
        heads: 8,
        sectors_per_track: 25,
        bytes_per_sector: 512,
        cylinders: 1000,
    });

    write_header(&header, &destination).unwrap();

    assert_eq!(std::fs::metadata(&destination).unwrap().len(), HEADER_SIZE as u64);
}

#[test]
fn unwritable_destination_fails_both_ways() {
    let dir = get_actually_temp_dir();
    let (source, _) = write_fat16_image(dir.path(), "hdd.bin", 0, 2, 9, 40);
    let destination = dir.path().join("does").join("not").join("exist.nhd");
    let header = NhdHeader::new("");

    assert_eq!(
        write_header(&header, &destination),
        Err(ImageIOError::DestinationUnwritable(ErrorKind::NotFound))
    );
    assert_eq!(
        merge_header(&header, &source, &destination),
        Err(ImageIOError::DestinationUnwritable(ErrorKind::NotFound))
    );
}
