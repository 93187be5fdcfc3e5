// Geometry, the hard way.

// Imports

use std::io::{BufRead, ErrorKind, Write};

use log::{debug, info};

use crate::error_types::prompt::PromptError;
use crate::header::header_struct::NhdHeader;
use crate::header::wire::{WireU16, WireU32};
use crate::prompt::comment::say;
use crate::prompt::parse::{grouped_size, lenient_number};

// Implementations

/// Ask for heads, sectors, sector length and cylinders, in that order, and
/// store each one in the header as soon as it is read.
///
/// Nothing is range checked. Junk becomes zero and 16 bit fields keep the low
/// 16 bits of whatever was typed. Returns the total image size, which is 32 bit
/// math and wraps on big disks.
pub fn manual_header<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    header: &mut NhdHeader,
) -> Result<u32, PromptError> {
    let heads = ask_number(input, output, "Please input number of heads.\n")?;
    header.set_heads(WireU16::from_host(heads as u16));

    let sectors = ask_number(input, output, "Input number of sectors.\n")?;
    header.set_sectors_per_track(WireU16::from_host(sectors as u16));

    let sector_length = ask_number(input, output, "Input sector length. It is 512 bytes typically.\n")?;
    header.set_bytes_per_sector(WireU16::from_host(sector_length as u16));

    let cylinders = ask_number(input, output, "Input number of cylinders.\n")?;
    header.set_cylinders(WireU32::from_host(cylinders));

    let geometry = header.geometry();
    let size = geometry.total_size();
    info!(
        "Manual geometry: {} heads, {} sectors, {} byte sectors, {} cylinders.",
        geometry.heads, geometry.sectors_per_track, geometry.bytes_per_sector, geometry.cylinders
    );
    say(output, &format!("OK, Image file size is {} bytes.\n", grouped_size(size)))?;

    Ok(size)
}

/// Prompt and parse one number.
///
/// A reply that isn't text at all counts as junk, and running out of input
/// (including a last line with no newline) counts as an empty reply. Both are zero.
fn ask_number<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<u32, PromptError> {
    match rprompt::prompt_reply_from_bufread(input, output, prompt) {
        Ok(reply) => Ok(lenient_number(&reply)),
        Err(error) if error.kind() == ErrorKind::InvalidData => {
            debug!("Reply was not valid text, treating it as zero.");
            Ok(0)
        }
        Err(error) if error.kind() == ErrorKind::UnexpectedEof => {
            debug!("Ran out of input, treating it as zero.");
            Ok(0)
        }
        Err(error) => Err(PromptError::InputUnreadable(error.kind())),
    }
}
