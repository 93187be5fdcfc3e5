// What's this disk for?

// Imports
use std::io::{BufRead, Write};

use crate::error_types::prompt::PromptError;

// Implementations

/// Ask for the image comment and read one line of reply, as raw bytes.
///
/// Comments are not required to be UTF-8, PC-98 users type Shift-JIS. That is
/// why this reads bytes instead of going through `rprompt`, which only hands
/// back strings. The line terminator is dropped. End of input gives whatever
/// was read so far, possibly nothing. Length is not checked here, the header
/// cuts it to fit.
pub fn read_comment<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Vec<u8>, PromptError> {
    say(output, "Input the disk image comment. (255 letters max)")?;

    let mut line: Vec<u8> = Vec::new();
    let _ = input
        .read_until(b'\n', &mut line)
        .map_err(|error| PromptError::InputUnreadable(error.kind()))?;
    if line.last() == Some(&b'\n') {
        let _ = line.pop();
        if line.last() == Some(&b'\r') {
            let _ = line.pop();
        }
    }
    Ok(line)
}

/// Write one line of text for the user.
pub(crate) fn say<W: Write>(output: &mut W, text: &str) -> Result<(), PromptError> {
    writeln!(output, "{text}")
        .and_then(|()| output.flush())
        .map_err(|error| PromptError::OutputUnwritable(error.kind()))
}
