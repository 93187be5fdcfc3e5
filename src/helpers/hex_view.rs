// Take in some bytes and return a hex view of them

pub(crate) fn hex_view(bytes: &[u8]) -> String {
    let mut screen_string = String::new();

    // push the header
    screen_string.push_str(" Offset(h)  00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\n");

    for (row, line_bytes) in bytes.chunks(16).enumerate() {
        // first goes the offset, padded so its 10 characters long
        let mut line = format!("{:0>10X}  ", row * 16);

        // now for all the numbers, padding short lines out
        for i in 0..16 {
            match line_bytes.get(i) {
                Some(byte) => line.push_str(&format!("{byte:02X} ")),
                None => line.push_str("   "),
            }
        }

        // now for the text version
        line.push(' ');
        for byte in line_bytes {
            let character = if byte.is_ascii_graphic() || *byte == b' ' {
                char::from(*byte)
            } else {
                '.'
            };
            line.push(character);
        }

        // line is done. Add it to the screen
        screen_string.push_str(line.trim_end());
        screen_string.push('\n');
    }

    // done!
    screen_string
}
