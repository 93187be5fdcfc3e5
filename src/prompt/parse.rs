// Numbers from people.

/// Parse the leading number out of a line, C `atoi` style.
///
/// Leading whitespace and a `+` are skipped, then digits are taken until the
/// first non-digit. Anything else, including a leading `-`, is zero. Values too
/// big for 32 bits wrap.
pub fn lenient_number(line: &str) -> u32 {
    let trimmed = line.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |total, digit| {
            total.wrapping_mul(10).wrapping_add(u32::from(digit - b'0'))
        })
}

/// Group a byte count into millions, thousands and units, like `42 823 680`.
pub fn grouped_size(size: u32) -> String {
    format!("{} {:03} {:03}", size / 1_000_000, size / 1000 % 1000, size % 1000)
}
