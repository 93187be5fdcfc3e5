// Gotta talk to people sometimes.

pub mod comment;
pub mod manual_header;
pub mod parse;

#[cfg(test)]
mod tests;
