//! Encoding and parsing for the quoted delimited log format

mod encoder;
mod parser;

pub use encoder::LogEncoder;
pub use parser::LogParser;
