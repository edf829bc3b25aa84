mod common;
mod decimal;
mod dispatch;
mod fixed;
mod float;
mod fmt;
mod hex;
mod integer;
mod layout;
mod nonfinite;
mod precise;
mod shortest;
mod table;

pub use common::{Error, Notation, ParseOutcome};
pub use dispatch::{format_float, max_chars10};
pub use float::{Classification, Float};
pub use hex::format_hex_bits;
pub use integer::{Integer, format_integer, parse_integer};
pub use layout::FloatLayout;
