//! Range math and window planning.
//!
//! Inclusive byte ranges for HTTP Range headers and the window stepper used by
//! the byte-range strategy.

mod range;
mod walk;

pub use range::{parse_leading_int, ByteRange};
pub use walk::{ByteRangeWalk, FetchWindow};
