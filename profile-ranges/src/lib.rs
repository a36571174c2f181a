//! # Profile Ranges
//! This crate contains the text formats used by the profile-ranges-scanner and range-deck
//! crates.
//!
//! ## Range definitions
//! A range definition file lists one range per line as `name:startMarker:endMarker`.
//! Both markers are plain substrings that are searched for in the lines of a measurement file.
//! See [RangeTable].
//!
//! ## Measurement records
//! Every line of a measurement file is a comma separated record. The first field is free-form
//! marker text and the second field is a timestamp in microseconds. See [record].
//!
//! ## Deltas
//! The elapsed time between the two markers of a range is a [Delta]. Deltas are reported in
//! milliseconds and are explicitly unresolved when one of the markers was never seen.

mod delta;
mod error;
mod range;
pub mod record;

pub use delta::{Delta, Millis, Missing};
pub use error::{RangeError, RecordError};
pub use range::{Range, RangeTable};
