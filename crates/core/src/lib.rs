#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Domain logic for the homework review notifier: status table, response
//! validation and message templates. No I/O lives here.

pub mod config;
pub mod message;
pub mod model;
pub mod validation;

mod time;

pub use time::{now_secs, EpochSecs};
