//! # structura-shared
//!
//! Types shared by every Structura crate: typed ids, member roles, comment
//! points, the clock and id collaborators, and application constants.

pub mod clock;
pub mod constants;
pub mod error;
pub mod types;

pub use clock::{Clock, FixedClock, IdSequence, IdSource, SystemClock};
pub use error::SharedError;
pub use types::*;
