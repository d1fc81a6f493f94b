//! Client-side probe for a running syncstub.
//!
//! Walks the manifest → version check → three submissions sequence and
//! reports whether the server keeps the alternating submission contract.

pub mod reporter;
pub mod scenario;
