//! League and fantasy rules.
//!
//! The club and division vocabulary is read from configuration at startup. The
//! numeric limits of the fantasy game are compiled in.

pub mod fantasy;
pub mod league;
