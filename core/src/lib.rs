//! # Combi Core
//!
//! The search itself and everything that runs it.
//!
//! * **[`enumerator`]**: depth-first enumeration of digit combinations.
//! * **[`stream`]**: the same enumeration driven from a producer task through a bounded channel.
//! * **[`finder`]**: picks one of the two according to the [`Config`](combi_common::config::Config).
//! * **[`pattern`]**: the inverted triangle printer.

pub mod combination;
pub mod enumerator;
pub mod finder;
pub mod pattern;
pub mod stream;
