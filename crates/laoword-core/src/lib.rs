//! Shared types for Lao word segmentation and validation.
//!
//! - [`character`] -- fixed character tables over the Lao block
//! - [`span`] -- segmented spans and checked spans
//! - [`enums`] -- span kinds
//! - [`grammar_error`] -- rule violations and error reports

pub mod character;
pub mod enums;
pub mod grammar_error;
pub mod span;
