//! Split calculation modules.
//!
//! This module provides the pure arithmetic behind the form: the per-person
//! split and the rounding/formatting helpers it shares with the form.

pub mod common;
pub mod split;

pub use split::{TipSplit, TipSplitError, TipSplitInput, TipSplitResult};
