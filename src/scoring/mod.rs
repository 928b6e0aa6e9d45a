// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A product's score comes from the first rule in an ordered cascade that
//! matches the query. Precision falls monotonically down the cascade: an exact
//! SKU hit is 1.0, a whole-word name hit is 0.8-0.9, and a stray word buried in
//! the description is 0.25. Code-like queries ("AM123") stop after the SKU
//! rules, so they never pick up fuzzy noise.

mod core;
pub mod ranking;
pub mod rules;

pub use self::core::*;
