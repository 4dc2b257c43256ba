//! Flag Register (`FL`).
//!
//! Holds the comparison result bits `00000LGE`. Only `CMP` writes them; every
//! other instruction leaves them as they were.

use std::cmp::Ordering;

use serde::Serialize;

use crate::common::constants::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};

/// The `FL` register.
///
/// After any compare exactly one of E, G, L is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Flags(u8);

impl Flags {
    /// Builds a flag register from raw bits.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Records the outcome of comparing `a` with `b`, clearing the other bits.
    pub const fn set_compare(&mut self, ordering: Ordering) {
        self.0 = match ordering {
            Ordering::Equal => FLAG_EQUAL,
            Ordering::Greater => FLAG_GREATER,
            Ordering::Less => FLAG_LESS,
        };
    }

    /// E: the last compare found its operands equal.
    pub const fn equal(self) -> bool {
        self.0 & FLAG_EQUAL != 0
    }

    /// G: the last compare found `a > b`.
    pub const fn greater(self) -> bool {
        self.0 & FLAG_GREATER != 0
    }

    /// L: the last compare found `a < b`.
    pub const fn less(self) -> bool {
        self.0 & FLAG_LESS != 0
    }
}
