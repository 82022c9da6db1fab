//! Liquidity share units.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Units of proportional ownership of the pool's reserves.
///
/// Distinct from [`Amount`](super::Amount): shares never denote a quantity
/// of an asset, only a claim on a fraction of both reserves.  Shares are
/// minted on deposit and burned on withdrawal.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Shares;
///
/// let held = Shares::new(1_000);
/// assert_eq!(held.checked_sub(&Shares::new(1_000)), Some(Shares::ZERO));
/// assert_eq!(held.checked_sub(&Shares::new(1_001)), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` if `other` exceeds `self`.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
