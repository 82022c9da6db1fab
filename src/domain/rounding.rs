//! Explicit rounding direction for integer division.

/// Rounding direction for every division the pool performs.
///
/// Share minting, withdrawal payouts and swap quotes round
/// [`Down`](Rounding::Down); fees and required inputs round
/// [`Up`](Rounding::Up).  Either way the remainder stays with the pool.
///
/// # Examples
///
/// ```
/// use pair_amm::domain::Rounding;
///
/// assert!(Rounding::Down.is_down());
/// assert!(!Rounding::Down.is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling: anything the pool charges.
    Up,
    /// Floor: anything the pool pays out or mints.
    Down,
}

impl Rounding {
    /// `true` for ceiling division.
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// `true` for floor division.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
