//! Spot price derived from reserves.

use super::ConstantProductPool;
use crate::domain::{Asset, Price};
use crate::error::AmmError;

impl ConstantProductPool {
    /// Units of B per unit of A: `reserve_b / reserve_a`, exact.
    ///
    /// Depositing at the current ratio leaves the result unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoLiquidity`] if reserve A is zero.
    pub fn get_price(&self) -> Result<Price, AmmError> {
        self.price_of(Asset::A)
    }

    /// Price of one unit of `base` in units of the other side.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::NoLiquidity`] if the `base` reserve is zero.
    pub fn price_of(&self, base: Asset) -> Result<Price, AmmError> {
        let base_reserve = self.state.reserve(base);
        if base_reserve.is_zero() {
            return Err(AmmError::NoLiquidity);
        }
        Price::from_amounts(self.state.reserve(base.other()), base_reserve)
    }
}
