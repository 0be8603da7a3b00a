//! Decimal / tick conversion at the engine boundary.
//!
//! The engine works exclusively on integer ticks; decimal quote-currency
//! prices exist only in input lines and formatted output. A [`PriceScale`]
//! carries the number of ticks per unit of quote currency (100 for cents) and
//! performs the conversion in both directions.

use std::fmt;

/// Ticks per unit of quote currency. Always at least 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceScale(u64);

impl PriceScale {
    /// Cent pricing: 100 ticks per unit.
    pub const DEFAULT: PriceScale = PriceScale(100);

    /// Build a scale. Returns `None` for zero, which would collapse every
    /// price to the same tick.
    pub fn new(ticks_per_unit: u64) -> Option<Self> {
        (ticks_per_unit > 0).then_some(Self(ticks_per_unit))
    }

    pub fn ticks_per_unit(&self) -> u64 {
        self.0
    }

    /// Convert a decimal price to ticks, rounding to the nearest tick.
    /// Returns `None` for negative or non-finite input.
    pub fn to_ticks(&self, price: f64) -> Option<u64> {
        if !price.is_finite() || price < 0.0 {
            return None;
        }
        let scaled = (price * self.0 as f64).round();
        (scaled >= 0.0 && scaled < u64::MAX as f64).then_some(scaled as u64)
    }

    /// Convert ticks back to a decimal price. Egress only: the result is
    /// never fed back into the engine.
    pub fn to_price(&self, ticks: u64) -> f64 {
        ticks as f64 / self.0 as f64
    }

    /// Decimal places needed to render one tick exactly.
    pub fn decimals(&self) -> usize {
        let mut digits = 0;
        let mut scale = self.0;
        while scale > 1 {
            scale = scale.div_ceil(10);
            digits += 1;
        }
        digits
    }

    /// Render a tick price as a decimal string, e.g. `10050` -> `"100.50"`
    /// at the default scale.
    pub fn format_ticks(&self, ticks: u64) -> String {
        format!("{:.*}", self.decimals(), self.to_price(ticks))
    }
}

impl Default for PriceScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for PriceScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::PriceScale;

    #[test]
    fn test_to_ticks_rounds_to_nearest() {
        let scale = PriceScale::DEFAULT;
        assert_eq!(scale.to_ticks(100.50), Some(10050));
        assert_eq!(scale.to_ticks(1.234), Some(123));
        assert_eq!(scale.to_ticks(1.236), Some(124));
        assert_eq!(scale.to_ticks(0.0), Some(0));
    }

    #[test]
    fn test_to_ticks_rejects_unusable_input() {
        let scale = PriceScale::DEFAULT;
        assert_eq!(scale.to_ticks(-0.01), None);
        assert_eq!(scale.to_ticks(f64::NAN), None);
        assert_eq!(scale.to_ticks(f64::INFINITY), None);
    }

    #[test]
    fn test_round_trip_through_decimal() {
        let scale = PriceScale::new(1000).unwrap();
        let ticks = scale.to_ticks(12.345).unwrap();
        assert_eq!(ticks, 12345);
        assert_eq!(scale.to_price(ticks), 12.345);
    }

    #[test]
    fn test_decimals_per_scale() {
        assert_eq!(PriceScale::new(1).unwrap().decimals(), 0);
        assert_eq!(PriceScale::new(10).unwrap().decimals(), 1);
        assert_eq!(PriceScale::DEFAULT.decimals(), 2);
        assert_eq!(PriceScale::new(1000).unwrap().decimals(), 3);
    }

    #[test]
    fn test_format_ticks() {
        assert_eq!(PriceScale::DEFAULT.format_ticks(10050), "100.50");
        assert_eq!(PriceScale::new(1).unwrap().format_ticks(99), "99");
        assert_eq!(PriceScale::new(1000).unwrap().format_ticks(12345), "12.345");
    }

    #[test]
    fn test_zero_scale_is_rejected() {
        assert!(PriceScale::new(0).is_none());
    }
}
