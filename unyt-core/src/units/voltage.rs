//! Voltage units backed by `u32`.
//!
//! These model the integer voltage readings typical of register-level code
//! (ADC results, PMIC rails). Conversions along the ladder are declared in
//! both directions; the downscaling direction truncates toward zero, as plain
//! integer division does:
//!
//! ```rust
//! use unyt_core::voltage::{Millivolts, Volts};
//!
//! let mv = Millivolts::new(5_000);
//! let v: Volts = mv.to();
//! assert_eq!(v.value(), 5);
//! ```
//!
//! Upscaling multiplies before it divides, so the only precision loss is the
//! storage type's own overflow behavior on very large inputs.

use crate::{convert, Quantity};
use unyt_derive::Unit;

/// Volt.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = u32, symbol = "V")]
pub struct Volt;
/// A quantity measured in volts.
pub type Volts = Quantity<Volt>;
/// One volt.
pub const V: Volts = Volts::from_raw(1);

/// Millivolt (`1e-3 V`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = u32, symbol = "mV")]
pub struct Millivolt;
/// A quantity measured in millivolts.
pub type Millivolts = Quantity<Millivolt>;
/// One millivolt.
pub const MV: Millivolts = Millivolts::from_raw(1);

/// Microvolt (`1e-6 V`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = u32, symbol = "uV")]
pub struct Microvolt;
/// A quantity measured in microvolts.
pub type Microvolts = Quantity<Microvolt>;
/// One microvolt.
pub const UV: Microvolts = Microvolts::from_raw(1);

// Conversions are directional; each direction is declared on its own.
convert!(Volt => Millivolt, 1_000);
convert!(Millivolt => Volt, 1, 1_000);
convert!(Millivolt => Microvolt, 1_000);
convert!(Microvolt => Millivolt, 1, 1_000);
convert!(Volt => Microvolt, 1_000_000);
convert!(Microvolt => Volt, 1, 1_000_000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volts_to_millivolts() {
        let v = Volts::new(10);
        let mv: Millivolts = v.to();
        assert_eq!(mv.value(), 10_000);
    }

    #[test]
    fn millivolts_to_volts_truncates() {
        assert_eq!(Millivolts::new(5_000).to::<Volt>().value(), 5);
        assert_eq!(Millivolts::new(5_999).to::<Volt>().value(), 5);
    }

    #[test]
    fn microvolt_ladder_round_trip() {
        let v = Volts::new(3);
        let uv: Microvolts = v.to();
        assert_eq!(uv.value(), 3_000_000);
        let back: Volts = uv.to();
        assert_eq!(back, v);
    }

    #[test]
    fn conversion_via_from() {
        let mv: Millivolts = Volts::new(2).into();
        assert_eq!(mv, Millivolts::new(2_000));
    }

    #[test]
    fn display_symbols() {
        assert_eq!(format!("{}", Volts::new(12)), "12 V");
        assert_eq!(format!("{}", Millivolts::new(250)), "250 mV");
        assert_eq!(format!("{}", Microvolts::new(7)), "7 uV");
    }
}
