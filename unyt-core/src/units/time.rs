//! Time units backed by `u64`.
//!
//! Integer tick counts as used by timers and deadlines. The ladder converts
//! both ways; the downscaling direction truncates toward zero:
//!
//! ```rust
//! use unyt_core::time::{Milliseconds, Seconds};
//!
//! let ms = Milliseconds::new(1_500);
//! let s: Seconds = ms.to();
//! assert_eq!(s.value(), 1);
//! ```

use crate::{convert, Quantity};
use unyt_derive::Unit;

/// Second.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = u64, symbol = "s")]
pub struct Second;
/// A quantity measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const S: Seconds = Seconds::from_raw(1);

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = u64, symbol = "ms")]
pub struct Millisecond;
/// A quantity measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;
/// One millisecond.
pub const MS: Milliseconds = Milliseconds::from_raw(1);

/// Microsecond (`1e-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = u64, symbol = "us")]
pub struct Microsecond;
/// A quantity measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;
/// One microsecond.
pub const US: Microseconds = Microseconds::from_raw(1);

// Conversions are directional; each direction is declared on its own.
convert!(Second => Millisecond, 1_000);
convert!(Millisecond => Second, 1, 1_000);
convert!(Millisecond => Microsecond, 1_000);
convert!(Microsecond => Millisecond, 1, 1_000);
convert!(Second => Microsecond, 1_000_000);
convert!(Microsecond => Second, 1, 1_000_000);
