//! Angle units backed by `f64`.
//!
//! Conversion factors are expressed as exact rationals of π, so the arithmetic
//! is one IEEE multiply and one IEEE divide with no rounded intermediate
//! constants:
//!
//! ```rust
//! use unyt_core::angle::{Degrees, Radians};
//! use core::f64::consts::PI;
//!
//! let d = Degrees::new(180.0);
//! let r: Radians = d.to();
//! assert!((r.value() - PI).abs() < 1e-12);
//! ```

use crate::{convert, Quantity};
use core::f64::consts::PI;
use unyt_derive::Unit;

/// Radian.
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = f64, symbol = "rad")]
pub struct Radian;
/// A quantity measured in radians.
pub type Radians = Quantity<Radian>;
/// One radian.
pub const RAD: Radians = Radians::from_raw(1.0);

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = f64, symbol = "deg")]
pub struct Degree;
/// A quantity measured in degrees.
pub type Degrees = Quantity<Degree>;
/// One degree.
pub const DEG: Degrees = Degrees::from_raw(1.0);

/// Gradian (`π/200 rad`).
#[derive(Clone, Copy, Debug, PartialEq, Unit)]
#[unit(repr = f64, symbol = "gon")]
pub struct Gradian;
/// A quantity measured in gradians.
pub type Gradians = Quantity<Gradian>;
/// One gradian.
pub const GON: Gradians = Gradians::from_raw(1.0);

// Conversions are directional; each direction is declared on its own.
convert!(Radian => Degree, 180.0, PI);
convert!(Degree => Radian, PI, 180.0);
convert!(Radian => Gradian, 200.0, PI);
convert!(Gradian => Radian, PI, 200.0);
convert!(Degree => Gradian, 10.0, 9.0);
convert!(Gradian => Degree, 9.0, 10.0);
