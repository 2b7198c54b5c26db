//! Strongly typed unit wrappers over primitive numbers.
//!
//! `unyt` is the user-facing crate in this workspace. It re-exports the full API from `unyt-core` plus a small set of
//! predefined units (voltage, time, angles).
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is a zero-sized type describing the unit and naming
//! the primitive storage type. This keeps units at compile time with no runtime overhead beyond the bare primitive.
//!
//! # What this crate solves
//!
//! - Prevents mixing distinct units, even over the same primitive (you can't add millivolts to volts, and you can't
//!   add millivolts to milliseconds either).
//! - Makes unit conversion explicit, directional, and type-checked (`to::<TargetUnit>()`).
//! - Keeps the integer operator surface (bitwise, shifts, remainder) available on integer-backed units and absent on
//!   float-backed ones.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional analysis or symbolic unit algebra; there is no `m^2 * s^-1`.
//! - Validating conversion factors: declarations are taken as written.
//! - Runtime-parameterized units; everything is fixed at compile time.
//!
//! # Quick start
//!
//! Convert volts to millivolts:
//!
//! ```rust
//! use unyt::{Millivolts, Volts};
//!
//! let v = Volts::new(10);
//! let mv: Millivolts = v.to();
//! assert_eq!(mv.value(), 10_000);
//! ```
//!
//! Define your own units and conversions:
//!
//! ```rust
//! use unyt::{convert, unit, Quantity};
//!
//! unit! { pub struct Meter(u32, "m"); }
//! unit! { pub struct Centimeter(u32, "cm"); }
//!
//! convert!(Meter => Centimeter, 100);
//! convert!(Centimeter => Meter, 1, 100);
//!
//! let cm: Quantity<Centimeter> = Quantity::<Meter>::new(3).to();
//! assert_eq!(cm.value(), 300);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use unyt::{Millivolts, Volts};
//!
//! let mv = Millivolts::new(1_000);
//! let v = Volts::new(1);
//! let _ = mv + v; // cannot add different unit types
//! ```
//!
//! The bitwise family only exists for integer storage; float-backed units
//! reject it at build time:
//!
//! ```compile_fail
//! use unyt::Degrees;
//!
//! let a = Degrees::new(90.0);
//! let _ = a & 1.0; // f64 has no bitwise AND
//! ```
//!
//! Raw numbers do not mix with tagged values either:
//!
//! ```compile_fail
//! use unyt::Millivolts;
//!
//! let mv = Millivolts::new(1_000);
//! let _ = mv + 500; // wrap the raw value first: mv + Millivolts::new(500)
//! ```
//!
//! Conversions are directional; an undeclared direction does not compile:
//!
//! ```compile_fail
//! use unyt::{unit, convert, Quantity};
//!
//! unit! { struct A(u32, "a"); }
//! unit! { struct B(u32, "b"); }
//! convert!(A => B, 2);
//!
//! let _: Quantity<A> = Quantity::<B>::new(4).to(); // B => A was never declared
//! ```
//!
//! # Modules
//!
//! Units are grouped by quantity kind under modules (also re-exported at the crate root for convenience):
//!
//! - `unyt::voltage` (volts, millivolts, microvolts over `u32`)
//! - `unyt::time` (seconds, milliseconds, microseconds over `u64`)
//! - `unyt::angle` (radians, degrees, gradians over `f64`)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `unyt-core`.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw storage value only.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! unyt = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Arithmetic and
//! conversions behave exactly like the underlying primitive: integer overflow and division by zero fault the way the
//! bare integer does, and float operations follow IEEE-754 (NaN and infinities propagate).
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use unyt_core::*;

/// Derive macro used by `unyt-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Quantity`, so it is intended for use inside `unyt-core`
/// (or crates exposing the same crate-root API). Downstream crates should use the `unit!` macro instead.
pub use unyt_derive::Unit;

pub use unyt_core::units::angle;
pub use unyt_core::units::time;
pub use unyt_core::units::voltage;

pub use unyt_core::units::angle::*;
pub use unyt_core::units::time::*;
pub use unyt_core::units::voltage::*;
