//! Core type system for zero-cost nominal unit wrappers.
//!
//! `unyt-core` provides a minimal, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`], which names
//!   its primitive storage type (`u32`, `f64`, …).
//! - A value tagged with a unit is a [`Quantity<U>`], laid out exactly like
//!   the bare storage value.
//! - Conversion is an explicit, directional, declared scaling via
//!   [`Quantity::to`] (backed by the [`Convert`] trait).
//! - Operators exist exactly where the storage type supports them, so the
//!   bitwise family is integer-only by construction.
//!
//! Most users should depend on `unyt` (the facade crate) unless they need
//! direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of units over the *same* primitive (millivolts
//!   vs. volts, both `u32`) and over different primitives alike.
//! - Zero runtime overhead for unit tags (phantom types only; the wrapper is
//!   `#[repr(transparent)]`).
//! - Explicit, declared conversions with multiply-before-divide rational
//!   factors, so integer scaling truncates exactly once.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional analysis: multiplying volts by volts does not produce
//!   "square volts"; same-unit multiply simply is not offered.
//! - Factor validation: whether `1 V = 1000 mV` is *correct* is the
//!   declarer's business; the crate only guarantees it is applied as written.
//! - Runtime-parameterized units: every unit and conversion is fixed at build
//!   time.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use unyt_core::voltage::{Millivolts, Volts};
//!
//! let v = Volts::new(10);
//! let mv: Millivolts = v.to();
//! assert_eq!(mv.value(), 10_000);
//! ```
//!
//! Declare your own units and conversions:
//!
//! ```rust
//! use unyt_core::{convert, unit, Quantity};
//!
//! unit! { pub struct Pascal(u32, "Pa"); }
//! unit! { pub struct Hectopascal(u32, "hPa"); }
//!
//! convert!(Hectopascal => Pascal, 100);
//!
//! let p: Quantity<Pascal> = Quantity::<Hectopascal>::new(1_013).to();
//! assert_eq!(p.value(), 101_300);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `unyt-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! unyt-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the
//!   raw storage value only.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from
//! its core operations. Every generated function is total over its inputs
//! except for the storage type's own arithmetic faults: integer overflow and
//! division by zero behave exactly as they do on the bare primitive. Float
//! operations follow IEEE-754; NaN and infinities propagate.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor
//! versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod convert;
mod macros;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use convert::Convert;
pub use quantity::Quantity;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by quantity kind).
///
/// These are defined in `unyt-core` so they can implement formatting and
/// conversion traits without running into Rust's orphan rules.
pub mod units;

pub use units::angle;
pub use units::time;
pub use units::voltage;
