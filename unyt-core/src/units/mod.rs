//! Predefined unit modules grouped by quantity kind.
//!
//! `unyt-core` ships a small set of built-in units so that conversions and
//! formatting work out of the box without downstream crates having to declare
//! everything themselves.
//!
//! ## Modules
//!
//! - [`voltage`]: integer-backed electrical potential units (`u32`).
//! - [`angle`]: float-backed angle units (`f64`).
//! - [`time`]: integer-backed time units (`u64`).
//!
//! Each module follows the same pattern: one marker struct per unit, a
//! `Quantity` type alias, a one-unit constant, and explicit directional
//! conversions along the module's scaling ladder.

pub mod angle;
pub mod time;
pub mod voltage;
