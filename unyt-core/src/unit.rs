//! Unit marker types and traits.

use core::fmt::Debug;

/// Trait implemented by every **unit** marker type.
///
/// * `Repr` is the primitive storage type backing values of this unit. A
///   [`Quantity<U>`](crate::Quantity) has exactly the layout of `U::Repr`.
///
/// * `SYMBOL` is the printable string (e.g. `"mV"` or `"rad"`), shown by the
///   per-unit [`core::fmt::Display`] impls.
///
/// * `init` is the construction-time transform applied by
///   [`Quantity::new`](crate::Quantity::new). The default is the identity
///   function; units declared with an `init` clause override it. Raw-value
///   paths ([`Quantity::from_raw`](crate::Quantity::from_raw) and generated
///   conversions) never call it.
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in
///   units are unit structs with no fields).
/// - `init` must be a pure function from `Repr` to `Repr`.
///
/// Units are normally declared with `#[derive(Unit)]` or the
/// [`unit!`](crate::unit) macro rather than by hand:
///
/// ```rust
/// use unyt_core::{Quantity, Unit};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Tick;
/// impl Unit for Tick {
///     type Repr = u32;
///     const SYMBOL: &'static str = "tick";
/// }
///
/// let t = Quantity::<Tick>::new(5);
/// assert_eq!(t.value(), 5);
/// ```
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Primitive storage type for values of this unit.
    type Repr: Copy;

    /// Printable symbol, shown by the per-unit `Display` impls.
    const SYMBOL: &'static str;

    /// Transform applied to the input of [`Quantity::new`](crate::Quantity::new).
    ///
    /// Identity unless the unit declares otherwise.
    #[inline]
    fn init(value: Self::Repr) -> Self::Repr {
        value
    }
}
