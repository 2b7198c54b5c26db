//! Directed, rational-factor conversions between units.

use crate::quantity::Quantity;
use crate::unit::Unit;
use core::ops::{Div, Mul};

/// Declares that values of `Self` convert into values of `Dst`.
///
/// A conversion is **directional**: implementing `Convert<Dst> for Src` says
/// nothing about `Dst -> Src`; the inverse must be declared separately
/// (typically with numerator and denominator swapped). Declarations are
/// normally written with the [`convert!`](crate::convert) macro.
///
/// The factor is a rational `NUM / DEN` expressed in the *destination*
/// storage type, and [`Quantity::to`] computes
///
/// ```text
/// dst_raw = (src_raw * NUM) / DEN
/// ```
///
/// with the multiply strictly before the divide. For integer storage this is
/// the order that loses the least precision and truncates toward zero exactly
/// once; for float storage it is ordinary IEEE arithmetic. Overflow during
/// the multiply and a zero `DEN` are the declarer's responsibility; nothing is
/// widened or checked.
pub trait Convert<Dst: Unit>: Unit {
    /// Numerator of the scaling factor, in destination storage.
    const NUM: Dst::Repr;
    /// Denominator of the scaling factor, in destination storage.
    const DEN: Dst::Repr;
}

impl<U: Unit> Quantity<U> {
    /// Converts this quantity into another unit with a declared conversion.
    ///
    /// Available only when `Convert<Dst>` is implemented for this unit and the
    /// source storage losslessly widens (or is identical) to the destination
    /// storage. The arithmetic runs in the destination storage type.
    ///
    /// ```rust
    /// use unyt_core::voltage::{Millivolts, Volts};
    ///
    /// let v = Volts::new(10);
    /// let mv: Millivolts = v.to();
    /// assert_eq!(mv.value(), 10_000);
    ///
    /// // Integer division truncates toward zero.
    /// let back: Volts = Millivolts::new(5_999).to();
    /// assert_eq!(back, Volts::new(5));
    /// ```
    #[inline]
    pub fn to<Dst>(self) -> Quantity<Dst>
    where
        Dst: Unit,
        U: Convert<Dst>,
        U::Repr: Into<Dst::Repr>,
        Dst::Repr: Mul<Output = Dst::Repr> + Div<Output = Dst::Repr>,
    {
        let raw: Dst::Repr = self.value().into();
        Quantity::from_raw(raw * <U as Convert<Dst>>::NUM / <U as Convert<Dst>>::DEN)
    }
}
