//! Macros for defining units and conversions.

/// Declares a unit marker type and wires it into the crate.
///
/// Expands to the marker struct, its [`Unit`](crate::Unit) impl, a `Display`
/// impl for `Quantity<Name>` (printing `<value> <symbol>`), a `From<Repr>`
/// impl that goes through the constructor, and a `PartialEq<Repr>` impl for
/// raw-value comparison. Unlike `#[derive(Unit)]`, which
/// expands in terms of `crate::` paths and is used inside `unyt-core`, this
/// macro uses `$crate::` paths and works from any downstream crate.
///
/// The optional `init = path` clause names a pure `fn(Repr) -> Repr` applied
/// by `Quantity::new` before storing.
///
/// ```rust
/// use unyt_core::{unit, Quantity};
///
/// fn add_offset(raw: u16) -> u16 {
///     raw + 2
/// }
///
/// unit! {
///     /// Raw ADC counts.
///     pub struct Count(u16, "cnt");
/// }
///
/// unit! {
///     /// Counts with the sensor's fixed offset applied.
///     pub struct Calibrated(u16, "cal", init = add_offset);
/// }
///
/// assert_eq!(Quantity::<Count>::new(5).value(), 5);
/// assert_eq!(Quantity::<Calibrated>::new(5).value(), 7);
/// ```
#[macro_export]
macro_rules! unit {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty, $symbol:literal);
    ) => {
        $crate::unit! {
            $(#[$meta])*
            $vis struct $name($repr, $symbol, init = ::core::convert::identity);
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($repr:ty, $symbol:literal, init = $init:path);
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq)]
        $vis struct $name;

        impl $crate::Unit for $name {
            type Repr = $repr;
            const SYMBOL: &'static str = $symbol;

            #[inline]
            fn init(value: $repr) -> $repr {
                $init(value)
            }
        }

        impl ::core::fmt::Display for $crate::Quantity<$name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <$name as $crate::Unit>::SYMBOL)
            }
        }

        impl ::core::convert::From<$repr> for $crate::Quantity<$name> {
            #[inline]
            fn from(value: $repr) -> Self {
                Self::new(value)
            }
        }

        impl ::core::cmp::PartialEq<$repr> for $crate::Quantity<$name> {
            #[inline]
            fn eq(&self, other: &$repr) -> bool {
                self.value() == *other
            }
        }
    };
}

/// Declares the default directed conversion between two units.
///
/// `convert!(Src => Dst, NUM)` is the integer-factor shorthand (denominator
/// `1`); `convert!(Src => Dst, NUM, DEN)` is the full rational form and the
/// one to use for float storage. Each declaration covers one direction only:
/// declare the inverse separately, with the factor swapped, if you want it.
///
/// Besides the [`Convert`](crate::Convert) impl backing
/// [`Quantity::to`](crate::Quantity::to), each expansion provides
/// `From<Quantity<Src>> for Quantity<Dst>`.
///
/// ```rust
/// use unyt_core::{convert, unit, Quantity};
///
/// unit! { pub struct Ampere(u32, "A"); }
/// unit! { pub struct Milliampere(u32, "mA"); }
///
/// convert!(Ampere => Milliampere, 1000);
/// convert!(Milliampere => Ampere, 1, 1000);
///
/// let ma: Quantity<Milliampere> = Quantity::<Ampere>::new(2).to();
/// assert_eq!(ma.value(), 2000);
/// ```
#[macro_export]
macro_rules! convert {
    ($src:ty => $dst:ty, $num:expr) => {
        $crate::convert!($src => $dst, $num, 1);
    };

    ($src:ty => $dst:ty, $num:expr, $den:expr) => {
        impl $crate::Convert<$dst> for $src {
            const NUM: <$dst as $crate::Unit>::Repr = $num;
            const DEN: <$dst as $crate::Unit>::Repr = $den;
        }

        impl ::core::convert::From<$crate::Quantity<$src>> for $crate::Quantity<$dst> {
            #[inline]
            fn from(value: $crate::Quantity<$src>) -> Self {
                value.to::<$dst>()
            }
        }
    };
}

/// Declares a *named* directed conversion function between two units.
///
/// [`convert!`] admits a single default conversion per source/destination
/// pair; when several distinct conversions between the same pair must coexist
/// (a calibrated scaling next to the nominal one, say), give each its own
/// function name here. The factor semantics are identical to [`convert!`],
/// including the integer-shorthand denominator of `1`.
///
/// ```rust
/// use unyt_core::{convert_fn, unit, Quantity};
///
/// unit! { pub struct Raw(u32, "raw"); }
/// unit! { pub struct Scaled(u32, "scaled"); }
///
/// convert_fn! {
///     /// Nominal scaling from datasheet.
///     pub fn nominal_to_scaled: Raw => Scaled, 3, 2;
/// }
/// convert_fn! {
///     /// Scaling measured during bring-up.
///     pub fn measured_to_scaled: Raw => Scaled, 25, 16;
/// }
///
/// assert_eq!(nominal_to_scaled(Quantity::<Raw>::new(8)).value(), 12);
/// assert_eq!(measured_to_scaled(Quantity::<Raw>::new(8)).value(), 12);
/// ```
#[macro_export]
macro_rules! convert_fn {
    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident: $src:ty => $dst:ty, $num:expr;
    ) => {
        $crate::convert_fn! {
            $(#[$meta])*
            $vis fn $name: $src => $dst, $num, 1;
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis fn $name:ident: $src:ty => $dst:ty, $num:expr, $den:expr;
    ) => {
        $(#[$meta])*
        #[inline]
        $vis fn $name(value: $crate::Quantity<$src>) -> $crate::Quantity<$dst> {
            let raw: <$dst as $crate::Unit>::Repr =
                ::core::convert::Into::into(value.value());
            $crate::Quantity::from_raw(raw * $num / $den)
        }
    };
}
