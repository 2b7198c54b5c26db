//! Quantity type and its implementations.

use crate::unit::Unit;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A value tagged with a specific unit.
///
/// `Quantity<U>` wraps a single `U::Repr` value together with phantom type
/// information about its unit `U`. Two quantities with different unit tags are
/// distinct nominal types and cannot be mixed, while the in-memory layout is
/// exactly that of the bare storage type (`#[repr(transparent)]`).
///
/// Operators are available exactly where the storage type supports them: the
/// arithmetic and relational families work for any numeric storage, and the
/// bitwise/shift family only exists for integer storage, so applying a mask to
/// a float-backed unit is a compile error rather than a runtime surprise.
///
/// # Examples
///
/// ```rust
/// use unyt_core::{Quantity, Unit};
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// pub struct Volt;
/// impl Unit for Volt {
///     type Repr = u32;
///     const SYMBOL: &'static str = "V";
/// }
///
/// let x = Quantity::<Volt>::new(5);
/// let y = Quantity::<Volt>::new(3);
/// let sum = x + y;
/// assert_eq!(sum.value(), 8);
/// ```
#[repr(transparent)]
pub struct Quantity<U: Unit>(U::Repr, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity, applying the unit's `init` transform.
    ///
    /// For units declared without an `init` clause this stores the input
    /// verbatim. Construction is total: any representable input is accepted.
    ///
    /// ```rust
    /// use unyt_core::voltage::Millivolts;
    /// let v = Millivolts::new(1500);
    /// assert_eq!(v.value(), 1500);
    /// ```
    #[inline]
    pub fn new(value: U::Repr) -> Self {
        Self(U::init(value), PhantomData)
    }

    /// Creates a quantity from an already-final raw value, bypassing `init`.
    ///
    /// This is the interop path for values that are already in this unit's
    /// representation (e.g. read from a register); generated conversions also
    /// construct their result through it.
    ///
    /// ```rust
    /// use unyt_core::time::Milliseconds;
    /// const TIMEOUT: Milliseconds = Milliseconds::from_raw(250);
    /// assert_eq!(TIMEOUT.value(), 250);
    /// ```
    #[inline]
    pub const fn from_raw(value: U::Repr) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw stored value.
    ///
    /// No transformation is applied and this cannot fail.
    ///
    /// ```rust
    /// use unyt_core::angle::Degrees;
    /// let a = Degrees::new(45.0);
    /// assert_eq!(a.value(), 45.0);
    /// ```
    #[inline]
    pub const fn value(self) -> U::Repr {
        self.0
    }
}

// Manual impls instead of derives: the bounds belong on `U::Repr`, not on the
// tag type `U`.

impl<U: Unit> Clone for Quantity<U> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<U: Unit> Copy for Quantity<U> {}

impl<U: Unit> fmt::Debug for Quantity<U>
where
    U::Repr: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(U::SYMBOL).field(&self.0).finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Relational operators (unit/unit, result is bool)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> PartialEq for Quantity<U>
where
    U::Repr: PartialEq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<U: Unit> Eq for Quantity<U> where U::Repr: Eq {}

impl<U: Unit> PartialOrd for Quantity<U>
where
    U::Repr: PartialOrd,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<U: Unit> Ord for Quantity<U>
where
    U::Repr: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl<U: Unit> Hash for Quantity<U>
where
    U::Repr: Hash,
{
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-unit binary operators (unit/unit, result is the same unit)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U>
where
    U::Repr: Add<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_raw(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U>
where
    U::Repr: AddAssign,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U>
where
    U::Repr: Sub<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_raw(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U>
where
    U::Repr: SubAssign,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit/primitive binary operators (scalar on the right, result keeps the unit)
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Mul<U::Repr> for Quantity<U>
where
    U::Repr: Mul<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn mul(self, rhs: U::Repr) -> Self {
        Self::from_raw(self.0 * rhs)
    }
}

impl<U: Unit> Div<U::Repr> for Quantity<U>
where
    U::Repr: Div<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn div(self, rhs: U::Repr) -> Self {
        Self::from_raw(self.0 / rhs)
    }
}

impl<U: Unit> Rem<U::Repr> for Quantity<U>
where
    U::Repr: Rem<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn rem(self, rhs: U::Repr) -> Self {
        Self::from_raw(self.0 % rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bitwise family. The bounds only hold for integer storage, so these do not
// exist for float-backed units.
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> BitAnd<U::Repr> for Quantity<U>
where
    U::Repr: BitAnd<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: U::Repr) -> Self {
        Self::from_raw(self.0 & rhs)
    }
}

impl<U: Unit> BitOr<U::Repr> for Quantity<U>
where
    U::Repr: BitOr<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: U::Repr) -> Self {
        Self::from_raw(self.0 | rhs)
    }
}

impl<U: Unit> BitXor<U::Repr> for Quantity<U>
where
    U::Repr: BitXor<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn bitxor(self, rhs: U::Repr) -> Self {
        Self::from_raw(self.0 ^ rhs)
    }
}

impl<U: Unit, R> Shl<R> for Quantity<U>
where
    U::Repr: Shl<R, Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn shl(self, rhs: R) -> Self {
        Self::from_raw(self.0 << rhs)
    }
}

impl<U: Unit, R> Shr<R> for Quantity<U>
where
    U::Repr: Shr<R, Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn shr(self, rhs: R) -> Self {
        Self::from_raw(self.0 >> rhs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unary operators
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Not for Quantity<U>
where
    U::Repr: Not<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.0)
    }
}

impl<U: Unit> Neg for Quantity<U>
where
    U::Repr: Neg<Output = U::Repr>,
{
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_raw(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U>
where
    U::Repr: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U>
where
    U::Repr: Deserialize<'de>,
{
    /// Deserializes the raw stored value. The `init` transform is not applied:
    /// serialized data is already in this unit's representation.
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = U::Repr::deserialize(deserializer)?;
        Ok(Quantity::from_raw(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit
/// symbols in serialized data. This is useful for external APIs, configuration
/// files, or self-documenting data formats.
///
/// # Examples
///
/// ```rust
/// use unyt_core::voltage::Millivolts;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "unyt_core::serde_with_unit")]
///     rail: Millivolts,  // Serializes as {"value": 3300, "unit": "mV"}
///
///     ripple: Millivolts,  // Serializes as 25 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 3300, "unit": "mV"}
    /// ```
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        U::Repr: Serialize,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U>` from a struct with `value` and optionally
    /// `unit` fields.
    ///
    /// The `unit` field is validated if present but not required for backwards
    /// compatibility; a mismatching symbol is a deserialization error.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        U::Repr: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        // Checks the unit symbol in place, so transient (non-borrowed) string
        // data from readers works without allocating.
        struct UnitSymbol<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit> de::DeserializeSeed<'de> for UnitSymbol<U> {
            type Value = ();

            fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(self)
            }
        }

        impl<'de, U: Unit> Visitor<'de> for UnitSymbol<U> {
            type Value = ();

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str(U::SYMBOL)
            }

            fn visit_str<E>(self, v: &str) -> Result<(), E>
            where
                E: de::Error,
            {
                if v == U::SYMBOL {
                    Ok(())
                } else {
                    Err(de::Error::invalid_value(de::Unexpected::Str(v), &U::SYMBOL))
                }
            }
        }

        struct QuantityVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U>
        where
            U::Repr: Deserialize<'de>,
        {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<U::Repr> = None;
                let mut unit_seen = false;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit_seen {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            // Validated in place; the unit field stays
                            // optional for backwards compatibility.
                            map.next_value_seed(UnitSymbol::<U>(core::marker::PhantomData))?;
                            unit_seen = true;
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                Ok(Quantity::from_raw(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}
