// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use num_traits::ToPrimitive;

/// Integer in the JavaScript safe integer range, stored inline in a
/// [`Value`](crate::ecmascript::types::Value) without touching the heap.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmallInteger(i64);

impl core::fmt::Debug for SmallInteger {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SmallInteger {
    pub const MIN_NUMBER: i64 = -(2i64.pow(53)) + 1;
    pub const MAX_NUMBER: i64 = 2i64.pow(53) - 1;

    #[inline]
    pub const fn into_i64(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn into_f64(self) -> f64 {
        self.0 as f64
    }

    pub const fn zero() -> SmallInteger {
        Self(0)
    }

    /// Exact conversion from a double. Fails for fractional values, values
    /// outside the safe integer range, NaN, infinities and negative zero:
    /// none of those survive a round trip through an integer.
    pub fn try_from_f64(value: f64) -> Option<SmallInteger> {
        if value.fract() != 0.0 || (value == 0.0 && value.is_sign_negative()) {
            return None;
        }
        let integer = value.to_i64()?;
        Self::try_from(integer).ok()
    }
}

impl TryFrom<i64> for SmallInteger {
    type Error = ();
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (Self::MIN_NUMBER..=Self::MAX_NUMBER).contains(&value) {
            Ok(Self(value))
        } else {
            Err(())
        }
    }
}

impl From<i32> for SmallInteger {
    fn from(value: i32) -> Self {
        Self(value as i64)
    }
}

impl From<u32> for SmallInteger {
    fn from(value: u32) -> Self {
        Self(value as i64)
    }
}

impl From<SmallInteger> for i64 {
    fn from(value: SmallInteger) -> Self {
        value.0
    }
}
