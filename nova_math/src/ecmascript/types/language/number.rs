// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;

use super::{IntoValue, Value};
use crate::{
    SmallInteger,
    ecmascript::execution::Agent,
    heap::{CreateHeapData, indexes::NumberIndex},
};

/// A double that did not fit inline in a [`Value`] and lives on the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeapNumber(pub(crate) NumberIndex);

impl HeapNumber {
    /// Values allocated at these indexes when the heap is created, so that
    /// the common non-integral results never need an allocation.
    pub(crate) const PREALLOCATED: [f64; 4] = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0];

    pub(crate) const NAN: HeapNumber = HeapNumber(NumberIndex::from_index(0));
    pub(crate) const POS_INF: HeapNumber = HeapNumber(NumberIndex::from_index(1));
    pub(crate) const NEG_INF: HeapNumber = HeapNumber(NumberIndex::from_index(2));
    pub(crate) const NEG_ZERO: HeapNumber = HeapNumber(NumberIndex::from_index(3));
}

impl Index<HeapNumber> for Agent {
    type Output = f64;

    fn index(&self, index: HeapNumber) -> &Self::Output {
        self.heap
            .numbers
            .get(index.0.into_index())
            .expect("HeapNumber out of bounds")
    }
}

/// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Number(HeapNumber),
    Integer(SmallInteger),
}

impl Number {
    pub const fn nan() -> Self {
        Self::Number(HeapNumber::NAN)
    }

    pub const fn pos_inf() -> Self {
        Self::Number(HeapNumber::POS_INF)
    }

    pub const fn neg_inf() -> Self {
        Self::Number(HeapNumber::NEG_INF)
    }

    pub const fn neg_zero() -> Self {
        Self::Number(HeapNumber::NEG_ZERO)
    }

    pub const fn pos_zero() -> Self {
        Self::Integer(SmallInteger::zero())
    }

    /// Boxes a double. Integral values in the safe integer range stay inline,
    /// the preallocated specials are reused, and everything else is
    /// allocated on the heap.
    pub fn from_f64(agent: &mut Agent, value: f64) -> Self {
        if let Some(integer) = SmallInteger::try_from_f64(value) {
            return Self::Integer(integer);
        }
        if value.is_nan() {
            return Self::nan();
        }
        if value == f64::INFINITY {
            return Self::pos_inf();
        }
        if value == f64::NEG_INFINITY {
            return Self::neg_inf();
        }
        if value == 0.0 {
            // Positive zero is an integer, so this must be negative zero.
            return Self::neg_zero();
        }
        Self::Number(agent.heap.create(value))
    }

    pub fn into_f64(self, agent: &Agent) -> f64 {
        match self {
            Number::Number(n) => agent[n],
            Number::Integer(i) => i.into_f64(),
        }
    }

    pub fn is_nan(self, agent: &Agent) -> bool {
        self.into_f64(agent).is_nan()
    }

    pub fn is_pos_zero(self, agent: &Agent) -> bool {
        let n = self.into_f64(agent);
        n == 0.0 && n.is_sign_positive()
    }

    pub fn is_neg_zero(self, agent: &Agent) -> bool {
        let n = self.into_f64(agent);
        n == 0.0 && n.is_sign_negative()
    }

    /// ### [6.1.6.1.20 Number::toString ( x, radix )](https://tc39.es/ecma262/#sec-numeric-types-number-tostring)
    ///
    /// Only radix 10 is supported.
    pub fn to_string_radix_10(self, agent: &Agent) -> std::string::String {
        match self {
            Number::Integer(i) => i.into_i64().to_string(),
            Number::Number(n) => {
                let n = agent[n];
                if n.is_nan() {
                    "NaN".to_string()
                } else if n == f64::INFINITY {
                    "Infinity".to_string()
                } else if n == f64::NEG_INFINITY {
                    "-Infinity".to_string()
                } else if n == 0.0 {
                    // -0 stringifies as "0".
                    "0".to_string()
                } else {
                    let mut buffer = ryu_js::Buffer::new();
                    buffer.format(n).to_string()
                }
            }
        }
    }
}

impl From<SmallInteger> for Number {
    fn from(value: SmallInteger) -> Self {
        Number::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(SmallInteger::from(value))
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(SmallInteger::from(value))
    }
}

impl TryFrom<Value> for Number {
    type Error = ();
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(Number::Number(n)),
            Value::Integer(i) => Ok(Number::Integer(i)),
            _ => Err(()),
        }
    }
}

impl IntoValue for Number {
    fn into_value(self) -> Value {
        match self {
            Number::Number(n) => Value::Number(n),
            Number::Integer(i) => Value::Integer(i),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        value.into_value()
    }
}
