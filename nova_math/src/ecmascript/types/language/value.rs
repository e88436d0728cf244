// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Number, Object, OrdinaryObject, String, Symbol, number::HeapNumber};
use crate::{
    SmallInteger,
    ecmascript::{
        abstract_operations::type_conversion::{to_number, to_string},
        builtins::BuiltinFunction,
        execution::{Agent, JsResult},
    },
};

/// ### [6.1 ECMAScript Language Types](https://tc39.es/ecma262/#sec-ecmascript-language-types)
///
/// The dynamically typed value that flows through the generic calling
/// convention. Numbers are boxed: integral doubles in the safe integer range
/// are stored inline, all other doubles live on the heap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Value {
    /// ### [6.1.1 The Undefined Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-undefined-type)
    #[default]
    Undefined,

    /// ### [6.1.2 The Null Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-null-type)
    Null,

    /// ### [6.1.3 The Boolean Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-boolean-type)
    Boolean(bool),

    /// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
    String(String),

    /// ### [6.1.5 The Symbol Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-symbol-type)
    Symbol(Symbol),

    /// ### [6.1.6.1 The Number Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-number-type)
    Number(HeapNumber),
    Integer(SmallInteger),

    /// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
    Object(OrdinaryObject),
    BuiltinFunction(BuiltinFunction),
}

pub trait IntoValue
where
    Self: Sized + Copy,
{
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl Value {
    pub const fn nan() -> Self {
        Value::Number(HeapNumber::NAN)
    }

    pub const fn pos_inf() -> Self {
        Value::Number(HeapNumber::POS_INF)
    }

    pub const fn neg_inf() -> Self {
        Value::Number(HeapNumber::NEG_INF)
    }

    pub const fn neg_zero() -> Self {
        Value::Number(HeapNumber::NEG_ZERO)
    }

    pub const fn pos_zero() -> Self {
        Value::Integer(SmallInteger::zero())
    }

    pub fn from_f64(agent: &mut Agent, value: f64) -> Value {
        Number::from_f64(agent, value).into_value()
    }

    pub fn from_str(agent: &mut Agent, message: &str) -> Value {
        String::from_str(agent, message).into_value()
    }

    pub fn is_undefined(self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_object(self) -> bool {
        matches!(self, Value::Object(_) | Value::BuiltinFunction(_))
    }

    pub fn to_number(self, agent: &mut Agent) -> JsResult<Number> {
        to_number(agent, self)
    }

    /// The double held by a Number value without any coercion.
    pub fn as_f64(self, agent: &Agent) -> Option<f64> {
        Number::try_from(self).ok().map(|n| n.into_f64(agent))
    }

    pub fn to_string(self, agent: &mut Agent) -> JsResult<String> {
        to_string(agent, self)
    }

    /// A string conversion that will never throw, meant for things like
    /// displaying exceptions.
    pub fn string_repr(self, agent: &mut Agent) -> std::string::String {
        if let Value::Symbol(symbol) = self {
            // ToString of a symbol always throws. We use the descriptive
            // string instead (the result of `String(symbol)`).
            return symbol.descriptive_string(agent);
        };
        match self.to_string(agent) {
            Ok(result) => result.to_string_lossy(agent).into_owned(),
            Err(_) => {
                debug_assert!(self.is_object());
                "[object Object]".to_string()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(SmallInteger::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(SmallInteger::from(value))
    }
}

impl From<SmallInteger> for Value {
    fn from(value: SmallInteger) -> Self {
        Value::Integer(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        match value {
            Object::Object(o) => Value::Object(o),
            Object::BuiltinFunction(f) => Value::BuiltinFunction(f),
        }
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, |v| v.into())
    }
}
