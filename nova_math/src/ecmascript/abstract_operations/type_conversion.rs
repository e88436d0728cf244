// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.1 Type Conversion](https://tc39.es/ecma262/#sec-type-conversion)
//!
//! The ECMAScript language implicitly performs automatic type conversion as
//! needed. This module holds the conversions the numeric intrinsics sit on:
//! every Math function reads its arguments through [`to_number`], and any
//! exception a user-defined conversion hook throws is returned unchanged.

use super::operations_on_objects::{call_function, get, get_method};
use super::testing_and_comparison::is_callable;
use crate::{
    ecmascript::{
        execution::{Agent, ExceptionType, JsResult},
        types::{Number, Object, PropertyKey, String, Value},
    },
    heap::WellKnownSymbolIndexes,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferredType {
    String = 1,
    Number,
}

/// ### [7.1.1 ToPrimitive ( input \[ , preferredType \] )](https://tc39.es/ecma262/#sec-toprimitive)
///
/// The abstract operation ToPrimitive takes argument input (an ECMAScript
/// language value) and optional argument preferredType (STRING or NUMBER) and
/// returns either a normal completion containing an ECMAScript language value
/// or a throw completion. It converts its input argument to a non-Object type.
pub fn to_primitive(
    agent: &mut Agent,
    input: Value,
    preferred_type: Option<PreferredType>,
) -> JsResult<Value> {
    // 1. If input is an Object, then
    let Ok(input) = Object::try_from(input) else {
        // 2. Return input.
        return Ok(input);
    };
    // a. Let exoticToPrim be ? GetMethod(input, @@toPrimitive).
    let exotic_to_prim = get_method(
        agent,
        input.into(),
        WellKnownSymbolIndexes::ToPrimitive.into(),
    )?;
    // b. If exoticToPrim is not undefined, then
    if let Some(exotic_to_prim) = exotic_to_prim {
        let hint = match preferred_type {
            // i. If preferredType is not present, then
            // 1. Let hint be "default".
            None => "default",
            // ii. Else if preferredType is STRING, then
            // 1. Let hint be "string".
            Some(PreferredType::String) => "string",
            // iii. Else,
            // 1. Let hint be "number".
            Some(PreferredType::Number) => "number",
        };
        let hint = Value::from_str(agent, hint);
        // iv. Let result be ? Call(exoticToPrim, input, « hint »).
        let result = call_function(agent, exotic_to_prim, input.into(), Some(&[hint]))?;
        // v. If result is not an Object, return result.
        if !result.is_object() {
            return Ok(result);
        }
        // vi. Throw a TypeError exception.
        return Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert object to primitive value",
        ));
    }
    // c. If preferredType is not present, let preferredType be NUMBER.
    // d. Return ? OrdinaryToPrimitive(input, preferredType).
    ordinary_to_primitive(
        agent,
        input,
        preferred_type.unwrap_or(PreferredType::Number),
    )
}

/// #### [7.1.1.1 OrdinaryToPrimitive ( O, hint )](https://tc39.es/ecma262/#sec-ordinarytoprimitive)
///
/// The abstract operation OrdinaryToPrimitive takes arguments O (an Object)
/// and hint (STRING or NUMBER) and returns either a normal completion
/// containing an ECMAScript language value or a throw completion.
pub(crate) fn ordinary_to_primitive(
    agent: &mut Agent,
    o: Object,
    hint: PreferredType,
) -> JsResult<Value> {
    let to_string_key = PropertyKey::from_str(agent, "toString");
    let value_of_key = PropertyKey::from_str(agent, "valueOf");
    let method_names = match hint {
        PreferredType::String => {
            // 1. If hint is STRING, then
            // a. Let methodNames be « "toString", "valueOf" ».
            [to_string_key, value_of_key]
        }
        PreferredType::Number => {
            // 2. Else,
            // a. Let methodNames be « "valueOf", "toString" ».
            [value_of_key, to_string_key]
        }
    };
    // 3. For each element name of methodNames, do
    for name in method_names {
        // a. Let method be ? Get(O, name).
        let method = get(agent, o, name)?;
        // b. If IsCallable(method) is true, then
        if is_callable(method) {
            // i. Let result be ? Call(method, O).
            let result = call_function(agent, method, o.into(), None)?;
            // ii. If result is not an Object, return result.
            if !result.is_object() {
                return Ok(result);
            }
        }
    }
    // 4. Throw a TypeError exception.
    Err(agent.throw_exception(
        ExceptionType::TypeError,
        "Cannot convert object to primitive value",
    ))
}

/// ### [7.1.4 ToNumber ( argument )](https://tc39.es/ecma262/#sec-tonumber)
///
/// The abstract operation ToNumber takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a Number
/// or a throw completion. It converts argument to a value of type Number.
pub fn to_number(agent: &mut Agent, argument: Value) -> JsResult<Number> {
    match argument {
        // 1. If argument is a Number, return argument.
        Value::Number(n) => Ok(Number::Number(n)),
        Value::Integer(i) => Ok(Number::Integer(i)),
        // 2. If argument is either a Symbol or a BigInt, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a number",
        )),
        // 3. If argument is undefined, return NaN.
        Value::Undefined => Ok(Number::nan()),
        // 4. If argument is either null or false, return +0𝔽.
        Value::Null | Value::Boolean(false) => Ok(Number::pos_zero()),
        // 5. If argument is true, return 1𝔽.
        Value::Boolean(true) => Ok(Number::from(1)),
        // 6. If argument is a String, return StringToNumber(argument).
        Value::String(s) => Ok(string_to_number(agent, s)),
        // 7. Assert: argument is an Object.
        Value::Object(_) | Value::BuiltinFunction(_) => {
            // 8. Let primValue be ? ToPrimitive(argument, NUMBER).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::Number))?;
            // 9. Assert: primValue is not an Object.
            debug_assert!(!prim_value.is_object());
            // 10. Return ? ToNumber(primValue).
            to_number(agent, prim_value)
        }
    }
}

/// ### [7.1.4.1.1 StringToNumber ( str )](https://tc39.es/ecma262/#sec-stringtonumber)
///
/// The abstract operation StringToNumber takes argument str (a String) and
/// returns a Number.
pub fn string_to_number(agent: &mut Agent, string: String) -> Number {
    let value = parse_string_numeric_literal(&string.to_string_lossy(agent));
    Number::from_f64(agent, value)
}

/// Parses a StringNumericLiteral, returning NaN when the text does not match
/// the grammar.
fn parse_string_numeric_literal(text: &str) -> f64 {
    // StrWhiteSpace surrounds the literal.
    let trimmed = text.trim_matches(is_trimmable_whitespace);

    // An empty or all-whitespace string is +0.
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // NonDecimalIntegerLiteral: no sign, no fraction.
    let bytes = trimmed.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return parse_non_decimal_digits(&trimmed[2..], radix);
        }
    }

    // StrDecimalLiteral. fast_float accepts spellings of infinity and NaN
    // that are not part of the grammar, so only decimal characters may pass.
    if !trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return f64::NAN;
    }
    match fast_float::parse_partial::<f64, _>(trimmed) {
        Ok((value, len)) if len == trimmed.len() => value,
        _ => f64::NAN,
    }
}

fn parse_non_decimal_digits(digits: &str, radix: u32) -> f64 {
    let mut value = 0.0f64;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            return f64::NAN;
        };
        value = value * radix as f64 + digit as f64;
    }
    value
}

/// WhiteSpace and LineTerminator code points.
pub(crate) fn is_trimmable_whitespace(c: char) -> bool {
    // NEL is Unicode White_Space but not ECMAScript WhiteSpace; ZWNBSP is
    // the reverse.
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// ### [7.1.17 ToString ( argument )](https://tc39.es/ecma262/#sec-tostring)
///
/// The abstract operation ToString takes argument argument (an ECMAScript
/// language value) and returns either a normal completion containing a String
/// or a throw completion. It converts argument to a value of type String.
pub fn to_string(agent: &mut Agent, argument: Value) -> JsResult<String> {
    match argument {
        // 1. If argument is a String, return argument.
        Value::String(s) => Ok(s),
        // 2. If argument is a Symbol, throw a TypeError exception.
        Value::Symbol(_) => Err(agent.throw_exception(
            ExceptionType::TypeError,
            "Cannot convert a Symbol value to a string",
        )),
        // 3. If argument is undefined, return "undefined".
        Value::Undefined => Ok(String::from_str(agent, "undefined")),
        // 4. If argument is null, return "null".
        Value::Null => Ok(String::from_str(agent, "null")),
        // 5. If argument is true, return "true".
        // 6. If argument is false, return "false".
        Value::Boolean(b) => Ok(String::from_str(agent, if b { "true" } else { "false" })),
        // 7. If argument is a Number, return Number::toString(argument, 10).
        Value::Number(n) => {
            let text = Number::Number(n).to_string_radix_10(agent);
            Ok(String::from_str(agent, &text))
        }
        Value::Integer(i) => Ok(String::from_str(agent, &i.into_i64().to_string())),
        // 9. Assert: argument is an Object.
        Value::Object(_) | Value::BuiltinFunction(_) => {
            // 10. Let primValue be ? ToPrimitive(argument, STRING).
            let prim_value = to_primitive(agent, argument, Some(PreferredType::String))?;
            // 11. Assert: primValue is not an Object.
            debug_assert!(!prim_value.is_object());
            // 12. Return ? ToString(primValue).
            to_string(agent, prim_value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        builtins::{ArgumentsList, Behaviour, BuiltinFunctionArgs, create_builtin_function},
        execution::{DefaultHostHooks, Options, initialize_default_realm},
        types::{OrdinaryObject, PropertyDescriptor, Symbol},
    };

    fn agent() -> Agent {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        initialize_default_realm(&mut agent).unwrap();
        agent
    }

    fn number_of(agent: &mut Agent, text: &str) -> f64 {
        let s = String::from_str(agent, text);
        string_to_number(agent, s).into_f64(agent)
    }

    #[test]
    fn primitives_to_number() {
        let mut agent = agent();
        assert!(to_number(&mut agent, Value::Undefined).unwrap().is_nan(&agent));
        assert!(to_number(&mut agent, Value::Null).unwrap().is_pos_zero(&agent));
        assert_eq!(
            to_number(&mut agent, Value::Boolean(true)).unwrap(),
            Number::from(1)
        );
        assert_eq!(
            to_number(&mut agent, Value::Boolean(false)).unwrap(),
            Number::pos_zero()
        );
        let symbol = Symbol::new(&mut agent, Some("s"));
        assert!(to_number(&mut agent, symbol.into()).is_err());
    }

    #[test]
    fn strings_to_number() {
        let mut agent = agent();
        assert_eq!(number_of(&mut agent, ""), 0.0);
        assert_eq!(number_of(&mut agent, " \t\n "), 0.0);
        assert_eq!(number_of(&mut agent, "  42  "), 42.0);
        assert_eq!(number_of(&mut agent, "-0.5"), -0.5);
        assert_eq!(number_of(&mut agent, ".5"), 0.5);
        assert_eq!(number_of(&mut agent, "5."), 5.0);
        assert_eq!(number_of(&mut agent, "1e3"), 1000.0);
        assert_eq!(number_of(&mut agent, "1e400"), f64::INFINITY);
        assert_eq!(number_of(&mut agent, "0x1F"), 31.0);
        assert_eq!(number_of(&mut agent, "0o17"), 15.0);
        assert_eq!(number_of(&mut agent, "0b101"), 5.0);
        assert_eq!(number_of(&mut agent, "+Infinity"), f64::INFINITY);
        assert_eq!(number_of(&mut agent, "-Infinity"), f64::NEG_INFINITY);
        assert!(number_of(&mut agent, "-0").is_sign_negative());
        assert!(number_of(&mut agent, "\u{FEFF}7\u{2028}") == 7.0);
        for invalid in ["inf", "infinity", "NaN", "nan", "1e", "0x", "-0x10", "12px", "1_000", "."] {
            assert!(number_of(&mut agent, invalid).is_nan(), "{invalid}");
        }
    }

    #[test]
    fn objects_convert_through_value_of() {
        let mut agent = agent();
        fn value_of(_: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
            Ok(Value::from(9))
        }
        let function = create_builtin_function(
            &mut agent,
            Behaviour::Regular(value_of),
            BuiltinFunctionArgs::new(0, "valueOf"),
        );
        let prototype = agent.current_realm().intrinsics().object_prototype();
        let object = OrdinaryObject::create_empty_object(&mut agent, Some(prototype.into()));
        let key = PropertyKey::from_str(&mut agent, "valueOf");
        object.internal_define_own_property(
            &mut agent,
            key,
            PropertyDescriptor::new_data_descriptor(function.into()),
        );
        assert_eq!(
            to_number(&mut agent, object.into()).unwrap(),
            Number::from(9)
        );
    }

    #[test]
    fn plain_objects_are_nan() {
        let mut agent = agent();
        let prototype = agent.current_realm().intrinsics().object_prototype();
        let object = OrdinaryObject::create_empty_object(&mut agent, Some(prototype.into()));
        // valueOf returns the object itself, toString yields "[object Object]".
        assert!(to_number(&mut agent, object.into()).unwrap().is_nan(&agent));
    }

    #[test]
    fn to_primitive_hook_errors_propagate() {
        let mut agent = agent();
        fn throwing(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
            Err(agent.throw_exception(ExceptionType::RangeError, "no"))
        }
        let function = create_builtin_function(
            &mut agent,
            Behaviour::Regular(throwing),
            BuiltinFunctionArgs::new(1, "[Symbol.toPrimitive]"),
        );
        let object = OrdinaryObject::create_empty_object(&mut agent, None);
        object.internal_define_own_property(
            &mut agent,
            WellKnownSymbolIndexes::ToPrimitive.into(),
            PropertyDescriptor::new_data_descriptor(function.into()),
        );
        let error = to_number(&mut agent, object.into()).unwrap_err();
        assert_eq!(error.to_string(&mut agent), "RangeError: no");
    }

    #[test]
    fn values_to_string() {
        let mut agent = agent();
        let half = Value::from_f64(&mut agent, 0.5);
        let cases = [
            (Value::Undefined, "undefined"),
            (Value::Null, "null"),
            (Value::Boolean(true), "true"),
            (Value::from(-3), "-3"),
            (half, "0.5"),
            (Value::neg_zero(), "0"),
        ];
        for (value, expected) in cases {
            let s = to_string(&mut agent, value).unwrap();
            assert_eq!(s.as_str(&agent), Some(expected));
        }
    }
}
