// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use nova_math::{
    ecmascript::{
        abstract_operations::operations_on_objects::call_function,
        builtins::{
            ArgumentsList, Behaviour, BuiltinFunctionArgs,
            create_builtin_function, numbers_and_dates::math_object::MATH_CONSTANTS,
        },
        execution::{
            Agent, DefaultHostHooks, ExceptionType, JsResult, Options, initialize_default_realm,
        },
        types::{OrdinaryObject, PropertyDescriptor, PropertyKey, Symbol, Value},
    },
    engine::math_kernels::math_kernel_descriptors,
};

fn agent() -> Agent {
    let mut agent = Agent::new(
        Options {
            random_seed: Some(0),
        },
        &DefaultHostHooks,
    );
    initialize_default_realm(&mut agent).unwrap();
    agent
}

fn math(agent: &Agent) -> OrdinaryObject {
    agent.current_realm().intrinsics().math().unwrap()
}

fn own_property(agent: &mut Agent, object: OrdinaryObject, name: &str) -> PropertyDescriptor {
    let key = PropertyKey::from_str(agent, name);
    object
        .internal_get_own_property(agent, key)
        .unwrap_or_else(|| panic!("missing property {name}"))
}

fn call(agent: &mut Agent, name: &str, arguments: &[Value]) -> JsResult<Value> {
    let math = math(agent);
    let key = PropertyKey::from_str(agent, name);
    let function = math.internal_get(agent, key);
    call_function(agent, function, math.into(), Some(arguments))
}

fn throwing_value_of(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
    Err(agent.throw_exception(ExceptionType::RangeError, "no number here"))
}

#[test]
fn math_is_bound_on_the_global_object() {
    let mut agent = agent();
    let global = agent.current_realm().global_object();
    let descriptor = own_property(&mut agent, global, "Math");
    assert_eq!(descriptor.value, Some(math(&agent).into()));
    assert_eq!(descriptor.writable, Some(true));
    assert_eq!(descriptor.enumerable, Some(false));
    assert_eq!(descriptor.configurable, Some(true));
    let object_prototype = agent.current_realm().intrinsics().object_prototype();
    assert_eq!(
        math(&agent).internal_prototype(&agent),
        Some(object_prototype.into())
    );
}

#[test]
fn constants_are_permanent_and_exact() {
    let mut agent = agent();
    let math = math(&agent);
    for (name, expected) in MATH_CONSTANTS {
        let descriptor = own_property(&mut agent, math, name);
        let value = descriptor.value.unwrap().as_f64(&agent).unwrap();
        assert_eq!(value.to_bits(), expected.to_bits(), "{name}");
        assert_eq!(descriptor.writable, Some(false), "{name}");
        assert_eq!(descriptor.enumerable, Some(false), "{name}");
        assert_eq!(descriptor.configurable, Some(false), "{name}");
    }
    let pi = own_property(&mut agent, math, "PI").value.unwrap();
    assert_eq!(pi.as_f64(&agent), Some(core::f64::consts::PI));
    let key = PropertyKey::from_str(&mut agent, "PI");
    let three = Value::from(3);
    assert!(!math.internal_set(&mut agent, key, three));
}

#[test]
fn functions_have_names_lengths_and_attributes() {
    let mut agent = agent();
    let math = math(&agent);
    for descriptor in math_kernel_descriptors() {
        let property = own_property(&mut agent, math, descriptor.name);
        assert_eq!(property.writable, Some(true));
        assert_eq!(property.enumerable, Some(false));
        assert_eq!(property.configurable, Some(true));
        let Some(Value::BuiltinFunction(function)) = property.value else {
            panic!("{} is not a builtin function", descriptor.name);
        };
        assert_eq!(
            function.name(&agent).to_string_lossy(&agent),
            descriptor.name
        );
        let expected_length = match descriptor.name {
            "random" => 0,
            "atan2" | "max" | "min" | "pow" => 2,
            _ => 1,
        };
        assert_eq!(function.length(&agent), expected_length, "{}", descriptor.name);
    }
}

#[test]
fn namespace_reports_its_tag_and_source() {
    let mut agent = agent();
    let math = math(&agent);
    let object_prototype = agent.current_realm().intrinsics().object_prototype();
    let to_string_key = PropertyKey::from_str(&mut agent, "toString");
    let to_string = object_prototype.internal_get(&agent, to_string_key);
    let tag = call_function(&mut agent, to_string, math.into(), None).unwrap();
    assert_eq!(tag.string_repr(&mut agent), "[object Math]");

    let source = call(&mut agent, "toSource", &[]).unwrap();
    assert_eq!(source.string_repr(&mut agent), "Math");
}

#[test]
fn coercion_failures_reach_the_caller_unchanged() {
    let mut agent = agent();
    let value_of = create_builtin_function(
        &mut agent,
        Behaviour::Regular(throwing_value_of),
        BuiltinFunctionArgs::new(0, "valueOf"),
    );
    let object = OrdinaryObject::create_empty_object(&mut agent, None);
    let key = PropertyKey::from_str(&mut agent, "valueOf");
    object.internal_set(&mut agent, key, value_of.into());

    let error = call(&mut agent, "floor", &[object.into()]).unwrap_err();
    assert_eq!(error.to_string(&mut agent), "RangeError: no number here");

    let error = call(&mut agent, "atan2", &[Value::from(1), object.into()]).unwrap_err();
    assert_eq!(error.to_string(&mut agent), "RangeError: no number here");
}

#[test]
fn symbols_do_not_convert_to_numbers() {
    let mut agent = agent();
    let symbol = Symbol::new(&mut agent, Some("x"));
    let error = call(&mut agent, "sqrt", &[symbol.into()]).unwrap_err();
    assert_eq!(
        error.to_string(&mut agent),
        "TypeError: Cannot convert a Symbol value to a number"
    );
}

#[test]
fn strings_are_parsed_as_numeric_literals() {
    let mut agent = agent();
    for (text, expected) in [
        ("  0x10  ", 16.0),
        ("0b101", 5.0),
        ("-Infinity", f64::NEG_INFINITY),
        ("", 0.0),
        ("1e3", 1000.0),
    ] {
        let argument = Value::from_str(&mut agent, text);
        let result = call(&mut agent, "abs", &[argument]).unwrap();
        assert_eq!(result.as_f64(&agent), Some(expected.abs()), "{text:?}");
    }
    let argument = Value::from_str(&mut agent, "12px");
    let result = call(&mut agent, "abs", &[argument]).unwrap();
    assert!(result.as_f64(&agent).unwrap().is_nan());
}

#[test]
fn extra_arguments_are_ignored() {
    let mut agent = agent();
    let result = call(&mut agent, "sqrt", &[Value::from(9), Value::Null]).unwrap();
    assert_eq!(result, Value::from(3));
    let result = call(
        &mut agent,
        "pow",
        &[Value::from(2), Value::from(10), Value::Undefined],
    )
    .unwrap();
    assert_eq!(result, Value::from(1024));
}
