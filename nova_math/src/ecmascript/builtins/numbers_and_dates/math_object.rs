// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [21.3 The Math Object](https://tc39.es/ecma262/#sec-math-object)
//!
//! The generic path of every `Math` function: read the arguments from the
//! call, coerce them with ToNumber, compute with the [`platform`] layer and
//! box the result. Calls with fewer arguments than a function's declared
//! length return NaN without coercing anything; `max` and `min` are variadic
//! and return their identity element instead.

pub mod platform;

use core::f64::consts;

use crate::{
    ecmascript::{
        abstract_operations::type_conversion::to_number,
        builders::ordinary_object_builder::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin},
        execution::{Agent, JsResult, RealmIdentifier},
        types::{Object, OrdinaryObject, PropertyKey, Value},
    },
    engine::{kernel::KernelDescriptor, math_kernels},
    heap::WellKnownSymbolIndexes,
};

/// The namespace's numeric constants, installed read-only, non-enumerable
/// and non-configurable.
pub const MATH_CONSTANTS: [(&str, f64); 8] = [
    ("E", consts::E),
    ("LN10", consts::LN_10),
    ("LN2", consts::LN_2),
    ("LOG10E", consts::LOG10_E),
    ("LOG2E", consts::LOG2_E),
    ("PI", consts::PI),
    ("SQRT1_2", consts::FRAC_1_SQRT_2),
    ("SQRT2", consts::SQRT_2),
];

pub(crate) struct MathObject;

struct MathObjectAbs;
impl Builtin for MathObjectAbs {
    const NAME: &'static str = "abs";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::abs);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::ABS);
}

struct MathObjectAcos;
impl Builtin for MathObjectAcos {
    const NAME: &'static str = "acos";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::acos);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::ACOS);
}

struct MathObjectAsin;
impl Builtin for MathObjectAsin {
    const NAME: &'static str = "asin";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::asin);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::ASIN);
}

struct MathObjectAtan;
impl Builtin for MathObjectAtan {
    const NAME: &'static str = "atan";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::atan);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::ATAN);
}

struct MathObjectAtan2;
impl Builtin for MathObjectAtan2 {
    const NAME: &'static str = "atan2";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::atan2);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::ATAN2);
}

struct MathObjectCeil;
impl Builtin for MathObjectCeil {
    const NAME: &'static str = "ceil";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::ceil);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::CEIL);
}

struct MathObjectCos;
impl Builtin for MathObjectCos {
    const NAME: &'static str = "cos";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::cos);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::COS);
}

struct MathObjectExp;
impl Builtin for MathObjectExp {
    const NAME: &'static str = "exp";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::exp);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::EXP);
}

struct MathObjectFloor;
impl Builtin for MathObjectFloor {
    const NAME: &'static str = "floor";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::floor);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::FLOOR);
}

struct MathObjectLog;
impl Builtin for MathObjectLog {
    const NAME: &'static str = "log";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::log);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::LOG);
}

struct MathObjectMax;
impl Builtin for MathObjectMax {
    const NAME: &'static str = "max";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::max);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::MAX);
}

struct MathObjectMin;
impl Builtin for MathObjectMin {
    const NAME: &'static str = "min";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::min);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::MIN);
}

struct MathObjectPow;
impl Builtin for MathObjectPow {
    const NAME: &'static str = "pow";
    const LENGTH: u8 = 2;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::pow);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::POW);
}

struct MathObjectRandom;
impl Builtin for MathObjectRandom {
    const NAME: &'static str = "random";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::random);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::RANDOM);
}

struct MathObjectRound;
impl Builtin for MathObjectRound {
    const NAME: &'static str = "round";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::round);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::ROUND);
}

struct MathObjectSin;
impl Builtin for MathObjectSin {
    const NAME: &'static str = "sin";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::sin);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::SIN);
}

struct MathObjectSqrt;
impl Builtin for MathObjectSqrt {
    const NAME: &'static str = "sqrt";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::sqrt);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::SQRT);
}

struct MathObjectTan;
impl Builtin for MathObjectTan {
    const NAME: &'static str = "tan";
    const LENGTH: u8 = 1;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::tan);
    const KERNEL: Option<KernelDescriptor> = Some(math_kernels::TAN);
}

struct MathObjectToSource;
impl Builtin for MathObjectToSource {
    const NAME: &'static str = "toSource";
    const LENGTH: u8 = 0;
    const BEHAVIOUR: Behaviour = Behaviour::Regular(MathObject::to_source);
}

/// Coerces the first argument and applies `op`. A call without arguments is
/// NaN and coerces nothing.
#[inline]
fn unary(agent: &mut Agent, arguments: ArgumentsList, op: fn(f64) -> f64) -> JsResult<Value> {
    if arguments.is_empty() {
        return Ok(Value::nan());
    }
    // 1. Let n be ? ToNumber(x).
    let n = to_number(agent, arguments.get(0))?.into_f64(agent);
    Ok(Value::from_f64(agent, op(n)))
}

/// Coerces the first two arguments in order and applies `op`. A call with
/// fewer than two arguments is NaN and coerces nothing.
#[inline]
fn binary(agent: &mut Agent, arguments: ArgumentsList, op: fn(f64, f64) -> f64) -> JsResult<Value> {
    if arguments.len() < 2 {
        return Ok(Value::nan());
    }
    let a = to_number(agent, arguments.get(0))?.into_f64(agent);
    let b = to_number(agent, arguments.get(1))?.into_f64(agent);
    Ok(Value::from_f64(agent, op(a, b)))
}

/// Shared body of `max` and `min`: arguments are coerced in order and the
/// first NaN ends the call, leaving the remaining arguments untouched.
fn fold(
    agent: &mut Agent,
    arguments: ArgumentsList,
    identity: f64,
    op: fn(f64, f64) -> f64,
) -> JsResult<Value> {
    let mut result = identity;
    for &arg in arguments.iter() {
        let n = to_number(agent, arg)?.into_f64(agent);
        if n.is_nan() {
            return Ok(Value::nan());
        }
        result = op(result, n);
    }
    Ok(Value::from_f64(agent, result))
}

impl MathObject {
    /// ### [21.3.2.1 Math.abs ( x )](https://tc39.es/ecma262/#sec-math.abs)
    fn abs(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::abs)
    }

    /// ### [21.3.2.2 Math.acos ( x )](https://tc39.es/ecma262/#sec-math.acos)
    fn acos(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::acos)
    }

    /// ### [21.3.2.4 Math.asin ( x )](https://tc39.es/ecma262/#sec-math.asin)
    fn asin(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::asin)
    }

    /// ### [21.3.2.6 Math.atan ( x )](https://tc39.es/ecma262/#sec-math.atan)
    fn atan(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::atan)
    }

    /// ### [21.3.2.8 Math.atan2 ( y, x )](https://tc39.es/ecma262/#sec-math.atan2)
    fn atan2(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Let ny be ? ToNumber(y).
        // 2. Let nx be ? ToNumber(x).
        binary(agent, arguments, platform::atan2)
    }

    /// ### [21.3.2.10 Math.ceil ( x )](https://tc39.es/ecma262/#sec-math.ceil)
    fn ceil(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::ceil)
    }

    /// ### [21.3.2.12 Math.cos ( x )](https://tc39.es/ecma262/#sec-math.cos)
    fn cos(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::cos)
    }

    /// ### [21.3.2.14 Math.exp ( x )](https://tc39.es/ecma262/#sec-math.exp)
    fn exp(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::exp)
    }

    /// ### [21.3.2.16 Math.floor ( x )](https://tc39.es/ecma262/#sec-math.floor)
    fn floor(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::floor)
    }

    /// ### [21.3.2.20 Math.log ( x )](https://tc39.es/ecma262/#sec-math.log)
    fn log(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::log)
    }

    /// ### [21.3.2.24 Math.max ( ...args )](https://tc39.es/ecma262/#sec-math.max)
    fn max(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 3. Let highest be -∞𝔽.
        fold(agent, arguments, f64::NEG_INFINITY, platform::max)
    }

    /// ### [21.3.2.25 Math.min ( ...args )](https://tc39.es/ecma262/#sec-math.min)
    fn min(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 3. Let lowest be +∞𝔽.
        fold(agent, arguments, f64::INFINITY, platform::min)
    }

    /// ### [21.3.2.26 Math.pow ( base, exponent )](https://tc39.es/ecma262/#sec-math.pow)
    fn pow(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        // 1. Set base to ? ToNumber(base).
        // 2. Set exponent to ? ToNumber(exponent).
        binary(agent, arguments, platform::pow)
    }

    /// ### [21.3.2.27 Math.random ( )](https://tc39.es/ecma262/#sec-math.random)
    ///
    /// Draws from the calling agent's generator; arguments are ignored.
    fn random(agent: &mut Agent, _this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        let n = math_kernels::random(agent);
        Ok(Value::from_f64(agent, n))
    }

    /// ### [21.3.2.28 Math.round ( x )](https://tc39.es/ecma262/#sec-math.round)
    fn round(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::round)
    }

    /// ### [21.3.2.30 Math.sin ( x )](https://tc39.es/ecma262/#sec-math.sin)
    fn sin(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::sin)
    }

    /// ### [21.3.2.32 Math.sqrt ( x )](https://tc39.es/ecma262/#sec-math.sqrt)
    fn sqrt(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::sqrt)
    }

    /// ### [21.3.2.33 Math.tan ( x )](https://tc39.es/ecma262/#sec-math.tan)
    fn tan(agent: &mut Agent, _this_value: Value, arguments: ArgumentsList) -> JsResult<Value> {
        unary(agent, arguments, platform::tan)
    }

    /// `Math.toSource()` is the source text that evaluates to the namespace.
    fn to_source(agent: &mut Agent, _this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        Ok(Value::from_str(agent, "Math"))
    }

    /// Creates the `%Math%` object. A property definition failure aborts
    /// construction and is returned to the caller.
    pub(crate) fn create_intrinsic(
        agent: &mut Agent,
        realm: RealmIdentifier,
    ) -> JsResult<OrdinaryObject> {
        let object_prototype = agent[realm].intrinsics().object_prototype();

        let mut builder = OrdinaryObjectBuilder::new(agent, realm)
            .with_prototype(Object::Object(object_prototype))
            .with_property_capacity(28);
        for (name, value) in MATH_CONSTANTS {
            builder = builder.with_property(|builder| {
                builder
                    .with_key_from_str(name)
                    .with_value_creator_readonly(|agent| Value::from_f64(agent, value))
                    .with_enumerable(false)
                    .with_configurable(false)
                    .build()
            });
        }
        let math = builder
            .with_builtin_function_property::<MathObjectAbs>()
            .with_builtin_function_property::<MathObjectAcos>()
            .with_builtin_function_property::<MathObjectAsin>()
            .with_builtin_function_property::<MathObjectAtan>()
            .with_builtin_function_property::<MathObjectAtan2>()
            .with_builtin_function_property::<MathObjectCeil>()
            .with_builtin_function_property::<MathObjectCos>()
            .with_builtin_function_property::<MathObjectExp>()
            .with_builtin_function_property::<MathObjectFloor>()
            .with_builtin_function_property::<MathObjectLog>()
            .with_builtin_function_property::<MathObjectMax>()
            .with_builtin_function_property::<MathObjectMin>()
            .with_builtin_function_property::<MathObjectPow>()
            .with_builtin_function_property::<MathObjectRandom>()
            .with_builtin_function_property::<MathObjectRound>()
            .with_builtin_function_property::<MathObjectSin>()
            .with_builtin_function_property::<MathObjectSqrt>()
            .with_builtin_function_property::<MathObjectTan>()
            .with_builtin_function_property::<MathObjectToSource>()
            .with_property(|builder| {
                builder
                    .with_key(PropertyKey::from(WellKnownSymbolIndexes::ToStringTag))
                    .with_value_creator_readonly(|agent| Value::from_str(agent, "Math"))
                    .with_enumerable(false)
                    .with_configurable(true)
                    .build()
            })
            .build()?;

        tracing::debug!(
            agent = agent.id(),
            properties = math.internal_own_property_keys(agent).len(),
            "installed Math namespace"
        );
        Ok(math)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call_function, get},
        builtins::{BuiltinFunctionArgs, create_builtin_function},
        execution::{DefaultHostHooks, ExceptionType, Options, initialize_default_realm},
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

    fn call(agent: &mut Agent, name: &str, arguments: &[Value]) -> JsResult<Value> {
        let math = agent.current_realm().intrinsics().math().unwrap();
        let key = PropertyKey::from_str(agent, name);
        let function = get(agent, math.into(), key)?;
        call_function(agent, function, math.into(), Some(arguments))
    }

    fn call_f64(agent: &mut Agent, name: &str, arguments: &[f64]) -> f64 {
        let arguments: Vec<Value> = arguments
            .iter()
            .map(|&n| Value::from_f64(agent, n))
            .collect();
        let result = call(agent, name, &arguments).unwrap();
        result.as_f64(agent).unwrap()
    }

    fn thrower(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        Err(agent.throw_exception(ExceptionType::Error, "valueOf threw"))
    }

    fn counting_value_of(agent: &mut Agent, _: Value, _: ArgumentsList) -> JsResult<Value> {
        let global = agent.current_realm().global_object();
        let key = PropertyKey::from_str(agent, "count");
        let count = global.internal_get(agent, key).as_f64(agent).unwrap_or(0.0);
        let next = Value::from_f64(agent, count + 1.0);
        global.internal_set(agent, key, next);
        Ok(Value::nan())
    }

    fn object_with_value_of(agent: &mut Agent, value_of: crate::ecmascript::builtins::RegularFn) -> Value {
        let function = create_builtin_function(
            agent,
            Behaviour::Regular(value_of),
            BuiltinFunctionArgs::new(0, "valueOf"),
        );
        let object = OrdinaryObject::create_empty_object(agent, None);
        let key = PropertyKey::from_str(agent, "valueOf");
        object.internal_set(agent, key, function.into());
        object.into()
    }

    #[test]
    fn unary_functions_without_arguments_are_nan() {
        let mut agent = agent();
        for name in [
            "abs", "acos", "asin", "atan", "ceil", "cos", "exp", "floor", "log", "round", "sin",
            "sqrt", "tan",
        ] {
            let result = call(&mut agent, name, &[]).unwrap();
            assert!(result.as_f64(&agent).unwrap().is_nan(), "{name}");
        }
    }

    #[test]
    fn binary_functions_with_one_argument_are_nan_without_coercion() {
        let mut agent = agent();
        let object = object_with_value_of(&mut agent, thrower);
        for name in ["atan2", "pow"] {
            let result = call(&mut agent, name, &[object]).unwrap();
            assert!(result.as_f64(&agent).unwrap().is_nan(), "{name}");
        }
    }

    #[test]
    fn max_and_min_identities() {
        let mut agent = agent();
        assert_eq!(call_f64(&mut agent, "max", &[]), f64::NEG_INFINITY);
        assert_eq!(call_f64(&mut agent, "min", &[]), f64::INFINITY);
        assert_eq!(call_f64(&mut agent, "max", &[1.0, 3.0, 2.0]), 3.0);
        assert_eq!(call_f64(&mut agent, "min", &[1.0, -3.0, 2.0]), -3.0);
        assert!(call_f64(&mut agent, "max", &[0.0, -0.0]).is_sign_positive());
        assert!(call_f64(&mut agent, "min", &[0.0, -0.0]).is_sign_negative());
        assert!(call_f64(&mut agent, "max", &[1.0, f64::NAN, 2.0]).is_nan());
    }

    #[test]
    fn max_stops_coercing_at_the_first_nan() {
        let mut agent = agent();
        let counted = object_with_value_of(&mut agent, counting_value_of);
        let result = call(&mut agent, "max", &[Value::from(1), counted, counted]).unwrap();
        assert!(result.as_f64(&agent).unwrap().is_nan());
        let global = agent.current_realm().global_object();
        let key = PropertyKey::from_str(&mut agent, "count");
        assert_eq!(global.internal_get(&agent, key), Value::from(1));
    }

    #[test]
    fn min_ignores_throwing_hooks_after_a_nan() {
        let mut agent = agent();
        let throwing = object_with_value_of(&mut agent, thrower);
        for name in ["max", "min"] {
            let result = call(&mut agent, name, &[Value::nan(), throwing]).unwrap();
            assert!(result.as_f64(&agent).unwrap().is_nan(), "{name}");
        }
    }

    #[test]
    fn coercion_failures_propagate() {
        let mut agent = agent();
        let object = object_with_value_of(&mut agent, thrower);
        for name in ["abs", "max", "pow"] {
            let arguments = [object, Value::from(1)];
            let error = call(&mut agent, name, &arguments).unwrap_err();
            assert_eq!(error.to_string(&mut agent), "Error: valueOf threw");
        }
    }

    #[test]
    fn arguments_are_coerced_with_to_number() {
        let mut agent = agent();
        let four = Value::from_str(&mut agent, " 4 ");
        let result = call(&mut agent, "sqrt", &[four]).unwrap();
        assert_eq!(result, Value::from(2));
        let result = call(&mut agent, "abs", &[Value::Null]).unwrap();
        assert_eq!(result, Value::from(0));
        let result = call(&mut agent, "pow", &[Value::Boolean(true), Value::from(5)]).unwrap();
        assert_eq!(result, Value::from(1));
    }

    #[test]
    fn random_follows_the_seeded_sequence() {
        let mut agent = agent();
        assert_eq!(call_f64(&mut agent, "random", &[]), 0.730967787376657);
        assert_eq!(call_f64(&mut agent, "random", &[42.0]), 0.24053641567148587);
    }

    #[test]
    fn to_source_names_the_namespace() {
        let mut agent = agent();
        let result = call(&mut agent, "toSource", &[]).unwrap();
        assert_eq!(result.string_repr(&mut agent), "Math");
    }

    #[test]
    fn functions_carry_their_kernels() {
        let mut agent = agent();
        let math = agent.current_realm().intrinsics().math().unwrap();
        for descriptor in math_kernels::math_kernel_descriptors() {
            let key = PropertyKey::from_str(&mut agent, descriptor.name);
            let function = math.internal_get(&agent, key);
            let kernel = agent.builtin_kernel(function).unwrap();
            assert_eq!(kernel.name, descriptor.name);
            assert_eq!(kernel.signature(), descriptor.signature());
        }
        let key = PropertyKey::from_str(&mut agent, "toSource");
        let to_source = math.internal_get(&agent, key);
        assert!(agent.builtin_kernel(to_source).is_none());
    }
}
