// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [7.3 Operations on Objects](https://tc39.es/ecma262/#sec-operations-on-objects)

use super::testing_and_comparison::is_callable;
use crate::ecmascript::{
    builtins::{ArgumentsList, builtin_call},
    execution::{Agent, ExceptionType, JsResult},
    types::{Object, PropertyDescriptor, PropertyKey, Value},
};

/// ### [7.3.2 Get ( O, P )](https://tc39.es/ecma262/#sec-get-o-p)
///
/// The abstract operation Get takes arguments O (an Object) and P (a property
/// key) and returns either a normal completion containing an ECMAScript
/// language value or a throw completion. It is used to retrieve the value of a
/// specific property of an object.
pub(crate) fn get(agent: &mut Agent, o: Object, p: PropertyKey) -> JsResult<Value> {
    // 1. Return ? O.[[Get]](P, O).
    Ok(o.internal_get(agent, p))
}

/// ### [7.3.3 GetV ( V, P )](https://tc39.es/ecma262/#sec-getv)
///
/// Primitives have no wrapper prototypes here, so their properties read as
/// undefined.
pub(crate) fn get_v(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Value> {
    match Object::try_from(v) {
        Ok(o) => get(agent, o, p),
        Err(()) => Ok(Value::Undefined),
    }
}

/// ### [7.3.8 DefinePropertyOrThrow ( O, P, desc )](https://tc39.es/ecma262/#sec-definepropertyorthrow)
///
/// The abstract operation DefinePropertyOrThrow takes arguments O (an Object),
/// P (a property key), and desc (a Property Descriptor) and returns either a
/// normal completion containing UNUSED or a throw completion. It is used to
/// call the \[\[DefineOwnProperty\]\] internal method of an object in a manner
/// that will throw a TypeError exception if the requested property update
/// cannot be performed.
pub fn define_property_or_throw(
    agent: &mut Agent,
    o: Object,
    p: PropertyKey,
    desc: PropertyDescriptor,
) -> JsResult<()> {
    // 1. Let success be ? O.[[DefineOwnProperty]](P, desc).
    let success = o.internal_define_own_property(agent, p, desc);
    // 2. If success is false, throw a TypeError exception.
    if !success {
        let message = format!("Cannot define property '{}'", p.as_display(agent));
        return Err(agent.throw_exception(ExceptionType::TypeError, &message));
    }
    // 3. Return UNUSED.
    Ok(())
}

/// ### [7.3.11 GetMethod ( V, P )](https://tc39.es/ecma262/#sec-getmethod)
///
/// The abstract operation GetMethod takes arguments V (an ECMAScript language
/// value) and P (a property key) and returns either a normal completion
/// containing either a function object or undefined, or a throw completion. It
/// is used to retrieve the value of a specific property of an ECMAScript
/// language value when the value of the property is expected to be a
/// function.
pub(crate) fn get_method(agent: &mut Agent, v: Value, p: PropertyKey) -> JsResult<Option<Value>> {
    // 1. Let func be ? GetV(V, P).
    let func = get_v(agent, v, p)?;
    // 2. If func is either undefined or null, return undefined.
    if matches!(func, Value::Undefined | Value::Null) {
        return Ok(None);
    }
    // 3. If IsCallable(func) is false, throw a TypeError exception.
    if !is_callable(func) {
        let message = format!("{} is not a function", p.as_display(agent));
        return Err(agent.throw_exception(ExceptionType::TypeError, &message));
    }
    // 4. Return func.
    Ok(Some(func))
}

/// ### [7.3.14 Call ( F, V \[ , argumentsList \] )](https://tc39.es/ecma262/#sec-call)
///
/// The abstract operation Call takes arguments F (an ECMAScript language
/// value) and V (an ECMAScript language value) and optional argument
/// argumentsList (a List of ECMAScript language values) and returns either a
/// normal completion containing an ECMAScript language value or a throw
/// completion. It is used to call the \[\[Call\]\] internal method of a
/// function object.
pub fn call_function(
    agent: &mut Agent,
    f: Value,
    v: Value,
    arguments_list: Option<&[Value]>,
) -> JsResult<Value> {
    // 1. If argumentsList is not present, set argumentsList to a new empty List.
    let arguments_list = ArgumentsList(arguments_list.unwrap_or(&[]));
    // 2. If IsCallable(F) is false, throw a TypeError exception.
    let Value::BuiltinFunction(f) = f else {
        let message = format!("{} is not a function", f.string_repr(agent));
        return Err(agent.throw_exception(ExceptionType::TypeError, &message));
    };
    // 3. Return ? F.[[Call]](V, argumentsList).
    builtin_call(agent, f, v, arguments_list)
}
