// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        abstract_operations::operations_on_objects::get,
        builders::ordinary_object_builder::OrdinaryObjectBuilder,
        builtins::{ArgumentsList, Behaviour, Builtin},
        execution::{Agent, JsResult, RealmIdentifier},
        types::{Object, Value},
    },
    heap::WellKnownSymbolIndexes,
};

pub(crate) struct ObjectPrototype;

struct ObjectPrototypeToString;
impl Builtin for ObjectPrototypeToString {
    const NAME: &'static str = "toString";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::to_string);
}

struct ObjectPrototypeValueOf;
impl Builtin for ObjectPrototypeValueOf {
    const NAME: &'static str = "valueOf";

    const LENGTH: u8 = 0;

    const BEHAVIOUR: Behaviour = Behaviour::Regular(ObjectPrototype::value_of);
}

impl ObjectPrototype {
    /// ### [20.1.3.6 Object.prototype.toString ( )](https://tc39.es/ecma262/#sec-object.prototype.tostring)
    fn to_string(agent: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        let builtin_tag = match this_value {
            // 1. If the this value is undefined, return "[object Undefined]".
            Value::Undefined => return Ok(Value::from_str(agent, "[object Undefined]")),
            // 2. If the this value is null, return "[object Null]".
            Value::Null => return Ok(Value::from_str(agent, "[object Null]")),
            // 9. Else if O has a [[BooleanData]] internal slot, let builtinTag be "Boolean".
            Value::Boolean(_) => "Boolean",
            // 10. Else if O has a [[NumberData]] internal slot, let builtinTag be "Number".
            Value::Number(_) | Value::Integer(_) => "Number",
            // 11. Else if O has a [[StringData]] internal slot, let builtinTag be "String".
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            // 7. Else if O has a [[Call]] internal method, let builtinTag be "Function".
            Value::BuiltinFunction(_) => "Function",
            // 14. Else, let builtinTag be "Object".
            Value::Object(_) => "Object",
        };
        // 15. Let tag be ? Get(O, @@toStringTag).
        let tag = match Object::try_from(this_value) {
            Ok(o) => get(agent, o, WellKnownSymbolIndexes::ToStringTag.into())?,
            Err(()) => Value::Undefined,
        };
        // 16. If tag is not a String, set tag to builtinTag.
        let text = match tag {
            Value::String(tag) => format!("[object {}]", tag.to_string_lossy(agent)),
            _ => format!("[object {builtin_tag}]"),
        };
        // 17. Return the string-concatenation of "[object ", tag, and "]".
        Ok(Value::from_str(agent, &text))
    }

    /// ### [20.1.3.7 Object.prototype.valueOf ( )](https://tc39.es/ecma262/#sec-object.prototype.valueof)
    fn value_of(_: &mut Agent, this_value: Value, _: ArgumentsList) -> JsResult<Value> {
        // 1. Return ? ToObject(this value).
        // Primitives have no wrapper objects here and are returned as is.
        Ok(this_value)
    }

    pub(crate) fn create_intrinsic(agent: &mut Agent, realm: RealmIdentifier) -> JsResult<()> {
        let this = agent[realm].intrinsics().object_prototype();

        OrdinaryObjectBuilder::new_intrinsic_object(agent, realm, this)
            .with_property_capacity(2)
            .with_builtin_function_property::<ObjectPrototypeToString>()
            .with_builtin_function_property::<ObjectPrototypeValueOf>()
            .build()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::ecmascript::{
        abstract_operations::operations_on_objects::{call_function, get},
        execution::{Agent, DefaultHostHooks, Options, initialize_default_realm},
        types::{OrdinaryObject, PropertyKey, Value},
    };

    fn to_string_of(agent: &mut Agent, value: Value) -> String {
        let prototype = agent.current_realm().intrinsics().object_prototype();
        let key = PropertyKey::from_str(agent, "toString");
        let to_string = get(agent, prototype.into(), key).unwrap();
        let result = call_function(agent, to_string, value, None).unwrap();
        result.string_repr(agent)
    }

    #[test]
    fn builtin_tags() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        initialize_default_realm(&mut agent).unwrap();
        assert_eq!(to_string_of(&mut agent, Value::Undefined), "[object Undefined]");
        assert_eq!(to_string_of(&mut agent, Value::Null), "[object Null]");
        assert_eq!(to_string_of(&mut agent, Value::from(1)), "[object Number]");
        let object = OrdinaryObject::create_empty_object(&mut agent, None);
        assert_eq!(to_string_of(&mut agent, object.into()), "[object Object]");
    }

    #[cfg(feature = "math")]
    #[test]
    fn math_reports_its_tag() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        initialize_default_realm(&mut agent).unwrap();
        let math = agent.current_realm().intrinsics().math().unwrap();
        assert_eq!(to_string_of(&mut agent, math.into()), "[object Math]");
    }
}
