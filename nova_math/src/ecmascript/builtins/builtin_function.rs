// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::{Deref, Index, IndexMut};

use crate::{
    ecmascript::{
        execution::{Agent, JsResult, RealmIdentifier},
        types::{
            IntoValue, Object, ObjectHeapData, OrdinaryObject, PropertyDescriptor, PropertyKey,
            String, Value,
        },
    },
    engine::kernel::KernelDescriptor,
    heap::{CreateHeapData, indexes::BuiltinFunctionIndex},
};

/// The arguments of a call. Reading past the end yields `undefined`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgumentsList<'a>(pub(crate) &'a [Value]);

impl<'a> ArgumentsList<'a> {
    pub fn new(arguments: &'a [Value]) -> Self {
        Self(arguments)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Value {
        *self.0.get(index).unwrap_or(&Value::Undefined)
    }
}

impl<'a> Deref for ArgumentsList<'a> {
    type Target = &'a [Value];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub type RegularFn = fn(&mut Agent, Value, ArgumentsList<'_>) -> JsResult<Value>;

#[derive(Debug, Clone, Copy)]
pub enum Behaviour {
    Regular(RegularFn),
}

pub trait Builtin {
    const NAME: &'static str;
    const LENGTH: u8;
    const BEHAVIOUR: Behaviour;

    /// The compiled fast path equivalent to this builtin, if there is one.
    const KERNEL: Option<KernelDescriptor> = None;

    /// If the builtin function is created as a property then this controls the
    /// property's `[[Writable]]` value.
    const WRITABLE: bool = true;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Enumerable]]` value.
    const ENUMERABLE: bool = false;
    /// If the builtin function is created as a property then this controls the
    /// property's `[[Configurable]]` value.
    const CONFIGURABLE: bool = true;
}

#[derive(Debug, Default)]
pub struct BuiltinFunctionArgs {
    pub length: u32,
    pub name: &'static str,
    pub realm: Option<RealmIdentifier>,
    pub prototype: Option<Object>,
    pub kernel: Option<KernelDescriptor>,
}

impl BuiltinFunctionArgs {
    pub fn new(length: u32, name: &'static str) -> Self {
        Self {
            length,
            name,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuiltinFunctionHeapData {
    pub(crate) behaviour: Behaviour,
    pub(crate) initial_name: String,
    pub(crate) length: u8,
    /// \[\[Realm]]
    pub(crate) realm: RealmIdentifier,
    pub(crate) kernel: Option<KernelDescriptor>,
    /// Holds `length`, `name` and any other own properties.
    pub(crate) backing_object: OrdinaryObject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuiltinFunction(pub(crate) BuiltinFunctionIndex);

impl BuiltinFunction {
    pub fn name(self, agent: &Agent) -> String {
        agent[self].initial_name
    }

    pub fn length(self, agent: &Agent) -> u8 {
        agent[self].length
    }

    pub fn kernel(self, agent: &Agent) -> Option<KernelDescriptor> {
        agent[self].kernel
    }
}

impl Index<BuiltinFunction> for Agent {
    type Output = BuiltinFunctionHeapData;

    fn index(&self, index: BuiltinFunction) -> &Self::Output {
        self.heap
            .builtin_functions
            .get(index.0.into_index())
            .expect("BuiltinFunction out of bounds")
    }
}

impl IndexMut<BuiltinFunction> for Agent {
    fn index_mut(&mut self, index: BuiltinFunction) -> &mut Self::Output {
        self.heap
            .builtin_functions
            .get_mut(index.0.into_index())
            .expect("BuiltinFunction out of bounds")
    }
}

impl IntoValue for BuiltinFunction {
    fn into_value(self) -> Value {
        self.into()
    }
}

impl From<BuiltinFunction> for Value {
    fn from(value: BuiltinFunction) -> Self {
        Value::BuiltinFunction(value)
    }
}

impl From<BuiltinFunction> for Object {
    fn from(value: BuiltinFunction) -> Self {
        Object::BuiltinFunction(value)
    }
}

/// ### [10.3.1 \[\[Call\]\] ( thisArgument, argumentsList )](https://tc39.es/ecma262/#sec-built-in-function-objects-call-thisargument-argumentslist)
///
/// Runs the function's behaviour with its own realm as the current realm,
/// restoring the caller's realm afterwards whether or not the call threw.
pub(crate) fn builtin_call(
    agent: &mut Agent,
    f: BuiltinFunction,
    this_argument: Value,
    arguments_list: ArgumentsList,
) -> JsResult<Value> {
    // 1. Let callerContext be the running execution context.
    let caller_realm = agent.current_realm;
    let heap_data = &agent[f];
    // 5. Let calleeRealm be F.[[Realm]].
    let callee_realm = heap_data.realm;
    let Behaviour::Regular(func) = heap_data.behaviour;
    // 6. Set the Realm of calleeContext to calleeRealm.
    agent.current_realm = Some(callee_realm);
    // 10. Let result be the Completion Record that is the result of evaluating F.
    let result = func(agent, this_argument, arguments_list);
    // 12. Remove calleeContext from the execution context stack and restore
    //     callerContext as the running execution context.
    agent.current_realm = caller_realm;
    // 13. Return ? result.
    result
}

/// ### [10.3.4 CreateBuiltinFunction ( behaviour, length, name, additionalInternalSlotsList \[ , realm \[ , prototype \[ , prefix \] \] \] )](https://tc39.es/ecma262/#sec-createbuiltinfunction)
///
/// The abstract operation CreateBuiltinFunction takes arguments behaviour (an
/// Abstract Closure, a set of algorithm steps, or some other definition of a
/// function's behaviour provided in this specification), length (a
/// non-negative integer or +∞), name (a property key or a Private Name), and
/// additionalInternalSlotsList (a List of names of internal slots) and
/// optional arguments realm (a Realm Record), prototype (an Object or null),
/// and prefix (a String) and returns a function object.
///
/// Without a %Function.prototype% the default prototype is the realm's
/// %Object.prototype%.
pub fn create_builtin_function(
    agent: &mut Agent,
    behaviour: Behaviour,
    args: BuiltinFunctionArgs,
) -> BuiltinFunction {
    // 1. If realm is not present, set realm to the current Realm Record.
    let realm = args.realm.unwrap_or_else(|| agent.current_realm_id());
    // 2. If prototype is not present, set prototype to realm.[[Intrinsics]].[[%Function.prototype%]].
    let prototype = args
        .prototype
        .unwrap_or_else(|| Object::Object(agent[realm].intrinsics.object_prototype));
    // 11. Perform SetFunctionName(func, name).
    let initial_name = String::from_str(agent, args.name);

    // 5. Let func be a new built-in function object.
    // 6. Set func.[[Prototype]] to prototype.
    // 7. Set func.[[Extensible]] to true.
    let mut backing_object = ObjectHeapData::new(Some(prototype), 2);
    let length_key = PropertyKey::from_str(agent, "length");
    let name_key = PropertyKey::from_str(agent, "name");
    let length = u8::try_from(args.length).unwrap_or(u8::MAX);
    for (key, value) in [
        (length_key, Value::from(u32::from(length))),
        (name_key, initial_name.into_value()),
    ] {
        backing_object.properties.push((
            key,
            PropertyDescriptor {
                value: Some(value),
                writable: Some(false),
                enumerable: Some(false),
                configurable: Some(true),
            },
        ));
        backing_object
            .lookup
            .insert(key, backing_object.properties.len() - 1);
    }
    let backing_object = agent.heap.create(backing_object);

    // 13. Return func.
    agent.heap.create(BuiltinFunctionHeapData {
        behaviour,
        initial_name,
        // 10. Perform SetFunctionLength(func, length).
        length,
        // 8. Set func.[[Realm]] to realm.
        realm,
        kernel: args.kernel,
        backing_object,
    })
}
