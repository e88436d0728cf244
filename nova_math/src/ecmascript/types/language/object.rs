// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
//!
//! Only the parts of the ordinary object internal methods that the numeric
//! intrinsics and their installer need: data properties, prototype chain
//! lookups and extensibility. Builtin function objects delegate all
//! "ordinary object business" to a backing ordinary object.

mod property_descriptor;
mod property_key;

use core::ops::{Index, IndexMut};

use ahash::RandomState;
use hashbrown::HashMap;

pub use property_descriptor::PropertyDescriptor;
pub use property_key::PropertyKey;

use super::{IntoValue, Value};
use crate::{
    ecmascript::{
        abstract_operations::testing_and_comparison::same_value, builtins::BuiltinFunction,
        execution::Agent,
    },
    heap::{CreateHeapData, indexes::ObjectIndex},
};

#[derive(Debug, Clone)]
pub struct ObjectHeapData {
    pub(crate) extensible: bool,
    pub(crate) prototype: Option<Object>,
    /// Own properties in insertion order. Every stored descriptor is
    /// complete.
    pub(crate) properties: Vec<(PropertyKey, PropertyDescriptor)>,
    pub(crate) lookup: HashMap<PropertyKey, usize, RandomState>,
}

impl ObjectHeapData {
    pub(crate) fn new(prototype: Option<Object>, capacity: usize) -> Self {
        Self {
            extensible: true,
            prototype,
            properties: Vec::with_capacity(capacity),
            lookup: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    fn get(&self, key: PropertyKey) -> Option<&PropertyDescriptor> {
        self.lookup
            .get(&key)
            .map(|&index| &self.properties[index].1)
    }
}

/// ### [10.1 Ordinary Object Internal Methods and Internal Slots](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrdinaryObject(pub(crate) ObjectIndex);

impl Index<OrdinaryObject> for Agent {
    type Output = ObjectHeapData;

    fn index(&self, index: OrdinaryObject) -> &Self::Output {
        self.heap
            .objects
            .get(index.0.into_index())
            .expect("Object out of bounds")
    }
}

impl IndexMut<OrdinaryObject> for Agent {
    fn index_mut(&mut self, index: OrdinaryObject) -> &mut Self::Output {
        self.heap
            .objects
            .get_mut(index.0.into_index())
            .expect("Object out of bounds")
    }
}

impl OrdinaryObject {
    pub fn create_empty_object(agent: &mut Agent, prototype: Option<Object>) -> Self {
        agent.heap.create(ObjectHeapData::new(prototype, 0))
    }

    pub fn internal_prototype(self, agent: &Agent) -> Option<Object> {
        agent[self].prototype
    }

    pub fn internal_is_extensible(self, agent: &Agent) -> bool {
        agent[self].extensible
    }

    /// ### [10.1.4 \[\[PreventExtensions\]\] ( )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-preventextensions)
    pub fn internal_prevent_extensions(self, agent: &mut Agent) -> bool {
        agent[self].extensible = false;
        true
    }

    /// ### [10.1.5 \[\[GetOwnProperty\]\] ( P )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-getownproperty-p)
    pub fn internal_get_own_property(
        self,
        agent: &Agent,
        property_key: PropertyKey,
    ) -> Option<PropertyDescriptor> {
        agent[self].get(property_key).copied()
    }

    /// ### [10.1.6 \[\[DefineOwnProperty\]\] ( P, Desc )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-defineownproperty-p-desc)
    ///
    /// Implements ValidateAndApplyPropertyDescriptor for data properties.
    pub fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> bool {
        let data = &mut agent[self];
        let Some(&index) = data.lookup.get(&property_key) else {
            // 2. If current is undefined, then
            // a. If extensible is false, return false.
            if !data.extensible {
                return false;
            }
            // c. Create an own data property with absent fields defaulted.
            let complete = descriptor.complete();
            data.properties.push((property_key, complete));
            data.lookup.insert(property_key, data.properties.len() - 1);
            return true;
        };
        let current = data.properties[index].1;
        // 5. If current.[[Configurable]] is false, then
        if current.configurable == Some(false) {
            // a. If Desc has a [[Configurable]] field and Desc.[[Configurable]]
            //    is true, return false.
            if descriptor.configurable == Some(true) {
                return false;
            }
            // b. If Desc has an [[Enumerable]] field and it differs, return false.
            if descriptor
                .enumerable
                .is_some_and(|enumerable| Some(enumerable) != current.enumerable)
            {
                return false;
            }
            // e. If current.[[Writable]] is false, then
            if current.writable == Some(false) {
                // i. If Desc has a [[Writable]] field and it is true, return false.
                if descriptor.writable == Some(true) {
                    return false;
                }
                // ii. If Desc has a [[Value]] field and SameValue is false, return false.
                if let Some(value) = descriptor.value
                    && !same_value(agent, value, current.value.unwrap_or_default())
                {
                    return false;
                }
            }
        }
        // 6. Set the fields of current from Desc.
        let merged = current.merge(descriptor);
        agent[self].properties[index].1 = merged;
        true
    }

    /// ### [10.1.8 \[\[Get\]\] ( P, Receiver )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-get-p-receiver)
    pub fn internal_get(self, agent: &Agent, property_key: PropertyKey) -> Value {
        let mut object = Some(Object::Object(self));
        while let Some(current) = object {
            let backing = current.backing_object(agent);
            if let Some(descriptor) = agent[backing].get(property_key) {
                return descriptor.value.unwrap_or_default();
            }
            object = agent[backing].prototype;
        }
        Value::Undefined
    }

    /// ### [10.1.9 \[\[Set\]\] ( P, V, Receiver )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-set-p-v-receiver)
    pub fn internal_set(self, agent: &mut Agent, property_key: PropertyKey, value: Value) -> bool {
        if let Some(&index) = agent[self].lookup.get(&property_key) {
            let entry = &mut agent[self].properties[index].1;
            if entry.writable != Some(true) {
                return false;
            }
            entry.value = Some(value);
            return true;
        }
        // An inherited non-writable property shadows assignment.
        let mut object = agent[self].prototype;
        while let Some(current) = object {
            let backing = current.backing_object(agent);
            if let Some(descriptor) = agent[backing].get(property_key) {
                if descriptor.writable != Some(true) {
                    return false;
                }
                break;
            }
            object = agent[backing].prototype;
        }
        self.internal_define_own_property(
            agent,
            property_key,
            PropertyDescriptor::new_data_descriptor(value),
        )
    }

    /// ### [10.1.11 \[\[OwnPropertyKeys\]\] ( )](https://tc39.es/ecma262/#sec-ordinary-object-internal-methods-and-internal-slots-ownpropertykeys)
    pub fn internal_own_property_keys(self, agent: &Agent) -> Vec<PropertyKey> {
        agent[self].properties.iter().map(|(key, _)| *key).collect()
    }
}

impl IntoValue for OrdinaryObject {
    fn into_value(self) -> Value {
        Value::Object(self)
    }
}

impl From<OrdinaryObject> for Value {
    fn from(value: OrdinaryObject) -> Self {
        Value::Object(value)
    }
}

impl From<OrdinaryObject> for Object {
    fn from(value: OrdinaryObject) -> Self {
        Object::Object(value)
    }
}

/// Any object value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Object {
    Object(OrdinaryObject),
    BuiltinFunction(BuiltinFunction),
}

impl Object {
    /// The ordinary object holding this object's own properties.
    pub fn backing_object(self, agent: &Agent) -> OrdinaryObject {
        match self {
            Object::Object(o) => o,
            Object::BuiltinFunction(f) => agent[f].backing_object,
        }
    }

    pub fn internal_get_own_property(
        self,
        agent: &Agent,
        property_key: PropertyKey,
    ) -> Option<PropertyDescriptor> {
        self.backing_object(agent)
            .internal_get_own_property(agent, property_key)
    }

    pub fn internal_define_own_property(
        self,
        agent: &mut Agent,
        property_key: PropertyKey,
        descriptor: PropertyDescriptor,
    ) -> bool {
        self.backing_object(agent)
            .internal_define_own_property(agent, property_key, descriptor)
    }

    pub fn internal_get(self, agent: &Agent, property_key: PropertyKey) -> Value {
        self.backing_object(agent).internal_get(agent, property_key)
    }

    pub fn internal_set(self, agent: &mut Agent, property_key: PropertyKey, value: Value) -> bool {
        self.backing_object(agent)
            .internal_set(agent, property_key, value)
    }

    pub fn internal_prevent_extensions(self, agent: &mut Agent) -> bool {
        self.backing_object(agent).internal_prevent_extensions(agent)
    }

    pub fn internal_own_property_keys(self, agent: &Agent) -> Vec<PropertyKey> {
        self.backing_object(agent).internal_own_property_keys(agent)
    }
}

impl IntoValue for Object {
    fn into_value(self) -> Value {
        self.into()
    }
}

impl TryFrom<Value> for Object {
    type Error = ();
    fn try_from(value: Value) -> Result<Self, ()> {
        match value {
            Value::Object(o) => Ok(Object::Object(o)),
            Value::BuiltinFunction(f) => Ok(Object::BuiltinFunction(f)),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        execution::{Agent, DefaultHostHooks, Options},
        types::String,
    };

    fn key(agent: &mut Agent, name: &str) -> PropertyKey {
        PropertyKey::from(String::from_str(agent, name))
    }

    #[test]
    fn define_and_get_data_property() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let object = OrdinaryObject::create_empty_object(&mut agent, None);
        let k = key(&mut agent, "answer");
        assert!(object.internal_define_own_property(
            &mut agent,
            k,
            PropertyDescriptor::new_data_descriptor(Value::from(42))
        ));
        assert_eq!(object.internal_get(&agent, k), Value::from(42));
        let descriptor = object.internal_get_own_property(&agent, k).unwrap();
        assert_eq!(descriptor.writable, Some(true));
        assert_eq!(descriptor.enumerable, Some(true));
        assert_eq!(descriptor.configurable, Some(true));
    }

    #[test]
    fn frozen_property_rejects_redefinition() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let object = OrdinaryObject::create_empty_object(&mut agent, None);
        let k = key(&mut agent, "PI");
        let pi = Value::from_f64(&mut agent, core::f64::consts::PI);
        assert!(object.internal_define_own_property(
            &mut agent,
            k,
            PropertyDescriptor::new_frozen_descriptor(pi)
        ));
        let three = Value::from(3);
        assert!(!object.internal_define_own_property(
            &mut agent,
            k,
            PropertyDescriptor::new_data_descriptor(three)
        ));
        assert!(!object.internal_set(&mut agent, k, three));
        assert_eq!(object.internal_get(&agent, k), pi);
        // Redefining with the same value is allowed.
        assert!(object.internal_define_own_property(
            &mut agent,
            k,
            PropertyDescriptor {
                value: Some(pi),
                ..Default::default()
            }
        ));
    }

    #[test]
    fn non_extensible_object_rejects_new_properties() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let object = OrdinaryObject::create_empty_object(&mut agent, None);
        assert!(object.internal_prevent_extensions(&mut agent));
        let k = key(&mut agent, "x");
        assert!(!object.internal_define_own_property(
            &mut agent,
            k,
            PropertyDescriptor::new_data_descriptor(Value::Null)
        ));
        assert!(!object.internal_set(&mut agent, k, Value::Null));
    }

    #[test]
    fn get_walks_the_prototype_chain() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let proto = OrdinaryObject::create_empty_object(&mut agent, None);
        let child = OrdinaryObject::create_empty_object(&mut agent, Some(proto.into()));
        let k = key(&mut agent, "inherited");
        proto.internal_define_own_property(
            &mut agent,
            k,
            PropertyDescriptor::new_data_descriptor(Value::Boolean(true)),
        );
        assert_eq!(child.internal_get(&agent, k), Value::Boolean(true));
        assert!(child.internal_get_own_property(&agent, k).is_none());
        assert!(child.internal_set(&mut agent, k, Value::Boolean(false)));
        assert_eq!(child.internal_get(&agent, k), Value::Boolean(false));
        assert_eq!(proto.internal_get(&agent, k), Value::Boolean(true));
    }
}
