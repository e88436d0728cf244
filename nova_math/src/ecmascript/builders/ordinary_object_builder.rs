// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{
    builtin_function_builder::BuiltinFunctionBuilder,
    property_builder::{self, PropertyBuilder},
};
use crate::ecmascript::{
    abstract_operations::operations_on_objects::define_property_or_throw,
    builtins::Builtin,
    execution::{Agent, JsResult, RealmIdentifier},
    types::{IntoValue, Object, OrdinaryObject, PropertyDescriptor, PropertyKey, Value},
};

#[derive(Default, Clone, Copy)]
pub struct NoPrototype;

#[derive(Clone, Copy)]
pub struct CreatorPrototype(Object);

/// Builds an ordinary object and its properties. Every property goes through
/// DefinePropertyOrThrow, so a conflicting definition fails the build
/// instead of being dropped.
pub struct OrdinaryObjectBuilder<'agent, P> {
    pub(crate) agent: &'agent mut Agent,
    this: Option<OrdinaryObject>,
    realm: RealmIdentifier,
    prototype: P,
    extensible: bool,
    properties: Vec<(PropertyKey, PropertyDescriptor)>,
}

impl<'agent> OrdinaryObjectBuilder<'agent, NoPrototype> {
    #[must_use]
    pub fn new(agent: &'agent mut Agent, realm: RealmIdentifier) -> Self {
        Self {
            agent,
            this: None,
            realm,
            prototype: NoPrototype,
            extensible: true,
            properties: Vec::new(),
        }
    }

    /// Populates an object that already exists, such as an intrinsic that was
    /// allocated when its realm was created. The object's prototype is left
    /// untouched unless one is given.
    #[must_use]
    pub(crate) fn new_intrinsic_object(
        agent: &'agent mut Agent,
        realm: RealmIdentifier,
        this: OrdinaryObject,
    ) -> Self {
        Self {
            agent,
            this: Some(this),
            realm,
            prototype: NoPrototype,
            extensible: true,
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_prototype(self, prototype: Object) -> OrdinaryObjectBuilder<'agent, CreatorPrototype> {
        OrdinaryObjectBuilder {
            agent: self.agent,
            this: self.this,
            realm: self.realm,
            prototype: CreatorPrototype(prototype),
            extensible: self.extensible,
            properties: self.properties,
        }
    }
}

impl<P> OrdinaryObjectBuilder<'_, P> {
    #[must_use]
    pub fn with_extensible(mut self, extensible: bool) -> Self {
        self.extensible = extensible;
        self
    }

    #[must_use]
    pub fn with_property_capacity(mut self, cap: usize) -> Self {
        self.properties.reserve_exact(cap);
        self
    }

    #[must_use]
    pub fn with_property(
        mut self,
        creator: impl FnOnce(
            PropertyBuilder<'_, property_builder::NoKey, property_builder::NoDefinition>,
        ) -> (PropertyKey, PropertyDescriptor),
    ) -> Self {
        let builder = PropertyBuilder::new(self.agent);
        let property = creator(builder);
        self.properties.push(property);
        self
    }

    #[must_use]
    pub fn with_builtin_function_property<T: Builtin>(mut self) -> Self {
        let (value, name) = {
            let builder = BuiltinFunctionBuilder::new::<T>(self.agent, self.realm);
            let name = builder.get_name();
            (builder.build().into_value(), name)
        };
        let key = PropertyKey::from_str(self.agent, name);
        let builder = PropertyBuilder::new(self.agent)
            .with_key(key)
            .with_configurable(T::CONFIGURABLE)
            .with_enumerable(T::ENUMERABLE);
        let property = if T::WRITABLE {
            builder.with_value(value).build()
        } else {
            builder.with_value_readonly(value).build()
        };
        self.properties.push(property);
        self
    }

    fn finish(self, prototype: Option<Object>) -> JsResult<OrdinaryObject> {
        let Self {
            agent,
            this,
            extensible,
            properties,
            ..
        } = self;
        let this = match this {
            Some(this) => {
                if prototype.is_some() {
                    agent[this].prototype = prototype;
                }
                this
            }
            None => OrdinaryObject::create_empty_object(agent, prototype),
        };
        for (key, descriptor) in properties {
            define_property_or_throw(agent, this.into(), key, descriptor)?;
        }
        if !extensible {
            this.internal_prevent_extensions(agent);
        }
        Ok(this)
    }
}

impl OrdinaryObjectBuilder<'_, NoPrototype> {
    pub fn build(self) -> JsResult<OrdinaryObject> {
        self.finish(None)
    }
}

impl OrdinaryObjectBuilder<'_, CreatorPrototype> {
    pub fn build(self) -> JsResult<OrdinaryObject> {
        let prototype = self.prototype.0;
        self.finish(Some(prototype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::{DefaultHostHooks, Options, initialize_default_realm};

    #[test]
    fn builds_properties_in_order() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let realm = initialize_default_realm(&mut agent).unwrap();
        let object = OrdinaryObjectBuilder::new(&mut agent, realm)
            .with_property_capacity(2)
            .with_property(|builder| {
                builder
                    .with_key_from_str("b")
                    .with_value_readonly(Value::from(2))
                    .with_enumerable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("a")
                    .with_value(Value::from(1))
                    .build()
            })
            .with_extensible(false)
            .build()
            .unwrap();
        let keys: Vec<_> = object
            .internal_own_property_keys(&agent)
            .into_iter()
            .map(|key| key.as_display(&agent))
            .collect();
        assert_eq!(keys, ["b", "a"]);
        assert!(!object.internal_is_extensible(&agent));
        assert!(object.internal_prototype(&agent).is_none());
    }

    #[test]
    fn conflicting_definitions_fail_the_build() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let realm = initialize_default_realm(&mut agent).unwrap();
        let result = OrdinaryObjectBuilder::new(&mut agent, realm)
            .with_property(|builder| {
                builder
                    .with_key_from_str("x")
                    .with_value_readonly(Value::from(1))
                    .with_configurable(false)
                    .build()
            })
            .with_property(|builder| {
                builder
                    .with_key_from_str("x")
                    .with_value(Value::from(2))
                    .build()
            })
            .build();
        assert!(result.is_err());
    }
}
