// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::{Index, IndexMut};

use super::{Agent, JsResult};
#[cfg(feature = "math")]
use crate::ecmascript::{
    abstract_operations::operations_on_objects::define_property_or_throw,
    builtins::numbers_and_dates::math_object::MathObject,
    types::{PropertyDescriptor, PropertyKey},
};
use crate::ecmascript::{
    builtins::fundamental_objects::object_objects::object_prototype::ObjectPrototype,
    types::{Object, OrdinaryObject},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RealmIdentifier(u32);

impl RealmIdentifier {
    pub(crate) const fn into_index(self) -> usize {
        self.0 as usize
    }

    fn last(realms: &[Realm]) -> Self {
        Self((realms.len() - 1) as u32)
    }
}

#[derive(Debug, Clone)]
pub struct Intrinsics {
    /// %Object.prototype%
    pub(crate) object_prototype: OrdinaryObject,
    /// %Math%
    pub(crate) math: Option<OrdinaryObject>,
}

impl Intrinsics {
    pub fn object_prototype(&self) -> OrdinaryObject {
        self.object_prototype
    }

    pub fn math(&self) -> Option<OrdinaryObject> {
        self.math
    }
}

/// ### [9.3 Realms](https://tc39.es/ecma262/#sec-code-realms)
#[derive(Debug, Clone)]
pub struct Realm {
    pub(crate) intrinsics: Intrinsics,
    pub(crate) global_object: OrdinaryObject,
}

impl Realm {
    pub fn intrinsics(&self) -> &Intrinsics {
        &self.intrinsics
    }

    pub fn global_object(&self) -> OrdinaryObject {
        self.global_object
    }
}

impl Index<RealmIdentifier> for Agent {
    type Output = Realm;

    fn index(&self, index: RealmIdentifier) -> &Self::Output {
        self.realms
            .get(index.into_index())
            .expect("RealmIdentifier out of bounds")
    }
}

impl IndexMut<RealmIdentifier> for Agent {
    fn index_mut(&mut self, index: RealmIdentifier) -> &mut Self::Output {
        self.realms
            .get_mut(index.into_index())
            .expect("RealmIdentifier out of bounds")
    }
}

/// ### [9.6 InitializeHostDefinedRealm ( )](https://tc39.es/ecma262/#sec-initializehostdefinedrealm)
///
/// Creates a realm with `%Object.prototype%` and the `Math` namespace, binds
/// `Math` on the global object and makes the realm current. Any failure
/// while building the intrinsics is returned as is.
pub fn initialize_default_realm(agent: &mut Agent) -> JsResult<RealmIdentifier> {
    let object_prototype = OrdinaryObject::create_empty_object(agent, None);
    let global_object =
        OrdinaryObject::create_empty_object(agent, Some(Object::Object(object_prototype)));
    agent.realms.push(Realm {
        intrinsics: Intrinsics {
            object_prototype,
            math: None,
        },
        global_object,
    });
    let realm = RealmIdentifier::last(&agent.realms);
    agent.current_realm = Some(realm);

    ObjectPrototype::create_intrinsic(agent, realm)?;

    #[cfg(feature = "math")]
    {
        let math = MathObject::create_intrinsic(agent, realm).inspect_err(|_| {
            tracing::warn!(agent = agent.id(), "Math namespace construction failed");
        });
        let math = math?;
        agent[realm].intrinsics.math = Some(math);
        // The global binding is writable and configurable, unlike the
        // namespace's own constants.
        let key = PropertyKey::from_str(agent, "Math");
        define_property_or_throw(
            agent,
            Object::Object(global_object),
            key,
            PropertyDescriptor {
                value: Some(math.into()),
                writable: Some(true),
                enumerable: Some(false),
                configurable: Some(true),
            },
        )?;
    }

    tracing::debug!(agent = agent.id(), realm = realm.0, "initialized realm");
    Ok(realm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::{
        execution::{DefaultHostHooks, Options},
        types::{PropertyKey, Value},
    };

    #[test]
    fn realm_becomes_current() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let realm = initialize_default_realm(&mut agent).unwrap();
        assert_eq!(agent.current_realm_id(), realm);
        let global = agent.current_realm().global_object();
        assert_eq!(
            global.internal_prototype(&agent),
            Some(Object::Object(agent[realm].intrinsics().object_prototype()))
        );
    }

    #[cfg(feature = "math")]
    #[test]
    fn math_is_bound_on_the_global_object() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let realm = initialize_default_realm(&mut agent).unwrap();
        let key = PropertyKey::from_str(&mut agent, "Math");
        let global = agent[realm].global_object();
        let math = agent[realm].intrinsics().math().unwrap();
        assert_eq!(global.internal_get(&agent, key), Value::Object(math));
        let descriptor = global.internal_get_own_property(&agent, key).unwrap();
        assert!(descriptor.is_writable());
        assert!(!descriptor.is_enumerable());
        assert!(descriptor.is_configurable());
    }
}
