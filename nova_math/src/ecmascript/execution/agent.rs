// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::sync::atomic::{AtomicU64, Ordering};

use ahash::RandomState;

use super::{MathRandom, Realm, RealmIdentifier};
use crate::{
    ecmascript::types::{
        Object, OrdinaryObject, PropertyDescriptor, PropertyKey, String, Value,
    },
    engine::kernel::KernelDescriptor,
    heap::Heap,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct Options {
    /// Seed for the agent's `Math.random` generator. When absent the seed is
    /// derived from the host clock and the agent's identity.
    pub random_seed: Option<u64>,
}

pub type JsResult<T> = std::result::Result<T, JsError>;

/// A thrown value.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct JsError(pub(crate) Value);

impl JsError {
    pub(crate) fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn value(self) -> Value {
        self.0
    }

    /// Renders the thrown value the way an uncaught exception is reported:
    /// `Name: message` for error objects, the string form otherwise.
    pub fn to_string(self, agent: &mut Agent) -> std::string::String {
        let Ok(object) = Object::try_from(self.0) else {
            return self.0.string_repr(agent);
        };
        let name_key = PropertyKey::from_str(agent, "name");
        let message_key = PropertyKey::from_str(agent, "message");
        let name = object.internal_get(agent, name_key);
        let message = object.internal_get(agent, message_key);
        match (name.is_undefined(), message.is_undefined()) {
            (true, true) => self.0.string_repr(agent),
            (false, true) => name.string_repr(agent),
            (true, false) => message.string_repr(agent),
            (false, false) => {
                let name = name.string_repr(agent);
                let message = message.string_repr(agent);
                format!("{name}: {message}")
            }
        }
    }
}

pub trait HostHooks: core::fmt::Debug {
    /// Milliseconds since the Unix epoch. Read once per agent, when its
    /// random generator is seeded.
    fn now_millis(&self) -> u64;
}

static NEXT_AGENT_ID: AtomicU64 = AtomicU64::new(1);

/// ### [9.7 Agents](https://tc39.es/ecma262/#sec-agents)
///
/// An agent is an execution context in the sense of the numeric intrinsics:
/// it owns the heap and exactly one `Math.random` generator. Every operation
/// that draws from the generator takes the agent by `&mut`.
#[derive(Debug)]
pub struct Agent {
    pub(crate) heap: Heap,
    pub(crate) host_hooks: &'static dyn HostHooks,
    pub(crate) realms: Vec<Realm>,
    pub(crate) current_realm: Option<RealmIdentifier>,
    pub(crate) random: MathRandom,
    id: u64,
}

impl Agent {
    pub fn new(options: Options, host_hooks: &'static dyn HostHooks) -> Self {
        let id = NEXT_AGENT_ID.fetch_add(1, Ordering::Relaxed);
        let seed = options
            .random_seed
            .unwrap_or_else(|| creation_seed(host_hooks, id));
        tracing::debug!(agent = id, "creating agent");
        Self {
            heap: Heap::new(),
            host_hooks,
            realms: Vec::new(),
            current_realm: None,
            random: MathRandom::new(seed),
            id,
        }
    }

    /// Process-unique identity of this agent.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn host_hooks(&self) -> &'static dyn HostHooks {
        self.host_hooks
    }

    pub fn current_realm_id(&self) -> RealmIdentifier {
        self.current_realm.expect("No current realm")
    }

    pub fn current_realm(&self) -> &Realm {
        &self[self.current_realm_id()]
    }

    /// The `Math.random` generator state of this agent.
    pub fn random(&mut self) -> &mut MathRandom {
        &mut self.random
    }

    /// Reseeds the `Math.random` generator. Equal seeds produce equal
    /// sequences.
    pub fn set_random_seed(&mut self, seed: u64) {
        tracing::trace!(agent = self.id, "reseeding Math.random");
        self.random.set_seed(seed);
    }

    /// The compiled kernel linked to a builtin function, if it has one.
    pub fn builtin_kernel(&self, value: Value) -> Option<KernelDescriptor> {
        match value {
            Value::BuiltinFunction(f) => self[f].kernel,
            _ => None,
        }
    }

    /// ### [5.2.3.2 Throw an Exception](https://tc39.es/ecma262/#sec-throw-an-exception)
    pub fn throw_exception(&mut self, kind: ExceptionType, message: &str) -> JsError {
        let prototype = self
            .current_realm
            .map(|realm| Object::from(self[realm].intrinsics.object_prototype));
        let error = OrdinaryObject::create_empty_object(self, prototype);
        let name = String::from_str(self, kind.name());
        let message = String::from_str(self, message);
        for (key, value) in [("name", name), ("message", message)] {
            let key = PropertyKey::from_str(self, key);
            // Fresh objects are extensible, so these definitions always
            // succeed.
            error.internal_define_own_property(
                self,
                key,
                PropertyDescriptor {
                    value: Some(value.into()),
                    writable: Some(true),
                    enumerable: Some(false),
                    configurable: Some(true),
                },
            );
        }
        JsError::new(error.into())
    }
}

/// Seed used when no explicit seed is configured: wall-clock time mixed with
/// two identity-derived values so that agents created in the same
/// millisecond still diverge.
fn creation_seed(host_hooks: &dyn HostHooks, id: u64) -> u64 {
    let identity_hash = RandomState::new().hash_one(id);
    host_hooks.now_millis() ^ id ^ identity_hash
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExceptionType {
    Error,
    RangeError,
    TypeError,
}

impl ExceptionType {
    pub const fn name(self) -> &'static str {
        match self {
            ExceptionType::Error => "Error",
            ExceptionType::RangeError => "RangeError",
            ExceptionType::TypeError => "TypeError",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::DefaultHostHooks;

    #[derive(Debug)]
    struct FrozenClock;

    impl HostHooks for FrozenClock {
        fn now_millis(&self) -> u64 {
            1_700_000_000_000
        }
    }

    #[test]
    fn thrown_errors_render_name_and_message() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let error = agent.throw_exception(ExceptionType::TypeError, "Cannot convert");
        assert!(error.value().is_object());
        assert_eq!(error.to_string(&mut agent), "TypeError: Cannot convert");
    }

    #[test]
    fn thrown_primitives_render_as_strings() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let error = JsError::new(Value::from(7));
        assert_eq!(error.to_string(&mut agent), "7");
    }

    #[test]
    fn agents_have_distinct_identities() {
        let a = Agent::new(Options::default(), &DefaultHostHooks);
        let b = Agent::new(Options::default(), &DefaultHostHooks);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn agents_created_at_the_same_instant_diverge() {
        let mut a = Agent::new(Options::default(), &FrozenClock);
        let mut b = Agent::new(Options::default(), &FrozenClock);
        let first: Vec<f64> = (0..4).map(|_| a.random().next_double()).collect();
        let second: Vec<f64> = (0..4).map(|_| b.random().next_double()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn agents_expose_their_host_hooks() {
        let agent = Agent::new(Options::default(), &FrozenClock);
        assert_eq!(agent.host_hooks().now_millis(), 1_700_000_000_000);
    }

    #[test]
    fn configured_seed_overrides_the_clock() {
        let options = Options {
            random_seed: Some(42),
        };
        let mut a = Agent::new(options, &FrozenClock);
        let mut b = Agent::new(options, &DefaultHostHooks);
        for _ in 0..8 {
            assert_eq!(
                a.random().next_double().to_bits(),
                b.random().next_double().to_bits()
            );
        }
    }

    #[test]
    fn reseeding_restarts_the_sequence() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        agent.set_random_seed(7);
        let first: Vec<u64> = (0..4)
            .map(|_| agent.random().next_double().to_bits())
            .collect();
        agent.set_random_seed(7);
        let second: Vec<u64> = (0..4)
            .map(|_| agent.random().next_double().to_bits())
            .collect();
        assert_eq!(first, second);
    }
}
