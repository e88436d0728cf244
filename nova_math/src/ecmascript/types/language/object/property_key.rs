// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::{
    execution::Agent,
    types::{IntoValue, String, Symbol, Value},
};

/// ### [6.1.7 The Object Type](https://tc39.es/ecma262/#sec-object-type)
///
/// A property key is either a String or a Symbol. Strings are interned, so
/// keys compare by identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    String(String),
    Symbol(Symbol),
}

impl PropertyKey {
    pub fn from_str(agent: &mut Agent, key: &str) -> Self {
        PropertyKey::String(String::from_str(agent, key))
    }

    /// Human-readable form of the key, used for error messages and
    /// listings.
    pub fn as_display(self, agent: &Agent) -> std::string::String {
        match self {
            PropertyKey::String(s) => s.to_string_lossy(agent).into_owned(),
            PropertyKey::Symbol(s) => format!("[{}]", s.descriptive_string(agent)),
        }
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        PropertyKey::String(value)
    }
}

impl From<Symbol> for PropertyKey {
    fn from(value: Symbol) -> Self {
        PropertyKey::Symbol(value)
    }
}

impl IntoValue for PropertyKey {
    fn into_value(self) -> Value {
        match self {
            PropertyKey::String(s) => Value::String(s),
            PropertyKey::Symbol(s) => Value::Symbol(s),
        }
    }
}
