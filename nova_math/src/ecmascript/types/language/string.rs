// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::ops::Index;
use std::borrow::Cow;

use wtf8::Wtf8Buf;

use super::{IntoValue, Value};
use crate::{ecmascript::execution::Agent, heap::indexes::StringIndex};

#[derive(Debug, Clone)]
pub struct StringHeapData {
    pub(crate) data: Wtf8Buf,
}

/// ### [6.1.4 The String Type](https://tc39.es/ecma262/#sec-ecmascript-language-types-string-type)
///
/// Strings are interned: two `String`s are equal exactly when their contents
/// are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct String(pub(crate) StringIndex);

impl String {
    pub fn from_str(agent: &mut Agent, message: &str) -> String {
        agent.heap.alloc_str(message)
    }

    /// The string contents, if they are valid UTF-8.
    pub fn as_str(self, agent: &Agent) -> Option<&str> {
        agent[self].data.as_str()
    }

    pub fn to_string_lossy(self, agent: &Agent) -> Cow<'_, str> {
        agent[self].data.to_string_lossy()
    }

    pub fn is_empty(self, agent: &Agent) -> bool {
        agent[self].data.len() == 0
    }
}

impl Index<String> for Agent {
    type Output = StringHeapData;

    fn index(&self, index: String) -> &Self::Output {
        self.heap
            .strings
            .get(index.0.into_index())
            .expect("String out of bounds")
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}
