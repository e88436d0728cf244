// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::ecmascript::types::Value;

/// ### [6.2.6 The Property Descriptor Specification Type](https://tc39.es/ecma262/#sec-property-descriptor-specification-type)
///
/// Only data descriptors exist here. Absent fields are `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PropertyDescriptor {
    /// \[\[Value]]
    pub value: Option<Value>,

    /// \[\[Writable]]
    pub writable: Option<bool>,

    /// \[\[Enumerable]]
    pub enumerable: Option<bool>,

    /// \[\[Configurable]]
    pub configurable: Option<bool>,
}

impl PropertyDescriptor {
    /// Writable, enumerable and configurable: the shape of a property
    /// created by ordinary assignment.
    pub const fn new_data_descriptor(value: Value) -> Self {
        Self {
            value: Some(value),
            writable: Some(true),
            enumerable: Some(true),
            configurable: Some(true),
        }
    }

    /// Read-only, non-enumerable and permanent.
    pub const fn new_frozen_descriptor(value: Value) -> Self {
        Self {
            value: Some(value),
            writable: Some(false),
            enumerable: Some(false),
            configurable: Some(false),
        }
    }

    /// ### [6.2.6.6 CompletePropertyDescriptor ( Desc )](https://tc39.es/ecma262/#sec-completepropertydescriptor)
    pub fn complete(self) -> Self {
        Self {
            value: Some(self.value.unwrap_or_default()),
            writable: Some(self.writable.unwrap_or(false)),
            enumerable: Some(self.enumerable.unwrap_or(false)),
            configurable: Some(self.configurable.unwrap_or(false)),
        }
    }

    /// Overwrites the fields of `self` with the fields present in `other`.
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            value: other.value.or(self.value),
            writable: other.writable.or(self.writable),
            enumerable: other.enumerable.or(self.enumerable),
            configurable: other.configurable.or(self.configurable),
        }
    }

    pub fn is_writable(&self) -> bool {
        self.writable == Some(true)
    }

    pub fn is_enumerable(&self) -> bool {
        self.enumerable == Some(true)
    }

    pub fn is_configurable(&self) -> bool {
        self.configurable == Some(true)
    }
}
