// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::{
    ecmascript::{
        builtins::{
            Behaviour, Builtin, BuiltinFunction, BuiltinFunctionArgs, create_builtin_function,
        },
        execution::{Agent, RealmIdentifier},
    },
    engine::kernel::KernelDescriptor,
};

/// Builds the function object for a [`Builtin`], carrying its compiled kernel
/// link along.
pub struct BuiltinFunctionBuilder<'agent> {
    pub(crate) agent: &'agent mut Agent,
    realm: RealmIdentifier,
    behaviour: Behaviour,
    name: &'static str,
    length: u8,
    kernel: Option<KernelDescriptor>,
}

impl<'agent> BuiltinFunctionBuilder<'agent> {
    #[must_use]
    pub fn new<T: Builtin>(agent: &'agent mut Agent, realm: RealmIdentifier) -> Self {
        Self {
            agent,
            realm,
            behaviour: T::BEHAVIOUR,
            name: T::NAME,
            length: T::LENGTH,
            kernel: T::KERNEL,
        }
    }

    pub fn get_name(&self) -> &'static str {
        self.name
    }

    pub fn build(self) -> BuiltinFunction {
        create_builtin_function(
            self.agent,
            self.behaviour,
            BuiltinFunctionArgs {
                length: u32::from(self.length),
                name: self.name,
                realm: Some(self.realm),
                prototype: None,
                kernel: self.kernel,
            },
        )
    }
}
