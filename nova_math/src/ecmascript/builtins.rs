// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! ## [10.3 Built-in Function Objects](https://tc39.es/ecma262/#sec-built-in-function-objects)

mod builtin_function;
pub mod fundamental_objects;
#[cfg(feature = "math")]
pub mod numbers_and_dates;

pub(crate) use builtin_function::builtin_call;
pub use builtin_function::{
    ArgumentsList, Behaviour, Builtin, BuiltinFunction, BuiltinFunctionArgs,
    BuiltinFunctionHeapData, RegularFn, create_builtin_function,
};
