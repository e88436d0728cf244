// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Nova Math
//!
//! The numeric intrinsics of the Nova JavaScript engine: the `Math`
//! namespace object, reachable from the interpreter through the generic
//! builtin calling convention, and the compiled fast-path kernels that
//! compiled code calls directly with unboxed doubles.
//!
//! Both paths are thin wrappers around one shared platform correction layer
//! ([`ecmascript::builtins::numbers_and_dates::math_object::platform`]), so
//! that a correct program can never observe which path was taken.
//!
//! The engine core in this crate (values, heap, ordinary objects, agent and
//! realm) is intentionally small: it exists to provide the value coercion,
//! error signalling and invocation contracts that the intrinsics rely on.

pub mod ecmascript;
pub mod engine;
pub mod heap;

pub use engine::small_integer::SmallInteger;
pub use heap::Heap;
