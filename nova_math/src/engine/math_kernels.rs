// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Compiled fast paths of the `Math` functions.
//!
//! Every kernel is a function of the platform layer (or, for `random`, of
//! the agent's generator), the same function the generic builtin calls after
//! coercing its arguments.

use super::kernel::KernelDescriptor;
use crate::ecmascript::{
    builtins::numbers_and_dates::math_object::platform, execution::Agent,
};

/// `Math.random` without boxing: one draw from the agent's generator.
#[inline]
pub fn random(agent: &mut Agent) -> f64 {
    agent.random.next_double()
}

pub const ABS: KernelDescriptor = KernelDescriptor::unary("abs", platform::abs);
pub const ACOS: KernelDescriptor = KernelDescriptor::unary("acos", platform::acos);
pub const ASIN: KernelDescriptor = KernelDescriptor::unary("asin", platform::asin);
pub const ATAN: KernelDescriptor = KernelDescriptor::unary("atan", platform::atan);
pub const ATAN2: KernelDescriptor = KernelDescriptor::binary("atan2", platform::atan2);
pub const CEIL: KernelDescriptor = KernelDescriptor::unary("ceil", platform::ceil);
pub const COS: KernelDescriptor = KernelDescriptor::unary("cos", platform::cos);
pub const EXP: KernelDescriptor = KernelDescriptor::unary("exp", platform::exp);
pub const FLOOR: KernelDescriptor = KernelDescriptor::unary("floor", platform::floor);
pub const LOG: KernelDescriptor = KernelDescriptor::unary("log", platform::log);
pub const MAX: KernelDescriptor = KernelDescriptor::binary("max", platform::max);
pub const MIN: KernelDescriptor = KernelDescriptor::binary("min", platform::min);
pub const POW: KernelDescriptor = KernelDescriptor::binary("pow", platform::pow);
pub const RANDOM: KernelDescriptor = KernelDescriptor::agent("random", random);
pub const ROUND: KernelDescriptor = KernelDescriptor::unary("round", platform::round);
pub const SIN: KernelDescriptor = KernelDescriptor::unary("sin", platform::sin);
pub const SQRT: KernelDescriptor = KernelDescriptor::unary("sqrt", platform::sqrt);
pub const TAN: KernelDescriptor = KernelDescriptor::unary("tan", platform::tan);

const MATH_KERNELS: [KernelDescriptor; 18] = [
    ABS, ACOS, ASIN, ATAN, ATAN2, CEIL, COS, EXP, FLOOR, LOG, MAX, MIN, POW, RANDOM, ROUND, SIN,
    SQRT, TAN,
];

/// Every `Math` kernel, in the order of the namespace's function names.
pub fn math_kernel_descriptors() -> &'static [KernelDescriptor] {
    &MATH_KERNELS
}

/// Looks a kernel up by the name of its `Math` function.
pub fn math_kernel(name: &str) -> Option<KernelDescriptor> {
    MATH_KERNELS
        .iter()
        .find(|descriptor| descriptor.name == name)
        .copied()
}
