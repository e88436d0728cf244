// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed entry points that compiled code calls instead of going through the
//! dynamic calling convention. A kernel takes raw doubles (or the agent, for
//! kernels that touch per-agent state) and returns a raw double: no boxing,
//! no coercion, no failure.

use core::fmt;

use crate::ecmascript::execution::Agent;

pub type UnaryKernel = fn(f64) -> f64;
pub type BinaryKernel = fn(f64, f64) -> f64;
pub type AgentKernel = fn(&mut Agent) -> f64;

#[derive(Debug, Clone, Copy)]
pub enum MathKernel {
    Unary(UnaryKernel),
    Binary(BinaryKernel),
    Agent(AgentKernel),
}

/// Type signature of a kernel, as seen by the code emitting calls to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelSignature {
    /// `(f64) -> f64`
    DoubleToDouble,
    /// `(f64, f64) -> f64`
    DoubleDoubleToDouble,
    /// `(&mut Agent) -> f64`
    AgentToDouble,
}

impl KernelSignature {
    pub const fn arity(self) -> usize {
        match self {
            KernelSignature::DoubleToDouble => 1,
            KernelSignature::DoubleDoubleToDouble => 2,
            KernelSignature::AgentToDouble => 0,
        }
    }
}

impl fmt::Display for KernelSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KernelSignature::DoubleToDouble => "(f64) -> f64",
            KernelSignature::DoubleDoubleToDouble => "(f64, f64) -> f64",
            KernelSignature::AgentToDouble => "(&mut Agent) -> f64",
        })
    }
}

/// Static link between a builtin function and its compiled kernel. Created
/// as a constant and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct KernelDescriptor {
    pub name: &'static str,
    pub kernel: MathKernel,
}

impl KernelDescriptor {
    pub const fn unary(name: &'static str, kernel: UnaryKernel) -> Self {
        Self {
            name,
            kernel: MathKernel::Unary(kernel),
        }
    }

    pub const fn binary(name: &'static str, kernel: BinaryKernel) -> Self {
        Self {
            name,
            kernel: MathKernel::Binary(kernel),
        }
    }

    pub const fn agent(name: &'static str, kernel: AgentKernel) -> Self {
        Self {
            name,
            kernel: MathKernel::Agent(kernel),
        }
    }

    pub const fn signature(&self) -> KernelSignature {
        match self.kernel {
            MathKernel::Unary(_) => KernelSignature::DoubleToDouble,
            MathKernel::Binary(_) => KernelSignature::DoubleDoubleToDouble,
            MathKernel::Agent(_) => KernelSignature::AgentToDouble,
        }
    }

    /// Calls the kernel with already-unboxed operands. Operands the
    /// signature does not take are ignored; missing ones read as NaN.
    pub fn invoke(&self, agent: &mut Agent, operands: &[f64]) -> f64 {
        let operand = |index: usize| operands.get(index).copied().unwrap_or(f64::NAN);
        match self.kernel {
            MathKernel::Unary(kernel) => kernel(operand(0)),
            MathKernel::Binary(kernel) => kernel(operand(0), operand(1)),
            MathKernel::Agent(kernel) => kernel(agent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecmascript::execution::{DefaultHostHooks, Options};

    fn negate(x: f64) -> f64 {
        -x
    }

    fn sum(x: f64, y: f64) -> f64 {
        x + y
    }

    #[test]
    fn signatures_follow_the_kernel_shape() {
        assert_eq!(
            KernelDescriptor::unary("negate", negate).signature(),
            KernelSignature::DoubleToDouble
        );
        assert_eq!(
            KernelDescriptor::binary("sum", sum).signature().arity(),
            2
        );
        assert_eq!(
            KernelSignature::AgentToDouble.to_string(),
            "(&mut Agent) -> f64"
        );
    }

    #[test]
    fn invoke_fills_missing_operands_with_nan() {
        let mut agent = Agent::new(Options::default(), &DefaultHostHooks);
        let descriptor = KernelDescriptor::binary("sum", sum);
        assert_eq!(descriptor.invoke(&mut agent, &[1.0, 2.0, 99.0]), 3.0);
        assert!(descriptor.invoke(&mut agent, &[1.0]).is_nan());
    }
}
