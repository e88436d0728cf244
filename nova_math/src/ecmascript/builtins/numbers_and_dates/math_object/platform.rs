// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Portable semantics for the native math primitives behind `Math`.
//!
//! Host math libraries disagree with ECMA-262 on a handful of edge inputs.
//! Each such edge is a named entry in [`PLATFORM_CORRECTIONS`]: a predicate
//! on the operands and the value that must be produced when it holds. The
//! functions in this module are the only place either execution path gets
//! a numeric result from: the generic `Math` functions and the compiled
//! kernels both call them, so the two paths cannot drift apart.
//!
//! Corrections are applied unconditionally on every target, including those
//! whose native library already gets the edge right.

use core::f64::consts::{FRAC_PI_4, PI};

/// Which operands a correction inspects.
#[derive(Debug, Clone, Copy)]
pub enum CorrectionRule {
    Unary {
        applies: fn(f64) -> bool,
        value: fn(f64) -> f64,
    },
    Binary {
        applies: fn(f64, f64) -> bool,
        value: fn(f64, f64) -> f64,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct PlatformCorrection {
    /// Name of the `Math` function the correction belongs to.
    pub operation: &'static str,
    pub name: &'static str,
    /// The edge, in the notation of the operation's parameters.
    pub predicate: &'static str,
    /// The value produced on the edge.
    pub result: &'static str,
    pub rule: CorrectionRule,
}

impl PlatformCorrection {
    /// The corrected value for a unary operand, or `None` when this
    /// correction does not apply.
    pub fn apply_unary(&self, x: f64) -> Option<f64> {
        match self.rule {
            CorrectionRule::Unary { applies, value } if applies(x) => Some(value(x)),
            _ => None,
        }
    }

    /// The corrected value for a pair of operands, or `None` when this
    /// correction does not apply.
    pub fn apply_binary(&self, x: f64, y: f64) -> Option<f64> {
        match self.rule {
            CorrectionRule::Binary { applies, value } if applies(x, y) => Some(value(x, y)),
            _ => None,
        }
    }
}

fn outside_unit_interval(x: f64) -> bool {
    x < -1.0 || x > 1.0
}

fn nan(_: f64) -> f64 {
    f64::NAN
}

fn both_infinite(y: f64, x: f64) -> bool {
    y.is_infinite() && x.is_infinite()
}

fn quarter_turn_multiple(y: f64, x: f64) -> f64 {
    let quarter = FRAC_PI_4.copysign(y);
    if x < 0.0 { 3.0 * quarter } else { quarter }
}

fn zero_over_negative_zero(y: f64, x: f64) -> bool {
    y == 0.0 && x == 0.0 && x.is_sign_negative()
}

fn half_turn(y: f64, _: f64) -> f64 {
    PI.copysign(y)
}

fn zero_over_positive_zero(y: f64, x: f64) -> bool {
    y == 0.0 && x == 0.0 && x.is_sign_positive()
}

fn first_operand(y: f64, _: f64) -> f64 {
    y
}

fn negative_fraction(x: f64) -> bool {
    -1.0 < x && x < 0.0
}

fn negative_zero(_: f64) -> f64 {
    -0.0
}

fn is_nan(x: f64) -> bool {
    x.is_nan()
}

fn is_positive_infinity(x: f64) -> bool {
    x == f64::INFINITY
}

fn positive_infinity(_: f64) -> f64 {
    f64::INFINITY
}

fn is_negative_infinity(x: f64) -> bool {
    x == f64::NEG_INFINITY
}

fn positive_zero(_: f64) -> f64 {
    0.0
}

fn is_negative(x: f64) -> bool {
    x < 0.0
}

fn unit_base_non_finite_exponent(x: f64, y: f64) -> bool {
    !y.is_finite() && x.abs() == 1.0
}

fn binary_nan(_: f64, _: f64) -> f64 {
    f64::NAN
}

fn zero_exponent(_: f64, y: f64) -> bool {
    y == 0.0
}

fn one(_: f64, _: f64) -> f64 {
    1.0
}

const ACOS_CORRECTIONS: &[PlatformCorrection] = &[PlatformCorrection {
    operation: "acos",
    name: "acos-outside-unit-interval",
    predicate: "x < -1 || x > 1",
    result: "NaN",
    rule: CorrectionRule::Unary {
        applies: outside_unit_interval,
        value: nan,
    },
}];

const ASIN_CORRECTIONS: &[PlatformCorrection] = &[PlatformCorrection {
    operation: "asin",
    name: "asin-outside-unit-interval",
    predicate: "x < -1 || x > 1",
    result: "NaN",
    rule: CorrectionRule::Unary {
        applies: outside_unit_interval,
        value: nan,
    },
}];

const ATAN2_CORRECTIONS: &[PlatformCorrection] = &[
    PlatformCorrection {
        operation: "atan2",
        name: "atan2-both-infinite",
        predicate: "y and x both infinite",
        result: "copysign(π/4, y), times 3 when x < 0",
        rule: CorrectionRule::Binary {
            applies: both_infinite,
            value: quarter_turn_multiple,
        },
    },
    PlatformCorrection {
        operation: "atan2",
        name: "atan2-zero-over-negative-zero",
        predicate: "y == 0 and x is -0",
        result: "copysign(π, y)",
        rule: CorrectionRule::Binary {
            applies: zero_over_negative_zero,
            value: half_turn,
        },
    },
    PlatformCorrection {
        operation: "atan2",
        name: "atan2-zero-over-zero",
        predicate: "y == 0 and x is +0",
        result: "y",
        rule: CorrectionRule::Binary {
            applies: zero_over_positive_zero,
            value: first_operand,
        },
    },
];

const CEIL_CORRECTIONS: &[PlatformCorrection] = &[PlatformCorrection {
    operation: "ceil",
    name: "ceil-negative-fraction",
    predicate: "-1 < x < 0",
    result: "-0",
    rule: CorrectionRule::Unary {
        applies: negative_fraction,
        value: negative_zero,
    },
}];

const EXP_CORRECTIONS: &[PlatformCorrection] = &[
    PlatformCorrection {
        operation: "exp",
        name: "exp-nan",
        predicate: "x is NaN",
        result: "NaN",
        rule: CorrectionRule::Unary {
            applies: is_nan,
            value: nan,
        },
    },
    PlatformCorrection {
        operation: "exp",
        name: "exp-positive-infinity",
        predicate: "x == +∞",
        result: "+∞",
        rule: CorrectionRule::Unary {
            applies: is_positive_infinity,
            value: positive_infinity,
        },
    },
    PlatformCorrection {
        operation: "exp",
        name: "exp-negative-infinity",
        predicate: "x == -∞",
        result: "+0",
        rule: CorrectionRule::Unary {
            applies: is_negative_infinity,
            value: positive_zero,
        },
    },
];

const LOG_CORRECTIONS: &[PlatformCorrection] = &[PlatformCorrection {
    operation: "log",
    name: "log-negative",
    predicate: "x < 0",
    result: "NaN",
    rule: CorrectionRule::Unary {
        applies: is_negative,
        value: nan,
    },
}];

const POW_CORRECTIONS: &[PlatformCorrection] = &[
    PlatformCorrection {
        operation: "pow",
        name: "pow-unit-base-non-finite-exponent",
        predicate: "y is not finite and |x| == 1",
        result: "NaN",
        rule: CorrectionRule::Binary {
            applies: unit_base_non_finite_exponent,
            value: binary_nan,
        },
    },
    PlatformCorrection {
        operation: "pow",
        name: "pow-zero-exponent",
        predicate: "y == 0",
        result: "1",
        rule: CorrectionRule::Binary {
            applies: zero_exponent,
            value: one,
        },
    },
];

/// Every platform correction, grouped by operation.
pub const PLATFORM_CORRECTIONS: &[&[PlatformCorrection]] = &[
    ACOS_CORRECTIONS,
    ASIN_CORRECTIONS,
    ATAN2_CORRECTIONS,
    CEIL_CORRECTIONS,
    EXP_CORRECTIONS,
    LOG_CORRECTIONS,
    POW_CORRECTIONS,
];

/// Iterates over every entry of [`PLATFORM_CORRECTIONS`].
pub fn platform_corrections() -> impl Iterator<Item = &'static PlatformCorrection> {
    PLATFORM_CORRECTIONS.iter().flat_map(|group| group.iter())
}

#[inline]
fn corrected_unary(corrections: &[PlatformCorrection], x: f64, native: fn(f64) -> f64) -> f64 {
    corrections
        .iter()
        .find_map(|correction| correction.apply_unary(x))
        .unwrap_or_else(|| native(x))
}

#[inline]
fn corrected_binary(
    corrections: &[PlatformCorrection],
    x: f64,
    y: f64,
    native: fn(f64, f64) -> f64,
) -> f64 {
    corrections
        .iter()
        .find_map(|correction| correction.apply_binary(x, y))
        .unwrap_or_else(|| native(x, y))
}

pub fn abs(x: f64) -> f64 {
    x.abs()
}

pub fn acos(x: f64) -> f64 {
    corrected_unary(ACOS_CORRECTIONS, x, f64::acos)
}

pub fn asin(x: f64) -> f64 {
    corrected_unary(ASIN_CORRECTIONS, x, f64::asin)
}

pub fn atan(x: f64) -> f64 {
    x.atan()
}

/// `y` is the first argument of `Math.atan2`.
pub fn atan2(y: f64, x: f64) -> f64 {
    corrected_binary(ATAN2_CORRECTIONS, y, x, f64::atan2)
}

pub fn ceil(x: f64) -> f64 {
    corrected_unary(CEIL_CORRECTIONS, x, f64::ceil)
}

pub fn cos(x: f64) -> f64 {
    x.cos()
}

pub fn exp(x: f64) -> f64 {
    corrected_unary(EXP_CORRECTIONS, x, f64::exp)
}

pub fn floor(x: f64) -> f64 {
    x.floor()
}

pub fn log(x: f64) -> f64 {
    corrected_unary(LOG_CORRECTIONS, x, f64::ln)
}

/// The larger operand, NaN if either is NaN, and +0 over -0.
pub fn max(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 && y == 0.0 {
        return if x.is_sign_negative() { y } else { x };
    }
    if x > y { x } else { y }
}

/// The smaller operand, NaN if either is NaN, and -0 over +0.
pub fn min(x: f64, y: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 && y == 0.0 {
        return if x.is_sign_negative() { x } else { y };
    }
    if x < y { x } else { y }
}

pub fn pow(x: f64, y: f64) -> f64 {
    corrected_binary(POW_CORRECTIONS, x, y, f64::powf)
}

/// 2^52: every double of at least this magnitude is an integer.
const MIN_INTEGRAL_MAGNITUDE: f64 = 4503599627370496.0;

/// `copysign(floor(x + 0.5), x)`: halves round towards +∞ and the sign of
/// the input is kept, so `round(-0.4)` is -0. Doubles of magnitude 2^52 or
/// more are already integral and pass through, because `x + 0.5` is not
/// exact for them.
pub fn round(x: f64) -> f64 {
    if x.is_nan() || x.abs() >= MIN_INTEGRAL_MAGNITUDE {
        return x;
    }
    floor(x + 0.5).copysign(x)
}

pub fn sin(x: f64) -> f64 {
    x.sin()
}

pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

pub fn tan(x: f64) -> f64 {
    x.tan()
}
