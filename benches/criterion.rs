// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use nova_math::{
    ecmascript::{
        abstract_operations::operations_on_objects::call_function,
        execution::{Agent, DefaultHostHooks, Options, initialize_default_realm},
        types::{PropertyKey, Value},
    },
    engine::math_kernels::math_kernel,
};

fn agent() -> Agent {
    let mut agent = Agent::new(
        Options {
            random_seed: Some(0),
        },
        &DefaultHostHooks,
    );
    initialize_default_realm(&mut agent).unwrap();
    agent
}

macro_rules! bench_harness {
    ($($name:literal: [$($operand:expr),*],)*) => {
        fn bench_paths(c: &mut Criterion) {
            $(
                {
                    let mut agent = agent();
                    let math = agent.current_realm().intrinsics().math().unwrap();
                    let key = PropertyKey::from_str(&mut agent, $name);
                    let function = math.internal_get(&agent, key);
                    let operands: &[f64] = &[$($operand),*];
                    let arguments: Vec<Value> = operands
                        .iter()
                        .map(|&n| Value::from_f64(&mut agent, n))
                        .collect();

                    c.bench_function(concat!($name, " (Generic)"), |b| {
                        b.iter(|| {
                            call_function(
                                &mut agent,
                                black_box(function),
                                math.into(),
                                Some(black_box(&arguments)),
                            )
                            .unwrap()
                        })
                    });

                    let kernel = math_kernel($name).unwrap();
                    c.bench_function(concat!($name, " (Kernel)"), |b| {
                        b.iter(|| kernel.invoke(&mut agent, black_box(operands)))
                    });
                }
            )*
        }
    };
}

bench_harness!(
    "abs": [-2.5],
    "atan2": [1.0, -0.0],
    "ceil": [-0.5],
    "exp": [1.5],
    "max": [3.0, -0.0],
    "pow": [2.0, 0.5],
    "random": [],
    "round": [2.5],
    "sqrt": [2.0],
);

criterion_group!(benches, bench_paths);
criterion_main!(benches);
