// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Parser as ClapParser, Subcommand, ValueEnum};
use nova_math::{
    ecmascript::{
        abstract_operations::operations_on_objects::call_function,
        builtins::numbers_and_dates::math_object::{MATH_CONSTANTS, platform::platform_corrections},
        execution::{Agent, DefaultHostHooks, JsError, Options, initialize_default_realm},
        types::{PropertyKey, Value},
    },
    engine::math_kernels::math_kernel_descriptors,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Drives the Math namespace of the Nova engine
#[derive(Debug, ClapParser)] // requires `derive` feature
#[command(name = "nova_math")]
#[command(about = "Drives the Math namespace of the Nova engine", long_about = None)]
struct Cli {
    /// Seed for Math.random; the host clock is used when absent
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log level; `RUST_LOG` is used when absent
    #[arg(short, long, global = true, value_enum)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calls a Math function through the generic path
    Call {
        /// The name of the function, such as `atan2`
        function: String,

        /// Arguments, converted with ToNumber
        #[arg(allow_hyphen_values = true)]
        arguments: Vec<String>,
    },

    /// Draws from the agent's random generator
    Random {
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },

    /// Lists the compiled kernels and their signatures
    Kernels,

    /// Lists the platform corrections
    Corrections,

    /// Prints the namespace constants
    Constants,
}

fn init_tracing(log_level: Option<LogLevel>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();
}

fn exit_with_exception(agent: &mut Agent, error: JsError) -> ! {
    eprintln!("Uncaught exception: {}", error.to_string(agent));
    std::process::exit(1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();
    init_tracing(args.log_level);
    tracing::debug!(command = ?args.command, seed = ?args.seed, "starting");

    let mut agent = Agent::new(
        Options {
            random_seed: args.seed,
        },
        &DefaultHostHooks,
    );
    if let Err(error) = initialize_default_realm(&mut agent) {
        exit_with_exception(&mut agent, error);
    }

    match args.command {
        Command::Call {
            function,
            arguments,
        } => {
            let Some(math) = agent.current_realm().intrinsics().math() else {
                return Err("the Math namespace is not installed".into());
            };
            let key = PropertyKey::from_str(&mut agent, &function);
            let callee = math.internal_get(&agent, key);
            let arguments: Vec<Value> = arguments
                .iter()
                .map(|argument| Value::from_str(&mut agent, argument))
                .collect();
            match call_function(&mut agent, callee, math.into(), Some(&arguments)) {
                Ok(result) => println!("{}", result.string_repr(&mut agent)),
                Err(error) => exit_with_exception(&mut agent, error),
            }
        }
        Command::Random { count } => {
            for _ in 0..count {
                let n = agent.random().next_double();
                let n = Value::from_f64(&mut agent, n);
                println!("{}", n.string_repr(&mut agent));
            }
        }
        Command::Kernels => {
            for descriptor in math_kernel_descriptors() {
                println!("{:<8} {}", descriptor.name, descriptor.signature());
            }
        }
        Command::Corrections => {
            for correction in platform_corrections() {
                println!(
                    "{:<6} {:<36} {:<28} {}",
                    correction.operation, correction.name, correction.predicate, correction.result
                );
            }
        }
        Command::Constants => {
            for (name, value) in MATH_CONSTANTS {
                let value = Value::from_f64(&mut agent, value);
                println!("{:<8} {}", name, value.string_repr(&mut agent));
            }
        }
    }
    Ok(())
}
