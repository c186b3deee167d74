use std::{fs, process::ExitCode};

use clap::{ArgAction, Parser};
use linalgpro::{
    Environment, Error, Limits,
    interpreter::{
        evaluator::core::Evaluator,
        limits::DEFAULT_MAX_DEPTH,
        parser::core::{parse, parse_binding, parse_with_limits},
    },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sample leaves printed by `--demo`.
const DEMO_VALUES: [&str; 4] = ["<escalar, 3.14159>",
                                "<complejo, 3.14-0.14i>",
                                "<vector, [1,2,3,4,5,6]>",
                                "<matriz, [[1,2],[4,5],[7,8]]>"];

/// Sample operations printed and evaluated by `--demo`.
const DEMO_OPERATIONS: [&str; 2] = ["<suma,<complejo, 3.14-0.14i>,<complejo, 3.14-0.14i>>",
                                    "<multesc,<matriz, [[2,2], [3,3]]>,<escalar, 4>>"];

/// linalgpro evaluates tagged linear algebra expressions such as
/// `<suma, <escalar, 1>, <escalar, 2>>`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells linalgpro to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints a few sample values and evaluates two sample operations.
    #[arg(short, long, conflicts_with_all = ["file", "contents"])]
    demo: bool,

    /// Prints the parsed expression before its value.
    #[arg(short, long)]
    tree: bool,

    /// Binds NAME to the expression EXPR. May be repeated; the first binding
    /// of a name wins.
    #[arg(short, long = "bind", value_name = "NAME=EXPR")]
    bindings: Vec<String>,

    /// Maximum nesting depth of an expression.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Increases logging verbosity. `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The expression, or a path when `--file` is given.
    #[arg(required_unless_present = "demo")]
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.demo {
        return report(run_demo());
    }

    // clap requires CONTENTS unless --demo is given; an empty string would
    // still be reported as empty input.
    let contents = args.contents.unwrap_or_default();

    let source = if args.file {
        info!(path = %contents, "reading expression from file");
        match fs::read_to_string(&contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let limits = Limits::new(args.max_depth);

    let mut env = Environment::new();
    for binding in &args.bindings {
        match parse_binding(binding, limits) {
            Ok((name, value)) => env.bind(name, value),
            Err(e) => {
                eprintln!("Invalid binding '{binding}': {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    let result = parse_with_limits(&source, limits).map_err(Error::from)
                                                   .and_then(|expr| {
                                                       if args.tree {
                                                           println!("{expr}");
                                                       }
                                                       Ok(Evaluator::new(&env, limits).eval(&expr)?)
                                                   });

    report(result.map(|value| println!("{value}")))
}

/// Prints the samples of the language and the results of the sample
/// operations.
fn run_demo() -> Result<(), Error> {
    let env = Environment::new();
    let mut evaluator = Evaluator::new(&env, Limits::default());

    println!("Values:");
    for source in DEMO_VALUES {
        println!("{}\n", parse(source)?);
    }

    println!("Operations:");
    for source in DEMO_OPERATIONS {
        let expr = parse(source)?;
        println!("{expr}");
        println!("{}\n", evaluator.eval(&expr)?);
    }

    Ok(())
}

fn report(result: Result<(), Error>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();
}
