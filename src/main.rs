use std::fs;

use clap::Parser;
use trigcalc::{
    analyze,
    error::Error,
    interpreter::{
        evaluator::{bindings::VariableBindings, core::evaluate},
        lexer::{keyword, number::parse_number},
    },
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// trigcalc evaluates arithmetic and trigonometric expressions such as
/// `sin(x)^2 + cos(x)^2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells trigcalc to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Binds a variable, e.g. `--var x=1.5`. May be repeated.
    #[arg(short, long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    vars: Vec<(String, f64)>,

    /// Value used for every variable not bound with `--var`.
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_value)]
    default: Option<f64>,

    /// Prints the token sequence.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the syntax tree.
    #[arg(short = 'T', long)]
    tree: bool,

    /// Prints the variables of the expression and exits without evaluating.
    #[arg(short, long)]
    list_variables: bool,

    /// Number of decimals to print the result with.
    #[arg(short, long)]
    precision: Option<usize>,

    contents: String,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    match run(&args, &source) {
        Ok(lines) => lines.iter().for_each(|line| println!("{line}")),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Analyzes and evaluates `source`, returning the lines to print.
fn run(args: &Args, source: &str) -> Result<Vec<String>, Error> {
    let analysis = analyze(source)?;
    let mut lines = Vec::new();

    if args.tokens {
        lines.extend(analysis.tokens
                             .iter()
                             .map(|token| format!("{} : {}", token.category(), token.lexeme())));
    }
    if args.tree {
        lines.push(analysis.tree.render().to_string());
    }
    if args.list_variables {
        lines.extend(analysis.variables.iter().map(ToString::to_string));
        return Ok(lines);
    }

    let mut bindings: VariableBindings = args.vars.iter().cloned().collect();
    if let Some(default) = args.default {
        bindings.fill_missing(&analysis.variables, default);
    }

    let result = evaluate(&analysis.tree, &bindings)?;
    lines.push(match args.precision {
                   Some(precision) => format!("{result:.precision$}"),
                   None => result.to_string(),
               });
    Ok(lines)
}

/// Parses a `NAME=VALUE` variable binding.
fn parse_binding(binding: &str) -> Result<(String, f64), String> {
    let (name, value) = binding.split_once('=')
                               .ok_or_else(|| format!("'{binding}' is not of the form NAME=VALUE"))?;
    let name = name.trim();
    if name.is_empty() || !name.chars().all(char::is_alphabetic) {
        return Err(format!("'{name}' is not a valid variable name"));
    }
    if keyword(name).is_some() {
        return Err(format!("'{name}' is a function name and cannot be bound"));
    }
    Ok((name.to_string(), parse_value(value)?))
}

/// Parses a numeric option value with the same rules as numeric literals.
fn parse_value(value: &str) -> Result<f64, String> {
    parse_number(value.trim()).ok_or_else(|| format!("'{value}' is not a valid number"))
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=trigcalc=debug`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                        .with_level(true)
                                                        .with_writer(std::io::stderr))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn output(argv: &[&str]) -> Result<Vec<String>, Error> {
        let args = Args::try_parse_from(std::iter::once("trigcalc").chain(argv.iter().copied())).unwrap();
        run(&args, &args.contents)
    }

    #[test]
    fn bindings_are_parsed_and_trimmed() {
        assert_eq!(parse_binding("x=1.5"), Ok(("x".to_string(), 1.5)));
        assert_eq!(parse_binding(" x = -2 "), Ok(("x".to_string(), -2.0)));
        assert_eq!(parse_binding("ángulo=.5"), Ok(("ángulo".to_string(), 0.5)));
    }

    #[test]
    fn malformed_bindings_are_rejected() {
        for binding in ["x=1e", "x=5..3", "x=nan", "x=inf", "x=1e400", "1x=2", "=2", "x", "sin=2", "COS=1"] {
            assert!(parse_binding(binding).is_err(), "{binding} should be rejected");
        }
        assert!(Args::try_parse_from(["trigcalc", "-v", "x=1e", "x"]).is_err());
    }

    #[test]
    fn default_goes_through_the_literal_rules() {
        assert_eq!(parse_value("-0.25"), Ok(-0.25));
        for value in ["nan", "inf", "1e400", "5..3"] {
            assert!(parse_value(value).is_err(), "{value} should be rejected");
            assert!(Args::try_parse_from(["trigcalc", "-d", value, "x"]).is_err());
        }
    }

    #[test]
    fn default_fills_only_unbound_variables() {
        assert_eq!(output(&["-v", "x=3", "-d", "-1", "x*10+y"]).unwrap(), ["29"]);
        assert_eq!(output(&["-d", "2", "x^y"]).unwrap(), ["4"]);
        assert!(output(&["-v", "x=3", "x+y"]).is_err());
    }

    #[test]
    fn listing_variables_skips_evaluation() {
        assert_eq!(output(&["-l", "b+a*b/0"]).unwrap(), ["b", "a"]);
        assert_eq!(output(&["-l", "1/0"]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn tokens_tree_and_precision() {
        assert_eq!(output(&["-t", "-p", "2", "1/3"]).unwrap(),
                   ["Number : 1", "Divide : /", "Number : 3", "0.33"]);
        assert_eq!(output(&["-T", "cos(0)"]).unwrap(), ["Call(cos)\n└─ Constant(0.0)", "1"]);
    }
}
