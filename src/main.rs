use std::io::BufRead;
use std::path::PathBuf;

use clap::Parser;

use truthtable_rs::format::TableFormatter;
use truthtable_rs::parser::parse;
use truthtable_rs::table::{TableBuilder, MAX_VARIABLES};
use truthtable_rs::Error;

const GRAMMAR_HELP: &str = "\
GRAMMAR:
    expr    := iff
    iff     := implies ('<->' implies)*
    implies := xor ('->' xor)*
    xor     := or ('^' or)*
    or      := and ('||' and)*
    and     := unary ('&&' unary)*
    unary   := '!' unary | primary
    primary := VARIABLE | '(' expr ')'

    VARIABLE is a letter followed by letters or digits, case-sensitive.
    Operator spellings are symbolic only: ! && || ^ -> <->
    Binary operators are left-associative; precedence from tightest to
    loosest is ! && || ^ -> <->. Whitespace is insignificant.";

#[derive(Debug, Parser)]
#[command(
    name = "truthtab",
    version,
    about = "Prints the complete truth table for a boolean expression",
    after_help = GRAMMAR_HELP
)]
struct Args {
    /// Boolean expression to tabulate; reads one line from stdin when omitted.
    expression: Option<String>,

    /// Read the expression from a file instead.
    #[arg(short, long, conflicts_with = "expression")]
    file: Option<PathBuf>,

    /// Maximum number of distinct variables allowed.
    #[arg(long, default_value_t = MAX_VARIABLES)]
    max_vars: usize,

    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let level = match args.verbose {
        0 => simplelog::LevelFilter::Warn,
        1 => simplelog::LevelFilter::Info,
        2 => simplelog::LevelFilter::Debug,
        _ => simplelog::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let input = read_input(&args)?;
    let text = input.trim();

    match run(text, args.max_vars) {
        Ok(table) => {
            print!("{}", table);
            Ok(())
        }
        Err(err) => {
            report(text, &err);
            std::process::exit(1);
        }
    }
}

fn read_input(args: &Args) -> color_eyre::Result<String> {
    if let Some(expression) = &args.expression {
        Ok(expression.clone())
    } else if let Some(path) = &args.file {
        Ok(std::fs::read_to_string(path)?)
    } else {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

fn run(text: &str, max_vars: usize) -> Result<String, Error> {
    let (expr, vars) = parse(text)?;
    let rows = TableBuilder::with_max_vars(max_vars).build(&expr, &vars)?;
    Ok(TableFormatter::new(&vars, text).format(&rows))
}

/// Prints the error with a caret under the offending column.
fn report(text: &str, err: &Error) {
    eprintln!("error: {}", err);
    if let Some(position) = err.position() {
        eprintln!("  {}", text);
        eprintln!("  {}^", " ".repeat(position));
    }
}
