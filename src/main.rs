use std::io::{self, BufRead, Write};

use clap::Parser;
use evalo::evaluate;

/// evalo evaluates integer arithmetic expressions built from `+`, `-`, `*`,
/// `/` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// An expression to evaluate directly. Without it, evalo reads an
    /// expression count and then one expression per line from standard
    /// input.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(expression) = args.expression {
        match evaluate(&expression) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
    } else if let Err(e) = run_batch() {
        eprintln!("Failed to read input: {e}");
        std::process::exit(1);
    }
}

/// Runs the batch protocol over standard input.
///
/// The first line carries the number of expressions; each following line
/// carries one expression. Every expression is evaluated independently:
/// a success prints its integer value, a failure of any kind prints the
/// literal string `ERROR`. An unparsable count reads as zero.
fn run_batch() -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("Enter number of expressions: ");
    io::stdout().flush()?;

    let count = match lines.next() {
        Some(line) => line?.trim().parse::<usize>().unwrap_or(0),
        None => return Ok(()),
    };

    for _ in 0..count {
        print!("Enter expression: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match evaluate(&line?) {
            Ok(result) => println!("{result}"),
            Err(_) => println!("ERROR"),
        }
    }

    Ok(())
}
