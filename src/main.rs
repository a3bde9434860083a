//! CLI entry point for the `stratum` tool.
//!
//! Each argument is parsed as an arithmetic expression. The tool prints the
//! S-expression and value of every expression and exits with a failure
//! status if any argument fails to parse or evaluate.

use std::io::{self, Write};
use std::process::ExitCode;

use stratum::arithmetic::parse_expression;

fn main() -> ExitCode {
    let sources: Vec<String> = std::env::args().skip(1).collect();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    if sources.is_empty() {
        let _ = writeln!(stderr, "usage: stratum <expression>...");
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    for src in &sources {
        match parse_expression(src) {
            Ok(expr) => match expr.evaluate() {
                Ok(value) => {
                    let _ = writeln!(stdout, "{} = {value}", expr.to_sexpr());
                }
                Err(err) => {
                    let _ = writeln!(stderr, "{src}: {err}");
                    status = ExitCode::FAILURE;
                }
            },
            Err(errors) => {
                for err in errors {
                    let _ = writeln!(stderr, "{src}: {err}");
                }
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
