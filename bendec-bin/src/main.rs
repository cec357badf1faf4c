use anyhow::Result;
use bendec::init_subscriber;
use bendec::translate;
use bendec::ConsoleReporter;
use clap::Args;
use clap::Command;
use std::io::Read;
use std::process::ExitCode;

/// A command line tool that translates Bencode into a readable tree
#[derive(Args, Debug)]
#[command(version, about)]
struct BendecArgs {
    /// The input file (- is interpreted as stdin)
    #[arg(default_value = "-")]
    input: String,
    /// Print debug information
    #[arg(long, name = "debug")]
    debug: bool,
}

fn cli() -> Command {
    let cli = Command::new("bendec");
    BendecArgs::augment_args(cli)
}

fn init_tracing(level: tracing::Level) {
    match init_subscriber(level) {
        Ok(_) => (),
        Err(_e) => (),
    }
}

/// Translate the source and pretty print one top-level value per line.
fn translate_input(src: &str) -> Result<String> {
    let mut reporter = ConsoleReporter;
    let expressions = translate(src.as_bytes(), &mut reporter)?;
    let lines = expressions
        .iter()
        .map(|expression| expression.to_string())
        .collect::<Vec<String>>();
    Ok(lines.join("\n"))
}

fn main() -> ExitCode {
    let cli = cli();
    let matches = cli.get_matches();
    if matches.get_flag("debug") {
        init_tracing(tracing::Level::DEBUG);
    } else {
        init_tracing(tracing::Level::INFO);
    }

    let input = matches.get_one::<String>("input").unwrap();

    let src = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).unwrap();
        buffer
    } else {
        std::fs::read_to_string(input).unwrap()
    };

    match translate_input(&src) {
        Ok(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        // The diagnostic was already printed by the console reporter.
        Err(_) => ExitCode::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help() {
        let cli = cli();
        let result = cli.try_get_matches_from(vec!["bendec", "--help"]);
        let err = match result {
            Ok(_) => panic!("Expected an error"),
            Err(e) => e,
        };
        let text = err.to_string();
        assert!(text.contains("Usage: bendec"));
        assert!(text.contains("translates Bencode"));
    }

    #[test]
    fn test_invalid_args() {
        let cli = cli();
        let result = cli.try_get_matches_from(vec!["bendec", "--invalid-flag"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_translate_input() {
        let result = translate_input("d4:listl1:a1:bee i7e").unwrap();
        assert_eq!(result, "{\"list\": [\"a\", \"b\"]}\n7");

        assert!(translate_input("x").is_err());
    }
}
