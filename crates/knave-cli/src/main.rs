//! Word inspector for the knave runtime: feed it raw 64 bit words
//! and it shows how the runtime classifies and prints each one.
//! Handy when the code generator's tagging looks suspicious.

use std::io::{self, BufRead};

use clap::Parser;
use knave_runtime::value::{FatVal, Value};
use miette::IntoDiagnostic;
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Raw 64 bit words, hex with an `0x` prefix or decimal.
    /// With no words given, reads one word per line from stdin.
    words: Vec<String>,
}

pub type Result<T, E = ParseWordError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ParseWordError {
    #[error("'{0}' is not a 64 bit word")]
    NotAWord(String),
}

fn parse_word(input: &str) -> Result<Value> {
    let bits = if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if input.starts_with('-') {
        // A negative decimal means the two's complement word.
        input.parse::<i64>().ok().map(|n| n as u64)
    } else {
        input.parse::<u64>().ok()
    };

    bits.map(Value::new)
        .ok_or_else(|| ParseWordError::NotAWord(input.to_string()))
}

fn describe(value: Value) -> String {
    match value.classify() {
        FatVal::Int(int) => format!("int      {}", int),
        FatVal::Char(char) => format!("char     {}", char),
        FatVal::Bool(bool) => format!("bool     {}", bool),
        FatVal::Eof => "eof      #<eof>".to_string(),
        FatVal::Void => "void".to_string(),
        FatVal::Unknown(_) => "unknown".to_string(),
    }
}

fn inspect(value: Value) {
    println!("{:#018x}  {}", value.bits(), describe(value));
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    if args.words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.into_diagnostic()?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            inspect(parse_word(word).into_diagnostic()?);
        }
        return Ok(());
    }

    for word in &args.words {
        inspect(parse_word(word).into_diagnostic()?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use knave_runtime::value::tagged::Tagged;
    use knave_runtime::value::{Int, VAL_TRUE};

    #[test]
    fn parses_hex_and_decimal() {
        assert_eq!(parse_word("0x55").unwrap().bits(), 0x55);
        assert_eq!(parse_word("0X0F").unwrap().bits(), 0x0F);
        assert_eq!(parse_word("84").unwrap().bits(), 84);
        assert_eq!(parse_word("-14").unwrap().bits(), (-14i64) as u64);
    }

    #[test]
    fn rejects_junk() {
        assert!(parse_word("0x").is_err());
        assert!(parse_word("forty-two").is_err());
        assert!(parse_word("").is_err());
    }

    #[test]
    fn describes_words() {
        assert_eq!(describe(Int(42).tag()), "int      42");
        assert_eq!(describe(Value::new(VAL_TRUE)), "bool     #t");
        assert_eq!(describe(Value::new(0b1_0011)), "unknown");
    }
}
