//! The symbols compiled code links against. Everything exported here
//! is `extern "C"` and takes the tagged word by value, so nothing on
//! this boundary may panic or unwind.

use std::io::{self, Write};

use crate::value::{FatVal, Value};

fn write_result(out: &mut impl Write, value: Value) -> io::Result<()> {
    match value.classify() {
        // No output for void, and none for a word the tag tests do
        // not recognize either.
        FatVal::Void | FatVal::Unknown(_) => Ok(()),
        val => writeln!(out, "{}", val),
    }
}

fn write_char(out: &mut impl Write, value: Value) -> io::Result<()> {
    match value.classify() {
        FatVal::Char(char) => write!(out, "{}", char),
        // Only the compiler calls this, and only on char words.
        _ => error(),
    }
}

/// Prints the program's result word as one line on stdout, or as no
/// output at all for void.
#[no_mangle]
pub extern "C" fn print_result(value: Value) {
    let stdout = io::stdout();
    let _ = write_result(&mut stdout.lock(), value);
}

/// Prints a char word as its reader literal, without a newline.
#[no_mangle]
pub extern "C" fn print_char(value: Value) {
    let stdout = io::stdout();
    let _ = write_char(&mut stdout.lock(), value);
}

/// Process-level abort for fatal runtime errors. `libc::exit` rather
/// than a panic: unwinding must never cross back into compiled code.
#[no_mangle]
pub extern "C" fn error() -> ! {
    println!("err");
    unsafe { libc::exit(1) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::tagged::Tagged;
    use crate::value::{Bool, Char, Eof, Int, Void};

    fn result_of(value: Value) -> String {
        let mut out = Vec::new();
        write_result(&mut out, value).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_integers() {
        assert_eq!(result_of(Int(42).tag()), "42\n");
        assert_eq!(result_of(Int(-7).tag()), "-7\n");
    }

    #[test]
    fn prints_chars_with_newline() {
        assert_eq!(result_of(Char('a' as u32).tag()), "#\\a\n");
    }

    #[test]
    fn prints_sentinels() {
        assert_eq!(result_of(Bool::True.tag()), "#t\n");
        assert_eq!(result_of(Bool::False.tag()), "#f\n");
        assert_eq!(result_of(Eof.tag()), "#<eof>\n");
    }

    #[test]
    fn void_prints_nothing() {
        assert_eq!(result_of(Void.tag()), "");
    }

    #[test]
    fn unrecognized_word_prints_nothing() {
        assert_eq!(result_of(Value::new(0b1_0011)), "");
    }

    #[test]
    fn char_printer_has_no_newline() {
        let mut out = Vec::new();
        write_char(&mut out, Char('q' as u32).tag()).unwrap();
        assert_eq!(out, b"#\\q");
    }
}
