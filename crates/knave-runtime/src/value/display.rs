use std::fmt::Display;

use super::*;

impl Display for Int {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Characters print as reader literals, with the named forms the
/// reader accepts for the non-graphic ones. A payload that is not a
/// Unicode scalar value falls back to the hex form.
impl Display for Char {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match char::from_u32(self.0) {
            Some('\0') => write!(f, "#\\nul"),
            Some('\x08') => write!(f, "#\\backspace"),
            Some('\t') => write!(f, "#\\tab"),
            Some('\n') => write!(f, "#\\newline"),
            Some('\r') => write!(f, "#\\return"),
            Some('\x1b') => write!(f, "#\\escape"),
            Some(' ') => write!(f, "#\\space"),
            Some('\x7f') => write!(f, "#\\delete"),
            Some(c) if !c.is_control() => write!(f, "#\\{}", c),
            _ => write!(f, "#\\u{:04X}", self.0),
        }
    }
}

impl Display for Bool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bool::True => write!(f, "#t"),
            Bool::False => write!(f, "#f"),
        }
    }
}

impl Display for Eof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<eof>")
    }
}

impl Display for FatVal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FatVal::Int(int) => write!(f, "{}", int),
            FatVal::Char(char) => write!(f, "{}", char),
            FatVal::Bool(bool) => write!(f, "{}", bool),
            FatVal::Eof => write!(f, "{}", Eof),
            // Void and unrecognized words render as nothing; the
            // printer decides whether a newline is warranted.
            FatVal::Void | FatVal::Unknown(_) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_literals() {
        assert_eq!(Char('a' as u32).to_string(), "#\\a");
        assert_eq!(Char('λ' as u32).to_string(), "#\\λ");
        assert_eq!(Char('\n' as u32).to_string(), "#\\newline");
        assert_eq!(Char(' ' as u32).to_string(), "#\\space");
        assert_eq!(Char('\t' as u32).to_string(), "#\\tab");
        // A lone surrogate is not a scalar value.
        assert_eq!(Char(0xD800).to_string(), "#\\uD800");
    }

    #[test]
    fn sentinel_literals() {
        assert_eq!(Bool::True.to_string(), "#t");
        assert_eq!(Bool::False.to_string(), "#f");
        assert_eq!(Eof.to_string(), "#<eof>");
    }
}
