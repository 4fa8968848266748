use super::*;

/// The encoding direction of the value ABI. Compiled code is the
/// only producer of tagged words at run time, but the tests and the
/// word inspector need to build well-formed words too, and keeping
/// both directions next to each other makes a layout change a
/// one-file affair.
pub trait Tagged {
    fn tag(self) -> Value;
}

impl Tagged for Int {
    fn tag(self) -> Value {
        Value(((self.0 as u64) << INT_SHIFT) | INT_TYPE_TAG)
    }
}

impl Tagged for Char {
    fn tag(self) -> Value {
        Value(((self.0 as u64) << CHAR_SHIFT) | CHAR_TYPE_TAG)
    }
}

impl Tagged for Bool {
    fn tag(self) -> Value {
        match self {
            Bool::True => Value(VAL_TRUE),
            Bool::False => Value(VAL_FALSE),
        }
    }
}

impl Tagged for Eof {
    fn tag(self) -> Value {
        Value(VAL_EOF)
    }
}

impl Tagged for Void {
    fn tag(self) -> Value {
        Value(VAL_VOID)
    }
}
