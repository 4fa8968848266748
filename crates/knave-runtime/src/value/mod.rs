//! This module describes the values that the knave runtime receives
//! from compiled code. [Value] uses an immediate tagging scheme: the
//! low bits of a 64 bit word say which type it is and the remaining
//! bits hold the payload.

pub mod display;
pub mod tagged;

pub const INT_SHIFT: u64 = 1;
pub const INT_TYPE_MASK: u64 = 0b01;
pub const INT_TYPE_TAG: u64 = 0b00;

pub const CHAR_SHIFT: u64 = 2;
pub const CHAR_TYPE_MASK: u64 = 0b11;
pub const CHAR_TYPE_TAG: u64 = 0b01;

pub const VAL_TRUE: u64 = 0b0011;
pub const VAL_FALSE: u64 = 0b0111;
pub const VAL_EOF: u64 = 0b1011;
pub const VAL_VOID: u64 = 0b1111;

/// A raw tagged word, exactly as it crosses the boundary from
/// compiled code. These constants are a fixed ABI shared with the
/// compiler: the bit layout here and the bit layout the code
/// generator emits must agree or every printed result is garbage.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Value(pub(crate) u64);

/// A 63 bit signed integer, stored shifted left by [INT_SHIFT].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Int(pub i64);

/// A Unicode scalar value, stored shifted left by [CHAR_SHIFT].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Char(pub u32);

/// A simple boolean.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bool {
    False,
    True,
}

/// The end-of-file object.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Eof;

/// The result of an expression evaluated only for effect. Printing
/// it produces no output at all.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Void;

/// The decoded form of a [Value], easier to work with on the rust
/// side than the raw bits.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FatVal {
    Int(Int),
    Char(Char),
    Bool(Bool),
    Eof,
    Void,
    /// A word matching no known tag class. A correct compiler never
    /// produces one; surfacing it keeps an ABI mismatch visible
    /// instead of folding it into [FatVal::Void].
    Unknown(u64),
}

impl Value {
    pub fn new(bits: u64) -> Self {
        Value(bits)
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    /// Decodes the tag bits of the word. The order of the tests is
    /// part of the ABI: the integer mask first, then the character
    /// mask, then the four exact-match sentinels. For well-formed
    /// words the classes cannot overlap, since every sentinel keeps
    /// `0b11` in its low bits and so fails both mask tests.
    pub fn classify(self) -> FatVal {
        if self.0 & INT_TYPE_MASK == INT_TYPE_TAG {
            // Arithmetic shift, so the sign of the payload survives.
            FatVal::Int(Int((self.0 as i64) >> INT_SHIFT))
        } else if self.0 & CHAR_TYPE_MASK == CHAR_TYPE_TAG {
            FatVal::Char(Char((self.0 >> CHAR_SHIFT) as u32))
        } else {
            match self.0 {
                VAL_TRUE => FatVal::Bool(Bool::True),
                VAL_FALSE => FatVal::Bool(Bool::False),
                VAL_EOF => FatVal::Eof,
                VAL_VOID => FatVal::Void,
                bits => FatVal::Unknown(bits),
            }
        }
    }
}
