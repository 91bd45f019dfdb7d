use core::fmt;

/// Error type for the library.
///
/// Every variant describes a format failure: the only fallible operation in
/// this crate is constructing a [`Decimal`](crate::Decimal) from a string.
/// Arithmetic and comparison are total over well-formed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The input string was empty.
    Empty,
    /// The input contained a character outside `-`, `.` and the ASCII
    /// digits, or a sign somewhere other than the front.
    InvalidCharacter(char),
    /// The input had no integer digits: `"-"`, `"."` and `".5"` are all
    /// rejected since the grammar requires a digit before the point.
    MissingDigits,
    /// The input contained more than one decimal point.
    TwoDecimalPoints,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => f.pad("Invalid decimal: empty"),
            Self::InvalidCharacter(c) => write!(f, "Invalid decimal: unknown character '{c}'"),
            Self::MissingDigits => f.pad("Invalid decimal: no digits found"),
            Self::TwoDecimalPoints => f.pad("Invalid decimal: two decimal points"),
        }
    }
}
