//! Problems that abort the invocation. There is no recovery path for any of these: each one is
//! reported once on stderr and the process exits with a non-zero status.

use std::fmt::Display;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Problem {
    /// Free-form message, mostly carrying context attached to I/O failures.
    Message(String),
    /// The argument list was completely empty. Rendered as the usage line, not an error line.
    MissingArguments,
    /// A token started with `-` but matched none of the recognized option forms.
    UnrecognizedOption(String),
    /// An `=`-joined option form with nothing after the `=`.
    MissingOptionValue { option: &'static str },
    /// An option value that is not fully numeric base-10.
    InvalidInteger {
        option: &'static str,
        value: String,
    },
    /// An option value that parsed, but is below the minimum of 1.
    OutOfRange {
        option: &'static str,
        value: String,
    },
    /// A checked add or multiply exceeded the range of i64.
    ArithmeticOverflow,
}

impl Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Message(message) => write!(f, "{message}"),
            Problem::MissingArguments => write!(f, "Missing arguments"),
            Problem::UnrecognizedOption(token) => write!(f, "Unexpected argument '{token}'"),
            Problem::MissingOptionValue { option } => {
                write!(f, "Option {option} requires an integer argument")
            }
            Problem::InvalidInteger { option, value } => {
                write!(f, "Argument '{value}' to {option} is not a valid integer")
            }
            Problem::OutOfRange { option, value } => {
                write!(f, "Argument '{value}' to {option} must be a positive integer")
            }
            Problem::ArithmeticOverflow => write!(f, "Arithmetic overflow while combining values"),
        }
    }
}

impl From<String> for Problem {
    fn from(value: String) -> Self {
        Problem::Message(value)
    }
}

impl From<anyhow::Error> for Problem {
    fn from(error: anyhow::Error) -> Self {
        Problem::Message(format!("{error:#}"))
    }
}
