//! Scans the option-prefixed arguments at the front of the argument list and selects the
//! subject string the evaluation runs on.

use crate::problem::Problem;
use log::debug;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedOptions {
    pub(crate) add: Option<i64>,
    pub(crate) mult: Option<i64>,
}

/// Outcome of a successful scan: the parsed options and the subject, which is the first
/// argument that doesn't begin with `-`. Anything after the subject is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub(crate) options: ParsedOptions,
    pub(crate) subject: Option<String>,
}

/// Scans `args` strictly left to right, one pass. Each recognized form consumes exactly one
/// argument slot; values are always `=`-joined, so there is no lookahead. A `--` end-of-options
/// marker is deliberately not supported.
pub(crate) fn scan(args: &[String]) -> Result<Invocation, Problem> {
    if args.is_empty() {
        return Err(Problem::MissingArguments);
    }
    let mut options = ParsedOptions::default();
    let mut subject = None;
    for arg in args {
        if !arg.starts_with('-') {
            debug!("breaking out of option-parsing loop at '{arg}'");
            subject = Some(arg.clone());
            break;
        }
        if arg == "--sum" {
            // Reserved flag. Recognized, consumes its slot, carries no behaviour yet.
            continue;
        }
        if arg == "--verbose" {
            // Already applied to the log level in main, before the scanner ran. Recognized
            // here only to consume its slot.
            continue;
        }
        if let Some(value) = arg.strip_prefix("--add=") {
            options.add = Some(parse_positive_int("--add", value)?);
            debug!("parsed --add option argument add = {:?}", options.add);
            continue;
        }
        if let Some(value) = arg.strip_prefix("--mult=") {
            options.mult = Some(parse_positive_int("--mult", value)?);
            debug!("parsed --mult option argument mult = {:?}", options.mult);
            continue;
        }
        return Err(Problem::UnrecognizedOption(arg.clone()));
    }
    Ok(Invocation { options, subject })
}

/// Full-string base-10 parse. Trailing non-digit text is invalid rather than ignored.
fn parse_positive_int(option: &'static str, value: &str) -> Result<i64, Problem> {
    if value.is_empty() {
        return Err(Problem::MissingOptionValue { option });
    }
    let parsed: i64 = value.parse().map_err(|_| Problem::InvalidInteger {
        option,
        value: value.to_owned(),
    })?;
    if parsed < 1 {
        return Err(Problem::OutOfRange {
            option,
            value: value.to_owned(),
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_args(args: &[&str]) -> Result<Invocation, Problem> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        scan(&args)
    }

    #[test]
    fn empty_argument_list() {
        assert_eq!(scan_args(&[]), Err(Problem::MissingArguments));
    }

    #[test]
    fn subject_only() {
        let invocation = scan_args(&["hello"]).unwrap();
        assert_eq!(invocation.subject.as_deref(), Some("hello"));
        assert_eq!(invocation.options, ParsedOptions::default());
    }

    #[test]
    fn add_and_mult() {
        let invocation = scan_args(&["--add=5", "--mult=3", "hello"]).unwrap();
        assert_eq!(invocation.options.add, Some(5));
        assert_eq!(invocation.options.mult, Some(3));
        assert_eq!(invocation.subject.as_deref(), Some("hello"));
    }

    #[test]
    fn options_without_subject() {
        let invocation = scan_args(&["--add=5"]).unwrap();
        assert_eq!(invocation.subject, None);
        assert_eq!(invocation.options.add, Some(5));
    }

    #[test]
    fn sum_flag_is_recognized_and_inert() {
        let invocation = scan_args(&["--sum", "hello"]).unwrap();
        assert_eq!(invocation.subject.as_deref(), Some("hello"));
        assert_eq!(invocation.options, ParsedOptions::default());
    }

    #[test]
    fn verbose_flag_consumes_its_slot() {
        let invocation = scan_args(&["--verbose", "hello"]).unwrap();
        assert_eq!(invocation.subject.as_deref(), Some("hello"));
        assert_eq!(invocation.options, ParsedOptions::default());
    }

    #[test]
    fn subject_ends_option_scanning() {
        // Option-shaped tokens after the subject are ignored, not parsed.
        let invocation = scan_args(&["hello", "--add=2"]).unwrap();
        assert_eq!(invocation.subject.as_deref(), Some("hello"));
        assert_eq!(invocation.options.add, None);
    }

    #[test]
    fn unrecognized_option() {
        assert_eq!(
            scan_args(&["--foo", "hello"]),
            Err(Problem::UnrecognizedOption("--foo".to_owned()))
        );
    }

    #[test]
    fn sum_flag_variants_are_unrecognized() {
        assert_eq!(
            scan_args(&["--sum=1", "hello"]),
            Err(Problem::UnrecognizedOption("--sum=1".to_owned()))
        );
        assert_eq!(
            scan_args(&["--summary", "hello"]),
            Err(Problem::UnrecognizedOption("--summary".to_owned()))
        );
    }

    #[track_caller]
    fn check_rejected(arg: &str, expected: Problem) {
        assert_eq!(scan_args(&[arg, "hello"]), Err(expected));
    }

    #[test]
    fn non_numeric_value() {
        check_rejected(
            "--add=xyz",
            Problem::InvalidInteger {
                option: "--add",
                value: "xyz".to_owned(),
            },
        );
        // A valid leading integer isn't enough, the whole value must be numeric.
        check_rejected(
            "--mult=12x",
            Problem::InvalidInteger {
                option: "--mult",
                value: "12x".to_owned(),
            },
        );
    }

    #[test]
    fn value_below_minimum() {
        check_rejected(
            "--add=0",
            Problem::OutOfRange {
                option: "--add",
                value: "0".to_owned(),
            },
        );
        check_rejected(
            "--add=-1",
            Problem::OutOfRange {
                option: "--add",
                value: "-1".to_owned(),
            },
        );
        check_rejected(
            "--mult=0",
            Problem::OutOfRange {
                option: "--mult",
                value: "0".to_owned(),
            },
        );
    }

    #[test]
    fn empty_value() {
        check_rejected("--add=", Problem::MissingOptionValue { option: "--add" });
        check_rejected("--mult=", Problem::MissingOptionValue { option: "--mult" });
    }
}
