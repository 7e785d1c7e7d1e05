//! The core computation: sums the byte values of the subject string and combines the sum with
//! the optional add/mult parameters.

use crate::args::ParsedOptions;
use crate::problem::Problem;
use log::debug;
use std::io::Write;

/// All the numbers a run produces. `combined` is present iff `--add` was supplied; `result` is
/// present iff `--mult` was supplied and multiplies `combined` (or the plain sum when there is
/// no `combined`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Evaluation {
    pub(crate) sum: i64,
    pub(crate) combined: Option<i64>,
    pub(crate) result: Option<i64>,
}

impl Evaluation {
    /// The value `--mult` multiplies: the combined value when `--add` was given, the sum
    /// otherwise.
    fn multiplicand(&self) -> i64 {
        self.combined.unwrap_or(self.sum)
    }
}

/// All arithmetic is checked. Overflow aborts the run rather than wrapping.
pub(crate) fn evaluate(subject: &str, options: &ParsedOptions) -> Result<Evaluation, Problem> {
    let mut sum: i64 = 0;
    for byte in subject.bytes() {
        sum = sum
            .checked_add(i64::from(byte))
            .ok_or(Problem::ArithmeticOverflow)?;
    }
    debug!("summed {} bytes to {sum}", subject.len());
    let combined = match options.add {
        Some(add) => Some(sum.checked_add(add).ok_or(Problem::ArithmeticOverflow)?),
        None => None,
    };
    let result = match options.mult {
        Some(mult) => Some(
            mult.checked_mul(combined.unwrap_or(sum))
                .ok_or(Problem::ArithmeticOverflow)?,
        ),
        None => None,
    };
    Ok(Evaluation {
        sum,
        combined,
        result,
    })
}

/// Writes the report for a completed evaluation: the echoed subject, one line per byte, the
/// sum and the requested combinations.
pub(crate) fn render(
    out: &mut impl Write,
    subject: &str,
    options: &ParsedOptions,
    evaluation: &Evaluation,
) -> std::io::Result<()> {
    writeln!(out, "argv[] = {subject}")?;
    writeln!(out)?;
    for byte in subject.bytes() {
        writeln!(out, "{} = {byte}", char::from(byte))?;
    }
    writeln!(out)?;
    writeln!(out, "ASCII SUM: {}", evaluation.sum)?;
    if let (Some(add), Some(combined)) = (options.add, evaluation.combined) {
        writeln!(out, "ADD: {} + {add} = {combined}", evaluation.sum)?;
    }
    if let (Some(mult), Some(result)) = (options.mult, evaluation.result) {
        writeln!(out, "MULT: {mult} * {} = {result}", evaluation.multiplicand())?;
    }
    Ok(())
}
