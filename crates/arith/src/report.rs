use std::io::Write;

use tracing::debug;

use crate::{
    arithmetic::{checked_add, checked_factorial, checked_multiply, to_index},
    array::{checked_sum, format_array},
    errors::DemoError,
    fibonacci::fibonacci,
};

/// Writes the header and `fib(i)` for every `i` in `0..=bound`.
pub fn write_fibonacci_sequence<W: Write>(out: &mut W, bound: u32) -> Result<(), DemoError> {
    debug!(bound, "writing fibonacci sequence");

    writeln!(out, "Fibonacci sequence up to {bound}:")?;
    for i in 0..=bound {
        writeln!(out, "fib({i}) = {}", fibonacci(i))?;
    }
    Ok(())
}

/// Writes the addition, multiplication and factorial lines for `x` and `y`.
///
/// The first two lines are written before the factorial is attempted, so a
/// negative `x` leaves them in `out` and returns [`DemoError::NegativeInput`].
pub fn write_math_summary<W: Write>(out: &mut W, x: i32, y: i32) -> Result<(), DemoError> {
    debug!(x, y, "writing math summary");

    writeln!(out, "Addition: {x} + {y} = {}", checked_add(x, y)?)?;
    writeln!(out, "Multiplication: {x} * {y} = {}", checked_multiply(x, y)?)?;

    let n = to_index(x)?;
    writeln!(out, "Factorial of {x} = {}", checked_factorial(n)?)?;
    Ok(())
}

pub fn write_array_summary<W: Write>(out: &mut W, values: &[i32]) -> Result<(), DemoError> {
    debug!(len = values.len(), "writing array summary");

    writeln!(out, "Array: {}", format_array(values))?;
    writeln!(out, "Sum: {}", checked_sum(values)?)?;
    Ok(())
}
