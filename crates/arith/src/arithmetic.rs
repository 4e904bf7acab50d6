use crate::errors::DemoError;

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// `n!` by naive recursion. Returns 1 for `n <= 1`.
///
/// There is no overflow guard: multiplication wraps once the result leaves
/// `u64` (from `n = 21` on). Use [`checked_factorial`] when that matters.
pub fn factorial(n: u32) -> u64 {
    if n <= 1 {
        1
    } else {
        (n as u64).wrapping_mul(factorial(n - 1))
    }
}

pub fn checked_add(a: i32, b: i32) -> Result<i32, DemoError> {
    a.checked_add(b).ok_or(DemoError::overflow("addition"))
}

pub fn checked_multiply(a: i32, b: i32) -> Result<i32, DemoError> {
    a.checked_mul(b).ok_or(DemoError::overflow("multiplication"))
}

/// Iterative `n!` that fails instead of wrapping. Stops at the first
/// overflowing step, so large `n` costs at most 21 multiplications.
pub fn checked_factorial(n: u32) -> Result<u64, DemoError> {
    (2..=u64::from(n))
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or(DemoError::overflow("factorial"))
}

/// Converts a signed operand to a factorial input, rejecting negatives.
pub fn to_index(value: i32) -> Result<u32, DemoError> {
    u32::try_from(value).map_err(|_| DemoError::NegativeInput(value.into()))
}
