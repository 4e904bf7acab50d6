use crate::errors::DemoError;

/// Returns the `n`-th Fibonacci number using naive double recursion.
///
/// `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n - 1) + fib(n - 2)`. Runs in
/// exponential time with no memoization. Additions wrap on overflow (the first
/// wrapped value is at `n = 94`), so debug and release builds agree.
pub fn fibonacci(n: u32) -> u64 {
    if n <= 1 {
        n as u64
    } else {
        fibonacci(n - 1).wrapping_add(fibonacci(n - 2))
    }
}

/// Iterative form of [`fibonacci`]. Same results, same wrapping, O(n).
pub fn fibonacci_iter(n: u32) -> u64 {
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 0..n {
        let next = prev.wrapping_add(curr);
        prev = curr;
        curr = next;
    }
    prev
}

/// Iterative Fibonacci that fails instead of wrapping.
pub fn checked_fibonacci(n: u32) -> Result<u64, DemoError> {
    let (mut prev, mut curr) = (0u64, 1u64);
    for i in 0..n {
        // curr is only read again if another step follows
        let next = match prev.checked_add(curr) {
            Some(v) => v,
            None if i + 1 == n => 0,
            None => return Err(DemoError::overflow("fibonacci")),
        };
        prev = curr;
        curr = next;
    }
    Ok(prev)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fibonacci(0), 0);
        assert_eq!(fibonacci(1), 1);
    }

    #[test]
    fn tenth_is_55() {
        assert_eq!(fibonacci(10), 55);
    }

    #[test]
    fn recurrence_holds_up_to_ten() {
        for i in 2..=10 {
            assert_eq!(fibonacci(i), fibonacci(i - 1) + fibonacci(i - 2), "fib({i})");
        }
    }

    #[test]
    fn iterative_matches_recursive() {
        for i in 0..=25 {
            assert_eq!(fibonacci_iter(i), fibonacci(i), "fib({i})");
        }
    }

    #[test]
    fn checked_succeeds_at_largest_u64_term() {
        assert_eq!(checked_fibonacci(93).unwrap(), 12_200_160_415_121_876_738);
        assert_eq!(fibonacci_iter(93), 12_200_160_415_121_876_738);
    }

    #[test]
    fn checked_overflows_past_u64() {
        let err = checked_fibonacci(94).unwrap_err();
        assert!(matches!(err, DemoError::Overflow { operation: "fibonacci" }));
    }

    #[test]
    fn iterative_wraps_past_u64() {
        let expected = fibonacci_iter(93).wrapping_add(fibonacci_iter(92));
        assert_eq!(fibonacci_iter(94), expected);
    }
}
