//! The two Fibonacci strategies that are compared against each other.
//!
//! Both use the zero-indexed convention F(0) = 0, F(1) = 1.

use num_bigint::BigUint;

/// Largest index whose Fibonacci number still fits into a `u128`.
///
/// Naive recursion accumulates in `u128`, any index above this is rejected
/// by the runner.
pub const NAIVE_MAX_INDEX: u64 = 186;

/// Value and call count of a naive recursive run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NaiveOutcome {
    /// F(n)
    pub value: u128,
    /// Number of times the recursive body was entered, base cases included.
    pub calls: u128,
}

impl NaiveOutcome {
    /// The value as arbitrary precision integer.
    pub fn value_big(&self) -> BigUint {
        BigUint::from(self.value)
    }
}

/// Computes F(n) with unmemoized double recursion.
///
/// Every invocation counts itself once before branching, and the counts of
/// both subtrees are summed on the way back up. Runtime is proportional to
/// F(n) and the stack depth is proportional to n.
///
/// Callers must keep `n <= NAIVE_MAX_INDEX`, otherwise the addition overflows.
///
/// # Examples
/// ```
/// use fibbench::fib::naive_recursive;
/// let outcome = naive_recursive(10);
/// assert_eq!(outcome.value, 55);
/// assert_eq!(outcome.calls, 177);
/// ```
pub fn naive_recursive(n: u32) -> NaiveOutcome {
    if n <= 1 {
        return NaiveOutcome {
            value: n as u128,
            calls: 1,
        };
    }
    let a = naive_recursive(n - 1);
    let b = naive_recursive(n - 2);
    NaiveOutcome {
        value: a.value + b.value,
        calls: 1 + a.calls + b.calls,
    }
}

/// Computes F(n) bottom-up, filling a table of `n + 1` entries in increasing order.
///
/// # Examples
/// ```
/// use fibbench::fib::tabulated;
/// assert_eq!(tabulated(10), 55u32.into());
/// ```
pub fn tabulated(n: u64) -> BigUint {
    if n == 0 {
        return BigUint::from(0u32);
    }
    let len = n as usize + 1;
    let mut table: Vec<BigUint> = Vec::with_capacity(len);
    table.push(BigUint::from(0u32));
    table.push(BigUint::from(1u32));
    for i in 2..len {
        let next = &table[i - 1] + &table[i - 2];
        table.push(next);
    }
    table.swap_remove(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fib_u128(n: u32) -> u128 {
        let (mut a, mut b) = (0u128, 1u128);
        for _ in 0..n {
            let next = a.wrapping_add(b);
            a = b;
            b = next;
        }
        a
    }

    #[test]
    fn base_cases() {
        assert_eq!(naive_recursive(0).value, 0);
        assert_eq!(naive_recursive(1).value, 1);
        assert_eq!(tabulated(0), BigUint::from(0u32));
        assert_eq!(tabulated(1), BigUint::from(1u32));
    }

    #[test]
    fn strategies_agree_up_to_thirty() {
        for n in 0..=30u32 {
            assert_eq!(
                naive_recursive(n).value_big(),
                tabulated(n as u64),
                "n={n}"
            );
        }
    }

    #[test]
    fn call_count_follows_recurrence() {
        assert_eq!(naive_recursive(0).calls, 1);
        assert_eq!(naive_recursive(1).calls, 1);
        assert_eq!(naive_recursive(2).calls, 3);
        assert_eq!(naive_recursive(5).calls, 15);
        assert_eq!(naive_recursive(10).calls, 177);
        for n in 1..=25u32 {
            assert_eq!(naive_recursive(n).calls, 2 * fib_u128(n + 1) - 1, "n={n}");
        }
    }

    #[test]
    fn tabulated_ten() {
        assert_eq!(tabulated(10), BigUint::from(55u32));
    }

    #[test]
    fn tabulated_beyond_u128() {
        // F(186) is the largest value that fits into a u128
        assert_eq!(tabulated(NAIVE_MAX_INDEX), BigUint::from(fib_u128(186)));
        assert_eq!(
            tabulated(200).to_string(),
            "280571172992510140037611932413038677189525"
        );
    }
}
