//! Instrumented number-theory and bit-manipulation routines.
//!
//! Each routine traces its characteristic loop variable updates with
//! pointer moves, probes with compares and result writes with inserts.
//! Cursor "indices" here carry the current value of the loop variable.

use crate::events::{Cursor, TraceEvent, Traced};

/// Euclid's algorithm: replace `(a, b)` with `(b, a mod b)` until the
/// remainder is zero.
pub fn gcd(a: u64, b: u64) -> Traced<u64> {
    let mut trace = Vec::new();

    let (mut a, mut b) = (a, b);
    trace.push(TraceEvent::MovePointer {
        name: Cursor::A,
        index: Some(a as usize),
    });
    trace.push(TraceEvent::MovePointer {
        name: Cursor::B,
        index: Some(b as usize),
    });
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
        trace.push(TraceEvent::MovePointer {
            name: Cursor::A,
            index: Some(a as usize),
        });
        trace.push(TraceEvent::MovePointer {
            name: Cursor::B,
            index: Some(b as usize),
        });
    }
    trace.push(TraceEvent::Insert {
        index: 0,
        value: a as i64,
    });

    Traced::new(a, trace)
}

/// Least common multiple via `a / gcd(a, b) * b`. The gcd loop's events
/// are kept, followed by the final result write.
pub fn lcm(a: u64, b: u64) -> Traced<u64> {
    let inner = gcd(a, b);
    let mut trace = inner.trace;

    let result = if inner.result == 0 {
        0
    } else {
        a / inner.result * b
    };
    trace.push(TraceEvent::Insert {
        index: 0,
        value: result as i64,
    });

    Traced::new(result, trace)
}

/// Binary exponentiation of `base^exp (mod modulus)`. One `bit` pointer
/// move per exponent bit; the accumulator write is traced whenever a set
/// bit folds the current base power in.
pub fn fast_power(base: u64, exp: u64, modulus: u64) -> Traced<u64> {
    let mut trace = Vec::new();

    if modulus == 0 {
        return Traced::new(0, trace);
    }

    let mut result = 1 % modulus;
    let mut power = base % modulus;
    let mut exp = exp;
    let mut bit = 0usize;
    while exp > 0 {
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Bit,
            index: Some(bit),
        });
        if exp & 1 == 1 {
            result = mul_mod(result, power, modulus);
            trace.push(TraceEvent::Insert {
                index: 0,
                value: result as i64,
            });
        }
        power = mul_mod(power, power, modulus);
        exp >>= 1;
        bit += 1;
    }

    Traced::new(result, trace)
}

fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    (a as u128 * b as u128 % m as u128) as u64
}

/// Trial division primality test, probing divisors up to the square
/// root. `Found` fires when `n` survives every probe.
pub fn is_prime(n: u64) -> Traced<bool> {
    let mut trace = Vec::new();

    if n < 2 {
        return Traced::new(false, trace);
    }

    let mut divisor = 2u64;
    while divisor * divisor <= n {
        trace.push(TraceEvent::Compare {
            i: divisor as usize,
            j: None,
        });
        if n % divisor == 0 {
            return Traced::new(false, trace);
        }
        divisor += 1;
    }
    trace.push(TraceEvent::Found {
        index: Some(n as usize),
        node: None,
    });

    Traced::new(true, trace)
}

/// Sieve of Eratosthenes up to `limit`, inclusive. Composites are marked
/// from `p²` upward; each newly marked composite is an `Insert` carrying
/// the prime that struck it out.
pub fn sieve(limit: u64) -> Traced<Vec<u64>> {
    let mut trace = Vec::new();

    if limit < 2 {
        return Traced::new(Vec::new(), trace);
    }

    let n = limit as usize;
    let mut composite = vec![false; n + 1];
    let mut p = 2usize;
    while p * p <= n {
        if !composite[p] {
            trace.push(TraceEvent::MovePointer {
                name: Cursor::P,
                index: Some(p),
            });
            let mut multiple = p * p;
            while multiple <= n {
                if !composite[multiple] {
                    composite[multiple] = true;
                    trace.push(TraceEvent::Insert {
                        index: multiple,
                        value: p as i64,
                    });
                }
                multiple += p;
            }
        }
        p += 1;
    }

    let primes = (2..=n).filter(|&i| !composite[i]).map(|i| i as u64).collect();
    Traced::new(primes, trace)
}

/// Binomial coefficient C(n, r) by the multiplicative formula. Each
/// factor traces the loop counter and the running product; the product
/// stays exact because `result * (n - i)` is always divisible by `i + 1`.
pub fn binomial(n: u64, r: u64) -> Traced<u64> {
    let mut trace = Vec::new();

    if r > n {
        return Traced::new(0, trace);
    }

    let r = r.min(n - r);
    let mut result: u64 = 1;
    for i in 0..r {
        result = result * (n - i) / (i + 1);
        trace.push(TraceEvent::MovePointer {
            name: Cursor::I,
            index: Some(i as usize),
        });
        trace.push(TraceEvent::Insert {
            index: 0,
            value: result as i64,
        });
    }

    Traced::new(result, trace)
}

/// Kernighan bit count: clear the lowest set bit until nothing remains.
/// Each clear traces the survivor value.
pub fn count_set_bits(n: u64) -> Traced<u32> {
    let mut trace = Vec::new();

    let mut x = n;
    let mut count = 0u32;
    while x != 0 {
        x &= x - 1;
        count += 1;
        trace.push(TraceEvent::Insert {
            index: count as usize,
            value: x as i64,
        });
    }

    Traced::new(count, trace)
}

/// Power-of-two test via `n & (n - 1)`. A single probe; `Found` on
/// success.
pub fn is_power_of_two(n: u64) -> Traced<bool> {
    let mut trace = Vec::new();

    trace.push(TraceEvent::Compare {
        i: n as usize,
        j: None,
    });
    let result = n != 0 && n & (n - 1) == 0;
    if result {
        trace.push(TraceEvent::Found {
            index: Some(n as usize),
            node: None,
        });
    }

    Traced::new(result, trace)
}

/// XOR-fold to isolate the value appearing an odd number of times. Each
/// element is probed in order; `Found` marks where the survivor sits.
pub fn xor_unique(values: &[i64]) -> Traced<Option<i64>> {
    let mut trace = Vec::new();

    if values.is_empty() {
        return Traced::new(None, trace);
    }

    let mut acc = 0i64;
    for (i, &value) in values.iter().enumerate() {
        trace.push(TraceEvent::Compare { i, j: None });
        acc ^= value;
    }
    if let Some(index) = values.iter().position(|&v| v == acc) {
        trace.push(TraceEvent::Found {
            index: Some(index),
            node: None,
        });
    }

    Traced::new(Some(acc), trace)
}

/// Enumerate every subset of `values` by bitmask. One `mask` pointer
/// move per mask, one `Insert` per included member.
pub fn subsets(values: &[i64]) -> Traced<Vec<Vec<i64>>> {
    let mut trace = Vec::new();

    // Mask enumeration is exponential; anything wider than the canonical
    // fixtures degrades to a no-op rather than exploding.
    if values.len() >= 20 {
        return Traced::new(Vec::new(), trace);
    }

    let mut result = Vec::with_capacity(1 << values.len());
    for mask in 0..(1usize << values.len()) {
        trace.push(TraceEvent::MovePointer {
            name: Cursor::Mask,
            index: Some(mask),
        });
        let mut subset = Vec::new();
        for (bit, &value) in values.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                subset.push(value);
                trace.push(TraceEvent::Insert { index: bit, value });
            }
        }
        result.push(subset);
    }

    Traced::new(result, trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_of_canonical_pair() {
        let run = gcd(48, 18);
        assert_eq!(run.result, 6);
        // (48,18) -> (18,12) -> (12,6) -> (6,0): initial pair + 3 steps,
        // two pointer moves each, then the result write.
        assert_eq!(run.trace.len(), 9);
    }

    #[test]
    fn gcd_with_zero_operand() {
        assert_eq!(gcd(7, 0).result, 7);
        assert_eq!(gcd(0, 7).result, 7);
        assert_eq!(gcd(0, 0).result, 0);
    }

    #[test]
    fn lcm_of_canonical_pair() {
        assert_eq!(lcm(12, 18).result, 36);
        assert_eq!(lcm(0, 9).result, 0);
    }

    #[test]
    fn fast_power_matches_direct_computation() {
        assert_eq!(fast_power(3, 13, 1_000_000_007).result, 1_594_323);
        assert_eq!(fast_power(2, 10, 1_000_000_007).result, 1024);
        assert_eq!(fast_power(5, 0, 97).result, 1);
        assert_eq!(fast_power(5, 3, 1).result, 0);
        assert_eq!(fast_power(5, 3, 0).result, 0);
    }

    #[test]
    fn fast_power_walks_each_exponent_bit() {
        let run = fast_power(3, 13, 1_000_000_007);
        let bits: Vec<usize> = run
            .trace
            .iter()
            .filter_map(|e| match e {
                TraceEvent::MovePointer {
                    name: Cursor::Bit,
                    index,
                } => *index,
                _ => None,
            })
            .collect();
        // 13 = 0b1101: four bit positions.
        assert_eq!(bits, vec![0, 1, 2, 3]);
    }

    #[test]
    fn primality_probes_to_the_square_root() {
        let run = is_prime(97);
        assert!(run.result);
        // Divisors 2..=9 probed, then success.
        let compares = run
            .trace
            .iter()
            .filter(|e| matches!(e, TraceEvent::Compare { .. }))
            .count();
        assert_eq!(compares, 8);
        assert!(matches!(
            run.trace.last(),
            Some(TraceEvent::Found { .. })
        ));
    }

    #[test]
    fn primality_rejects_composites_and_small_values() {
        assert!(!is_prime(91).result); // 7 * 13
        assert!(!is_prime(1).result);
        assert!(!is_prime(0).result);
        assert!(is_prime(2).result);
    }

    #[test]
    fn sieve_collects_primes_up_to_thirty() {
        let run = sieve(30);
        assert_eq!(
            run.result,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn sieve_marks_composites_from_p_squared() {
        let run = sieve(10);
        // First mark must be 4 = 2², struck out by 2.
        assert_eq!(
            run.trace[1],
            TraceEvent::Insert { index: 4, value: 2 }
        );
        // 9 is first struck by 3, never re-marked.
        let marks: Vec<usize> = run
            .trace
            .iter()
            .filter_map(|e| match e {
                TraceEvent::Insert { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(marks, vec![4, 6, 8, 10, 9]);
    }

    #[test]
    fn sieve_below_two_is_empty() {
        assert!(sieve(1).result.is_empty());
        assert!(sieve(0).trace.is_empty());
    }

    #[test]
    fn binomial_of_canonical_pair() {
        assert_eq!(binomial(10, 3).result, 120);
        assert_eq!(binomial(5, 0).result, 1);
        assert_eq!(binomial(5, 5).result, 1);
        assert_eq!(binomial(3, 5).result, 0);
    }

    #[test]
    fn count_set_bits_kernighan() {
        let run = count_set_bits(29); // 0b11101
        assert_eq!(run.result, 4);
        assert_eq!(run.trace.len(), 4);
        assert_eq!(count_set_bits(0).result, 0);
    }

    #[test]
    fn power_of_two_check() {
        assert!(is_power_of_two(64).result);
        assert!(!is_power_of_two(65).result);
        assert!(!is_power_of_two(0).result);
        assert!(is_power_of_two(1).result);
    }

    #[test]
    fn xor_unique_isolates_the_single_value() {
        let run = xor_unique(&[4, 1, 2, 1, 2]);
        assert_eq!(run.result, Some(4));
        assert_eq!(
            run.trace.last(),
            Some(&TraceEvent::Found {
                index: Some(0),
                node: None
            })
        );
        assert_eq!(xor_unique(&[]).result, None);
    }

    #[test]
    fn subsets_enumerates_every_mask() {
        let run = subsets(&[1, 2, 3]);
        assert_eq!(run.result.len(), 8);
        assert_eq!(run.result[0], Vec::<i64>::new());
        assert_eq!(run.result[5], vec![1, 3]);
        assert_eq!(run.result[7], vec![1, 2, 3]);
    }

    #[test]
    fn subsets_of_empty_input_is_the_empty_subset() {
        let run = subsets(&[]);
        assert_eq!(run.result, vec![Vec::<i64>::new()]);
    }
}
