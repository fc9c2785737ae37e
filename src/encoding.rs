// SPDX-FileCopyrightText: 2026 ordpat developers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordinal ranking and the Lehmer (factorial-number-system) rank code.

/// Stable argsort for f64 values.
///
/// Fills `idx` with the indices that would sort `window` in ascending order.
/// Ties are resolved by the original index order (earlier index ranks lower),
/// matching `numpy.argsort(stable=True)`. NaNs sort greater than everything.
pub fn argsort(window: &[f64], idx: &mut [usize]) {
    for (i, val) in idx.iter_mut().enumerate() {
        *val = i;
    }
    idx.sort_by(|&i, &j| {
        let a = window[i];
        let b = window[j];
        match a.partial_cmp(&b) {
            Some(core::cmp::Ordering::Equal) => i.cmp(&j),
            Some(ord) => ord,
            None => {
                if a.is_nan() && b.is_nan() {
                    i.cmp(&j)
                } else if a.is_nan() {
                    core::cmp::Ordering::Greater
                } else {
                    core::cmp::Ordering::Less
                }
            }
        }
    });
}

/// Compute the Lehmer code (factoradic ranking) for a given permutation.
///
/// The input is a permutation of `0..m` as produced by [`argsort`]. The code
/// is the sum over positions `i` of `(count of later elements less than
/// perm[i]) * (m-1-i)!`, which is a bijection between the `m!` strict
/// orderings and the integers `[0, m!)`. The identity permutation maps to 0,
/// the reversed one to `m! - 1`.
///
/// Panics if `m > 20` (the code no longer fits in a u64).
pub fn lehmer_code(perm: &[usize]) -> u64 {
    let n = perm.len();
    if n > 20 {
        panic!("For embedding dimensions larger than 20, the code overflows u64.");
    }
    lehmer_code_with_fact(perm, &factorials(n))
}

/// Precompute factorials 0! ..= (n-1)! as u128.
pub(crate) fn factorials(n: usize) -> Vec<u128> {
    let mut fact: Vec<u128> = vec![1u128; n.max(1)];
    for i in 1..n {
        fact[i] = fact[i - 1] * (i as u128);
    }
    fact
}

/// Lehmer code against precomputed factorials, for the per-window hot loop.
pub(crate) fn lehmer_code_with_fact(perm: &[usize], fact: &[u128]) -> u64 {
    let n = perm.len();
    let mut acc: u128 = 0;
    for i in 0..n {
        let mut c = 0u128;
        for j in (i + 1)..n {
            if perm[i] > perm[j] {
                c += 1;
            }
        }
        acc += c * fact[n - 1 - i];
    }
    acc as u64
}
