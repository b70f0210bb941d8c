// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! K-subsets enumeration.

/// Creates table for nck(n, k) for n <= 36 and k <= 7.
const fn make_nck() -> [[u32; 8]; 36] {
    let mut t = [[0u32; 8]; 36];
    let mut n = 0;

    while n < 36 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= 7 && k <= n + 1 {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u32; 8]; 36] = make_nck();

/// Returns the binomial coefficient for n choose k.
#[inline]
pub(crate) fn nck(n: usize, k: usize) -> usize {
    assert!(n <= 36, "n={n} must be 0 <= n <= 36");
    assert!(k <= 7, "k={k} must be 0 <= k <= 7");

    if n < k || n == 0 {
        0
    } else {
        NCKS[n - 1][k] as usize
    }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
fn nth_ksubset(mut n: usize, k: usize) -> [usize; 7] {
    assert!(k <= 7);

    let mut out = [0; 7];
    for k in (0..k).rev() {
        let mut c = k;
        while nck(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(nck(c, k + 1));
    }

    out
}

/// Calls the given closure for count k-subsets of 0..n starting from the
/// nth ksubset.
pub(crate) fn for_each_ksubset<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    if count == 0 || k == 0 || k > n {
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = vec![0usize; k + 3];

    let ks = nth_ksubset(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nck() {
        // For n < k = 0
        assert_eq!(nck(2, 3), 0);
        assert_eq!(nck(0, 2), 0);

        [1, 36, 630, 7140, 58905, 376992, 1947792, 8347680]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(36, k), v));

        [1, 31, 465, 4495, 31465, 169911, 736281, 2629575]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(31, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(5, k), v));

        [1, 1, 0, 0, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(nck(1, k), v));
    }

    #[test]
    fn test_nth_ksubset() {
        let mut counter = 0;
        let count = nck(36, 5);
        for_each_ksubset(36, 5, 0, count, |s| {
            let ks = nth_ksubset(counter, 5);
            s.iter().zip(ks).for_each(|(&l, r)| assert_eq!(l, r));
            counter += 1;
        });

        assert_eq!(count, counter);

        // Start from half way.
        counter = 0;
        let nth = nck(36, 5) / 2;
        for_each_ksubset(36, 5, nth, nth, |s| {
            let ks = nth_ksubset(nth + counter, 5);
            s.iter().zip(ks).for_each(|(&l, r)| assert_eq!(l, r));
            counter += 1;
        });

        assert_eq!(nth, counter);
    }

    #[test]
    fn ksubset_stops_at_last_subset() {
        // Asking for more subsets than exist stops after the last one.
        let mut subsets = Vec::new();
        for_each_ksubset(4, 2, 0, 100, |s| subsets.push(s.to_vec()));
        assert_eq!(
            subsets,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![1, 2],
                vec![0, 3],
                vec![1, 3],
                vec![2, 3]
            ]
        );

        let mut called = false;
        for_each_ksubset(4, 2, 0, 0, |_| called = true);
        for_each_ksubset(1, 2, 0, 1, |_| called = true);
        assert!(!called);
    }
}
