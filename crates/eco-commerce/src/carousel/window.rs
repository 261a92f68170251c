//! Cyclic window arithmetic.

/// Mathematical modulo: always in `[0, n)`, and `0` when `n == 0`.
///
/// ```
/// use eco_commerce::carousel::true_mod;
/// assert_eq!(true_mod(-1, 5), 4);
/// assert_eq!(true_mod(7, 5), 2);
/// assert_eq!(true_mod(3, 0), 0);
/// ```
pub fn true_mod(x: i64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let n = i64::try_from(n).unwrap_or(i64::MAX);
    x.rem_euclid(n) as usize
}

/// Backing indices of the `k`-slot window starting at `offset`.
///
/// Wraps past the end; when `k > items.len()` indices repeat.
pub fn window_indices(len: usize, offset: i64, k: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let start = true_mod(offset, len);
    (0..k).map(|i| (start + i) % len).collect()
}

/// The `k` items visible at `offset`: `items[(offset + i) mod N]`.
pub fn window_at<T>(items: &[T], offset: i64, k: usize) -> Vec<&T> {
    window_indices(items.len(), offset, k)
        .into_iter()
        .map(|i| &items[i])
        .collect()
}
