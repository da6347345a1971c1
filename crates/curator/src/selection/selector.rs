//! Fractional sampling over ordered sequences.

/// Pick the element at `fraction` of the way through `items`.
///
/// The fraction is mapped onto `[0, len - 1]`, rounded to the nearest index
/// (halves to even) and clamped. Returns `None` only for an empty slice.
///
/// ```
/// use curator::selection::pick_by_fraction;
///
/// let items = [10, 20, 30, 40, 50];
/// assert_eq!(pick_by_fraction(&items, 0.0), Some(&10));
/// assert_eq!(pick_by_fraction(&items, 0.5), Some(&30));
/// assert_eq!(pick_by_fraction(&items, 1.0), Some(&50));
/// assert_eq!(pick_by_fraction::<i32>(&[], 0.5), None);
/// ```
pub fn pick_by_fraction<T>(items: &[T], fraction: f64) -> Option<&T> {
    let last = items.len().checked_sub(1)?;
    let index = (fraction * last as f64).round_ties_even().clamp(0.0, last as f64);
    items.get(index as usize)
}

/// Pick up to `count` elements evenly spread across `items`.
///
/// When `count` covers the whole slice it is returned as-is. Otherwise the
/// picks sit at fractions `i / (count - 1)`; indices that collapse onto an
/// element already picked are dropped, so fewer than `count` may come back.
pub fn spaced_picks<T: Clone + PartialEq>(items: &[T], count: usize) -> Vec<T> {
    if count >= items.len() {
        return items.to_vec();
    }

    let mut out: Vec<T> = Vec::with_capacity(count);
    for i in 0..count {
        let fraction = if count > 1 {
            i as f64 / (count - 1) as f64
        } else {
            0.0
        };
        if let Some(item) = pick_by_fraction(items, fraction) {
            if !out.contains(item) {
                out.push(item.clone());
            }
        }
    }
    out
}
