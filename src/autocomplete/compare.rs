use std::cmp::Ordering;

/// Compare at most `len` bytes of `a` and `b`.
///
/// Bytes past the end of a slice read as NUL, and the comparison stops once
/// both sides reach NUL. A candidate shorter than the typed word therefore
/// compares less than the word. With `ignore_case`, ASCII letters are folded
/// to upper case before comparing.
pub fn compare_n(a: &[u8], b: &[u8], len: usize, ignore_case: bool) -> Ordering {
    for i in 0..len {
        let mut ca = a.get(i).copied().unwrap_or(0);
        let mut cb = b.get(i).copied().unwrap_or(0);
        if ignore_case {
            ca = ca.to_ascii_uppercase();
            cb = cb.to_ascii_uppercase();
        }
        if ca != cb {
            return ca.cmp(&cb);
        }
        if ca == 0 {
            break;
        }
    }
    Ordering::Equal
}
