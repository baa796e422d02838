use std::iter;

/// All ways to cut `s` into exactly `depth + 1` non-empty ordered
/// contiguous pieces, produced lazily by recursive choice of each cut
/// point. `depth = 0` yields the single-piece split; a `depth` of
/// `s.len()` or more yields nothing.
///
/// Cut points are chosen left to right, earliest first, so the first split
/// for `("123", 1)` is `["1", "23"]`. The number of splits for a string of
/// length `L` is `C(L-1, depth)`.
pub fn splits(s: &str, depth: usize) -> Box<dyn Iterator<Item = Vec<&str>> + '_> {
    if depth == 0 {
        return Box::new(iter::once(vec![s]));
    }
    Box::new((1..s.len()).flat_map(move |i| {
        let (first, rest) = s.split_at(i);
        splits(rest, depth - 1).map(move |tail| {
            let mut pieces = Vec::with_capacity(tail.len() + 1);
            pieces.push(first);
            pieces.extend(tail);
            pieces
        })
    }))
}
