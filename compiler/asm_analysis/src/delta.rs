//! Single-region delta between two encoded token streams.
//!
//! Longest common prefix, then longest common suffix that does not overlap
//! the prefix; whatever sits between them is replaced. This is O(n) and
//! deterministic. An insertion in the middle of a document that shifts every
//! later token is reported as one larger region rather than several small
//! ones, and at most one edit is ever produced.

/// Replace `previous[start..start + delete_count]` with `data`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenEdit {
    pub start: usize,
    pub delete_count: usize,
    pub data: Vec<u32>,
}

/// Compute the edit that turns `previous` into `current`.
///
/// `stride` is the edit granularity in integers: prefix and suffix lengths
/// are rounded down to a multiple of it, so with the token stride every edit
/// starts and ends on a token boundary. `stride == 1` gives the plain
/// integer-level result. Returns `None` when the streams are identical.
pub fn compute_edit(previous: &[u32], current: &[u32], stride: usize) -> Option<TokenEdit> {
    debug_assert!(stride > 0, "stride must be positive");
    if previous == current {
        return None;
    }

    let mut prefix = previous
        .iter()
        .zip(current)
        .take_while(|(a, b)| a == b)
        .count();
    prefix -= prefix % stride;

    let max_suffix = previous.len().min(current.len()) - prefix;
    let mut suffix = previous
        .iter()
        .rev()
        .zip(current.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();
    suffix -= suffix % stride;

    Some(TokenEdit {
        start: prefix,
        delete_count: previous.len() - prefix - suffix,
        data: current[prefix..current.len() - suffix].to_vec(),
    })
}

/// Splice `edit` into `previous`.
pub fn apply_edit(previous: &[u32], edit: &TokenEdit) -> Vec<u32> {
    let end = edit.start + edit.delete_count;
    let mut result = Vec::with_capacity(previous.len() - edit.delete_count + edit.data.len());
    result.extend_from_slice(&previous[..edit.start]);
    result.extend_from_slice(&edit.data);
    result.extend_from_slice(&previous[end..]);
    result
}
