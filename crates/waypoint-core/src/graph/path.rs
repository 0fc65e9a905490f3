//! Path reconstruction from Dijkstra predecessor chains

use std::collections::HashMap;

/// Walk the predecessor map backward from `dest`, then reverse into
/// source-to-destination order.
///
/// Returns an empty path when the chain does not begin at `src`, i.e. the
/// destination is unreachable from the source.
pub(crate) fn reconstruct_path(
    previous: &HashMap<&str, &str>,
    src: &str,
    dest: &str,
) -> Vec<String> {
    let mut path: Vec<&str> = Vec::new();
    let mut current = Some(dest);
    while let Some(vertex) = current {
        path.push(vertex);
        current = previous.get(vertex).copied();
    }
    path.reverse();

    match path.first() {
        Some(&first) if first == src => path.into_iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}
