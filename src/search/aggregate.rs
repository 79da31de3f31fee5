//! Aggregation of child subtree results.

/// Combine child subtree results into the spawner's own result.
///
/// Max over the inputs. Commutative, so the arrival order of sibling
/// reports never affects the outcome. The identity for an empty slice is
/// 0, below any reachable move count; in practice aggregation only runs at
/// fan-out points, which always have at least two children.
pub fn aggregate(results: &[u32]) -> u32 {
    results.iter().copied().max().unwrap_or(0)
}
