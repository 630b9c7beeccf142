//! Branch-and-bound configuration.

/// How the bound reads each node's nearest and second-nearest weights.
///
/// Both modes give identical bounds and therefore identical searches; they
/// differ only in cost per lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NeighborLookup {
    /// Sort every row (and column) once before the search and keep the
    /// needed ranks in a table.
    #[default]
    Precomputed,

    /// Copy and sort the node's row on every lookup. O(N log N) per call;
    /// useful as a reference when checking the table.
    RowSort,
}

/// Configuration for [`super::BnbSolver`].
///
/// The default runs the search to exhaustion, which proves optimality.
/// Node and time limits turn it into an anytime search that reports the
/// best tour found before the limit.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::{BnbConfig, NeighborLookup};
///
/// let config = BnbConfig::default()
///     .with_neighbor_lookup(NeighborLookup::RowSort)
///     .with_max_nodes(1_000_000)
///     .with_time_limit_ms(5_000);
/// assert_eq!(config.max_nodes, 1_000_000);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbConfig {
    /// Neighbor weight lookup strategy.
    pub neighbor_lookup: NeighborLookup,

    /// Maximum number of search-tree nodes to explore. The search stops
    /// before exploring child `max_nodes + 1`. 0 = no limit.
    pub max_nodes: u64,

    /// Wall-clock budget in milliseconds. 0 = no limit.
    pub time_limit_ms: u64,
}

impl BnbConfig {
    pub fn with_neighbor_lookup(mut self, lookup: NeighborLookup) -> Self {
        self.neighbor_lookup = lookup;
        self
    }

    /// Sets the node budget (0 disables it).
    pub fn with_max_nodes(mut self, n: u64) -> Self {
        self.max_nodes = n;
        self
    }

    /// Sets the time budget in milliseconds (0 disables it).
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Whether any limit can stop the search before it is exhausted.
    pub fn is_limited(&self) -> bool {
        self.max_nodes > 0 || self.time_limit_ms > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BnbConfig::default();
        assert_eq!(config.neighbor_lookup, NeighborLookup::Precomputed);
        assert_eq!(config.max_nodes, 0);
        assert_eq!(config.time_limit_ms, 0);
        assert!(!config.is_limited());
    }

    #[test]
    fn test_builder() {
        let config = BnbConfig::default()
            .with_neighbor_lookup(NeighborLookup::RowSort)
            .with_max_nodes(10);
        assert_eq!(config.neighbor_lookup, NeighborLookup::RowSort);
        assert!(config.is_limited());

        let config = BnbConfig::default().with_time_limit_ms(250);
        assert!(config.is_limited());
    }
}
