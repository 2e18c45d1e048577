//! Single-entry memo for query results.
//!
//! Re-rendering the same state should not re-run the pipeline. The cache keeps the
//! last `(catalog generation, spec version, spec)` key with the positions it
//! produced and recomputes when any part of the key changes. The version is the
//! cheap check; the stored spec guards callers that forget to bump it.

use super::engine::evaluate_positions;
use super::filter::FilterSpec;
use crate::catalog::CatalogStore;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    generation: u64,
    version: u64,
    spec: FilterSpec,
}

impl CacheKey {
    fn matches(&self, generation: u64, version: u64, spec: &FilterSpec) -> bool {
        self.generation == generation && self.version == version && self.spec == *spec
    }
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entry: Option<(CacheKey, Vec<usize>)>,
    misses: u64,
}

impl QueryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the positions for `spec`, recomputing only on a key change.
    ///
    /// `version` is normally the filter controller's counter. A changed `spec`
    /// under an unchanged version still recomputes.
    pub fn positions(&mut self, catalog: &CatalogStore, version: u64, spec: &FilterSpec) -> &[usize] {
        let generation = catalog.generation();

        let stale = self
            .entry
            .as_ref()
            .map_or(true, |(cached, _)| !cached.matches(generation, version, spec));
        if stale {
            tracing::trace!(generation, version, "query cache miss");
            self.misses += 1;
            let key = CacheKey {
                generation,
                version,
                spec: spec.clone(),
            };
            self.entry = Some((key, evaluate_positions(catalog.all(), spec)));
        }

        self.entry
            .as_ref()
            .map(|(_, positions)| positions.as_slice())
            .unwrap_or_default()
    }

    /// Drops the cached entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Number of times the pipeline actually ran.
    #[must_use]
    pub const fn misses(&self) -> u64 {
        self.misses
    }
}
