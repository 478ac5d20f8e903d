//! Configuration for the position resolver

/// Configuration options for position resolution.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Maximum number of fixed-point passes over the unresolved worklist.
    ///
    /// Doubles as the cycle breaker: reference chains deeper than this (and
    /// true cycles) are reported as unresolvable. The default comfortably
    /// covers hand-authored plans; raise it for generated plans with very
    /// long attachment chains.
    pub max_passes: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self { max_passes: 20 }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pass budget.
    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }
}
