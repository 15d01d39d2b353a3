//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::InsertionSeed;
use crate::local_search::RefinementMove;

/// Selects the construction and refinement strategies used by
/// [`solve`](super::solve).
///
/// The default is pair-seeded insertion followed by 2-opt.
///
/// # Examples
///
/// ```
/// use u_tour::solver::SolverConfig;
/// use u_tour::constructive::InsertionSeed;
/// use u_tour::local_search::RefinementMove;
///
/// let config = SolverConfig::default()
///     .with_construction(InsertionSeed::Single)
///     .with_refinement(RefinementMove::LinKernighanLite);
/// assert_eq!(config.construction, InsertionSeed::Single);
/// assert_eq!(config.refinement, Some(RefinementMove::LinKernighanLite));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Seed cycle for the insertion constructor.
    pub construction: InsertionSeed,
    /// Local search move, or `None` to keep the constructed tour.
    pub refinement: Option<RefinementMove>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            construction: InsertionSeed::Pair,
            refinement: Some(RefinementMove::TwoOpt),
        }
    }
}

impl SolverConfig {
    /// Sets the insertion seed.
    pub fn with_construction(mut self, seed: InsertionSeed) -> Self {
        self.construction = seed;
        self
    }

    /// Sets the refinement move.
    pub fn with_refinement(mut self, mv: RefinementMove) -> Self {
        self.refinement = Some(mv);
        self
    }

    /// Disables refinement.
    pub fn without_refinement(mut self) -> Self {
        self.refinement = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = SolverConfig::default();
        assert_eq!(c.construction, InsertionSeed::Pair);
        assert_eq!(c.refinement, Some(RefinementMove::TwoOpt));
    }

    #[test]
    fn test_builder() {
        let c = SolverConfig::default().without_refinement();
        assert!(c.refinement.is_none());
        let c = c.with_refinement(RefinementMove::TwoOpt);
        assert_eq!(c.refinement, Some(RefinementMove::TwoOpt));
    }

    #[test]
    fn test_json_partial() {
        let c: SolverConfig =
            serde_json::from_str(r#"{"construction":"single"}"#).expect("valid json");
        assert_eq!(c.construction, InsertionSeed::Single);
        assert_eq!(c.refinement, Some(RefinementMove::TwoOpt));

        let c: SolverConfig =
            serde_json::from_str(r#"{"refinement":null}"#).expect("valid json");
        assert_eq!(c.construction, InsertionSeed::Pair);
        assert!(c.refinement.is_none());
    }
}
