//! Ranking composition.
//!
//! Relevance ordering multiplies the base text score by the factor of every boost rule whose
//! trigger holds for the document. An explicit sort replaces scoring entirely.

use crate::{
    QueryError,
    sort::{SortField, SortOrder, SortSpec},
};

/// Boolean document flags a boost rule can trigger on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagField {
    /// Paid placement.
    Promoted,
}

impl FlagField {
    /// Index field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Promoted => "promoted",
        }
    }
}

/// Multiplies the score of documents whose `trigger` flag is set by `factor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoostRule {
    /// Flag that must be true for the rule to apply.
    pub trigger: FlagField,
    /// Multiplicative factor.
    pub factor: f32,
}

/// Multiplicative scoring over the base relevance of the predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreFunction {
    /// Rules, applied in order.
    rules: Vec<BoostRule>,
}

impl ScoreFunction {
    /// Creates a score function from its rules.
    pub fn new(rules: Vec<BoostRule>) -> Self {
        Self { rules }
    }

    /// The promotion boost: promoted documents score `factor` times their base relevance.
    pub fn promoted(factor: f32) -> Self {
        Self::new(vec![BoostRule {
            trigger: FlagField::Promoted,
            factor,
        }])
    }

    /// The rules of this function.
    pub fn rules(&self) -> &[BoostRule] {
        &self.rules
    }

    /// Final score for a document with `base` relevance, given its flag values.
    pub fn apply(&self, base: f32, flag: impl Fn(FlagField) -> bool) -> f32 {
        self.rules
            .iter()
            .filter(|rule| flag(rule.trigger))
            .fold(base, |score, rule| score * rule.factor)
    }
}

/// How results are ordered.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// Descending boosted relevance.
    Relevance(ScoreFunction),
    /// Field order; scores are not computed.
    Sorted(SortSpec),
}

impl Ranking {
    /// The score function, when ordering by relevance.
    pub fn score_function(&self) -> Option<&ScoreFunction> {
        match self {
            Self::Relevance(function) => Some(function),
            Self::Sorted(_) => None,
        }
    }

    /// The sort, when ordering by a field.
    pub fn sort(&self) -> Option<SortSpec> {
        match self {
            Self::Relevance(_) => None,
            Self::Sorted(spec) => Some(*spec),
        }
    }
}

/// Chooses the ordering for a request.
///
/// A non-blank `sort_by` yields a field sort in the `is_asc` direction. Otherwise results are
/// ranked by relevance with promoted documents boosted by `promoted_boost`.
pub fn compose_ranking(
    sort_by: Option<&str>,
    is_asc: bool,
    promoted_boost: f32,
) -> Result<Ranking, QueryError> {
    match sort_by.map(str::trim).filter(|s| !s.is_empty()) {
        Some(name) => Ok(Ranking::Sorted(SortSpec {
            field: SortField::parse(name)?,
            order: SortOrder::from_is_asc(is_asc),
        })),
        None => Ok(Ranking::Relevance(ScoreFunction::promoted(promoted_boost))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promoted_document_outranks_equal_base() {
        let function = ScoreFunction::promoted(10.0);
        let plain = function.apply(1.5, |_| false);
        let promoted = function.apply(1.5, |flag| flag == FlagField::Promoted);

        assert!((plain - 1.5).abs() < f32::EPSILON);
        assert!((promoted - 15.0).abs() < 1e-5);
        assert!(promoted > plain);
    }

    #[test]
    fn boost_is_multiplicative_not_additive() {
        let function = ScoreFunction::promoted(10.0);
        assert!(function.apply(0.0, |_| true).abs() < f32::EPSILON);
        assert!((function.apply(0.2, |_| true) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn rules_compose_by_product() {
        let function = ScoreFunction::new(vec![
            BoostRule {
                trigger: FlagField::Promoted,
                factor: 2.0,
            },
            BoostRule {
                trigger: FlagField::Promoted,
                factor: 3.0,
            },
        ]);
        assert!((function.apply(1.0, |_| true) - 6.0).abs() < 1e-5);
        assert_eq!(function.rules().len(), 2);
    }

    #[test]
    fn blank_sort_ranks_by_relevance() {
        for sort_by in [None, Some(""), Some("  ")] {
            let ranking = compose_ranking(sort_by, true, 10.0).unwrap();
            assert_eq!(ranking, Ranking::Relevance(ScoreFunction::promoted(10.0)));
            assert!(ranking.sort().is_none());
        }
    }

    #[test]
    fn sort_bypasses_scoring() {
        let ranking = compose_ranking(Some("price"), false, 10.0).unwrap();
        assert!(ranking.score_function().is_none());
        assert_eq!(
            ranking.sort(),
            Some(SortSpec {
                field: SortField::Price,
                order: SortOrder::Desc,
            })
        );
    }

    #[test]
    fn unknown_sort_is_rejected() {
        assert_eq!(
            compose_ranking(Some("rating"), true, 10.0),
            Err(QueryError::UnknownSortField("rating".into()))
        );
    }
}
