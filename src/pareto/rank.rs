//! Incremental per-layer rank accumulation.
//!
//! Unlike the batch filter, ranking never removes a design. Each insertion
//! compares the newcomer against every design already present, layer by
//! layer, and charges one rank point per layer to whichever side loses.

use crate::design::{Design, DomRel};
use crate::dominance::{compare_pair, Dominance};
use crate::error::{MdrError, Result};

/// Updates rank counters for `new_design` against `existing`.
///
/// For every existing design and every layer `k` in `layers`:
/// - existing dominates new at `k` → `new_design.ranks()[k] += 1`
/// - new dominates existing at `k` → that existing design's `ranks()[k] += 1`
///
/// Every design must have been sized with
/// [`Design::with_rank_layers`]`(layers.len())`. All comparisons run
/// before any counter changes, so on error no rank is modified.
///
/// # Errors
///
/// - [`MdrError::RankLayerMismatch`] if a rank vector has the wrong length
/// - errors of [`compare_pair`] for malformed metrics
pub fn update_ranks(
    new_design: &mut Design,
    existing: &mut [Design],
    layers: &[DomRel],
) -> Result<()> {
    ensure_layers(new_design, layers.len())?;
    for design in existing.iter() {
        ensure_layers(design, layers.len())?;
    }
    if layers.is_empty() {
        return Ok(());
    }

    let mut outcomes = Vec::with_capacity(existing.len() * layers.len());
    for design in existing.iter() {
        for &rel in layers {
            outcomes.push(compare_pair(design, new_design, rel)?);
        }
    }

    for (idx, outcome) in outcomes.into_iter().enumerate() {
        let (i, layer) = (idx / layers.len(), idx % layers.len());
        match outcome {
            Dominance::Left => new_design.bump_rank(layer),
            Dominance::Right => existing[i].bump_rank(layer),
            Dominance::Neither => {}
        }
    }
    Ok(())
}

fn ensure_layers(design: &Design, expected: usize) -> Result<()> {
    let found = design.ranks().len();
    if found != expected {
        return Err(MdrError::RankLayerMismatch {
            design: design.id(),
            expected,
            found,
        });
    }
    Ok(())
}

/// A growing reference set whose designs carry per-layer rank counters.
///
/// # Example
///
/// ```
/// use u_mdr::design::{Design, DomRel, Sense};
/// use u_mdr::pareto::RankedSet;
///
/// let mut set = RankedSet::new(vec![DomRel::new(0, 1), DomRel::new(2, 3)]);
/// set.insert(Design::from_values(0, &[1.0, 1.0, 5.0, 5.0], Sense::Minimize)).unwrap();
/// set.insert(Design::from_values(1, &[2.0, 2.0, 5.0, 5.0], Sense::Minimize)).unwrap();
///
/// assert_eq!(set.designs()[1].ranks(), &[1, 0]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankedSet {
    layers: Vec<DomRel>,
    designs: Vec<Design>,
}

impl RankedSet {
    /// Creates an empty set ranking by `layers`, highest priority first.
    pub fn new(layers: Vec<DomRel>) -> Self {
        Self {
            layers,
            designs: Vec::new(),
        }
    }

    /// Inserts a design, updating its counters and those of the designs
    /// already present.
    ///
    /// The design's rank vector is sized to the layer count here if it
    /// carries no layers yet; any other length is an error.
    pub fn insert(&mut self, design: Design) -> Result<()> {
        let mut design = if design.ranks().is_empty() {
            design.with_rank_layers(self.layers.len())
        } else {
            design
        };
        update_ranks(&mut design, &mut self.designs, &self.layers)?;
        self.designs.push(design);
        Ok(())
    }

    /// Inserts every design in order, stopping at the first error.
    pub fn extend<I: IntoIterator<Item = Design>>(&mut self, designs: I) -> Result<()> {
        designs.into_iter().try_for_each(|d| self.insert(d))
    }

    /// Ranking layers, highest priority first.
    pub fn layers(&self) -> &[DomRel] {
        &self.layers
    }

    /// Designs in insertion order.
    pub fn designs(&self) -> &[Design] {
        &self.designs
    }

    /// Number of designs inserted.
    pub fn len(&self) -> usize {
        self.designs.len()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }

    /// Designs ordered by rank vector, compared layer by layer, with the
    /// design id breaking ties.
    pub fn by_rank(&self) -> Vec<&Design> {
        let mut ordered: Vec<&Design> = self.designs.iter().collect();
        ordered.sort_by(|a, b| a.ranks().cmp(b.ranks()).then(a.id().cmp(&b.id())));
        ordered
    }

    /// Consumes the set, returning its designs in insertion order.
    pub fn into_designs(self) -> Vec<Design> {
        self.designs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Sense;

    fn min(id: usize, values: &[f64], layers: usize) -> Design {
        Design::from_values(id, values, Sense::Minimize).with_rank_layers(layers)
    }

    fn two_layers() -> Vec<DomRel> {
        vec![DomRel::new(0, 1), DomRel::new(2, 3)]
    }

    #[test]
    fn test_new_design_dominated_at_layer_0() {
        let mut existing = vec![min(0, &[1.0, 1.0, 5.0, 5.0], 2)];
        let mut new_design = min(1, &[2.0, 2.0, 5.0, 5.0], 2);

        update_ranks(&mut new_design, &mut existing, &two_layers()).unwrap();

        assert_eq!(new_design.ranks(), &[1, 0]);
        assert_eq!(existing[0].ranks(), &[0, 0]);
    }

    #[test]
    fn test_new_design_dominates_at_layer_1() {
        let mut existing = vec![min(0, &[1.0, 1.0, 5.0, 5.0], 2)];
        let mut new_design = min(1, &[1.0, 1.0, 4.0, 4.0], 2);

        update_ranks(&mut new_design, &mut existing, &two_layers()).unwrap();

        assert_eq!(existing[0].ranks(), &[0, 1]);
        assert_eq!(new_design.ranks(), &[0, 0]);
    }

    #[test]
    fn test_every_layer_is_counted() {
        // Layers are not short-circuited: both layers charge the loser.
        let mut existing = vec![min(0, &[1.0, 1.0, 1.0, 1.0], 2)];
        let mut new_design = min(1, &[2.0, 2.0, 2.0, 2.0], 2);

        update_ranks(&mut new_design, &mut existing, &two_layers()).unwrap();

        assert_eq!(new_design.ranks(), &[1, 1]);
    }

    #[test]
    fn test_counts_accumulate_over_existing() {
        let mut existing = vec![
            min(0, &[1.0, 1.0, 9.0, 9.0], 2),
            min(1, &[2.0, 2.0, 9.0, 9.0], 2),
            min(2, &[9.0, 9.0, 9.0, 9.0], 2),
        ];
        let mut new_design = min(3, &[3.0, 3.0, 1.0, 1.0], 2);

        update_ranks(&mut new_design, &mut existing, &two_layers()).unwrap();

        assert_eq!(new_design.ranks(), &[2, 0]);
        assert_eq!(existing[0].ranks(), &[0, 1]);
        assert_eq!(existing[1].ranks(), &[0, 1]);
        assert_eq!(existing[2].ranks(), &[1, 1]);
    }

    #[test]
    fn test_rank_layer_mismatch_leaves_counters() {
        let mut existing = vec![min(0, &[1.0, 1.0, 5.0, 5.0], 2)];
        let mut new_design = min(7, &[2.0, 2.0, 5.0, 5.0], 1);

        assert_eq!(
            update_ranks(&mut new_design, &mut existing, &two_layers()),
            Err(MdrError::RankLayerMismatch {
                design: 7,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(existing[0].ranks(), &[0, 0]);
    }

    #[test]
    fn test_metric_error_leaves_counters() {
        let mut existing = vec![
            min(0, &[9.0, 9.0, 9.0, 9.0], 2),
            min(1, &[1.0, 1.0], 2),
        ];
        let mut new_design = min(2, &[2.0, 2.0, 2.0, 2.0], 2);

        assert!(update_ranks(&mut new_design, &mut existing, &two_layers()).is_err());
        assert_eq!(existing[0].ranks(), &[0, 0]);
        assert_eq!(new_design.ranks(), &[0, 0]);
    }

    #[test]
    fn test_ranked_set() {
        let mut set = RankedSet::new(two_layers());
        set.extend([
            Design::from_values(0, &[3.0, 3.0, 1.0, 1.0], Sense::Minimize),
            Design::from_values(1, &[1.0, 1.0, 5.0, 5.0], Sense::Minimize),
            Design::from_values(2, &[2.0, 2.0, 2.0, 2.0], Sense::Minimize),
        ])
        .unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.designs()[0].ranks(), &[2, 0]);
        assert_eq!(set.designs()[1].ranks(), &[0, 2]);
        assert_eq!(set.designs()[2].ranks(), &[1, 1]);

        let order: Vec<usize> = set.by_rank().iter().map(|d| d.id()).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_ranked_set_rejects_wrong_layers() {
        let mut set = RankedSet::new(two_layers());
        let err = set
            .insert(Design::from_values(0, &[1.0; 4], Sense::Minimize).with_rank_layers(3))
            .unwrap_err();
        assert!(matches!(err, MdrError::RankLayerMismatch { .. }));
        assert!(set.is_empty());
    }
}
