//! Layered dominance (Multiple Dominance Relations).
//!
//! Layers are consulted in priority order. The first layer at which one
//! design dominates the other decides; later layers only break ties left
//! by all earlier ones. Two designs can stay unresolved through every
//! layer, so the result is a strict partial order.

use super::pair::{compare_pair, Dominance};
use crate::design::{Design, DomRel};
use crate::error::Result;

/// Compares `a` and `b` layer by layer.
///
/// Layers below the deciding one are not evaluated, so their metrics are
/// not validated. An empty layer list never resolves.
///
/// # Example
///
/// ```
/// use u_mdr::design::{Design, DomRel, Sense};
/// use u_mdr::dominance::{compare_layered, Dominance};
///
/// // Tied on layer 0, `a` wins on layer 1.
/// let a = Design::from_values(0, &[1.0, 1.0, 1.0, 1.0], Sense::Minimize);
/// let b = Design::from_values(1, &[1.0, 1.0, 2.0, 2.0], Sense::Minimize);
/// let layers = [DomRel::new(0, 1), DomRel::new(2, 3)];
///
/// assert_eq!(compare_layered(&a, &b, &layers).unwrap(), Dominance::Left);
/// ```
pub fn compare_layered(a: &Design, b: &Design, layers: &[DomRel]) -> Result<Dominance> {
    for &rel in layers {
        match compare_pair(a, b, rel)? {
            Dominance::Neither => continue,
            decided => return Ok(decided),
        }
    }
    Ok(Dominance::Neither)
}

/// Returns `true` if `a` dominates `b` under the layered relation.
pub fn dominates_layered(a: &Design, b: &Design, layers: &[DomRel]) -> Result<bool> {
    Ok(compare_layered(a, b, layers)? == Dominance::Left)
}
