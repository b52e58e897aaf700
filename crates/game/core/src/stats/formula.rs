//! Derivation formulas for secondary and volume attributes.
//!
//! Formulas are pure functions over the ordered input values of an attribute.
//! Results are computed in floating point and truncated; the owning attribute
//! clamps them into its bounds.

/// Pure derivation over ordered input values.
pub type Formula = fn(&[f32]) -> f32;

/// Level from experience: `floor(sqrt(experience / 100))`.
///
/// Inputs: `[experience]`.
pub fn level(inputs: &[f32]) -> f32 {
    let experience = inputs.first().copied().unwrap_or(0.0).max(0.0);
    (experience / 100.0).sqrt().floor()
}

/// Volume maximum: `trunc(20 + 5 × level + stat / 3)`.
///
/// Inputs: `[level, stat]` where stat is Body for Life and Soul for Magic.
pub fn volume_max(inputs: &[f32]) -> f32 {
    let level = inputs.first().copied().unwrap_or(0.0);
    let stat = inputs.get(1).copied().unwrap_or(0.0);
    (20.0 + 5.0 * level + stat / 3.0).trunc()
}
