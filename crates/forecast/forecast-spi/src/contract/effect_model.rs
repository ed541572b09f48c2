//! Effect model trait definition.

/// Trait for turning one quantified event impact into per-year additive
/// contributions.
///
/// `start_year` is the event year after lag shifting and `effect` the signed
/// effect size; implementations decide how the effect unfolds over time.
pub trait EffectModel: Send + Sync {
    /// Model name.
    fn name(&self) -> &str;

    /// Per-year contributions of one impact link.
    fn contributions(&self, start_year: i32, effect: f64) -> Vec<(i32, f64)>;
}
