pub mod effect_model;

pub use effect_model::EffectModel;
