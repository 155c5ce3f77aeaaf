//! Semantic queries over externally supplied syntax trees: the inference
//! oracle interface and the inheritance analysis built on top of it.

pub mod analyze;
mod inference;

pub use inference::{Inferred, InferenceProvider, NoInference, TypeHandle};
