//! Analysis routines over the syntax tree and the inference oracle.

pub mod class;
