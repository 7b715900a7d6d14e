//! UI components mounted by the decoration layer.

pub mod particle_field;
