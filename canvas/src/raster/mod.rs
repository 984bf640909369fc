// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure functions that turn lines and curves into lattice points. Nothing in here
//! knows about surfaces or paths.

// Attach sources.
pub mod arc;
pub mod bezier;
pub mod line_steps;

// Re-export.
pub use arc::*;
pub use bezier::*;
pub use line_steps::*;
