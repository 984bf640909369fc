// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod matrix;
pub mod point;
pub mod size;
pub mod surface;

// Re-export.
pub use matrix::*;
pub use point::*;
pub use size::*;
pub use surface::*;
