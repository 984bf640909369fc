// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod color_depth;
pub mod escape_sequence;

// Re-export.
pub use color_depth::*;
pub use escape_sequence::*;
