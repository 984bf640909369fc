// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod containment;
pub mod path_impl;
pub mod render;
pub mod shapes;
pub mod transform;

// Re-export.
pub use path_impl::*;
pub use shapes::*;
