// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Helpers for testing code that renders paths. They are part of the public API so
//! that integration tests (and downstream crates) can use them too.

// Attach sources.
pub mod output_device_ext;
pub mod screen_grid;
pub mod stdout_mock;

// Re-export.
pub use output_device_ext::*;
pub use screen_grid::*;
pub use stdout_mock::*;
