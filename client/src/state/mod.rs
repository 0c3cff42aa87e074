//! Page-local view state.
//!
//! DESIGN
//! ======
//! There is no shared store: each page owns its own fetch resource and form
//! signals. This module only holds the pure state types pages build on.

pub mod fetch;
pub mod forms;
