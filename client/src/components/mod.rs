//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout chrome (`navbar`, `footer`, `sidebar`) is static. `carte` and
//! `chart_canvas` bridge to browser-global JS libraries; `fetch_view` renders
//! the shared loading/error/success branches.

pub mod carte;
pub mod chart_canvas;
pub mod fetch_view;
pub mod footer;
pub mod navbar;
pub mod sidebar;
