//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chart` is pure and tested natively. `leaflet` and `chartjs` bind browser
//! globals and only exist in the `hydrate` build.

pub mod chart;
#[cfg(feature = "hydrate")]
pub mod chartjs;
#[cfg(feature = "hydrate")]
pub mod leaflet;
