//! Chartboard client core.
//!
//! The data and transport layer for a chart-dashboard frontend:
//! parses uploaded CSV datasets into typed tables, classifies columns
//! for chart configuration, extracts numeric series for the renderers,
//! and talks to the dashboard service (auth, datasets, dashboards)
//! over its JSON API.

pub mod api;
pub mod constants;
pub mod data;
pub mod logging;
pub mod session;
pub mod types;
pub mod util;
