//! bellcurve-core - Interactive engine for exploring the normal distribution
//!
//! This crate turns distribution parameters and user input into a list of
//! backend-independent drawing primitives.
//!
//! # Key Components
//!
//! - **Mapper**: data ↔ pixel mapping along x (under pan/zoom) and y
//! - **Interaction**: pointer, touch, keyboard and zoom state machine
//! - **Render**: the scene of primitives (curve, bars, σ markers, tooltip)
//! - **Explorer**: the session that owns parameters, sample and interaction
//! - **Scenario**: simulated datasets (normal, outliers, bimodal)
//! - **Catalog**: sample datasets read from a JSON catalog
//! - **Misleading**: correct vs misleading chart comparisons
//!
//! Everything runs synchronously on the caller's thread. The backend owns
//! drawing; each state change yields a fresh [`render::Scene`].

pub mod axis;
pub mod catalog;
pub mod config;
pub mod error;
pub mod explorer;
pub mod input;
pub mod interaction;
pub mod labels;
pub mod mapper;
pub mod misleading;
pub mod render;
pub mod scenario;
pub mod view;

pub use axis::*;
pub use catalog::*;
pub use config::*;
pub use error::*;
pub use explorer::*;
pub use input::*;
pub use interaction::*;
pub use labels::*;
pub use mapper::*;
pub use misleading::*;
pub use scenario::*;
pub use view::*;

// render module exports drawing types, access via render:: prefix
