//! View state: the coordinator that owns what is on screen, and the renderer
//! seam it publishes to.
//!
//! ARCHITECTURE
//! ============
//! Editors, the recenter control and route fetches never talk to the
//! renderer directly. They produce `ViewEvent`s; `ViewCoordinator` applies
//! each one as a wholesale replace and renders exactly once per event.

pub mod coordinator;
pub mod render;

pub use coordinator::{ViewConfig, ViewCoordinator, ViewEvent, ViewSnapshot};
pub use render::{JsonLinesRenderer, OverlayRenderer};
