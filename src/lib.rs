//! campuslines: draw colored line segments over a campus map.
//!
//! ARCHITECTURE
//! ============
//! Text from the edge editor and the recenter box is validated by `parse`.
//! Shortest paths come from the routing service through `routing`. Every
//! result becomes a `view::ViewEvent`, and `view::ViewCoordinator` is the
//! only owner of what is displayed. `session` runs the event loop that ties
//! them together.

pub mod config;
pub mod input;
pub mod model;
pub mod parse;
pub mod routing;
pub mod session;
pub mod view;
