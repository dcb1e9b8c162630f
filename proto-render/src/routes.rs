//! Routes
//!
//!     A route is anything navigable: screens, modals, drawers and component definitions.
//!     [RouteMetadata](metadata::RouteMetadata) lists them for a document; the
//!     [RouteManager](manager::RouteManager) adds the per session state on top (current
//!     screen, history with a cursor, open overlays).
//!
//!     One manager belongs to one session. It is plain data with `&mut self` operations, so
//!     sharing it across threads is left to the caller.

pub mod manager;
pub mod metadata;

pub use manager::{get_route_metadata, RouteManager};
pub use metadata::{NamedRoute, RouteMetadata, ScreenRoute};
