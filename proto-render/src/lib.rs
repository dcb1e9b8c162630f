//! Rendering and navigation for proto documents
//!
//!     This crate takes the AST produced by `proto-parser` and turns it into something a user
//!     can click through:
//!
//!     - [routes]: which screens, overlays and components a document has, and the navigation
//!       state of a session (current screen, history, open overlays)
//!     - [render]: HTML markup for a document, with navigation attributes on everything
//!       clickable
//!     - [navigation]: interprets activation events against those attributes and applies the
//!       result through a host supplied [NavigationApplier](navigation::NavigationApplier)
//!     - [session]: the context object carrying the previous document and route state between
//!       successive compiles
//!
//!     This is a pure lib: nothing here prints, reads env vars or touches a DOM. Hosts (the
//!     CLI, an editor preview) own the presentation surface.
//!
//! File Layout
//!
//!     .
//!     ├── error.rs            RouteError, RenderError
//!     ├── routes              metadata + RouteManager
//!     ├── render              dispatcher and one module per node family
//!     ├── navigation.rs       NavigationHandler and the applier trait
//!     ├── session.rs          Session
//!     └── lib.rs
//!
//! Testing
//!
//!     Unit tests live next to each module; `tests/` holds the end-to-end, idempotence and
//!     history property tests.

pub mod error;
pub mod navigation;
pub mod render;
pub mod routes;
pub mod session;

pub use error::{RenderError, RouteError};
pub use navigation::{EventElement, NavigationApplier, NavigationHandler, NavigationOutcome};
pub use render::{render, render_node, RenderContext, RenderOptions, RenderResult, Theme};
pub use routes::{get_route_metadata, RouteManager, RouteMetadata};
pub use session::Session;
