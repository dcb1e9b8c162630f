//! Editing session
//!
//! A [`Session`] owns what has to survive between two compiles of the same document: the
//! previous AST (for id reconciliation) and the [`RouteManager`] (current screen, history,
//! open overlays). Hosts that edit several documents keep one session per document.

use crate::navigation::{EventElement, NavigationApplier, NavigationHandler, NavigationOutcome};
use crate::render::{render, RenderOptions, RenderResult};
use crate::routes::{RouteManager, RouteMetadata};
use proto_parser::{compile_with, CompileOptions, CompileResult, Document};

#[derive(Debug, Clone, Default)]
pub struct Session {
    compile_options: CompileOptions,
    render_options: RenderOptions,
    document: Option<Document>,
    routes: RouteManager,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(compile_options: CompileOptions, render_options: RenderOptions) -> Self {
        Self {
            compile_options,
            render_options,
            ..Self::default()
        }
    }

    /// Compile a new version of the source, keeping ids and navigation state where possible.
    pub fn compile(&mut self, source: &str) -> CompileResult {
        let result = compile_with(source, self.document.as_ref(), &self.compile_options);
        self.routes.process_routes(&result.document, None);
        self.document = Some(result.document.clone());
        result
    }

    /// Render the latest document with the session's current screen and open overlays.
    pub fn render(&self) -> RenderResult {
        let options = RenderOptions {
            current_screen: self.routes.current_screen().map(str::to_string),
            open_overlays: self.routes.open_overlays().to_vec(),
            ..self.render_options.clone()
        };
        let empty = Document::new();
        render(self.document.as_ref().unwrap_or(&empty), &options)
    }

    /// Route an activation event through the session's navigation state.
    pub fn handle_event(
        &mut self,
        path: &[EventElement],
        applier: &mut dyn NavigationApplier,
    ) -> NavigationOutcome {
        NavigationHandler::new(&mut self.routes).handle(path, applier)
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn routes(&self) -> &RouteManager {
        &self.routes
    }

    pub fn routes_mut(&mut self) -> &mut RouteManager {
        &mut self.routes
    }

    pub fn route_metadata(&self) -> RouteMetadata {
        self.routes.metadata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_survive_recompiles() {
        let mut session = Session::new();
        let first = session.compile("screen Home:\n  # Welcome\n");
        let second = session.compile("screen Home:\n  # Welcome\n  > more\n");
        assert_eq!(
            first.document.children[0].children[0].id,
            second.document.children[0].children[0].id
        );
    }

    #[test]
    fn test_navigation_state_reaches_render() {
        let mut session = Session::new();
        session.compile("screen Home:\nscreen Settings:\n");
        session.routes_mut().navigate_to("Settings").unwrap();
        session.compile("screen Home:\nscreen Settings:\n  > edited\n");

        let html = session.render().html;
        assert!(html.contains("data-screen=\"Home\" data-default=\"true\" style=\"display:none\""));
        assert!(html.contains("data-screen=\"Settings\">"));
        assert_eq!(session.route_metadata().current_screen.as_deref(), Some("Settings"));
    }

    #[test]
    fn test_render_before_compile_is_empty() {
        let session = Session::new();
        let result = session.render();
        assert!(result.errors.is_empty());
        assert!(result.html.ends_with("</style></div>"));
    }
}
