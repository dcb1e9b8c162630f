//! Render options and the state threaded through one render call

use super::theme::Theme;
use crate::error::RenderError;
use proto_parser::Document;

/// Default bound on nested component instantiation
pub const DEFAULT_MAX_COMPONENT_DEPTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Screen shown; the others are rendered hidden. `None` shows the default screen.
    pub current_screen: Option<String>,
    /// Modals and drawers rendered visible
    pub open_overlays: Vec<String>,
    pub theme: Theme,
    /// Emit a complete html page instead of a fragment
    pub wrap_document: bool,
    pub max_component_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            current_screen: None,
            open_overlays: Vec::new(),
            theme: Theme::default(),
            wrap_document: false,
            max_component_depth: DEFAULT_MAX_COMPONENT_DEPTH,
        }
    }
}

impl RenderOptions {
    pub fn with_current_screen(mut self, screen: impl Into<String>) -> Self {
        self.current_screen = Some(screen.into());
        self
    }
}

pub struct RenderContext<'a> {
    pub document: &'a Document,
    pub options: &'a RenderOptions,
    /// Screen resolved from the options, falling back to the default
    pub current_screen: Option<String>,
    /// Names of the components being instantiated, outermost first
    pub component_stack: Vec<String>,
    pub errors: Vec<RenderError>,
}

impl<'a> RenderContext<'a> {
    pub fn new(document: &'a Document, options: &'a RenderOptions) -> Self {
        let mut errors = Vec::new();
        let requested = options.current_screen.as_deref();
        let current_screen = match requested {
            Some(name) if document.find_screen(name).is_some() => Some(name.to_string()),
            _ => {
                if let Some(name) = requested {
                    errors.push(RenderError::UnknownScreen {
                        name: name.to_string(),
                    });
                }
                document.default_screen().map(str::to_string)
            }
        };

        Self {
            document,
            options,
            current_screen,
            component_stack: Vec::new(),
            errors,
        }
    }

    pub fn is_current(&self, screen: &str) -> bool {
        self.current_screen.as_deref() == Some(screen)
    }

    pub fn is_open(&self, overlay: &str) -> bool {
        self.options.open_overlays.iter().any(|name| name == overlay)
    }

    pub fn record(&mut self, error: RenderError) {
        log::warn!("render: {}", error);
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_parser::compile;

    #[test]
    fn test_unknown_current_screen_falls_back() {
        let document = compile("screen A:\nscreen B:\n", None).document;
        let options = RenderOptions::default().with_current_screen("Z");
        let context = RenderContext::new(&document, &options);
        assert!(context.is_current("A"));
        assert_eq!(context.errors.len(), 1);
    }

    #[test]
    fn test_known_current_screen() {
        let document = compile("screen A:\nscreen B:\n", None).document;
        let options = RenderOptions::default().with_current_screen("B");
        let context = RenderContext::new(&document, &options);
        assert!(context.is_current("B"));
        assert!(context.errors.is_empty());
    }
}
