//! Navigation event handling
//!
//!     The renderer writes `data-nav` and `data-nav-type` on every navigation-bearing element.
//!     When the user activates something, the host hands the event path (target first, then
//!     its ancestors) to [`NavigationHandler::handle`], which finds the nearest element
//!     carrying `data-nav`, updates the [`RouteManager`] and asks a [`NavigationApplier`] to
//!     perform the visible side effects.
//!
//!     The applier is the only part that touches a presentation surface (a DOM, a webview, a
//!     test recorder), so the handler itself runs anywhere.

use crate::routes::RouteManager;
use std::collections::BTreeMap;

/// One element of an activation event's path, reduced to its attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventElement {
    attributes: BTreeMap<String, String>,
}

impl EventElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// An element as the renderer writes it for `target`
    pub fn nav(target: &str, nav_type: &str) -> Self {
        Self::new()
            .with_attribute("data-nav", target)
            .with_attribute("data-nav-type", nav_type)
    }
}

/// Side effects of navigation, implemented by the host
pub trait NavigationApplier {
    /// Make `screen` the visible screen
    fn show_screen(&mut self, screen: &str);
    /// Show or hide a modal or drawer
    fn set_overlay(&mut self, overlay: &str, open: bool);
    /// Open a url in a new browsing context
    fn open_external(&mut self, url: &str);
    /// Run an imperative call such as `save()`
    fn run_action(&mut self, action: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    ScreenChanged(String),
    WentBack(String),
    OverlayToggled { overlay: String, open: bool },
    OpenedExternal(String),
    RanAction(String),
    /// Nothing navigable was activated, or the target doesn't exist
    Ignored,
}

pub struct NavigationHandler<'a> {
    routes: &'a mut RouteManager,
}

impl<'a> NavigationHandler<'a> {
    pub fn new(routes: &'a mut RouteManager) -> Self {
        Self { routes }
    }

    pub fn handle(
        &mut self,
        path: &[EventElement],
        applier: &mut dyn NavigationApplier,
    ) -> NavigationOutcome {
        let Some(element) = path.iter().find(|el| el.attribute("data-nav").is_some()) else {
            return NavigationOutcome::Ignored;
        };
        let target = element.attribute("data-nav").unwrap_or_default();
        let nav_type = element.attribute("data-nav-type").unwrap_or("internal");
        log::debug!("navigation event {} -> {}", nav_type, target);

        match nav_type {
            "internal" if self.routes.is_overlay(target) => self.toggle(target, applier),
            "internal" => self.show(target, applier),
            "back" => match self.routes.navigate_back() {
                Some(screen) => {
                    applier.show_screen(&screen);
                    NavigationOutcome::WentBack(screen)
                }
                None => NavigationOutcome::Ignored,
            },
            "toggle" => self.toggle(target, applier),
            "external" => {
                applier.open_external(target);
                NavigationOutcome::OpenedExternal(target.to_string())
            }
            "action" => {
                applier.run_action(target);
                NavigationOutcome::RanAction(target.to_string())
            }
            other => {
                log::warn!("unknown navigation type '{}'", other);
                NavigationOutcome::Ignored
            }
        }
    }

    fn show(&mut self, screen: &str, applier: &mut dyn NavigationApplier) -> NavigationOutcome {
        if !self.routes.is_screen(screen) {
            log::warn!("navigation ignored: unknown screen '{}'", screen);
            return NavigationOutcome::Ignored;
        }

        // The first navigation records the screen it leaves, so back can return to it
        if self.routes.history().is_empty() {
            if let Some(current) = self.routes.current_screen().map(str::to_string) {
                if current != screen && self.routes.navigate_to(&current).is_err() {
                    log::warn!("current screen '{}' is not routable", current);
                }
            }
        }

        match self.routes.navigate_to(screen) {
            Ok(()) => {
                applier.show_screen(screen);
                NavigationOutcome::ScreenChanged(screen.to_string())
            }
            Err(error) => {
                log::warn!("navigation ignored: {}", error);
                NavigationOutcome::Ignored
            }
        }
    }

    fn toggle(&mut self, overlay: &str, applier: &mut dyn NavigationApplier) -> NavigationOutcome {
        match self.routes.toggle_overlay(overlay) {
            Ok(open) => {
                applier.set_overlay(overlay, open);
                NavigationOutcome::OverlayToggled {
                    overlay: overlay.to_string(),
                    open,
                }
            }
            Err(error) => {
                log::warn!("navigation ignored: {}", error);
                NavigationOutcome::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_parser::compile;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    impl NavigationApplier for Recorder {
        fn show_screen(&mut self, screen: &str) {
            self.calls.push(format!("show {}", screen));
        }
        fn set_overlay(&mut self, overlay: &str, open: bool) {
            self.calls.push(format!("overlay {} {}", overlay, open));
        }
        fn open_external(&mut self, url: &str) {
            self.calls.push(format!("external {}", url));
        }
        fn run_action(&mut self, action: &str) {
            self.calls.push(format!("action {}", action));
        }
    }

    fn routes() -> RouteManager {
        let document = compile("screen Home:\nscreen Settings:\nmodal Confirm:\n", None).document;
        let mut routes = RouteManager::new();
        routes.process_routes(&document, None);
        routes
    }

    #[test]
    fn test_nearest_element_with_nav_wins() {
        let mut routes = routes();
        let mut recorder = Recorder::default();
        let path = vec![
            EventElement::new().with_attribute("class", "proto-icon"),
            EventElement::nav("Settings", "internal"),
            EventElement::nav("Confirm", "toggle"),
        ];
        let outcome = NavigationHandler::new(&mut routes).handle(&path, &mut recorder);
        assert_eq!(outcome, NavigationOutcome::ScreenChanged("Settings".into()));
        assert_eq!(recorder.calls, vec!["show Settings"]);
        assert_eq!(routes.history(), ["Home", "Settings"]);
    }

    #[test]
    fn test_internal_overlay_name_toggles() {
        let mut routes = routes();
        let mut recorder = Recorder::default();
        let outcome = NavigationHandler::new(&mut routes)
            .handle(&[EventElement::nav("Confirm", "internal")], &mut recorder);
        assert_eq!(
            outcome,
            NavigationOutcome::OverlayToggled {
                overlay: "Confirm".into(),
                open: true
            }
        );
    }

    #[test]
    fn test_path_without_nav_is_ignored() {
        let mut routes = routes();
        let mut recorder = Recorder::default();
        let outcome =
            NavigationHandler::new(&mut routes).handle(&[EventElement::new()], &mut recorder);
        assert_eq!(outcome, NavigationOutcome::Ignored);
        assert!(recorder.calls.is_empty());
    }
}
