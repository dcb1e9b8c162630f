//! Navigation state for one editing session
//!
//! The manager is a small state machine: no screens, or one active screen, plus a history
//! of visited screens and a cursor into it. `process_routes` is called whenever the
//! document changes; the history survives across calls as long as its screens do.
//!
//! The history only records explicit navigation. Its invariant is that no two adjacent
//! entries are equal: `navigate_to` skips the push when the target is already at the
//! cursor, and pruning vanished screens collapses the duplicates it would create.

use super::metadata::RouteMetadata;
use crate::error::RouteError;
use proto_parser::Document;

#[derive(Debug, Clone, Default)]
pub struct RouteManager {
    routes: RouteMetadata,
    current: Option<String>,
    history: Vec<String>,
    cursor: Option<usize>,
    open_overlays: Vec<String>,
}

impl RouteManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the route table from `document` and resolve the current screen.
    ///
    /// The current screen is, in order: `current_screen` when it names a screen, the
    /// previously active screen if it still exists, the document's default screen.
    pub fn process_routes(
        &mut self,
        document: &Document,
        current_screen: Option<&str>,
    ) -> RouteMetadata {
        self.routes = RouteMetadata::from_document(document);

        let requested = current_screen.filter(|name| self.routes.has_screen(name));
        if let (Some(name), None) = (current_screen, requested) {
            log::warn!("requested screen '{}' does not exist", name);
        }
        let previous = self
            .current
            .as_deref()
            .filter(|name| self.routes.has_screen(name));
        self.current = requested
            .or(previous)
            .map(str::to_string)
            .or_else(|| self.routes.default_screen.clone());

        self.prune_history();
        let routes = &self.routes;
        self.open_overlays.retain(|name| routes.has_overlay(name));

        log::debug!(
            "processed {} routes, current screen {:?}",
            self.routes.total_routes,
            self.current
        );
        self.metadata()
    }

    /// Drop history entries whose screen vanished, collapsing the duplicates left behind.
    fn prune_history(&mut self) {
        let mut kept: Vec<String> = Vec::with_capacity(self.history.len());
        let mut cursor = None;

        for (index, name) in self.history.iter().enumerate() {
            if !self.routes.has_screen(name) {
                continue;
            }
            if kept.last() != Some(name) {
                kept.push(name.clone());
            }
            if self.cursor.is_some_and(|old| index <= old) {
                cursor = Some(kept.len() - 1);
            }
        }

        if cursor.is_none() && !kept.is_empty() {
            cursor = Some(0);
        }
        self.history = kept;
        self.cursor = cursor;
    }

    /// Navigate to a screen, dropping any forward history.
    pub fn navigate_to(&mut self, name: &str) -> Result<(), RouteError> {
        if !self.routes.has_screen(name) {
            return Err(RouteError::UnknownScreen(name.to_string()));
        }

        if let Some(cursor) = self.cursor {
            self.history.truncate(cursor + 1);
        }
        if self.history.last().map(String::as_str) != Some(name) {
            self.history.push(name.to_string());
        }
        self.cursor = Some(self.history.len() - 1);
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Step back in history. `None` when already at the oldest entry.
    pub fn navigate_back(&mut self) -> Option<String> {
        let cursor = self.cursor.filter(|&cursor| cursor > 0)? - 1;
        self.cursor = Some(cursor);
        self.current = Some(self.history[cursor].clone());
        self.current.clone()
    }

    /// Step forward in history. `None` when already at the newest entry.
    pub fn navigate_forward(&mut self) -> Option<String> {
        let cursor = self.cursor? + 1;
        let name = self.history.get(cursor)?.clone();
        self.cursor = Some(cursor);
        self.current = Some(name.clone());
        Some(name)
    }

    pub fn can_navigate_back(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_navigate_forward(&self) -> bool {
        self.cursor
            .is_some_and(|cursor| cursor + 1 < self.history.len())
    }

    /// Open or close a modal or drawer; returns whether it is open afterwards.
    pub fn toggle_overlay(&mut self, name: &str) -> Result<bool, RouteError> {
        if !self.routes.has_overlay(name) {
            return Err(RouteError::UnknownOverlay(name.to_string()));
        }
        if let Some(position) = self.open_overlays.iter().position(|open| open == name) {
            self.open_overlays.remove(position);
            Ok(false)
        } else {
            self.open_overlays.push(name.to_string());
            Ok(true)
        }
    }

    pub fn open_overlays(&self) -> &[String] {
        &self.open_overlays
    }

    pub fn is_screen(&self, name: &str) -> bool {
        self.routes.has_screen(name)
    }

    pub fn is_overlay(&self, name: &str) -> bool {
        self.routes.has_overlay(name)
    }

    pub fn current_screen(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn current_history_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Forget history, overlays and the current screen. The route table is kept.
    pub fn reset(&mut self) {
        self.history.clear();
        self.cursor = None;
        self.open_overlays.clear();
        self.current = self.routes.default_screen.clone();
    }

    /// The route table with the current navigation state filled in
    pub fn metadata(&self) -> RouteMetadata {
        RouteMetadata {
            current_screen: self.current.clone(),
            navigation_history: self.history.clone(),
            current_history_index: self.cursor,
            can_navigate_back: self.can_navigate_back(),
            can_navigate_forward: self.can_navigate_forward(),
            open_overlays: self.open_overlays.clone(),
            ..self.routes.clone()
        }
    }
}

/// Route metadata of a document, without keeping any navigation state.
pub fn get_route_metadata(document: &Document, current_screen: Option<&str>) -> RouteMetadata {
    RouteManager::new().process_routes(document, current_screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proto_parser::compile;

    fn manager(source: &str) -> RouteManager {
        let result = compile(source, None);
        let mut manager = RouteManager::new();
        manager.process_routes(&result.document, None);
        manager
    }

    const THREE_SCREENS: &str = "screen A:\nscreen B:\nscreen C:\nmodal M:\n";

    #[test]
    fn test_current_defaults_to_default_screen() {
        let routes = manager("screen A:\nscreen B (default):\n");
        assert_eq!(routes.current_screen(), Some("B"));
        assert!(routes.history().is_empty());
    }

    #[test]
    fn test_back_after_two_navigations() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("A").unwrap();
        routes.navigate_to("B").unwrap();
        assert_eq!(routes.navigate_back(), Some("A".to_string()));
        assert!(!routes.can_navigate_back());
        assert!(routes.can_navigate_forward());
        assert_eq!(routes.current_screen(), Some("A"));
    }

    #[test]
    fn test_navigate_truncates_forward_history() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("A").unwrap();
        routes.navigate_to("B").unwrap();
        routes.navigate_back();
        routes.navigate_to("C").unwrap();
        assert_eq!(routes.history(), ["A", "C"]);
        assert_eq!(routes.navigate_forward(), None);
    }

    #[test]
    fn test_repeated_navigation_is_not_recorded_twice() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("A").unwrap();
        routes.navigate_to("A").unwrap();
        assert_eq!(routes.history(), ["A"]);
        assert_eq!(routes.current_history_index(), Some(0));
    }

    #[test]
    fn test_unknown_screen_leaves_state_untouched() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("A").unwrap();
        assert_eq!(
            routes.navigate_to("Nope"),
            Err(RouteError::UnknownScreen("Nope".into()))
        );
        assert_eq!(routes.navigate_to("M"), Err(RouteError::UnknownScreen("M".into())));
        assert_eq!(routes.history(), ["A"]);
        assert_eq!(routes.current_screen(), Some("A"));
    }

    #[test]
    fn test_toggle_overlay() {
        let mut routes = manager(THREE_SCREENS);
        assert_eq!(routes.toggle_overlay("M"), Ok(true));
        assert_eq!(routes.open_overlays(), ["M"]);
        assert_eq!(routes.toggle_overlay("M"), Ok(false));
        assert!(routes.open_overlays().is_empty());
        assert!(routes.toggle_overlay("A").is_err());
    }

    #[test]
    fn test_reprocessing_keeps_current_and_prunes_history() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("A").unwrap();
        routes.navigate_to("B").unwrap();
        routes.navigate_to("A").unwrap();
        routes.navigate_to("C").unwrap();

        // B disappears: [A, B, A, C] becomes [A, C], never [A, A, C]
        let edited = compile("screen A:\nscreen C:\n", None);
        let metadata = routes.process_routes(&edited.document, None);
        assert_eq!(metadata.navigation_history, ["A", "C"]);
        assert_eq!(metadata.current_history_index, Some(1));
        assert_eq!(metadata.current_screen.as_deref(), Some("C"));
    }

    #[test]
    fn test_explicit_current_screen_wins() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("B").unwrap();
        let result = compile(THREE_SCREENS, None);
        let metadata = routes.process_routes(&result.document, Some("C"));
        assert_eq!(metadata.current_screen.as_deref(), Some("C"));
    }

    #[test]
    fn test_vanished_current_falls_back_to_default() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("C").unwrap();
        let edited = compile("screen A:\nscreen B:\n", None);
        let metadata = routes.process_routes(&edited.document, None);
        assert_eq!(metadata.current_screen.as_deref(), Some("A"));
        assert!(metadata.navigation_history.is_empty());
        assert_eq!(metadata.current_history_index, None);
    }

    #[test]
    fn test_reset() {
        let mut routes = manager(THREE_SCREENS);
        routes.navigate_to("B").unwrap();
        routes.toggle_overlay("M").unwrap();
        routes.reset();
        assert!(routes.history().is_empty());
        assert!(routes.open_overlays().is_empty());
        assert_eq!(routes.current_screen(), Some("A"));
    }

    #[test]
    fn test_get_route_metadata_example() {
        let result = compile(
            "screen Home:\n  # Welcome\n  @[Go](Settings)\nscreen Settings:\n  > Settings page",
            None,
        );
        let metadata = get_route_metadata(&result.document, None);
        assert_eq!(metadata.default_screen.as_deref(), Some("Home"));
        assert_eq!(metadata.total_routes, 2);
        assert_eq!(metadata.current_screen.as_deref(), Some("Home"));
    }
}
