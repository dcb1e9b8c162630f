//! Activation events driving a session, observed through a recording applier

use proto_parser::proto::testing::samples;
use proto_render::{EventElement, NavigationApplier, NavigationOutcome, Session};
use rstest::rstest;

#[derive(Debug, Default)]
struct RecordingApplier {
    calls: Vec<String>,
}

impl NavigationApplier for RecordingApplier {
    fn show_screen(&mut self, screen: &str) {
        self.calls.push(format!("show:{}", screen));
    }

    fn set_overlay(&mut self, overlay: &str, open: bool) {
        self.calls.push(format!("overlay:{}:{}", overlay, open));
    }

    fn open_external(&mut self, url: &str) {
        self.calls.push(format!("external:{}", url));
    }

    fn run_action(&mut self, action: &str) {
        self.calls.push(format!("action:{}", action));
    }
}

fn session() -> Session {
    let mut session = Session::new();
    let result = session.compile(samples::KITCHEN_SINK);
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    session
}

#[rstest]
#[case("https://x.dev", "external", "external:https://x.dev")]
#[case("save()", "action", "action:save()")]
#[case("Confirm", "toggle", "overlay:Confirm:true")]
#[case("Menu", "internal", "overlay:Menu:true")]
#[case("Settings", "internal", "show:Settings")]
fn test_dispatch_by_type(#[case] target: &str, #[case] nav_type: &str, #[case] call: &str) {
    let mut session = session();
    let mut applier = RecordingApplier::default();
    let outcome = session.handle_event(&[EventElement::nav(target, nav_type)], &mut applier);
    assert_ne!(outcome, NavigationOutcome::Ignored);
    assert_eq!(applier.calls, vec![call.to_string()]);
}

#[test]
fn test_screen_then_back() {
    let mut session = session();
    let mut applier = RecordingApplier::default();

    session.handle_event(&[EventElement::nav("Settings", "internal")], &mut applier);
    let outcome = session.handle_event(&[EventElement::nav("-1", "back")], &mut applier);

    assert_eq!(outcome, NavigationOutcome::WentBack("Home".into()));
    assert_eq!(applier.calls, vec!["show:Settings", "show:Home"]);
    assert!(!session.route_metadata().can_navigate_back);
    assert!(session.route_metadata().can_navigate_forward);

    let html = session.render().html;
    assert!(html.contains("data-screen=\"Settings\" style=\"display:none\""));
}

#[test]
fn test_back_with_empty_history_is_ignored() {
    let mut session = session();
    let mut applier = RecordingApplier::default();
    let outcome = session.handle_event(&[EventElement::nav("-1", "back")], &mut applier);
    assert_eq!(outcome, NavigationOutcome::Ignored);
    assert!(applier.calls.is_empty());
}

#[test]
fn test_unknown_screen_is_ignored() {
    let mut session = session();
    let mut applier = RecordingApplier::default();
    let outcome = session.handle_event(&[EventElement::nav("Nowhere", "internal")], &mut applier);
    assert_eq!(outcome, NavigationOutcome::Ignored);
    assert!(applier.calls.is_empty());
    assert_eq!(session.routes().current_screen(), Some("Home"));
    assert!(session.routes().history().is_empty());
}

#[test]
fn test_open_overlay_is_rendered_visible() {
    let mut session = session();
    let mut applier = RecordingApplier::default();
    session.handle_event(&[EventElement::nav("Confirm", "toggle")], &mut applier);

    let html = session.render().html;
    assert!(html.contains("data-overlay=\"Confirm\" data-overlay-type=\"modal\" role=\"dialog\""));
    assert!(html.contains("data-overlay=\"Menu\" data-overlay-type=\"drawer\" style=\"display:none\""));
}
