//! Navigation target analysis
//!
//! Buttons, links, navigator items and floating action buttons all carry a raw target string.
//! The analyzer classifies it once, at render time, so the event layer only reads attributes:
//!
//! | Target                                   | Kind     |
//! |------------------------------------------|----------|
//! | `-1`                                     | back     |
//! | a modal or drawer name, `toggleName`     | toggle   |
//! | `http(s)://`, `mailto:`, `tel:`, `//`, `www.` | external |
//! | contains `(` or `.`                      | action   |
//! | anything else                            | internal |
//!
//! Every kind writes `data-nav` and `data-nav-type`. Links also get an `href`: the literal
//! url for external targets (opened in a new tab), `#Name` for screens and `#` otherwise.

use super::markup::attr;
use once_cell::sync::Lazy;
use proto_parser::Document;
use regex::Regex;

static TOGGLE_CALL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^toggle([A-Z][A-Za-z0-9_-]*)(?:\(\))?$").unwrap());

const EXTERNAL_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "tel:", "//", "www."];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Internal(String),
    External(String),
    Back,
    Toggle(String),
    Action(String),
}

impl NavTarget {
    pub fn analyze(raw: &str, document: &Document) -> Self {
        let target = raw.trim();
        if target == "-1" {
            return NavTarget::Back;
        }
        if document.is_overlay_name(target) {
            return NavTarget::Toggle(target.to_string());
        }
        if let Some(captures) = TOGGLE_CALL.captures(target) {
            return NavTarget::Toggle(captures[1].to_string());
        }
        if EXTERNAL_PREFIXES
            .iter()
            .any(|prefix| target.starts_with(prefix))
        {
            return NavTarget::External(target.to_string());
        }
        if target.contains('(') || target.contains('.') {
            return NavTarget::Action(target.to_string());
        }
        NavTarget::Internal(target.to_string())
    }

    /// Value of the `data-nav-type` attribute
    pub fn nav_type(&self) -> &'static str {
        match self {
            NavTarget::Internal(_) => "internal",
            NavTarget::External(_) => "external",
            NavTarget::Back => "back",
            NavTarget::Toggle(_) => "toggle",
            NavTarget::Action(_) => "action",
        }
    }

    /// Value of the `data-nav` attribute
    pub fn value(&self) -> &str {
        match self {
            NavTarget::Back => "-1",
            NavTarget::Internal(value)
            | NavTarget::External(value)
            | NavTarget::Toggle(value)
            | NavTarget::Action(value) => value,
        }
    }

    fn data_attrs(&self) -> String {
        format!(
            "{}{}",
            attr("data-nav", self.value()),
            attr("data-nav-type", self.nav_type())
        )
    }

    /// Attributes for an `<a>` element
    pub fn link_attrs(&self) -> String {
        let href = match self {
            NavTarget::Internal(name) => attr("href", &format!("#{}", name)),
            NavTarget::External(url) => {
                format!("{}{}", attr("href", url), attr("target", "_blank"))
            }
            _ => attr("href", "#"),
        };
        format!("{}{}", href, self.data_attrs())
    }

    /// Attributes for a `<button>` element: the data attributes only
    pub fn button_attrs(&self) -> String {
        self.data_attrs()
    }
}
