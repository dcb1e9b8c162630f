//! Themes
//!
//! Rendered markup never hard-codes colors: every style refers to a `--proto-*` variable.
//! A theme is the set of values for those variables, emitted once in the document's root
//! style block together with the few rules inline styles can't express (overlay placement).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

const LIGHT: &[(&str, &str)] = &[
    ("--proto-bg", "#ffffff"),
    ("--proto-surface", "#f6f7f9"),
    ("--proto-text", "#1f2328"),
    ("--proto-muted", "#6b7280"),
    ("--proto-border", "#d0d7de"),
    ("--proto-primary", "#2563eb"),
    ("--proto-on-primary", "#ffffff"),
    ("--proto-secondary", "#e5e7eb"),
    ("--proto-on-secondary", "#1f2328"),
    ("--proto-danger", "#dc2626"),
    ("--proto-on-danger", "#ffffff"),
    ("--proto-backdrop", "rgba(0, 0, 0, 0.4)"),
    ("--proto-radius", "8px"),
];

const DARK: &[(&str, &str)] = &[
    ("--proto-bg", "#0d1117"),
    ("--proto-surface", "#161b22"),
    ("--proto-text", "#e6edf3"),
    ("--proto-muted", "#8b949e"),
    ("--proto-border", "#30363d"),
    ("--proto-primary", "#3b82f6"),
    ("--proto-on-primary", "#ffffff"),
    ("--proto-secondary", "#21262d"),
    ("--proto-on-secondary", "#e6edf3"),
    ("--proto-danger", "#f85149"),
    ("--proto-on-danger", "#ffffff"),
    ("--proto-backdrop", "rgba(0, 0, 0, 0.6)"),
    ("--proto-radius", "8px"),
];

const BASE_CSS: &str = ".proto-document{background:var(--proto-bg);color:var(--proto-text);font-family:system-ui,sans-serif}\
.proto-screen{display:flex;flex-direction:column;gap:0.75rem;padding:1rem;min-height:100%}\
.proto-modal{position:fixed;inset:0;display:flex;align-items:center;justify-content:center;background:var(--proto-backdrop)}\
.proto-modal-content{background:var(--proto-bg);border-radius:var(--proto-radius);padding:1.5rem;min-width:16rem}\
.proto-drawer{position:fixed;top:0;bottom:0;left:0;width:18rem;background:var(--proto-surface);border-right:1px solid var(--proto-border);padding:1rem}\
.proto-fab{position:fixed;right:1.5rem;bottom:1.5rem;width:3.5rem;height:3.5rem;border-radius:50%}\
.proto-error{border:1px dashed var(--proto-danger);color:var(--proto-danger);padding:0.5rem}";

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn variables(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// The root `<style>` element: variables scoped to the document plus base rules.
    pub fn style_block(&self) -> String {
        let variables: String = self
            .variables()
            .iter()
            .map(|(name, value)| format!("{}:{};", name, value))
            .collect();
        format!(
            "<style class=\"proto-theme\">.proto-document{{{}}}{}</style>",
            variables, BASE_CSS
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}
