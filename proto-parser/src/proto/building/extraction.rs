//! Data Extraction from token text
//!
//! Every element is a single token, so building a node is mostly a matter of pulling the
//! literal parts out of the token text. Each function here matches one fixed pattern and
//! returns plain data (strings, flags, markers); no AST types.
//!
//! ```text
//! "@_+[Save]{check}(save())"
//!   │││  │     │      └ action  save()
//!   │││  │     └ icon           check
//!   │││  └ label                Save
//!   ││└ size marker             +
//!   │└ variant marker           _
//!   └ button
//! ```
//!
//! A `None` return means the text doesn't have the shape of its rule. Tokens produced by the
//! lexer always do; parse trees built by hand may not.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static SCREEN_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^screen[ \t]+([A-Za-z_][A-Za-z0-9_-]*)([ \t]*\(default\))?[ \t]*:$").unwrap()
});
static NAMED_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:component|modal|drawer)[ \t]+([A-Za-z_][A-Za-z0-9_-]*)[ \t]*:$").unwrap()
});
static CSS_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-{0,2}[A-Za-z][A-Za-z0-9_-]*)[ \t]*:[ \t]*(.*?)[ \t]*;?[ \t]*$").unwrap()
});
static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})[ \t]+(.*)$").unwrap());
static BUTTON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@([_=!~])?([+-])?\[([^\]]*)\](?:\{([^}]*)\})?(?:\((.*)\))?$").unwrap()
});
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\[([^\]]*)\]\(([^)]*)\)$").unwrap());
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\[([^\]]*)\]\(([^)]*)\)$").unwrap());
static INPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^___([*@#])?(-)?(?::([^{\[]*))?(?:\{([^}]*)\})?(?:\[([^\]]*)\])?$").unwrap()
});
static CHECK_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\[(]([xX ])[\])][ \t]*(.*)$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-[ \t]+(.*)$").unwrap());
static COMPONENT_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$([A-Za-z_][A-Za-z0-9_]*)(?:[ \t]*:(.*))?$").unwrap());
static LAYOUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-z]+)((?:-[A-Za-z0-9.%]+)*)[ \t]*:$").unwrap());
static NAV_ITEM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-[ \t]+(.*?)[ \t]*(?:\{([^}]*)\})?[ \t]*(?:\(([^)]*)\))?[ \t]*$").unwrap()
});
static FAB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\+\)(?:\{([^}]*)\})?(?:\(([^)]*)\))?$").unwrap());

/// Trimmed text of an optional capture group, `None` when missing or blank
fn group(captures: &Captures, index: usize) -> Option<String> {
    captures
        .get(index)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn group_or_empty(captures: &Captures, index: usize) -> String {
    group(captures, index).unwrap_or_default()
}

fn marker(captures: &Captures, index: usize) -> Option<char> {
    captures.get(index).and_then(|m| m.as_str().chars().next())
}

/// Split a `a | b | c` value list; an all-blank list is empty
pub(crate) fn split_values(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split('|').map(|value| value.trim().to_string()).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenHeader {
    pub name: String,
    pub is_default: bool,
}

pub fn screen_header(text: &str) -> Option<ScreenHeader> {
    let captures = SCREEN_HEADER.captures(text.trim())?;
    Some(ScreenHeader {
        name: group_or_empty(&captures, 1),
        is_default: captures.get(2).is_some(),
    })
}

/// Name of a `component` / `modal` / `drawer` header
pub fn declaration_name(text: &str) -> Option<String> {
    NAMED_HEADER
        .captures(text.trim())
        .map(|captures| group_or_empty(&captures, 1))
}

pub fn css_declaration(text: &str) -> Option<(String, String)> {
    let captures = CSS_DECLARATION.captures(text.trim())?;
    Some((group_or_empty(&captures, 1), group_or_empty(&captures, 2)))
}

pub fn heading(text: &str) -> Option<(u8, String)> {
    let captures = HEADING.captures(text.trim_end())?;
    let level = captures.get(1)?.as_str().len() as u8;
    Some((level, group_or_empty(&captures, 2)))
}

/// Content of a text line after its marker (`>`, `*>` or `">`)
pub fn text_content(text: &str, marker: &str) -> Option<String> {
    text.strip_prefix(marker).map(|rest| rest.trim().to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonData {
    pub variant_marker: Option<char>,
    pub size_marker: Option<char>,
    pub label: String,
    pub icon: Option<String>,
    pub action: Option<String>,
}

pub fn button(text: &str) -> Option<ButtonData> {
    let captures = BUTTON.captures(text.trim())?;
    Some(ButtonData {
        variant_marker: marker(&captures, 1),
        size_marker: marker(&captures, 2),
        label: group_or_empty(&captures, 3),
        icon: group(&captures, 4),
        action: group(&captures, 5),
    })
}

/// `(text, destination)` of a link
pub fn link(text: &str) -> Option<(String, String)> {
    let captures = LINK.captures(text.trim())?;
    Some((group_or_empty(&captures, 1), group_or_empty(&captures, 2)))
}

/// `(alt, src)` of an image
pub fn image(text: &str) -> Option<(String, String)> {
    let captures = IMAGE.captures(text.trim())?;
    Some((group_or_empty(&captures, 1), group_or_empty(&captures, 2)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputData {
    pub kind_marker: Option<char>,
    pub disabled: bool,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    /// Present when the input carries a `[a|b]` option list, which makes it a select
    pub options: Option<Vec<String>>,
}

pub fn input(text: &str) -> Option<InputData> {
    let captures = INPUT.captures(text.trim())?;
    Some(InputData {
        kind_marker: marker(&captures, 1),
        disabled: captures.get(2).is_some(),
        label: group(&captures, 3),
        placeholder: group(&captures, 4),
        options: captures.get(5).map(|m| {
            split_values(m.as_str())
                .into_iter()
                .filter(|option| !option.is_empty())
                .collect()
        }),
    })
}

/// `(checked, label)` of a checkbox or radio line
pub fn check_mark(text: &str) -> Option<(bool, String)> {
    let captures = CHECK_MARK.captures(text.trim())?;
    let checked = captures.get(1)?.as_str() != " ";
    Some((checked, group_or_empty(&captures, 2)))
}

pub fn list_item(text: &str) -> Option<String> {
    LIST_ITEM
        .captures(text.trim())
        .map(|captures| group_or_empty(&captures, 1))
}

/// `(component name, template values)` of a `$Name: a|b` reference
pub fn component_ref(text: &str) -> Option<(String, Vec<String>)> {
    let captures = COMPONENT_REF.captures(text.trim())?;
    let values = captures
        .get(2)
        .map(|m| split_values(m.as_str()))
        .unwrap_or_default();
    Some((group_or_empty(&captures, 1), values))
}

/// `(keyword, modifier segments)` of a layout header
pub fn layout(text: &str) -> Option<(String, Vec<String>)> {
    let captures = LAYOUT.captures(text.trim())?;
    let segments = captures
        .get(2)
        .map(|m| {
            m.as_str()
                .split('-')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    Some((group_or_empty(&captures, 1), segments))
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItemData {
    pub label: String,
    pub icon: Option<String>,
    pub action: Option<String>,
}

pub fn nav_item(text: &str) -> Option<NavItemData> {
    let captures = NAV_ITEM.captures(text.trim())?;
    Some(NavItemData {
        label: group_or_empty(&captures, 1),
        icon: group(&captures, 2),
        action: group(&captures, 3),
    })
}

/// `(icon, destination)` of a floating action button
pub fn fab(text: &str) -> Option<(Option<String>, Option<String>)> {
    let captures = FAB.captures(text.trim())?;
    Some((group(&captures, 1), group(&captures, 2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_screen_header() {
        assert_eq!(
            screen_header("screen Home (default):"),
            Some(ScreenHeader {
                name: "Home".into(),
                is_default: true
            })
        );
        assert_eq!(
            screen_header("screen my-settings:").map(|h| h.is_default),
            Some(false)
        );
        assert_eq!(screen_header("screen :"), None);
    }

    #[rstest]
    #[case("# One", 1, "One")]
    #[case("###### Six", 6, "Six")]
    #[case("##   Padded  ", 2, "Padded")]
    fn test_heading(#[case] text: &str, #[case] level: u8, #[case] content: &str) {
        assert_eq!(heading(text), Some((level, content.to_string())));
    }

    #[test]
    fn test_button_full() {
        let data = button("@_+[Save]{check}(save())").unwrap();
        assert_eq!(data.variant_marker, Some('_'));
        assert_eq!(data.size_marker, Some('+'));
        assert_eq!(data.label, "Save");
        assert_eq!(data.icon.as_deref(), Some("check"));
        assert_eq!(data.action.as_deref(), Some("save()"));
    }

    #[test]
    fn test_button_minimal() {
        let data = button("@[Go]").unwrap();
        assert_eq!(data.variant_marker, None);
        assert_eq!(data.icon, None);
        assert_eq!(data.action, None);
    }

    #[test]
    fn test_input_and_select() {
        let data = input("___*:Password{secret}").unwrap();
        assert_eq!(data.kind_marker, Some('*'));
        assert_eq!(data.label.as_deref(), Some("Password"));
        assert_eq!(data.placeholder.as_deref(), Some("secret"));
        assert_eq!(data.options, None);

        let data = input("___-:Role[Admin | User]").unwrap();
        assert!(data.disabled);
        assert_eq!(
            data.options,
            Some(vec!["Admin".to_string(), "User".to_string()])
        );

        let bare = input("___").unwrap();
        assert_eq!(bare.label, None);
    }

    #[test]
    fn test_check_marks() {
        assert_eq!(check_mark("[X] Remember"), Some((true, "Remember".into())));
        assert_eq!(check_mark("( ) Yearly"), Some((false, "Yearly".into())));
    }

    #[test]
    fn test_component_ref_values() {
        assert_eq!(
            component_ref("$Card: Hello | World"),
            Some(("Card".into(), vec!["Hello".into(), "World".into()]))
        );
        assert_eq!(component_ref("$Card:"), Some(("Card".into(), vec![])));
        assert_eq!(component_ref("$Card"), Some(("Card".into(), vec![])));
    }

    #[test]
    fn test_layout_segments() {
        assert_eq!(
            layout("row-gap4-p2-center:"),
            Some((
                "row".into(),
                vec!["gap4".into(), "p2".into(), "center".into()]
            ))
        );
        assert_eq!(layout("card :"), Some(("card".into(), vec![])));
    }

    #[test]
    fn test_nav_item() {
        let data = nav_item("- Home {home} (Home)").unwrap();
        assert_eq!(data.label, "Home");
        assert_eq!(data.icon.as_deref(), Some("home"));
        assert_eq!(data.action.as_deref(), Some("Home"));

        let plain = nav_item("- Profile").unwrap();
        assert_eq!(plain.label, "Profile");
        assert_eq!(plain.action, None);
    }

    #[test]
    fn test_css_declaration() {
        assert_eq!(
            css_declaration("--primary: #3366ff;"),
            Some(("--primary".into(), "#3366ff".into()))
        );
    }

    #[test]
    fn test_fab() {
        assert_eq!(
            fab("(+){plus}(Compose)"),
            Some((Some("plus".into()), Some("Compose".into())))
        );
        assert_eq!(fab("(+)"), Some((None, None)));
    }
}
