//! Layout modifier parsing
//!
//! A layout keyword may carry a hyphen-delimited suffix: `row-gap4-p2-center:`. Each segment
//! is either a sized key (`w`, `h`, `p`, `m`, `px`, `py`, `gap`, `cols` followed by a value)
//! or an alignment keyword:
//!
//! - horizontal: `left`, `center`, `right`, `between`, `around`, `evenly`
//! - vertical: `top`, `middle`, `bottom`, `stretch`
//!
//! The last segment wins for each key and each axis. There is no validation beyond "is a
//! known key"; segments outside the vocabulary are returned to the caller, which decides
//! whether they are worth a warning.

use crate::proto::ast::{Align, Justify, Modifiers};
use once_cell::sync::Lazy;
use regex::Regex;

static SIZED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(px|py|gap|cols|w|h|p|m)([0-9][A-Za-z0-9.%]*|full|auto|screen|fit)$").unwrap()
});

/// Parse modifier segments; returns the modifiers and the segments that were not understood.
pub fn parse_modifiers<S: AsRef<str>>(segments: &[S]) -> (Modifiers, Vec<String>) {
    let mut modifiers = Modifiers::default();
    let mut unknown = Vec::new();

    for segment in segments {
        let segment = segment.as_ref();
        if let Some(justify) = Justify::parse(segment) {
            modifiers.justify = Some(justify);
        } else if let Some(align) = Align::parse(segment) {
            modifiers.align = Some(align);
        } else if let Some(captures) = SIZED.captures(segment) {
            let value = Some(captures[2].to_string());
            match &captures[1] {
                "w" => modifiers.w = value,
                "h" => modifiers.h = value,
                "p" => modifiers.p = value,
                "m" => modifiers.m = value,
                "px" => modifiers.px = value,
                "py" => modifiers.py = value,
                "gap" => modifiers.gap = value,
                _ => modifiers.cols = value,
            }
        } else {
            unknown.push(segment.to_string());
        }
    }

    (modifiers, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_keys() {
        let (modifiers, unknown) = parse_modifiers(&["gap4", "p2", "px3", "cols12", "wfull"]);
        assert!(unknown.is_empty());
        assert_eq!(modifiers.gap.as_deref(), Some("4"));
        assert_eq!(modifiers.p.as_deref(), Some("2"));
        assert_eq!(modifiers.px.as_deref(), Some("3"));
        assert_eq!(modifiers.cols.as_deref(), Some("12"));
        assert_eq!(modifiers.w.as_deref(), Some("full"));
    }

    #[test]
    fn test_last_match_wins_per_key_and_axis() {
        let (modifiers, _) = parse_modifiers(&["gap2", "left", "top", "gap8", "center", "bottom"]);
        assert_eq!(modifiers.gap.as_deref(), Some("8"));
        assert_eq!(modifiers.justify, Some(Justify::Center));
        assert_eq!(modifiers.align, Some(Align::Bottom));
    }

    #[test]
    fn test_unknown_segments_are_returned() {
        let (modifiers, unknown) = parse_modifiers(&["shiny", "p4", "gap"]);
        assert_eq!(modifiers.p.as_deref(), Some("4"));
        assert_eq!(unknown, vec!["shiny".to_string(), "gap".to_string()]);
    }

    #[test]
    fn test_percent_and_decimal_values() {
        let (modifiers, _) = parse_modifiers(&["w50%", "h1.5"]);
        assert_eq!(modifiers.w.as_deref(), Some("50%"));
        assert_eq!(modifiers.h.as_deref(), Some("1.5"));
    }
}
