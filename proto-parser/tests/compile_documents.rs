//! End-to-end compile tests over the shared samples

use proto_parser::proto::ast::{ButtonSize, ButtonVariant, InputKind, NodeKind, TextVariant};
use proto_parser::proto::testing::{assert_ast, samples};
use proto_parser::{compile, Stage};

#[test]
fn test_home_and_settings() {
    let result = compile(samples::HOME_AND_SETTINGS, None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    assert_ast(&result.document)
        .item_count(2)
        .screen_names(&["Home", "Settings"])
        .item(0, |item| {
            item.id("screen-0")
                .assert_screen()
                .name("Home")
                .is_default(true)
                .child_count(2)
                .child(0, |child| {
                    child.assert_heading().level(1).content("Welcome");
                })
                .child(1, |child| {
                    child
                        .id("button-0-1")
                        .assert_button()
                        .text("Go")
                        .action("Settings")
                        .variant(ButtonVariant::Primary)
                        .size(ButtonSize::Medium);
                });
        })
        .item(1, |item| {
            item.assert_screen()
                .name("Settings")
                .is_default(false)
                .child(0, |child| {
                    child
                        .assert_text()
                        .variant(TextVariant::Paragraph)
                        .content("Settings page");
                });
        });
}

#[test]
fn test_kitchen_sink_compiles_cleanly() {
    let result = compile(samples::KITCHEN_SINK, None);
    assert!(result.errors.is_empty(), "{:?}", result.errors);

    assert_ast(&result.document)
        .item_count(6)
        .item(0, |item| {
            item.tag("styles");
        })
        .item(1, |item| {
            item.assert_screen()
                .name("Home")
                .is_default(true)
                .child(2, |child| {
                    child.assert_text().variant(TextVariant::Muted);
                })
                .child(3, |child| {
                    child.assert_text().variant(TextVariant::Quote).content("Quoted text");
                })
                .child(5, |child| {
                    child
                        .assert_button()
                        .text("Save")
                        .icon("check")
                        .action("save()")
                        .variant(ButtonVariant::Secondary)
                        .size(ButtonSize::Large);
                })
                .child(6, |child| {
                    child.kind(NodeKind::Link {
                        text: "Docs".into(),
                        destination: "https://x.dev".into(),
                    });
                })
                .child(7, |child| {
                    child.kind(NodeKind::Image {
                        src: "logo.png".into(),
                        alt: "Logo".into(),
                    });
                })
                .child(8, |child| {
                    child.kind(NodeKind::Input {
                        kind: InputKind::Text,
                        label: Some("Email".into()),
                        placeholder: Some("you@mail.com".into()),
                        disabled: false,
                    });
                })
                .child(9, |child| {
                    child.tag("select");
                })
                .child(10, |child| {
                    child.kind(NodeKind::Checkbox {
                        checked: true,
                        label: "Remember me".into(),
                    });
                })
                .child(11, |child| {
                    child.tag("radio");
                })
                .child(12, |child| {
                    child.assert_list().items(&["item"]);
                })
                .child(13, |child| {
                    child.tag("separator");
                })
                .child(14, |child| {
                    child.kind(NodeKind::ComponentInstance {
                        component_name: "Card".into(),
                        template_values: vec!["Hello".into(), "World".into()],
                    });
                })
                .child(15, |child| {
                    child
                        .assert_list()
                        .component("Card")
                        .rows(&[&["One", "First"], &["Two", "Second"]]);
                })
                .child(16, |child| {
                    child
                        .assert_layout()
                        .modifier("gap", "4")
                        .modifier("p", "2")
                        .child_count(1);
                })
                .child(17, |child| {
                    child.tag("nav");
                })
                .child(18, |child| {
                    child.kind(NodeKind::Fab {
                        icon: "plus".into(),
                        destination: "Compose".into(),
                    });
                });
        })
        .item(3, |item| {
            item.assert_component()
                .name("Card")
                .child(0, |child| {
                    child.assert_heading().content("%title");
                });
        })
        .item(4, |item| {
            item.assert_modal().name("Confirm").child_count(2);
        })
        .item(5, |item| {
            item.assert_drawer().name("Menu").child_count(1);
        });
}

#[test]
fn test_two_independent_errors_are_both_reported() {
    let result = compile(samples::TWO_ERRORS, None);
    let parser_errors: Vec<_> = result
        .errors
        .iter()
        .filter(|error| error.stage == Stage::Parser)
        .collect();

    assert_eq!(parser_errors.len(), 2, "{:?}", result.errors);
    assert_eq!(parser_errors[0].line, 3);
    assert_eq!(parser_errors[1].line, 6);

    assert_ast(&result.document)
        .item_count(2)
        .item(0, |item| {
            item.assert_screen().child_count(2);
        })
        .item(1, |item| {
            item.assert_screen().child_count(1);
        });
}

#[test]
fn test_duplicate_screen_is_reported_and_dropped() {
    let result = compile("screen A:\n  > one\nscreen A:\n  > two\n", None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, "duplicate-name");
    assert_eq!(result.errors[0].line, 3);
    assert_ast(&result.document).item_count(1);
}

#[test]
fn test_second_default_is_reported() {
    let result = compile("screen A (default):\nscreen B (default):\n", None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].code, "multiple-defaults");
    assert_eq!(result.document.default_screen(), Some("A"));
}

#[test]
fn test_errors_serialize_for_editors() {
    let result = compile("screen A:\n  oops\n", None);
    let json = serde_json::to_value(&result.errors).unwrap();
    assert_eq!(json[0]["stage"], "parser");
    assert_eq!(json[0]["severity"], "error");
    assert_eq!(json[0]["line"], 2);
    assert_eq!(json[0]["column"], 3);
    assert_eq!(json[0]["unexpected"], "oops");
}

#[test]
fn test_deep_nesting_is_cut_instead_of_overflowing() {
    let mut source = String::from("screen A:\n");
    for level in 1..=400 {
        source.push_str(&format!("{}row:\n", "  ".repeat(level)));
    }
    source.push_str(&format!("{}> deep\n", "  ".repeat(401)));

    let result = compile(&source, None);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].stage, Stage::Parser);
    assert_eq!(result.errors[0].code, "nesting-too-deep");
    assert_eq!(result.document.children.len(), 1);
}
