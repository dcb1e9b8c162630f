//! Token definitions for the proto language
//!
//!     Tokens are defined using the logos derive macro. Logos always prefers the longest match;
//!     when two patterns match the same text, the higher `priority` wins. Every pattern here
//!     carries an explicit priority, so the enum doubles as the ordered priority table:
//!
//!         declarations   screen / component / modal / drawer / styles headers
//!         elements       button, link, image, heading, texts, input, checkbox, radio, fab,
//!                        separator, list item, component reference, layout, navigator
//!         styles         css declarations (only valid inside a styles block)
//!         generic        identifiers, numbers and single delimiters
//!         structure      newline and whitespace
//!
//!     The specific-before-generic ordering matters where patterns can match the same text:
//!     `___` is both an identifier and an input, `[X]` is both a bracket run and a checkbox.
//!     See the shadowing tests at the bottom of this file.
//!
//!     Anything that matches no pattern (a stray `!`, `%`, `,`) is reported as a lexical error
//!     by the caller, which then continues with the next character.

use crate::proto::ast::range::Range;
use logos::Logos;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All token kinds produced by the proto lexer
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[logos(skip r"//[^\n]*")]
pub enum TokenKind {
    // Declarations
    #[regex(
        r"screen[ \t]+[A-Za-z_][A-Za-z0-9_-]*([ \t]*\(default\))?[ \t]*:",
        priority = 90
    )]
    ScreenDecl,
    #[regex(r"component[ \t]+[A-Za-z_][A-Za-z0-9_-]*[ \t]*:", priority = 89)]
    ComponentDecl,
    #[regex(r"modal[ \t]+[A-Za-z_][A-Za-z0-9_-]*[ \t]*:", priority = 88)]
    ModalDecl,
    #[regex(r"drawer[ \t]+[A-Za-z_][A-Za-z0-9_-]*[ \t]*:", priority = 87)]
    DrawerDecl,
    #[regex(r"styles[ \t]*:", priority = 86)]
    StylesDecl,

    // Elements
    #[regex(
        r"@[_=!~]?[+-]?\[[^\]\n]*\](\{[^}\n]*\})?(\(([^()\n]|\([^()\n]*\))*\))?",
        priority = 80
    )]
    Button,
    #[regex(r"#\[[^\]\n]*\]\([^)\n]*\)", priority = 79)]
    Link,
    #[regex(r"!\[[^\]\n]*\]\([^)\n]*\)", priority = 78)]
    Image,
    #[regex(r"#{1,6}[ \t][^\n]*", priority = 77)]
    Heading,
    #[regex(r"\*>[^\n]*", priority = 76)]
    MutedText,
    #[regex(r#"">[^\n]*"#, priority = 75)]
    QuoteText,
    #[regex(r">[^\n]*", priority = 74)]
    Paragraph,
    #[regex(r"___[*@#]?-?(:[^{\[\n]*)?(\{[^}\n]*\})?(\[[^\]\n]*\])?", priority = 73)]
    Input,
    #[regex(r"\[[xX ]\][^\n]*", priority = 72)]
    Checkbox,
    #[regex(r"\(\+\)(\{[^}\n]*\})?(\([^)\n]*\))?", priority = 71)]
    Fab,
    #[regex(r"\([xX ]\)[^\n]*", priority = 70)]
    Radio,
    #[regex(r"---+", priority = 69)]
    Separator,
    #[regex(r"-[ \t][^\n]*", priority = 68)]
    ListItem,
    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*([ \t]*:[^\n]*)?", priority = 67)]
    ComponentRef,
    #[regex(
        r"(container|row|col|grid|card|header)(-[A-Za-z0-9.%]+)*[ \t]*:",
        priority = 66
    )]
    Layout,
    #[regex(r"nav[ \t]*:", priority = 65)]
    Navigator,

    // Styles
    #[regex(r"-{0,2}[A-Za-z][A-Za-z0-9_-]*[ \t]*:[ \t]*[^ \t\n][^\n]*", priority = 50)]
    CssDeclaration,

    // Generic
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", priority = 20)]
    Identifier,
    #[regex(r"[0-9]+", priority = 19)]
    Number,
    #[token(":", priority = 18)]
    Colon,
    #[token("[", priority = 17)]
    OpenBracket,
    #[token("]", priority = 16)]
    CloseBracket,
    #[token("(", priority = 15)]
    OpenParen,
    #[token(")", priority = 14)]
    CloseParen,
    #[token("{", priority = 13)]
    OpenBrace,
    #[token("}", priority = 12)]
    CloseBrace,
    #[token("|", priority = 11)]
    Pipe,

    // Structure
    #[regex(r"\r?\n", priority = 10)]
    Newline,
    #[regex(r"[ \t]+", priority = 9)]
    Whitespace,

    // Synthetic (never produced by logos)
    Indent,
    Dedent,
    Eof,
}

impl TokenKind {
    /// Element level tokens, in the order they are listed in the grammar.
    pub const ELEMENTS: &'static [TokenKind] = &[
        TokenKind::Heading,
        TokenKind::Paragraph,
        TokenKind::MutedText,
        TokenKind::QuoteText,
        TokenKind::Button,
        TokenKind::Link,
        TokenKind::Image,
        TokenKind::Input,
        TokenKind::Checkbox,
        TokenKind::Radio,
        TokenKind::ListItem,
        TokenKind::Separator,
        TokenKind::ComponentRef,
        TokenKind::Layout,
        TokenKind::Navigator,
        TokenKind::Fab,
    ];

    /// Tokens that may start a top level declaration.
    pub const DECLARATIONS: &'static [TokenKind] = &[
        TokenKind::StylesDecl,
        TokenKind::ScreenDecl,
        TokenKind::ComponentDecl,
        TokenKind::ModalDecl,
        TokenKind::DrawerDecl,
    ];

    pub fn is_declaration(&self) -> bool {
        Self::DECLARATIONS.contains(self)
    }

    pub fn is_element(&self) -> bool {
        Self::ELEMENTS.contains(self)
    }

    /// Structural tokens are synthetic or layout-only.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TokenKind::Newline
                | TokenKind::Whitespace
                | TokenKind::Indent
                | TokenKind::Dedent
                | TokenKind::Eof
        )
    }

    /// Human readable name used in diagnostics
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::ScreenDecl => "screen declaration",
            TokenKind::ComponentDecl => "component declaration",
            TokenKind::ModalDecl => "modal declaration",
            TokenKind::DrawerDecl => "drawer declaration",
            TokenKind::StylesDecl => "styles block",
            TokenKind::Button => "button",
            TokenKind::Link => "link",
            TokenKind::Image => "image",
            TokenKind::Heading => "heading",
            TokenKind::MutedText => "muted text",
            TokenKind::QuoteText => "quote text",
            TokenKind::Paragraph => "text",
            TokenKind::Input => "input",
            TokenKind::Checkbox => "checkbox",
            TokenKind::Fab => "floating action button",
            TokenKind::Radio => "radio option",
            TokenKind::Separator => "separator",
            TokenKind::ListItem => "list item",
            TokenKind::ComponentRef => "component reference",
            TokenKind::Layout => "layout",
            TokenKind::Navigator => "navigator",
            TokenKind::CssDeclaration => "css property",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Colon => "':'",
            TokenKind::OpenBracket => "'['",
            TokenKind::CloseBracket => "']'",
            TokenKind::OpenParen => "'('",
            TokenKind::CloseParen => "')'",
            TokenKind::OpenBrace => "'{'",
            TokenKind::CloseBrace => "'}'",
            TokenKind::Pipe => "'|'",
            TokenKind::Newline => "end of line",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Indent => "indented block",
            TokenKind::Dedent => "end of block",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A token with its source text and location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub range: Range,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, range: Range) -> Self {
        Self {
            kind,
            text: text.into(),
            range,
        }
    }

    /// A token that has no source text of its own (Indent, Dedent, Eof).
    pub fn synthetic(kind: TokenKind, range: Range) -> Self {
        Self::new(kind, String::new(), range)
    }

    /// Length of the token in source bytes
    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// 0-based line of the token start
    pub fn line(&self) -> usize {
        self.range.start.line
    }

    /// 0-based column of the token start
    pub fn column(&self) -> usize {
        self.range.start.column
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {:?}", self.kind, self.text)
        }
    }
}
