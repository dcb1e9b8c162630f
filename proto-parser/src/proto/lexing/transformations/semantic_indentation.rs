//! Semantic indentation mapper
//!
//!     This mapper transforms leading whitespace runs into semantic Indent and Dedent tokens
//!     based on indentation changes between lines.
//!
//!     We don't care how many spaces a line has, we care about which block it belongs to.
//!     The mapper is a stateful machine over a stack of open indentation columns; at this point
//!     indent/dedent could be replaced by open/close braces with the same effect.
//!
//!     Indent tokens take the range of the whitespace they replace, while dedent tokens are
//!     synthetic and get an empty range at the start of the line that closes the block.
//!
//! Algorithm
//!
//!     1. Split the raw tokens into lines at each Newline token
//!     2. A line without content tokens is blank: keep its Newline, leave the stack alone
//!     3. Measure the leading whitespace (tabs count as `tab_width` columns) and compare with
//!        the top of the stack:
//!        - deeper: push the column, emit one Indent
//!        - shallower: pop and emit one Dedent per closed level; if the column now on top is
//!          still shallower than the line, the dedent matched no open level. Record an
//!          inconsistent dedent error and keep the line at the enclosing level.
//!        - equal: nothing to emit
//!     4. Drop every remaining whitespace token
//!     5. At the end, make sure the last line is terminated, close all levels, add Eof

use crate::proto::ast::range::{Range, SourceLocation};
use crate::proto::lexing::common::LexError;
use crate::proto::token::{Token, TokenKind};
use std::cmp::Ordering;

/// A mapper that converts leading whitespace into Indent/Dedent pairs.
pub struct SemanticIndentationMapper {
    tab_width: usize,
    levels: Vec<usize>,
}

impl SemanticIndentationMapper {
    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.max(1),
            levels: vec![0],
        }
    }

    /// Column width of a whitespace run
    fn width(&self, whitespace: &str) -> usize {
        whitespace
            .chars()
            .map(|c| if c == '\t' { self.tab_width } else { 1 })
            .sum()
    }

    fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Map raw tokens to structured tokens.
    ///
    /// # Example
    ///
    /// Input:  `[Heading, Newline, Whitespace("  "), Paragraph, Newline]`
    /// Output: `[Heading, Newline, Indent, Paragraph, Newline, Dedent, Eof]`
    pub fn map(&mut self, raw: Vec<Token>, source: &str) -> (Vec<Token>, Vec<LexError>) {
        let locations = SourceLocation::new(source);
        let mut result = Vec::with_capacity(raw.len() + 8);
        let mut errors = Vec::new();
        let mut line: Vec<Token> = Vec::new();

        for token in raw {
            if token.kind == TokenKind::Newline {
                self.map_line(std::mem::take(&mut line), &mut result, &mut errors);
                result.push(token);
            } else {
                line.push(token);
            }
        }

        // Last line without a trailing newline
        let has_content = line.iter().any(|t| t.kind != TokenKind::Whitespace);
        self.map_line(line, &mut result, &mut errors);
        let end = locations.byte_range_to_ast_range(&(source.len()..source.len()));
        if has_content {
            result.push(Token::synthetic(TokenKind::Newline, end.clone()));
        }

        for _ in 0..self.depth() {
            result.push(Token::synthetic(TokenKind::Dedent, end.clone()));
        }
        self.levels.truncate(1);
        result.push(Token::synthetic(TokenKind::Eof, end));

        (result, errors)
    }

    fn map_line(&mut self, line: Vec<Token>, result: &mut Vec<Token>, errors: &mut Vec<LexError>) {
        let Some(first_content) = line.iter().find(|t| t.kind != TokenKind::Whitespace) else {
            return;
        };
        let line_start = point(&first_content.range);

        let leading = match line.first() {
            Some(token) if token.kind == TokenKind::Whitespace => Some(token.clone()),
            _ => None,
        };
        let column = leading
            .as_ref()
            .map(|token| self.width(&token.text))
            .unwrap_or(0);
        let current = *self.levels.last().unwrap_or(&0);

        match column.cmp(&current) {
            Ordering::Greater => {
                self.levels.push(column);
                let range = leading.map(|token| token.range).unwrap_or(line_start);
                result.push(Token::synthetic(TokenKind::Indent, range));
            }
            Ordering::Less => {
                while self.depth() > 0 && *self.levels.last().unwrap_or(&0) > column {
                    self.levels.pop();
                    result.push(Token::synthetic(TokenKind::Dedent, line_start.clone()));
                }
                if *self.levels.last().unwrap_or(&0) != column {
                    errors.push(LexError::InconsistentDedent {
                        column,
                        open_columns: self.levels.clone(),
                        range: leading.map(|token| token.range).unwrap_or(line_start),
                    });
                }
            }
            Ordering::Equal => {}
        }

        result.extend(
            line.into_iter()
                .filter(|token| token.kind != TokenKind::Whitespace),
        );
    }
}

/// Empty range at the start of another range
fn point(range: &Range) -> Range {
    Range::new(
        range.span.start..range.span.start,
        range.start,
        range.start,
    )
}
