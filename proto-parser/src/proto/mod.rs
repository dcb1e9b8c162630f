//! Main module for proto library functionality

pub mod ast;
pub mod building;
pub mod diagnostics;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod testing;
pub mod token;
