//! Token stream transformations applied after base tokenization

pub mod semantic_indentation;
