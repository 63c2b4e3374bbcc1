//! Output Module
//!
//! Code-style primitives used when rendering generated code

pub mod snippets;
