//! Main module for lyrictag library functionality

pub mod ast;
pub mod classify;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod render;
pub mod testing;
