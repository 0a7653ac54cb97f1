//! Main module for the vyxal front end

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod symbols;
pub mod testing;
