// src/lib.rs
pub mod config;
pub mod dev;
pub mod error;
pub mod fsa;
pub mod lexer;
pub mod report;

pub use error::{Error, Result};
