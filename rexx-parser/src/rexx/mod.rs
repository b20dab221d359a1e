//! Main module for REXX highlighting and indentation.

pub mod host;
pub mod indentation;
pub mod lexing;
pub mod outline;
pub mod range;
pub mod testing;
pub mod token;
pub mod vocabulary;
