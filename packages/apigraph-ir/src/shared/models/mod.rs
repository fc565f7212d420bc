//! Shared data models

pub mod content;
pub mod names;

pub use content::{Content, DocRun, DocText, Paragraph};
