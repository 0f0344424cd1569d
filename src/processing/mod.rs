//! Text processing, keyword matching and packet analysis

pub mod text_processor;
pub mod keyword_bank;
pub mod phrases;
pub mod matcher;
pub mod red_flags;
pub mod edits;
pub mod interview;
pub mod analyzer;
