//! Input processing module
//! Handles file detection, text extraction, pasted input and input management

pub mod file_detector;
pub mod text_extractor;
pub mod manager;
