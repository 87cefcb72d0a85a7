//! Output format implementations
//!
//! Each format lives in its own module and implements the
//! [`Format`](crate::format::Format) trait. DOCX is the production target;
//! json, markdown and tag exist for inspection and testing.

pub mod docx;
pub mod json;
pub mod markdown;
pub mod tag;
