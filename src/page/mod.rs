//! The landing page: copy and section layout.

pub mod content;
pub mod letter;
pub mod sections;

pub use sections::{PageLayout, Section, SectionSpan};
