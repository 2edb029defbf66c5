pub mod app;
pub mod events;
pub mod footer;
pub mod input;
pub mod layout;
pub mod letter;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
