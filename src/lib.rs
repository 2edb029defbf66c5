pub mod animation;
pub mod cli;
pub mod config;
pub mod links;
pub mod logging;
pub mod navigate;
pub mod page;
pub mod shutdown;
pub mod ui;
