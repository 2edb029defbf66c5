use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::ui::theme::ColorMode;

#[derive(Debug, Parser)]
#[command(name = "ventured")]
#[command(about = "VenturEd fellowship landing page, in your terminal")]
#[command(version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Use the light colour scheme
    #[arg(long)]
    pub light: bool,

    /// Disable the falling-glyph backdrop
    #[arg(long)]
    pub no_rain: bool,

    /// Frames per second
    #[arg(long, value_name = "N")]
    pub fps: Option<u32>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print the navigation targets and exit
    #[arg(long)]
    pub print_links: bool,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if self.light {
            config.page.color_mode = ColorMode::Light;
        }
        if self.no_rain {
            config.animation.rain = false;
        }
        if let Some(fps) = self.fps {
            config.page.fps = fps;
        }
    }
}
