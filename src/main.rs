use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ventured::cli::Cli;
use ventured::config::Config;
use ventured::links::Links;
use ventured::navigate::{self, SystemOpener};
use ventured::shutdown::{self, ShutdownCoordinator};
use ventured::ui::{self, theme};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;
    cli.apply(&mut config);
    config.validate().context("invalid configuration")?;

    if cli.print_config {
        print!("{}", config.to_toml().context("failed to serialize configuration")?);
        return Ok(());
    }
    if cli.print_links {
        let links = Links::from(&config.links);
        println!("apply: {}", links.apply);
        println!("partnership: {}", links.partnership);
        println!("contact: {}", links.contact);
        return Ok(());
    }

    ventured::logging::init_tracing(&config.logging)?;
    theme::apply(config.page.color_mode);
    tracing::info!(fps = config.page.fps, rain = config.animation.rain, "starting page");

    let coordinator = ShutdownCoordinator::new();
    let (nav_tx, nav_rx) = navigate::channel();
    let navigator = tokio::spawn(navigate::run(
        Arc::new(SystemOpener::default()),
        nav_rx,
        coordinator.handle(),
    ));
    let signals = tokio::spawn(shutdown::listen_for_signals(coordinator.handle()));

    let ui_shutdown = coordinator.handle();
    let result = tokio::task::spawn_blocking(move || ui::run(&config, nav_tx, ui_shutdown))
        .await
        .context("terminal task panicked")?;

    coordinator.signal();
    shutdown::join_logged("navigator", navigator).await;
    shutdown::join_logged("signals", signals).await;
    tracing::info!("page closed");

    result.context("terminal UI failed")
}
