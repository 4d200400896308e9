mod cli;
mod host;

use std::process::ExitCode;

use skydome_common::Result;
use skydome_config::schema::LogLevel;
use skydome_config::SessionConfig;
use skydome_render::{InputState, Scene};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

fn init_logging(args: &Args, level: Option<LogLevel>) {
    let fallback = format!(
        "skydome={}",
        level.unwrap_or(LogLevel::Info).as_directive()
    );
    let directive = args.log_level.clone().unwrap_or_else(|| fallback.clone());
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(_) => match fallback.parse() {
            Ok(d) => filter.add_directive(d),
            Err(_) => filter,
        },
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(args: &Args) -> Result<SessionConfig> {
    let config = match &args.config {
        Some(path) => skydome_config::load_config_from(path)?,
        None => skydome_config::load_config()?,
    };
    Ok(config)
}

fn apply_overrides(args: &Args, config: &mut SessionConfig) {
    if let Some(frames) = args.frames {
        config.render.frames = frames;
    }
    if let (Some(width), Some(height)) = (args.width, args.height) {
        config.viewport.width = width;
        config.viewport.height = height;
    }
}

fn run(args: &Args, mut config: SessionConfig) -> Result<()> {
    apply_overrides(args, &mut config);
    tracing::debug!("Effective config:\n{}", skydome_config::config_to_json(&config));

    let mut scene = Scene::new(&config)?;
    let mut input = InputState::from_config(&config.controller);
    let frame = host::run_frames(
        &mut scene,
        &mut input,
        args.script,
        config.render.frames,
        config.render.frame_rate,
    );

    if let Some(path) = &args.output {
        host::write_png(path, &frame)?;
    }
    if let Some(path) = &args.uniforms {
        host::write_uniforms(path, scene.uniforms())?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Logging needs the config's level, so load first and report afterwards.
    let loaded = load_config(&args);
    init_logging(&args, loaded.as_ref().ok().map(|c| c.logging.level));

    tracing::info!("Skydome v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = match loaded {
        Ok(config) => config,
        Err(e) if args.config.is_some() => {
            tracing::error!("Config load failed: {e}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            tracing::warn!("Config load failed, using defaults: {e}");
            SessionConfig::default()
        }
    };

    match run(&args, config) {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
