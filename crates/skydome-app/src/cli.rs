use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Skydome: renders the procedural sky dome background headlessly.
#[derive(Parser, Debug)]
#[command(name = "skydome", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a full filter).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Number of frames to simulate before rendering.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Viewport width override in pixels.
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Viewport height override in pixels.
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Write the final frame as a PNG.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Write the final uniform set as JSON.
    #[arg(long)]
    pub uniforms: Option<PathBuf>,

    /// Scripted input source.
    #[arg(long, value_enum, default_value_t = InputScript::Circle)]
    pub script: InputScript,
}

/// Synthetic pointer and wheel input for headless runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputScript {
    /// Pointer circles the viewport center while the wheel ramps up.
    Circle,
    /// No input at all.
    Still,
}

pub fn parse() -> Args {
    Args::parse()
}
