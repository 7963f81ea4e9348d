// src/main.rs

//! Headless host for the overlay.
//!
//! Key events are read from stdin, one token per line (`a`, `BackSpace`,
//! `Escape`, `Return`, ...). On acceptance the picked area is printed to
//! stdout as `x,y wxh`.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::{bail, Context};
use gridpick::{
    config::CONFIG,
    keys::KeyEvent,
    orchestrator::{AppOrchestrator, Driver},
    renderer::RenderCommand,
};
use log::{error, info};

const DEFAULT_OUTPUT_SIZE: (i32, i32) = (1920, 1080);

/// Reads scripted key tokens from stdin; frames are optionally dumped as
/// JSON lines to stderr.
struct StdinDriver {
    lines: io::Lines<io::StdinLock<'static>>,
    output_size: (i32, i32),
    dump_frames: bool,
}

impl Driver for StdinDriver {
    fn poll_key(&mut self) -> anyhow::Result<Option<KeyEvent>> {
        for line in self.lines.by_ref() {
            let line = line.context("Failed to read stdin")?;
            if let Some(event) = KeyEvent::parse(line.trim()) {
                return Ok(Some(event));
            }
        }
        Ok(None)
    }

    fn present(&mut self, commands: Vec<RenderCommand>) -> anyhow::Result<()> {
        log::debug!("Presenting frame of {} commands", commands.len());
        if self.dump_frames {
            let mut stderr = io::stderr().lock();
            serde_json::to_writer(&mut stderr, &commands).context("Failed to dump frame")?;
            writeln!(stderr)?;
        }
        Ok(())
    }

    fn output_size(&self) -> (i32, i32) {
        self.output_size
    }
}

struct Args {
    output_size: (i32, i32),
    dump_frames: bool,
}

fn parse_size(value: &str) -> anyhow::Result<(i32, i32)> {
    let (w, h) = value
        .split_once('x')
        .with_context(|| format!("Expected WxH, got `{}`", value))?;
    Ok((
        w.parse().with_context(|| format!("Bad width `{}`", w))?,
        h.parse().with_context(|| format!("Bad height `{}`", h))?,
    ))
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        output_size: DEFAULT_OUTPUT_SIZE,
        dump_frames: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--size" => {
                let value = iter.next().context("--size needs a value")?;
                args.output_size = parse_size(&value)?;
            }
            "--dump-frames" => args.dump_frames = true,
            other => bail!("Unknown argument `{}`", other),
        }
    }
    Ok(args)
}

fn run() -> anyhow::Result<bool> {
    let args = parse_args()?;
    let mut driver = StdinDriver {
        lines: io::stdin().lock().lines(),
        output_size: args.output_size,
        dump_frames: args.dump_frames,
    };
    info!("Output {}x{}", args.output_size.0, args.output_size.1);

    let mut orchestrator = AppOrchestrator::new(&mut driver, &CONFIG)?;
    match orchestrator.run()? {
        Some(area) => {
            println!("{},{} {}x{}", area.x, area.y, area.w, area.h);
            Ok(true)
        }
        None => Ok(false),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            info!("No area selected.");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
