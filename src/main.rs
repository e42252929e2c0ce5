use crate::commands::toc::{LocateCommand, RawCommand, ReadCommand};
use crate::commands::{Cli, Commands};
use anyhow::{Context, Result, bail};
use cdda_toc::{Track, read_cd_index, read_toc};
use clap::Parser;
use log::{debug, info};
use std::future::Future;
use std::time::Duration;

mod commands;

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Read(cmd) => run_detached(read(cmd))??,
        Commands::Raw(cmd) => raw(cmd)?,
        Commands::Locate(cmd) => locate(cmd),
    }

    Ok(())
}

/// Runs `future` to completion, then shuts the runtime down without waiting
/// for blocking workers. A drive stuck in `ioctl` keeps its worker thread
/// until the process exits.
fn run_detached<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(future);
    runtime.shutdown_background();
    Ok(output)
}

async fn read(cmd: ReadCommand) -> Result<()> {
    let device = cmd.device.clone();
    let task = tokio::task::spawn_blocking(move || read_cd_index(&device));

    let tracks = match cmd.timeout {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), task).await {
            Ok(joined) => joined?,
            Err(_) => bail!("{:?} did not answer within {}s", cmd.device, secs),
        },
        None => task.await?,
    }
    .with_context(|| format!("Failed to read the CD index from {:?}", cmd.device))?;

    debug!("Read {} audio tracks", tracks.len());

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&tracks)?);
    } else if tracks.is_empty() {
        info!("No audio tracks found on {:?}", cmd.device);
    } else {
        for track in &tracks {
            println!("{}", format_track(track));
        }
    }

    Ok(())
}

fn raw(cmd: RawCommand) -> Result<()> {
    let entries = read_toc(&cmd.device)
        .with_context(|| format!("Failed to read the TOC from {:?}", cmd.device))?;

    for entry in entries {
        let label = if entry.is_lead_out() {
            "lead-out".to_string()
        } else {
            format!("{:>8}", entry.track_number)
        };
        let kind = if entry.is_data_track { "data" } else { "audio" };
        println!("{label} {} {kind}", entry.position);
    }

    Ok(())
}

fn locate(cmd: LocateCommand) {
    println!("track:  {}", cmd.locator.track_number);
    println!("device: {}", cmd.locator.device_path.display());
}

fn format_track(track: &Track) -> String {
    let total = track.duration_seconds;
    let minutes = (total / 60.0).trunc();
    let seconds = total - minutes * 60.0;
    format!(
        "{:>2}  {:<10} {}:{:05.2}  {}",
        track.track_number, track.display_title, minutes, seconds, track.locator
    )
}
