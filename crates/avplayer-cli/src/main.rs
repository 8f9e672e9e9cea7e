//! AVPlayer CLI - headless demo host for the playback facade
//!
//! Drives the facade against an in-process simulated runtime through an
//! interactive command loop, taking the place of the TV remote handler.

use anyhow::Result;
use avplayer_core::{AvPlayRuntime, PresetId, TrackKind, VideoPlayer};
use clap::Parser;
use std::io::{self, BufRead, Write};
use url::Url;

mod sim;

use sim::{ConsoleSurface, SimDevice, SimRuntime};

/// AVPlayer - smart-TV playback facade demo
#[derive(Parser)]
#[command(name = "avplayer")]
#[command(version)]
#[command(about = "Interactive demo host for the playback/DRM facade", long_about = None)]
struct Cli {
    /// Preset selected at startup (no-drm, playready, playready-challenge, widevine)
    #[arg(short, long, default_value = "no-drm")]
    preset: String,

    /// Content URL override for the first play command
    #[arg(short, long)]
    url: Option<Url>,

    /// Simulated display width in pixels
    #[arg(long, default_value = "1920")]
    display_width: u32,

    /// Simulate a panel without UHD support
    #[arg(long)]
    no_uhd_panel: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_preset(name: &str) -> Option<PresetId> {
    match name {
        "no-drm" => Some(PresetId::NoDrm),
        "playready" => Some(PresetId::PlayReady),
        "playready-challenge" => Some(PresetId::PlayReadyChallenge),
        "widevine" => Some(PresetId::Widevine),
        _ => None,
    }
}

fn parse_track_kind(name: &str) -> Option<TrackKind> {
    match name {
        "video" => Some(TrackKind::Video),
        "audio" => Some(TrackKind::Audio),
        "text" => Some(TrackKind::Text),
        _ => None,
    }
}

const HELP: &str = "\
commands:
  play [url]        open a session for the active preset (or url) and start
  pause             pause / resume / start
  pp                play-pause toggle
  stop              stop the session
  ff | rew          seek +/- 3s
  next | prev       cycle the active preset
  preset <name>     select preset: no-drm, playready, playready-challenge, widevine
  uhd               toggle the UHD request
  4k                request 4K streaming mode now
  bitrate <from> <to> [start] [skip]
  track <kind> <n>  select a video/audio/text track
  tracks            show the stream's track list
  props             show streaming properties
  fs                toggle fullscreen
  state             show facade and runtime state
  help              this text
  quit              exit";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(level).init();

    avplayer_core::init();

    let runtime = SimRuntime::new();
    let device = SimDevice {
        display_width: cli.display_width,
        uhd_panel: !cli.no_uhd_panel,
    };
    let mut player = VideoPlayer::new(runtime, device, ConsoleSurface);

    match parse_preset(&cli.preset) {
        Some(id) => player.set_chosen_drm(id),
        None => anyhow::bail!("unknown preset '{}'", cli.preset),
    }

    println!("avplayer demo host - 'help' lists commands");
    println!("presets:");
    for preset in player.catalog().iter() {
        let marker = if preset.id == player.active_preset().id { '>' } else { ' ' };
        println!("  {marker} {} - {}", preset.id, preset.name);
    }

    let mut startup_url = cli.url;
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;
        let mut args = line.split_whitespace();
        let Some(command) = args.next() else {
            continue;
        };

        match command {
            "play" => {
                let url = match args.next() {
                    Some(raw) => match Url::parse(raw) {
                        Ok(url) => Some(url),
                        Err(error) => {
                            println!("bad url: {error}");
                            continue;
                        }
                    },
                    None => startup_url.take(),
                };
                player.play(url.as_ref());
            }
            "pause" => player.pause(),
            "pp" => player.play_pause(),
            "stop" => player.stop(),
            "ff" => player.ff(),
            "rew" => player.rew(),
            "next" => {
                player.next_preset();
                println!("preset: {}", player.active_preset().name);
            }
            "prev" => {
                player.prev_preset();
                println!("preset: {}", player.active_preset().name);
            }
            "preset" => match args.next().and_then(parse_preset) {
                Some(id) => {
                    player.set_chosen_drm(id);
                    println!("preset: {}", player.active_preset().name);
                }
                None => println!("usage: preset <no-drm|playready|playready-challenge|widevine>"),
            },
            "uhd" => {
                let enabled = player.toggle_uhd();
                println!("uhd requested: {enabled}");
            }
            "4k" => player.set_4k(),
            "bitrate" => {
                let mut numbers = args.map(|a| a.parse::<u64>());
                match (numbers.next(), numbers.next()) {
                    (Some(Ok(from)), Some(Ok(to))) => {
                        let start = numbers.next().and_then(|n| n.ok());
                        let skip = numbers.next().and_then(|n| n.ok());
                        player.set_bitrate(from, to, start, skip);
                    }
                    _ => println!("usage: bitrate <from> <to> [start] [skip]"),
                }
            }
            "track" => {
                let kind = args.next().and_then(parse_track_kind);
                let index = args.next().and_then(|a| a.parse::<u32>().ok());
                match (kind, index) {
                    (Some(kind), Some(index)) => player.set_track(kind, index),
                    _ => println!("usage: track <video|audio|text> <index>"),
                }
            }
            "tracks" => {
                player.get_tracks();
            }
            "props" => {
                player.get_properties();
            }
            "fs" => player.toggle_fullscreen(),
            "state" => {
                let runtime_state = player.runtime_mut().state();
                println!(
                    "preset: {} | runtime: {} | fullscreen: {} | uhd: {} | window: {}",
                    player.active_preset().name,
                    runtime_state,
                    player.is_fullscreen(),
                    player.is_uhd_requested(),
                    player.window_rect(),
                );
            }
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("unknown command '{other}' - 'help' lists commands"),
        }
    }

    Ok(())
}
