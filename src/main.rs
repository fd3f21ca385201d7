//! reels-replay: drive a widget through a scripted input sequence.
//!
//! ```text
//! reels-replay <config.json> <script.json> [settings.json]
//! ```
//!
//! The script is a JSON array of steps. Each step fires at `at_ms` after the
//! start and either routes an `input` or advances every playing video by
//! `advance_secs`. Each routed result is printed as one JSON line, then the
//! final view.

use anyhow::{bail, Context, Result};
use evo_reels::app::{ReelsWidget, WidgetInput};
use evo_reels::media::SimulatedMedia;
use evo_reels::overlay::InMemoryBody;
use evo_reels::perf::InputTimings;
use evo_reels::types::Viewport;
use evo_reels::{HostConfig, WidgetSettings};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Length of every simulated video
const SIMULATED_DURATION_SECS: f64 = 30.0;

#[derive(Debug, Deserialize)]
struct Step {
    #[serde(default)]
    at_ms: u64,
    #[serde(default)]
    input: Option<WidgetInput>,
    #[serde(default)]
    advance_secs: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "evo_reels=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let (Some(config_path), Some(script_path)) = (args.next(), args.next()) else {
        bail!("usage: reels-replay <config.json> <script.json> [settings.json]");
    };
    let settings = match args.next() {
        Some(path) => WidgetSettings::load(&path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => WidgetSettings::default(),
    };

    let host = HostConfig::load(&config_path)
        .with_context(|| format!("failed to load host config from {}", config_path.display()))?;
    let script = std::fs::read_to_string(&script_path)
        .with_context(|| format!("failed to read script {}", script_path.display()))?;
    let steps: Vec<Step> = serde_json::from_str(&script)
        .with_context(|| format!("failed to parse script {}", script_path.display()))?;

    let mut widget = ReelsWidget::new(host, settings, Viewport::default(), InMemoryBody::new(), |url: &str| {
        SimulatedMedia::new(url).with_duration(SIMULATED_DURATION_SECS)
    });

    let start = Instant::now();
    let mut timings = InputTimings::default();

    for (index, step) in steps.into_iter().enumerate() {
        let at = start + Duration::from_millis(step.at_ms);
        widget.tick(at);

        if let Some(seconds) = step.advance_secs {
            advance(&mut widget, seconds, at);
        }
        let Some(input) = step.input else {
            continue;
        };

        let name = input_name(&input);
        let timer = Instant::now();
        let routed = widget.dispatch(input, at);
        timings.record(&name, timer.elapsed().as_secs_f64() * 1000.0);

        let line = serde_json::to_string(&routed).context("failed to serialize routed result")?;
        println!("{index}: {line}");
    }

    let view = serde_json::to_string_pretty(&widget.view()).context("failed to serialize view")?;
    println!("{view}");

    for (name, stats) in timings.iter() {
        info!(
            input = name,
            dispatched = stats.dispatched(),
            avg_ms = stats.recent_average_ms(),
            worst_ms = stats.worst_ms(),
            over_budget = stats.over_budget(),
            "Input timing"
        );
    }
    if timings.frames_missed() > 0 {
        warn!(frames_missed = timings.frames_missed(), "Replay had handlers over the frame budget");
    }
    Ok(())
}

/// Let simulated time pass for every playing video, then deliver time updates.
fn advance(widget: &mut ReelsWidget<SimulatedMedia>, seconds: f64, at: Instant) {
    if let Some(player) = widget.player_mut() {
        player.media_mut().advance(seconds);
    }
    let Some(overlay) = widget.overlay_mut() else {
        return;
    };
    let carousel = overlay.carousel_mut();
    let moved: Vec<usize> = (0..carousel.len())
        .filter(|&reel| carousel.media_mut(reel).is_some_and(|media| media.advance(seconds)))
        .collect();
    for reel in moved {
        widget.dispatch(WidgetInput::TimeUpdate { reel }, at);
    }
}

fn input_name(input: &WidgetInput) -> String {
    let debug = format!("{input:?}");
    debug.split([' ', '{']).next().unwrap_or_default().to_string()
}
