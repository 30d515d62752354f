// File: crates/demo/src/main.rs
// Summary: Replays one reveal run against a simulated host and writes the frames to disk.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trend_core::animator::{Clock, FrameHandle, FrameScheduler, ManualClock};
use trend_core::visibility::{IntersectionHost, ObserverId, RegionHandle, Threshold};
use trend_core::{AnimatedChart, ChartConfig, ChartPhase, IntersectionEntry, Scene};

#[derive(Parser, Debug)]
#[command(name = "trend-demo", about = "Render the symptom trend reveal frame by frame")]
struct Args {
    /// TOML chart config; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for frames.
    #[arg(long, default_value = "target/out/frames")]
    out: PathBuf,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Keep every Nth frame; the first and final frames are always kept.
    #[arg(long, default_value_t = 15)]
    every: usize,

    /// Also rasterize PNGs (needs the `raster` feature).
    #[arg(long)]
    png: bool,
}

/// Single-region host with a hand-driven clock.
#[derive(Default)]
struct SimHost {
    clock: ManualClock,
    next_id: u64,
    frame: Option<FrameHandle>,
}

impl IntersectionHost for SimHost {
    fn observe(&mut self, _region: RegionHandle, _threshold: Threshold) -> ObserverId {
        self.next_id += 1;
        ObserverId(self.next_id)
    }
    fn unobserve(&mut self, _observer: ObserverId) {}
}

impl FrameScheduler for SimHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.frame = Some(FrameHandle(self.next_id));
        self.frame
    }
    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.frame == Some(handle) { self.frame = None; }
    }
}

impl Clock for SimHost {
    fn now(&self) -> Duration { self.clock.now() }
}

fn write_frame(args: &Args, index: usize, scene: &Scene) -> Result<()> {
    let svg = args.out.join(format!("frame_{index:04}.svg"));
    scene.write_svg(&svg)?;
    if args.png {
        write_png(&svg.with_extension("png"), scene)?;
    }
    Ok(())
}

#[cfg(feature = "raster")]
fn write_png(path: &std::path::Path, scene: &Scene) -> Result<()> {
    use trend_core::render::{render_to_png, RasterOptions};
    render_to_png(scene, &RasterOptions::default(), path)
        .with_context(|| format!("rasterizing {}", path.display()))
}

#[cfg(not(feature = "raster"))]
fn write_png(_path: &std::path::Path, _scene: &Scene) -> Result<()> {
    anyhow::bail!("--png needs trend-demo built with `--features raster`")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => ChartConfig::default(),
    };
    let frame_dt = Duration::from_secs_f64(1.0 / args.fps.max(1) as f64);
    let every = args.every.max(1);
    info!(duration_ms = config.duration_ms, fps = args.fps, out = %args.out.display(), "replaying reveal");

    let clock = ManualClock::new();
    let host = SimHost { clock: clock.clone(), ..SimHost::default() };
    let mut chart = AnimatedChart::new(host, &config).context("building chart")?;

    let region = RegionHandle(1);
    chart.mount(region);
    write_frame(&args, 0, &chart.scene())?;

    chart.on_intersection(IntersectionEntry::new(region, 1.0));
    let mut index = 0usize;
    let mut written = 1usize;
    while let Some(handle) = chart.host_mut().frame.take() {
        clock.advance(frame_dt);
        chart.on_frame(handle);
        index += 1;
        if index % every == 0 || chart.phase() == ChartPhase::Settled {
            write_frame(&args, index, &chart.scene())?;
            written += 1;
        }
    }

    info!(frames = index, written, progress = chart.progress(), "reveal settled");
    println!("Wrote {} frames to {}", written, args.out.display());
    Ok(())
}
