use anyhow::{Context, Result};
use arcade_drive::host::InputScript;
use arcade_drive::{KinematicState, Preset, Simulation, TickOutcome, VehicleConfig};
use clap::Parser;
use serde::Serialize;
use std::{fs, path::PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "drive_headless",
    version,
    about = "Replay an input timeline through the vehicle core without a window"
)]
struct Opts {
    /// Handling preset: drag_slip, projected_slip or accumulator
    #[arg(long, default_value = "drag_slip")]
    preset: Preset,

    /// Vehicle config JSON (overrides --preset)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input timeline JSON: [{"ticks": 120, "accelerate": true}, ...]
    #[arg(long)]
    script: Option<PathBuf>,

    /// Seconds per tick
    #[arg(long, default_value_t = arcade_drive::sim::DT)]
    dt: f32,

    /// Log the pose every N ticks (0 disables)
    #[arg(long, default_value_t = 60)]
    report_every: u64,

    /// Print the final state as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary {
    ticks: u64,
    quit: bool,
    state: KinematicState,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }
}

fn load_config(opts: &Opts) -> Result<VehicleConfig> {
    match &opts.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading vehicle config {}", path.display()))?;
            VehicleConfig::from_json(&json)
                .with_context(|| format!("loading vehicle config {}", path.display()))
        }
        None => Ok(opts.preset.config()),
    }
}

fn load_script(opts: &Opts) -> Result<InputScript> {
    match &opts.script {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading input script {}", path.display()))?;
            InputScript::from_json(&json)
                .with_context(|| format!("parsing input script {}", path.display()))
        }
        None => Ok(InputScript::demo()),
    }
}

fn main() -> Result<()> {
    init_tracing();
    let opts = Opts::parse();

    anyhow::ensure!(
        opts.dt.is_finite() && opts.dt >= 0.0,
        "--dt must be a non-negative number, got {}",
        opts.dt
    );

    let config = load_config(&opts)?;
    let script = load_script(&opts)?;
    let mut sim = Simulation::new(config)?;

    info!(
        ticks = script.total_ticks(),
        dt = opts.dt,
        "replaying input script"
    );

    let mut quit = false;
    for input in script.inputs() {
        let outcome = sim.tick(input, opts.dt);

        if opts.report_every > 0 && sim.ticks() % opts.report_every == 0 {
            let state = sim.state();
            info!(
                tick = sim.ticks(),
                x = state.pose.position.x,
                z = state.pose.position.z,
                heading = state.pose.frame.yaw().to_degrees(),
                speed = state.forward_speed(),
                steering = state.steering_angle.to_degrees(),
                "pose"
            );
        }

        if outcome == TickOutcome::QuitRequested {
            info!(tick = sim.ticks(), "quit requested; stopping");
            quit = true;
            break;
        }
    }

    let summary = Summary {
        ticks: sim.ticks(),
        quit,
        state: sim.state(),
    };
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let p = summary.state.pose.position;
        info!(
            ticks = summary.ticks,
            x = p.x,
            y = p.y,
            z = p.z,
            speed = summary.state.forward_speed(),
            "finished"
        );
    }
    Ok(())
}
