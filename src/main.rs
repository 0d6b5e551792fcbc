use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use cinefx::controller::PostProcessController;
use cinefx::effects::{Effect, FrameContext};
use cinefx::profile::load_and_validate_profile;

#[derive(Debug, Parser)]
#[command(name = "cinefx")]
#[command(about = "Screen-space effect control engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a profile without running it.
    Check {
        profile: PathBuf,
    },
    /// Run the trigger timeline headlessly at a fixed frame rate.
    Simulate {
        profile: PathBuf,
        #[arg(long, default_value_t = 300)]
        frames: u32,
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// Extra trigger in FRAME:KEY form; may repeat.
        #[arg(long = "trigger")]
        triggers: Vec<String>,
        /// Emit the final report as JSON on stdout.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { profile } => run_check(&profile),
        Commands::Simulate {
            profile,
            frames,
            fps,
            triggers,
            json,
        } => run_simulate(&profile, frames, fps, &triggers, json),
    }
}

fn run_check(profile_path: &Path) -> Result<()> {
    let profile = load_and_validate_profile(profile_path)?;

    let sections = [
        profile.effects.negative.is_some(),
        profile.effects.mosaic.is_some(),
        profile.effects.rgb_shift.is_some(),
        profile.effects.radiation_blur.is_some(),
        profile.effects.reflection.is_some(),
        profile.effects.edge_detection.is_some(),
        profile.effects.random_invert.is_some(),
        profile.effects.distortion.is_some(),
        profile.effects.block_glitch.is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count();

    println!(
        "OK: {} ({}x{}, seed {})",
        profile_path.display(),
        profile.screen.width,
        profile.screen.height,
        profile.seed
    );
    println!(
        "Effects: {}, bindings: {}, script events: {}",
        sections,
        profile.bindings.len(),
        profile.script.len()
    );
    Ok(())
}

fn parse_trigger_arg(arg: &str) -> Result<(u32, String)> {
    let Some((frame, key)) = arg.split_once(':') else {
        bail!("trigger '{}' is not in FRAME:KEY form", arg);
    };
    let frame: u32 = frame
        .parse()
        .with_context(|| format!("trigger '{}' has a non-numeric frame", arg))?;
    if key.is_empty() {
        bail!("trigger '{}' has an empty key", arg);
    }
    Ok((frame, key.to_owned()))
}

fn run_simulate(
    profile_path: &Path,
    frames: u32,
    fps: u32,
    trigger_args: &[String],
    json: bool,
) -> Result<()> {
    if fps == 0 {
        bail!("fps must be non-zero");
    }

    let profile = load_and_validate_profile(profile_path)?;

    let mut timeline: Vec<(u32, String)> = profile
        .script
        .iter()
        .map(|event| (event.frame, event.key.clone()))
        .collect();
    for arg in trigger_args {
        let event = parse_trigger_arg(arg)?;
        if !profile.bindings.iter().any(|b| b.key == event.1) {
            bail!("trigger '{}' references unbound key '{}'", arg, event.1);
        }
        timeline.push(event);
    }
    timeline.sort_by_key(|(frame, _)| *frame);

    let mut controller = PostProcessController::from_profile(&profile);
    let dt = 1.0 / fps as f32;
    let mut active_frames = vec![0u32; controller.effects().len()];

    for frame in 0..frames {
        let ctx = FrameContext::new(
            dt,
            frame as f32 * dt,
            profile.screen.width,
            profile.screen.height,
        );

        for (_, key) in timeline.iter().filter(|(at, _)| *at == frame) {
            controller.trigger(key, &ctx);
        }
        controller.tick(&ctx);

        for (index, effect) in controller.effects().iter().enumerate() {
            if effect.is_active() {
                active_frames[index] += 1;
            }
        }

        if !json {
            for effect in controller.effects().iter().filter(|e| e.is_active()) {
                println!("frame {}: {}", frame, effect_state(effect));
            }
        }

        if frame % fps == 0 {
            eprintln!("[cinefx] simulated frame {}/{}", frame + 1, frames);
        }
    }

    let report: Vec<serde_json::Value> = controller
        .effects()
        .iter()
        .zip(&active_frames)
        .map(|(effect, active)| {
            let mut entry = effect_state(effect);
            entry["active_frames"] = json!(active);
            entry
        })
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "frames": frames,
                "fps": fps,
                "effects": report,
            }))?
        );
    } else {
        for entry in &report {
            println!(
                "{}: active {} of {} frames",
                entry["kind"].as_str().unwrap_or("?"),
                entry["active_frames"],
                frames
            );
        }
    }
    Ok(())
}

/// Final parameter snapshot per effect, keyed by what the shading pass
/// would read.
fn effect_state(effect: &Effect) -> serde_json::Value {
    match effect {
        Effect::Negative(e) => json!({ "kind": "negative", "ratio": e.ratio() }),
        Effect::Mosaic(e) => json!({
            "kind": "mosaic",
            "scale": e.scale(),
            "is_circle": e.is_circle(),
        }),
        Effect::RgbShift(e) => json!({ "kind": "rgb_shift", "power": e.power() }),
        Effect::RadiationBlur(e) => json!({
            "kind": "radiation_blur",
            "power": e.power(),
            "center": [e.center().x, e.center().y],
        }),
        Effect::Reflection(e) => json!({
            "kind": "reflection",
            "horizontal": e.is_horizontal(),
            "vertical": e.is_vertical(),
        }),
        Effect::EdgeDetection(e) => json!({
            "kind": "edge_detection",
            "blend": e.blend(),
            "filter": e.filter(),
        }),
        Effect::RandomInvert(e) => json!({
            "kind": "random_invert",
            "threshold": e.threshold(),
            "is_invert": e.is_invert(),
            "start_time": e.start_time(),
        }),
        Effect::Distortion(e) => json!({
            "kind": "distortion",
            "noise_power": e.noise_power(),
            "barrel_power": [e.barrel_power().x, e.barrel_power().y],
        }),
        Effect::BlockGlitch(e) => json!({
            "kind": "block_glitch",
            "intensity": e.intensity(),
            "glitch_scale": e.glitch_scale(),
            "grid": e.noise().map(|n| [n.width(), n.height()]),
        }),
    }
}
