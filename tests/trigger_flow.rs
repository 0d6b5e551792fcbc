//! End-to-end trigger flow through the public API: profile file on disk,
//! binding resolution, scripted triggers, per-frame ticks.

use std::fs;

use tempfile::TempDir;

use cinefx::controller::PostProcessController;
use cinefx::effects::{Effect, EffectKind, FrameContext};
use cinefx::profile::load_and_validate_profile;

const PROFILE: &str = r#"
seed: 7
screen: { width: 1920, height: 1080 }
effects:
  negative: {}
  mosaic: {}
  block_glitch: {}
  reflection: {}
bindings:
  - { key: n, trigger: negative }
  - { key: m, trigger: mosaic }
  - { key: g, trigger: rect_block_glitch }
  - { key: h, trigger: reflection_horizontal }
  - { key: blur, trigger: radiation_blur }
"#;

fn load_controller(dir: &TempDir) -> PostProcessController {
    let path = dir.path().join("profile.yaml");
    fs::write(&path, PROFILE).expect("write profile");
    let profile = load_and_validate_profile(&path).expect("profile should load");
    PostProcessController::from_profile(&profile)
}

fn ctx_at(frame: u32) -> FrameContext {
    let dt = 1.0 / 60.0;
    FrameContext::new(dt, frame as f32 * dt, 1920, 1080)
}

fn run(controller: &mut PostProcessController, frames: u32) {
    for frame in 0..frames {
        controller.tick(&ctx_at(frame));
    }
}

#[test]
fn negative_runs_a_full_fade_cycle() {
    let dir = TempDir::new().expect("tempdir");
    let mut controller = load_controller(&dir);

    controller.trigger("n", &ctx_at(0));
    run(&mut controller, 30);
    let Some(Effect::Negative(negative)) = controller.effect_of_kind(EffectKind::Negative) else {
        panic!("negative instance should exist");
    };
    assert_eq!(negative.ratio(), 1.0);

    controller.trigger("n", &ctx_at(30));
    run(&mut controller, 30);
    let Some(Effect::Negative(negative)) = controller.effect_of_kind(EffectKind::Negative) else {
        panic!("negative instance should exist");
    };
    assert_eq!(negative.ratio(), 0.0);
    assert!(!controller.effects().iter().any(|e| e.is_active()));
}

#[test]
fn mosaic_decays_from_max_to_neutral() {
    let dir = TempDir::new().expect("tempdir");
    let mut controller = load_controller(&dir);

    controller.trigger("m", &ctx_at(0));
    controller.tick(&FrameContext::new(0.0, 0.0, 1920, 1080));
    let Some(Effect::Mosaic(mosaic)) = controller.effect_of_kind(EffectKind::Mosaic) else {
        panic!("mosaic instance should exist");
    };
    assert_eq!(mosaic.scale(), 64.0);

    run(&mut controller, 30);
    let Some(Effect::Mosaic(mosaic)) = controller.effect_of_kind(EffectKind::Mosaic) else {
        panic!("mosaic instance should exist");
    };
    assert_eq!(mosaic.scale(), 1.0);
    assert!(!mosaic.is_active());
}

#[test]
fn glitch_grid_is_sized_from_the_profile_screen() {
    let dir = TempDir::new().expect("tempdir");
    let mut controller = load_controller(&dir);

    controller.trigger("g", &ctx_at(0));
    controller.tick(&ctx_at(0));
    let Some(Effect::BlockGlitch(glitch)) = controller.effect_of_kind(EffectKind::BlockGlitch)
    else {
        panic!("glitch instance should exist");
    };
    let noise = glitch.noise().expect("noise buffer");
    assert_eq!((noise.width(), noise.height()), (34, 19));
}

#[test]
fn unbound_trigger_type_is_inert_end_to_end() {
    // The profile binds radiation_blur but declares no settings section for
    // it, so the binding resolves to nothing and firing it changes no state.
    let dir = TempDir::new().expect("tempdir");
    let mut controller = load_controller(&dir);

    controller.trigger("blur", &ctx_at(0));
    run(&mut controller, 10);
    assert!(!controller.effects().iter().any(|e| e.is_active()));
}

#[test]
fn identical_runs_produce_identical_glitch_grids() {
    let dir = TempDir::new().expect("tempdir");

    let grids: Vec<Vec<[u8; 4]>> = (0..2)
        .map(|_| {
            let mut controller = load_controller(&dir);
            controller.trigger("g", &ctx_at(0));
            run(&mut controller, 60);
            let Some(Effect::BlockGlitch(glitch)) =
                controller.effect_of_kind(EffectKind::BlockGlitch)
            else {
                panic!("glitch instance should exist");
            };
            glitch.noise().expect("noise buffer").pixels().to_vec()
        })
        .collect();

    assert_eq!(grids[0], grids[1]);
}

#[test]
fn reflection_toggles_without_any_transition() {
    let dir = TempDir::new().expect("tempdir");
    let mut controller = load_controller(&dir);

    controller.trigger("h", &ctx_at(0));
    let Some(Effect::Reflection(reflection)) = controller.effect_of_kind(EffectKind::Reflection)
    else {
        panic!("reflection instance should exist");
    };
    assert!(reflection.is_horizontal());
    assert!(!reflection.is_vertical());

    // Ticks never move a reflection flag.
    run(&mut controller, 10);
    let Some(Effect::Reflection(reflection)) = controller.effect_of_kind(EffectKind::Reflection)
    else {
        panic!("reflection instance should exist");
    };
    assert!(reflection.is_horizontal());
}
