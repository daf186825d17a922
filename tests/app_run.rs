use blobworld_lib::app::{App, RunOutcome};
use blobworld_lib::model::config::AppConfig;
use blobworld_lib::model::data::TraitDistribution;
use blobworld_lib::ui::renderer::{HeadlessRenderer, TraceRenderer};
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("blobworld_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn base_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.world.seed = Some(99);
    config
}

#[test]
fn test_run_stops_at_tick_limit_and_exports() {
    let dir = scratch_dir("tick_limit");
    let mut config = base_config();
    config.world.max_ticks = Some(20);
    config.world.stop_on_extinction = false;

    let mut app = App::new(config, Some(dir.clone())).unwrap();
    let outcome = app.run(&mut HeadlessRenderer).unwrap();
    assert_eq!(outcome, RunOutcome::TickLimit);
    assert_eq!(app.world.tick, 20);

    let paths = app.finish().unwrap().expect("export paths");
    let csv = std::fs::read_to_string(&paths.stats).unwrap();
    assert_eq!(csv.lines().count(), 21);
    assert!(csv.starts_with("tick,blob_count,food_count"));

    let ticks = std::fs::read_to_string(paths.ticks.as_ref().unwrap()).unwrap();
    assert_eq!(ticks.lines().count(), 20);

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.summary).unwrap()).unwrap();
    assert_eq!(summary["ticks"], 20);
    assert_eq!(summary["seed"], 99);
    assert_eq!(
        summary["config_fingerprint"].as_str().unwrap(),
        app.world.config.fingerprint()
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_rerun_into_same_dir_replaces_previous_output() {
    let dir = scratch_dir("rerun");
    let mut config = base_config();
    config.world.max_ticks = Some(10);
    config.world.stop_on_extinction = false;

    let mut first_ticks = String::new();
    for _ in 0..2 {
        let mut app = App::new(config.clone(), Some(dir.clone())).unwrap();
        app.run(&mut HeadlessRenderer).unwrap();
        assert_eq!(app.world.metrics().tick_count(), 10);
        let paths = app.finish().unwrap().expect("export paths");

        let csv = std::fs::read_to_string(&paths.stats).unwrap();
        assert_eq!(csv.lines().count(), 11);
        let ticks = std::fs::read_to_string(paths.ticks.as_ref().unwrap()).unwrap();
        assert_eq!(ticks.lines().count(), 10);
        if first_ticks.is_empty() {
            first_ticks = ticks;
        } else {
            assert_eq!(ticks, first_ticks, "same seed writes the same tick log");
        }
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_run_stops_on_extinction() {
    let mut config = base_config();
    config.world.initial_food = 0;
    config.world.initial_blobs = 3;
    config.food.spawn_chance = 0.0;
    config.blob.size = TraitDistribution::fixed(20.0);
    config.blob.energy = TraitDistribution::fixed(1.0);

    let mut app = App::new(config, None).unwrap();
    let outcome = app.run(&mut HeadlessRenderer).unwrap();
    assert_eq!(outcome, RunOutcome::Extinct);
    assert_eq!(app.world.tick, 1);
    assert_eq!(app.world.latest_stats().unwrap().deaths, 3);
    assert!(app.finish().unwrap().is_none());
}

#[test]
fn test_shutdown_signal_stops_run() {
    let mut app = App::new(base_config(), None).unwrap();
    app.shutdown_handle().request_shutdown();
    let outcome = app.run(&mut HeadlessRenderer).unwrap();
    assert_eq!(outcome, RunOutcome::Interrupted);
    assert_eq!(app.world.tick, 0);
}

#[test]
fn test_renderer_receives_frames() {
    let mut config = base_config();
    config.world.max_ticks = Some(5);
    let mut app = App::new(config, None).unwrap();
    let mut renderer = TraceRenderer::new(1);
    app.run(&mut renderer).unwrap();
    assert_eq!(renderer.frames(), app.world.tick);
}

#[test]
fn test_export_can_be_disabled() {
    let dir = scratch_dir("no_export");
    let mut config = base_config();
    config.world.max_ticks = Some(3);
    let mut app = App::new(config, Some(dir.clone())).unwrap();
    app.shutdown_manager_mut().set_export_on_exit(false);
    app.run(&mut HeadlessRenderer).unwrap();
    assert!(app.finish().unwrap().is_none());
    assert!(!dir.join("stats.csv").exists());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_invalid_config_aborts_startup() {
    let mut config = base_config();
    config.blob.speed = TraitDistribution::new(3.0, 1.0, 8.0, 1.0);
    assert!(App::new(config, None).is_err());
}
