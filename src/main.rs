//! Sky Hopper headless demo
//!
//! Drives the core with synthetic 60 Hz frame callbacks and a trivial
//! autopilot, standing in for a real rendering host. Useful as a smoke test
//! and as a reference for wiring the driver API.

use sky_hopper::{Game, GameConfig, GameEvent, RunPhase};

/// Flap whenever the bird is falling below the center of the nearest gap
fn autopilot(game: &Game) -> bool {
    let snap = game.snapshot();
    let bird_center = snap.bird.pos.y + snap.bird.size.y / 2.0;
    let target = snap
        .pipes
        .iter()
        .find(|p| p.x + p.width >= snap.bird.pos.x)
        .map(|p| p.gap_top + (game.state().config.gap_size / 2.0))
        .unwrap_or(200.0);
    bird_center > target
}

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = match Game::new(GameConfig::default(), seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("invalid config: {e}");
            return;
        }
    };
    log::info!("demo session with seed {seed}");

    game.on_start_requested();
    let tick_ms = 1000.0 / 60.0;
    let mut now_ms = 0.0;

    // Up to a minute of simulated play
    for _ in 0..3600 {
        if autopilot(&game) {
            game.on_jump_requested();
        }
        game.on_frame(now_ms);
        now_ms += tick_ms;

        for event in game.drain_events() {
            match event {
                GameEvent::Scored { total } => log::info!("score: {total}"),
                GameEvent::RunEnded {
                    score,
                    is_new_best,
                } => {
                    println!(
                        "run ended after {:.1} s: score {score}{}",
                        now_ms / 1000.0,
                        if is_new_best { " (new best)" } else { "" }
                    );
                }
                _ => {}
            }
        }
        if game.state().phase == RunPhase::Ended {
            return;
        }
    }

    let snap = game.snapshot();
    println!("survived the full minute: score {}", snap.score);
}
