use std::time::Duration;

use rand::Rng;
use tracing::info;

use blob_arena::config::*;
use blob_arena::game::engine;

/// Headless driver: stands in for the browser's mouse/click input layer by
/// wandering the steering target, logging a snapshot line each second, and
/// requesting a restart whenever the session ends.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let world = engine::create_world();
    info!(world_size = WORLD_SIZE, tick_rate = TICK_RATE, "world created");

    let sim = world.clone();
    tokio::spawn(async move {
        engine::game_loop(sim).await;
    });

    let mut status = tokio::time::interval(Duration::from_secs(1));
    let mut wander = tokio::time::interval(Duration::from_secs(3));

    loop {
        tokio::select! {
            _ = wander.tick() => {
                let (x, y) = {
                    let mut rng = rand::thread_rng();
                    (rng.gen_range(0.0..WORLD_SIZE), rng.gen_range(0.0..WORLD_SIZE))
                };
                world.write().await.set_steering(x, y);
            }
            _ = status.tick() => {
                let mut w = world.write().await;
                let state = engine::build_render_state(&w);
                if state.game_over || state.won {
                    let outcome = if state.won { "won" } else { "game over" };
                    info!(
                        outcome,
                        score = state.player.score,
                        summary = %serde_json::to_string(&state.leaderboard).unwrap_or_default(),
                        "session ended"
                    );
                    w.request_restart();
                } else {
                    let leader = state
                        .leaderboard
                        .first()
                        .map(|e| format!("{} ({})", e.name, e.score))
                        .unwrap_or_default();
                    info!(
                        score = state.player.score,
                        enemies = state.enemies.len(),
                        food = state.food.len(),
                        %leader,
                        "tick status"
                    );
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }
}
