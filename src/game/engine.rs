use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::game::blob::Blob;
use crate::game::world::World;
use crate::snapshot::*;

pub type SharedWorld = Arc<RwLock<World>>;

pub fn create_world() -> SharedWorld {
    Arc::new(RwLock::new(World::new()))
}

/// Advance the shared world at the fixed tick rate until the handle is
/// dropped by every other holder. Terminal states keep ticking as no-ops
/// until a restart is requested externally.
pub async fn game_loop(world: SharedWorld) {
    let mut tick_interval = interval(Duration::from_micros(
        (crate::config::TICK_DURATION_MS * 1000.0) as u64,
    ));
    tick_interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tick_interval.tick().await;
        let mut w = world.write().await;
        w.tick();
    }
}

fn blob_state(blob: &Blob, now: f64) -> BlobState {
    BlobState {
        x: blob.x,
        y: blob.y,
        radius: blob.radius,
        color: blob.color.clone(),
        name: blob.name.clone(),
        score: blob.score(),
        has_shield: blob.has_shield(now),
        has_magnet: blob.has_magnet(now),
        is_trapped: blob.is_trapped(now),
        has_speed_boost: blob.has_speed_boost(now),
    }
}

/// Snapshot everything the presentation layer needs for one frame.
pub fn build_render_state(world: &World) -> RenderState {
    let now = world.now;
    let zone_state = |z: &crate::game::world::Zone| ZoneState {
        x: z.x,
        y: z.y,
        radius: z.radius,
        ms_left: (z.expires_at - now).max(0.0),
    };
    let ms_left = |end: f64| (end - now).max(0.0);

    RenderState {
        player: blob_state(&world.player, now),
        enemies: world.enemies.iter().map(|b| blob_state(b, now)).collect(),
        food: world.food.iter().map(|b| blob_state(b, now)).collect(),
        safe_zone: world.safe_zone.as_ref().map(zone_state),
        decay_zones: world.decay_zones.iter().map(zone_state).collect(),
        kill_feed: world
            .kill_feed
            .iter()
            .map(|e| KillFeedLine {
                text: e.text(),
                time: e.time,
            })
            .collect(),
        leaderboard: world
            .leaderboard()
            .into_iter()
            .map(|(name, score)| LeaderboardEntry { name, score })
            .collect(),
        particles: world
            .particles
            .iter()
            .map(|p| ParticleState {
                x: p.x,
                y: p.y,
                color: p.color,
            })
            .collect(),
        effects: EffectTimers {
            speed_ms_left: ms_left(world.player.speed_boost_end),
            shield_ms_left: ms_left(world.player.shield_end),
            magnet_ms_left: ms_left(world.player.magnet_end),
            trap_ms_left: ms_left(world.player.trap_end),
        },
        player_in_safe_zone: world
            .safe_zone
            .as_ref()
            .is_some_and(|z| z.contains(world.player.x, world.player.y)),
        zoom: zoom_for_radius(world.player.radius),
        game_over: world.game_over,
        won: world.won,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::*;

    #[test]
    fn render_state_mirrors_the_world() {
        let mut world = World::new();
        world.player.shield_end = world.now + 2500.0;
        let state = build_render_state(&world);

        assert_eq!(state.enemies.len(), NUM_AI);
        assert_eq!(state.food.len(), FOOD_COUNT);
        assert_eq!(state.player.name.as_deref(), Some("You"));
        assert!(state.player.has_shield);
        assert_eq!(state.effects.shield_ms_left, 2500.0);
        assert_eq!(state.zoom, ZOOM_MAX);
        assert!(!state.game_over && !state.won);
        assert_eq!(state.leaderboard.len(), 10);
    }

    #[test]
    fn render_state_serializes_to_json() {
        let world = World::new();
        let state = build_render_state(&world);
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"leaderboard\""));
        assert!(json.contains("\"zoom\""));
    }
}
