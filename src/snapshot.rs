//! Read model handed to the presentation layer each frame. Everything the UI
//! draws (arena, minimap, HUD bars, leaderboard, kill feed) comes from here;
//! nothing in the simulation reads these types back.

use serde::Serialize;

use crate::config::*;

#[derive(Debug, Serialize, Clone)]
pub struct BlobState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub name: Option<String>,
    pub score: u64,
    pub has_shield: bool,
    pub has_magnet: bool,
    pub is_trapped: bool,
    pub has_speed_boost: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct ZoneState {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub ms_left: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct KillFeedLine {
    pub text: String,
    pub time: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u64,
}

#[derive(Debug, Serialize, Clone)]
pub struct ParticleState {
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
}

/// Remaining effect windows on the player, for HUD countdown bars.
#[derive(Debug, Serialize, Clone)]
pub struct EffectTimers {
    pub speed_ms_left: f64,
    pub shield_ms_left: f64,
    pub magnet_ms_left: f64,
    pub trap_ms_left: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct RenderState {
    pub player: BlobState,
    pub enemies: Vec<BlobState>,
    pub food: Vec<BlobState>,
    pub safe_zone: Option<ZoneState>,
    pub decay_zones: Vec<ZoneState>,
    pub kill_feed: Vec<KillFeedLine>,
    pub leaderboard: Vec<LeaderboardEntry>,
    pub particles: Vec<ParticleState>,
    pub effects: EffectTimers,
    pub player_in_safe_zone: bool,
    pub zoom: f64,
    pub game_over: bool,
    pub won: bool,
}

/// Camera framing hint: zoom out as the player grows, clamped to a fixed
/// band. Pure function of the radius; smoothing is the renderer's business.
pub fn zoom_for_radius(radius: f64) -> f64 {
    let target = ZOOM_MAX - ((radius - STARTING_RADIUS) * ZOOM_FALLOFF).min(ZOOM_MAX - ZOOM_MIN);
    target.max(ZOOM_MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_starts_at_max_and_clamps_at_min() {
        assert_eq!(zoom_for_radius(STARTING_RADIUS), ZOOM_MAX);
        assert_eq!(zoom_for_radius(1000.0), ZOOM_MIN);
    }

    #[test]
    fn zoom_falls_off_linearly_in_between() {
        let z = zoom_for_radius(30.0);
        assert!((z - (ZOOM_MAX - 20.0 * ZOOM_FALLOFF)).abs() < 1e-12);
    }
}
