use crate::config::*;
use crate::game::physics;
use crate::game::world::Zone;

/// What a blob is, and therefore how collisions with it resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Player,
    Ai,
    Food,
    SpeedPower,
    ShieldPower,
    MagnetPower,
    TrapPower,
}

impl Kind {
    pub fn is_power_up(self) -> bool {
        matches!(
            self,
            Kind::SpeedPower | Kind::ShieldPower | Kind::MagnetPower | Kind::TrapPower
        )
    }
}

/// Any circular game object: player, AI, food, or power-up.
///
/// All timestamps are absolute instants on the simulation clock
/// (milliseconds); an effect is active iff `now` is before its expiry.
#[derive(Debug, Clone)]
pub struct Blob {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub dx: f64,
    pub dy: f64,
    pub color: String,
    pub kind: Kind,
    pub name: Option<String>,
    pub speed_boost_end: f64,
    pub shield_end: f64,
    pub magnet_end: f64,
    pub trap_end: f64,
    // AI mood state; unused for other kinds
    pub aggressive: bool,
    pub next_mood_switch: f64,
}

impl Blob {
    pub fn new(kind: Kind, x: f64, y: f64, radius: f64, color: &str) -> Self {
        Blob {
            x,
            y,
            radius,
            dx: 0.0,
            dy: 0.0,
            color: color.to_string(),
            kind,
            name: None,
            speed_boost_end: 0.0,
            shield_end: 0.0,
            magnet_end: 0.0,
            trap_end: 0.0,
            aggressive: false,
            next_mood_switch: 0.0,
        }
    }

    /// Mass as shown to the player: radius squared.
    pub fn score(&self) -> u64 {
        (self.radius * self.radius) as u64
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("???")
    }

    pub fn has_shield(&self, now: f64) -> bool {
        now < self.shield_end
    }

    pub fn has_magnet(&self, now: f64) -> bool {
        now < self.magnet_end
    }

    pub fn is_trapped(&self, now: f64) -> bool {
        now < self.trap_end
    }

    pub fn has_speed_boost(&self, now: f64) -> bool {
        now < self.speed_boost_end
    }

    /// Units moved per tick. Larger blobs are slower, floored at MIN_SPEED.
    pub fn speed(&self, now: f64) -> f64 {
        let base = speed_for_radius(self.radius);
        if self.has_speed_boost(now) {
            base * SPEED_BOOST_FACTOR
        } else {
            base
        }
    }

    /// Strict size test: predator mass must exceed prey mass by the eat margin.
    /// Nothing else (shields, zones, distance) is considered here.
    pub fn can_eat(&self, target: &Blob) -> bool {
        self.radius * self.radius > target.radius * target.radius * EAT_MARGIN
    }

    /// Attempt to consume `target`. Fails without state change if either side
    /// is shielded, the size margin is not met, or either center sits inside
    /// the active safe zone. Otherwise succeeds iff the circles overlap,
    /// growing this blob so that area is conserved.
    pub fn try_eat(&mut self, target: &Blob, safe_zone: Option<&Zone>, now: f64) -> bool {
        if self.has_shield(now) || target.has_shield(now) {
            return false;
        }
        if !self.can_eat(target) {
            return false;
        }
        if let Some(zone) = safe_zone {
            if zone.contains(self.x, self.y) || zone.contains(target.x, target.y) {
                return false;
            }
        }

        let dist = physics::distance(self.x, self.y, target.x, target.y);
        if dist < self.radius + target.radius {
            self.radius = (self.radius * self.radius + target.radius * target.radius).sqrt();
            return true;
        }
        false
    }

    /// Point velocity at the target with the current speed.
    pub fn move_toward(&mut self, target_x: f64, target_y: f64, now: f64) {
        let (nx, ny) = physics::normalize(target_x - self.x, target_y - self.y);
        let speed = self.speed(now);
        self.dx = nx * speed;
        self.dy = ny * speed;
    }

    /// Integrate one tick of movement, then clamp into the arena.
    pub fn update(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
        let (x, y) = physics::clamp_to_world(self.x, self.y, self.radius);
        self.x = x;
        self.y = y;
    }
}
