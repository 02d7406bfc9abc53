use std::collections::VecDeque;
use crate::config::*;
use crate::game::ai;
use crate::game::blob::{Blob, Kind};
use crate::game::physics;
use crate::game::spawn::{self, Scheduler, TimerEvent};
use rand::Rng;
use tracing::{debug, info};

/// A temporary circular area: the safe zone grants mutual eat-immunity,
/// decay zones shrink their occupants.
#[derive(Debug, Clone)]
pub struct Zone {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub expires_at: f64,
}

impl Zone {
    pub fn contains(&self, x: f64, y: f64) -> bool {
        physics::distance(self.x, self.y, x, y) <= self.radius
    }
}

#[derive(Debug, Clone)]
pub struct KillFeedEntry {
    pub killer: String,
    pub victim: String,
    pub killer_score: u64,
    pub victim_score: u64,
    pub time: f64,
}

impl KillFeedEntry {
    pub fn text(&self) -> String {
        format!(
            "{} ({}) devoured {} ({})",
            self.killer, self.killer_score, self.victim, self.victim_score
        )
    }
}

/// Cosmetic trail particle. Simulation rules never read these; the pool is
/// only advanced and handed to presentation.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub life: i32,
    pub color: &'static str,
}

/// All simulation state, owned by a single driver and advanced one tick at a
/// time. Restart rebuilds the whole struct.
pub struct World {
    /// Simulation clock in milliseconds; advanced by TICK_DURATION_MS per tick.
    pub now: f64,
    pub player: Blob,
    pub enemies: Vec<Blob>,
    /// Plain food and power-up blobs, one list.
    pub food: Vec<Blob>,
    pub safe_zone: Option<Zone>,
    pub decay_zones: Vec<Zone>,
    pub kill_feed: VecDeque<KillFeedEntry>,
    pub particles: Vec<Particle>,
    pub game_over: bool,
    pub won: bool,
    pub player_spawn_time: f64,
    /// Latest pointer target in world coordinates, read once per tick.
    pub steering: (f64, f64),
    pub scheduler: Scheduler,
}

impl World {
    pub fn new() -> Self {
        let center = WORLD_SIZE / 2.0;
        let mut player = Blob::new(Kind::Player, center, center, STARTING_RADIUS, "lime");
        player.name = Some("You".to_string());

        let enemies = (0..NUM_AI).map(|_| spawn::spawn_ai(0.0)).collect();
        let mut food = Vec::with_capacity(FOOD_COUNT);
        spawn::populate_food(&mut food);

        World {
            now: 0.0,
            player,
            enemies,
            food,
            safe_zone: None,
            decay_zones: Vec::new(),
            kill_feed: VecDeque::new(),
            particles: Vec::new(),
            game_over: false,
            won: false,
            player_spawn_time: 0.0,
            steering: (center, center),
            scheduler: Scheduler::with_periodic_events(0.0),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.game_over || self.won
    }

    pub fn set_steering(&mut self, x: f64, y: f64) {
        self.steering = (x, y);
    }

    /// Honoured only in a terminal state: rebuild everything, keeping the
    /// external steering target.
    pub fn request_restart(&mut self) -> bool {
        if !self.is_terminal() {
            return false;
        }
        let steering = self.steering;
        *self = World::new();
        self.steering = steering;
        info!("session restarted");
        true
    }

    /// One simulation tick. A no-op while the session is terminal.
    pub fn tick(&mut self) {
        if self.is_terminal() {
            return;
        }
        self.now += TICK_DURATION_MS;
        self.fire_timers();

        let now = self.now;
        let (tx, ty) = self.steering;
        self.player.move_toward(tx, ty, now);
        ai::drive(self);

        self.player.update();
        if self.player.has_speed_boost(now) {
            emit_speed_trail(&mut self.particles, &self.player);
        }

        self.apply_zone_decay();

        for i in 0..self.enemies.len() {
            self.enemies[i].update();
            if self.enemies[i].has_speed_boost(now) {
                emit_speed_trail(&mut self.particles, &self.enemies[i]);
            }
        }

        self.apply_magnet();
        self.apply_trap_shrink();
        self.update_particles();

        self.resolve_food();
        self.resolve_ai_vs_ai();
        self.resolve_player_eats_ai();
        self.resolve_ai_eats_player();

        if self.enemies.is_empty() {
            self.won = true;
            info!(score = self.player.score(), "arena cleared");
        }
        self.expire_zones();
    }

    /// Drain due timers. They land here, before any of the tick's own
    /// mutations, so spawns never interleave with resolution.
    fn fire_timers(&mut self) {
        for event in self.scheduler.fire_due(self.now) {
            debug!(?event, now = self.now, "timer fired");
            match event {
                TimerEvent::MaintainFood => spawn::maintain_food(&mut self.food),
                TimerEvent::FoodCluster => spawn::spawn_food_cluster(&mut self.food),
                TimerEvent::SpeedBlob => self.food.push(spawn::spawn_power_blob(Kind::SpeedPower)),
                TimerEvent::ShieldBlob => {
                    self.food.push(spawn::spawn_power_blob(Kind::ShieldPower))
                }
                TimerEvent::MagnetBlob => {
                    self.food.push(spawn::spawn_power_blob(Kind::MagnetPower))
                }
                TimerEvent::TrapBlob => self.food.push(spawn::spawn_power_blob(Kind::TrapPower)),
                TimerEvent::SafeZone => self.safe_zone = Some(spawn::spawn_zone(self.now)),
                TimerEvent::DecayZone => self.decay_zones.push(spawn::spawn_zone(self.now)),
                TimerEvent::RespawnAi => self.enemies.push(spawn::spawn_ai(self.now)),
            }
        }
    }

    /// Compounding shrink for every blob standing in a decay zone; overlapping
    /// zones each apply their own factor.
    fn apply_zone_decay(&mut self) {
        for zone in &self.decay_zones {
            if zone.contains(self.player.x, self.player.y) {
                self.player.radius *= DECAY_FACTOR;
            }
        }
        for ai in &mut self.enemies {
            for zone in &self.decay_zones {
                if zone.contains(ai.x, ai.y) {
                    ai.radius *= DECAY_FACTOR;
                }
            }
        }
    }

    /// Every magnet holder pulls nearby food a fixed step along the line
    /// toward itself.
    fn apply_magnet(&mut self) {
        let now = self.now;
        if self.player.has_magnet(now) {
            attract_food(&mut self.food, self.player.x, self.player.y);
        }
        for i in 0..self.enemies.len() {
            if self.enemies[i].has_magnet(now) {
                let (hx, hy) = (self.enemies[i].x, self.enemies[i].y);
                attract_food(&mut self.food, hx, hy);
            }
        }
    }

    fn apply_trap_shrink(&mut self) {
        let now = self.now;
        if self.player.is_trapped(now) {
            self.player.radius *= DECAY_FACTOR;
        }
        for ai in &mut self.enemies {
            if ai.is_trapped(now) {
                ai.radius *= DECAY_FACTOR;
            }
        }
    }

    fn update_particles(&mut self) {
        self.particles.retain_mut(|p| {
            if p.life <= 0 {
                return false;
            }
            p.life -= 1;
            p.x += p.dx;
            p.y += p.dy;
            true
        });
    }

    /// Settle the food list in order: power-ups grant their effect on overlap,
    /// plain food goes through try_eat. The player is checked before the AI
    /// roster for every item; the first consumer wins and the item is removed.
    fn resolve_food(&mut self) {
        let now = self.now;
        let mut i = 0;
        while i < self.food.len() {
            let item = self.food[i].clone();
            let consumed = if item.kind.is_power_up() {
                self.try_pickup_power(&item)
            } else if self.player.try_eat(&item, self.safe_zone.as_ref(), now) {
                true
            } else {
                let mut eaten = false;
                for ai in &mut self.enemies {
                    if ai.try_eat(&item, self.safe_zone.as_ref(), now) {
                        eaten = true;
                        break;
                    }
                }
                eaten
            };
            if consumed {
                self.food.remove(i);
            } else {
                i += 1;
            }
        }
    }

    fn try_pickup_power(&mut self, item: &Blob) -> bool {
        let now = self.now;
        if physics::circles_overlap(
            item.x,
            item.y,
            item.radius,
            self.player.x,
            self.player.y,
            self.player.radius,
        ) {
            apply_power(&mut self.player, item.kind, now);
            return true;
        }
        for ai in &mut self.enemies {
            if physics::circles_overlap(item.x, item.y, item.radius, ai.x, ai.y, ai.radius) {
                apply_power(ai, item.kind, now);
                return true;
            }
        }
        false
    }

    /// Each AI is removed by the first other AI that manages to eat it; a
    /// replacement is scheduled after a fixed delay.
    fn resolve_ai_vs_ai(&mut self) {
        let now = self.now;
        let mut v = 0;
        while v < self.enemies.len() {
            let victim = self.enemies[v].clone();
            let mut eaten = false;
            for e in 0..self.enemies.len() {
                if e == v {
                    continue;
                }
                if self.enemies[e].try_eat(&victim, self.safe_zone.as_ref(), now) {
                    let eater = self.enemies[e].clone();
                    self.push_kill_feed(&eater, &victim);
                    self.scheduler
                        .schedule(now + AI_RESPAWN_DELAY_MS, TimerEvent::RespawnAi);
                    eaten = true;
                    break;
                }
            }
            if eaten {
                self.enemies.remove(v);
            } else {
                v += 1;
            }
        }
    }

    fn resolve_player_eats_ai(&mut self) {
        let now = self.now;
        let mut v = 0;
        while v < self.enemies.len() {
            let victim = self.enemies[v].clone();
            if self.player.try_eat(&victim, self.safe_zone.as_ref(), now) {
                let player = self.player.clone();
                self.push_kill_feed(&player, &victim);
                self.scheduler
                    .schedule(now + AI_RESPAWN_DELAY_MS, TimerEvent::RespawnAi);
                self.enemies.remove(v);
            } else {
                v += 1;
            }
        }
    }

    /// The player is fair game only once the post-spawn grace window has
    /// elapsed; a successful eat ends the session.
    fn resolve_ai_eats_player(&mut self) {
        let now = self.now;
        if now - self.player_spawn_time <= SPAWN_GRACE_MS {
            return;
        }
        let victim = self.player.clone();
        for e in 0..self.enemies.len() {
            if self.enemies[e].try_eat(&victim, self.safe_zone.as_ref(), now) {
                let eater = self.enemies[e].clone();
                self.push_kill_feed(&eater, &victim);
                self.game_over = true;
                info!(
                    killer = eater.display_name(),
                    score = victim.score(),
                    "player eaten"
                );
                break;
            }
        }
    }

    fn expire_zones(&mut self) {
        let now = self.now;
        if let Some(zone) = &self.safe_zone {
            if now > zone.expires_at {
                self.safe_zone = None;
            }
        }
        self.decay_zones.retain(|z| now < z.expires_at);
    }

    fn push_kill_feed(&mut self, killer: &Blob, victim: &Blob) {
        let entry = KillFeedEntry {
            killer: killer.display_name().to_string(),
            victim: victim.display_name().to_string(),
            killer_score: killer.score(),
            victim_score: victim.score(),
            time: self.now,
        };
        info!(event = %entry.text(), "kill");
        self.kill_feed.push_back(entry);
        while self.kill_feed.len() > KILL_FEED_MAX {
            self.kill_feed.pop_front();
        }
    }

    /// Top blobs by score, descending; player included.
    pub fn leaderboard(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .enemies
            .iter()
            .chain(std::iter::once(&self.player))
            .map(|b| (b.display_name().to_string(), b.score()))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(10);
        entries
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_power(blob: &mut Blob, kind: Kind, now: f64) {
    match kind {
        Kind::SpeedPower => blob.speed_boost_end = now + SPEED_BOOST_MS,
        Kind::ShieldPower => blob.shield_end = now + SHIELD_MS,
        Kind::MagnetPower => blob.magnet_end = now + MAGNET_MS,
        Kind::TrapPower => blob.trap_end = now + TRAP_MS,
        _ => {}
    }
}

fn attract_food(food: &mut [Blob], holder_x: f64, holder_y: f64) {
    for f in food {
        let dx = holder_x - f.x;
        let dy = holder_y - f.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist > MAGNET_DEAD_ZONE && dist < MAGNET_RANGE {
            f.x += dx / dist * MAGNET_PULL;
            f.y += dy / dist * MAGNET_PULL;
        }
    }
}

fn emit_speed_trail(particles: &mut Vec<Particle>, blob: &Blob) {
    let mut rng = rand::thread_rng();
    for _ in 0..SPEED_TRAIL_COUNT {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = rng.gen_range(0.5..1.5);
        particles.push(Particle {
            x: blob.x + angle.cos() * blob.radius,
            y: blob.y + angle.sin() * blob.radius,
            dx: angle.cos() * speed,
            dy: angle.sin() * speed,
            life: PARTICLE_LIFE_TICKS,
            color: "gold",
        });
    }
}
