use crate::config::*;
use crate::game::blob::{Blob, Kind};
use crate::game::world::Zone;
use rand::Rng;

/// Deferred simulation events. Periodic ones reschedule themselves with a
/// fresh random interval when fired; `RespawnAi` is one-shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    MaintainFood,
    FoodCluster,
    SpeedBlob,
    ShieldBlob,
    MagnetBlob,
    TrapBlob,
    SafeZone,
    DecayZone,
    RespawnAi,
}

impl TimerEvent {
    /// Milliseconds until the next occurrence, or None for one-shot events.
    pub fn next_interval(self) -> Option<f64> {
        let mut rng = rand::thread_rng();
        match self {
            TimerEvent::MaintainFood => Some(FOOD_MAINTAIN_INTERVAL_MS),
            TimerEvent::FoodCluster => Some(15_000.0 + rng.gen_range(0.0..10_000.0)),
            TimerEvent::SpeedBlob => Some(12_000.0 + rng.gen_range(0.0..10_000.0)),
            TimerEvent::ShieldBlob => Some(20_000.0 + rng.gen_range(0.0..10_000.0)),
            TimerEvent::MagnetBlob => Some(25_000.0 + rng.gen_range(0.0..10_000.0)),
            TimerEvent::TrapBlob => Some(20_000.0 + rng.gen_range(0.0..10_000.0)),
            TimerEvent::SafeZone => Some(30_000.0 + rng.gen_range(0.0..15_000.0)),
            TimerEvent::DecayZone => Some(35_000.0 + rng.gen_range(0.0..15_000.0)),
            TimerEvent::RespawnAi => None,
        }
    }
}

#[derive(Debug, Clone)]
struct Timer {
    due: f64,
    event: TimerEvent,
}

/// Replacement for an event-loop's interval/timeout primitives: a flat list of
/// (due-time, event) pairs drained against the simulation clock at the top of
/// each tick, so timer effects land strictly between ticks.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Timer>,
}

impl Scheduler {
    /// Schedule all periodic events from their first interval after `now`.
    pub fn with_periodic_events(now: f64) -> Self {
        let mut scheduler = Scheduler::default();
        for event in [
            TimerEvent::MaintainFood,
            TimerEvent::FoodCluster,
            TimerEvent::SpeedBlob,
            TimerEvent::ShieldBlob,
            TimerEvent::MagnetBlob,
            TimerEvent::TrapBlob,
            TimerEvent::SafeZone,
            TimerEvent::DecayZone,
        ] {
            // next_interval is Some for every periodic event
            if let Some(interval) = event.next_interval() {
                scheduler.schedule(now + interval, event);
            }
        }
        scheduler
    }

    pub fn schedule(&mut self, due: f64, event: TimerEvent) {
        self.pending.push(Timer { due, event });
    }

    /// Remove and return every event due at or before `now`, rescheduling the
    /// periodic ones. Returned in due order.
    pub fn fire_due(&mut self, now: f64) -> Vec<TimerEvent> {
        let mut fired: Vec<Timer> = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due <= now {
                fired.push(self.pending.swap_remove(i));
            } else {
                i += 1;
            }
        }
        fired.sort_by(|a, b| a.due.total_cmp(&b.due));
        for timer in &fired {
            if let Some(interval) = timer.event.next_interval() {
                self.schedule(now + interval, timer.event);
            }
        }
        fired.into_iter().map(|t| t.event).collect()
    }

    pub fn pending_count(&self, event: TimerEvent) -> usize {
        self.pending.iter().filter(|t| t.event == event).count()
    }
}

/// Roll a plain food blob at the given position: 10% large, 20% medium,
/// otherwise small.
pub fn roll_food(x: f64, y: f64) -> Blob {
    let roll: f64 = rand::thread_rng().gen();
    let (radius, color) = if roll < FOOD_LARGE_CHANCE {
        (FOOD_RADIUS_LARGE, "#ff5c5c")
    } else if roll < FOOD_LARGE_CHANCE + FOOD_MEDIUM_CHANCE {
        (FOOD_RADIUS_MEDIUM, "#5caeff")
    } else {
        (FOOD_RADIUS_SMALL, "white")
    };
    Blob::new(Kind::Food, x, y, radius, color)
}

pub fn spawn_food_at_random(food: &mut Vec<Blob>) {
    let mut rng = rand::thread_rng();
    let x = rng.gen_range(0.0..WORLD_SIZE);
    let y = rng.gen_range(0.0..WORLD_SIZE);
    food.push(roll_food(x, y));
}

/// Fill the food list to its target population from scratch.
pub fn populate_food(food: &mut Vec<Blob>) {
    food.clear();
    for _ in 0..FOOD_COUNT {
        spawn_food_at_random(food);
    }
}

/// Top up any deficit against the plain-food target.
pub fn maintain_food(food: &mut Vec<Blob>) {
    let plain = food.iter().filter(|f| f.kind == Kind::Food).count();
    for _ in plain..FOOD_COUNT {
        spawn_food_at_random(food);
    }
}

/// Drop 10-19 food items in a tight box around one random center.
pub fn spawn_food_cluster(food: &mut Vec<Blob>) {
    let mut rng = rand::thread_rng();
    let cx = rng.gen_range(0.0..WORLD_SIZE);
    let cy = rng.gen_range(0.0..WORLD_SIZE);
    let count = rng.gen_range(10..20);
    for _ in 0..count {
        let x = cx + rng.gen_range(-0.5..0.5) * FOOD_CLUSTER_SPREAD;
        let y = cy + rng.gen_range(-0.5..0.5) * FOOD_CLUSTER_SPREAD;
        food.push(roll_food(x, y));
    }
}

/// One power-up blob at a random position. Indistinguishable from food except
/// by kind: it sits in the food list and grants its effect on pickup.
pub fn spawn_power_blob(kind: Kind) -> Blob {
    let mut rng = rand::thread_rng();
    let x = rng.gen_range(0.0..WORLD_SIZE);
    let y = rng.gen_range(0.0..WORLD_SIZE);
    let (radius, color) = match kind {
        Kind::SpeedPower => (10.0, "#ffd700"),
        Kind::ShieldPower => (15.0, "#42a5f5"),
        Kind::MagnetPower => (15.0, "#66ff66"),
        Kind::TrapPower => (15.0, "#c77dff"),
        _ => unreachable!("not a power-up kind"),
    };
    Blob::new(kind, x, y, radius, color)
}

/// A zone positioned away from the arena edges, alive for a fixed window.
pub fn spawn_zone(now: f64) -> Zone {
    let mut rng = rand::thread_rng();
    Zone {
        x: rng.gen_range(ZONE_EDGE_MARGIN..WORLD_SIZE - ZONE_EDGE_MARGIN),
        y: rng.gen_range(ZONE_EDGE_MARGIN..WORLD_SIZE - ZONE_EDGE_MARGIN),
        radius: ZONE_RADIUS,
        expires_at: now + ZONE_LIFETIME_MS,
    }
}

/// A fresh AI at a random position with a randomized first mood switch.
pub fn spawn_ai(now: f64) -> Blob {
    let mut rng = rand::thread_rng();
    let x = rng.gen_range(0.0..WORLD_SIZE);
    let y = rng.gen_range(0.0..WORLD_SIZE);
    let mut ai = Blob::new(Kind::Ai, x, y, STARTING_RADIUS, "red");
    ai.name = Some(random_name());
    ai.next_mood_switch = now + MOOD_SWITCH_MIN_MS + rng.gen_range(0.0..MOOD_SWITCH_JITTER_MS);
    ai
}

pub fn random_name() -> String {
    const NAMES: &[&str] = &[
        "Alex", "Jamie", "Morgan", "Taylor", "Riley", "Jordan", "Casey", "Sam", "Avery", "Skyler",
        "Liam", "Noah", "Emma", "Olivia", "Ethan", "Mia", "Zoe", "Leo", "Aria", "Ella", "Shadow",
        "Ghost", "Viper", "Blaze", "Frost", "Venom", "Clutch", "Sn1per", "N1ght", "Raider", "Hex",
        "Nova", "Zerk", "Dash", "Zero", "Loop", "Pyro", "Rex", "Glitch", "Cr1t", "DarkWolf",
        "BlueFox", "PixelTaco", "SilentStorm", "TwitchKid", "CoffeeLover", "SleepyJoe",
        "IceCreamMan", "CyberSam", "BunnyHop", "PewZ", "SnaccPack", "TryHarder", "N00bz",
        "LagSpikes",
    ];
    let mut rng = rand::thread_rng();
    format!(
        "{}{}",
        NAMES[rng.gen_range(0..NAMES.len())],
        rng.gen_range(0..100)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintain_food_restores_target_population() {
        let mut food = Vec::new();
        maintain_food(&mut food);
        assert_eq!(food.len(), FOOD_COUNT);
    }

    #[test]
    fn maintain_food_ignores_power_ups_when_counting() {
        let mut food = vec![spawn_power_blob(Kind::ShieldPower)];
        maintain_food(&mut food);
        let plain = food.iter().filter(|f| f.kind == Kind::Food).count();
        assert_eq!(plain, FOOD_COUNT);
        assert_eq!(food.len(), FOOD_COUNT + 1);
    }

    #[test]
    fn food_cluster_stays_near_its_center() {
        let mut food = Vec::new();
        spawn_food_cluster(&mut food);
        assert!(food.len() >= 10 && food.len() <= 19);
        let cx = food.iter().map(|f| f.x).sum::<f64>() / food.len() as f64;
        let cy = food.iter().map(|f| f.y).sum::<f64>() / food.len() as f64;
        for f in &food {
            assert!((f.x - cx).abs() <= FOOD_CLUSTER_SPREAD);
            assert!((f.y - cy).abs() <= FOOD_CLUSTER_SPREAD);
        }
    }

    #[test]
    fn zones_keep_away_from_edges() {
        for _ in 0..50 {
            let zone = spawn_zone(0.0);
            assert!(zone.x >= ZONE_EDGE_MARGIN && zone.x <= WORLD_SIZE - ZONE_EDGE_MARGIN);
            assert!(zone.y >= ZONE_EDGE_MARGIN && zone.y <= WORLD_SIZE - ZONE_EDGE_MARGIN);
            assert_eq!(zone.radius, ZONE_RADIUS);
            assert_eq!(zone.expires_at, ZONE_LIFETIME_MS);
        }
    }

    #[test]
    fn scheduler_fires_due_events_and_reschedules_periodic() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(1000.0, TimerEvent::MaintainFood);
        scheduler.schedule(5000.0, TimerEvent::SafeZone);
        assert!(scheduler.fire_due(500.0).is_empty());
        let fired = scheduler.fire_due(1000.0);
        assert_eq!(fired, vec![TimerEvent::MaintainFood]);
        // rescheduled for a later tick, the safe zone still pending
        assert_eq!(scheduler.pending_count(TimerEvent::MaintainFood), 1);
        assert_eq!(scheduler.pending_count(TimerEvent::SafeZone), 1);
    }

    #[test]
    fn respawn_timers_are_one_shot() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(3000.0, TimerEvent::RespawnAi);
        assert_eq!(scheduler.fire_due(3000.0), vec![TimerEvent::RespawnAi]);
        assert_eq!(scheduler.pending_count(TimerEvent::RespawnAi), 0);
    }

    #[test]
    fn fired_events_come_back_in_due_order() {
        let mut scheduler = Scheduler::default();
        scheduler.schedule(300.0, TimerEvent::RespawnAi);
        scheduler.schedule(100.0, TimerEvent::RespawnAi);
        scheduler.schedule(200.0, TimerEvent::SafeZone);
        let fired = scheduler.fire_due(1000.0);
        assert_eq!(
            fired,
            vec![TimerEvent::RespawnAi, TimerEvent::SafeZone, TimerEvent::RespawnAi]
        );
    }

    #[test]
    fn food_roll_uses_known_sizes() {
        for _ in 0..200 {
            let f = roll_food(0.0, 0.0);
            assert!(matches!(
                f.radius,
                r if r == FOOD_RADIUS_SMALL || r == FOOD_RADIUS_MEDIUM || r == FOOD_RADIUS_LARGE
            ));
            assert_eq!(f.kind, Kind::Food);
        }
    }

    #[test]
    fn fresh_ai_has_name_and_pending_mood_switch() {
        let ai = spawn_ai(1000.0);
        assert!(ai.name.is_some());
        assert_eq!(ai.radius, STARTING_RADIUS);
        assert!(ai.next_mood_switch >= 1000.0 + MOOD_SWITCH_MIN_MS);
        assert!(!ai.aggressive);
    }
}
