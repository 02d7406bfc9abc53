use crate::config::*;
use crate::game::physics;
use crate::game::world::World;
use rand::Rng;

/// Per-tick decisions for every AI: re-evaluate mood on schedule, then steer
/// toward a hunt target or, failing that, the nearest food.
pub fn drive(world: &mut World) {
    let now = world.now;
    for i in 0..world.enemies.len() {
        update_mood(world, i, now);
        if let Some((tx, ty)) = select_target(world, i) {
            world.enemies[i].move_toward(tx, ty, now);
        }
    }
}

/// An AI turns aggressive with a fixed probability, and only when something
/// edible exists at all; the next re-evaluation lands 3-7s out.
fn update_mood(world: &mut World, i: usize, now: f64) {
    if now <= world.enemies[i].next_mood_switch {
        return;
    }
    let ai = &world.enemies[i];
    let edible_exists = world
        .enemies
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(_, b)| b)
        .chain(std::iter::once(&world.player))
        .any(|b| ai.can_eat(b));

    let mut rng = rand::thread_rng();
    let aggressive = edible_exists && rng.gen::<f64>() < AGGRESSION_CHANCE;
    let next_switch = now + MOOD_SWITCH_MIN_MS + rng.gen_range(0.0..MOOD_SWITCH_JITTER_MS);

    let ai = &mut world.enemies[i];
    ai.aggressive = aggressive;
    ai.next_mood_switch = next_switch;
}

/// Hunt the nearest edible blob outside the safe zone when aggressive (and
/// itself outside the zone); otherwise forage toward the nearest food-list
/// item. Power-ups count as food here. None when nothing qualifies.
fn select_target(world: &World, i: usize) -> Option<(f64, f64)> {
    let ai = &world.enemies[i];
    let in_safe_zone =
        |x: f64, y: f64| world.safe_zone.as_ref().is_some_and(|z| z.contains(x, y));

    if ai.aggressive && !in_safe_zone(ai.x, ai.y) {
        let prey = world
            .enemies
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, b)| b)
            .chain(std::iter::once(&world.player))
            .filter(|b| ai.can_eat(b) && !in_safe_zone(b.x, b.y))
            .min_by(|a, b| {
                physics::distance(ai.x, ai.y, a.x, a.y)
                    .total_cmp(&physics::distance(ai.x, ai.y, b.x, b.y))
            });
        if let Some(target) = prey {
            return Some((target.x, target.y));
        }
    }

    world
        .food
        .iter()
        .min_by(|a, b| {
            physics::distance(ai.x, ai.y, a.x, a.y)
                .total_cmp(&physics::distance(ai.x, ai.y, b.x, b.y))
        })
        .map(|f| (f.x, f.y))
}
