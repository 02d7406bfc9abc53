use crate::config::*;

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

pub fn circles_overlap(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64) -> bool {
    distance(x1, y1, x2, y2) < r1 + r2
}

/// Clamp a center to world bounds (hard walls, no bounce)
pub fn clamp_to_world(x: f64, y: f64, radius: f64) -> (f64, f64) {
    let x = x.max(radius).min(WORLD_SIZE - radius);
    let y = y.max(radius).min(WORLD_SIZE - radius);
    (x, y)
}

/// Normalize a direction vector
pub fn normalize(x: f64, y: f64) -> (f64, f64) {
    let len = (x * x + y * y).sqrt();
    if len < 0.0001 {
        (0.0, 0.0)
    } else {
        (x / len, y / len)
    }
}
