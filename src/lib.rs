//! Blob arena simulation: a player-controlled blob grows by eating food and
//! smaller AI blobs, under timed power-ups, safe/decay zones, and mood-driven
//! AI opponents. Rendering and input stay outside; the crate exposes a
//! [`snapshot::RenderState`] read model and consumes a steering target plus a
//! restart signal.

pub mod config;
pub mod game;
pub mod snapshot;

pub use game::blob::{Blob, Kind};
pub use game::engine::{build_render_state, create_world, game_loop, SharedWorld};
pub use game::world::World;
