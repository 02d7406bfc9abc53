pub mod ai;
pub mod blob;
pub mod engine;
pub mod physics;
pub mod spawn;
pub mod world;
