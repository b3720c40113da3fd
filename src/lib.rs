//! Grid raycasting core for a Wolfenstein-style maze renderer.
//!
//! A player pose explores a rectangular grid of wall cells; every turn or
//! move recasts a fan of rays across the field of view, and each ray reports
//! the nearest grid-aligned wall it crosses as a [`Hit`]: the world-space
//! intersection, which grid-line family was crossed, the fisheye-corrected
//! perpendicular distance, and the struck cell's indices. Drawing and input
//! devices stay outside the crate; a renderer consumes [`Engine::hits`] at
//! its own cadence and input arrives as discrete [`Engine::turn`] /
//! [`Engine::step`] calls.
//!
//! Two coordinate frames are in play: positions are screen space (y grows
//! downward) while direction vectors live in a y-up math frame, crossing
//! over through [`math::reflection`] exactly once. Ray 0 is the leftmost
//! screen column.

pub mod board;
pub mod engine;
pub mod map;
pub mod math;
pub mod player;
pub mod ray;

pub use board::{Board, BoardError};
pub use engine::{Engine, DEFAULT_SEARCH_DEPTH};
pub use map::{Map, MapError};
pub use player::{Player, PlayerError, Turn, Walk};
pub use ray::{Hit, Side};
