//! Core data types shared by every hreeble module.
//!
//! Includes vector aliases (`Vec2` for parameter space, `Vec3` for world
//! space) and the small scalar helpers built on them.

pub mod vec2;
pub mod vec3;
