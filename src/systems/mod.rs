//! Reusable mechanisms: the rigid-body world and the spring toggle.

pub mod rigid_world;
pub mod spring;
