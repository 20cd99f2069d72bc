use std::f32::consts::PI;

use crate::core::math::Vec2;

/// Circular rigid body
pub struct Body {
    /// Unique ID, assigned by the world on insertion.
    pub id: u32,
    /// World position (center).
    pub pos: Vec2,
    /// Velocity vector (pixels per frame).
    pub vel: Vec2,
    /// Rotation angle (radians).
    pub angle: f32,
    /// Angular velocity (radians per frame).
    pub angular_vel: f32,
    pub radius: f32,
    /// Sprite scale the renderer should apply (diameter / source texture size).
    pub visual_scale: f32,

    // === Material ===
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic).
    pub restitution: f32,
    /// Tangential damping on contact; low values slide freely.
    pub friction: f32,
    pub mass: f32,
}

impl Body {
    /// Create a circular body at `(x, y)`; mass comes from `density` * area.
    pub fn circle(x: f32, y: f32, radius: f32, density: f32) -> Self {
        let mass = (density * PI * radius * radius).max(0.001);
        Self {
            id: 0,
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            angle: 0.0,
            angular_vel: 0.0,
            radius,
            visual_scale: 1.0,
            restitution: 0.3,
            friction: 0.1,
            mass,
        }
    }
}
