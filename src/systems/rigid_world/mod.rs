//! Minimal 2D rigid-body world: circular dynamic bodies against static
//! rectangular barriers, integrated once per frame.
//!
//! The world knows nothing about spawning policy, viewports or the DOM; the
//! engine layer decides what the barriers mean and when bodies appear.

mod body;
mod collision;

pub use body::Body;

use crate::core::math::{Rect, Vec2};

/// Static axis-aligned collision geometry.
#[derive(Clone, Copy, Debug)]
pub struct Barrier {
    pub rect: Rect,
}

/// Static circle tracking the host pointer.
#[derive(Clone, Copy, Debug)]
struct Probe {
    pos: Vec2,
    radius: f32,
}

pub struct RigidWorld {
    gravity: Vec2,
    bodies: Vec<Body>,
    barriers: Vec<Barrier>,
    probe: Option<Probe>,
    next_id: u32,
}

impl RigidWorld {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            bodies: Vec::new(),
            barriers: Vec::new(),
            probe: None,
            next_id: 1,
        }
    }

    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    /// Insert a body, assigning it a fresh ID.
    pub fn add_body(&mut self, mut body: Body) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        body.id = id;
        self.bodies.push(body);
        id
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn add_barrier(&mut self, rect: Rect) {
        self.barriers.push(Barrier { rect });
    }

    /// Drop every barrier. Rebuilds always start from scratch so repeated
    /// environment passes cannot accumulate geometry.
    pub fn clear_barriers(&mut self) {
        self.barriers.clear();
    }

    pub fn barrier_count(&self) -> usize {
        self.barriers.len()
    }

    pub fn barriers(&self) -> &[Barrier] {
        &self.barriers
    }

    /// Shift all static geometry in bulk (scroll compensation).
    pub fn translate_barriers(&mut self, offset: Vec2) {
        for barrier in &mut self.barriers {
            barrier.rect.translate(offset);
        }
    }

    pub fn set_probe(&mut self, pos: Vec2, radius: f32) {
        self.probe = Some(Probe { pos, radius });
    }

    pub fn clear_probe(&mut self) {
        self.probe = None;
    }

    /// Advance one frame: integrate, then resolve contacts.
    /// O(bodies * barriers + bodies^2); both counts are small and bounded.
    pub fn step(&mut self) {
        for body in &mut self.bodies {
            body.vel += self.gravity;
            body.pos += body.vel;
            body.angle += body.angular_vel;
        }

        for body in &mut self.bodies {
            for barrier in &self.barriers {
                collision::collide_body_barrier(body, &barrier.rect);
            }
            if let Some(probe) = self.probe {
                collision::collide_body_probe(body, probe.pos, probe.radius);
            }
        }

        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let a = &mut head[i];
            for b in tail {
                collision::collide_body_pair(a, b);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_with_floor() -> RigidWorld {
        let mut world = RigidWorld::new(Vec2::new(0.0, 1.0));
        // Floor top edge at y = 600.
        world.add_barrier(Rect::from_center(400.0, 650.0, 800.0, 100.0));
        world
    }

    #[test]
    fn falling_body_rests_on_floor() {
        let mut world = world_with_floor();
        let mut body = Body::circle(400.0, 100.0, 25.0, 0.005);
        body.restitution = 0.6;
        world.add_body(body);

        for _ in 0..600 {
            world.step();
        }

        let body = &world.bodies()[0];
        // Resting center sits one radius above the floor top, never inside it.
        assert!((body.pos.y - 575.0).abs() < 1.0, "y = {}", body.pos.y);
        assert!(body.vel.y.abs() < 1.5);
    }

    #[test]
    fn overlapping_pair_separates() {
        let mut world = RigidWorld::new(Vec2::ZERO);
        world.add_body(Body::circle(100.0, 100.0, 20.0, 0.005));
        world.add_body(Body::circle(110.0, 100.0, 20.0, 0.005));

        world.step();

        let gap = (world.bodies()[1].pos - world.bodies()[0].pos).length();
        assert!(gap >= 40.0 - 0.01, "gap = {gap}");
        assert!(gap.is_finite());
    }

    #[test]
    fn translate_barriers_moves_every_rect() {
        let mut world = world_with_floor();
        world.add_barrier(Rect::new(10.0, 20.0, 30.0, 40.0));
        let before: Vec<f32> = world.barriers().iter().map(|b| b.rect.min.y).collect();

        world.translate_barriers(Vec2::new(0.0, -100.0));

        for (barrier, y0) in world.barriers().iter().zip(before) {
            assert_eq!(barrier.rect.min.y, y0 - 100.0);
        }
    }
}
