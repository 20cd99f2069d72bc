//! Narrow-phase collision response.
//!
//! Everything here is positional correction plus an impulse along the contact
//! normal; enough for decorative bodies, not a general solver.

use crate::core::math::{Rect, Vec2};

use super::body::Body;

/// Impacts slower than this along the normal do not bounce. Kills the
/// 1px-per-frame gravity jitter a resting body would otherwise exhibit.
const REST_VELOCITY: f32 = 2.0;

/// How quickly contact drags angular velocity toward rolling speed.
const ROLL_RELAX: f32 = 0.2;

pub(super) fn collide_body_barrier(body: &mut Body, rect: &Rect) {
    let closest = rect.closest_point(body.pos);
    let delta = body.pos - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= body.radius * body.radius {
        return;
    }

    let (normal, penetration) = if dist_sq > 1e-8 {
        let dist = dist_sq.sqrt();
        (delta * (1.0 / dist), body.radius - dist)
    } else {
        // Center is inside the rectangle: escape along the shallowest face.
        deepest_face_exit(body, rect)
    };

    body.pos += normal * penetration;
    bounce(body, normal);

    // Tangential response: damp sliding, relax spin toward rolling.
    let tangent = normal.perp();
    let slide = body.vel.dot(tangent);
    body.vel -= tangent * (slide * body.friction);
    body.angular_vel += (slide / body.radius - body.angular_vel) * ROLL_RELAX;
}

/// Static circle (the pointer probe) shoves dynamic bodies out of its way.
pub(super) fn collide_body_probe(body: &mut Body, center: Vec2, radius: f32) {
    let delta = body.pos - center;
    let reach = body.radius + radius;
    let dist_sq = delta.length_squared();
    if dist_sq >= reach * reach {
        return;
    }

    let dist = dist_sq.sqrt().max(1e-4);
    let normal = delta * (1.0 / dist);
    body.pos += normal * (reach - dist);
    bounce(body, normal);
}

pub(super) fn collide_body_pair(a: &mut Body, b: &mut Body) {
    let delta = b.pos - a.pos;
    let reach = a.radius + b.radius;
    let dist_sq = delta.length_squared();
    if dist_sq >= reach * reach {
        return;
    }

    let dist = dist_sq.sqrt();
    let normal = if dist > 1e-4 {
        delta * (1.0 / dist)
    } else {
        Vec2::new(1.0, 0.0)
    };

    let inv_a = 1.0 / a.mass;
    let inv_b = 1.0 / b.mass;
    let inv_sum = inv_a + inv_b;

    // Mass-weighted separation.
    let penetration = reach - dist;
    a.pos -= normal * (penetration * inv_a / inv_sum);
    b.pos += normal * (penetration * inv_b / inv_sum);

    let approach = (b.vel - a.vel).dot(normal);
    if approach >= 0.0 {
        return;
    }
    let e = if -approach < REST_VELOCITY {
        0.0
    } else {
        a.restitution.min(b.restitution)
    };
    let impulse = -(1.0 + e) * approach / inv_sum;
    a.vel -= normal * (impulse * inv_a);
    b.vel += normal * (impulse * inv_b);
}

/// Reflect the normal component of `body.vel` off static geometry.
fn bounce(body: &mut Body, normal: Vec2) {
    let approach = body.vel.dot(normal);
    if approach >= 0.0 {
        return;
    }
    let e = if -approach < REST_VELOCITY { 0.0 } else { body.restitution };
    body.vel -= normal * ((1.0 + e) * approach);
}

fn deepest_face_exit(body: &Body, rect: &Rect) -> (Vec2, f32) {
    let left = body.pos.x - rect.min.x;
    let right = rect.max.x - body.pos.x;
    let up = body.pos.y - rect.min.y;
    let down = rect.max.y - body.pos.y;

    let mut best = left;
    let mut normal = Vec2::new(-1.0, 0.0);
    if right < best {
        best = right;
        normal = Vec2::new(1.0, 0.0);
    }
    if up < best {
        best = up;
        normal = Vec2::new(0.0, -1.0);
    }
    if down < best {
        best = down;
        normal = Vec2::new(0.0, 1.0);
    }
    (normal, best + body.radius)
}
