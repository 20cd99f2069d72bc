//! Core primitives shared by every system: math types, the seeded RNG and
//! the frame scheduler.

pub mod math;
pub mod random;
pub mod scheduler;
