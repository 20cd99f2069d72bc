//! Explicit frame scheduler.
//!
//! Per-frame work is modeled as a registered set of stateful updaters instead
//! of callbacks that re-schedule themselves recursively. Each frame the engine
//! drives every active slot once; an updater that reports `Settled` is parked
//! and costs nothing until something wakes its slot again.

/// Outcome of one frame of work for an updater.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still moving, keep ticking next frame.
    Running,
    /// At rest; the slot can be parked.
    Settled,
}

/// A stateful per-frame updater driven by the scheduler.
pub trait Updater {
    fn tick(&mut self) -> Tick;
}

/// The fixed set of updaters the engine runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Draggable spring toggle; parks itself at rest.
    Spring = 0,
    /// Falling-body field; process-lifetime, never parks.
    Field = 1,
}

const SLOT_COUNT: usize = 2;

#[derive(Default)]
pub struct Scheduler {
    active: [bool; SLOT_COUNT],
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wake(&mut self, slot: Slot) {
        self.active[slot as usize] = true;
    }

    pub fn park(&mut self, slot: Slot) {
        self.active[slot as usize] = false;
    }

    pub fn is_active(&self, slot: Slot) -> bool {
        self.active[slot as usize]
    }

    /// Tick `updater` if its slot is active, parking the slot when it settles.
    pub fn drive(&mut self, slot: Slot, updater: &mut dyn Updater) {
        if !self.is_active(slot) {
            return;
        }
        if updater.tick() == Tick::Settled {
            self.park(slot);
        }
    }
}
