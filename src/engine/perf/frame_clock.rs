//! Wall-clock tick timing: last frame plus a smoothed average, so the host
//! can tell whether the overlay is the thing stalling its frame budget.

pub(crate) struct FrameClock {
    last_ms: f64,
    avg_ms: f64,
}

pub(crate) struct ClockStamp {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl FrameClock {
    pub(crate) fn new() -> Self {
        Self {
            last_ms: 0.0,
            avg_ms: 0.0,
        }
    }

    pub(crate) fn begin() -> ClockStamp {
        #[cfg(target_arch = "wasm32")]
        {
            ClockStamp { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ClockStamp { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn record(&mut self, stamp: ClockStamp) {
        let elapsed;
        #[cfg(target_arch = "wasm32")]
        {
            elapsed = js_sys::Date::now() - stamp.start_ms;
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            elapsed = stamp.start.elapsed().as_secs_f64() * 1000.0;
        }
        self.last_ms = elapsed;
        self.avg_ms = if self.avg_ms == 0.0 {
            elapsed
        } else {
            self.avg_ms * 0.9 + elapsed * 0.1
        };
    }

    pub(crate) fn last_ms(&self) -> f64 {
        self.last_ms
    }

    pub(crate) fn avg_ms(&self) -> f64 {
        self.avg_ms
    }
}
