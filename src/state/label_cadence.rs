use crate::model::Tick;

/// Simulated seconds between label refreshes while a shot is in flight.
pub const LABEL_REFRESH_INTERVAL_S: f64 = 0.1;

/// Decides which animation frames also re-render the readout labels. The
/// canvas repaints every frame; the DOM only at this cadence and when the
/// loop stops.
#[derive(Clone, Debug)]
pub struct LabelCadence {
    interval_s: f64,
    last_shown_s: f64,
}

impl Default for LabelCadence {
    fn default() -> Self {
        Self::new(LABEL_REFRESH_INTERVAL_S)
    }
}

impl LabelCadence {
    pub fn new(interval_s: f64) -> Self {
        Self {
            interval_s,
            last_shown_s: 0.0,
        }
    }

    /// `elapsed` is the session clock after this frame's tick.
    pub fn due(&mut self, elapsed: f64, outcome: Tick) -> bool {
        // clock went backwards: a reset or a new shot
        if elapsed < self.last_shown_s {
            self.last_shown_s = 0.0;
        }
        if outcome == Tick::Stop || elapsed - self.last_shown_s >= self.interval_s {
            self.last_shown_s = elapsed;
            return true;
        }
        false
    }
}
