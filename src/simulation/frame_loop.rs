use super::Simulation;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared flag that stops a [`FrameLoop`] run once set.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// What the host should do with the frame it just reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// The loop is cancelled: neither redraw nor schedule another frame.
    Stopped,
    /// Nothing advanced; redraw the current field.
    Render,
    /// One generation was computed; redraw it.
    Stepped,
}

/// Gate between the display's per-frame callback and [`Simulation::tick`].
///
/// The host reports every frame with a timestamp in milliseconds. The first
/// frame of a run only sets the baseline; afterwards, once more than the
/// simulation's speed has elapsed since the baseline, exactly one tick runs
/// and the baseline moves to that frame.
#[derive(Default)]
pub struct FrameLoop {
    token: Option<CancelToken>,
    baseline: Option<f64>,
}

impl FrameLoop {
    /// Begins a new run, cancelling the previous one if any.
    pub fn start(&mut self) -> CancelToken {
        self.cancel();
        let token = CancelToken::default();
        self.token = Some(token.clone());
        self.baseline = None;
        log::debug!("Frame loop started");
        token
    }

    pub fn cancel(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
            log::debug!("Frame loop cancelled");
        }
        self.baseline = None;
    }

    pub fn is_active(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    pub fn on_frame(&mut self, sim: &mut Simulation, timestamp_ms: f64) -> Frame {
        if !self.is_active() {
            self.token = None;
            return Frame::Stopped;
        }
        let baseline = *self.baseline.get_or_insert(timestamp_ms);
        if timestamp_ms - baseline > sim.speed() as f64 {
            self.baseline = Some(timestamp_ms);
            if sim.tick() {
                return Frame::Stepped;
            }
        }
        Frame::Render
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
