use super::Simulation;

/// Cell under a pointer at `(px, py)` pixels from the field's top left corner.
///
/// Pixels left of or above the field map to negative cells.
pub fn pixel_to_cell(px: f32, py: f32, cell_size: f32) -> (i64, i64) {
    (
        (px / cell_size).floor() as i64,
        (py / cell_size).floor() as i64,
    )
}

/// Primary button state for one frame, with the cell under the pointer.
///
/// `cell` is `None` when the pointer is off the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    pub pressed: bool,
    pub down: bool,
    pub cell: Option<(i64, i64)>,
}

/// Press-drag painting with a mode latched when the stroke starts.
///
/// The mode is the inverse of the first cell's state, so dragging back over
/// cells already painted leaves them alone. Between the sampled points
/// nothing is interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStroke {
    mode: bool,
    last: (i64, i64),
}

impl PaintStroke {
    /// Starts a stroke at cell `(x, y)` and paints it.
    ///
    /// Returns `None` and leaves the field alone when the press misses it.
    pub fn press(sim: &mut Simulation, x: i64, y: i64) -> Option<Self> {
        let mode = !sim.grid().try_get(x, y)?;
        sim.set_cell(x, y, Some(mode));
        Some(Self { mode, last: (x, y) })
    }

    /// Continues the stroke to cell `(x, y)`.
    ///
    /// A repeat of the previous point is skipped; points outside the field
    /// are remembered but paint nothing.
    pub fn drag(&mut self, sim: &mut Simulation, x: i64, y: i64) {
        if self.last == (x, y) {
            return;
        }
        sim.set_cell(x, y, Some(self.mode));
        self.last = (x, y);
    }

    /// Advances the stroke in progress by one pointer sample.
    ///
    /// A press starts a new stroke on the cell under the pointer. Releasing
    /// the button or leaving the field ends it, and coming back while still
    /// held does not resume it.
    pub fn follow(
        stroke: Option<Self>,
        sim: &mut Simulation,
        sample: PointerSample,
    ) -> Option<Self> {
        if sample.pressed {
            let (x, y) = sample.cell?;
            return Self::press(sim, x, y);
        }
        if !sample.down {
            return None;
        }
        let (x, y) = sample.cell?;
        let mut stroke = stroke?;
        stroke.drag(sim, x, y);
        Some(stroke)
    }

    /// State written by this stroke.
    pub fn mode(&self) -> bool {
        self.mode
    }
}
