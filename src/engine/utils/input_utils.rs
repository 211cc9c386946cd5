use winit::event::MouseScrollDelta;

/// Pixels treated as one wheel notch for touchpads reporting pixel deltas.
const PIXELS_PER_LINE: f64 = 40.0;

/// Turns absolute cursor positions into per-event look offsets.
#[derive(Debug, Default, Clone)]
pub struct MouseTracker {
    last_position: Option<(f32, f32)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self { last_position: None }
    }

    /// Offset since the previous cursor event as `(dx, dy)`, with `dy` positive
    /// when the cursor moves up. The first event only primes the tracker.
    pub fn offset(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let (x, y) = (x as f32, y as f32);
        let previous = self.last_position.replace((x, y));
        // window y grows downwards
        previous.map(|(last_x, last_y)| (x - last_x, last_y - y))
    }

    pub fn reset(&mut self) {
        self.last_position = None;
    }
}

pub fn scroll_lines(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
    }
}
