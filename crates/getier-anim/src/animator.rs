use std::fmt;

type LoopCallback = Box<dyn FnMut(u32)>;

/// Advances a sprite animation from irregular elapsed-time samples.
///
/// The animator accumulates elapsed time against a fixed per-frame duration
/// and reports a frame only on the call where the displayed frame actually
/// changes. Deltas may be arbitrarily large (catch-up skips whole frames) or
/// smaller than one frame time (the remainder is carried in a leftover
/// accumulator, always within `[0, frame_time)` between calls).
///
/// The payload type is whatever the frontend draws: an image handle, a
/// texture region, a glyph.
pub struct FrameAnimator<F> {
    frames: Vec<F>,
    frame_time: f64,
    current_frame_index: usize,
    completed_loops: u32,
    leftover_time: f64,
    on_first_frame: Option<LoopCallback>,
    on_loop_completed: Option<LoopCallback>,
}

impl<F> fmt::Debug for FrameAnimator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameAnimator")
            .field("frames", &self.frames.len())
            .field("frame_time", &self.frame_time)
            .field("current_frame_index", &self.current_frame_index)
            .field("completed_loops", &self.completed_loops)
            .field("leftover_time", &self.leftover_time)
            .finish()
    }
}

impl<F> FrameAnimator<F> {
    /// Create an animator over the given frames.
    pub fn new(frames: Vec<F>, frame_time: f64) -> Self {
        Self {
            frames,
            frame_time,
            current_frame_index: 0,
            completed_loops: 0,
            leftover_time: 0.0,
            on_first_frame: None,
            on_loop_completed: None,
        }
    }

    /// The inert "no animation" animator: never yields a frame, never
    /// invokes a callback.
    pub fn none() -> Self {
        Self::new(Vec::new(), 0.1)
    }

    /// Subscribe to the start of a playback loop. Invoked synchronously from
    /// [`next_frame`](Self::next_frame) with the loop index: once with 0
    /// when a freshly constructed animator first advances, and again each
    /// time the animation wraps around.
    pub fn on_first_frame(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_first_frame = Some(Box::new(callback));
    }

    /// Subscribe to loop completion. Invoked synchronously from
    /// [`next_frame`](Self::next_frame) with the number of completed loops.
    pub fn on_loop_completed(&mut self, callback: impl FnMut(u32) + 'static) {
        self.on_loop_completed = Some(Box::new(callback));
    }

    /// Unsubscribe both callbacks. No further invocations happen after this
    /// call.
    pub fn invalidate(&mut self) {
        self.on_first_frame = None;
        self.on_loop_completed = None;
    }

    /// Advance by `elapsed` seconds and return the new frame if the
    /// displayed frame changed.
    ///
    /// Skipped whole frames wrap around the frame list; a wrap increments
    /// the completed-loop counter and fires the loop-completed and
    /// first-frame callbacks, in that order. Advancing by an exact multiple
    /// of the whole loop leaves the index unchanged and reports no change.
    pub fn next_frame(&mut self, elapsed: f64) -> Option<&F> {
        if self.frames.is_empty() {
            return None;
        }

        if self.completed_loops == 0 && self.current_frame_index == 0 && self.leftover_time == 0.0 {
            if let Some(callback) = self.on_first_frame.as_mut() {
                callback(0);
            }
        }

        let accumulated = elapsed + self.leftover_time;
        if accumulated < self.frame_time {
            self.leftover_time = accumulated;
            return None;
        }

        let frames_skipped = (accumulated / self.frame_time).floor() as usize;
        self.leftover_time = accumulated - frames_skipped as f64 * self.frame_time;

        let next_index = (self.current_frame_index + frames_skipped) % self.frames.len();
        if next_index == self.current_frame_index {
            return None;
        }
        if next_index < self.current_frame_index {
            self.completed_loops += 1;
            let loops = self.completed_loops;
            if let Some(callback) = self.on_loop_completed.as_mut() {
                callback(loops);
            }
            if let Some(callback) = self.on_first_frame.as_mut() {
                callback(loops);
            }
        }
        self.current_frame_index = next_index;
        self.frames.get(next_index)
    }

    /// Number of frames in the animation.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Seconds each frame stays on screen.
    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Seconds one full playback loop takes.
    pub fn loop_duration(&self) -> f64 {
        self.frames.len() as f64 * self.frame_time
    }

    /// Index of the currently displayed frame.
    pub fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    /// Number of completed playback loops so far.
    pub fn completed_loops(&self) -> u32 {
        self.completed_loops
    }

    /// Sub-frame time carried over from the last advance.
    pub fn leftover_time(&self) -> f64 {
        self.leftover_time
    }
}
