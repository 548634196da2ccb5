/// Sample bar width bounds and step, in pixels.
pub const MIN_ZOOM: f32 = 20.0;
pub const MAX_ZOOM: f32 = 100.0;
pub const ZOOM_STEP: f32 = 10.0;
pub const DEFAULT_ZOOM: f32 = 40.0;

/// Horizontal gap between sample cells, part of the cell pitch.
pub const SAMPLE_MARGIN: f32 = 2.0;

/// Frames to keep repainting after a load or zoom so the recomputed content
/// width settles and the offset gets re-clamped against it.
pub const SETTLE_FRAMES: u32 = 2;

/// One shared horizontal offset for every track and the unified scrollbar.
///
/// Each frame every track reports the offset it ended up at. If a track
/// diverged from the shared offset (the user scrolled it) and the
/// propagation latch is clear, the shared offset adopts it and the latch is
/// set; further divergence reports in the same frame are ignored. The latch
/// clears on the next frame, so propagation cannot ping-pong between tracks.
#[derive(Debug, Clone, Default)]
pub struct ScrollSync {
    offset: f32,
    propagating: bool,
}

impl ScrollSync {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Reset the propagation latch. Call once at the top of each frame.
    pub fn begin_frame(&mut self) {
        self.propagating = false;
    }

    /// A track reports where it actually is. Returns true when the shared
    /// offset adopted the reported value.
    pub fn observe(&mut self, reported: f32) -> bool {
        if self.propagating {
            return false;
        }
        if (reported - self.offset).abs() <= 0.5 {
            return false;
        }
        self.offset = reported.max(0.0);
        self.propagating = true;
        true
    }

    /// Programmatic scroll (auto-centering on selection). Takes the latch so
    /// track-reported offsets from the same frame cannot override it.
    pub fn set(&mut self, offset: f32, max: f32) {
        self.offset = offset.clamp(0.0, max.max(0.0));
        self.propagating = true;
    }

    pub fn clamp_to(&mut self, max: f32) {
        self.offset = self.offset.clamp(0.0, max.max(0.0));
    }
}

/// Zoom level plus shared scroll state for the whole timeline.
#[derive(Debug, Clone)]
pub struct Viewport {
    pub zoom: f32,
    pub scroll: ScrollSync,
    pub settle_frames: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            scroll: ScrollSync::default(),
            settle_frames: 0,
        }
    }
}

impl Viewport {
    /// Width of one sample cell including its margin.
    pub fn cell_pitch(&self) -> f32 {
        self.zoom + SAMPLE_MARGIN
    }

    /// Total scrollable width for `count` samples.
    pub fn content_width(&self, count: usize) -> f32 {
        self.cell_pitch() * (count as f32 + 1.0)
    }

    pub fn zoom_in(&mut self) -> bool {
        if self.zoom >= MAX_ZOOM {
            return false;
        }
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
        self.settle_frames = SETTLE_FRAMES;
        true
    }

    pub fn zoom_out(&mut self) -> bool {
        if self.zoom <= MIN_ZOOM {
            return false;
        }
        self.zoom = (self.zoom - ZOOM_STEP).max(MIN_ZOOM);
        self.settle_frames = SETTLE_FRAMES;
        true
    }

    /// Scroll so sample `index` sits at the horizontal center of a viewport
    /// `view_width` wide, clamped to the valid scroll range.
    pub fn center_on(&mut self, index: usize, count: usize, view_width: f32) {
        let target = (index as f32 + 0.5) * self.cell_pitch() - view_width / 2.0;
        let max = (self.content_width(count) - view_width).max(0.0);
        self.scroll.set(target.max(0.0), max);
    }

    /// Map an x position inside the track (content coordinates) to a sample
    /// index, if it lands on one.
    pub fn index_at_x(&self, x: f32, count: usize) -> Option<usize> {
        if x < 0.0 {
            return None;
        }
        let idx = (x / self.cell_pitch()).floor() as usize;
        (idx < count).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_never_leaves_bounds() {
        let mut vp = Viewport::default();
        for _ in 0..50 {
            vp.zoom_in();
        }
        assert_eq!(vp.zoom, MAX_ZOOM);
        for _ in 0..50 {
            vp.zoom_out();
        }
        assert_eq!(vp.zoom, MIN_ZOOM);
        assert!(!vp.zoom_out());
    }

    #[test]
    fn content_width_counts_one_extra_cell() {
        let vp = Viewport::default();
        let expected = (DEFAULT_ZOOM + SAMPLE_MARGIN) * 5.0;
        assert_eq!(vp.content_width(4), expected);
    }

    #[test]
    fn scroll_sync_converges_within_one_frame() {
        let mut sync = ScrollSync::default();
        // Frame 1: track A scrolled to 120; B and the scrollbar then report
        // stale positions which must be ignored.
        sync.begin_frame();
        assert!(sync.observe(120.0));
        assert!(!sync.observe(0.0));
        assert!(!sync.observe(3.0));
        assert_eq!(sync.offset(), 120.0);
        // Frame 2: everyone already agrees, nothing propagates.
        sync.begin_frame();
        assert!(!sync.observe(120.0));
        assert_eq!(sync.offset(), 120.0);
    }

    #[test]
    fn programmatic_set_wins_over_track_reports() {
        let mut sync = ScrollSync::default();
        sync.begin_frame();
        sync.set(300.0, 1000.0);
        assert!(!sync.observe(40.0));
        assert_eq!(sync.offset(), 300.0);
    }

    #[test]
    fn set_clamps_to_range() {
        let mut sync = ScrollSync::default();
        sync.set(-10.0, 100.0);
        assert_eq!(sync.offset(), 0.0);
        sync.begin_frame();
        sync.set(500.0, 100.0);
        assert_eq!(sync.offset(), 100.0);
    }

    #[test]
    fn center_on_clamps_near_edges() {
        let mut vp = Viewport::default();
        vp.center_on(0, 100, 400.0);
        assert_eq!(vp.scroll.offset(), 0.0);
        let max = vp.content_width(100) - 400.0;
        vp.scroll.begin_frame();
        vp.center_on(99, 100, 400.0);
        assert_eq!(vp.scroll.offset(), max);
    }

    #[test]
    fn hit_test_matches_cell_geometry() {
        let vp = Viewport::default();
        let pitch = vp.cell_pitch();
        assert_eq!(vp.index_at_x(0.0, 10), Some(0));
        assert_eq!(vp.index_at_x(pitch * 3.0 + 1.0, 10), Some(3));
        assert_eq!(vp.index_at_x(pitch * 10.0 + 1.0, 10), None);
        assert_eq!(vp.index_at_x(-5.0, 10), None);
    }

}
