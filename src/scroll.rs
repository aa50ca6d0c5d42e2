//! Maps the geometry of a tall, multi-step container onto a pinned stage.
//!
//! The container is `step_count` viewports tall. While its top edge is below
//! the viewport top the stage sits at the container's top (`Before`), while
//! the container covers the whole viewport the stage is fixed to the screen
//! (`Pinned`), and once its bottom edge rises above the viewport bottom the
//! stage sticks to the container's bottom (`After`).

/// Viewport-relative edges of the tracked container, as reported by
/// `getBoundingClientRect`. Both values may be negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerRect {
    pub top: f64,
    pub bottom: f64,
}

impl ContainerRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn height(&self) -> f64 {
        (self.bottom - self.top).max(0.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinMode {
    #[default]
    Before,
    Pinned,
    After,
}

impl PinMode {
    /// Positioning class for the stage inside the container.
    pub fn css_class(self) -> &'static str {
        match self {
            PinMode::Before => "stage-top",
            PinMode::Pinned => "stage-fixed",
            PinMode::After => "stage-bottom",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgressState {
    pub container_top: f64,
    pub container_height: f64,
    pub mode: PinMode,
    /// Percentage in `[0, 100]`.
    pub progress: f64,
    pub active_step: usize,
    pub visible: bool,
}

impl ScrollProgressState {
    /// State before the first measurement: container below the fold.
    pub fn initial() -> Self {
        Self {
            container_top: 0.0,
            container_height: 0.0,
            mode: PinMode::Before,
            progress: 0.0,
            active_step: 0,
            visible: false,
        }
    }
}

impl Default for ScrollProgressState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Step shown for a given progress percentage. Exact boundaries round down
/// and 100% clamps to the last step.
pub fn step_index(progress: f64, step_count: usize) -> usize {
    let step_count = step_count.max(1);
    if !progress.is_finite() || progress <= 0.0 {
        return 0;
    }
    let raw = (progress / 100.0 * step_count as f64).floor() as usize;
    raw.min(step_count - 1)
}

pub fn recompute(
    rect: ContainerRect,
    viewport_height: f64,
    step_count: usize,
) -> ScrollProgressState {
    // Unmeasurable geometry parks the stage at its start
    if !(rect.top.is_finite() && rect.bottom.is_finite() && viewport_height.is_finite()) {
        return ScrollProgressState::initial();
    }
    let step_count = step_count.max(1);
    let container_height = rect.height();
    let scrollable = container_height - viewport_height;
    let visible = rect.top < viewport_height && rect.bottom > 0.0;

    let (mode, progress) = if rect.top > 0.0 {
        (PinMode::Before, 0.0)
    } else if rect.bottom < viewport_height || !(scrollable > 0.0) {
        // A container no taller than the viewport has no pinned range:
        // it flips straight from Before to After at the crossing point.
        (PinMode::After, 100.0)
    } else {
        let ratio = (-rect.top / scrollable).clamp(0.0, 1.0);
        let ratio = if ratio.is_nan() { 0.0 } else { ratio };
        (PinMode::Pinned, ratio * 100.0)
    };

    let active_step = match mode {
        PinMode::Before => 0,
        PinMode::After => step_count - 1,
        PinMode::Pinned => step_index(progress, step_count),
    };

    ScrollProgressState {
        container_top: rect.top,
        container_height,
        mode,
        progress,
        active_step,
        visible,
    }
}

/// True once an element has entered the viewport by at least `margin` pixels.
pub fn entered_viewport(rect: ContainerRect, viewport_height: f64, margin: f64) -> bool {
    rect.top < viewport_height - margin && rect.bottom > margin
}

/// Strictly past: a page sitting exactly on the threshold still counts as top.
pub fn scrolled_past(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;
    const STEPS: usize = 4;
    const HEIGHT: f64 = VIEWPORT * STEPS as f64;

    fn at(top: f64) -> ScrollProgressState {
        recompute(ContainerRect::new(top, top + HEIGHT), VIEWPORT, STEPS)
    }

    #[test]
    fn below_the_fold_is_before() {
        for top in [1.0, 250.0, 799.0, 5000.0] {
            let state = at(top);
            assert_eq!(state.mode, PinMode::Before);
            assert_eq!(state.progress, 0.0);
            assert_eq!(state.active_step, 0);
        }
        assert!(at(400.0).visible);
        assert!(!at(5000.0).visible);
    }

    #[test]
    fn scrolled_past_is_after() {
        for top in [-2401.0, -3000.0, -10_000.0] {
            let state = at(top);
            assert_eq!(state.mode, PinMode::After);
            assert_eq!(state.progress, 100.0);
            assert_eq!(state.active_step, STEPS - 1);
        }
        assert!(at(-3000.0).visible);
        assert!(!at(-10_000.0).visible);
    }

    #[test]
    fn boundary_scenario() {
        let entering = at(0.0);
        assert_eq!(entering.mode, PinMode::Pinned);
        assert_eq!(entering.progress, 0.0);
        assert_eq!(entering.active_step, 0);

        let halfway = at(-1200.0);
        assert_eq!(halfway.mode, PinMode::Pinned);
        assert_eq!(halfway.progress, 50.0);
        assert_eq!(halfway.active_step, 2);

        // bottom == viewport is still pinned, After needs bottom < viewport
        let end = at(-2400.0);
        assert_eq!(end.mode, PinMode::Pinned);
        assert_eq!(end.progress, 100.0);
        assert_eq!(end.active_step, 3);
        assert_eq!(end.container_height, HEIGHT);
    }

    #[test]
    fn progress_is_monotonic_and_path_independent() {
        let tops: Vec<f64> = (0..=480).map(|i| -(i as f64) * 5.0).collect();
        let forward: Vec<ScrollProgressState> = tops.iter().map(|&t| at(t)).collect();
        for pair in forward.windows(2) {
            assert!(pair[1].progress >= pair[0].progress);
            assert!(pair[1].active_step >= pair[0].active_step);
            assert!(pair[1].active_step < STEPS);
        }

        let backward: Vec<ScrollProgressState> = tops.iter().rev().map(|&t| at(t)).collect();
        for (a, b) in forward.iter().zip(backward.iter().rev()) {
            assert_eq!(a, b);
        }
    }

    #[test]
    fn recompute_is_idempotent() {
        let rect = ContainerRect::new(-733.3, -733.3 + HEIGHT);
        let first = recompute(rect, VIEWPORT, STEPS);
        let second = recompute(rect, VIEWPORT, STEPS);
        assert_eq!(first.progress.to_bits(), second.progress.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn step_boundaries_round_down() {
        assert_eq!(step_index(0.0, 4), 0);
        assert_eq!(step_index(24.999, 4), 0);
        assert_eq!(step_index(25.0, 4), 1);
        assert_eq!(step_index(75.0, 4), 3);
        assert_eq!(step_index(100.0, 4), 3);
        assert_eq!(step_index(f64::NAN, 4), 0);
    }

    #[test]
    fn single_step_has_no_pinned_range() {
        let above = recompute(ContainerRect::new(10.0, 810.0), VIEWPORT, 1);
        assert_eq!(above.mode, PinMode::Before);
        assert_eq!(above.progress, 0.0);

        let crossing = recompute(ContainerRect::new(0.0, 800.0), VIEWPORT, 1);
        assert_eq!(crossing.mode, PinMode::After);
        assert_eq!(crossing.progress, 100.0);
        assert_eq!(crossing.active_step, 0);
    }

    #[test]
    fn zero_steps_behave_like_one() {
        let state = recompute(ContainerRect::new(-100.0, 700.0), VIEWPORT, 0);
        assert_eq!(state.active_step, 0);
    }

    #[test]
    fn entered_viewport_respects_margin() {
        assert!(!entered_viewport(ContainerRect::new(750.0, 1500.0), VIEWPORT, 100.0));
        assert!(entered_viewport(ContainerRect::new(650.0, 1500.0), VIEWPORT, 100.0));
        assert!(!entered_viewport(ContainerRect::new(-900.0, 50.0), VIEWPORT, 100.0));
    }

    #[test]
    fn header_flips_only_after_threshold() {
        let threshold = crate::config::HEADER_SCROLL_THRESHOLD;
        assert!(!scrolled_past(0.0, threshold));
        assert!(!scrolled_past(50.0, threshold));
        assert!(scrolled_past(50.5, threshold));
        assert!(!scrolled_past(f64::NAN, threshold));
    }

    #[test]
    fn non_finite_geometry_stays_at_start() {
        for rect in [
            ContainerRect::new(f64::NAN, HEIGHT),
            ContainerRect::new(-1200.0, f64::NAN),
            ContainerRect::new(f64::NEG_INFINITY, HEIGHT),
        ] {
            let state = recompute(rect, VIEWPORT, 4);
            assert_eq!(state.mode, PinMode::Before);
            assert_eq!(state.progress, 0.0);
            assert_eq!(state.active_step, 0);
            assert!(!state.visible);
        }
        let state = recompute(ContainerRect::new(-1200.0, 2000.0), f64::NAN, 4);
        assert_eq!(state.mode, PinMode::Before);
        assert_eq!(state.progress, 0.0);
    }
}
