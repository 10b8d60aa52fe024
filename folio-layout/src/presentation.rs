use std::time::{Duration, Instant};

use crate::viewport::ViewportClass;

/// Default expanded sidebar width in logical pixels.
pub const DEFAULT_PANEL_WIDTH: f32 = 240.0;
/// Default open/close transition length in milliseconds.
pub const DEFAULT_TRANSITION_MS: u64 = 300;

/// Whether the dismiss backdrop is shown behind the panel.
///
/// The backdrop only exists for the mobile overlay; on desktop the panel is
/// persistent chrome and nothing is drawn behind it.
pub fn backdrop_visible(is_open: bool, class: ViewportClass) -> bool {
    is_open && class.is_mobile()
}

/// Visual extent of the sidebar panel at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    pub width: f32,
    pub opacity: f32,
}

impl PanelFrame {
    pub const COLLAPSED: PanelFrame = PanelFrame {
        width: 0.0,
        opacity: 0.0,
    };

    pub fn expanded(width: f32) -> Self {
        Self {
            width,
            opacity: 1.0,
        }
    }

    fn lerp(self, target: PanelFrame, t: f32) -> PanelFrame {
        PanelFrame {
            width: self.width + (target.width - self.width) * t,
            opacity: self.opacity + (target.opacity - self.opacity) * t,
        }
    }
}

/// Eased interpolation of the panel between collapsed and expanded.
///
/// Retargeting while a transition is running starts from the frame visible
/// at that instant, so the panel never jumps.
#[derive(Debug, Clone)]
pub struct PanelTransition {
    expanded: PanelFrame,
    duration: Duration,
    is_open: bool,
    from: PanelFrame,
    started_at: Option<Instant>,
}

impl PanelTransition {
    /// Create a transition already settled at the initial target.
    pub fn new(panel_width: f32, duration: Duration, is_open: bool) -> Self {
        let expanded = PanelFrame::expanded(panel_width);
        let from = if is_open {
            expanded
        } else {
            PanelFrame::COLLAPSED
        };

        Self {
            expanded,
            duration,
            is_open,
            from,
            started_at: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn panel_width(&self) -> f32 {
        self.expanded.width
    }

    /// Point the transition at a new open state.
    pub fn set_target(&mut self, is_open: bool, now: Instant) {
        if is_open == self.is_open {
            return;
        }

        self.from = self.frame_at(now);
        self.is_open = is_open;
        self.started_at = Some(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started_at.is_some_and(|started| {
            now.saturating_duration_since(started) < self.duration
        })
    }

    /// Frame to draw at `now`.
    pub fn frame_at(&self, now: Instant) -> PanelFrame {
        let target = self.target();
        let Some(started) = self.started_at else {
            return target;
        };

        let elapsed = now.saturating_duration_since(started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return target;
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from.lerp(target, ease_in_out_cubic(t))
    }

    fn target(&self) -> PanelFrame {
        if self.is_open {
            self.expanded
        } else {
            PanelFrame::COLLAPSED
        }
    }
}

fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{
        PanelFrame, PanelTransition, backdrop_visible, ease_in_out_cubic,
    };
    use crate::viewport::ViewportClass;

    const WIDTH: f32 = 240.0;
    const DURATION: Duration = Duration::from_millis(300);

    #[test]
    fn given_all_flag_and_class_combinations_when_checked_then_backdrop_only_on_open_mobile()
     {
        assert!(backdrop_visible(true, ViewportClass::Mobile));
        assert!(!backdrop_visible(false, ViewportClass::Mobile));
        assert!(!backdrop_visible(true, ViewportClass::Desktop));
        assert!(!backdrop_visible(false, ViewportClass::Desktop));
    }

    #[test]
    fn given_new_transition_when_sampled_then_it_is_settled_at_initial_target()
    {
        let now = Instant::now();
        let open = PanelTransition::new(WIDTH, DURATION, true);
        let closed = PanelTransition::new(WIDTH, DURATION, false);

        assert_eq!(open.frame_at(now), PanelFrame::expanded(WIDTH));
        assert_eq!(closed.frame_at(now), PanelFrame::COLLAPSED);
        assert!(!open.is_animating(now));
    }

    #[test]
    fn given_opening_transition_when_sampled_midway_then_frame_is_between_bounds()
     {
        let start = Instant::now();
        let mut transition = PanelTransition::new(WIDTH, DURATION, false);

        transition.set_target(true, start);
        let mid = transition.frame_at(start + DURATION / 2);

        assert!(transition.is_animating(start + DURATION / 2));
        assert!(mid.width > 0.0 && mid.width < WIDTH);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert_eq!(
            transition.frame_at(start + DURATION),
            PanelFrame::expanded(WIDTH)
        );
        assert!(!transition.is_animating(start + DURATION));
    }

    #[test]
    fn given_retarget_mid_flight_when_sampled_then_it_starts_from_current_frame()
     {
        let start = Instant::now();
        let mut transition = PanelTransition::new(WIDTH, DURATION, false);
        transition.set_target(true, start);

        let turn = start + DURATION / 2;
        let at_turn = transition.frame_at(turn);
        transition.set_target(false, turn);

        assert_eq!(transition.frame_at(turn), at_turn);
        assert_eq!(
            transition.frame_at(turn + DURATION),
            PanelFrame::COLLAPSED
        );
    }

    #[test]
    fn given_same_target_when_set_then_transition_does_not_restart() {
        let now = Instant::now();
        let mut transition = PanelTransition::new(WIDTH, DURATION, true);

        transition.set_target(true, now);

        assert!(!transition.is_animating(now));
    }

    #[test]
    fn given_zero_duration_when_retargeted_then_target_is_reached_immediately()
    {
        let now = Instant::now();
        let mut transition = PanelTransition::new(WIDTH, Duration::ZERO, true);

        transition.set_target(false, now);

        assert_eq!(transition.frame_at(now), PanelFrame::COLLAPSED);
        assert!(!transition.is_animating(now));
    }

    #[test]
    fn given_easing_bounds_when_evaluated_then_endpoints_are_exact() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < f32::EPSILON);
    }
}
