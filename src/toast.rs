//! Transient notification state.
//!
//! A toast moves Hidden → Appearing → Visible → Dismissing → Hidden. Every
//! `Show` starts a new cycle; timer-driven actions carry the cycle they were
//! scheduled for and are dropped if a newer `Show` has replaced it. The
//! [`Toast`](crate::components::Toast) component owns the timers and cancels
//! them whenever the phase or cycle changes.

use std::rc::Rc;
use std::time::Duration;

use yew::Reducible;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);
pub const ENTER_DURATION: Duration = Duration::from_millis(200);
pub const EXIT_DURATION: Duration = Duration::from_millis(180);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
            Self::Warning => "#f59e0b",
            Self::Info => "#3b82f6",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPosition {
    Top,
    Center,
    #[default]
    Bottom,
}

impl ToastPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }

    /// Vertical offset (px) the toast slides in from.
    pub fn entrance_offset(self) -> i32 {
        match self {
            Self::Top => -20,
            Self::Center => 0,
            Self::Bottom => 20,
        }
    }

    /// Vertical offset (px) the toast slides out to.
    pub fn exit_offset(self) -> i32 {
        match self {
            Self::Top => -10,
            Self::Center => 0,
            Self::Bottom => 10,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastOptions {
    pub kind: ToastKind,
    pub position: ToastPosition,
    pub duration: Duration,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            kind: ToastKind::default(),
            position: ToastPosition::default(),
            duration: DEFAULT_DURATION,
        }
    }
}

impl ToastOptions {
    pub fn error(position: ToastPosition) -> Self {
        Self {
            kind: ToastKind::Error,
            position,
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastPhase {
    #[default]
    Hidden,
    Appearing,
    Visible,
    Dismissing,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ToastAction {
    /// Replace whatever is showing and start a new cycle.
    Show { message: String, options: ToastOptions },
    /// Entrance animation for `cycle` finished.
    Entered { cycle: u64 },
    /// Start the exit animation for `cycle` (dwell timer expired).
    Dismiss { cycle: u64 },
    /// Exit animation for `cycle` finished.
    Exited { cycle: u64 },
    /// Dismiss whatever is currently showing (tap or explicit hide).
    Hide,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastState {
    pub phase: ToastPhase,
    /// Incremented by every `Show`.
    pub cycle: u64,
    pub message: String,
    pub options: ToastOptions,
}

impl ToastState {
    /// Apply `action` in place. Returns `false` when the action was stale or
    /// did not apply to the current phase.
    pub fn apply(&mut self, action: ToastAction) -> bool {
        match action {
            ToastAction::Show { message, options } => {
                self.cycle += 1;
                self.message = message;
                self.options = options;
                self.phase = ToastPhase::Appearing;
                true
            }
            ToastAction::Entered { cycle } => {
                self.advance(cycle, ToastPhase::Appearing, ToastPhase::Visible)
            }
            ToastAction::Dismiss { cycle } => {
                self.is_current(cycle) && self.begin_dismiss()
            }
            ToastAction::Exited { cycle } => {
                self.advance(cycle, ToastPhase::Dismissing, ToastPhase::Hidden)
            }
            ToastAction::Hide => self.begin_dismiss(),
        }
    }

    pub fn is_shown(&self) -> bool {
        self.phase != ToastPhase::Hidden
    }

    fn is_current(&self, cycle: u64) -> bool {
        cycle == self.cycle
    }

    fn advance(&mut self, cycle: u64, from: ToastPhase, to: ToastPhase) -> bool {
        if !self.is_current(cycle) || self.phase != from {
            return false;
        }
        self.phase = to;
        true
    }

    fn begin_dismiss(&mut self) -> bool {
        match self.phase {
            ToastPhase::Appearing | ToastPhase::Visible => {
                self.phase = ToastPhase::Dismissing;
                true
            }
            ToastPhase::Hidden | ToastPhase::Dismissing => false,
        }
    }
}

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(state: &mut ToastState, message: &str, duration_ms: u64) -> u64 {
        state.apply(ToastAction::Show {
            message: message.into(),
            options: ToastOptions::default().with_duration(Duration::from_millis(duration_ms)),
        });
        state.cycle
    }

    #[test]
    fn full_lifecycle() {
        let mut state = ToastState::default();
        let cycle = show(&mut state, "Saved", 3000);
        assert_eq!(state.phase, ToastPhase::Appearing);

        assert!(state.apply(ToastAction::Entered { cycle }));
        assert_eq!(state.phase, ToastPhase::Visible);
        assert!(state.apply(ToastAction::Dismiss { cycle }));
        assert_eq!(state.phase, ToastPhase::Dismissing);
        assert!(state.apply(ToastAction::Exited { cycle }));
        assert_eq!(state.phase, ToastPhase::Hidden);
        assert!(!state.is_shown());
    }

    #[test]
    fn newer_show_preempts_pending_timers() {
        let mut state = ToastState::default();
        let first = show(&mut state, "X", 50);
        state.apply(ToastAction::Entered { cycle: first });
        let second = show(&mut state, "Y", 50);

        // Everything scheduled for "X" is now stale.
        assert!(!state.apply(ToastAction::Dismiss { cycle: first }));
        assert!(!state.apply(ToastAction::Exited { cycle: first }));
        assert_eq!(state.phase, ToastPhase::Appearing);
        assert_eq!(state.message, "Y");

        let mut dismissals = 0;
        for action in [
            ToastAction::Entered { cycle: second },
            ToastAction::Dismiss { cycle: second },
            ToastAction::Dismiss { cycle: second },
        ] {
            let is_dismiss = matches!(action, ToastAction::Dismiss { .. });
            if state.apply(action) && is_dismiss {
                dismissals += 1;
            }
        }
        assert_eq!(dismissals, 1);
    }

    #[test]
    fn show_while_dismissing_restarts() {
        let mut state = ToastState::default();
        let first = show(&mut state, "X", 50);
        state.apply(ToastAction::Hide);
        assert_eq!(state.phase, ToastPhase::Dismissing);

        show(&mut state, "Y", 50);
        assert!(!state.apply(ToastAction::Exited { cycle: first }));
        assert_eq!(state.phase, ToastPhase::Appearing);
    }

    #[test]
    fn show_replaces_every_field() {
        let mut state = ToastState::default();
        show(&mut state, "X", 50);
        state.apply(ToastAction::Show {
            message: "Bad amount".into(),
            options: ToastOptions::error(ToastPosition::Top),
        });
        assert_eq!(state.message, "Bad amount");
        assert_eq!(state.options.kind, ToastKind::Error);
        assert_eq!(state.options.position, ToastPosition::Top);
        assert_eq!(state.options.duration, DEFAULT_DURATION);
    }

    #[test]
    fn hide_only_applies_while_shown() {
        let mut state = ToastState::default();
        assert!(!state.apply(ToastAction::Hide));
        show(&mut state, "X", 50);
        assert!(state.apply(ToastAction::Hide));
        assert!(!state.apply(ToastAction::Hide));
    }

    #[test]
    fn reducer_keeps_identity_for_stale_actions() {
        let state = Rc::new(ToastState::default());
        let same = state.clone().reduce(ToastAction::Entered { cycle: 7 });
        assert!(Rc::ptr_eq(&state, &same));

        let shown = state.reduce(ToastAction::Show {
            message: "hi".into(),
            options: ToastOptions::default(),
        });
        assert_eq!(shown.phase, ToastPhase::Appearing);
        assert_eq!(shown.cycle, 1);
    }

    #[test]
    fn offsets_follow_position() {
        assert_eq!(ToastPosition::Top.entrance_offset(), -20);
        assert_eq!(ToastPosition::Bottom.entrance_offset(), 20);
        assert_eq!(ToastPosition::Center.entrance_offset(), 0);
        assert_eq!(ToastPosition::Bottom.exit_offset(), 10);
        assert_eq!(ToastKind::Error.background(), "#ef4444");
    }
}
