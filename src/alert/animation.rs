//! Animation vocabulary for alert transitions.
//!
//! The panel slides in from the bottom edge over a number of ticks. An
//! [`AnimationHint`] travels with each button action so the parent can decide
//! how the resulting state change is presented.

use serde::{Deserialize, Serialize};

/// A named transition curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Animation {
    #[default]
    Default,
    Linear,
    EaseInOut,
    Spring,
}

impl Animation {
    /// Number of ticks the transition lasts.
    pub fn duration_ticks(self) -> u16 {
        match self {
            Animation::Default => 5,
            Animation::Linear => 6,
            Animation::EaseInOut => 8,
            Animation::Spring => 10,
        }
    }

    /// Map linear time `t` in `[0, 1]` onto the curve.
    ///
    /// `Spring` overshoots past 1.0 before settling; callers clamp when
    /// converting to whole rows.
    pub fn curve(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Animation::Linear => t,
            Animation::Default => 1.0 - (1.0 - t) * (1.0 - t),
            Animation::EaseInOut => t * t * (3.0 - 2.0 * t),
            Animation::Spring => 1.0 - (1.0 - t).powi(2) * (t * 9.0).cos(),
        }
    }

    /// Like [`curve`](Self::curve) but monotonic, with no overshoot.
    pub fn settling_curve(self, t: f32) -> f32 {
        match self {
            Animation::Spring => Animation::Default.curve(t),
            other => other.curve(t),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Animation::Default => "default",
            Animation::Linear => "linear",
            Animation::EaseInOut => "ease-in-out",
            Animation::Spring => "spring",
        }
    }
}

/// How a button action wants its state change animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationHint {
    /// Use whatever animation the surrounding context applies.
    #[default]
    Inherited,
    /// Use this animation; `None` means no animation at all.
    Explicit(Option<Animation>),
}

impl AnimationHint {
    /// Resolve against the animation the context would apply.
    pub fn resolve(self, inherited: Option<Animation>) -> Option<Animation> {
        match self {
            AnimationHint::Inherited => inherited,
            AnimationHint::Explicit(animation) => animation,
        }
    }

    pub fn describe(self) -> String {
        match self {
            AnimationHint::Inherited => "inherited".to_string(),
            AnimationHint::Explicit(None) => "none".to_string(),
            AnimationHint::Explicit(Some(animation)) => animation.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Enter,
    Exit,
}

/// An in-flight slide of the alert panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    kind: TransitionKind,
    animation: Animation,
    elapsed: u16,
}

impl Transition {
    /// Start a transition. Returns `None` for an instant change.
    pub fn start(kind: TransitionKind, animation: Option<Animation>) -> Option<Self> {
        animation.map(|animation| Self {
            kind,
            animation,
            elapsed: 0,
        })
    }

    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    /// Advance one tick. Returns `true` once the transition has finished.
    pub fn tick(&mut self) -> bool {
        self.elapsed = self
            .elapsed
            .saturating_add(1)
            .min(self.animation.duration_ticks());
        self.is_finished()
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.animation.duration_ticks()
    }

    /// Fraction of the panel that is on screen.
    ///
    /// Exits never overshoot: a panel that has left stays gone.
    pub fn visible_fraction(&self) -> f32 {
        let duration = self.animation.duration_ticks().max(1) as f32;
        let t = self.elapsed as f32 / duration;
        match self.kind {
            TransitionKind::Enter => self.animation.curve(t),
            TransitionKind::Exit => 1.0 - self.animation.settling_curve(t),
        }
    }
}
