//! Opacity animations and the overlay lifecycle.

use std::time::{Duration, Instant};

/// Animation timing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Curve {
    EaseIn,
    EaseOut,
}

impl Curve {
    /// Maps linear progress (0 to 1) to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.max(0.).min(1.);
        match self {
            Curve::EaseIn => t * t,
            Curve::EaseOut => t * (2. - t),
        }
    }
}

/// An animation of a view’s opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityAnimation {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub curve: Curve,
}

impl OpacityAnimation {
    pub fn fade_in(duration: Duration) -> Self {
        OpacityAnimation {
            from: 0.,
            to: 1.,
            duration,
            curve: Curve::EaseIn,
        }
    }

    pub fn fade_out(duration: Duration) -> Self {
        OpacityAnimation {
            from: 1.,
            to: 0.,
            duration,
            curve: Curve::EaseOut,
        }
    }

    /// Opacity after `elapsed` time has passed.
    pub fn value_at(&self, elapsed: Duration) -> f64 {
        let t = if self.duration.is_zero() {
            1.
        } else {
            elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        self.from + (self.to - self.from) * self.curve.apply(t)
    }
}

/// Lifecycle of a single toast overlay.
///
/// Advances strictly in order: `Created → FadingIn → Holding → FadingOut → Detached`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Views exist but no animation has started.
    Created,
    FadingIn,
    /// Fully visible. `until` is `None` when the hold is too long to represent as an `Instant`.
    Holding { until: Option<Instant> },
    FadingOut,
    /// Removed from the surface. Terminal.
    Detached,
}

/// Things that move an overlay to its next state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The fade-in animation was started.
    Start,
    /// The running animation finished at the given time.
    AnimationFinished(Instant),
    /// The hold timer was checked at the given time.
    Tick(Instant),
}

impl OverlayState {
    /// Returns the next state, or `None` if the transition does not apply in this state.
    ///
    /// `hold` is the time the overlay stays fully visible after fading in.
    pub fn next(self, transition: Transition, hold: Duration) -> Option<OverlayState> {
        match (self, transition) {
            (OverlayState::Created, Transition::Start) => Some(OverlayState::FadingIn),
            (OverlayState::FadingIn, Transition::AnimationFinished(at)) => {
                Some(OverlayState::Holding {
                    until: at.checked_add(hold),
                })
            }
            (OverlayState::Holding { until: Some(until) }, Transition::Tick(now)) if now >= until => {
                Some(OverlayState::FadingOut)
            }
            (OverlayState::FadingOut, Transition::AnimationFinished(_)) => Some(OverlayState::Detached),
            _ => None,
        }
    }

    pub fn is_detached(self) -> bool {
        self == OverlayState::Detached
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curves_hit_endpoints() {
        for curve in [Curve::EaseIn, Curve::EaseOut] {
            assert_eq!(curve.apply(0.), 0.);
            assert_eq!(curve.apply(1.), 1.);
            assert_eq!(curve.apply(2.), 1.);
        }
        assert!(Curve::EaseIn.apply(0.5) < 0.5);
        assert!(Curve::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn fades() {
        let d = Duration::from_millis(500);
        let fade_in = OpacityAnimation::fade_in(d);
        assert_eq!(fade_in.value_at(Duration::ZERO), 0.);
        assert_eq!(fade_in.value_at(d), 1.);
        let fade_out = OpacityAnimation::fade_out(d);
        assert_eq!(fade_out.value_at(d), 0.);
        assert_eq!(fade_out.curve, Curve::EaseOut);
        assert_eq!(OpacityAnimation::fade_in(Duration::ZERO).value_at(Duration::ZERO), 1.);
    }

    #[test]
    fn lifecycle_in_order() {
        let t0 = Instant::now();
        let hold = Duration::from_secs(3);

        let state = OverlayState::Created;
        let state = state.next(Transition::Start, hold).unwrap();
        assert_eq!(state, OverlayState::FadingIn);

        let faded_in = t0 + Duration::from_millis(500);
        let state = state.next(Transition::AnimationFinished(faded_in), hold).unwrap();
        assert_eq!(state, OverlayState::Holding { until: Some(faded_in + hold) });

        assert_eq!(state.next(Transition::Tick(faded_in + Duration::from_secs(1)), hold), None);
        let state = state.next(Transition::Tick(faded_in + hold), hold).unwrap();
        assert_eq!(state, OverlayState::FadingOut);

        let state = state
            .next(Transition::AnimationFinished(faded_in + hold + Duration::from_millis(500)), hold)
            .unwrap();
        assert!(state.is_detached());
    }

    #[test]
    fn no_skips_or_reversals() {
        let now = Instant::now();
        let hold = Duration::ZERO;
        assert_eq!(OverlayState::Created.next(Transition::AnimationFinished(now), hold), None);
        assert_eq!(OverlayState::FadingIn.next(Transition::Tick(now), hold), None);
        assert_eq!(OverlayState::FadingIn.next(Transition::Start, hold), None);
        assert_eq!(OverlayState::Holding { until: Some(now) }.next(Transition::AnimationFinished(now), hold), None);
        assert_eq!(OverlayState::FadingOut.next(Transition::Tick(now), hold), None);
        for transition in [Transition::Start, Transition::Tick(now), Transition::AnimationFinished(now)] {
            assert_eq!(OverlayState::Detached.next(transition, hold), None);
        }
    }

    #[test]
    fn zero_hold_expires_immediately() {
        let now = Instant::now();
        let state = OverlayState::FadingIn
            .next(Transition::AnimationFinished(now), Duration::ZERO)
            .unwrap();
        assert_eq!(state.next(Transition::Tick(now), Duration::ZERO), Some(OverlayState::FadingOut));
    }

    #[test]
    fn unrepresentable_hold_never_expires() {
        let now = Instant::now();
        let state = OverlayState::FadingIn
            .next(Transition::AnimationFinished(now), Duration::MAX)
            .unwrap();
        assert_eq!(state, OverlayState::Holding { until: None });
        assert_eq!(state.next(Transition::Tick(now + Duration::from_secs(1_000_000)), Duration::MAX), None);
    }
}
