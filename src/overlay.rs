use crate::animation::{OpacityAnimation, OverlayState, Transition};
use crate::backend::Backend;
use crate::error::{Error, Result};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// A unique identifier for a toast overlay.
///
/// (this is just a UUID)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(Uuid);

impl OverlayId {
    pub(crate) fn new() -> OverlayId {
        OverlayId(Uuid::new_v4())
    }
}

/// A live toast: its container view and where it is in its lifecycle.
///
/// The container is removed from its surface exactly once, on entering `Detached`.
#[derive(Debug)]
pub(crate) struct Overlay<R> {
    id: OverlayId,
    container: Option<R>,
    state: OverlayState,
    hold: Duration,
    fade: Duration,
}

impl<R> Overlay<R> {
    pub(crate) fn new(id: OverlayId, container: R, hold: Duration, fade: Duration) -> Overlay<R> {
        Overlay {
            id,
            container: Some(container),
            state: OverlayState::Created,
            hold,
            fade,
        }
    }

    pub(crate) fn state(&self) -> OverlayState {
        self.state
    }

    /// Starts fading in.
    pub(crate) fn start<B>(&mut self, backend: &mut B) -> Result<()>
    where
        B: Backend<ViewRef = R>,
    {
        self.advance(backend, Transition::Start)
    }

    /// Handles the end of the running animation.
    pub(crate) fn animation_finished<B>(&mut self, backend: &mut B, at: Instant) -> Result<()>
    where
        B: Backend<ViewRef = R>,
    {
        self.advance(backend, Transition::AnimationFinished(at))
    }

    /// Starts fading out if the hold has elapsed.
    pub(crate) fn tick<B>(&mut self, backend: &mut B, now: Instant) -> Result<bool>
    where
        B: Backend<ViewRef = R>,
    {
        let before = self.state;
        self.advance(backend, Transition::Tick(now))?;
        Ok(self.state != before)
    }

    fn advance<B>(&mut self, backend: &mut B, transition: Transition) -> Result<()>
    where
        B: Backend<ViewRef = R>,
    {
        let next = match self.state.next(transition, self.hold) {
            Some(next) => next,
            None => {
                tracing::trace!(overlay = ?self.id, state = ?self.state, ?transition, "ignoring transition");
                return Ok(());
            }
        };
        tracing::debug!(overlay = ?self.id, from = ?self.state, to = ?next, "toast transition");
        self.state = next;

        match next {
            OverlayState::FadingIn => self.animate(backend, OpacityAnimation::fade_in(self.fade)),
            OverlayState::FadingOut => self.animate(backend, OpacityAnimation::fade_out(self.fade)),
            OverlayState::Detached => match self.container.take() {
                Some(container) => backend.remove_view(container).map_err(Error::backend),
                None => Ok(()),
            },
            OverlayState::Created | OverlayState::Holding { .. } => Ok(()),
        }
    }

    fn animate<B>(&mut self, backend: &mut B, animation: OpacityAnimation) -> Result<()>
    where
        B: Backend<ViewRef = R>,
    {
        match self.container.as_mut() {
            Some(container) => backend
                .animate_opacity(container, animation, self.id)
                .map_err(Error::backend),
            None => Ok(()),
        }
    }
}
