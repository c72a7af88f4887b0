//! Traits for backends.

use crate::animation::OpacityAnimation;
use crate::layer::NativeView;
use crate::layout::Pin;
use crate::overlay::OverlayId;
use std::time::Instant;

/// Events a backend reports back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    /// An animation started with [`Backend::animate_opacity`] has finished.
    AnimationFinished {
        /// The overlay the animation was started for.
        overlay: OverlayId,
        /// When the animation finished.
        at: Instant,
    },
}

/// A backend implementation: the host platform’s rendering and layout engine.
///
/// Every method is called on the UI thread that owns the [`Host`](crate::Host).
pub trait Backend {
    /// A reference to a view in the backend.
    type ViewRef;

    /// The host application’s screen type that toasts are attached to.
    type Surface;

    /// Error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Creates a new, unattached view.
    fn new_view(&mut self, view: NativeView) -> Result<Self::ViewRef, Self::Error>;

    /// Adds `subview` as the topmost subview of `superview`.
    fn add_subview(
        &mut self,
        superview: &mut Self::ViewRef,
        subview: &mut Self::ViewRef,
    ) -> Result<(), Self::Error>;

    /// Adds a view as the topmost subview of a surface’s content.
    fn attach(&mut self, surface: &Self::Surface, view: &mut Self::ViewRef) -> Result<(), Self::Error>;

    /// Constrains a view’s edges relative to its superview (or surface).
    fn pin(&mut self, view: &mut Self::ViewRef, pins: &[Pin]) -> Result<(), Self::Error>;

    /// Starts animating a view’s opacity.
    ///
    /// Once the animation completes, the backend must report
    /// [`RawEvent::AnimationFinished`] with the given overlay ID from [`Backend::poll`].
    fn animate_opacity(
        &mut self,
        view: &mut Self::ViewRef,
        animation: OpacityAnimation,
        overlay: OverlayId,
    ) -> Result<(), Self::Error>;

    /// Detaches a view from its parent and discards it along with its subviews.
    fn remove_view(&mut self, view: Self::ViewRef) -> Result<(), Self::Error>;

    /// Returns the next event from the queue.
    ///
    /// This method may be called frequently in quick succession.
    fn poll(&mut self) -> Result<Option<RawEvent>, Self::Error>;
}
