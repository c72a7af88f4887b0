use crate::backend::{Backend, RawEvent};
use crate::clock::{Clock, SystemClock};
use crate::config::{seconds, ToastStyle};
use crate::error::{Error, Result};
use crate::layer::{toast_container, toast_label};
use crate::layout::{container_pins, label_pins, Position};
use crate::overlay::{Overlay, OverlayId};
use crate::animation::OverlayState;
use crate::request::ToastRequest;
use crate::resolver::{SurfaceGraph, SurfaceResolver};
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/// Presents toasts on a backend. Lives on, and never leaves, the UI thread.
///
/// All surface reads, view creation, layout and animation happen inside `show` and `poll`. Other
/// threads submit requests through a [`Toaster`]; they are picked up by the next `poll`.
pub struct Host<B: Backend, G> {
    backend: B,
    graph: G,
    style: ToastStyle,
    resolver: SurfaceResolver,
    clock: Arc<dyn Clock>,
    overlays: HashMap<OverlayId, Overlay<B::ViewRef>>,
    request_send: Sender<ToastRequest<B::Surface>>,
    request_recv: Receiver<ToastRequest<B::Surface>>,
}

impl<B, G> Host<B, G>
where
    B: Backend,
    G: SurfaceGraph<Surface = B::Surface>,
{
    /// Creates a new Host with the default style and the system clock.
    pub fn new(backend: B, graph: G) -> Host<B, G> {
        Host::with_style(backend, graph, ToastStyle::default(), Arc::new(SystemClock))
    }

    pub fn with_style(backend: B, graph: G, style: ToastStyle, clock: Arc<dyn Clock>) -> Host<B, G> {
        let (request_send, request_recv) = channel::unbounded();

        Host {
            backend,
            graph,
            resolver: SurfaceResolver::new(style.max_presentation_depth),
            style,
            clock,
            overlays: HashMap::new(),
            request_send,
            request_recv,
        }
    }

    /// Returns a handle for showing toasts from any thread.
    pub fn toaster(&self) -> Toaster<B::Surface> {
        Toaster {
            sender: self.request_send.clone(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// The host application mutates its presentation hierarchy through this.
    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph
    }

    pub fn style(&self) -> &ToastStyle {
        &self.style
    }

    /// Shows a toast. Never fails; problems are logged and the toast is dropped.
    pub fn show(&mut self, request: ToastRequest<B::Surface>) {
        if let Err(err) = self.try_show(request) {
            match err {
                Error::NoActiveSurface | Error::PresentationDepthExceeded(_) => {
                    tracing::warn!("error showing toast: {}", err);
                }
                err => tracing::warn!("toast could not be attached: {}", err),
            }
        }
    }

    /// Shows a toast and returns its ID.
    ///
    /// The target is resolved before any view is created, so an error from resolution leaves
    /// the backend untouched.
    pub fn try_show(&mut self, request: ToastRequest<B::Surface>) -> Result<OverlayId> {
        let colors = request.theme.colors();
        let target = match request.target {
            Some(target) => target,
            None => self.resolver.resolve_from_root(&self.graph)?,
        };

        let backend = &mut self.backend;
        let mut container = backend
            .new_view(toast_container(colors, &self.style))
            .map_err(Error::backend)?;
        let mut label = match backend.new_view(toast_label(&request.message, colors, &self.style)) {
            Ok(label) => label,
            Err(err) => {
                discard(backend, container);
                return Err(Error::backend(err));
            }
        };
        if let Err(err) = backend.add_subview(&mut container, &mut label) {
            discard(backend, label);
            discard(backend, container);
            return Err(Error::backend(err));
        }
        // the label now goes wherever the container goes
        if let Err(err) = place(backend, &target, &mut container, &mut label, &self.style, request.position) {
            discard(backend, container);
            return Err(Error::backend(err));
        }

        let id = OverlayId::new();
        let mut overlay = Overlay::new(id, container, seconds(request.duration), self.style.fade_duration());
        overlay.start(backend)?;
        self.overlays.insert(id, overlay);
        tracing::debug!(overlay = ?id, theme = ?request.theme, position = ?request.position, "showing toast");
        Ok(id)
    }

    /// Picks up requests from other threads, backend events and expired holds.
    ///
    /// Call this from the UI thread’s run loop whenever the backend may have events, and again no
    /// later than [`next_deadline`](Host::next_deadline); holds only expire inside `poll`.
    pub fn poll(&mut self) {
        loop {
            match self.request_recv.try_recv() {
                Ok(request) => self.show(request),
                Err(TryRecvError::Empty) => break,
                // we hold a sender ourselves
                Err(TryRecvError::Disconnected) => break,
            }
        }

        // a finished fade-in may expire a zero hold, whose fade-out may finish immediately
        while self.recv_raw_events() | self.expire_holds() {}
    }

    /// Returns true if any event was received.
    fn recv_raw_events(&mut self) -> bool {
        let mut received = false;
        loop {
            match self.backend.poll() {
                Ok(Some(event)) => {
                    received = true;
                    self.recv_raw_event(event);
                }
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!("failed to poll backend: {}", err);
                    break;
                }
            }
        }
        received
    }

    fn recv_raw_event(&mut self, event: RawEvent) {
        match event {
            RawEvent::AnimationFinished { overlay: id, at } => {
                let result = match self.overlays.get_mut(&id) {
                    Some(overlay) => overlay.animation_finished(&mut self.backend, at),
                    None => {
                        tracing::trace!(overlay = ?id, "animation finished for unknown toast");
                        return;
                    }
                };
                self.settle(id, result);
            }
        }
    }

    /// Returns true if any overlay started fading out.
    fn expire_holds(&mut self) -> bool {
        let now = self.clock.now();
        let holding: Vec<OverlayId> = self
            .overlays
            .iter()
            .filter(|(_, overlay)| matches!(overlay.state(), OverlayState::Holding { .. }))
            .map(|(id, _)| *id)
            .collect();

        let mut expired = false;
        for id in holding {
            if let Some(overlay) = self.overlays.get_mut(&id) {
                let result = overlay.tick(&mut self.backend, now);
                expired |= matches!(result, Ok(true));
                self.settle(id, result.map(|_| ()));
            }
        }
        expired
    }

    /// Forgets overlays that are detached or that the backend failed on.
    fn settle(&mut self, id: OverlayId, result: Result<()>) {
        match result {
            Ok(()) => {
                if self.overlays.get(&id).map_or(false, |o| o.state().is_detached()) {
                    self.overlays.remove(&id);
                }
            }
            Err(err) => {
                tracing::warn!(overlay = ?id, "dropping toast: {}", err);
                self.overlays.remove(&id);
            }
        }
    }

    /// The earliest time at which a hold expires, if any toast is holding.
    ///
    /// Run loops should arm a timer for this and call [`poll`](Host::poll) when it fires, so that
    /// fade-outs start on time.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.overlays
            .values()
            .filter_map(|overlay| match overlay.state() {
                OverlayState::Holding { until } => until,
                _ => None,
            })
            .min()
    }

    /// Number of toasts that have not been detached yet.
    pub fn live_overlays(&self) -> usize {
        self.overlays.len()
    }

    /// Lifecycle state of a toast; `None` once it has been detached (or was never shown).
    pub fn overlay_state(&self, id: OverlayId) -> Option<OverlayState> {
        self.overlays.get(&id).map(|overlay| overlay.state())
    }
}

/// Pins the label inside the container and the container onto the target surface.
fn place<B: Backend>(
    backend: &mut B,
    target: &B::Surface,
    container: &mut B::ViewRef,
    label: &mut B::ViewRef,
    style: &ToastStyle,
    position: Position,
) -> std::result::Result<(), B::Error> {
    backend.pin(label, &label_pins(style))?;
    backend.attach(target, container)?;
    backend.pin(container, &container_pins(style, position))
}

/// Removes a view created for a toast that could not be shown.
fn discard<B: Backend>(backend: &mut B, view: B::ViewRef) {
    if let Err(err) = backend.remove_view(view) {
        tracing::warn!("failed to remove toast view: {}", err);
    }
}

/// Shows toasts from any thread.
///
/// Requests are sent to the [`Host`] and presented on its next `poll`; `show` returns immediately.
pub struct Toaster<S> {
    sender: Sender<ToastRequest<S>>,
}

impl<S> Clone for Toaster<S> {
    fn clone(&self) -> Self {
        Toaster {
            sender: self.sender.clone(),
        }
    }
}

impl<S> Toaster<S> {
    /// Submits a toast to the host. Never blocks and never fails.
    pub fn show(&self, request: ToastRequest<S>) {
        if let Err(err) = self.sender.send(request) {
            tracing::warn!("toast host is gone; dropping {:?}", err.into_inner().message);
        }
    }
}

impl<S> std::fmt::Debug for Toaster<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Toaster")
    }
}
