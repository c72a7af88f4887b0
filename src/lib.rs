//! Toast overlays.
//!
//! # Conceptual overview
//! A toast is a short message shown on top of whatever screen the user is looking at. It fades
//! in, stays for a while, fades out, and removes itself. Toasts never block input, never queue up
//! behind each other, and never report errors to whoever asked for them: if a toast can’t be
//! shown, that is logged and nothing else happens.
//!
//! ## Surfaces
//! The host application’s screens are *surfaces*. A surface may have another surface presented
//! modally on top of it, and container surfaces (navigation stacks and tab containers) have an
//! active child. The host exposes these relations through [`SurfaceGraph`]; toasts only read them.
//! When a toast doesn’t name a target surface, [`SurfaceResolver`] walks the graph from the root to
//! the topmost active surface.
//!
//! ## Backends
//! Backends are platform-specific UI frameworks abstracted to a small common interface
//! ([`Backend`]): create a layer or a text view, attach views, pin edges, animate opacity, and
//! remove views. Animation completion comes back as a [`RawEvent`] from [`Backend::poll`].
//! [`headless`] has a backend that only records what it was told.
//!
//! ## Threads
//! Everything that touches surfaces or views happens on the UI thread, which owns the [`Host`].
//! Other threads get a [`Toaster`], which forwards requests to the host; they are presented on
//! the next [`Host::poll`].
//!
//! ## Lifecycle
//! Each toast is an independent overlay that moves through
//! `Created → FadingIn → Holding → FadingOut → Detached` (see [`OverlayState`]). Overlays share no
//! state, so any number of them may be on screen at once, overlapping if they must.

mod animation;
pub mod backend;
pub mod clock;
pub mod color;
mod config;
mod error;
pub mod headless;
mod host;
mod layer;
pub mod layout;
mod overlay;
mod present;
mod rect;
mod request;
mod resolver;
mod theme;

pub use animation::{Curve, OpacityAnimation, OverlayState, Transition};
pub use backend::{Backend, RawEvent};
pub use config::ToastStyle;
pub use error::{Error, Result};
pub use host::{Host, Toaster};
pub use layer::{Layer, NativeView, Text, TextAlignment};
pub use layout::Position;
pub use overlay::OverlayId;
pub use present::{present_on_top, PresentOptions, SurfacePresenter};
pub use rect::Rect;
pub use request::{ToastRequest, DEFAULT_DURATION};
pub use resolver::{Container, SurfaceGraph, SurfaceResolver};
pub use theme::{ColorPair, Theme};
