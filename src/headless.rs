//! A backend and surface graph that render nothing.
//!
//! `HeadlessBackend` records every view, pin, animation and removal, and finishes animations
//! against a [`ManualClock`]. `HeadlessGraph` is an in-memory presentation hierarchy. Together
//! they let tests (ours and the host application’s) drive a [`Host`](crate::Host) without a
//! windowing system.

use crate::animation::OpacityAnimation;
use crate::backend::{Backend, RawEvent};
use crate::clock::{Clock, ManualClock};
use crate::layer::NativeView;
use crate::layout::{resolve_frame, Edge, Pin};
use crate::overlay::OverlayId;
use crate::present::SurfacePresenter;
use crate::rect::Rect;
use crate::resolver::{Container, SurfaceGraph};
use cgmath::{Point2, Vector2, Zero};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

/// Identifies a surface in a [`HeadlessGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SurfaceId(usize);

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    Plain,
    Navigation(Vec<SurfaceId>),
    Tabs {
        children: Vec<SurfaceId>,
        selected: Option<usize>,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct SurfaceNode {
    name: String,
    kind: Kind,
    presented: Option<SurfaceId>,
    /// Whether the presentation of this surface was animated.
    animated: Option<bool>,
}

/// An in-memory presentation hierarchy.
///
/// Methods taking a `SurfaceId` panic if it doesn’t belong to this graph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeadlessGraph {
    surfaces: Vec<SurfaceNode>,
    root: Option<SurfaceId>,
}

impl HeadlessGraph {
    pub fn new() -> HeadlessGraph {
        HeadlessGraph::default()
    }

    fn add(&mut self, name: &str, kind: Kind) -> SurfaceId {
        self.surfaces.push(SurfaceNode {
            name: name.to_string(),
            kind,
            presented: None,
            animated: None,
        });
        SurfaceId(self.surfaces.len() - 1)
    }

    /// Adds a plain surface.
    pub fn add_surface(&mut self, name: &str) -> SurfaceId {
        self.add(name, Kind::Plain)
    }

    /// Adds a navigation container; the last child is the topmost.
    pub fn add_navigation(&mut self, name: &str, children: Vec<SurfaceId>) -> SurfaceId {
        self.add(name, Kind::Navigation(children))
    }

    /// Adds a tab container with the child at `selected` selected.
    pub fn add_tabs(&mut self, name: &str, children: Vec<SurfaceId>, selected: Option<usize>) -> SurfaceId {
        self.add(name, Kind::Tabs { children, selected })
    }

    pub fn set_root(&mut self, root: Option<SurfaceId>) {
        self.root = root;
    }

    /// Presents `surface` on `on` without animation, replacing anything presented there.
    pub fn present_on(&mut self, on: SurfaceId, surface: SurfaceId) {
        self.present_with(on, surface, false);
    }

    fn present_with(&mut self, on: SurfaceId, surface: SurfaceId, animated: bool) {
        self.surfaces[on.0].presented = Some(surface);
        self.surfaces[surface.0].animated = Some(animated);
    }

    /// Dismisses whatever is presented on `on`.
    pub fn dismiss(&mut self, on: SurfaceId) {
        if let Some(presented) = self.surfaces[on.0].presented.take() {
            self.surfaces[presented.0].animated = None;
        }
    }

    /// Pushes a child onto a navigation container. Does nothing for other surfaces.
    pub fn push(&mut self, navigation: SurfaceId, child: SurfaceId) {
        if let Kind::Navigation(children) = &mut self.surfaces[navigation.0].kind {
            children.push(child);
        }
    }

    /// Selects a tab. Does nothing for other surfaces.
    pub fn select(&mut self, tabs: SurfaceId, index: Option<usize>) {
        if let Kind::Tabs { selected, .. } = &mut self.surfaces[tabs.0].kind {
            *selected = index;
        }
    }

    pub fn name(&self, surface: SurfaceId) -> &str {
        &self.surfaces[surface.0].name
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Whether the surface’s presentation was animated; `None` if it isn’t presented.
    pub fn was_animated(&self, surface: SurfaceId) -> Option<bool> {
        self.surfaces[surface.0].animated
    }
}

impl SurfaceGraph for HeadlessGraph {
    type Surface = SurfaceId;

    fn root(&self) -> Option<SurfaceId> {
        self.root
    }

    fn presented(&self, surface: &SurfaceId) -> Option<SurfaceId> {
        self.surfaces.get(surface.0).and_then(|node| node.presented)
    }

    fn container(&self, surface: &SurfaceId) -> Container<SurfaceId> {
        match self.surfaces.get(surface.0).map(|node| &node.kind) {
            Some(Kind::Navigation(children)) => Container::Navigation(children.last().copied()),
            Some(Kind::Tabs { children, selected }) => {
                Container::Tabs(selected.and_then(|i| children.get(i).copied()))
            }
            Some(Kind::Plain) | None => Container::Plain,
        }
    }
}

impl SurfacePresenter for HeadlessGraph {
    fn present(&mut self, on: &SurfaceId, surface: SurfaceId, animated: bool) {
        self.present_with(*on, surface, animated);
    }

    fn wrap_in_navigation(&mut self, surface: SurfaceId) -> SurfaceId {
        let name = format!("{} navigation", self.name(surface));
        self.add_navigation(&name, vec![surface])
    }
}

/// A view in a [`HeadlessBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadlessView(u64);

/// Where a headless view is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parent {
    View(HeadlessView),
    Surface(SurfaceId),
}

/// Everything the backend was told about a view.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedView {
    pub view: NativeView,
    pub parent: Option<Parent>,
    pub subviews: Vec<HeadlessView>,
    pub pins: Vec<Pin>,
    /// Opacity, not counting a running animation.
    pub opacity: f64,
    /// Every animation started on this view, in order.
    pub animations: Vec<OpacityAnimation>,
}

#[derive(Debug)]
struct RunningAnimation {
    view: HeadlessView,
    animation: OpacityAnimation,
    overlay: OverlayId,
    started: Instant,
}

impl RunningAnimation {
    fn ends_at(&self) -> Instant {
        self.started + self.animation.duration
    }
}

/// Errors from the headless backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HeadlessError {
    #[error("no such view: {0:?}")]
    NoSuchView(HeadlessView),
    #[error("surface {0:?} has been destroyed")]
    SurfaceDestroyed(SurfaceId),
}

#[derive(Debug)]
struct Recording {
    next_view: u64,
    views: HashMap<HeadlessView, RecordedView>,
    removals: Vec<(HeadlessView, Instant)>,
    running: Vec<RunningAnimation>,
    destroyed: HashSet<SurfaceId>,
    surface_bounds: Rect,
}

impl Recording {
    fn get(&self, view: HeadlessView) -> Result<&RecordedView, HeadlessError> {
        self.views.get(&view).ok_or(HeadlessError::NoSuchView(view))
    }

    fn get_mut(&mut self, view: HeadlessView) -> Result<&mut RecordedView, HeadlessError> {
        self.views.get_mut(&view).ok_or(HeadlessError::NoSuchView(view))
    }

    /// Fails if the view doesn’t exist or sits on a destroyed surface.
    fn check_alive(&self, view: HeadlessView) -> Result<(), HeadlessError> {
        let mut current = view;
        loop {
            match self.get(current)?.parent {
                Some(Parent::View(parent)) => current = parent,
                Some(Parent::Surface(surface)) if self.destroyed.contains(&surface) => {
                    return Err(HeadlessError::SurfaceDestroyed(surface))
                }
                Some(Parent::Surface(_)) | None => return Ok(()),
            }
        }
    }

    fn remove_recursive(&mut self, view: HeadlessView, now: Instant) {
        if let Some(recorded) = self.views.remove(&view) {
            self.running.retain(|running| running.view != view);
            self.removals.push((view, now));
            for subview in recorded.subviews {
                self.remove_recursive(subview, now);
            }
        }
    }

    fn intrinsic_size(&self, view: HeadlessView) -> Vector2<f64> {
        let recorded = match self.views.get(&view) {
            Some(recorded) => recorded,
            None => return Vector2::zero(),
        };
        match &recorded.view {
            // half an em per character, one line
            NativeView::Text(text) => Vector2::new(
                text.text.chars().count() as f64 * text.font_size * 0.5,
                text.font_size * 1.25,
            ),
            NativeView::Layer(_) => recorded.subviews.iter().fold(Vector2::zero(), |size, subview| {
                let inner = self.intrinsic_size(*subview);
                let pins = self.views.get(subview).map_or(&[][..], |v| &v.pins[..]);
                let inset = |edge: Edge| {
                    pins.iter()
                        .filter(|pin| pin.edge == edge)
                        .map(|pin| pin.inset)
                        .sum::<f64>()
                };
                Vector2::new(
                    size.x.max(inner.x + inset(Edge::Leading) + inset(Edge::Trailing)),
                    size.y.max(inner.y + inset(Edge::Top) + inset(Edge::Bottom)),
                )
            }),
        }
    }

    fn frame(&self, view: HeadlessView) -> Option<Rect> {
        let recorded = self.views.get(&view)?;
        let superview = match recorded.parent? {
            Parent::Surface(_) => self.surface_bounds,
            Parent::View(parent) => self.frame(parent)?,
        };
        Some(resolve_frame(&recorded.pins, superview, self.intrinsic_size(view)))
    }
}

/// A backend that renders nothing and remembers everything.
#[derive(Debug)]
pub struct HeadlessBackend {
    state: Arc<Mutex<Recording>>,
    clock: ManualClock,
}

impl HeadlessBackend {
    /// Creates a backend whose surfaces are 375×812 and whose animations run on `clock`.
    pub fn new(clock: ManualClock) -> HeadlessBackend {
        HeadlessBackend {
            state: Arc::new(Mutex::new(Recording {
                next_view: 0,
                views: HashMap::new(),
                removals: Vec::new(),
                running: Vec::new(),
                destroyed: HashSet::new(),
                surface_bounds: Rect::new(Point2::new(0., 0.), Vector2::new(375., 812.)),
            })),
            clock,
        }
    }

    /// Returns a handle for inspecting the backend after it has been moved into a host.
    pub fn handle(&self) -> HeadlessHandle {
        HeadlessHandle {
            state: Arc::clone(&self.state),
            clock: self.clock.clone(),
        }
    }
}

impl Backend for HeadlessBackend {
    type ViewRef = HeadlessView;
    type Surface = SurfaceId;
    type Error = HeadlessError;

    fn new_view(&mut self, view: NativeView) -> Result<HeadlessView, HeadlessError> {
        let mut state = self.state.lock();
        let id = HeadlessView(state.next_view);
        state.next_view += 1;
        let opacity = view.as_layer().map_or(1., |layer| layer.opacity);
        state.views.insert(
            id,
            RecordedView {
                view,
                parent: None,
                subviews: Vec::new(),
                pins: Vec::new(),
                opacity,
                animations: Vec::new(),
            },
        );
        Ok(id)
    }

    fn add_subview(
        &mut self,
        superview: &mut HeadlessView,
        subview: &mut HeadlessView,
    ) -> Result<(), HeadlessError> {
        let mut state = self.state.lock();
        state.check_alive(*superview)?;
        state.get_mut(*subview)?.parent = Some(Parent::View(*superview));
        state.get_mut(*superview)?.subviews.push(*subview);
        Ok(())
    }

    fn attach(&mut self, surface: &SurfaceId, view: &mut HeadlessView) -> Result<(), HeadlessError> {
        let mut state = self.state.lock();
        if state.destroyed.contains(surface) {
            return Err(HeadlessError::SurfaceDestroyed(*surface));
        }
        state.get_mut(*view)?.parent = Some(Parent::Surface(*surface));
        Ok(())
    }

    fn pin(&mut self, view: &mut HeadlessView, pins: &[Pin]) -> Result<(), HeadlessError> {
        let mut state = self.state.lock();
        state.check_alive(*view)?;
        state.get_mut(*view)?.pins.extend_from_slice(pins);
        Ok(())
    }

    fn animate_opacity(
        &mut self,
        view: &mut HeadlessView,
        animation: OpacityAnimation,
        overlay: OverlayId,
    ) -> Result<(), HeadlessError> {
        let started = self.clock.now();
        let mut state = self.state.lock();
        state.check_alive(*view)?;
        let view = *view;
        state.running.retain(|running| running.view != view);
        state.get_mut(view)?.animations.push(animation);
        state.running.push(RunningAnimation {
            view,
            animation,
            overlay,
            started,
        });
        Ok(())
    }

    fn remove_view(&mut self, view: HeadlessView) -> Result<(), HeadlessError> {
        let now = self.clock.now();
        let mut state = self.state.lock();
        state.check_alive(view)?;
        let parent = state.get(view)?.parent;
        if let Some(Parent::View(parent)) = parent {
            if let Some(parent) = state.views.get_mut(&parent) {
                parent.subviews.retain(|subview| *subview != view);
            }
        }
        state.remove_recursive(view, now);
        Ok(())
    }

    fn poll(&mut self) -> Result<Option<RawEvent>, HeadlessError> {
        let now = self.clock.now();
        let mut state = self.state.lock();

        let next = state
            .running
            .iter()
            .enumerate()
            .filter(|(_, running)| running.ends_at() <= now)
            .min_by_key(|(_, running)| running.ends_at())
            .map(|(i, _)| i);

        match next {
            Some(i) => {
                let finished = state.running.remove(i);
                if let Some(view) = state.views.get_mut(&finished.view) {
                    view.opacity = finished.animation.to;
                }
                Ok(Some(RawEvent::AnimationFinished {
                    overlay: finished.overlay,
                    at: finished.ends_at(),
                }))
            }
            None => Ok(None),
        }
    }
}

/// Inspects a [`HeadlessBackend`] from outside the host.
#[derive(Debug, Clone)]
pub struct HeadlessHandle {
    state: Arc<Mutex<Recording>>,
    clock: ManualClock,
}

impl HeadlessHandle {
    /// Views directly attached to a surface, oldest first.
    pub fn views_on(&self, surface: SurfaceId) -> Vec<HeadlessView> {
        let state = self.state.lock();
        let mut views: Vec<_> = state
            .views
            .iter()
            .filter(|(_, recorded)| recorded.parent == Some(Parent::Surface(surface)))
            .map(|(id, _)| *id)
            .collect();
        views.sort();
        views
    }

    pub fn view(&self, view: HeadlessView) -> Option<RecordedView> {
        self.state.lock().views.get(&view).cloned()
    }

    /// Number of views that exist and haven’t been removed.
    pub fn live_views(&self) -> usize {
        self.state.lock().views.len()
    }

    /// Current opacity, sampling a running animation at the clock’s time.
    pub fn opacity(&self, view: HeadlessView) -> Option<f64> {
        let now = self.clock.now();
        let state = self.state.lock();
        let recorded = state.views.get(&view)?;
        match state.running.iter().find(|running| running.view == view) {
            Some(running) => Some(running.animation.value_at(now.saturating_duration_since(running.started))),
            None => Some(recorded.opacity),
        }
    }

    /// The view’s frame, resolved from its pins.
    pub fn frame(&self, view: HeadlessView) -> Option<Rect> {
        self.state.lock().frame(view)
    }

    /// How many times the view was removed.
    pub fn removal_count(&self, view: HeadlessView) -> usize {
        let state = self.state.lock();
        state.removals.iter().filter(|(removed, _)| *removed == view).count()
    }

    /// When the view was removed.
    pub fn removed_at(&self, view: HeadlessView) -> Option<Instant> {
        let state = self.state.lock();
        state
            .removals
            .iter()
            .find(|(removed, _)| *removed == view)
            .map(|(_, at)| *at)
    }

    pub fn running_animations(&self) -> usize {
        self.state.lock().running.len()
    }

    /// Makes every later operation on the surface’s views fail.
    pub fn destroy_surface(&self, surface: SurfaceId) {
        self.state.lock().destroyed.insert(surface);
    }
}
