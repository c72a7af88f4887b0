//! Edge pinning.
//!
//! Toast layout is expressed as a handful of pins, each saying “this edge of the view sits `inset`
//! units inside the same edge of its superview.” Backends translate pins into whatever constraint
//! system they have; [`resolve_frame`] is a small solver for backends that have none.

use crate::config::ToastStyle;
use crate::rect::Rect;
use cgmath::{Point2, Vector2};

/// The edge of the target surface a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Position {
    #[default]
    Top,
    Bottom,
}

/// A view edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Leading,
    Trailing,
    Top,
    Bottom,
}

/// Pins an edge of a view to the same edge of its superview, `inset` units inwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pin {
    pub edge: Edge,
    pub inset: f64,
}

impl Pin {
    pub fn new(edge: Edge, inset: f64) -> Pin {
        Pin { edge, inset }
    }
}

/// Pins for the toast label inside its container.
pub fn label_pins(style: &ToastStyle) -> [Pin; 4] {
    let inset = style.label_inset;
    [
        Pin::new(Edge::Leading, inset),
        Pin::new(Edge::Trailing, inset),
        Pin::new(Edge::Top, inset),
        Pin::new(Edge::Bottom, inset),
    ]
}

/// Pins for the toast container inside the target surface.
pub fn container_pins(style: &ToastStyle, position: Position) -> [Pin; 3] {
    let vertical = match position {
        Position::Top => Edge::Top,
        Position::Bottom => Edge::Bottom,
    };
    [
        Pin::new(Edge::Leading, style.horizontal_inset),
        Pin::new(Edge::Trailing, style.horizontal_inset),
        Pin::new(vertical, style.vertical_offset),
    ]
}

/// Computes a view frame from its pins.
///
/// An axis pinned on both sides stretches to fit (never below zero); an axis pinned on one side
/// uses the intrinsic size; an unpinned axis is centered.
pub fn resolve_frame(pins: &[Pin], superview: Rect, intrinsic: Vector2<f64>) -> Rect {
    let find = |edge: Edge| pins.iter().find(|pin| pin.edge == edge).map(|pin| pin.inset);

    let (x, width) = resolve_axis(
        find(Edge::Leading),
        find(Edge::Trailing),
        superview.min_x(),
        superview.size.x,
        intrinsic.x,
    );
    let (y, height) = resolve_axis(
        find(Edge::Top),
        find(Edge::Bottom),
        superview.min_y(),
        superview.size.y,
        intrinsic.y,
    );

    Rect::new(Point2::new(x, y), Vector2::new(width, height))
}

fn resolve_axis(
    start: Option<f64>,
    end: Option<f64>,
    origin: f64,
    available: f64,
    intrinsic: f64,
) -> (f64, f64) {
    match (start, end) {
        (Some(start), Some(end)) => (origin + start, (available - start - end).max(0.)),
        (Some(start), None) => (origin + start, intrinsic),
        (None, Some(end)) => (origin + available - end - intrinsic, intrinsic),
        (None, None) => (origin + (available - intrinsic) / 2., intrinsic),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(Point2::new(0., 0.), Vector2::new(400., 800.))
    }

    #[test]
    fn top_toast_frame() {
        let style = ToastStyle::default();
        let pins = container_pins(&style, Position::Top);
        let frame = resolve_frame(&pins, screen(), Vector2::new(100., 44.));
        assert_eq!(frame.origin, Point2::new(65., 75.));
        assert_eq!(frame.size, Vector2::new(270., 44.));
    }

    #[test]
    fn bottom_toast_frame() {
        let style = ToastStyle::default();
        let pins = container_pins(&style, Position::Bottom);
        let frame = resolve_frame(&pins, screen(), Vector2::new(100., 44.));
        assert_eq!(frame.max_y(), 800. - 75.);
        assert_eq!(frame.min_x(), 65.);
        assert_eq!(frame.max_x(), 400. - 65.);
    }

    #[test]
    fn label_fills_container_minus_insets() {
        let style = ToastStyle::default();
        let container = Rect::new(Point2::new(65., 75.), Vector2::new(270., 44.));
        let frame = resolve_frame(&label_pins(&style), container, Vector2::new(0., 0.));
        assert_eq!(frame, container.inset(15., 15.));
        assert!(container.contains_rect(frame));
    }

    #[test]
    fn narrow_superview_does_not_go_negative() {
        let style = ToastStyle::default();
        let tiny = Rect::new(Point2::new(0., 0.), Vector2::new(100., 100.));
        let frame = resolve_frame(&container_pins(&style, Position::Top), tiny, Vector2::new(0., 10.));
        assert_eq!(frame.size.x, 0.);
    }

    #[test]
    fn unpinned_axis_is_centered() {
        let frame = resolve_frame(&[], screen(), Vector2::new(100., 100.));
        assert_eq!(frame.origin, Point2::new(150., 350.));
    }
}
