use crate::layout::Position;
use crate::theme::Theme;

/// How long a toast stays fully visible unless told otherwise, in seconds.
pub const DEFAULT_DURATION: f64 = 3.;

/// A request to show one toast.
///
/// ```text
/// ToastRequest::new("Saved").theme(Theme::Success).position(Position::Bottom)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRequest<S> {
    pub message: String,
    pub theme: Theme,
    /// Hold time in seconds. Zero, negative and NaN hold for no time at all; the fades still run.
    pub duration: f64,
    pub position: Position,
    /// The surface to show the toast on; the active surface if `None`.
    pub target: Option<S>,
}

impl<S> ToastRequest<S> {
    /// A regular toast at the top of the active surface, held for three seconds.
    pub fn new(message: impl Into<String>) -> Self {
        ToastRequest {
            message: message.into(),
            theme: Theme::default(),
            duration: DEFAULT_DURATION,
            position: Position::default(),
            target: None,
        }
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn target(mut self, surface: S) -> Self {
        self.target = Some(surface);
        self
    }
}

#[test]
fn request_defaults() {
    let request = ToastRequest::<()>::new("hello");
    assert_eq!(request.message, "hello");
    assert_eq!(request.theme, Theme::Regular);
    assert_eq!(request.duration, 3.);
    assert_eq!(request.position, Position::Top);
    assert_eq!(request.target, None);
}
