use crate::color::Color;
use crate::config::ToastStyle;
use crate::theme::ColorPair;
use core::fmt;

/// A native view that contains graphical content and may have subviews.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Background color, with which the layer bounds will be filled--respecting the corner radius.
    pub background: Color,

    /// Corner radius.
    pub corner_radius: f64,

    /// Whether contents will be clipped to the layer’s bounds.
    pub clip_contents: bool,

    /// Layer opacity.
    pub opacity: f64,
}

impl Default for Layer {
    fn default() -> Self {
        Layer {
            background: Color::default(),
            corner_radius: 0.,
            clip_contents: false,
            opacity: 1.,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextAlignment {
    Leading,
    Center,
    Trailing,
}

/// A native text label.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub text: String,
    pub color: Color,
    pub font_size: f64,
    pub alignment: TextAlignment,

    /// Maximum number of lines; `None` wraps onto as many lines as needed.
    pub max_lines: Option<usize>,

    /// Whether contents will be clipped to the label’s bounds.
    pub clip_contents: bool,
}

/// Native views a backend must be able to create.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeView {
    Layer(Layer),
    Text(Text),
}

impl NativeView {
    pub fn as_layer(&self) -> Option<&Layer> {
        match self {
            NativeView::Layer(layer) => Some(layer),
            NativeView::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            NativeView::Text(text) => Some(text),
            NativeView::Layer(_) => None,
        }
    }
}

impl fmt::Display for NativeView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NativeView::Layer(_) => write!(f, "layer"),
            NativeView::Text(text) => write!(f, "text {:?}", text.text),
        }
    }
}

/// The toast container: transparent until faded in, rounded, clipping its label.
pub(crate) fn toast_container(colors: ColorPair, style: &ToastStyle) -> NativeView {
    NativeView::Layer(Layer {
        background: colors.background,
        corner_radius: style.corner_radius,
        clip_contents: true,
        opacity: 0.,
    })
}

/// The toast label: centered, wrapping message text.
pub(crate) fn toast_label(message: &str, colors: ColorPair, style: &ToastStyle) -> NativeView {
    NativeView::Text(Text {
        text: message.to_string(),
        color: colors.foreground,
        font_size: style.font_size,
        alignment: TextAlignment::Center,
        max_lines: None,
        clip_contents: true,
    })
}
