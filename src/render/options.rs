//! Rendering options and page styling.

/// Default page title.
pub const DEFAULT_TITLE: &str = "\u{1f60e} cool links";

/// Default external stylesheet, Bootstrap 5.3.3 from the jsDelivr CDN.
pub const DEFAULT_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Options for assembling the HTML page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Page title placed in `<title>`.
    pub title: String,

    /// External stylesheet URL referenced from `<head>`.
    pub stylesheet: String,

    /// Which fixed CSS classes generated tags carry.
    pub style: StylePreset,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the external stylesheet URL.
    pub fn with_stylesheet(mut self, url: impl Into<String>) -> Self {
        self.stylesheet = url.into();
        self
    }

    /// Set the style preset.
    pub fn with_style(mut self, style: StylePreset) -> Self {
        self.style = style;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            style: StylePreset::Bootstrap,
        }
    }
}

/// Fixed CSS classes attached to generated tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylePreset {
    /// Bare tags with no class attributes.
    Plain,

    /// Bootstrap utility classes: spacing on headings and items,
    /// underline-on-hover anchors.
    #[default]
    Bootstrap,
}

impl StylePreset {
    pub(crate) fn heading_class(self) -> Option<&'static str> {
        match self {
            StylePreset::Plain => None,
            StylePreset::Bootstrap => Some("mt-4"),
        }
    }

    pub(crate) fn item_class(self) -> Option<&'static str> {
        match self {
            StylePreset::Plain => None,
            StylePreset::Bootstrap => Some("mb-1"),
        }
    }

    pub(crate) fn anchor_class(self) -> Option<&'static str> {
        match self {
            StylePreset::Plain => None,
            StylePreset::Bootstrap => Some(
                "link-offset-2 link-offset-3-hover link-underline \
                 link-underline-opacity-0 link-underline-opacity-75-hover",
            ),
        }
    }

    pub(crate) fn container_class(self) -> &'static str {
        match self {
            StylePreset::Plain => "container",
            StylePreset::Bootstrap => "container-sm mt-3 mb-5 text-start",
        }
    }
}
