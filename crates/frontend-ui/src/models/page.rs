//! Typed outline of a static page

/// One block of static page content, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageElement {
    /// Top-level `<h1>`
    Heading(&'static str),
    /// Body text `<p>`
    Paragraph(&'static str),
    /// In-app navigation link
    Link {
        label: &'static str,
        href: &'static str,
    },
}

impl PageElement {
    /// Visible text of the element
    pub const fn text(&self) -> &'static str {
        match *self {
            Self::Heading(text) | Self::Paragraph(text) => text,
            Self::Link { label, .. } => label,
        }
    }

    /// Navigation target, if the element is a link
    pub const fn href(&self) -> Option<&'static str> {
        match *self {
            Self::Link { href, .. } => Some(href),
            Self::Heading(_) | Self::Paragraph(_) => None,
        }
    }

    /// Whether the user can act on the element
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Link { .. })
    }
}
