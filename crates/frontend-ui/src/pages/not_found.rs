//! 404 Not Found page component
//!
//! Static and pure: the same outline on every render, no logging, no I/O.
//! Reporting the unmatched path is left to the router fallback.

use leptos::prelude::*;

use crate::components::PageBlock;
use crate::models::PageElement;
use crate::router::routes;

/// Literal page copy
pub mod copy {
    pub const HEADING: &str = "404 - Page Not Found";
    pub const MESSAGE: &str = "The page you're looking for doesn't exist.";
    pub const HOME_LABEL: &str = "Go Home";
    pub const PAGE_CLASS: &str = "pt-16 p-4 container mx-auto";
}

/// Content of the page, in document order
pub const fn outline() -> [PageElement; 3] {
    [
        PageElement::Heading(copy::HEADING),
        PageElement::Paragraph(copy::MESSAGE),
        PageElement::Link {
            label: copy::HOME_LABEL,
            href: routes::HOME,
        },
    ]
}

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class={copy::PAGE_CLASS}>
            {outline()
                .into_iter()
                .map(|element| view! { <PageBlock element=element /> })
                .collect_view()}
        </main>
    }
}
