//! Rendering for [`PageElement`] blocks

use leptos::prelude::*;
use leptos_router::components::A;

use crate::models::PageElement;

/// Renders one outline block. Links go through the router's `<A>`, so
/// following them never reloads the page.
#[component]
pub fn PageBlock(element: PageElement) -> impl IntoView {
    match element {
        PageElement::Heading(text) => view! { <h1>{text}</h1> }.into_any(),
        PageElement::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        PageElement::Link { label, href } => view! { <A href=href>{label}</A> }.into_any(),
    }
}
