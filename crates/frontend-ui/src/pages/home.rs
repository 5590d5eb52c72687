//! Home page component

use leptos::prelude::*;

use crate::config::CONFIG;

/// Home page component, mounted at [`crate::router::routes::HOME`]
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>{CONFIG.app_name}</h1>
            <p>"Welcome. Pick a destination from the navigation above."</p>
        </div>
    }
}
