use leptos::prelude::*;
use super::SITE_NAME;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="nav">
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <span class="nav-title">{SITE_NAME}</span>
                </a>
                <nav class="nav-links">
                    <a href="#services" class="nav-link">"Services"</a>
                    <a href="#about" class="nav-link">"About"</a>
                    <a href="#contact" class="nav-link">"Contact"</a>
                </nav>
            </div>
        </header>
    }
}
