use leptos::prelude::*;

#[component]
pub fn Hero(quote_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <h1 class="hero-title">"🚀 Reliable QA & Automation Services"</h1>
                <p class="hero-description">
                    "Helping businesses deliver flawless applications with manual "
                    "& automated testing solutions."
                </p>
                <button class="btn btn-primary" on:click=move |_| quote_open.set(true)>
                    "Get a Free Quote"
                </button>
            </div>
        </section>
    }
}
