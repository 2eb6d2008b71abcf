// AHTesters Landing Page — Leptos 0.8 Edition

mod quote;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Shared by both call-to-action buttons and the modal itself.
    let quote_open = RwSignal::new(false);

    view! {
        <ConsoleGreeting />
        <Nav />
        <main>
            <Hero quote_open=quote_open />
            <Services />
            <About />
            <Contact quote_open=quote_open />
        </main>
        <Footer />
        <QuoteModal open=quote_open />
    }
}
