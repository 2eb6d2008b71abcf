use leptos::prelude::*;

#[component]
pub fn Contact(quote_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <section id="contact" class="contact">
            <div class="container">
                <h2 class="section-title">"Contact Us"</h2>
                <p class="section-description">"Let's talk about your project!"</p>
                <ul class="contact-channels">
                    <li class="contact-channel">
                        <span class="contact-label">"Email"</span>
                        <a href="mailto:info@ahtesters.com" class="contact-link">
                            "info@ahtesters.com"
                        </a>
                    </li>
                    <li class="contact-channel">
                        <span class="contact-label">"WhatsApp"</span>
                        <a href="https://wa.me/923463291533" target="_blank" class="contact-link">
                            "+92 346 3291533"
                        </a>
                    </li>
                    <li class="contact-channel">
                        <span class="contact-label">"LinkedIn"</span>
                        <a
                            href="https://linkedin.com/in/ahtesters"
                            target="_blank"
                            class="contact-link"
                        >
                            "linkedin.com/in/ahtesters"
                        </a>
                    </li>
                </ul>
                <button class="btn btn-primary" on:click=move |_| quote_open.set(true)>
                    "Request a Quote"
                </button>
            </div>
        </section>
    }
}
