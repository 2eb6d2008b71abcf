use leptos::prelude::*;
use super::SITE_NAME;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <h2 class="section-title">"About Us"</h2>
                <p class="about-text">
                    "At "
                    <span class="about-brand">{SITE_NAME}</span>
                    ", we combine manual testing insight with automation expertise "
                    "to deliver high-quality, bug-free applications. Our journey began "
                    "with a passion for technology and today we help businesses achieve "
                    "reliable software quality worldwide."
                </p>
            </div>
        </section>
    }
}
