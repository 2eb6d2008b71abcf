use leptos::prelude::*;
use super::SITE_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();
    view! {
        <footer class="footer">
            <div class="container">
                <p class="footer-copyright">
                    {format!("© {year} {SITE_NAME}. All rights reserved.")}
                </p>
            </div>
        </footer>
    }
}
