use leptos::prelude::*;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <h2 class="section-title">"Our Services"</h2>
                <div class="services-grid">
                    <ServiceCard
                        title="Manual Testing"
                        description="Functional, Regression, Exploratory, UAT"
                    />
                    <ServiceCard
                        title="Automation Testing"
                        description="Selenium, Playwright, Cypress, Appium"
                    />
                    <ServiceCard
                        title="API Testing"
                        description="Postman, RestAssured, Karate"
                    />
                    <ServiceCard
                        title="Performance Testing"
                        description="JMeter, k6"
                    />
                    <ServiceCard
                        title="CI/CD Integration"
                        description="Automated pipelines in Jenkins, GitHub, Azure"
                    />
                    <ServiceCard
                        title="Test Strategy"
                        description="Test plans, cases, bug tracking (Jira, Trello, Azure)"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="service-card">
            <h3 class="service-card-title">{title}</h3>
            <p class="service-card-description">{description}</p>
        </div>
    }
}
