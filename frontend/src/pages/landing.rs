use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::in_view::use_in_view;
use crate::components::navigation::scroll_to_section;
use crate::components::typewriter::TypewriterEffect;
use crate::pages::faq::Faq;
use crate::Route;

struct Service {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    typed: bool,
}

const SERVICES: [Service; 4] = [
    Service {
        number: "01",
        title: "Lead Generation",
        description: "Our AI-driven solutions generate high-quality, brand-aligned content to engage your audience effortlessly.",
        typed: true,
    },
    Service {
        number: "02",
        title: "Appointment Setting",
        description: "We create intelligent chatbots powered by advanced NLP to grow customer interactions & operations.",
        typed: false,
    },
    Service {
        number: "03",
        title: "Sales Development",
        description: "We automate repetitive tasks to improve operational efficiency, grow productivity, errors, and save time.",
        typed: false,
    },
    Service {
        number: "04",
        title: "Campaign Management",
        description: "We build Large Language Models to revolutionize business processes data & interacts with customers.",
        typed: false,
    },
];

const FEATURES: [(&str, &str, &str); 6] = [
    ("🔍", "Verified Lead Sourcing", "Hand-picked prospects that match your ideal customer profile"),
    ("📣", "Multi-Channel Outreach", "Email, LinkedIn, phone calls - we reach prospects where they are"),
    ("📅", "Appointment Setting", "Qualified meetings directly in your calendar"),
    ("🎯", "Signal & Trigger Tracking", "Time your outreach with buying signals and triggers"),
    ("📈", "Campaign Optimisation", "Continuous testing and improvement for better results"),
    ("📊", "Transparent Reporting", "Real-time insights into campaign performance and ROI"),
];

const STEPS: [(&str, &str, &str); 5] = [
    ("01", "Initial Strategy Session", "We dive deep into your business goals, target market, and current challenges to craft a tailored approach."),
    ("02", "ICP Deep Dive & Data Build", "Research and identify your ideal customer profile, then build a comprehensive database of qualified prospects."),
    ("03", "Weeks 1–4: Warm-up Campaigns", "Launch initial outreach campaigns to test messaging and establish sender reputation."),
    ("04", "Weeks 4–8: Optimise Scripts", "Analyze performance data and refine messaging for maximum response rates and conversions."),
    ("05", "Week 8+: Scale Volume", "Increase outreach volume with proven messaging to generate consistent, predictable results."),
];

struct Stat {
    value: u32,
    prefix: &'static str,
    suffix: &'static str,
    title: &'static str,
    description: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: 114, prefix: "", suffix: "+", title: "Meetings Booked", description: "High-quality appointments with decision makers" },
    Stat { value: 50, prefix: "$", suffix: "M+", title: "Pipeline Generated", description: "Total revenue pipeline created for clients" },
    Stat { value: 50, prefix: "", suffix: "+", title: "Satisfied Clients", description: "Companies trusting us with their growth" },
    Stat { value: 112, prefix: "", suffix: "%", title: "Average ROI", description: "Return on investment for our clients" },
];

struct Plan {
    name: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter Plan",
        description: "Perfect for small businesses starting their outbound journey",
        features: &[
            "SDR support",
            "Cold calling",
            "Targeted campaigns",
            "Verified lead sourcing",
            "Appointment setting",
            "Bi-weekly reporting",
            "Slack channel",
        ],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Growth Plan",
        description: "Ideal for growing companies ready to scale",
        features: &[
            "Expanded SDR coverage",
            "Multi-channel outreach",
            "Advanced testing",
            "Trigger-based engagement",
            "Bi-weekly reviews",
        ],
        cta: "Get Started",
        popular: true,
    },
    Plan {
        name: "Professional Plan",
        description: "Enterprise-grade solution for maximum results",
        features: &[
            "Tailored outbound teams",
            "Multi-region campaigns",
            "Account manager",
            "Advanced intent tracking",
            "Custom dashboards",
            "Strategic consulting",
        ],
        cta: "Talk to Support",
        popular: false,
    },
];

/// Entrance-animation classes for a section gated on visibility.
fn reveal(base: &'static str, in_view: bool) -> Classes {
    classes!(base, "reveal", in_view.then(|| "in-view"))
}

fn scroll_to_contact() -> Callback<MouseEvent> {
    Callback::from(|_: MouseEvent| {
        scroll_to_section("contact");
    })
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <div class="hero-content">
                <h1 class="hero-headline" data-testid="hero-headline">
                    {"Scale Faster with"}<br />
                    <span class="text-primary">{"Predictable Outbound"}</span>
                </h1>
                <p class="hero-subheadline" data-testid="hero-subheadline">
                    {"Outbound that delivers results — we book CEO-level meetings, fill your pipeline, and help you close more deals without extra headcount."}
                </p>
                <button class="hero-cta" onclick={scroll_to_contact()} data-testid="button-cta-hero">
                    {"👉 Get a custom quote today →"}
                </button>
                <div class="trust-indicators" data-testid="trust-indicators">
                    {"Trusted by 50+ companies"}
                </div>
            </div>
        </section>
    }
}

#[function_component(Introduction)]
fn introduction() -> Html {
    let (section_ref, in_view) = use_in_view(0.3, true);
    html! {
        <section ref={section_ref} class={reveal("introduction", in_view)}>
            <p data-testid="introduction-text">
                {"Nousu delivers predictable outbound sales — from lead generation and appointment setting to full campaign execution. We specialise in building pipelines that consistently turn conversations into revenue."}
            </p>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let (section_ref, in_view) = use_in_view(0.2, true);
    html! {
        <section id="services" ref={section_ref} class={reveal("services", in_view)}>
            <div class="section-heading">
                <h2>{"Outbound Sales Solutions Built for Growth"}</h2>
                <p>{"Nousu is purpose-built to solve the real-world challenges faced by modern sales teams — no fluff, just impact."}</p>
            </div>
            <div class="services-grid">
                {
                    SERVICES.iter().map(|service| html! {
                        <div key={service.number} class="service-card">
                            <span class="number-badge">{ service.number }</span>
                            {
                                if service.typed {
                                    html! {
                                        <TypewriterEffect
                                            class={classes!("service-title")}
                                            static_text=""
                                            words={vec![AttrValue::Static("We book meetings for SaaS")]}
                                            speed={100}
                                            delay={1000}
                                        />
                                    }
                                } else {
                                    html! { <h3 class="service-title">{ service.title }</h3> }
                                }
                            }
                            <p>{ service.description }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Features)]
fn features() -> Html {
    let (section_ref, in_view) = use_in_view(0.2, true);
    html! {
        <section id="features" ref={section_ref} class={reveal("features", in_view)}>
            <div class="section-heading">
                <h2>{"Features That Build Predictable Pipeline"}</h2>
            </div>
            <div class="features-grid">
                {
                    FEATURES.iter().map(|(icon, title, description)| html! {
                        <div key={*title} class="feature-card">
                            <div class="feature-icon">{ *icon }</div>
                            <h3>{ *title }</h3>
                            <p>{ *description }</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    let (section_ref, in_view) = use_in_view(0.2, true);
    html! {
        <section id="process" ref={section_ref} class={reveal("process", in_view)}>
            <div class="section-heading">
                <h2>{"Our Proven Process"}</h2>
            </div>
            <ol class="timeline">
                {
                    STEPS.iter().map(|(number, title, description)| html! {
                        <li key={*number} class="timeline-step">
                            <span class="number-badge large">{ *number }</span>
                            <div>
                                <h3>{ *title }</h3>
                                <p>{ *description }</p>
                            </div>
                        </li>
                    }).collect::<Html>()
                }
            </ol>
        </section>
    }
}

#[function_component(Results)]
fn results() -> Html {
    let (section_ref, in_view) = use_in_view(0.3, true);
    html! {
        <section id="results" ref={section_ref} class={reveal("results", in_view)}>
            <div class="section-heading">
                <h2 data-testid="results-title">{"Results That Speak for Themselves"}</h2>
            </div>
            <div class="stats-grid">
                {
                    STATS.iter().enumerate().map(|(index, stat)| html! {
                        <div key={stat.title} class="stat" data-testid={format!("stat-{}", index + 1)}>
                            <div class="stat-value">
                                <AnimatedCounter
                                    value={stat.value}
                                    prefix={stat.prefix}
                                    suffix={stat.suffix}
                                    in_view={in_view}
                                />
                            </div>
                            <div class="stat-title">{ stat.title }</div>
                            <div class="stat-description">{ stat.description }</div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    let (section_ref, in_view) = use_in_view(0.2, true);
    html! {
        <section id="pricing" ref={section_ref} class={reveal("pricing", in_view)}>
            <div class="section-heading">
                <h2>{"Flexible Options for Every Stage of Growth"}</h2>
            </div>
            <div class="plans-grid">
                {
                    PLANS.iter().map(|plan| html! {
                        <div key={plan.name} class={classes!("plan-card", plan.popular.then(|| "popular"))}>
                            {
                                if plan.popular {
                                    html! { <span class="popular-badge">{"Most Popular"}</span> }
                                } else {
                                    html! {}
                                }
                            }
                            <h3>{ plan.name }</h3>
                            <p class="plan-description">{ plan.description }</p>
                            <button
                                class={if plan.popular { "plan-cta" } else { "plan-cta outline" }}
                                onclick={scroll_to_contact()}
                            >
                                { plan.cta }
                            </button>
                            <ul class="plan-features">
                                { for plan.features.iter().map(|feature| html! { <li>{"✓ "}{ *feature }</li> }) }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let (section_ref, in_view) = use_in_view(0.3, true);
    html! {
        <section id="about" ref={section_ref} class={reveal("about", in_view)}>
            <div class="about-image">
                <div class="about-image-placeholder">{"Nousu Collective Team"}</div>
            </div>
            <div class="about-content">
                <span class="eyebrow">{"About us"}</span>
                <h2>{"Learn More About Our "}<span class="text-primary">{"Story"}</span></h2>
                <p>
                    {"Nousu was built to solve one of the hardest problems founders and sales leaders face: generating predictable pipeline. We've helped SaaS, finance, startups, and SMEs book thousands of meetings and generate millions in pipeline through premium outbound campaigns. Our approach is simple — act as your sales team, not a vendor, and deliver measurable growth you can rely on."}
                </p>
                <Link<Route> to={Route::JoinWaitlist} classes="hero-cta">
                    {"Book a Strategy Call →"}
                </Link<Route>>
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let (section_ref, in_view) = use_in_view(0.3, true);
    html! {
        <section id="contact" ref={section_ref} class={reveal("contact", in_view)}>
            <h2 data-testid="contact-title">{"Ready to Scale Your Outbound?"}</h2>
            <p>{"Join our waitlist to be the first to experience our revolutionary outbound sales platform"}</p>
            <div class="ebook-offer inline">
                <span class="ebook-icon">{"🎁"}</span>
                <div>
                    <p class="strong">{"FREE Bonus: Ultimate Outbound Sales Guide"}</p>
                    <p class="muted">{"40-page ebook with proven templates & strategies"}</p>
                </div>
            </div>
            <Link<Route> to={Route::JoinWaitlist} classes="hero-cta">
                {"Join Waitlist →"}
            </Link<Route>>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let link = |id: &'static str, label: &'static str| {
        html! {
            <li>
                <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| { scroll_to_section(id); })}>
                    { label }
                </button>
            </li>
        }
    };

    html! {
        <footer class="footer">
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">{"Nousu Collective"}</div>
                    <p>{"Predictable outbound sales solutions that scale with your business."}</p>
                </div>
                <div>
                    <h4>{"Services"}</h4>
                    <ul>
                        { link("services", "Lead Generation") }
                        { link("services", "Appointment Setting") }
                        { link("services", "Sales Development") }
                        { link("services", "Campaign Management") }
                    </ul>
                </div>
                <div>
                    <h4>{"Company"}</h4>
                    <ul>
                        { link("pricing", "Pricing") }
                        { link("process", "Process") }
                        { link("contact", "Contact") }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{"© 2024 Nousu Collective. All rights reserved."}</p>
                <p>{"Made with ❤️ in Sydney, Nousu Collective."}</p>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Hero />
            <Introduction />
            <Services />
            <Features />
            <Process />
            <Results />
            <Pricing />
            <About />
            <Faq />
            <Contact />
            <Footer />
        </div>
    }
}
