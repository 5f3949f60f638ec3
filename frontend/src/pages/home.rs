use yew::prelude::*;

use crate::components::cta_button::{CtaButton, CtaVariant};
use crate::components::feature_card::FeatureCard;
use crate::components::section_header::SectionHeader;
use crate::components::solution_card::SolutionCard;

pub const PROJECT_CALL_URL: &str = "/contact#project-call";
pub const COURSE_REGISTER_URL: &str = "/learn#register";

/// (icon class, title, description)
const PILLARS: [(&str, &str, &str); 3] = [
    (
        "icon-code",
        "Software Solutions",
        "Custom web applications, internal tools, dashboards, and API integrations tailored to your business needs.",
    ),
    (
        "icon-cpu",
        "PCB Design & Embedded",
        "From schematic to prototype, we design and validate PCB solutions for IoT, automation, and custom electronics.",
    ),
    (
        "icon-graduation-cap",
        "Pre-Engineering Courses",
        "Hands-on courses in electronics, programming, and embedded systems designed for students and early-career engineers.",
    ),
];

const SOLUTIONS: [(&str, &str); 6] = [
    ("Web Applications", "Scalable, responsive web apps built with modern frameworks"),
    ("Internal Tools", "Custom dashboards and automation tools for your team"),
    ("Embedded Prototypes", "IoT devices and embedded systems from concept to reality"),
    ("Data Dashboards", "Real-time analytics and visualization platforms"),
    ("API Integrations", "Seamless connectivity between your systems and services"),
    ("PCB Manufacturing Support", "Design for manufacturing and assembly optimization"),
];

const REASONS: [(&str, &str, &str); 4] = [
    (
        "icon-lightbulb",
        "Engineering + Education",
        "We don't just build, we teach and empower teams with knowledge.",
    ),
    (
        "icon-target",
        "Concept to Prototype",
        "End-to-end development from initial idea to working prototype.",
    ),
    (
        "icon-shield",
        "Practical & Future-Ready",
        "Solutions built for today's needs and tomorrow's scalability.",
    ),
    (
        "icon-zap",
        "Flexible Engagement",
        "Project-based work or ongoing partnerships. We adapt to your needs.",
    ),
];

fn feature_cards(cards: &[(&'static str, &'static str, &'static str)]) -> Html {
    cards
        .iter()
        .map(|(icon, title, description)| {
            html! {
                <FeatureCard
                    key={*title}
                    icon={*icon}
                    title={*title}
                    description={*description}
                />
            }
        })
        .collect()
}

fn cta_pair() -> Html {
    html! {
        <div class="cta-row">
            <CtaButton variant={CtaVariant::Project} to={PROJECT_CALL_URL}>
                {"Book a Project Call"}
            </CtaButton>
            <CtaButton variant={CtaVariant::Course} to={COURSE_REGISTER_URL}>
                {"Register for a Course"}
            </CtaButton>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    // Land at the top when navigating here from another route
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <video class="hero-video" autoplay=true muted=true loop=true playsinline=true>
                    <source src="/bravo.mp4" type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
                <div class="hero-tint"></div>
                <div class="hero-overlay"></div>

                <div class="hero-content fade-in">
                    <h1>
                        {"Where Ideas Become "}
                        <span class="text-gradient text-gradient-animate">{"Intelligent Solutions"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Expert software development, PCB design, and pre-engineering courses that bridge innovation with education."}
                    </p>
                    { cta_pair() }
                </div>
            </section>

            <section class="pillars muted">
                <div class="container">
                    <SectionHeader title="What We Do" centered=true />
                    <div class="card-grid three">
                        { feature_cards(&PILLARS) }
                    </div>
                </div>
            </section>

            <section class="solutions">
                <div class="container">
                    <SectionHeader title="Featured Solutions" centered=true />
                    <div class="card-grid three">
                        {
                            SOLUTIONS.iter().map(|(title, description)| html! {
                                <SolutionCard key={*title} title={*title} description={*description} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="learning muted">
                <div class="container narrow centered">
                    <div class="learning-badge">
                        <i class="icon icon-graduation-cap" aria-hidden="true"></i>
                    </div>
                    <h2>{"Build Your Engineering Foundation"}</h2>
                    <p class="lead">
                        {"Our pre-engineering courses combine theory with practical projects. Learn electronics, programming, and PCB design from industry professionals."}
                    </p>
                    <CtaButton variant={CtaVariant::Course} to={COURSE_REGISTER_URL} class="spaced">
                        {"Register for a Course"}
                    </CtaButton>
                </div>
            </section>

            <section class="reasons">
                <div class="container">
                    <SectionHeader title="Why Choose Bravonest" centered=true />
                    <div class="card-grid four">
                        { feature_cards(&REASONS) }
                    </div>
                </div>
            </section>

            <section class="final-cta">
                <div class="container narrow centered">
                    <h2>{"Have an Idea or Want to Learn?"}</h2>
                    <p class="lead">
                        {"Whether you need a technical solution built or want to develop your engineering skills, we're here to help."}
                    </p>
                    { cta_pair() }
                </div>
            </section>
        </div>
    }
}
