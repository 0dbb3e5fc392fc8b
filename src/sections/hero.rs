use yew::prelude::*;

use crate::reveal::tracker::RevealedSet;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub revealed: RevealedSet,
    pub on_navigate: Callback<String>,
}

const STATS: &[(&str, &str, &str)] = &[
    ("500", "500+", "Azure Professionals Trained"),
    ("95", "95%", "Certification Pass Rate"),
    ("12", "12+", "Years of Experience"),
];

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    let HeroProps { revealed, on_navigate } = props;

    let go_to = |id: &'static str| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(id.to_string()))
    };

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                .hero {
                    padding: 8rem 1rem 5rem;
                    text-align: center;
                    position: relative;
                    background-image:
                        linear-gradient(90deg, rgba(0,0,0,0.05) 1px, transparent 1px),
                        linear-gradient(180deg, rgba(0,0,0,0.05) 1px, transparent 1px);
                    background-size: 20px 20px;
                }
                .hero h1 {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 1.5rem;
                }
                .hero h1 .accent {
                    display: block;
                    color: #003366;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    color: #4b5563;
                    max-width: 56rem;
                    margin: 0 auto 1.5rem;
                }
                .hero-instructor {
                    display: inline-flex;
                    align-items: center;
                    background: rgba(0, 51, 102, 0.1);
                    border: 1px solid rgba(0, 51, 102, 0.2);
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    color: #003366;
                    font-weight: 600;
                }
                .hero-buttons {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                    margin-top: 2rem;
                }
                .hero-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    margin: 4rem auto 0;
                    padding-top: 4rem;
                    border-top: 1px solid #e5e7eb;
                    max-width: 64rem;
                }
                .hero-stats data {
                    display: block;
                    font-size: 3.5rem;
                    font-weight: 700;
                    color: #003366;
                }
                .hero-stats p {
                    color: #4b5563;
                    text-transform: uppercase;
                    font-size: 0.85rem;
                    letter-spacing: 0.05em;
                }
                @media (max-width: 768px) {
                    .hero { padding-top: 6rem; }
                    .hero h1 { font-size: 1.9rem; }
                    .hero-subtitle { font-size: 1rem; }
                    .hero-stats { margin-top: 1rem; padding-top: 1rem; }
                    .hero-stats data { font-size: 1.5rem; }
                }
                "#}
            </style>
            <h1
                class={classes!("reveal", "reveal-up", revealed.class_for("hero-title"))}
                data-reveal-id="hero-title"
            >
                {"Master Azure Cloud"}
                <span class="accent">{"with UT-Kloud"}</span>
            </h1>
            <p
                class={classes!("hero-subtitle", "reveal", "reveal-up", revealed.class_for("hero-subtitle"))}
                data-reveal-id="hero-subtitle"
                style="transition-delay: 0.2s;"
            >
                {"Professional Azure Cloud Training by Industry Experts"}
            </p>
            <div
                class={classes!("hero-instructor", "reveal", "reveal-up", revealed.class_for("hero-instructor"))}
                data-reveal-id="hero-instructor"
                style="transition-delay: 0.3s;"
            >
                {"Led by S Mohammed Khan with 12+ Years of Experience"}
            </div>
            <div
                class={classes!("hero-buttons", "reveal", "reveal-up", revealed.class_for("hero-buttons"))}
                data-reveal-id="hero-buttons"
                style="transition-delay: 0.4s;"
            >
                <button class="btn-primary" onclick={go_to("courses")}>{"Start Your Journey"}</button>
                <button class="btn-outline" onclick={go_to("whyUtKloud")}>{"Learn More"}</button>
            </div>
            <aside
                class={classes!("hero-stats", "reveal", "reveal-up", revealed.class_for("hero-stats"))}
                data-reveal-id="hero-stats"
                style="transition-delay: 0.6s;"
                aria-label="Company statistics"
            >
                { STATS.iter().map(|(value, shown, label)| html! {
                    <article>
                        <data value={*value}>{*shown}</data>
                        <p>{*label}</p>
                    </article>
                }).collect::<Html>() }
            </aside>
        </section>
    }
}
