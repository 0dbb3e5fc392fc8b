use log::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::config;
use crate::reveal::hook::use_reveal_tracker;
use crate::sections::{
    contact::ContactSection,
    courses::CoursesSection,
    footer::Footer,
    hero::HeroSection,
    navigation::Navigation,
    our_section::OurSection,
    why_utkloud::WhyUtKloudSection,
};

/// Smooth-scrolls to the element with the given DOM id, if present.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// The landing page. Owns the revealed set and hands sections a read-only copy.
#[function_component(Home)]
pub fn home() -> Html {
    let revealed = use_reveal_tracker(config::reveal_config());

    let on_navigate = Callback::from(|id: String| scroll_to_section(&id));

    html! {
        <div class="site">
            <style>
                {r#"
                .site {
                    min-height: 100vh;
                    background: linear-gradient(to bottom, #f9fafb, #fff);
                    overflow: hidden;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                }
                .reveal {
                    opacity: 0;
                    transition: opacity 0.8s ease-out, transform 0.8s ease-out;
                    will-change: opacity, transform;
                }
                .reveal-up { transform: translateY(40px); }
                .reveal-left { transform: translateX(-40px); }
                .reveal-right { transform: translateX(40px); }
                .reveal-scale { transform: scale(0.95); }
                .reveal.revealed { opacity: 1; transform: none; }
                @media (prefers-reduced-motion: reduce) {
                    .reveal { opacity: 1; transform: none; transition: none; }
                }
                .btn-primary {
                    background: #003366;
                    color: #fff;
                    border: none;
                    padding: 0.9rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: background 0.3s;
                }
                .btn-primary:hover { background: #004080; }
                .btn-primary:disabled { opacity: 0.5; cursor: default; }
                .btn-outline {
                    background: transparent;
                    color: #003366;
                    border: 2px solid #003366;
                    padding: 0.8rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .btn-outline:hover { background: #003366; color: #fff; }
                .btn-light {
                    background: #fff;
                    color: #003366;
                    border: none;
                    padding: 0.75rem 2rem;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .full-width { width: 100%; }
                "#}
            </style>
            <Navigation on_navigate={on_navigate.clone()} />
            <HeroSection revealed={revealed.clone()} on_navigate={on_navigate.clone()} />
            <CoursesSection revealed={revealed.clone()} on_navigate={on_navigate.clone()} />
            <WhyUtKloudSection revealed={revealed.clone()} />
            <OurSection revealed={revealed.clone()} />
            <ContactSection revealed={revealed} />
            <Footer on_navigate={on_navigate} />
        </div>
    }
}
