use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config::{TESTIMONIALS_PER_PAGE, TESTIMONIAL_AUTOPLAY_MS};
use crate::reveal::tracker::RevealedSet;

pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The hands-on labs and real-world scenarios helped me understand Azure concepts thoroughly. Suhail sir's teaching approach is excellent!",
        name: "Rahul Sharma",
        role: "Azure Administrator",
    },
    Testimonial {
        quote: "Best Azure training in Pune! The course content is well-structured and the practical sessions are invaluable.",
        name: "Priya Patel",
        role: "Cloud Architect",
    },
    Testimonial {
        quote: "The DevOps training was comprehensive and helped me implement CI/CD pipelines effectively in my organization.",
        name: "Amit Kumar",
        role: "DevOps Engineer",
    },
    Testimonial {
        quote: "Excellent training quality with real-time projects. The AZ-305 certification preparation was thorough and well-organized.",
        name: "Sneha Reddy",
        role: "Solutions Architect",
    },
    Testimonial {
        quote: "The practical approach and industry-relevant case studies made learning Azure enjoyable. Highly recommend UT-Kloud!",
        name: "Vikram Singh",
        role: "Cloud Consultant",
    },
    Testimonial {
        quote: "Great support throughout the course. The mock exams and practice sessions helped me clear AZ-104 with confidence.",
        name: "Anjali Desai",
        role: "Infrastructure Engineer",
    },
];

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "☁️",
        "Real Azure Projects",
        "Build real Azure infrastructure and solutions you can showcase to employers. Get hands-on experience with live Azure environments.",
    ),
    (
        "🏆",
        "Microsoft Certified Trainers",
        "Learn from Microsoft Certified Azure Experts with 12+ years of experience. Get insights from real-world Azure implementations.",
    ),
    (
        "🎯",
        "Certification Success",
        "95% exam pass rate with dedicated support. Get exam vouchers, practice tests, and personalized guidance to achieve Azure certification.",
    ),
];

/// Paging over a fixed list, wrapping at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub total_items: usize,
    pub per_page: usize,
}

impl Pager {
    pub fn pages(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        (self.total_items + self.per_page - 1) / self.per_page
    }

    pub fn next(&self, current: usize) -> usize {
        match self.pages() {
            0 => 0,
            pages => (current + 1) % pages,
        }
    }

    pub fn prev(&self, current: usize) -> usize {
        match self.pages() {
            0 => 0,
            pages => (current + pages - 1) % pages,
        }
    }

    pub fn range(&self, page: usize) -> std::ops::Range<usize> {
        let start = (page * self.per_page).min(self.total_items);
        let end = (start + self.per_page).min(self.total_items);
        start..end
    }
}

#[derive(Properties, PartialEq)]
pub struct WhyUtKloudProps {
    pub revealed: RevealedSet,
}

#[function_component(WhyUtKloudSection)]
pub fn why_utkloud_section(props: &WhyUtKloudProps) -> Html {
    let revealed = &props.revealed;

    html! {
        <section id="whyUtKloud" class="why">
            <style>
                {r#"
                .why { padding: 5rem 1rem; background: #fff; }
                .why-header { text-align: center; margin-bottom: 4rem; }
                .why-header h2 { font-size: 3rem; font-weight: 700; }
                .why-header h2 .accent { color: #003366; margin-left: 0.75rem; }
                .pill {
                    display: inline-flex;
                    align-items: center;
                    background: rgba(0, 51, 102, 0.05);
                    border: 1px solid rgba(0, 51, 102, 0.2);
                    border-radius: 9999px;
                    padding: 0.5rem 1.5rem;
                    color: #003366;
                    font-weight: 600;
                    font-size: 0.85rem;
                    text-transform: uppercase;
                }
                .why-features {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto 4rem;
                    text-align: center;
                }
                .why-icon {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1.5rem;
                    background: #003366;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                }
                .carousel-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto 2rem;
                }
                .testimonial-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    animation: fadeIn 0.5s ease-out both;
                }
                .testimonial-card blockquote { font-style: italic; color: #374151; flex-grow: 1; }
                .testimonial-author { border-top: 1px solid #f3f4f6; padding-top: 1rem; margin-top: 1.5rem; }
                .testimonial-role { color: #003366; font-size: 0.85rem; }
                .carousel-controls { display: flex; justify-content: center; align-items: center; gap: 1rem; }
                .carousel-arrow { border-radius: 9999px; padding: 0.5rem 0.8rem; background: #003366; color: #fff; border: none; cursor: pointer; }
                .carousel-arrow:disabled { opacity: 0.5; }
                .carousel-dot { width: 0.75rem; height: 0.75rem; border-radius: 9999px; border: none; background: #d1d5db; cursor: pointer; }
                .carousel-dot.active { background: #003366; }
                @keyframes fadeIn {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            <div
                class={classes!("why-header", "reveal", "reveal-up", revealed.class_for("about-header"))}
                data-reveal-id="about-header"
            >
                <span class="pill">{"Why Choose Us"}</span>
                <h2>{"Why"}<span class="accent">{"UT-Kloud?"}</span></h2>
                <p>
                    {"We're bridging the gap between traditional education and the cloud-driven future."}
                    <br />
                    <strong>{"Your success is our mission."}</strong>
                </p>
            </div>

            <div
                class={classes!("why-features", "reveal", "reveal-up", revealed.class_for("about-features"))}
                data-reveal-id="about-features"
            >
                { FEATURES.iter().map(|(icon, title, text)| html! {
                    <div class="why-feature">
                        <div class="why-icon">{*icon}</div>
                        <h4>{*title}</h4>
                        <p>{*text}</p>
                    </div>
                }).collect::<Html>() }
            </div>

            <div
                class={classes!("reveal", "reveal-scale", revealed.class_for("testimonial"))}
                data-reveal-id="testimonial"
            >
                <h3 class="carousel-title">{"Success Stories"}</h3>
                <TestimonialCarousel />
            </div>
        </section>
    }
}

#[function_component(TestimonialCarousel)]
fn testimonial_carousel() -> Html {
    let pager = Pager {
        total_items: TESTIMONIALS.len(),
        per_page: TESTIMONIALS_PER_PAGE,
    };
    let current = use_state(|| 0usize);
    let autoplay = use_state(|| true);

    {
        let current = current.clone();
        // A zero period pauses the interval.
        let period = if *autoplay { TESTIMONIAL_AUTOPLAY_MS } else { 0 };
        use_interval(move || current.set(pager.next(*current)), period);
    }

    let go = |target: fn(&Pager, usize) -> usize| {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(target(&pager, *current)))
    };
    let pause = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(false))
    };
    let resume = {
        let autoplay = autoplay.clone();
        Callback::from(move |_: MouseEvent| autoplay.set(true))
    };

    let single_page = pager.pages() <= 1;

    html! {
        <div class="carousel" onmouseenter={pause} onmouseleave={resume}>
            <div class="carousel-grid">
                { TESTIMONIALS[pager.range(*current)].iter().enumerate().map(|(i, t)| html! {
                    <div
                        key={format!("{}-{}", *current, i)}
                        class="testimonial-card"
                        style={format!("animation-delay: {:.1}s;", i as f32 * 0.1)}
                    >
                        <blockquote>{format!("“{}”", t.quote)}</blockquote>
                        <div class="testimonial-author">
                            <div class="testimonial-name">{t.name}</div>
                            <div class="testimonial-role">{t.role}</div>
                        </div>
                    </div>
                }).collect::<Html>() }
            </div>
            <div class="carousel-controls">
                <button class="carousel-arrow" onclick={go(Pager::prev)} disabled={single_page} aria-label="Previous">{"‹"}</button>
                { (0..pager.pages()).map(|page| {
                    let current = current.clone();
                    html! {
                        <button
                            key={page}
                            class={classes!("carousel-dot", (page == *current).then(|| "active"))}
                            onclick={Callback::from(move |_: MouseEvent| current.set(page))}
                            aria-label={format!("Go to slide {}", page + 1)}
                        />
                    }
                }).collect::<Html>() }
                <button class="carousel-arrow" onclick={go(Pager::next)} disabled={single_page} aria-label="Next">{"›"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonials() -> Pager {
        Pager { total_items: TESTIMONIALS.len(), per_page: TESTIMONIALS_PER_PAGE }
    }

    #[test]
    fn six_testimonials_make_two_pages() {
        let pager = testimonials();
        assert_eq!(pager.pages(), 2);
        assert_eq!(pager.range(0), 0..3);
        assert_eq!(pager.range(1), 3..6);
    }

    #[test]
    fn paging_wraps_both_ways() {
        let pager = testimonials();
        assert_eq!(pager.next(0), 1);
        assert_eq!(pager.next(1), 0);
        assert_eq!(pager.prev(0), 1);
        assert_eq!(pager.prev(1), 0);
    }

    #[test]
    fn partial_last_page() {
        let pager = Pager { total_items: 7, per_page: 3 };
        assert_eq!(pager.pages(), 3);
        assert_eq!(pager.range(2), 6..7);
        assert_eq!(pager.range(5), 7..7);
        assert_eq!(pager.prev(0), 2);
    }

    #[test]
    fn empty_list_stays_on_first_page() {
        let pager = Pager { total_items: 0, per_page: 3 };
        assert_eq!(pager.pages(), 0);
        assert_eq!(pager.next(0), 0);
        assert_eq!(pager.prev(0), 0);
        assert_eq!(pager.range(0), 0..0);
    }
}
