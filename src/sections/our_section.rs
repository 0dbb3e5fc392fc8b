use log::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_effect_once;

use crate::api::{self, OurSectionItem};
use crate::reveal::tracker::RevealedSet;

#[derive(Properties, PartialEq)]
pub struct OurSectionProps {
    pub revealed: RevealedSet,
}

/// Content managed from the admin dashboard. The item grid is inserted after
/// the request resolves, so the reveal tracker only finds it on a rescan.
#[function_component(OurSection)]
pub fn our_section(props: &OurSectionProps) -> Html {
    let revealed = &props.revealed;
    let items = use_state(Vec::<OurSectionItem>::new);
    let loading = use_state(|| true);

    {
        let items = items.clone();
        let loading = loading.clone();
        use_effect_once(move || {
            spawn_local(async move {
                match api::fetch_our_section().await {
                    Ok(fetched) => items.set(fetched),
                    Err(err) => {
                        error!("Error fetching our section items: {}", err);
                        items.set(Vec::new());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    html! {
        <section id="ourSection" class="our-section">
            <style>
                {r#"
                .our-section { padding: 5rem 1rem; background: linear-gradient(to bottom, #fff, #f9fafb); }
                .our-header { text-align: center; margin-bottom: 4rem; }
                .our-header h2 { font-size: 2.5rem; font-weight: 700; }
                .our-header h2 .accent { color: #003366; margin-left: 0.5rem; }
                .our-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .our-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .our-card:hover { transform: translateY(-0.5rem); box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                .our-icon {
                    width: 4rem;
                    height: 4rem;
                    background: #003366;
                    color: #fff;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.9rem;
                    margin-bottom: 1.5rem;
                }
                .our-image { width: 100%; height: 12rem; object-fit: cover; border-radius: 0.5rem; margin-bottom: 1.5rem; }
                .our-empty, .our-loading { text-align: center; color: #6b7280; padding: 3rem 0; }
                "#}
            </style>
            if *loading {
                <p class="our-loading">{"Loading..."}</p>
            } else {
                <>
                <div
                    class={classes!("our-header", "reveal", "reveal-up", revealed.class_for("our-header"))}
                    data-reveal-id="our-header"
                >
                    <span class="pill">{"Our"}</span>
                    <h2>{"Our"}<span class="accent">{"Excellence"}</span></h2>
                    <p>{"Discover what makes us unique and why thousands trust us for their learning journey."}</p>
                </div>
                if items.is_empty() {
                    <p class="our-empty">
                        {"No items to display. Items will appear here once added from the admin dashboard."}
                    </p>
                } else {
                    <div
                        class={classes!("our-grid", "reveal", "reveal-up", revealed.class_for("our-items"))}
                        data-reveal-id="our-items"
                    >
                        { items.iter().enumerate().map(|(index, item)| html! {
                            <OurCard key={item.id.clone()} item={item.clone()} index={index} />
                        }).collect::<Html>() }
                    </div>
                }
                </>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct OurCardProps {
    item: OurSectionItem,
    index: usize,
}

#[function_component(OurCard)]
fn our_card(props: &OurCardProps) -> Html {
    let item = &props.item;
    let visual = match (&item.icon, &item.image) {
        (Some(icon), _) => html! { <div class="our-icon">{icon.clone()}</div> },
        (None, Some(image)) => html! { <img class="our-image" src={image.clone()} alt={item.title.clone()} loading="lazy" /> },
        (None, None) => html! {},
    };

    html! {
        <div class="our-card" style={format!("animation-delay: {:.1}s;", props.index as f32 * 0.1)}>
            {visual}
            <h3>{item.title.clone()}</h3>
            if !item.description.is_empty() {
                <p>{item.description.clone()}</p>
            }
            if let Some(category) = &item.category {
                <span class="our-category">{category.clone()}</span>
            }
        </div>
    }
}
