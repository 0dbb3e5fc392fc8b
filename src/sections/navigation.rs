use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("courses", "Courses"),
    ("whyUtKloud", "Why UT-Kloud"),
    ("contact", "Contact"),
];

/// Nav bar height added to the scroll position before matching sections.
const NAV_OFFSET: f64 = 100.0;

/// First section whose `[top, top + height)` span holds `scroll_y + NAV_OFFSET`.
fn active_section<'a>(scroll_y: f64, bounds: &[(&'a str, f64, f64)]) -> Option<&'a str> {
    let position = scroll_y + NAV_OFFSET;
    bounds
        .iter()
        .find(|(_, top, height)| position >= *top && position < top + height)
        .map(|(id, _, _)| *id)
}

fn section_bounds(window: &web_sys::Window) -> Vec<(&'static str, f64, f64)> {
    let Some(document) = window.document() else {
        return Vec::new();
    };
    SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some((*id, element.offset_top() as f64, element.offset_height() as f64))
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let active = use_state(|| "home");

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let on_scroll = move || {
                    let Some(window) = web_sys::window() else {
                        return;
                    };
                    let Ok(scroll_y) = window.scroll_y() else {
                        return;
                    };
                    is_scrolled.set(scroll_y > 10.0);
                    if let Some(id) = active_section(scroll_y, &section_bounds(&window)) {
                        active.set(id);
                    }
                };
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) => {
                        on_scroll();
                        let callback = Closure::<dyn Fn()>::new(on_scroll);
                        if let Err(err) = window
                            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        {
                            warn!("Failed to attach scroll listener: {:?}", err);
                        }
                        Box::new(move || {
                            let _ = window
                                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
                        })
                    }
                    None => Box::new(|| ()),
                };
                destructor
            },
            (),
        );
    }

    let navigate = {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let on_navigate = on_navigate.clone();
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                on_navigate.emit(id.to_string());
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 40;
                    transition: all 0.3s;
                    background: transparent;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    border-bottom: 1px solid rgba(0, 51, 102, 0.2);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo { display: flex; align-items: center; gap: 0.75rem; }
                .logo-mark {
                    width: 3rem;
                    height: 3rem;
                    background: #003366;
                    color: #fff;
                    font-weight: 700;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .logo-name { font-weight: 700; font-size: 1.5rem; color: #003366; display: block; }
                .logo-tagline { font-size: 0.75rem; color: #4b5563; }
                .nav-links { display: flex; gap: 2rem; }
                .nav-link { background: none; border: none; color: #003366; font-weight: 500; cursor: pointer; font-size: 1rem; border-bottom: 2px solid transparent; }
                .nav-link.active { font-weight: 700; border-bottom-color: #003366; }
                .burger-menu { display: none; background: none; border: none; font-size: 1.5rem; color: #003366; cursor: pointer; }
                .mobile-menu { display: none; }
                @media (max-width: 768px) {
                    .nav-links, .nav-cta { display: none; }
                    .burger-menu { display: block; }
                    .mobile-menu {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1.5rem 1rem;
                        background: rgba(255, 255, 255, 0.95);
                        border-top: 1px solid rgba(0, 51, 102, 0.2);
                    }
                    .mobile-menu .nav-link { text-align: left; }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <div class="logo-mark">{"UT"}</div>
                    <div>
                        <span class="logo-name">{"UT-Kloud"}</span>
                        <span class="logo-tagline">{"Azure Cloud Training"}</span>
                    </div>
                </div>
                <div class="nav-links">
                    { SECTIONS.iter().map(|(id, label)| html! {
                        <button class={classes!("nav-link", (*active == *id).then(|| "active"))} onclick={navigate(*id)}>{*label}</button>
                    }).collect::<Html>() }
                </div>
                <button class="btn-primary nav-cta" onclick={navigate("contact")}>{"Enroll Now"}</button>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { SECTIONS.iter().map(|(id, label)| html! {
                        <button class={classes!("nav-link", (*active == *id).then(|| "active"))} onclick={navigate(*id)}>{*label}</button>
                    }).collect::<Html>() }
                    <button class="btn-primary full-width" onclick={navigate("contact")}>{"Enroll Now"}</button>
                </div>
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &[(&str, f64, f64)] = &[
        ("home", 0.0, 800.0),
        ("courses", 800.0, 1200.0),
        ("whyUtKloud", 2000.0, 900.0),
        ("contact", 3200.0, 700.0),
    ];

    #[test]
    fn top_of_page_is_home() {
        assert_eq!(active_section(0.0, PAGE), Some("home"));
    }

    #[test]
    fn offset_switches_before_section_top() {
        assert_eq!(active_section(699.0, PAGE), Some("home"));
        assert_eq!(active_section(700.0, PAGE), Some("courses"));
    }

    #[test]
    fn gap_between_sections_matches_nothing() {
        assert_eq!(active_section(3000.0, PAGE), None);
        assert_eq!(active_section(3100.0, PAGE), Some("contact"));
    }
}
