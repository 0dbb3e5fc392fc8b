use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::{self, EnrollmentKind, EnrollmentRequest, SubmitStatus};
use crate::reveal::tracker::RevealedSet;

pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub badge: &'static str,
    pub price: &'static str,
    pub tag: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
    pub delay: &'static str,
    pub animation: &'static str,
}

pub const COURSES: &[Course] = &[
    Course {
        id: "course-az104",
        title: "Azure Administrator",
        subtitle: "Azure Administrator (AZ-104)",
        description: "Master core Azure services, security, and infrastructure management with hands-on experience.",
        image: "/assets/course-1.jpg",
        badge: "AZ-104",
        price: "₹20,000",
        tag: "Certification Track",
        popular: false,
        features: &["Identity and Governance", "Storage Solutions", "Virtual Networking", "Virtual Machines"],
        delay: "0.1s",
        animation: "reveal-left",
    },
    Course {
        id: "course-az305",
        title: "Azure Architect",
        subtitle: "Azure Architect (AZ-305)",
        description: "Design scalable, secure, and reliable cloud solutions with advanced architectural patterns.",
        image: "/assets/course-2.jpg",
        badge: "AZ-305",
        price: "₹30,000",
        tag: "Advanced Level",
        popular: true,
        features: &["Solution Architecture", "Security Design", "Infrastructure Strategy", "Data Platform Solutions"],
        delay: "0.2s",
        animation: "reveal-up",
    },
    Course {
        id: "course-devops",
        title: "Azure DevOps",
        subtitle: "Azure DevOps",
        description: "Implement modern DevOps practices using Azure tools and automation workflows.",
        image: "/assets/course-3.jpg",
        badge: "DevOps",
        price: "₹25,000",
        tag: "Practical Focus",
        popular: false,
        features: &["CI/CD Pipelines", "Source Control", "Infrastructure as Code", "Monitoring and Feedback"],
        delay: "0.3s",
        animation: "reveal-right",
    },
];

pub const BUNDLE_COURSE: &str = "Complete Bundle";
pub const BUNDLE_PRICE: &str = "₹65,000";
pub const BUNDLE_FULL_PRICE: &str = "₹75,000";
pub const BUNDLE_SAVINGS: &str = "₹10,000";

const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("beginner", "Beginner (0-1 years)"),
    ("intermediate", "Intermediate (1-3 years)"),
    ("experienced", "Experienced (3+ years)"),
    ("student", "Student"),
];

#[derive(Properties, PartialEq)]
pub struct CoursesProps {
    pub revealed: RevealedSet,
    pub on_navigate: Callback<String>,
}

#[function_component(CoursesSection)]
pub fn courses_section(props: &CoursesProps) -> Html {
    let CoursesProps { revealed, on_navigate } = props;
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };
    let enroll = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit("contact".to_string()))
    };

    html! {
        <>
            if *modal_open {
                <BundleModal on_close={close_modal} />
            }
            <section id="courses" class="courses">
                <style>
                    {r#"
                    .courses {
                        padding: 5rem 1rem;
                        background: #f9fafb;
                    }
                    .courses-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .courses-header h2 {
                        font-size: 3rem;
                        font-weight: 700;
                    }
                    .courses-header h2 .accent { color: #003366; margin-left: 0.75rem; }
                    .courses-header p { color: #4b5563; font-size: 1.25rem; max-width: 56rem; margin: 0 auto; }
                    .course-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }
                    .course-card {
                        background: #fff;
                        border: 1px solid #e5e7eb;
                        border-radius: 1rem;
                        overflow: hidden;
                        display: flex;
                        flex-direction: column;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                    }
                    .course-image { position: relative; height: 12rem; overflow: hidden; }
                    .course-image img { width: 100%; height: 100%; object-fit: cover; }
                    .course-badge {
                        position: absolute;
                        bottom: 1rem;
                        left: 1rem;
                        background: rgba(255, 255, 255, 0.9);
                        color: #003366;
                        font-weight: 700;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                    }
                    .course-popular {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: #eab308;
                        color: #fff;
                        font-size: 0.75rem;
                        font-weight: 700;
                        padding: 0.25rem 0.5rem;
                        border-radius: 9999px;
                    }
                    .course-body { padding: 0.5rem 1.25rem 1rem; display: flex; flex-direction: column; flex-grow: 1; }
                    .course-body ul { list-style: none; padding: 0; flex-grow: 1; }
                    .course-body li::before { content: "• "; color: #003366; }
                    .course-footer { border-top: 1px solid #f3f4f6; padding-top: 0.75rem; }
                    .course-price { font-size: 1.9rem; font-weight: 700; color: #003366; }
                    .course-tag { font-size: 0.85rem; color: #6b7280; background: #f3f4f6; padding: 0.25rem 0.75rem; border-radius: 9999px; }
                    .bundle-offer {
                        margin: 4rem auto 0;
                        max-width: 56rem;
                        background: #003366;
                        color: #fff;
                        text-align: center;
                        border-radius: 0.75rem;
                        padding: 2rem;
                    }
                    .bundle-label { display: inline-block; background: #eab308; color: #003366; font-weight: 700; padding: 0.5rem 1rem; border-radius: 9999px; }
                    .bundle-prices { display: flex; justify-content: center; align-items: center; gap: 1.5rem; margin: 1.5rem 0; }
                    .bundle-prices .was { text-decoration: line-through; opacity: 0.75; }
                    .bundle-prices .now { font-size: 2.25rem; font-weight: 700; color: #facc15; }
                    .bundle-prices .save { background: #22c55e; padding: 0.25rem 0.75rem; border-radius: 0.5rem; font-weight: 700; }
                    .modal-backdrop {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                        z-index: 50;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 1rem;
                    }
                    .modal { background: #fff; border-radius: 0.75rem; max-width: 24rem; width: 100%; padding: 1.5rem; }
                    .modal-header { display: flex; justify-content: space-between; align-items: center; }
                    .modal form { display: grid; gap: 0.75rem; }
                    .modal-actions { display: flex; gap: 0.75rem; padding-top: 0.75rem; }
                    .modal-actions button { flex: 1; }
                    "#}
                </style>
                <div
                    class={classes!("courses-header", "reveal", "reveal-up", revealed.class_for("programs-header"))}
                    data-reveal-id="programs-header"
                >
                    <h2>{"Our"}<span class="accent">{"Courses"}</span></h2>
                    <p>
                        {"Master Microsoft Azure with comprehensive certification courses designed by industry experts."}
                        <br />
                        <strong>{"Get certified, get hired, get ahead."}</strong>
                    </p>
                </div>

                <div class="course-grid">
                    { COURSES.iter().enumerate().map(|(index, course)| html! {
                        <CourseCard
                            key={course.id}
                            index={index}
                            revealed={revealed.contains(course.id)}
                            on_enroll={enroll.clone()}
                        />
                    }).collect::<Html>() }
                </div>

                <div
                    class={classes!("bundle-offer", "reveal", "reveal-scale", revealed.class_for("bundle-offer"))}
                    data-reveal-id="bundle-offer"
                >
                    <div class="bundle-label">{"🎯 BUNDLE OFFER"}</div>
                    <h3>{"Complete Azure Certification Bundle"}</h3>
                    <p>{"Get all three courses together and save money"}</p>
                    <div class="bundle-prices">
                        <span class="was">{BUNDLE_FULL_PRICE}</span>
                        <span class="now">{BUNDLE_PRICE}</span>
                        <span class="save">{format!("Save {}", BUNDLE_SAVINGS)}</span>
                    </div>
                    <button class="btn-light" onclick={open_modal}>{"Get Bundle Now"}</button>
                </div>
            </section>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct CourseCardProps {
    index: usize,
    revealed: bool,
    on_enroll: Callback<MouseEvent>,
}

#[function_component(CourseCard)]
fn course_card(props: &CourseCardProps) -> Html {
    let Some(course) = COURSES.get(props.index) else {
        return html! {};
    };

    html! {
        <div
            class={classes!("course-card", "reveal", course.animation, props.revealed.then(|| "revealed"))}
            data-reveal-id={course.id}
            style={format!("transition-delay: {};", course.delay)}
        >
            <div class="course-image">
                <img src={course.image} alt={format!("{} Course", course.title)} loading="lazy" />
                <div class="course-badge">{course.badge}</div>
                if course.popular {
                    <div class="course-popular">{"POPULAR"}</div>
                }
            </div>
            <div class="course-body">
                <h3 title={course.subtitle}>{course.title}</h3>
                <p>{course.description}</p>
                <ul>
                    { course.features.iter().map(|feature| html! { <li>{*feature}</li> }).collect::<Html>() }
                </ul>
                <div class="course-footer">
                    <div class="course-price">{course.price}</div>
                    <span class="course-tag">{course.tag}</span>
                    <button class="btn-primary full-width" onclick={props.on_enroll.clone()}>{"Enroll Now"}</button>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BundleModalProps {
    on_close: Callback<()>,
}

#[function_component(BundleModal)]
fn bundle_modal(props: &BundleModalProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let experience = use_state(String::new);
    let is_submitting = use_state(|| false);
    let status = use_state(|| None::<SubmitStatus>);

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_experience = {
        let experience = experience.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            experience.set(select.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let experience = experience.clone();
        let is_submitting = is_submitting.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let message = if experience.is_empty() {
                String::new()
            } else {
                format!("Experience level: {}", *experience)
            };
            let request = EnrollmentRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                course: BUNDLE_COURSE.to_string(),
                message,
                kind: EnrollmentKind::Bundle,
            };
            let is_submitting = is_submitting.clone();
            let status = status.clone();
            is_submitting.set(true);
            status.set(None);
            spawn_local(async move {
                let result = api::submit_enrollment(&request).await;
                if let Err(err) = &result {
                    gloo_console::error!(format!("Bundle enrollment failed: {}", err));
                }
                status.set(Some(SubmitStatus::from_result(result)));
                is_submitting.set(false);
            });
        })
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>{"Azure Bundle Enrollment"}</h3>
                    <button class="modal-close" onclick={close.clone()} aria-label="Close">{"✕"}</button>
                </div>
                <p class="modal-price">
                    {format!("Bundle Price: {}", BUNDLE_PRICE)}
                    <br />
                    <span class="save-note">{format!("Save {}", BUNDLE_SAVINGS)}</span>
                </p>
                {
                    if let Some(SubmitStatus { success: true, message }) = &*status {
                        html! { <div class="form-status success">{message.clone()}</div> }
                    } else {
                        html! {
                            <form onsubmit={onsubmit}>
                                <input type="text" required=true placeholder="Full Name *"
                                    value={(*name).clone()} oninput={text_input(&name)} />
                                <input type="email" required=true placeholder="Email Address *"
                                    value={(*email).clone()} oninput={text_input(&email)} />
                                <input type="tel" required=true placeholder="Phone Number *"
                                    value={(*phone).clone()} oninput={text_input(&phone)} />
                                <select onchange={on_experience}>
                                    <option value="" selected={experience.is_empty()}>{"Experience Level"}</option>
                                    { EXPERIENCE_LEVELS.iter().map(|(value, label)| html! {
                                        <option value={*value} selected={*experience == *value}>{*label}</option>
                                    }).collect::<Html>() }
                                </select>
                                if let Some(SubmitStatus { success: false, message }) = &*status {
                                    <div class="form-status error">{message.clone()}</div>
                                }
                                <div class="modal-actions">
                                    <button type="button" class="btn-outline" onclick={close}>{"Cancel"}</button>
                                    <button type="submit" class="btn-primary" disabled={*is_submitting}>
                                        { if *is_submitting { "Sending..." } else { "Enroll Now" } }
                                    </button>
                                </div>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}
