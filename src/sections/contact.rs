use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::api::{self, EnrollmentKind, EnrollmentRequest, SubmitStatus};
use crate::reveal::tracker::RevealedSet;

const COURSE_OPTIONS: &[(&str, &str)] = &[
    ("AZ-104", "AZ-104 Administrator"),
    ("AZ-305", "AZ-305 Architect"),
    ("Azure DevOps", "Azure DevOps"),
    ("Complete Bundle", "Complete Bundle"),
];

struct Batch {
    icon: &'static str,
    title: &'static str,
    days: &'static str,
    hours: &'static str,
    status: &'static str,
    status_class: &'static str,
}

const BATCHES: &[Batch] = &[
    Batch {
        icon: "📅",
        title: "Weekend Batch",
        days: "Sat & Sun",
        hours: "11 AM - 1 PM",
        status: "Started: Jan 11",
        status_class: "batch-started",
    },
    Batch {
        icon: "🗓️",
        title: "Weekday Batch",
        days: "Mon - Fri",
        hours: "7 PM - 9 PM",
        status: "Starting: Mar 5",
        status_class: "batch-upcoming",
    },
    Batch {
        icon: "⚡",
        title: "Fast Track",
        days: "Mon - Fri",
        hours: "10 AM - 2 PM",
        status: "Starting: Mar 15",
        status_class: "batch-fast",
    },
];

#[derive(Clone, Default, PartialEq)]
struct ContactForm {
    name: String,
    email: String,
    phone: String,
    course: String,
    message: String,
}

impl ContactForm {
    fn to_request(&self) -> EnrollmentRequest {
        EnrollmentRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            course: self.course.clone(),
            message: self.message.clone(),
            kind: EnrollmentKind::Contact,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub revealed: RevealedSet,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let revealed = &props.revealed;
    let form = use_state(ContactForm::default);
    let is_submitting = use_state(|| false);
    let status = use_state(|| None::<SubmitStatus>);

    let update = |apply: fn(&mut ContactForm, String)| {
        let form = form.clone();
        move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        }
    };

    let on_name = {
        let set = update(|f, v| f.name = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_email = {
        let set = update(|f, v| f.email = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_phone = {
        let set = update(|f, v| f.phone = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let on_course = {
        let set = update(|f, v| f.course = v);
        Callback::from(move |e: Event| set(e.target_unchecked_into::<HtmlSelectElement>().value()))
    };
    let on_message = {
        let set = update(|f, v| f.message = v);
        Callback::from(move |e: InputEvent| set(e.target_unchecked_into::<HtmlTextAreaElement>().value()))
    };

    let onsubmit = {
        let form = form.clone();
        let is_submitting = is_submitting.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            let request = form.to_request();
            let form = form.clone();
            let is_submitting = is_submitting.clone();
            let status = status.clone();
            is_submitting.set(true);
            status.set(None);
            spawn_local(async move {
                let result = api::submit_enrollment(&request).await;
                match &result {
                    Ok(resp) if resp.success => {
                        info!("Enrollment request sent for course {:?}", request.course);
                        form.set(ContactForm::default());
                    }
                    Ok(_) => {}
                    Err(err) => error!("Error submitting form: {}", err),
                }
                status.set(Some(SubmitStatus::from_result(result)));
                is_submitting.set(false);
            });
        })
    };

    html! {
        <section id="contact" class="contact">
            <style>
                {r#"
                .contact { padding: 3rem 1rem; background: #f9fafb; text-align: center; }
                .contact-inner { max-width: 42rem; margin: 0 auto; }
                .contact h2 { font-size: 1.9rem; font-weight: 700; }
                .contact h2 .accent { display: block; color: #003366; }
                .contact-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 0.5rem;
                    padding: 1.5rem;
                    margin-bottom: 1.5rem;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                }
                .contact-card form { display: grid; gap: 0.75rem; }
                .contact-card input, .contact-card select, .contact-card textarea,
                .modal input, .modal select {
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font-size: 0.9rem;
                    box-sizing: border-box;
                }
                .contact-card textarea { resize: none; }
                .form-status { margin-top: 1rem; padding: 0.75rem; border-radius: 0.5rem; font-size: 0.9rem; }
                .form-status.success { background: #dcfce7; color: #15803d; border: 1px solid #bbf7d0; }
                .form-status.error { background: #fee2e2; color: #b91c1c; border: 1px solid #fecaca; }
                .schedule-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 0.75rem; }
                .batch { background: #fff; border: 1px solid #e5e7eb; border-radius: 0.5rem; padding: 0.75rem; font-size: 0.8rem; }
                .batch-hours { color: #003366; font-weight: 700; }
                .batch-status { display: inline-block; padding: 0.25rem 0.5rem; border-radius: 9999px; }
                .batch-started { background: #dcfce7; color: #15803d; }
                .batch-upcoming { background: #dbeafe; color: #1d4ed8; }
                .batch-fast { background: #fef9c3; color: #a16207; }
                "#}
            </style>
            <div class="contact-inner">
                <div
                    class={classes!("reveal", "reveal-up", revealed.class_for("contact-header"))}
                    data-reveal-id="contact-header"
                >
                    <span class="pill">{"Get In Touch"}</span>
                    <h2>{"Ready to Start Your"}<span class="accent">{"Azure Journey?"}</span></h2>
                    <p>{"Join professionals advancing their careers with Azure expertise"}</p>
                </div>

                <div
                    class={classes!("contact-card", "reveal", "reveal-scale", revealed.class_for("contact-form"))}
                    data-reveal-id="contact-form"
                >
                    <h3>{"Contact Us"}</h3>
                    <form onsubmit={onsubmit}>
                        <input type="text" name="name" placeholder="Your Name" required=true
                            value={form.name.clone()} oninput={on_name} />
                        <input type="email" name="email" placeholder="Email Address" required=true
                            value={form.email.clone()} oninput={on_email} />
                        <input type="tel" name="phone" placeholder="Phone Number" required=true
                            value={form.phone.clone()} oninput={on_phone} />
                        <select name="course" onchange={on_course}>
                            <option value="" selected={form.course.is_empty()}>{"Course Interest"}</option>
                            { COURSE_OPTIONS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={form.course == *value}>{*label}</option>
                            }).collect::<Html>() }
                        </select>
                        <textarea name="message" rows="2" placeholder="Your Azure learning goals..."
                            value={form.message.clone()} oninput={on_message} />
                        <button type="submit" class="btn-primary full-width" disabled={*is_submitting}>
                            { if *is_submitting { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                    if let Some(status) = &*status {
                        <div class={classes!("form-status", if status.success { "success" } else { "error" })}>
                            {status.message.clone()}
                        </div>
                    }
                </div>

                <div
                    class={classes!("reveal", "reveal-up", revealed.class_for("training-schedule"))}
                    data-reveal-id="training-schedule"
                >
                    <h3>{"Training Schedule"}</h3>
                    <div class="schedule-grid">
                        { BATCHES.iter().map(|batch| html! {
                            <div class="batch">
                                <div class="batch-icon">{batch.icon}</div>
                                <h4>{batch.title}</h4>
                                <p>{batch.days}</p>
                                <p class="batch-hours">{batch.hours}</p>
                                <span class={classes!("batch-status", batch.status_class)}>{batch.status}</span>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_trims_identity_fields_and_tags_contact() {
        let form = ContactForm {
            name: "  Amit Kumar ".into(),
            email: " amit@example.com".into(),
            phone: "9970804242 ".into(),
            course: "Azure DevOps".into(),
            message: " CI/CD focus ".into(),
        };
        let request = form.to_request();
        assert_eq!(request.name, "Amit Kumar");
        assert_eq!(request.email, "amit@example.com");
        assert_eq!(request.phone, "9970804242");
        assert_eq!(request.message, " CI/CD focus ");
        assert_eq!(request.kind, EnrollmentKind::Contact);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn empty_form_fails_validation() {
        assert!(ContactForm::default().to_request().validate().is_err());
    }
}
