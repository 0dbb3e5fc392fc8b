use chrono::Datelike;
use yew::prelude::*;

use crate::sections::navigation::SECTIONS;

const ADDRESS: &str = "B2 105 Reva Complex, Near Ganga Trueno Business Centre, Viman Nagar, Pune 411014, India";
const SUPPORT_EMAIL: &str = "support@utkloud.in";
const PHONE_DISPLAY: &str = "+91 9970804242";
const PHONE_TEL: &str = "+919970804242";

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("https://www.linkedin.com/company/ut-kloud/", "Follow us on LinkedIn", "in"),
    ("https://www.youtube.com/@ut-kloud7140", "Subscribe to our YouTube channel", "▶"),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer { background: #003366; color: #bfdbfe; padding: 3rem 1rem; }
                .footer-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 3rem;
                }
                .footer-brand { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 1.5rem; }
                .footer-brand .logo-mark { background: #fff; color: #003366; width: 2.5rem; height: 2.5rem; }
                .footer-brand span { color: #fff; font-weight: 700; font-size: 1.5rem; }
                .footer-social { display: flex; gap: 1rem; }
                .footer-social a {
                    width: 3rem;
                    height: 3rem;
                    background: #004080;
                    color: #fff;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-decoration: none;
                    font-weight: 700;
                }
                .site-footer h4 { color: #fff; font-size: 1.1rem; margin-bottom: 1.5rem; }
                .site-footer ul { list-style: none; padding: 0; }
                .site-footer li { margin-bottom: 1rem; }
                .footer-link { background: none; border: none; color: inherit; cursor: pointer; font-size: 0.9rem; }
                .footer-link:hover, .site-footer a:hover { color: #fff; }
                .site-footer a { color: inherit; }
                .footer-bottom { border-top: 1px solid #004080; margin-top: 2rem; padding-top: 2rem; text-align: center; }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <div class="footer-brand">
                        <div class="logo-mark">{"UT"}</div>
                        <span>{"UT-Kloud"}</span>
                    </div>
                    <p>
                        {"Empowering professionals with world-class Azure cloud training. Master Microsoft Azure and advance your career with industry-leading certification courses."}
                    </p>
                    <div class="footer-social">
                        { SOCIAL_LINKS.iter().map(|(href, label, mark)| html! {
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label}>{*mark}</a>
                        }).collect::<Html>() }
                    </div>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        { SECTIONS.iter().map(|(id, label)| {
                            let on_navigate = props.on_navigate.clone();
                            let id = id.to_string();
                            html! {
                                <li>
                                    <button class="footer-link" onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(id.clone()))}>
                                        {*label}
                                    </button>
                                </li>
                            }
                        }).collect::<Html>() }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact Info"}</h4>
                    <p>{ADDRESS}</p>
                    <p><a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a></p>
                    <p><a href={format!("tel:{}", PHONE_TEL)}>{PHONE_DISPLAY}</a></p>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} UT-Kloud. All rights reserved. Empowering professionals for the cloud future.", year)}</p>
            </div>
        </footer>
    }
}
