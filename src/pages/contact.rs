use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const SUCCESS_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";
const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

#[derive(Clone, PartialEq)]
struct Notice {
    text: &'static str,
    is_error: bool,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let notice = use_state(|| None::<Notice>);

    // Scroll to top only on initial mount
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

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_phone = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let filled = !name.trim().is_empty() && !email.trim().is_empty() && !message.trim().is_empty();
            if filled {
                log::info!("Contact request from {}", *email);
                notice.set(Some(Notice { text: SUCCESS_MESSAGE, is_error: false }));
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
            } else {
                notice.set(Some(Notice { text: MISSING_FIELDS_MESSAGE, is_error: true }));
            }

            // Clear the notice after 5 seconds
            let notice_clone = notice.clone();
            spawn_local(async move {
                TimeoutFuture::new(5_000).await;
                notice_clone.set(None);
            });
        })
    };

    html! {
        <div class="contact-page">
            <section class="contact-hero">
                <h1>{"Start a conversation"}</h1>
                <p>{"Tell us a little about your portfolio and what you want from it. A member of the investment team replies within two working days."}</p>
            </section>

            <section class="contact-layout">
                <div class="contact-details">
                    <div class="detail-card">
                        <h3>{"Office"}</h3>
                        <p>{"MRG Capital Advisors LLP"}<br />{"12th Floor, Maker Chambers IV"}<br />{"Nariman Point, Mumbai 400021"}</p>
                    </div>
                    <div class="detail-card">
                        <h3>{"Reach us"}</h3>
                        <p>{"hello@mrgcapital.in"}<br />{"+91 22 4002 1900"}</p>
                        <p class="detail-note">{"Monday to Friday, 9:30 to 18:00 IST"}</p>
                    </div>
                    <div class="detail-card">
                        <h3>{"Registration"}</h3>
                        <p>{"SEBI Portfolio Manager"}<br />{"Registration No. INP000007431"}</p>
                    </div>
                </div>

                <form class="contact-form" onsubmit={on_submit}>
                    <label>
                        {"Name *"}
                        <input type="text" value={(*name).clone()} oninput={on_name} placeholder="Your full name" />
                    </label>
                    <label>
                        {"Email *"}
                        <input type="text" value={(*email).clone()} oninput={on_email} placeholder="you@example.com" />
                    </label>
                    <label>
                        {"Phone"}
                        <input type="text" value={(*phone).clone()} oninput={on_phone} placeholder="Optional" />
                    </label>
                    <label>
                        {"Message *"}
                        <textarea
                            rows="5"
                            value={(*message).clone()}
                            oninput={on_message}
                            placeholder="Current portfolio size, goals, anything you want us to know"
                        />
                    </label>
                    {
                        match &*notice {
                            Some(notice) => html! {
                                <div class={classes!("form-notice", notice.is_error.then(|| "error"))}>
                                    { notice.text }
                                </div>
                            },
                            None => html! {},
                        }
                    }
                    <button type="submit" class="contact-submit">{"Send Message"}</button>
                </form>
            </section>

            <style>
                {r#"
                .contact-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .contact-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .contact-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .contact-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 560px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .contact-layout {
                    display: grid;
                    grid-template-columns: 300px 1fr;
                    gap: 2rem;
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 3rem 2rem 6rem;
                }
                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 1.2rem;
                }
                .detail-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 14px;
                    padding: 1.5rem;
                }
                .detail-card h3 {
                    margin: 0 0 0.6rem;
                    color: #98D8C8;
                    font-size: 1rem;
                }
                .detail-card p {
                    margin: 0;
                    color: rgba(245, 247, 250, 0.75);
                    line-height: 1.6;
                    font-size: 0.9rem;
                }
                .detail-note {
                    margin-top: 0.6rem !important;
                    font-size: 0.8rem !important;
                    color: rgba(245, 247, 250, 0.5) !important;
                }
                .contact-form {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 16px;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.2rem;
                }
                .contact-form label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-size: 0.85rem;
                    color: #98D8C8;
                }
                .contact-form input,
                .contact-form textarea {
                    background: rgba(10, 37, 64, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.18);
                    border-radius: 8px;
                    padding: 0.7rem 0.9rem;
                    color: #F5F7FA;
                    font-size: 0.95rem;
                }
                .contact-form input:focus,
                .contact-form textarea:focus {
                    outline: none;
                    border-color: #C0A080;
                }
                .contact-form textarea {
                    resize: vertical;
                }
                .form-notice {
                    background: rgba(152, 216, 200, 0.12);
                    border: 1px solid rgba(152, 216, 200, 0.5);
                    border-radius: 8px;
                    color: #98D8C8;
                    padding: 0.8rem 1rem;
                    font-size: 0.9rem;
                }
                .form-notice.error {
                    background: rgba(232, 141, 141, 0.12);
                    border-color: rgba(232, 141, 141, 0.5);
                    color: #E88D8D;
                }
                .contact-submit {
                    background: linear-gradient(135deg, #C0A080, #a8875f);
                    border: none;
                    border-radius: 10px;
                    color: #0A2540;
                    font-weight: 600;
                    font-size: 1rem;
                    padding: 0.9rem;
                    cursor: pointer;
                }
                @media (max-width: 860px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                    .contact-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
