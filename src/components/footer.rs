use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::components::Link;

use crate::testimonials::validate::is_valid_email;
use crate::Route;

const SUBSCRIBED_MESSAGE: &str = "Successfully subscribed to our newsletter!";
const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

#[derive(Clone, PartialEq)]
struct Notice {
    text: &'static str,
    is_error: bool,
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let notice = use_state(|| None::<Notice>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_subscribe = {
        let email = email.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if is_valid_email(email.trim()) {
                log::info!("Newsletter signup: {}", email.trim());
                notice.set(Some(Notice { text: SUBSCRIBED_MESSAGE, is_error: false }));
                email.set(String::new());
            } else {
                notice.set(Some(Notice { text: INVALID_EMAIL_MESSAGE, is_error: true }));
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
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-brand">
                    <span class="footer-logo">{"MRG Capital"}</span>
                    <p>{"Discretionary portfolio management for Indian investors who think in decades, not quarters."}</p>
                </div>
                <div class="footer-col">
                    <h4>{"Invest"}</h4>
                    <Link<Route> to={Route::Strategies}>{"Strategies"}</Link<Route>>
                    <Link<Route> to={Route::Performance}>{"Performance"}</Link<Route>>
                    <Link<Route> to={Route::Fees}>{"Fee Calculator"}</Link<Route>>
                </div>
                <div class="footer-col">
                    <h4>{"Firm"}</h4>
                    <Link<Route> to={Route::About}>{"About Us"}</Link<Route>>
                    <Link<Route> to={Route::Blog}>{"Insights"}</Link<Route>>
                    <Link<Route> to={Route::Faq}>{"FAQ"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-col footer-newsletter">
                    <h4>{"Market letter"}</h4>
                    <p>{"One email a month. Positioning, performance, and what we are reading."}</p>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input
                            type="text"
                            value={(*email).clone()}
                            oninput={on_email}
                            placeholder="you@example.com"
                        />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                    {
                        match &*notice {
                            Some(notice) => html! {
                                <div class={classes!("newsletter-notice", notice.is_error.then(|| "error"))}>
                                    { notice.text }
                                </div>
                            },
                            None => html! {},
                        }
                    }
                </div>
            </div>
            <div class="footer-legal">
                <p>{"MRG Capital Advisors LLP is registered with SEBI as a Portfolio Manager, Registration No. INP000007431. Investments in securities are subject to market risks. Past performance is not indicative of future returns."}</p>
                <p class="footer-copy">{"© 2024 MRG Capital Advisors LLP. All rights reserved."}</p>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: #071B30;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding: 4rem 2rem 2rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr 2fr;
                    gap: 2.5rem;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .footer-logo {
                    font-size: 1.3rem;
                    font-weight: 700;
                    color: #C0A080;
                }
                .footer-brand p {
                    color: rgba(245, 247, 250, 0.6);
                    line-height: 1.6;
                    font-size: 0.9rem;
                    margin-top: 0.8rem;
                }
                .footer-col {
                    display: flex;
                    flex-direction: column;
                    gap: 0.6rem;
                }
                .footer-col h4 {
                    margin: 0 0 0.4rem;
                    color: #98D8C8;
                    font-size: 0.95rem;
                }
                .footer-col a {
                    color: rgba(245, 247, 250, 0.7);
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .footer-col a:hover {
                    color: #C0A080;
                }
                .footer-newsletter p {
                    margin: 0;
                    color: rgba(245, 247, 250, 0.6);
                    font-size: 0.85rem;
                    line-height: 1.5;
                }
                .newsletter-form {
                    display: flex;
                    gap: 0.5rem;
                    margin-top: 0.4rem;
                }
                .newsletter-form input {
                    flex: 1;
                    background: rgba(10, 37, 64, 0.8);
                    border: 1px solid rgba(255, 255, 255, 0.18);
                    border-radius: 8px;
                    padding: 0.6rem 0.8rem;
                    color: #F5F7FA;
                    font-size: 0.9rem;
                }
                .newsletter-form input:focus {
                    outline: none;
                    border-color: #C0A080;
                }
                .newsletter-form button {
                    background: #C0A080;
                    border: none;
                    border-radius: 8px;
                    color: #0A2540;
                    font-weight: 600;
                    padding: 0.6rem 1.1rem;
                    cursor: pointer;
                }
                .newsletter-notice {
                    font-size: 0.85rem;
                    color: #98D8C8;
                }
                .newsletter-notice.error {
                    color: #E88D8D;
                }
                .footer-legal {
                    max-width: 1200px;
                    margin: 3rem auto 0;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    padding-top: 1.5rem;
                }
                .footer-legal p {
                    color: rgba(245, 247, 250, 0.45);
                    font-size: 0.78rem;
                    line-height: 1.6;
                    margin: 0 0 0.6rem;
                }
                .footer-copy {
                    color: rgba(245, 247, 250, 0.35) !important;
                }
                @media (max-width: 860px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                        gap: 2rem;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
