use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: &'static str,
    pub open: bool,
    pub on_toggle: Callback<MouseEvent>,
    pub children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span>{ props.question }</span>
                <span class="faq-arrow">{ if props.open { "−" } else { "+" } }</span>
            </button>
            {
                if props.open {
                    html! { <div class="faq-answer">{ for props.children.iter() }</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    // One question open at a time; opening another closes the previous one.
    let open = use_state(|| None::<usize>);

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

    let toggle = |index: usize| {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| {
            open.set(if *open == Some(index) { None } else { Some(index) });
        })
    };

    let faqs: Vec<(&'static str, Html)> = vec![
        (
            "What is the minimum investment?",
            html! {
                <p>{"₹50 lakhs, the regulatory minimum for portfolio management services in India. There is no upper limit, and you can add to the account in any amount once it is open."}</p>
            },
        ),
        (
            "How is MRG Capital regulated?",
            html! {
                <p>{"We are registered with SEBI as a portfolio manager. Client assets sit with an independent custodian, the books are audited annually, and we file monthly reports with the regulator."}</p>
            },
        ),
        (
            "What fees will I pay?",
            html! {
                <p>
                    {"A 1% fixed fee on assets and a 20% performance fee on returns above a 10% hurdle, with a high-water mark. The "}
                    <Link<Route> to={Route::Fees}>{"fees page"}</Link<Route>>
                    {" has a calculator that shows the full breakdown for your numbers."}
                </p>
            },
        ),
        (
            "Is there a lock-in?",
            html! {
                <p>{"No lock-in. Withdrawals within the first twelve months carry a 1% exit load; after that, exits are free. Most redemptions settle within seven working days."}</p>
            },
        ),
        (
            "Who actually holds my shares?",
            html! {
                <p>{"You do. Securities are held in a demat account in your own name with an independent custodian. We operate the account under a limited power of attorney that only permits trades and fee debits."}</p>
            },
        ),
        (
            "How often will I hear from you?",
            html! {
                <p>{"Monthly statements from the custodian, a quarterly letter from the investment team, and a yearly review meeting. You can see your portfolio online at any time."}</p>
            },
        ),
        (
            "What returns should I expect?",
            html! {
                <p>{"We do not promise returns, and you should be wary of anyone who does. Our goal is to beat the Nifty 50 TRI by a meaningful margin over a full cycle, accepting that we will trail it in some years."}</p>
            },
        ),
        (
            "How do I get started?",
            html! {
                <p>{"KYC, a signed PMS agreement, and funding the account. The paperwork usually takes under two weeks. Start with a conversation through the contact page and we will walk you through it."}</p>
            },
        ),
    ];

    html! {
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently asked questions"}</h1>
                <p>{"The questions every prospective client asks, answered the way we answer them in person."}</p>
            </section>
            <section class="faq-list">
                {
                    for faqs.into_iter().enumerate().map(|(index, (question, answer))| {
                        html! {
                            <FaqItem
                                question={question}
                                open={*open == Some(index)}
                                on_toggle={toggle(index)}
                            >
                                { answer }
                            </FaqItem>
                        }
                    })
                }
            </section>
            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .faq-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .faq-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .faq-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 560px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .faq-list {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 3rem 2rem 6rem;
                }
                .faq-item {
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .faq-item.open {
                    border-color: rgba(192, 160, 128, 0.5);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: none;
                    color: #F5F7FA;
                    font-size: 1rem;
                    padding: 1.1rem 1.4rem;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-arrow {
                    color: #C0A080;
                    font-size: 1.2rem;
                    flex-shrink: 0;
                }
                .faq-answer {
                    padding: 0.2rem 1.4rem 1.2rem;
                    color: rgba(245, 247, 250, 0.75);
                    line-height: 1.7;
                }
                .faq-answer a {
                    color: #98D8C8;
                }
                @media (max-width: 768px) {
                    .faq-hero h1 {
                        font-size: 2.2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
