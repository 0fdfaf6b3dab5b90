use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

const COUNT_DURATION_MS: f64 = 2000.0;
const COUNT_TICK_MS: u32 = 16;

/// Ease-out quartic: fast start, long settle. Matches the stat animation
/// the site has always had.
fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

struct Stat {
    label: &'static str,
    target: f64,
    decimals: bool,
    prefix: &'static str,
    suffix: &'static str,
}

const STATS: &[Stat] = &[
    Stat { label: "Assets under advice", target: 850.0, decimals: false, prefix: "₹", suffix: " Cr+" },
    Stat { label: "CAGR since inception", target: 18.64, decimals: true, prefix: "", suffix: "%" },
    Stat { label: "Families served", target: 450.0, decimals: false, prefix: "", suffix: "+" },
    Stat { label: "Years of track record", target: 5.0, decimals: false, prefix: "", suffix: "+" },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "MRG Capital rebuilt our family portfolio after years of scattered investments. Three years on, the discipline shows in every review meeting.",
        name: "Anjali Mehta",
        role: "Promoter family office, Ahmedabad",
    },
    Testimonial {
        quote: "What stood out was the honesty about drawdowns. They told us in advance how bad a correction could feel, and when 2022 came we were prepared.",
        name: "Vikram Rao",
        role: "Consultant surgeon, Bengaluru",
    },
    Testimonial {
        quote: "The quarterly letters alone are worth it. No jargon, no hiding behind benchmarks, just a clear account of what worked and what did not.",
        name: "Sunita Krishnan",
        role: "Retired banker, Chennai",
    },
    Testimonial {
        quote: "We moved from three advisors to one. The consolidated reporting and the single point of accountability changed how our family talks about money.",
        name: "Harsh Doshi",
        role: "Second-generation entrepreneur, Mumbai",
    },
];

fn next_slide(current: usize) -> usize {
    (current + 1) % TESTIMONIALS.len()
}

fn prev_slide(current: usize) -> usize {
    (current + TESTIMONIALS.len() - 1) % TESTIMONIALS.len()
}

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    pub target: f64,
    pub started: bool,
    #[prop_or_default]
    pub decimals: bool,
    #[prop_or_default]
    pub prefix: &'static str,
    #[prop_or_default]
    pub suffix: &'static str,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0.0_f64);

    {
        let value = value.clone();
        let target = props.target;
        use_effect_with_deps(
            move |started| {
                let interval_handle: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *started {
                    let handle = interval_handle.clone();
                    let mut elapsed = 0.0_f64;
                    let interval = Interval::new(COUNT_TICK_MS, move || {
                        elapsed += f64::from(COUNT_TICK_MS);
                        let progress = (elapsed / COUNT_DURATION_MS).min(1.0);
                        value.set(target * ease_out_quart(progress));
                        if progress >= 1.0 {
                            // stop ticking once the target is reached
                            if let Some(interval) = handle.borrow_mut().take() {
                                drop(interval);
                            }
                        }
                    });
                    *interval_handle.borrow_mut() = Some(interval);
                }
                move || {
                    if let Some(interval) = interval_handle.borrow_mut().take() {
                        drop(interval);
                    }
                }
            },
            props.started,
        );
    }

    let shown = if props.decimals {
        format!("{:.2}", *value)
    } else {
        format!("{}", value.floor() as i64)
    };

    html! {
        <div class="stat-value">
            { props.prefix }{ shown }{ props.suffix }
        </div>
    }
}

#[function_component(TestimonialCarousel)]
fn testimonial_carousel() -> Html {
    let active = use_state(|| 0_usize);

    // Autoplay; re-armed whenever the active card changes so the closure
    // always advances from the card actually on screen.
    {
        let active_clone = active.clone();
        use_effect_with_deps(
            move |current: &usize| {
                let current = *current;
                let interval = Interval::new(5000, move || {
                    active_clone.set(next_slide(current));
                });
                move || drop(interval)
            },
            *active,
        );
    }

    let prev = {
        let active = active.clone();
        Callback::from(move |_| active.set(prev_slide(*active)))
    };
    let next = {
        let active = active.clone();
        Callback::from(move |_| active.set(next_slide(*active)))
    };

    html! {
        <div class="carousel">
            <div class="carousel-track">
                {
                    for TESTIMONIALS.iter().enumerate().map(|(index, testimonial)| {
                        html! {
                            <figure class={classes!("carousel-card", (index == *active).then(|| "active"))}>
                                <blockquote>{ testimonial.quote }</blockquote>
                                <figcaption>
                                    <span class="carousel-name">{ testimonial.name }</span>
                                    <span class="carousel-role">{ testimonial.role }</span>
                                </figcaption>
                            </figure>
                        }
                    })
                }
            </div>
            <div class="carousel-controls">
                <button class="carousel-button" onclick={prev} aria-label="Previous testimonial">{"‹"}</button>
                <div class="carousel-dots">
                    {
                        for (0..TESTIMONIALS.len()).map(|index| {
                            let active = active.clone();
                            html! {
                                <button
                                    class={classes!("carousel-dot", (index == *active).then(|| "active"))}
                                    onclick={Callback::from(move |_| active.set(index))}
                                    aria-label={format!("Testimonial {}", index + 1)}
                                />
                            }
                        })
                    }
                </div>
                <button class="carousel-button" onclick={next} aria-label="Next testimonial">{"›"}</button>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let stats_started = use_state(|| false);
    let stats_ref = use_node_ref();

    // Start the counters the first time the stats band scrolls into view.
    {
        let stats_started = stats_started.clone();
        let stats_ref = stats_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let fired = Rc::new(Cell::new(false));

                let check = {
                    let window = window.clone();
                    move || {
                        if fired.get() {
                            return;
                        }
                        if let Some(section) = stats_ref.cast::<Element>() {
                            let viewport = window
                                .inner_height()
                                .ok()
                                .and_then(|v| v.as_f64())
                                .unwrap_or(0.0);
                            if section.get_bounding_client_rect().top() < viewport * 0.8 {
                                fired.set(true);
                                stats_started.set(true);
                            }
                        }
                    }
                };

                // the band can already be on screen at load
                check();

                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Wealth, managed like it is our own"}</h1>
                <p class="hero-sub">
                    {"MRG Capital is a SEBI-registered portfolio manager building concentrated, research-driven equity portfolios for Indian families and their businesses."}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Strategies} classes="hero-button primary">
                        {"Explore Strategies"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="hero-button ghost">
                        {"Talk to Us"}
                    </Link<Route>>
                </div>
            </section>

            <section class="stats-band" ref={stats_ref}>
                {
                    for STATS.iter().map(|stat| html! {
                        <div class="stat-card">
                            <StatCounter
                                target={stat.target}
                                decimals={stat.decimals}
                                prefix={stat.prefix}
                                suffix={stat.suffix}
                                started={*stats_started}
                            />
                            <span class="stat-label">{ stat.label }</span>
                        </div>
                    })
                }
            </section>

            <section class="pillars">
                <h2>{"Why families stay with us"}</h2>
                <div class="pillar-grid">
                    <div class="pillar-card">
                        <h3>{"Concentrated by conviction"}</h3>
                        <p>{"Twenty to twenty-five businesses we understand deeply, held through cycles rather than traded through headlines."}</p>
                    </div>
                    <div class="pillar-card">
                        <h3>{"Aligned fees"}</h3>
                        <p>{"A modest fixed fee and a performance fee only above a 10% hurdle. We earn when you earn."}</p>
                    </div>
                    <div class="pillar-card">
                        <h3>{"Direct access"}</h3>
                        <p>{"You speak to the people managing the money, not a relationship layer. Quarterly reviews, written in plain language."}</p>
                    </div>
                </div>
            </section>

            <section class="voices">
                <h2>{"What clients say"}</h2>
                <TestimonialCarousel />
                <div class="voices-cta">
                    <Link<Route> to={Route::ShareTestimonial} classes="hero-button ghost">
                        {"Share your story"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    padding-top: 74px;
                }
                .hero {
                    text-align: center;
                    padding: 7rem 2rem 5rem;
                    max-width: 860px;
                    margin: 0 auto;
                }
                .hero h1 {
                    font-size: 3.4rem;
                    margin-bottom: 1.2rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-sub {
                    font-size: 1.2rem;
                    line-height: 1.7;
                    color: rgba(245, 247, 250, 0.72);
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                }
                .hero-button {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 10px;
                    text-decoration: none;
                    font-weight: 600;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }
                .hero-button.primary {
                    background: linear-gradient(135deg, #C0A080, #a8875f);
                    color: #0A2540;
                }
                .hero-button.primary:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 8px 24px rgba(192, 160, 128, 0.35);
                }
                .hero-button.ghost {
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #F5F7FA;
                }
                .hero-button.ghost:hover {
                    border-color: #C0A080;
                }
                .stats-band {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .stat-card {
                    text-align: center;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 14px;
                    padding: 1.8rem 1rem;
                }
                .stat-value {
                    font-size: 2.2rem;
                    font-weight: 700;
                    color: #C0A080;
                    margin-bottom: 0.4rem;
                }
                .stat-label {
                    color: rgba(245, 247, 250, 0.65);
                    font-size: 0.9rem;
                }
                .pillars, .voices {
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .pillars h2, .voices h2 {
                    font-size: 2.2rem;
                    margin-bottom: 2.5rem;
                }
                .pillar-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .pillar-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 14px;
                    padding: 2rem 1.5rem;
                    text-align: left;
                }
                .pillar-card h3 {
                    color: #98D8C8;
                    margin-top: 0;
                }
                .pillar-card p {
                    color: rgba(245, 247, 250, 0.7);
                    line-height: 1.6;
                    margin-bottom: 0;
                }
                .carousel {
                    max-width: 720px;
                    margin: 0 auto;
                }
                .carousel-track {
                    display: grid;
                }
                .carousel-card {
                    grid-area: 1 / 1;
                    opacity: 0;
                    transition: opacity 0.5s ease;
                    margin: 0;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 2.5rem;
                    pointer-events: none;
                }
                .carousel-card.active {
                    opacity: 1;
                    pointer-events: auto;
                }
                .carousel-card blockquote {
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: rgba(245, 247, 250, 0.85);
                    margin: 0 0 1.5rem;
                    font-style: italic;
                }
                .carousel-name {
                    display: block;
                    font-weight: 600;
                    color: #C0A080;
                }
                .carousel-role {
                    display: block;
                    font-size: 0.85rem;
                    color: rgba(245, 247, 250, 0.6);
                }
                .carousel-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1.2rem;
                    margin-top: 1.5rem;
                }
                .carousel-button {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    border-radius: 50%;
                    width: 40px;
                    height: 40px;
                    color: #F5F7FA;
                    font-size: 1.3rem;
                    cursor: pointer;
                }
                .carousel-button:hover {
                    border-color: #C0A080;
                }
                .carousel-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(255, 255, 255, 0.25);
                    cursor: pointer;
                    padding: 0;
                }
                .carousel-dot.active {
                    background: #C0A080;
                }
                .voices-cta {
                    margin-top: 2.5rem;
                }
                @media (max-width: 900px) {
                    .stats-band {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .pillar-grid {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .hero h1 {
                        font-size: 2.3rem;
                    }
                    .hero-actions {
                        flex-direction: column;
                        align-items: center;
                    }
                    .stats-band {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_endpoints_exactly() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
    }

    #[test]
    fn easing_front_loads_the_movement() {
        // quartic ease-out covers most of the distance in the first half
        assert!(ease_out_quart(0.5) > 0.9);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn easing_is_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let eased = ease_out_quart(f64::from(step) / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }

    #[test]
    fn carousel_wraps_at_both_ends() {
        assert_eq!(next_slide(TESTIMONIALS.len() - 1), 0);
        assert_eq!(prev_slide(0), TESTIMONIALS.len() - 1);
        assert_eq!(next_slide(0), 1);
        assert_eq!(prev_slide(1), 0);
    }
}
