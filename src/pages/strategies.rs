use plotters::element::Pie;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const NAVY: RGBColor = RGBColor(10, 37, 64);
const GOLD: RGBColor = RGBColor(192, 160, 128);
const MINT: RGBColor = RGBColor(152, 216, 200);
const SKY: RGBColor = RGBColor(107, 182, 214);

struct Strategy {
    name: &'static str,
    tagline: &'static str,
    description: &'static str,
    suits: &'static str,
    horizon: &'static str,
    /// Large cap / mid cap / small cap weights, in percent.
    allocation: [f64; 3],
}

const STRATEGIES: &[Strategy] = &[
    Strategy {
        name: "Wealth Maximizer",
        tagline: "Aggressive growth",
        description: "A concentrated portfolio tilted toward mid and small cap businesses with long runways. Expect sharper drawdowns in exchange for the highest compounding potential.",
        suits: "Investors comfortable seeing a third of their capital underwater in a bad year.",
        horizon: "5+ years",
        allocation: [40.0, 35.0, 25.0],
    },
    Strategy {
        name: "Wealth Enhancer",
        tagline: "Balanced growth",
        description: "Half the book in established large caps, the rest in emerging leaders. The default choice for families compounding a core corpus.",
        suits: "Investors who want equity returns without the full volatility of a small cap book.",
        horizon: "4+ years",
        allocation: [50.0, 35.0, 15.0],
    },
    Strategy {
        name: "Wealth Protector",
        tagline: "Capital preservation first",
        description: "Dominated by dividend-paying large caps with a small satellite of growth names. Built for corpuses that cannot be rebuilt from salary.",
        suits: "Retirees and trusts drawing income from the portfolio.",
        horizon: "3+ years",
        allocation: [65.0, 25.0, 10.0],
    },
];

/// One slot per strategy card. `NodeRef` clones share a single cell, so
/// every slot has to be constructed on its own.
fn canvas_slots(count: usize) -> Vec<NodeRef> {
    (0..count).map(|_| NodeRef::default()).collect()
}

fn draw_allocation(canvas: HtmlCanvasElement, allocation: &[f64; 3]) {
    canvas.set_width(280);
    canvas.set_height(280);

    let backend = CanvasBackend::with_canvas_object(canvas).unwrap();
    let root = backend.into_drawing_area();
    root.fill(&NAVY).unwrap();

    let center = (140, 140);
    let radius = 105.0;
    let sizes = allocation.to_vec();
    let colors = vec![GOLD, MINT, SKY];
    let labels = vec!["Large Cap", "Mid Cap", "Small Cap"];

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 14).into_font().color(&WHITE));
    pie.percentages(("sans-serif", 14).into_font().color(&NAVY));
    root.draw(&pie).unwrap();
}

#[function_component(Strategies)]
pub fn strategies() -> Html {
    let canvas_refs = use_state(|| canvas_slots(STRATEGIES.len()));

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

    // Pies are static; one draw after the first render is enough.
    {
        let canvas_refs = canvas_refs.clone();
        use_effect_with_deps(
            move |_| {
                for (strategy, canvas_ref) in STRATEGIES.iter().zip(canvas_refs.iter()) {
                    if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                        draw_allocation(canvas, &strategy.allocation);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="strategies-page">
            <section class="strategies-hero">
                <h1>{"Three strategies, one philosophy"}</h1>
                <p>{"Every portfolio we run owns understandable businesses bought at sensible prices. The strategies differ only in how much volatility they are willing to hold."}</p>
            </section>
            <section class="strategy-list">
                {
                    for STRATEGIES.iter().enumerate().map(|(index, strategy)| html! {
                        <article class="strategy-card">
                            <div class="strategy-copy">
                                <span class="strategy-tagline">{ strategy.tagline }</span>
                                <h2>{ strategy.name }</h2>
                                <p>{ strategy.description }</p>
                                <p class="strategy-suits">{ strategy.suits }</p>
                                <div class="strategy-facts">
                                    <div>
                                        <span class="fact-label">{"Suggested horizon"}</span>
                                        <span class="fact-value">{ strategy.horizon }</span>
                                    </div>
                                    <div>
                                        <span class="fact-label">{"Benchmark"}</span>
                                        <span class="fact-value">{"Nifty 50 TRI"}</span>
                                    </div>
                                </div>
                            </div>
                            <div class="strategy-chart">
                                <canvas
                                    ref={canvas_refs[index].clone()}
                                    width="280"
                                    height="280"
                                    style="max-width: 100%;"
                                />
                                <span class="chart-caption">{"Model allocation"}</span>
                            </div>
                        </article>
                    })
                }
            </section>
            <style>
                {r#"
                .strategies-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .strategies-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .strategies-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .strategies-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 640px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .strategy-list {
                    max-width: 1040px;
                    margin: 0 auto;
                    padding: 3rem 2rem 6rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .strategy-card {
                    display: grid;
                    grid-template-columns: 1fr 300px;
                    gap: 2rem;
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 2.5rem;
                    align-items: center;
                }
                .strategy-tagline {
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    font-size: 0.75rem;
                    color: #98D8C8;
                }
                .strategy-card h2 {
                    margin: 0.5rem 0 1rem;
                    font-size: 1.9rem;
                }
                .strategy-card p {
                    color: rgba(245, 247, 250, 0.75);
                    line-height: 1.7;
                }
                .strategy-suits {
                    font-style: italic;
                    color: rgba(245, 247, 250, 0.55) !important;
                }
                .strategy-facts {
                    display: flex;
                    gap: 3rem;
                    margin-top: 1.5rem;
                }
                .fact-label {
                    display: block;
                    font-size: 0.75rem;
                    color: rgba(245, 247, 250, 0.5);
                    margin-bottom: 0.2rem;
                }
                .fact-value {
                    font-weight: 600;
                    color: #C0A080;
                }
                .strategy-chart {
                    text-align: center;
                }
                .chart-caption {
                    display: block;
                    margin-top: 0.6rem;
                    font-size: 0.8rem;
                    color: rgba(245, 247, 250, 0.55);
                }
                @media (max-width: 860px) {
                    .strategy-card {
                        grid-template-columns: 1fr;
                    }
                    .strategies-hero h1 {
                        font-size: 2.2rem;
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
    fn each_strategy_gets_its_own_canvas_slot() {
        let slots = canvas_slots(STRATEGIES.len());
        assert_eq!(slots.len(), STRATEGIES.len());
        // NodeRef equality follows the shared cell, so distinct slots
        // must compare unequal while a clone compares equal.
        assert!(slots[0] != slots[1]);
        assert!(slots[1] != slots[2]);
        assert!(slots[0] != slots[2]);
        assert!(slots[0] == slots[0].clone());
    }

    #[test]
    fn every_allocation_sums_to_one_hundred_percent() {
        for strategy in STRATEGIES {
            let total: f64 = strategy.allocation.iter().sum();
            assert!((total - 100.0).abs() < 1e-9, "{} allocates {}%", strategy.name, total);
        }
    }
}
