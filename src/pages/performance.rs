use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const NAVY: RGBColor = RGBColor(10, 37, 64);
const GOLD: RGBColor = RGBColor(192, 160, 128);
const MINT: RGBColor = RGBColor(152, 216, 200);
const SKY: RGBColor = RGBColor(107, 182, 214);

/// One plotted point per reporting date, rebased to 100 at inception.
/// Wealth Protector launched later, so its early points are absent.
struct PerfPoint {
    label: &'static str,
    maximizer: f64,
    enhancer: f64,
    protector: Option<f64>,
    benchmark: f64,
}

const PERFORMANCE: &[PerfPoint] = &[
    PerfPoint { label: "May 2019", maximizer: 100.0, enhancer: 100.0, protector: None, benchmark: 100.0 },
    PerfPoint { label: "Dec 2019", maximizer: 105.0, enhancer: 103.0, protector: Some(100.0), benchmark: 105.0 },
    PerfPoint { label: "2020", maximizer: 125.0, enhancer: 120.0, protector: Some(115.0), benchmark: 112.0 },
    PerfPoint { label: "2021", maximizer: 142.0, enhancer: 135.0, protector: Some(128.0), benchmark: 130.0 },
    PerfPoint { label: "2022", maximizer: 148.0, enhancer: 140.0, protector: Some(135.0), benchmark: 140.0 },
    PerfPoint { label: "2023", maximizer: 175.0, enhancer: 165.0, protector: Some(152.0), benchmark: 155.0 },
    PerfPoint { label: "Oct 2024", maximizer: 178.0, enhancer: 166.0, protector: Some(143.0), benchmark: 165.0 },
];

#[derive(Clone, Copy, PartialEq)]
enum Period {
    OneYear,
    ThreeYears,
    FiveYears,
    SinceInception,
}

impl Period {
    const ALL: [Period; 4] = [
        Period::OneYear,
        Period::ThreeYears,
        Period::FiveYears,
        Period::SinceInception,
    ];

    fn label(self) -> &'static str {
        match self {
            Period::OneYear => "1Y",
            Period::ThreeYears => "3Y",
            Period::FiveYears => "5Y",
            Period::SinceInception => "Since Inception",
        }
    }

    /// How many reporting dates the period covers, counted from the end.
    fn points(self) -> usize {
        match self {
            Period::OneYear => 2,
            Period::ThreeYears => 4,
            Period::FiveYears => 6,
            Period::SinceInception => PERFORMANCE.len(),
        }
    }
}

/// The tail of the series a period shows. Always ends at the latest date.
fn visible_points(period: Period) -> &'static [PerfPoint] {
    let take = period.points().min(PERFORMANCE.len());
    &PERFORMANCE[PERFORMANCE.len() - take..]
}

fn draw_performance(canvas: HtmlCanvasElement, points: &[PerfPoint]) {
    // Clear the canvas
    let context = canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .unwrap();
    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

    canvas.set_width(860);
    canvas.set_height(440);

    let backend = CanvasBackend::with_canvas_object(canvas.clone()).unwrap();
    let root = backend.into_drawing_area();
    root.fill(&NAVY).unwrap();

    let mut y_min = f64::MAX;
    let mut y_max = f64::MIN;
    for point in points {
        for value in [Some(point.maximizer), Some(point.enhancer), point.protector, Some(point.benchmark)]
            .into_iter()
            .flatten()
        {
            y_min = y_min.min(value);
            y_max = y_max.max(value);
        }
    }

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(0..points.len() - 1, (y_min - 5.0)..(y_max + 10.0))
        .unwrap();

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(&WHITE.mix(0.08))
        .light_line_style(&TRANSPARENT)
        .axis_style(&WHITE.mix(0.25))
        .x_labels(points.len())
        .x_label_formatter(&|x| {
            points.get(*x).map(|point| point.label.to_string()).unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("{:.0}", y))
        .label_style(("sans-serif", 12).into_font().color(&WHITE.mix(0.7)))
        .draw()
        .unwrap();

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, p)| (i, p.maximizer)),
            GOLD.stroke_width(3),
        ))
        .unwrap()
        .label("Wealth Maximizer")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], GOLD.stroke_width(3)));

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, p)| (i, p.enhancer)),
            MINT.stroke_width(3),
        ))
        .unwrap()
        .label("Wealth Enhancer")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], MINT.stroke_width(3)));

    chart
        .draw_series(LineSeries::new(
            points
                .iter()
                .enumerate()
                .filter_map(|(i, p)| p.protector.map(|value| (i, value))),
            SKY.stroke_width(3),
        ))
        .unwrap()
        .label("Wealth Protector")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], SKY.stroke_width(3)));

    chart
        .draw_series(LineSeries::new(
            points.iter().enumerate().map(|(i, p)| (i, p.benchmark)),
            WHITE.mix(0.55).stroke_width(2),
        ))
        .unwrap()
        .label("Nifty 50 TRI")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], WHITE.mix(0.55).stroke_width(2)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&NAVY.mix(0.85))
        .border_style(&WHITE.mix(0.2))
        .label_font(("sans-serif", 13).into_font().color(&WHITE))
        .draw()
        .unwrap();
}

struct DocumentGroup {
    title: &'static str,
    items: &'static [&'static str],
}

const DOCUMENTS: &[DocumentGroup] = &[
    DocumentGroup {
        title: "Disclosure documents",
        items: &[
            "Disclosure Document (October 2024)",
            "Investor Charter",
            "Complaint and Grievance Redressal Policy",
        ],
    },
    DocumentGroup {
        title: "Performance reports",
        items: &[
            "Quarterly Performance Letter Q2 FY25",
            "Annual Review FY24",
            "Model Portfolio Factsheets",
        ],
    },
    DocumentGroup {
        title: "Account opening",
        items: &[
            "PMS Agreement Draft",
            "Fee Schedule Annexure",
            "KYC and Onboarding Checklist",
        ],
    },
];

#[function_component(Performance)]
pub fn performance() -> Html {
    let period = use_state(|| Period::SinceInception);
    let open_group = use_state(|| None::<usize>);
    let canvas_ref = use_node_ref();

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

    // Redraw whenever the selected period changes.
    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |period: &Period| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    draw_performance(canvas, visible_points(*period));
                }
                || ()
            },
            *period,
        );
    }

    html! {
        <div class="performance-page">
            <section class="performance-hero">
                <h1>{"Performance"}</h1>
                <p>{"Model portfolio returns, rebased to 100 at inception, net of all fees. Individual account returns vary with entry date and cash flows."}</p>
            </section>

            <section class="chart-section">
                <div class="period-filters">
                    {
                        for Period::ALL.iter().map(|value| {
                            let value = *value;
                            let period_handle = period.clone();
                            html! {
                                <button
                                    class={classes!("filter-button", (*period == value).then(|| "active"))}
                                    onclick={Callback::from(move |_| period_handle.set(value))}
                                >
                                    { value.label() }
                                </button>
                            }
                        })
                    }
                </div>
                <div class="chart-frame">
                    <canvas
                        ref={canvas_ref}
                        width="860"
                        height="440"
                        style="max-width: 100%;"
                    />
                </div>
                <p class="chart-footnote">
                    {"Wealth Protector launched in December 2019 and is shown from its own inception. Data as of October 2024."}
                </p>
            </section>

            <section class="documents-section">
                <h2>{"Reports and disclosures"}</h2>
                {
                    for DOCUMENTS.iter().enumerate().map(|(index, group)| {
                        let open_group_handle = open_group.clone();
                        let is_open = *open_group == Some(index);
                        html! {
                            <div class={classes!("document-group", is_open.then(|| "open"))}>
                                <button
                                    class="document-toggle"
                                    onclick={Callback::from(move |_| {
                                        open_group_handle.set(if *open_group_handle == Some(index) {
                                            None
                                        } else {
                                            Some(index)
                                        });
                                    })}
                                >
                                    <span>{ group.title }</span>
                                    <span class="document-arrow">{ if is_open { "−" } else { "+" } }</span>
                                </button>
                                {
                                    if is_open {
                                        html! {
                                            <ul class="document-items">
                                                { for group.items.iter().map(|item| html! { <li>{ *item }</li> }) }
                                            </ul>
                                        }
                                    } else {
                                        html! {}
                                    }
                                }
                            </div>
                        }
                    })
                }
            </section>

            <style>
                {r#"
                .performance-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .performance-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .performance-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .performance-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 640px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .chart-section {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 2rem;
                    text-align: center;
                }
                .period-filters {
                    display: flex;
                    justify-content: center;
                    gap: 0.8rem;
                    margin-bottom: 1.5rem;
                    flex-wrap: wrap;
                }
                .filter-button {
                    background: transparent;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    border-radius: 999px;
                    color: #F5F7FA;
                    padding: 0.5rem 1.3rem;
                    cursor: pointer;
                    font-size: 0.85rem;
                    transition: all 0.2s ease;
                }
                .filter-button:hover {
                    border-color: #C0A080;
                }
                .filter-button.active {
                    background: #C0A080;
                    border-color: #C0A080;
                    color: #0A2540;
                    font-weight: 600;
                }
                .chart-frame {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                    padding: 1rem;
                }
                .chart-footnote {
                    font-size: 0.8rem;
                    color: rgba(245, 247, 250, 0.5);
                    margin-top: 1rem;
                }
                .documents-section {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 3rem 2rem 6rem;
                }
                .documents-section h2 {
                    text-align: center;
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .document-group {
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .document-group.open {
                    border-color: rgba(192, 160, 128, 0.5);
                }
                .document-toggle {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: rgba(255, 255, 255, 0.04);
                    border: none;
                    color: #F5F7FA;
                    font-size: 1rem;
                    padding: 1.1rem 1.4rem;
                    cursor: pointer;
                    text-align: left;
                }
                .document-arrow {
                    color: #C0A080;
                    font-size: 1.2rem;
                }
                .document-items {
                    margin: 0;
                    padding: 0.5rem 1.4rem 1.2rem 2.6rem;
                    color: rgba(245, 247, 250, 0.75);
                }
                .document-items li {
                    padding: 0.35rem 0;
                }
                @media (max-width: 768px) {
                    .performance-hero h1 {
                        font-size: 2.2rem;
                    }
                    .chart-section {
                        padding: 1rem;
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
    fn every_period_ends_at_the_latest_date() {
        for period in Period::ALL {
            let points = visible_points(period);
            assert_eq!(points.last().map(|p| p.label), Some("Oct 2024"));
        }
    }

    #[test]
    fn period_windows_have_the_expected_lengths() {
        assert_eq!(visible_points(Period::OneYear).len(), 2);
        assert_eq!(visible_points(Period::ThreeYears).len(), 4);
        assert_eq!(visible_points(Period::FiveYears).len(), 6);
        assert_eq!(visible_points(Period::SinceInception).len(), PERFORMANCE.len());
    }

    #[test]
    fn only_the_full_history_reaches_the_protector_gap() {
        assert!(visible_points(Period::SinceInception)[0].protector.is_none());
        for period in [Period::OneYear, Period::ThreeYears, Period::FiveYears] {
            assert!(visible_points(period).iter().all(|p| p.protector.is_some()));
        }
    }

    #[test]
    fn series_values_match_the_published_factsheet() {
        let latest = PERFORMANCE.last().unwrap();
        assert_eq!(latest.maximizer, 178.0);
        assert_eq!(latest.enhancer, 166.0);
        assert_eq!(latest.protector, Some(143.0));
        assert_eq!(latest.benchmark, 165.0);
    }
}
