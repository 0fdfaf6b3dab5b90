use num_format::{Locale, ToFormattedString};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::{
    AUM_FEE_RATE, HURDLE_RATE_PERCENT, MIN_INVESTMENT_LAKHS, PERFORMANCE_FEE_RATE, RUPEES_PER_LAKH,
};

const INVALID_INPUT_MESSAGE: &str = "Please enter valid amounts (minimum ₹50 lakhs investment)";

/// One year of fees on a hypothetical portfolio. All rupee amounts.
#[derive(Clone, Debug, PartialEq)]
pub struct FeeBreakdown {
    pub investment: f64,
    pub gross_return: f64,
    pub aum_fee: f64,
    pub performance_fee: f64,
}

impl FeeBreakdown {
    /// `amount_lakhs` is the proposed investment in lakhs, `return_rate`
    /// the assumed annual return in percent. Returns `None` when the
    /// inputs fall outside what the calculator accepts.
    pub fn calculate(amount_lakhs: f64, return_rate: f64) -> Option<FeeBreakdown> {
        if !amount_lakhs.is_finite() || !return_rate.is_finite() {
            return None;
        }
        if amount_lakhs < MIN_INVESTMENT_LAKHS || return_rate < 0.0 {
            return None;
        }

        let investment = amount_lakhs * RUPEES_PER_LAKH;
        let gross_return = investment * return_rate / 100.0;
        let aum_fee = investment * AUM_FEE_RATE;
        // performance fee applies only to the slice above the hurdle
        let performance_fee = if return_rate > HURDLE_RATE_PERCENT {
            investment * (return_rate - HURDLE_RATE_PERCENT) / 100.0 * PERFORMANCE_FEE_RATE
        } else {
            0.0
        };

        Some(FeeBreakdown {
            investment,
            gross_return,
            aum_fee,
            performance_fee,
        })
    }

    pub fn total_fees(&self) -> f64 {
        self.aum_fee + self.performance_fee
    }

    pub fn effective_fee_rate(&self) -> f64 {
        self.total_fees() / self.investment * 100.0
    }

    pub fn net_return(&self) -> f64 {
        self.gross_return - self.total_fees()
    }

    pub fn net_return_rate(&self) -> f64 {
        self.net_return() / self.investment * 100.0
    }
}

/// Indian digit grouping, whole rupees: 5000000 becomes "50,00,000".
pub fn format_inr(value: f64) -> String {
    (value.round() as i64).to_formatted_string(&Locale::en_IN)
}

#[function_component(Fees)]
pub fn fees() -> Html {
    let amount_input = use_state(String::new);
    let return_input = use_state(String::new);
    let result = use_state(|| None::<Result<FeeBreakdown, ()>>);

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

    let on_amount = {
        let amount_input = amount_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount_input.set(input.value());
        })
    };
    let on_return = {
        let return_input = return_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            return_input.set(input.value());
        })
    };
    let on_calculate = {
        let amount_input = amount_input.clone();
        let return_input = return_input.clone();
        let result = result.clone();
        Callback::from(move |_| {
            let parsed = match (amount_input.trim().parse::<f64>(), return_input.trim().parse::<f64>()) {
                (Ok(amount), Ok(rate)) => FeeBreakdown::calculate(amount, rate).ok_or(()),
                _ => Err(()),
            };
            result.set(Some(parsed));
        })
    };

    html! {
        <div class="fees-page">
            <section class="fees-hero">
                <h1>{"Fees you can reason about"}</h1>
                <p>{"One fixed fee, one performance fee above a hurdle, nothing else. No entry load, no exit load after year one, no hidden charges."}</p>
            </section>

            <section class="fee-cards">
                <div class="fee-card">
                    <span class="fee-figure">{"1%"}</span>
                    <h3>{"Fixed fee"}</h3>
                    <p>{"Charged annually on average assets under management, billed quarterly."}</p>
                </div>
                <div class="fee-card">
                    <span class="fee-figure">{"20%"}</span>
                    <h3>{"Performance fee"}</h3>
                    <p>{"On returns above a 10% hurdle, with a high-water mark. No catch-up."}</p>
                </div>
                <div class="fee-card">
                    <span class="fee-figure">{"₹50L"}</span>
                    <h3>{"Minimum investment"}</h3>
                    <p>{"The regulatory minimum for portfolio management services in India."}</p>
                </div>
            </section>

            <section class="calculator-section">
                <h2>{"Estimate your fees"}</h2>
                <div class="calculator-card">
                    <div class="calculator-inputs">
                        <label>
                            {"Investment amount (₹ lakhs)"}
                            <input
                                type="number"
                                min="50"
                                placeholder="50"
                                value={(*amount_input).clone()}
                                oninput={on_amount}
                            />
                        </label>
                        <label>
                            {"Expected annual return (%)"}
                            <input
                                type="number"
                                min="0"
                                placeholder="12"
                                value={(*return_input).clone()}
                                oninput={on_return}
                            />
                        </label>
                        <button class="calculate-button" onclick={on_calculate}>{"Calculate"}</button>
                    </div>
                    {
                        match &*result {
                            None => html! {},
                            Some(Err(())) => html! {
                                <p class="calculator-error">{ INVALID_INPUT_MESSAGE }</p>
                            },
                            Some(Ok(breakdown)) => html! {
                                <div class="calculator-result">
                                    <div class="result-row">
                                        <span>{"Investment"}</span>
                                        <span>{ format!("₹{}", format_inr(breakdown.investment)) }</span>
                                    </div>
                                    <div class="result-row">
                                        <span>{"Gross return"}</span>
                                        <span>{ format!("₹{}", format_inr(breakdown.gross_return)) }</span>
                                    </div>
                                    <div class="result-row">
                                        <span>{"Fixed fee (1%)"}</span>
                                        <span>{ format!("₹{}", format_inr(breakdown.aum_fee)) }</span>
                                    </div>
                                    <div class="result-row">
                                        <span>{"Performance fee"}</span>
                                        <span>{ format!("₹{}", format_inr(breakdown.performance_fee)) }</span>
                                    </div>
                                    <div class="result-row total">
                                        <span>{"Total fees"}</span>
                                        <span>{ format!("₹{} ({:.2}% effective)", format_inr(breakdown.total_fees()), breakdown.effective_fee_rate()) }</span>
                                    </div>
                                    <div class="result-row net">
                                        <span>{"Net return"}</span>
                                        <span>{ format!("₹{} ({:.2}%)", format_inr(breakdown.net_return()), breakdown.net_return_rate()) }</span>
                                    </div>
                                </div>
                            },
                        }
                    }
                </div>
                <p class="calculator-footnote">
                    {"Illustration for a single year. Actual billing uses daily average AUM and applies the high-water mark across years."}
                </p>
            </section>

            <style>
                {r#"
                .fees-page {
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .fees-hero {
                    text-align: center;
                    padding: 5rem 2rem 2rem;
                }
                .fees-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                    background: linear-gradient(45deg, #F5F7FA, #C0A080);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .fees-hero p {
                    color: rgba(245, 247, 250, 0.7);
                    max-width: 620px;
                    margin: 0 auto;
                    line-height: 1.6;
                }
                .fee-cards {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                }
                .fee-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 14px;
                    padding: 2rem;
                    text-align: center;
                }
                .fee-figure {
                    font-size: 2.4rem;
                    font-weight: 700;
                    color: #C0A080;
                }
                .fee-card h3 {
                    margin: 0.8rem 0 0.5rem;
                }
                .fee-card p {
                    color: rgba(245, 247, 250, 0.65);
                    font-size: 0.9rem;
                    line-height: 1.6;
                    margin: 0;
                }
                .calculator-section {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 2rem 2rem 6rem;
                    text-align: center;
                }
                .calculator-section h2 {
                    font-size: 2rem;
                    margin-bottom: 2rem;
                }
                .calculator-card {
                    background: rgba(255, 255, 255, 0.04);
                    border: 1px solid rgba(255, 255, 255, 0.12);
                    border-radius: 16px;
                    padding: 2rem;
                }
                .calculator-inputs {
                    display: grid;
                    grid-template-columns: 1fr 1fr auto;
                    gap: 1.2rem;
                    align-items: end;
                    text-align: left;
                }
                .calculator-inputs label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    font-size: 0.85rem;
                    color: #98D8C8;
                }
                .calculator-inputs input {
                    background: rgba(10, 37, 64, 0.6);
                    border: 1px solid rgba(255, 255, 255, 0.18);
                    border-radius: 8px;
                    padding: 0.7rem 0.9rem;
                    color: #F5F7FA;
                    font-size: 0.95rem;
                }
                .calculator-inputs input:focus {
                    outline: none;
                    border-color: #C0A080;
                }
                .calculate-button {
                    background: linear-gradient(135deg, #C0A080, #a8875f);
                    border: none;
                    border-radius: 8px;
                    color: #0A2540;
                    font-weight: 600;
                    padding: 0.75rem 1.6rem;
                    cursor: pointer;
                }
                .calculator-error {
                    color: #E88D8D;
                    margin: 1.5rem 0 0;
                }
                .calculator-result {
                    margin-top: 1.8rem;
                    text-align: left;
                }
                .result-row {
                    display: flex;
                    justify-content: space-between;
                    padding: 0.6rem 0;
                    border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    color: rgba(245, 247, 250, 0.8);
                }
                .result-row.total {
                    color: #C0A080;
                    font-weight: 600;
                }
                .result-row.net {
                    color: #98D8C8;
                    font-weight: 600;
                    border-bottom: none;
                }
                .calculator-footnote {
                    font-size: 0.8rem;
                    color: rgba(245, 247, 250, 0.5);
                    margin-top: 1.2rem;
                }
                @media (max-width: 768px) {
                    .fee-cards {
                        grid-template-columns: 1fr;
                    }
                    .calculator-inputs {
                        grid-template-columns: 1fr;
                    }
                    .fees-hero h1 {
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
    fn fifty_lakhs_at_twelve_percent() {
        let breakdown = FeeBreakdown::calculate(50.0, 12.0).unwrap();
        assert_eq!(breakdown.investment, 5_000_000.0);
        assert_eq!(breakdown.gross_return, 600_000.0);
        assert_eq!(breakdown.aum_fee, 50_000.0);
        // 20% of the 2% above the hurdle
        assert_eq!(breakdown.performance_fee, 20_000.0);
        assert_eq!(breakdown.total_fees(), 70_000.0);
        assert!((breakdown.effective_fee_rate() - 1.4).abs() < 1e-9);
        assert_eq!(breakdown.net_return(), 530_000.0);
        assert!((breakdown.net_return_rate() - 10.6).abs() < 1e-9);
    }

    #[test]
    fn below_the_hurdle_only_the_fixed_fee_applies() {
        let breakdown = FeeBreakdown::calculate(100.0, 8.0).unwrap();
        assert_eq!(breakdown.performance_fee, 0.0);
        assert_eq!(breakdown.total_fees(), breakdown.aum_fee);
    }

    #[test]
    fn exactly_at_the_hurdle_no_performance_fee() {
        let breakdown = FeeBreakdown::calculate(50.0, 10.0).unwrap();
        assert_eq!(breakdown.performance_fee, 0.0);
    }

    #[test]
    fn below_minimum_investment_is_rejected() {
        assert!(FeeBreakdown::calculate(49.99, 12.0).is_none());
        assert!(FeeBreakdown::calculate(0.0, 12.0).is_none());
    }

    #[test]
    fn negative_and_non_finite_inputs_are_rejected() {
        assert!(FeeBreakdown::calculate(50.0, -1.0).is_none());
        assert!(FeeBreakdown::calculate(f64::NAN, 12.0).is_none());
        assert!(FeeBreakdown::calculate(50.0, f64::INFINITY).is_none());
    }

    #[test]
    fn zero_return_is_a_valid_scenario() {
        let breakdown = FeeBreakdown::calculate(50.0, 0.0).unwrap();
        assert_eq!(breakdown.gross_return, 0.0);
        assert_eq!(breakdown.performance_fee, 0.0);
        assert!(breakdown.net_return() < 0.0);
    }

    #[test]
    fn rupee_amounts_use_indian_grouping() {
        assert_eq!(format_inr(5_000_000.0), "50,00,000");
        assert_eq!(format_inr(70_000.0), "70,000");
        assert_eq!(format_inr(123_456_789.0), "12,34,56,789");
        assert_eq!(format_inr(999.0), "999");
    }

    #[test]
    fn formatting_rounds_to_whole_rupees() {
        assert_eq!(format_inr(70_000.4), "70,000");
        assert_eq!(format_inr(70_000.5), "70,001");
    }
}
