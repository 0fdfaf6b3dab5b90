// Site-wide constants shared across pages.

/// localStorage key the testimonial archive lives under.
pub const TESTIMONIAL_STORAGE_KEY: &str = "mrg_testimonials";

/// Minimum ticket size mandated by the PMS licence, in lakhs.
pub const MIN_INVESTMENT_LAKHS: f64 = 50.0;

pub const RUPEES_PER_LAKH: f64 = 100_000.0;

/// Annual management fee charged on assets under management.
pub const AUM_FEE_RATE: f64 = 0.01;

/// Share of returns above the hurdle taken as performance fee.
pub const PERFORMANCE_FEE_RATE: f64 = 0.20;

/// Hurdle rate in percent; performance fee applies only above this.
pub const HURDLE_RATE_PERCENT: f64 = 10.0;
