use serde::{Deserialize, Serialize};

/// Prices at or below this magnitude (`log10 <= 2`) get four decimals.
const FINE_PRECISION_MAX_LOG10: f64 = 2.0;

const CURRENCY_SUFFIXES: [(&str, &str); 3] = [("JPY", "¥"), ("USD", "$"), ("BTC", "₿ ")];

/// Fixed-point layout for price values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecimalPattern {
    /// Four decimals, like `%.4f`.
    FourDecimals,
    /// No decimals, padded to a width of four, like `%4.0f`.
    WholeWidthFour,
}

impl DecimalPattern {
    #[must_use]
    pub fn for_last_price(last_price: f64) -> Self {
        // NaN and non-positive prices fall through to the fine pattern.
        if last_price.log10() > FINE_PRECISION_MAX_LOG10 {
            Self::WholeWidthFour
        } else {
            Self::FourDecimals
        }
    }

    #[must_use]
    pub fn printf(self) -> &'static str {
        match self {
            Self::FourDecimals => "%.4f",
            Self::WholeWidthFour => "%4.0f",
        }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::FourDecimals => format!("{value:.4}"),
            Self::WholeWidthFour => format!("{value:4.0}"),
        }
    }
}

/// Display format for the chart title and price axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceFormat {
    pub currency_prefix: String,
    pub decimal_pattern: DecimalPattern,
}

impl PriceFormat {
    /// Picks the currency prefix from the symbol's quote suffix and the
    /// precision from the last price magnitude.
    #[must_use]
    pub fn select(symbol: &str, last_price: f64) -> Self {
        let currency_prefix = CURRENCY_SUFFIXES
            .iter()
            .find(|(suffix, _)| symbol.ends_with(suffix))
            .map(|(_, prefix)| (*prefix).to_owned())
            .unwrap_or_default();

        Self {
            currency_prefix,
            decimal_pattern: DecimalPattern::for_last_price(last_price),
        }
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!("{}{}", self.currency_prefix, self.decimal_pattern.format(value))
    }

    /// Prefix plus printf-style pattern, e.g. `¥%.4f`, for renderers that take one.
    #[must_use]
    pub fn printf_pattern(&self) -> String {
        format!("{}{}", self.currency_prefix, self.decimal_pattern.printf())
    }
}
