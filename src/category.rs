//! Indicator category metadata.
//!
//! Categories follow the conventional technical-analysis taxonomy. The
//! name-to-category mapping is a static, immutable table fixed at compile
//! time; nothing in the detection pipeline depends on it, it only tags
//! outputs for downstream consumers that organize indicators by family.

/// The family an indicator output belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Candlestick transforms and patterns.
    Candles,
    /// Cycle-detection indicators.
    Cycles,
    /// Momentum oscillators.
    Momentum,
    /// Price-overlap lines (moving averages and friends).
    Overlap,
    /// Return/performance measures.
    Performance,
    /// Rolling statistics.
    Statistics,
    /// Value-domain transforms.
    Transform,
    /// Trend-analysis indicators.
    Trend,
    /// Volatility measures and bands.
    Volatility,
    /// Volume-based indicators.
    Volume,
}

impl Category {
    /// Returns the lowercase label used in column/frame metadata.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Candles => "candles",
            Self::Cycles => "cycles",
            Self::Momentum => "momentum",
            Self::Overlap => "overlap",
            Self::Performance => "performance",
            Self::Statistics => "statistics",
            Self::Transform => "transform",
            Self::Trend => "trend",
            Self::Volatility => "volatility",
            Self::Volume => "volume",
        }
    }
}

/// Static table mapping the indicator names this crate exposes to their
/// categories.
pub const INDICATOR_CATEGORIES: &[(&str, Category)] = &[("zigzag", Category::Trend)];

/// Looks up the category of an indicator by name.
///
/// # Example
///
/// ```
/// use swing_ta::category::{category_of, Category};
///
/// assert_eq!(category_of("zigzag"), Some(Category::Trend));
/// assert_eq!(category_of("unknown"), None);
/// ```
#[must_use]
pub fn category_of(name: &str) -> Option<Category> {
    INDICATOR_CATEGORIES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_is_trend() {
        assert_eq!(category_of("zigzag"), Some(Category::Trend));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(category_of("sma"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Trend.as_str(), "trend");
        assert_eq!(Category::Volatility.as_str(), "volatility");
    }

    #[test]
    fn test_table_names_are_unique() {
        for (i, (name, _)) in INDICATOR_CATEGORIES.iter().enumerate() {
            for (other, _) in &INDICATOR_CATEGORIES[i + 1..] {
                assert_ne!(name, other);
            }
        }
    }
}
