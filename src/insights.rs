//! Insight Generation
//!
//! Synthesizes the short insight list shown under the charts. The current
//! implementation is an explicitly illustrative generator with randomized
//! figures; it sits behind [`InsightSource`] so an analytics-derived
//! implementation can replace it without touching callers.

use crate::format::format_compact;

/// A single insight entry: a symbolic icon name plus display text
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Insight {
    pub icon: String,
    pub text: String,
}

/// Produces the ordered insight list for one refresh cycle
pub trait InsightSource {
    fn synthesize(&self, best_performing: &str) -> Vec<Insight>;
}

/// Uniform source of values in [0, 1)
pub trait RandomSource {
    fn next(&self) -> f64;
}

/// Browser randomness via `Math.random`
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next(&self) -> f64 {
        js_sys::Math::random()
    }
}

/// Illustrative insight generator.
///
/// Figures are randomized visual filler, not computed trends.
pub struct IllustrativeInsights<R: RandomSource = JsRandom> {
    rng: R,
}

impl IllustrativeInsights {
    pub fn new() -> Self {
        Self { rng: JsRandom }
    }
}

impl Default for IllustrativeInsights {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> IllustrativeInsights<R> {
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> InsightSource for IllustrativeInsights<R> {
    fn synthesize(&self, best_performing: &str) -> Vec<Insight> {
        let trend = self.rng.next() * 15.0 + 5.0;
        let multiplier = self.rng.next() * 2.0 + 1.5;
        let likes = (self.rng.next() * 500.0 + 300.0).floor() as u64;

        vec![
            Insight {
                icon: "fa-chart-line".to_string(),
                text: format!("Engagement rate increased by {:.1}% this week", trend),
            },
            Insight {
                icon: "fa-video".to_string(),
                text: format!(
                    "{} perform {:.1}x better than other content",
                    best_performing, multiplier
                ),
            },
            Insight {
                icon: "fa-heart".to_string(),
                text: format!("Average likes per post: {}", format_compact(likes)),
            },
        ]
    }
}

/// Case-insensitive substring match used by the insight search filter
pub fn matches_query(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedRandom(f64);

    impl RandomSource for FixedRandom {
        fn next(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_synthesize_shape() {
        let source = IllustrativeInsights::with_source(FixedRandom(0.42));
        let insights = source.synthesize("Videos");

        assert_eq!(insights.len(), 3);
        for insight in &insights {
            assert!(!insight.icon.is_empty());
            assert!(!insight.text.is_empty());
        }
    }

    #[test]
    fn test_synthesize_references_best_performing() {
        let source = IllustrativeInsights::with_source(FixedRandom(0.0));
        let insights = source.synthesize("Reels");

        assert!(insights[1].text.contains("Reels"));
    }

    #[test]
    fn test_synthesize_fixed_figures() {
        let source = IllustrativeInsights::with_source(FixedRandom(0.0));
        let insights = source.synthesize("Videos");

        assert_eq!(
            insights[0].text,
            "Engagement rate increased by 5.0% this week"
        );
        assert_eq!(
            insights[1].text,
            "Videos perform 1.5x better than other content"
        );
        assert_eq!(insights[2].text, "Average likes per post: 300");
    }

    #[test]
    fn test_matches_query_case_insensitive() {
        assert!(matches_query("Engagement rate increased", "ENGAGE"));
        assert!(matches_query("Average likes per post", "likes"));
        assert!(!matches_query("Average likes per post", "comments"));
    }

    #[test]
    fn test_matches_query_empty_matches_all() {
        assert!(matches_query("anything", ""));
    }
}
