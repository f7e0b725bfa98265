//! Personalized hero copy, keyed by the visitor's top category.

use serde::Serialize;

use crate::category::Category;

/// Headline and subheadline shown at the top of the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeroContent {
    pub headline: String,
    pub subheadline: String,
}

impl HeroContent {
    fn new(headline: &str, subheadline: &str) -> Self {
        Self {
            headline: headline.to_string(),
            subheadline: subheadline.to_string(),
        }
    }

    /// Copy shown to visitors with no interest history.
    pub fn default_content() -> Self {
        Self::new(
            "Technology Solutions That Drive Your Business Forward",
            "From cybersecurity to custom software, we deliver IT services that help you grow, \
             protect, and innovate.",
        )
    }
}

impl Default for HeroContent {
    fn default() -> Self {
        Self::default_content()
    }
}

/// Hero copy for a category.
///
/// Returns `Option` so callers keep a fallback path should the table and the
/// category set ever drift apart.
pub fn hero_for(category: Category) -> Option<HeroContent> {
    let content = match category {
        Category::SecurityInfrastructure => HeroContent::new(
            "Secure, Resilient Infrastructure for Your Business",
            "Protect your data and keep systems running with proactive security monitoring and \
             cloud expertise.",
        ),
        Category::GrowthMarketing => HeroContent::new(
            "Grow Your Reach and Your Revenue",
            "Data-driven marketing, SEO, and e-commerce solutions that turn visitors into \
             customers.",
        ),
        Category::DevelopmentTraining => HeroContent::new(
            "Build Better Software, Build Stronger Teams",
            "Custom applications and hands-on training that keep your team ahead of the curve.",
        ),
        Category::BusinessStrategy => HeroContent::new(
            "Turn Your Data Into Strategic Decisions",
            "Analytics, consulting, and digital transformation aligned with your business goals.",
        ),
    };
    Some(content)
}
