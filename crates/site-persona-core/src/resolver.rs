//! Interest-key resolution.
//!
//! UI actions report free-form interest keys: technology tags, portfolio
//! filter labels, service titles, or category names. [`resolve`] maps each
//! known key onto exactly one [`Category`]. Keys not in [`RESOLVER_TABLE`]
//! resolve to `None`, which callers treat as "nothing to track".
//!
//! The table is maintenance data. A new tag or service only counts toward
//! personalization once it is added here; the tests assert that every
//! built-in catalog title and category name is present.

use crate::category::Category;
use crate::category::Category::*;

/// Every interest key the resolver understands, with its category.
///
/// Matching is exact and case-sensitive. Each key appears once.
pub const RESOLVER_TABLE: &[(&str, Category)] = &[
    // Category names map to themselves.
    ("Security & Infrastructure", SecurityInfrastructure),
    ("Growth & Marketing", GrowthMarketing),
    ("Development & Training", DevelopmentTraining),
    ("Business Strategy", BusinessStrategy),
    // Security & Infrastructure
    ("Cybersecurity", SecurityInfrastructure),
    ("Cybersecurity Solutions", SecurityInfrastructure),
    ("Cloud Infrastructure", SecurityInfrastructure),
    ("Managed IT Support", SecurityInfrastructure),
    ("SIEM", SecurityInfrastructure),
    ("Penetration Testing", SecurityInfrastructure),
    ("Firewall", SecurityInfrastructure),
    ("Network Security", SecurityInfrastructure),
    ("Compliance", SecurityInfrastructure),
    ("AWS", SecurityInfrastructure),
    ("Azure", SecurityInfrastructure),
    ("Cloud", SecurityInfrastructure),
    ("DevOps", SecurityInfrastructure),
    ("Docker", SecurityInfrastructure),
    ("Kubernetes", SecurityInfrastructure),
    ("Backup & Recovery", SecurityInfrastructure),
    ("Networking", SecurityInfrastructure),
    // Growth & Marketing
    ("Digital Marketing", GrowthMarketing),
    ("E-commerce Solutions", GrowthMarketing),
    ("SEO Optimization", GrowthMarketing),
    ("E-commerce", GrowthMarketing),
    ("Shopify", GrowthMarketing),
    ("WooCommerce", GrowthMarketing),
    ("SEO", GrowthMarketing),
    ("Marketing", GrowthMarketing),
    ("Social Media", GrowthMarketing),
    ("Content Marketing", GrowthMarketing),
    ("Email Marketing", GrowthMarketing),
    ("Google Ads", GrowthMarketing),
    ("Branding", GrowthMarketing),
    // Development & Training
    ("Software Development", DevelopmentTraining),
    ("Web Design", DevelopmentTraining),
    ("IT Training & Workshops", DevelopmentTraining),
    ("React", DevelopmentTraining),
    ("Node.js", DevelopmentTraining),
    ("Python", DevelopmentTraining),
    ("TypeScript", DevelopmentTraining),
    ("JavaScript", DevelopmentTraining),
    ("Mobile", DevelopmentTraining),
    ("Mobile App", DevelopmentTraining),
    ("Flutter", DevelopmentTraining),
    ("Web Development", DevelopmentTraining),
    ("UI/UX", DevelopmentTraining),
    ("API", DevelopmentTraining),
    ("Training", DevelopmentTraining),
    ("Workshops", DevelopmentTraining),
    // Business Strategy
    ("Data Analysis & Insights", BusinessStrategy),
    ("IT Consulting", BusinessStrategy),
    ("Digital Transformation", BusinessStrategy),
    ("Data Analysis", BusinessStrategy),
    ("Analytics", BusinessStrategy),
    ("Power BI", BusinessStrategy),
    ("Business Intelligence", BusinessStrategy),
    ("Consulting", BusinessStrategy),
    ("Strategy", BusinessStrategy),
    ("Automation", BusinessStrategy),
    ("CRM", BusinessStrategy),
    ("ERP", BusinessStrategy),
];

/// Resolve an interest key to its category, or `None` if untracked.
pub fn resolve(key: &str) -> Option<Category> {
    RESOLVER_TABLE
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, cat)| *cat)
}
