//! The service catalog the recommendation engine draws from.
//!
//! Entries are defined once at startup and never mutated. Catalog order is
//! significant: within a category, recommendations keep the order services
//! appear here.

use std::collections::HashSet;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One offered service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Unique title; also an interest key understood by the resolver.
    pub title: String,
    pub description: String,
    pub category: Category,
    /// Icon identifier for presentation.
    #[serde(default)]
    pub icon: String,
    /// Bullet points for presentation.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Service {
    fn builtin(
        title: &str,
        description: &str,
        category: Category,
        icon: &str,
        features: &[&str],
    ) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            category,
            icon: icon.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// An ordered, immutable list of services, unique by title.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<Service>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate titles.
    pub fn new(services: Vec<Service>) -> Result<Self> {
        let mut seen = HashSet::new();
        for s in &services {
            if s.title.trim().is_empty() {
                bail!("catalog service title must not be empty");
            }
            if !seen.insert(s.title.as_str()) {
                bail!("duplicate catalog service title: '{}'", s.title);
            }
        }
        Ok(Self { services })
    }

    /// The built-in IT-services catalog.
    pub fn builtin() -> Self {
        use Category::*;
        let services = vec![
            Service::builtin(
                "Cybersecurity Solutions",
                "Threat assessments, SIEM monitoring, and incident response for growing businesses.",
                SecurityInfrastructure,
                "shield",
                &["Penetration testing", "24/7 SIEM monitoring", "Incident response plans"],
            ),
            Service::builtin(
                "Cloud Infrastructure",
                "Design, migration, and management of AWS, Azure, and hybrid environments.",
                SecurityInfrastructure,
                "cloud",
                &["Cloud migration", "Infrastructure as code", "Cost optimization"],
            ),
            Service::builtin(
                "Managed IT Support",
                "Proactive helpdesk, patching, and network administration.",
                SecurityInfrastructure,
                "server",
                &["Helpdesk", "Patch management", "Backup and recovery"],
            ),
            Service::builtin(
                "Digital Marketing",
                "Campaigns across search, social, and email that turn visitors into customers.",
                GrowthMarketing,
                "megaphone",
                &["PPC campaigns", "Email automation", "Analytics dashboards"],
            ),
            Service::builtin(
                "E-commerce Solutions",
                "Shopify and WooCommerce storefronts built to convert.",
                GrowthMarketing,
                "cart",
                &["Storefront setup", "Payment integration", "Inventory sync"],
            ),
            Service::builtin(
                "SEO Optimization",
                "Technical and content SEO that grows organic traffic.",
                GrowthMarketing,
                "search",
                &["Site audits", "Keyword strategy", "Local SEO"],
            ),
            Service::builtin(
                "Software Development",
                "Custom web and mobile applications built with React, Node.js, and Python.",
                DevelopmentTraining,
                "code",
                &["Web applications", "Mobile apps", "API integrations"],
            ),
            Service::builtin(
                "Web Design",
                "Responsive, accessible websites with a strong visual identity.",
                DevelopmentTraining,
                "layout",
                &["UI/UX design", "Responsive layouts", "Accessibility reviews"],
            ),
            Service::builtin(
                "IT Training & Workshops",
                "Hands-on courses for teams adopting new tools and practices.",
                DevelopmentTraining,
                "graduation-cap",
                &["Security awareness", "Developer bootcamps", "Office productivity"],
            ),
            Service::builtin(
                "Data Analysis & Insights",
                "Dashboards and reporting that turn raw data into decisions.",
                BusinessStrategy,
                "chart",
                &["Power BI dashboards", "Data warehousing", "Forecasting"],
            ),
            Service::builtin(
                "IT Consulting",
                "Technology roadmaps aligned with business goals.",
                BusinessStrategy,
                "briefcase",
                &["Technology audits", "Vendor selection", "Roadmapping"],
            ),
            Service::builtin(
                "Digital Transformation",
                "Process automation and modernization of legacy systems.",
                BusinessStrategy,
                "refresh",
                &["Workflow automation", "Legacy modernization", "Change management"],
            ),
        ];
        Self { services }
    }

    /// Look up a service by exact title.
    pub fn get(&self, title: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.title == title)
    }

    /// All services in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Service> {
        self.services.iter()
    }

    /// Services in `category`, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Service> {
        self.services.iter().filter(move |s| s.category == category)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
