//! Portfolio document schema, loaded once from JSON at startup.
//!
//! A missing or malformed document is a startup failure surfaced by the
//! app shell; nothing here is ever touched from inside the tick loop.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The full portfolio document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    pub personal: Personal,
    pub certifications: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationEntry>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    /// Biography paragraphs, in display order.
    pub bio: Vec<String>,
    pub stats: Vec<Stat>,
}

/// One cell of the intro panel's stat grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub emoji: String,
    /// CSS color for the card's accent border.
    pub gradient: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency percentage, 0-100, drives the bar width.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub greeting: String,
    pub message: String,
    pub links: Vec<ContactLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactLink {
    pub url: String,
    pub icon: String,
    pub text: String,
}

impl PortfolioConfig {
    /// Parse a portfolio document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse portfolio config: {e}"))
    }

    /// Load a portfolio document from a file.
    pub fn load_from_file(path: &Path) -> Result<Self, String> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read portfolio config {}: {e}", path.display()))?;
        Self::from_json(&json)
    }
}
