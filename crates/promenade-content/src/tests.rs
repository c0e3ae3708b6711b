//! Tests for the portfolio schema and panel rendering.

use crate::config::PortfolioConfig;
use crate::panels::{self, PANEL_COUNT};

const SAMPLE: &str = r##"{
    "personal": {
        "name": "Jordan Park",
        "title": "Systems Engineer",
        "bio": ["First paragraph.", "Second paragraph."],
        "stats": [
            { "value": "8+", "label": "Years" },
            { "value": "30", "label": "Projects" }
        ]
    },
    "certifications": ["Cert One", "Cert Two"],
    "experience": [
        {
            "title": "Senior Engineer",
            "company": "Acme",
            "period": "2021 - Present",
            "description": "Built things."
        }
    ],
    "projects": [
        {
            "name": "Pathfinder",
            "description": "A routing toy.",
            "emoji": "🧭",
            "gradient": "#4facfe",
            "tags": ["rust", "graphs"]
        }
    ],
    "skills": [
        {
            "category": "Languages",
            "items": [
                { "name": "Rust", "level": 90 },
                { "name": "Python", "level": 75 }
            ]
        }
    ],
    "education": [
        {
            "degree": "BSc Computer Science",
            "institution": "State University",
            "period": "2012 - 2016",
            "description": "Graduated with honors.",
            "icon": "🎓"
        }
    ],
    "contact": {
        "greeting": "Say hello",
        "message": "Always happy to talk.",
        "links": [
            { "url": "mailto:jordan@example.com", "icon": "✉️", "text": "Email" }
        ]
    }
}"##;

fn sample() -> PortfolioConfig {
    PortfolioConfig::from_json(SAMPLE).unwrap()
}

#[test]
fn test_parse_sample_document() {
    let config = sample();
    assert_eq!(config.personal.name, "Jordan Park");
    assert_eq!(config.personal.bio.len(), 2);
    assert_eq!(config.personal.stats.len(), 2);
    assert_eq!(config.certifications.len(), 2);
    assert_eq!(config.experience.len(), 1);
    assert_eq!(config.projects[0].tags, vec!["rust", "graphs"]);
    assert_eq!(config.skills[0].items[0].level, 90);
    assert_eq!(config.education[0].icon, "🎓");
    assert_eq!(config.contact.links.len(), 1);
}

#[test]
fn test_config_round_trips_through_serde() {
    let config = sample();
    let json = serde_json::to_string(&config).unwrap();
    let back = PortfolioConfig::from_json(&json).unwrap();
    assert_eq!(back.personal.name, config.personal.name);
    assert_eq!(back.projects.len(), config.projects.len());
}

#[test]
fn test_malformed_document_is_an_error() {
    let err = PortfolioConfig::from_json("{ not json").unwrap_err();
    assert!(err.contains("Failed to parse"), "got: {err}");
}

#[test]
fn test_missing_required_key_is_an_error() {
    // Drop the contact section entirely.
    let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
    value.as_object_mut().unwrap().remove("contact");
    let err = PortfolioConfig::from_json(&value.to_string()).unwrap_err();
    assert!(err.contains("contact"), "got: {err}");
}

#[test]
fn test_missing_file_is_an_error() {
    let err =
        PortfolioConfig::load_from_file(std::path::Path::new("/nonexistent/portfolio.json"))
            .unwrap_err();
    assert!(err.contains("Failed to read"), "got: {err}");
}

#[test]
fn test_all_panels_render() {
    let config = sample();
    for index in 0..PANEL_COUNT {
        let html = panels::render_panel(&config, index).unwrap();
        assert!(
            html.starts_with(r#"<div class="panel-section">"#),
            "panel {index} should open a section"
        );
    }
}

#[test]
fn test_out_of_range_panel_is_an_error() {
    let err = panels::render_panel(&sample(), PANEL_COUNT).unwrap_err();
    assert!(err.contains("zone index"), "got: {err}");
}

#[test]
fn test_intro_panel_content() {
    let html = panels::render_panel(&sample(), 0).unwrap();
    assert!(html.contains("<h2>Jordan Park</h2>"));
    assert!(html.contains("<h3>Systems Engineer</h3>"));
    assert!(html.contains("<p>First paragraph.</p><p>Second paragraph.</p>"));
    assert!(html.contains(r#"<div class="stat-value">8+</div>"#));
}

#[test]
fn test_about_panel_lists_certifications() {
    let html = panels::render_panel(&sample(), 1).unwrap();
    assert!(html.contains("<h2>About Me</h2>"));
    assert!(html.contains(r#"<div class="certification-item">Cert One</div>"#));
    assert!(html.contains(r#"<div class="certification-item">Cert Two</div>"#));
}

#[test]
fn test_experience_panel_content() {
    let html = panels::render_panel(&sample(), 2).unwrap();
    assert!(html.contains(r#"<div class="item-title">Senior Engineer</div>"#));
    assert!(html.contains(r#"<div class="item-company">Acme</div>"#));
    assert!(html.contains(r#"<div class="item-period">2021 - Present</div>"#));
}

#[test]
fn test_projects_panel_tags_and_accent() {
    let html = panels::render_panel(&sample(), 3).unwrap();
    assert!(html.contains(r#"border-left-color: #4facfe"#));
    assert!(html.contains(r#"<span class="tag">rust</span><span class="tag">graphs</span>"#));
}

#[test]
fn test_skills_panel_bar_widths() {
    let html = panels::render_panel(&sample(), 4).unwrap();
    assert!(html.contains("<h3>Languages</h3>"));
    assert!(html.contains(r#"<span class="skill-level">90%</span>"#));
    assert!(html.contains(r#"<div class="skill-fill" style="width: 90%">"#));
}

#[test]
fn test_education_panel_content() {
    let html = panels::render_panel(&sample(), 5).unwrap();
    assert!(html.contains(r#"<div class="item-title">BSc Computer Science</div>"#));
    assert!(html.contains(r#"<div class="item-institution">State University</div>"#));
}

#[test]
fn test_contact_panel_links() {
    let html = panels::render_panel(&sample(), 6).unwrap();
    assert!(html.contains("<h2>Say hello</h2>"));
    assert!(html.contains(r#"href="mailto:jordan@example.com""#));
    assert!(html.contains(r#"<span class="contact-text">Email</span>"#));
}
