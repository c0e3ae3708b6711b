//! Panel HTML rendering for the overlay content panel.
//!
//! One renderer per zone. The document is first-party authored content,
//! so values are interpolated without escaping.

use crate::config::PortfolioConfig;

/// Number of panels, one per zone.
pub const PANEL_COUNT: usize = 7;

/// Render the panel body for the given zone index.
pub fn render_panel(config: &PortfolioConfig, zone_index: usize) -> Result<String, String> {
    match zone_index {
        0 => Ok(render_intro(config)),
        1 => Ok(render_about(config)),
        2 => Ok(render_experience(config)),
        3 => Ok(render_projects(config)),
        4 => Ok(render_skills(config)),
        5 => Ok(render_education(config)),
        6 => Ok(render_contact(config)),
        other => Err(format!("No panel for zone index {other}")),
    }
}

fn paragraphs(bio: &[String]) -> String {
    bio.iter().map(|p| format!("<p>{p}</p>")).collect()
}

fn render_intro(config: &PortfolioConfig) -> String {
    let stats: String = config
        .personal
        .stats
        .iter()
        .map(|stat| {
            format!(
                r#"<div class="stat-card"><div class="stat-value">{}</div><div class="stat-label">{}</div></div>"#,
                stat.value, stat.label
            )
        })
        .collect();

    format!(
        r#"<div class="panel-section"><h2>{}</h2><h3>{}</h3>{}<div class="stat-grid">{stats}</div></div>"#,
        config.personal.name,
        config.personal.title,
        paragraphs(&config.personal.bio),
    )
}

fn render_about(config: &PortfolioConfig) -> String {
    let certifications: String = config
        .certifications
        .iter()
        .map(|cert| format!(r#"<div class="certification-item">{cert}</div>"#))
        .collect();

    format!(
        r#"<div class="panel-section"><h2>About Me</h2>{}</div><div class="panel-section"><h2>Certifications</h2><div class="certification-list">{certifications}</div></div>"#,
        paragraphs(&config.personal.bio),
    )
}

fn render_experience(config: &PortfolioConfig) -> String {
    let items: String = config
        .experience
        .iter()
        .map(|exp| {
            format!(
                r#"<div class="experience-item"><div class="item-header"><div class="item-title">{}</div><div class="item-period">{}</div></div><div class="item-company">{}</div><div class="item-description">{}</div></div>"#,
                exp.title, exp.period, exp.company, exp.description
            )
        })
        .collect();

    format!(r#"<div class="panel-section"><h2>Professional Experience</h2>{items}</div>"#)
}

fn render_projects(config: &PortfolioConfig) -> String {
    let cards: String = config
        .projects
        .iter()
        .map(|project| {
            let tags: String = project
                .tags
                .iter()
                .map(|tag| format!(r#"<span class="tag">{tag}</span>"#))
                .collect();
            format!(
                r#"<div class="project-item" style="border-left-color: {}"><div class="project-emoji">{}</div><div class="item-title">{}</div><div class="item-description">{}</div><div class="project-tags">{tags}</div></div>"#,
                project.gradient, project.emoji, project.name, project.description
            )
        })
        .collect();

    format!(r#"<div class="panel-section"><h2>Featured Projects</h2>{cards}</div>"#)
}

fn render_skills(config: &PortfolioConfig) -> String {
    let categories: String = config
        .skills
        .iter()
        .map(|category| {
            let items: String = category
                .items
                .iter()
                .map(|skill| {
                    format!(
                        r#"<div class="skill-item"><div class="skill-header"><span class="skill-name">{}</span><span class="skill-level">{}%</span></div><div class="skill-bar"><div class="skill-fill" style="width: {}%"></div></div></div>"#,
                        skill.name, skill.level, skill.level
                    )
                })
                .collect();
            format!(
                r#"<div class="skill-category"><h3>{}</h3>{items}</div>"#,
                category.category
            )
        })
        .collect();

    format!(r#"<div class="panel-section"><h2>Technical Skills</h2>{categories}</div>"#)
}

fn render_education(config: &PortfolioConfig) -> String {
    let items: String = config
        .education
        .iter()
        .map(|edu| {
            format!(
                r#"<div class="education-item"><div class="project-emoji">{}</div><div class="item-header"><div class="item-title">{}</div><div class="item-period">{}</div></div><div class="item-institution">{}</div><div class="item-description">{}</div></div>"#,
                edu.icon, edu.degree, edu.period, edu.institution, edu.description
            )
        })
        .collect();

    format!(r#"<div class="panel-section"><h2>Education</h2>{items}</div>"#)
}

fn render_contact(config: &PortfolioConfig) -> String {
    let links: String = config
        .contact
        .links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="contact-link" target="_blank"><span class="contact-icon">{}</span><span class="contact-text">{}</span></a>"#,
                link.url, link.icon, link.text
            )
        })
        .collect();

    format!(
        r#"<div class="panel-section"><h2>{}</h2><p>{}</p><div class="contact-links">{links}</div></div>"#,
        config.contact.greeting, config.contact.message,
    )
}
