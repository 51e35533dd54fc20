//! Public portfolio preview rendering.

use anyhow::Result;

use profilecraft_core::portfolio::PortfolioRepository;
use profilecraft_core::project::{available_tags, visible_projects};
use profilecraft_core::template::Template;
use profilecraft_infrastructure::{ConfigService, DemoPortfolioRepository};

/// Renders the public page for `username` as plain text.
pub async fn run(username: &str) -> Result<()> {
    let config = ConfigService::new().get_config();
    let repository = DemoPortfolioRepository::new(config.load_delay());
    let portfolio = repository.load(username).await?;

    let template = Template::from_username(username);
    let styles = template.styles();

    println!("=== {} — {} ===", portfolio.profile.name, portfolio.profile.title);
    println!("{} | {}", portfolio.profile.location, portfolio.profile.email);
    println!("template: {template} (background {}, accents {})", styles.background, styles.bar_fill);
    println!();

    println!("Skills & Expertise");
    for skill in &portfolio.skills {
        let filled = usize::from(skill.level()) / 10;
        println!(
            "  {:<14} [{}{}] {:>3}%",
            skill.name,
            "#".repeat(filled),
            "-".repeat(10 - filled),
            skill.level()
        );
    }
    println!();

    println!("Experience");
    for entry in &portfolio.experience {
        println!("  {} @ {} ({})", entry.title, entry.company, entry.period);
    }
    println!();

    println!("Education");
    for entry in &portfolio.education {
        println!("  {} — {} ({})", entry.degree, entry.institution, entry.period);
    }
    println!();

    println!("Projects (filters: {})", available_tags(&portfolio.projects).join(", "));
    for project in visible_projects(&portfolio.projects, None) {
        println!("  {} [{}]", project.title, project.tags.join(", "));
        println!("    {}", project.description);
    }

    Ok(())
}
