//! Demo portfolio repository.
//!
//! There is no real backend; the dashboard and public page are seeded with
//! a fixed demo portfolio behind a simulated fetch latency, so the loading
//! path behaves like a remote source without any network I/O.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use profilecraft_core::collection::Collection;
use profilecraft_core::portfolio::{Portfolio, PortfolioRepository};
use profilecraft_core::profile::{Profile, SocialLinks};
use profilecraft_core::project::Project;
use profilecraft_core::resume::{EducationEntry, ExperienceEntry};
use profilecraft_core::settings::SiteSettings;
use profilecraft_core::skill::Skill;
use profilecraft_core::Result;

/// Repository serving the built-in demo portfolio.
#[derive(Debug, Clone)]
pub struct DemoPortfolioRepository {
    /// Simulated fetch latency applied to every load.
    latency: Duration,
}

impl DemoPortfolioRepository {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for DemoPortfolioRepository {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

#[async_trait]
impl PortfolioRepository for DemoPortfolioRepository {
    async fn load(&self, username: &str) -> Result<Portfolio> {
        tokio::time::sleep(self.latency).await;
        debug!(username, "serving demo portfolio");
        Ok(demo_portfolio())
    }
}

/// The seeded demo portfolio shown to every visitor.
pub fn demo_portfolio() -> Portfolio {
    Portfolio {
        profile: Profile {
            name: "Alex Morgan".to_string(),
            title: "Full Stack Developer".to_string(),
            location: "San Francisco, CA".to_string(),
            email: "alex@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            about: "I'm a passionate full-stack developer with over 5 years of experience \
                    building web applications. I specialize in React, Node.js, and modern \
                    JavaScript frameworks. I love creating elegant solutions to complex \
                    problems and continuously learning new technologies.\n\nWhen I'm not \
                    coding, you'll find me hiking, reading sci-fi novels, or experimenting \
                    with new cooking recipes. I believe in clean code, user-centered design, \
                    and the power of technology to make a positive impact on people's lives."
                .to_string(),
            social_links: SocialLinks {
                github: "https://github.com/".to_string(),
                linkedin: "https://linkedin.com/in/".to_string(),
                twitter: "https://twitter.com/".to_string(),
                dribbble: "https://dribbble.com/".to_string(),
            },
            profile_image:
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=1470&auto=format&fit=crop"
                    .to_string(),
        },
        skills: Collection::from_records(vec![
            Skill::new("1", "JavaScript", 90),
            Skill::new("2", "React", 85),
            Skill::new("3", "Node.js", 80),
            Skill::new("4", "TypeScript", 75),
            Skill::new("5", "HTML/CSS", 90),
            Skill::new("6", "GraphQL", 70),
            Skill::new("7", "MongoDB", 75),
            Skill::new("8", "PostgreSQL", 65),
            Skill::new("9", "Docker", 60),
            Skill::new("10", "AWS", 65),
        ]),
        experience: Collection::from_records(vec![
            ExperienceEntry::new(
                "1",
                "Senior Frontend Developer",
                "TechCorp Inc.",
                "2021 - Present",
                "Lead development of the company's main SaaS product using React, \
                 TypeScript, and GraphQL. Improved performance by 40% and implemented \
                 CI/CD pipeline.",
            ),
            ExperienceEntry::new(
                "2",
                "Full Stack Developer",
                "WebSolutions",
                "2018 - 2021",
                "Developed and maintained multiple client projects using Node.js, \
                 Express, React, and MongoDB. Collaborated with design team to \
                 implement responsive UI/UX.",
            ),
            ExperienceEntry::new(
                "3",
                "Junior Web Developer",
                "Digital Agency",
                "2016 - 2018",
                "Created websites and web applications for clients in various \
                 industries. Focused on frontend development with HTML, CSS, and \
                 JavaScript.",
            ),
        ]),
        education: Collection::from_records(vec![
            EducationEntry::new(
                "1",
                "M.S. in Computer Science",
                "Stanford University",
                "2014 - 2016",
                "Specialized in web technologies and artificial intelligence.",
            ),
            EducationEntry::new(
                "2",
                "B.S. in Computer Science",
                "University of California, Berkeley",
                "2010 - 2014",
                "Dean's List. Participated in various hackathons and coding competitions.",
            ),
        ]),
        projects: Collection::from_records(vec![
            Project::new(
                "1",
                "E-commerce Platform",
                "A full-featured e-commerce platform with payment processing, inventory \
                 management, and analytics.",
                vec![
                    "React".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                    "Stripe".to_string(),
                ],
                "https://images.unsplash.com/photo-1561069934-eee225952461?q=80&w=1470&auto=format&fit=crop",
                "#",
            ),
            Project::new(
                "2",
                "Task Management App",
                "A collaborative task management application with real-time updates and \
                 team features.",
                vec![
                    "React".to_string(),
                    "Firebase".to_string(),
                    "Material UI".to_string(),
                    "PWA".to_string(),
                ],
                "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?q=80&w=1470&auto=format&fit=crop",
                "#",
            ),
            Project::new(
                "3",
                "Health Tracking Dashboard",
                "An interactive dashboard for tracking health metrics with data \
                 visualization and insights.",
                vec![
                    "TypeScript".to_string(),
                    "Chart.js".to_string(),
                    "Express".to_string(),
                    "PostgreSQL".to_string(),
                ],
                "https://images.unsplash.com/photo-1579684385127-1ef15d508118?q=80&w=1480&auto=format&fit=crop",
                "#",
            ),
            Project::new(
                "4",
                "Social Media Analytics Tool",
                "A tool for analyzing social media engagement and audience demographics.",
                vec![
                    "React".to_string(),
                    "Python".to_string(),
                    "Django".to_string(),
                    "D3.js".to_string(),
                ],
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=1415&auto=format&fit=crop",
                "#",
            ),
            Project::new(
                "5",
                "Weather Forecast App",
                "A mobile-first weather application with location-based forecasts and \
                 alerts.",
                vec![
                    "React Native".to_string(),
                    "API Integration".to_string(),
                    "Geolocation".to_string(),
                ],
                "https://images.unsplash.com/photo-1592210454359-9043f067919b?q=80&w=1470&auto=format&fit=crop",
                "#",
            ),
            Project::new(
                "6",
                "Recipe Sharing Platform",
                "A community-driven recipe sharing platform with search and filtering \
                 capabilities.",
                vec![
                    "Vue.js".to_string(),
                    "Node.js".to_string(),
                    "MongoDB".to_string(),
                    "AWS".to_string(),
                ],
                "https://images.unsplash.com/photo-1495521821757-a1efb6729352?q=80&w=1426&auto=format&fit=crop",
                "#",
            ),
        ]),
        settings: SiteSettings {
            username: "alexmorgan".to_string(),
            domain: "alexmorgan.profilecraft.com".to_string(),
            ..SiteSettings::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profilecraft_core::project::available_tags;

    #[test]
    fn test_demo_portfolio_contents() {
        let portfolio = demo_portfolio();
        assert_eq!(portfolio.profile.name, "Alex Morgan");
        assert_eq!(portfolio.skills.len(), 10);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.projects.len(), 6);
        assert_eq!(portfolio.settings.username, "alexmorgan");
    }

    #[test]
    fn test_demo_tags_collapse_across_projects() {
        let portfolio = demo_portfolio();
        let tags = available_tags(&portfolio.projects);
        // "React" appears on three projects but lists once, first-seen first.
        assert_eq!(tags.iter().filter(|t| t.as_str() == "React").count(), 1);
        assert_eq!(tags[0], "React");
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_applies_latency() {
        let repo = DemoPortfolioRepository::new(Duration::from_millis(500));

        let before = tokio::time::Instant::now();
        let portfolio = repo.load("creative-alex").await.unwrap();
        assert_eq!(before.elapsed(), Duration::from_millis(500));
        assert_eq!(portfolio.skills.len(), 10);
    }
}
