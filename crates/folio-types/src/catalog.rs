use crate::domain::{
    AssetRef, Category, ContactLink, Experience, Icon, Profile, Project, ProjectId, Skill, Stat,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The static, read-only collection of profile, project, skill, and
/// experience entries the page renders. Baked in at build time, with an
/// optional TOML override for the whole catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
}

impl Catalog {
    /// Load a catalog from a TOML file and validate it.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog: Catalog = toml::from_str(&content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the id-uniqueness invariant over the project gallery.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(Error::DuplicateProjectId(project.id.as_u32()));
            }
        }
        Ok(())
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The built-in catalog content.
    pub fn builtin() -> Self {
        Catalog {
            profile: Profile {
                name: "MU'IZ ISMAN".to_string(),
                headline: "Data Analyst & CS Student".to_string(),
                tagline: vec![
                    "Translating Data into".to_string(),
                    "Clear Narratives.".to_string(),
                ],
                intro: "Hi, I'm Muhammad Mu'iz Isman. A 5th-semester Informatics student \
                        specializing in Data Analysis. I combine technical skills in Python & SQL \
                        with strong communication abilities to bridge the gap between data and \
                        decision-making."
                    .to_string(),
                stats: vec![
                    Stat {
                        label: "Current GPA".to_string(),
                        value: "3.73".to_string(),
                    },
                    Stat {
                        label: "Semester".to_string(),
                        value: "5th".to_string(),
                    },
                    Stat {
                        label: "Focus".to_string(),
                        value: "Data Analysis".to_string(),
                    },
                    Stat {
                        label: "Location".to_string(),
                        value: "Tangerang".to_string(),
                    },
                ],
                quote: "I believe effective data analysis requires not just technical skills, \
                        but the ability to communicate insights clearly."
                    .to_string(),
                outro: "Currently committed to deepening my data analysis skills and ready to \
                        contribute in a data-driven corporate environment."
                    .to_string(),
                footer: "Tangerang, Indonesia \u{2022} +62813 1754 9621".to_string(),
                contacts: vec![
                    ContactLink {
                        label: "muizisman511@gmail.com".to_string(),
                        href: "mailto:muizisman511@gmail.com".to_string(),
                        icon: Icon::from("mail"),
                    },
                    ContactLink {
                        label: "LinkedIn Profile".to_string(),
                        href: "https://www.linkedin.com/in/muiz-isman".to_string(),
                        icon: Icon::from("linkedin"),
                    },
                    ContactLink {
                        label: "GitHub".to_string(),
                        href: "https://github.com/Muiz-Isman".to_string(),
                        icon: Icon::from("github"),
                    },
                ],
                resume: Some(AssetRef {
                    href: "assets/cv-muiz-isman.pdf".to_string(),
                    suggested_name: "CV_Muiz_Isman.pdf".to_string(),
                }),
            },
            projects: vec![
                Project {
                    id: ProjectId::new(1),
                    title: "Pizza Sales Analytics".to_string(),
                    category: Category::DataAnalysis,
                    description: "End-to-end analysis for a pizza restaurant case study. \
                                  Performed data cleaning with Pandas, conducted EDA to identify \
                                  purchasing patterns, and created visualizations to support \
                                  business decision-making."
                        .to_string(),
                    tags: vec![
                        "Python".to_string(),
                        "Excel".to_string(),
                        "EDA".to_string(),
                        "Visualization".to_string(),
                    ],
                    focus: "Business Insights".to_string(),
                    icon: Icon::from("bar-chart"),
                    link: "https://github.com/Muiz-Isman".to_string(),
                },
                Project {
                    id: ProjectId::new(2),
                    title: "Community Management System".to_string(),
                    category: Category::WebDev,
                    description: "Full-stack development for a church community internal \
                                  project. Designed user-friendly UI/UX and integrated a database \
                                  system for managing attendance data efficiently."
                        .to_string(),
                    tags: vec![
                        "UI/UX".to_string(),
                        "Frontend".to_string(),
                        "Database".to_string(),
                    ],
                    focus: "System Integration".to_string(),
                    icon: Icon::from("layout"),
                    link: "https://github.com/Muiz-Isman".to_string(),
                },
                Project {
                    id: ProjectId::new(3),
                    title: "Event Management System".to_string(),
                    category: Category::WebDev,
                    description: "Built a web-based platform for organizational activity \
                                  management. Integrated registration systems with a database to \
                                  store event information securely."
                        .to_string(),
                    tags: vec![
                        "PHP".to_string(),
                        "MySQL".to_string(),
                        "Web Programming".to_string(),
                    ],
                    focus: "Event Management".to_string(),
                    icon: Icon::from("code"),
                    link: "https://github.com/Muiz-Isman".to_string(),
                },
                Project {
                    id: ProjectId::new(4),
                    title: "Ultimagz Digital System".to_string(),
                    category: Category::WebDev,
                    description: "Managing and developing digital systems as Head of IT. \
                                  Ensuring website content updates and maintenance using \
                                  WordPress to keep appearance relevant."
                        .to_string(),
                    tags: vec![
                        "WordPress".to_string(),
                        "IT Management".to_string(),
                        "Leadership".to_string(),
                    ],
                    focus: "Digital Operations".to_string(),
                    icon: Icon::from("terminal"),
                    link: "https://github.com/Muiz-Isman".to_string(),
                },
            ],
            skills: vec![
                Skill {
                    icon: Icon::from("code"),
                    name: "Python (Pandas, Matplotlib)".to_string(),
                },
                Skill {
                    icon: Icon::from("database"),
                    name: "SQL (JOIN, Aggregation)".to_string(),
                },
                Skill {
                    icon: Icon::from("spreadsheet"),
                    name: "Excel (Pivot, Lookup)".to_string(),
                },
                Skill {
                    icon: Icon::from("layout"),
                    name: "Figma (UI/UX)".to_string(),
                },
                Skill {
                    icon: Icon::from("terminal"),
                    name: "Web (PHP, React, Laravel)".to_string(),
                },
                Skill {
                    icon: Icon::from("mic"),
                    name: "Public Speaking".to_string(),
                },
            ],
            experiences: vec![
                Experience {
                    role: "Head of IT Department".to_string(),
                    org: "Ultimagz".to_string(),
                    period: "Nov 2024 - Present".to_string(),
                    description: "Leading the IT division, coordinating the team in managing \
                                  digital systems, and maintaining the organization's website to \
                                  ensure optimal performance and up-to-date content."
                        .to_string(),
                },
                Experience {
                    role: "Moderator".to_string(),
                    org: "KAMI UMN (Alumni Sharing Session)".to_string(),
                    period: "Sep 2025 - Oct 2025".to_string(),
                    description: "Coordinated session flow, managed speaker transitions, and \
                                  ensured clear, structured communication for a professional \
                                  online discussion environment."
                        .to_string(),
                },
                Experience {
                    role: "Event Coordinator & MC".to_string(),
                    org: "Career Preparation 2025".to_string(),
                    period: "Jul 2025 - Sep 2025".to_string(),
                    description: "Led the event division, coordinated with speakers and \
                                  advisors, and served as Master of Ceremonies to ensure a smooth \
                                  and engaging main event."
                        .to_string(),
                },
            ],
        }
    }
}
