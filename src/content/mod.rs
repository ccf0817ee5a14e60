//! Portfolio content: who, what they know, and what they built.
//!
//! Content is read once from three JSON documents and never mutated. See
//! [`Portfolio::load`] for where it comes from.

mod loader;

pub use loader::{ContentError, ContentSource, PERSONAL_INFO_DOC, PROJECTS_DOC, SKILLS_DOC};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity and contact details shown in the hero, about and contact sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    /// Display name.
    pub name: String,
    /// Professional title.
    pub title: String,
    /// One-paragraph introduction for the hero.
    pub introduction: String,
    /// Longer biography for the about section.
    pub about: String,
    /// Path or URL of a portrait.
    pub photo: String,
    /// Public contact address.
    pub email: String,
    /// Profiles elsewhere.
    pub social_links: Vec<SocialLink>,
}

/// A link to a profile on another platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Platform name, e.g. `GitHub`.
    pub platform: String,
    /// Profile URL.
    pub url: String,
    /// Icon key (`github`, `linkedin`, `twitter`, ...).
    pub icon: String,
}

/// How well a skill is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    /// Just started.
    Beginner,
    /// Comfortable with the basics.
    Intermediate,
    /// Used in depth.
    Advanced,
    /// Deep, long-term command.
    Expert,
}

impl Proficiency {
    /// Fill level of the proficiency bar, in percent.
    #[must_use]
    pub const fn percent(self) -> u16 {
        match self {
            Self::Expert => 100,
            Self::Advanced => 75,
            Self::Intermediate => 50,
            Self::Beginner => 25,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl fmt::Display for Proficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Skill name.
    pub name: String,
    /// Grouping category.
    pub category: String,
    /// Self-assessed level.
    pub proficiency: Proficiency,
    /// Years of hands-on use, if stated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<u32>,
}

impl Skill {
    /// Years of experience worth showing (absent and zero are both hidden).
    #[must_use]
    pub fn shown_years(&self) -> Option<u32> {
        self.years_of_experience.filter(|years| *years > 0)
    }

    /// Expert, or Advanced with at least three years behind it.
    #[must_use]
    pub fn is_primary_expertise(&self) -> bool {
        match self.proficiency {
            Proficiency::Expert => true,
            Proficiency::Advanced => self.years_of_experience.unwrap_or(0) >= 3,
            Proficiency::Beginner | Proficiency::Intermediate => false,
        }
    }
}

/// Skills sharing a category, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillGroup {
    /// Category name.
    pub category: String,
    /// Members in the order they were listed.
    pub skills: Vec<Skill>,
}

/// Group `skills` by category.
///
/// Categories appear in first-seen order; skills keep their input order
/// within a category.
#[must_use]
pub fn group_skills_by_category(skills: &[Skill]) -> Vec<SkillGroup> {
    let mut groups: Vec<SkillGroup> = Vec::new();
    for skill in skills {
        if let Some(group) = groups.iter_mut().find(|g| g.category == skill.category) {
            group.skills.push(skill.clone());
        } else {
            groups.push(SkillGroup {
                category: skill.category.clone(),
                skills: vec![skill.clone()],
            });
        }
    }
    groups
}

/// A showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable identifier, unique within the portfolio.
    pub id: String,
    /// Card and modal title.
    pub title: String,
    /// Short card description.
    pub description: String,
    /// Longer description for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detailed_description: Option<String>,
    /// Technologies used, most important first.
    pub technologies: Vec<String>,
    /// Free-form duration, e.g. `3 months`.
    pub duration: String,
    /// Preview image, relative to the content directory.
    pub preview_image: String,
    /// Live demo link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    /// Source repository link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Featured projects are listed first.
    pub featured: bool,
}

/// Technologies shown on a card before collapsing the rest into `+N`.
pub const CARD_TECHNOLOGIES: usize = 4;

impl Project {
    /// Description for the detail view.
    #[must_use]
    pub fn full_description(&self) -> &str {
        self.detailed_description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.description)
    }

    /// Live demo link, if present and non-empty.
    #[must_use]
    pub fn live_url(&self) -> Option<&str> {
        self.live_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Repository link, if present and non-empty.
    #[must_use]
    pub fn github_url(&self) -> Option<&str> {
        self.github_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Technologies for the card, plus how many were left out.
    #[must_use]
    pub fn card_technologies(&self) -> (&[String], usize) {
        let shown = self.technologies.len().min(CARD_TECHNOLOGIES);
        (&self.technologies[..shown], self.technologies.len() - shown)
    }
}

/// Featured projects first; otherwise input order is kept.
#[must_use]
pub fn sort_projects(projects: &[Project]) -> Vec<Project> {
    let mut sorted = projects.to_vec();
    // Stable: non-featured (and featured) projects keep their relative order.
    sorted.sort_by_key(|p| !p.featured);
    sorted
}

/// Everything the page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Portfolio {
    /// Identity and contact details.
    pub personal: PersonalInfo,
    /// Skills in input order.
    pub skills: Vec<Skill>,
    /// Projects in display order (featured first).
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Assemble a portfolio, putting projects into display order.
    #[must_use]
    pub fn new(personal: PersonalInfo, skills: Vec<Skill>, projects: &[Project]) -> Self {
        Self {
            personal,
            skills,
            projects: sort_projects(projects),
        }
    }

    /// Skills grouped for display.
    #[must_use]
    pub fn skill_groups(&self) -> Vec<SkillGroup> {
        group_skills_by_category(&self.skills)
    }

    /// Skills that count as primary expertise, in input order.
    pub fn primary_expertise(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(|s| s.is_primary_expertise())
    }

    /// Project by display index.
    #[must_use]
    pub fn project(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Number of featured projects.
    #[must_use]
    pub fn featured_count(&self) -> usize {
        self.projects.iter().filter(|p| p.featured).count()
    }
}
