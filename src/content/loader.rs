//! Reading portfolio documents from disk or from the built-in sample.

use super::{PersonalInfo, Portfolio, Project, Skill};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// File name of the identity document.
pub const PERSONAL_INFO_DOC: &str = "personal-info.json";
/// File name of the skills document.
pub const SKILLS_DOC: &str = "skills.json";
/// File name of the projects document.
pub const PROJECTS_DOC: &str = "projects.json";

const EMBEDDED_PERSONAL_INFO: &str = include_str!("../../data/personal-info.json");
const EMBEDDED_SKILLS: &str = include_str!("../../data/skills.json");
const EMBEDDED_PROJECTS: &str = include_str!("../../data/projects.json");

/// Why content could not be loaded.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A document could not be read.
    #[error("failed to read {document} from {}", path.display())]
    Read {
        /// Document file name.
        document: &'static str,
        /// Full path that was tried.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A document is not valid JSON of the expected shape.
    #[error("{document} is malformed: {source}")]
    Parse {
        /// Document file name.
        document: &'static str,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A document parsed but breaks a content rule.
    #[error("{document} is invalid: {reason}")]
    Invalid {
        /// Document file name.
        document: &'static str,
        /// What is wrong.
        reason: String,
    },
}

/// Where portfolio documents come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// The sample compiled into the binary.
    Embedded,
    /// A directory holding the three documents.
    Directory(PathBuf),
}

impl ContentSource {
    /// Directory source when `dir` is set, embedded otherwise.
    #[must_use]
    pub fn from_dir(dir: Option<PathBuf>) -> Self {
        dir.map_or(Self::Embedded, Self::Directory)
    }

    /// Resolve a relative asset path (e.g. a preview image) against this source.
    ///
    /// Embedded content has no filesystem root, so only absolute paths resolve.
    #[must_use]
    pub fn resolve_asset(&self, relative: &str) -> Option<PathBuf> {
        let path = Path::new(relative);
        if path.is_absolute() {
            return Some(path.to_path_buf());
        }
        match self {
            Self::Embedded => None,
            Self::Directory(dir) => Some(dir.join(path)),
        }
    }
}

impl Portfolio {
    /// Load all three documents from `source`.
    ///
    /// # Errors
    ///
    /// Returns the first document that cannot be read, parsed or validated.
    pub fn load(source: &ContentSource) -> Result<Self, ContentError> {
        let portfolio = match source {
            ContentSource::Embedded => Self::from_json(
                EMBEDDED_PERSONAL_INFO,
                EMBEDDED_SKILLS,
                EMBEDDED_PROJECTS,
            )?,
            ContentSource::Directory(dir) => {
                debug!(dir = %dir.display(), "Loading portfolio content");
                Self::from_json(
                    &read_document(dir, PERSONAL_INFO_DOC)?,
                    &read_document(dir, SKILLS_DOC)?,
                    &read_document(dir, PROJECTS_DOC)?,
                )?
            }
        };
        info!(
            skills = portfolio.skills.len(),
            projects = portfolio.projects.len(),
            "Loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// The sample portfolio compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled sample is itself broken.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::load(&ContentSource::Embedded)
    }

    /// Build a portfolio from the text of the three documents.
    ///
    /// # Errors
    ///
    /// Returns an error when a document is malformed or breaks a content rule.
    pub fn from_json(personal: &str, skills: &str, projects: &str) -> Result<Self, ContentError> {
        let personal: PersonalInfo = parse_document(PERSONAL_INFO_DOC, personal)?;
        let skills: Vec<Skill> = parse_document(SKILLS_DOC, skills)?;
        let projects: Vec<Project> = parse_document(PROJECTS_DOC, projects)?;

        check_personal(&personal)?;
        check_projects(&projects)?;

        Ok(Self::new(personal, skills, &projects))
    }
}

fn read_document(dir: &Path, document: &'static str) -> Result<String, ContentError> {
    let path = dir.join(document);
    fs::read_to_string(&path).map_err(|source| ContentError::Read {
        document,
        path,
        source,
    })
}

fn parse_document<T: DeserializeOwned>(
    document: &'static str,
    text: &str,
) -> Result<T, ContentError> {
    serde_json::from_str(text).map_err(|source| ContentError::Parse { document, source })
}

fn check_personal(personal: &PersonalInfo) -> Result<(), ContentError> {
    if personal.name.trim().is_empty() {
        return Err(ContentError::Invalid {
            document: PERSONAL_INFO_DOC,
            reason: "name must not be empty".to_string(),
        });
    }
    Ok(())
}

fn check_projects(projects: &[Project]) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for project in projects {
        if project.id.is_empty() {
            return Err(ContentError::Invalid {
                document: PROJECTS_DOC,
                reason: format!("project \"{}\" has an empty id", project.title),
            });
        }
        if !seen.insert(project.id.as_str()) {
            return Err(ContentError::Invalid {
                document: PROJECTS_DOC,
                reason: format!("duplicate project id \"{}\"", project.id),
            });
        }
    }
    Ok(())
}
