//! Artifact kind value object.
//!
//! # Design
//!
//! Pure value type — `Copy`, equality-by-value, no identity. It determines
//! which tree plan and template set apply; the plan shapes themselves live
//! in `application::planner`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// The category of thing being scaffolded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A single reusable ArkTS custom component file.
    Component,
    /// A single ArkTS page file.
    Page,
    /// A complete HarmonyOS project skeleton with seeded files.
    Project,
}

impl ArtifactKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Page => "page",
            Self::Project => "project",
        }
    }

    /// File extension for single-file kinds. Project seeds carry their own
    /// extensions (`.ets`, `.json5`) in the plan.
    pub const fn file_extension(&self) -> &'static str {
        "ets"
    }

    /// Conventional output directory used when the caller omits a path.
    ///
    /// `None` for projects: their default root is a new directory named
    /// after the project itself, which only the caller knows.
    pub const fn default_output_dir(&self) -> Option<&'static str> {
        match self {
            Self::Component => Some("components"),
            Self::Page => Some("pages"),
            Self::Project => None,
        }
    }

    /// Whether this kind scaffolds a single file (Component, Page) or a
    /// whole directory tree (Project).
    pub const fn is_single_file(self) -> bool {
        matches!(self, Self::Component | Self::Page)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "component" | "comp" => Ok(Self::Component),
            "page" => Ok(Self::Page),
            "project" | "proj" | "app" => Ok(Self::Project),
            other => Err(DomainError::InvalidName {
                name: other.to_string(),
                reason: "unknown artifact kind".into(),
            }),
        }
    }
}
