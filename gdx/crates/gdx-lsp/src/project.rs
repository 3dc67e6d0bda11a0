//! Reader for `project.godot` descriptors.
//!
//! The format is INI-like:
//! - `;` starts a comment anywhere on a line
//! - `[name]` opens a section; entries before the first header go to
//!   [`DEFAULT_SECTION`]
//! - `key=value` sets an entry, both sides trimmed
//! - a line starting with a space or tab continues the previous entry,
//!   joined with `\n`
//!
//! Any other line is skipped. Sections and keys keep file order.

use std::path::Path;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ProjectError, ProjectResult};

/// Section holding entries that precede any header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Entries of one section, in file order.
pub type Section = IndexMap<String, String>;

/// Every section of a descriptor, in file order.
pub type Sections = IndexMap<String, Section>;

/// One entry of the `[input]` section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputConfig {
    /// Action name
    pub name: String,
}

/// The parts of a project descriptor the tooling uses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFile {
    /// `[application] config/name`, quotes removed
    pub application_name: String,
    /// Actions declared under `[input]`
    pub input_configs: Vec<InputConfig>,
}

/// Splits descriptor text into sections.
pub fn parse_sections(contents: &str) -> Sections {
    let mut sections = Sections::new();
    let mut current = DEFAULT_SECTION.to_string();
    sections.insert(current.clone(), Section::new());
    let mut last_key: Option<String> = None;

    for raw in contents.lines() {
        let line = match raw.find(';') {
            Some(idx) => &raw[..idx],
            None => raw,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            current = trimmed[1..trimmed.len() - 1].trim().to_string();
            sections.entry(current.clone()).or_default();
            last_key = None;
        } else if line.starts_with([' ', '\t']) {
            if let Some(key) = &last_key {
                if let Some(value) = sections
                    .get_mut(&current)
                    .and_then(|section| section.get_mut(key))
                {
                    value.push('\n');
                    value.push_str(trimmed);
                }
            }
        } else if let Some((key, value)) = line.split_once('=') {
            let key = key.trim().to_string();
            sections
                .entry(current.clone())
                .or_default()
                .insert(key.clone(), value.trim().to_string());
            last_key = Some(key);
        }
    }

    sections
}

impl ProjectFile {
    /// Parses descriptor text.
    ///
    /// # Example
    ///
    /// ```
    /// use gdx_lsp::project::ProjectFile;
    ///
    /// let project = ProjectFile::parse("[application]\nconfig/name=\"Demo\"\n[input]\njump={\n}\n").unwrap();
    /// assert_eq!(project.application_name, "Demo");
    /// assert_eq!(project.input_configs[0].name, "jump");
    /// ```
    pub fn parse(contents: &str) -> ProjectResult<Self> {
        let sections = parse_sections(contents);

        let application = sections
            .get("application")
            .ok_or(ProjectError::MissingApplication)?;
        let application_name = application
            .get("config/name")
            .ok_or(ProjectError::MissingName)?
            .trim_matches('"')
            .to_string();

        let input_configs = sections
            .get("input")
            .map(|input| {
                input
                    .keys()
                    .map(|name| InputConfig { name: name.clone() })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            application_name,
            input_configs,
        })
    }

    /// Reads and parses a descriptor file.
    pub fn load(path: impl AsRef<Path>) -> ProjectResult<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading project file");
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }
}
