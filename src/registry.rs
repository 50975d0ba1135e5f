//! Section registry.
//!
//! A registry maps section ids to a title and content string, in menu
//! order. It is an immutable value built once (from JSON, or the built-in
//! handbook) and handed to whoever renders sections; nothing is global.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::block::Document;
use crate::error::{RegistryError, Result};
use crate::{parse_with_options, Options};

/// Message shown when a section id is unknown.
pub const DEFAULT_FALLBACK: &str = "İçerik yükleniyor veya bulunamadı.";

const BUILTIN_JSON: &str = include_str!("../content/handbook.json");

/// One handbook section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Stable key, e.g. `cnc-basics`.
    pub id: String,
    /// Menu title.
    pub title: String,
    /// Raw content string.
    pub content: String,
}

/// On-disk shape of a registry.
#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default = "default_fallback")]
    fallback: String,
    sections: Vec<Section>,
}

fn default_fallback() -> String {
    DEFAULT_FALLBACK.to_owned()
}

/// Immutable section registry.
#[derive(Debug, Clone, Serialize)]
pub struct Registry {
    title: String,
    subtitle: String,
    fallback: String,
    sections: Vec<Section>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
}

impl Registry {
    /// Build a registry from sections in menu order.
    ///
    /// Ids must be non-empty and unique.
    pub fn new(title: impl Into<String>, sections: Vec<Section>) -> Result<Self> {
        Self::build(title.into(), String::new(), DEFAULT_FALLBACK.to_owned(), sections)
    }

    fn build(
        title: String,
        subtitle: String,
        fallback: String,
        sections: Vec<Section>,
    ) -> Result<Self> {
        let mut index = FxHashMap::default();
        index.reserve(sections.len());
        for (i, section) in sections.iter().enumerate() {
            if section.id.is_empty() {
                return Err(RegistryError::EmptyId { index: i });
            }
            if index.insert(section.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateId(section.id.clone()));
            }
        }
        Ok(Self {
            title,
            subtitle,
            fallback,
            sections,
            index,
        })
    }

    /// Parse a registry from JSON.
    ///
    /// ```
    /// use fixture_handbook::Registry;
    ///
    /// let registry = Registry::from_json(
    ///     r###"{"sections": [{"id": "intro", "title": "Giriş", "content": "## Giriş"}]}"###,
    /// ).unwrap();
    /// assert_eq!(registry.get("intro").unwrap().title, "Giriş");
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Self::build(file.title, file.subtitle, file.fallback, file.sections)
    }

    /// Load a registry from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&raw)?;
        info!(path = %path.display(), sections = registry.len(), "loaded section registry");
        Ok(registry)
    }

    /// The fixture design handbook shipped with the crate.
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_JSON) {
            Ok(registry) => registry,
            Err(err) => {
                warn!(error = %err, "built-in registry is invalid; using an empty one");
                Self {
                    title: String::new(),
                    subtitle: String::new(),
                    fallback: DEFAULT_FALLBACK.to_owned(),
                    sections: Vec::new(),
                    index: FxHashMap::default(),
                }
            }
        }
    }

    /// Replace the message used for unknown section ids.
    pub fn with_fallback(mut self, message: impl Into<String>) -> Self {
        self.fallback = message.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Sections in menu order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section shown first: the head of the menu.
    pub fn default_section(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Look up a section by id.
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.index.get(id).map(|&i| &self.sections[i])
    }

    /// Content for `id`, or `None` when the id is unknown.
    pub fn lookup(&self, id: &str) -> Option<&str> {
        self.get(id).map(|s| s.content.as_str())
    }

    /// Content for `id`, or the fallback message.
    pub fn content_or_fallback(&self, id: &str) -> &str {
        self.lookup(id).unwrap_or(self.fallback.as_str())
    }

    /// Render the section `id`.
    ///
    /// An unknown id yields exactly one paragraph holding the fallback
    /// message; this never fails.
    pub fn render_section(&self, id: &str, options: &Options) -> Document {
        match self.lookup(id) {
            Some(content) => {
                debug!(section = id, "rendering section");
                parse_with_options(content, options)
            }
            None => {
                warn!(section = id, "unknown section; rendering fallback");
                Document::fallback(&self.fallback)
            }
        }
    }
}

impl PartialEq for Registry {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.subtitle == other.subtitle
            && self.fallback == other.fallback
            && self.sections == other.sections
    }
}

impl Eq for Registry {}
