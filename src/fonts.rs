//! System font discovery and face loading.
//!
//! Candidate families are resolved against the system font database at
//! startup; names that resolve to the same font file are collapsed into a
//! single entry so cycling through the list never shows duplicates. A
//! built-in face is used when nothing resolves at all.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use fontdb::{Database, Family, Query, Source};
use log::{debug, warn};
use rusttype::Font;

use crate::error::{Error, Result};

/// Families probed at startup, in presentation order.
pub const CANDIDATE_FAMILIES: &[&str] = &[
    "Consolas",
    "Courier New",
    "DejaVu Sans Mono",
    "Times New Roman",
    "Arial",
    "Helvetica",
    "Courier",
    "Calibri",
    "Skeena",
];

const BUILTIN_FAMILY: &str = "DejaVu Sans (built-in)";
const BUILTIN_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");

/// Where a selectable font's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A file on disk, with a face index for collections.
    File { path: PathBuf, index: u32 },
    /// The face embedded in the binary.
    Builtin,
}

/// A selectable font: the family name shown in the panel plus its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    pub family: String,
    pub source: FontSource,
}

/// A loaded, rasterizable font face.
#[derive(Clone)]
pub struct FontFace {
    name: String,
    font: Font<'static>,
}

impl FontFace {
    pub fn from_bytes(name: &str, data: Vec<u8>, index: u32) -> Result<Self> {
        let font = Font::try_from_vec_and_index(data, index)
            .ok_or_else(|| Error::Font(format!("Unsupported font data for '{name}'")))?;
        Ok(Self {
            name: name.to_string(),
            font,
        })
    }

    /// The face embedded in the binary.
    pub fn builtin() -> Self {
        let font = Font::try_from_bytes(BUILTIN_BYTES).expect("embedded font is valid");
        Self {
            name: BUILTIN_FAMILY.to_string(),
            font,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn glyph_font(&self) -> &Font<'static> {
        &self.font
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFace").field("name", &self.name).finish()
    }
}

/// The deduplicated list of selectable fonts.
#[derive(Debug, Clone)]
pub struct FontLibrary {
    entries: Vec<FontEntry>,
}

impl FontLibrary {
    /// Probe the system font database for the candidate families. The
    /// built-in face backs the list when no candidate resolves.
    pub fn discover() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();

        let mut entries = Vec::new();
        for family in CANDIDATE_FAMILIES.iter().copied() {
            match resolve(&db, Family::Name(family)) {
                Some(source) => entries.push(FontEntry {
                    family: family.to_string(),
                    source,
                }),
                None => debug!("font family '{family}' not installed"),
            }
        }

        if entries.is_empty() {
            warn!("no candidate font family found, using the built-in face");
            entries.push(FontEntry {
                family: BUILTIN_FAMILY.to_string(),
                source: FontSource::Builtin,
            });
        }

        Self::from_entries(entries)
    }

    /// Build a library from explicit entries, collapsing names that resolve
    /// to the same source into the first entry seen.
    pub fn from_entries(entries: Vec<FontEntry>) -> Self {
        let mut deduped: Vec<FontEntry> = Vec::new();
        for entry in entries {
            if let Some(existing) = deduped.iter().find(|e| e.source == entry.source) {
                debug!(
                    "font '{}' resolves to the same face as '{}'",
                    entry.family, existing.family
                );
                continue;
            }
            deduped.push(entry);
        }
        Self { entries: deduped }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FontEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&FontEntry> {
        self.entries.get(index)
    }

    /// Index to the left of `index`, wrapping to the end of the list.
    pub fn previous_index(&self, index: usize) -> usize {
        if self.entries.is_empty() || index == 0 {
            self.entries.len().saturating_sub(1)
        } else {
            index - 1
        }
    }

    /// Index to the right of `index`, wrapping to the start of the list.
    pub fn next_index(&self, index: usize) -> usize {
        if self.entries.is_empty() {
            0
        } else {
            (index + 1) % self.entries.len()
        }
    }

    /// Load the face at `index`.
    pub fn load(&self, index: usize) -> Result<FontFace> {
        let entry = self
            .entries
            .get(index)
            .ok_or_else(|| Error::Font(format!("No font at index {index}")))?;
        match &entry.source {
            FontSource::File { path, index } => {
                let data = fs::read(path)
                    .map_err(|e| Error::Font(format!("{}: {e}", path.display())))?;
                FontFace::from_bytes(&entry.family, data, *index)
            }
            FontSource::Builtin => Ok(FontFace::builtin()),
        }
    }
}

fn resolve(db: &Database, family: Family) -> Option<FontSource> {
    let query = Query {
        families: &[family],
        weight: fontdb::Weight::NORMAL,
        stretch: fontdb::Stretch::Normal,
        style: fontdb::Style::Normal,
    };
    let id = db.query(&query)?;
    let face = db.face(id)?;
    match &face.source {
        Source::File(path) | Source::SharedFile(path, _) => Some(FontSource::File {
            path: path.clone(),
            index: face.index,
        }),
        Source::Binary(_) => None,
    }
}
