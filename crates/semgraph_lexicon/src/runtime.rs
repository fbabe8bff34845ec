//! Runtime loading of gazetteers and domain configuration overlays.
//!
//! Both loaders are additive, read-only-after-load registries: a builder may
//! register several gazetteer files and several domain config files, and
//! subsequent `build()` calls read them without further I/O.
//!
//! # JSON shapes
//!
//! Gazetteer:
//! ```json
//! { "_meta": { "gazetteerId": "clinical-v1", "version": "1.0" },
//!   "entities": { "Acme General Hospital": { "type": "Organization", "aliases": ["Acme General"] } } }
//! ```
//!
//! Domain config:
//! ```json
//! { "domain": "clinical", "version": "1.0",
//!   "typeSpecializations": { "Organization": { "hospital": "Hospital" } },
//!   "verbOverrides": { "file": { "information": "record", "default": "store" } },
//!   "processRootWords": { "admission": "admit" } }
//! ```

use serde::Deserialize;
use std::collections::HashMap;

/// Metadata block carried by every gazetteer file.
#[derive(Debug, Clone, Deserialize)]
pub struct GazetteerMeta {
    pub gazetteer_id: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GazetteerEntryRaw {
    #[serde(rename = "type")]
    entity_type: String,
    #[serde(default)]
    aliases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GazetteerFile {
    #[serde(rename = "_meta")]
    meta: GazetteerMetaRaw,
    entities: HashMap<String, GazetteerEntryRaw>,
}

#[derive(Debug, Deserialize)]
struct GazetteerMetaRaw {
    #[serde(rename = "gazetteerId")]
    gazetteer_id: String,
    version: String,
}

/// A single gazetteer entry as indexed for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GazetteerEntry {
    pub canonical_name: String,
    pub entity_type: String,
    pub aliases: Vec<String>,
    pub source_gazetteer_id: String,
}

/// The outcome of a gazetteer lookup, identifying which precedence tier matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GazetteerMatchKind {
    ExactCanonical,
    ExactAlias,
    Normalized,
}

/// A merged gazetteer index supporting exact/alias/normalized lookup with
/// first-write-wins precedence across multiple loaded gazetteer files.
///
/// Lookup tries, in order: (1) exact canonical name, (2) exact alias, (3)
/// normalized form (lowercased, trailing period stripped). If two
/// gazetteers both define the same key at the same tier, the first one
/// loaded is kept; later registrations for that key are ignored.
#[derive(Debug, Default)]
pub struct Gazetteer {
    canonical: HashMap<String, GazetteerEntry>,
    aliases: HashMap<String, String>,
    normalized: HashMap<String, String>,
    loaded: Vec<GazetteerMeta>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and registers a gazetteer JSON document.
    ///
    /// Entries already present in the index (by canonical name, alias, or
    /// normalized key) are left untouched: first write wins.
    pub fn load_str(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let file: GazetteerFile = serde_json::from_str(json)?;
        self.loaded.push(GazetteerMeta {
            gazetteer_id: file.meta.gazetteer_id.clone(),
            version: file.meta.version.clone(),
        });
        for (name, raw) in file.entities {
            let entry = GazetteerEntry {
                canonical_name: name.clone(),
                entity_type: raw.entity_type.clone(),
                aliases: raw.aliases.clone(),
                source_gazetteer_id: file.meta.gazetteer_id.clone(),
            };
            self.canonical.entry(name.clone()).or_insert_with(|| entry.clone());

            for alias in &raw.aliases {
                self.aliases.entry(alias.clone()).or_insert_with(|| name.clone());
            }

            let norm = normalize_gazetteer_key(&name);
            self.normalized.entry(norm).or_insert_with(|| name.clone());
            for alias in &raw.aliases {
                let norm_alias = normalize_gazetteer_key(alias);
                self.normalized.entry(norm_alias).or_insert_with(|| name.clone());
            }
        }
        Ok(())
    }

    /// Looks up `text` using the exact/alias/normalized precedence chain.
    pub fn lookup(&self, text: &str) -> Option<(&GazetteerEntry, GazetteerMatchKind)> {
        if let Some(entry) = self.canonical.get(text) {
            return Some((entry, GazetteerMatchKind::ExactCanonical));
        }
        if let Some(canonical) = self.aliases.get(text) {
            if let Some(entry) = self.canonical.get(canonical) {
                return Some((entry, GazetteerMatchKind::ExactAlias));
            }
        }
        let norm = normalize_gazetteer_key(text);
        if let Some(canonical) = self.normalized.get(&norm) {
            if let Some(entry) = self.canonical.get(canonical) {
                return Some((entry, GazetteerMatchKind::Normalized));
            }
        }
        None
    }

    /// Metadata for every gazetteer file registered so far, in load order.
    pub fn loaded_sources(&self) -> &[GazetteerMeta] {
        &self.loaded
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

/// Lowercases and strips a single trailing period, per the normalized-match
/// tier's precedence rule. Common abbreviation forms ("Corp." / "Corp") are
/// both handled, since the period strip makes them collide.
fn normalize_gazetteer_key(s: &str) -> String {
    let lower = s.to_lowercase();
    lower.strip_suffix('.').map(str::to_string).unwrap_or(lower)
}

/// One domain's overlay: specialized types, verb-sense overrides, and
/// process-root-word specializations, additively layered on top of the
/// base ontology.
#[derive(Debug, Clone, Deserialize)]
pub struct DomainConfigFile {
    pub domain: String,
    pub version: String,
    #[serde(default, rename = "typeSpecializations")]
    pub type_specializations: HashMap<String, HashMap<String, String>>,
    #[serde(default, rename = "verbOverrides")]
    pub verb_overrides: HashMap<String, HashMap<String, String>>,
    #[serde(default, rename = "processRootWords")]
    pub process_root_words: HashMap<String, String>,
}

/// A conflict detected while registering a domain config term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigConflict {
    pub base_type: String,
    pub term: String,
    pub previous_value: String,
    pub attempted_value: String,
}

/// Additive registry of domain overlays, loaded across any number of
/// domain config files. Later registrations for an already-defined term
/// win (last-loader-wins) but are reported as conflicts for the caller to
/// log.
#[derive(Debug, Default)]
pub struct DomainConfig {
    type_specializations: HashMap<String, HashMap<String, String>>,
    verb_overrides: HashMap<String, HashMap<String, String>>,
    process_root_words: HashMap<String, String>,
    conflicts: Vec<ConfigConflict>,
}

impl DomainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and layers a domain config JSON document onto the registry.
    pub fn load_str(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let file: DomainConfigFile = serde_json::from_str(json)?;

        for (base_type, terms) in file.type_specializations {
            let bucket = self.type_specializations.entry(base_type.clone()).or_default();
            for (term, specialized) in terms {
                if let Some(previous) = bucket.get(&term) {
                    if previous != &specialized {
                        self.conflicts.push(ConfigConflict {
                            base_type: base_type.clone(),
                            term: term.clone(),
                            previous_value: previous.clone(),
                            attempted_value: specialized.clone(),
                        });
                    }
                }
                bucket.insert(term, specialized);
            }
        }

        for (verb, senses) in file.verb_overrides {
            let bucket = self.verb_overrides.entry(verb).or_default();
            for (category, sense) in senses {
                bucket.insert(category, sense);
            }
        }

        for (term, root) in file.process_root_words {
            self.process_root_words.insert(term, root);
        }

        Ok(())
    }

    /// Resolves a base ontology type to a domain-specialized type for `term`.
    ///
    /// Tries an exact term match first, then falls back to substring
    /// containment (the first registered term that `term` contains or is
    /// contained by), per the loader's lookup precedence.
    pub fn specialize_type(&self, base_type: &str, term: &str) -> Option<&str> {
        let bucket = self.type_specializations.get(base_type)?;
        if let Some(specialized) = bucket.get(term) {
            return Some(specialized.as_str());
        }
        let term_lower = term.to_lowercase();
        bucket
            .iter()
            .find(|(key, _)| {
                let key_lower = key.to_lowercase();
                term_lower.contains(&key_lower) || key_lower.contains(&term_lower)
            })
            .map(|(_, v)| v.as_str())
    }

    /// Resolves a verb-sense override for `verb` given the object's
    /// category, falling back to the `"default"` entry if present.
    pub fn verb_sense(&self, verb: &str, object_category: &str) -> Option<&str> {
        let senses = self.verb_overrides.get(verb)?;
        senses
            .get(object_category)
            .or_else(|| senses.get("default"))
            .map(|s| s.as_str())
    }

    /// Resolves the canonical process root word for `term`, if a domain
    /// config specializes it.
    pub fn process_root_word(&self, term: &str) -> Option<&str> {
        self.process_root_words.get(term).map(|s| s.as_str())
    }

    /// Conflicts logged across all loads so far, in registration order.
    pub fn conflicts(&self) -> &[ConfigConflict] {
        &self.conflicts
    }

    /// Returns to ontology-base mode, discarding every loaded overlay.
    pub fn clear_configs(&mut self) {
        self.type_specializations.clear();
        self.verb_overrides.clear();
        self.process_root_words.clear();
        self.conflicts.clear();
    }
}
