//! Message catalogue and lookup.

use crate::{Locale, TranslationError, TranslationErrorKind, TranslationResult, template};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::ffi::OsStr;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

/// How a [`Translator`] resolves and records messages.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_setters::Setters,
)]
#[setters(prefix = "with_")]
pub struct TranslatorConfig {
    /// Locale whose file collects messages that were missing
    #[serde(default = "default_locale")]
    default_locale: Locale,

    /// Locale tried when the requested one has no message
    #[serde(default = "default_locale")]
    fallback_locale: Locale,

    /// Never write missing messages back to disk
    #[serde(default)]
    release: bool,
}

fn default_locale() -> Locale {
    Locale::Japanese
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            fallback_locale: default_locale(),
            release: false,
        }
    }
}

/// Messages loaded from one directory, keyed by file stem and then id.
#[derive(Debug, Default)]
struct Catalog {
    dir: Option<PathBuf>,
    messages: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    fn find(&self, locale: Locale, id: &str) -> Option<&str> {
        [locale.code(), locale.language()]
            .into_iter()
            .find_map(|tag| self.messages.get(tag)?.get(id))
            .map(String::as_str)
    }
}

/// Resolves message ids to localized text.
///
/// Lookups never fail: an unknown id resolves to the caller's fallback
/// string, or to the normalized id when there is none. Outside release mode,
/// a fallback string used for an unknown id is appended to the default
/// locale's YAML file in the loaded directory, so missing messages collect
/// in one place for translators.
///
/// Safe to share between threads.
#[derive(Debug, Default)]
pub struct Translator {
    config: TranslatorConfig,
    catalog: RwLock<Catalog>,
}

impl Translator {
    /// Create a translator with an empty catalogue.
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            config,
            catalog: RwLock::new(Catalog::default()),
        }
    }

    /// The configuration this translator was created with.
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Replace the catalogue with the files in `dir`.
    ///
    /// Each file is a flat map of id to message named after its locale,
    /// such as `ja.yaml`, `en-US.json` or `en.toml`; files for the same
    /// locale are merged. Returns the number of files loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, or if any file has
    /// an unsupported extension or does not parse. The previous catalogue is
    /// kept on error.
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> TranslationResult<usize> {
        let dir = dir.as_ref();
        let read_dir_error = |e: std::io::Error| {
            TranslationError::new(TranslationErrorKind::ReadDir(format!(
                "{}: {}",
                dir.display(),
                e
            )))
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_dir_error)? {
            let path = entry.map_err(read_dir_error)?.path();
            if path.is_file() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut messages: HashMap<String, HashMap<String, String>> = HashMap::new();
        for path in &paths {
            let (tag, parsed) = read_catalog_file(path)?;
            debug!(locale = %tag, count = parsed.len(), "Loaded translation file");
            messages.entry(tag).or_default().extend(parsed);
        }

        info!(files = paths.len(), locales = messages.len(), "Loaded translations");
        *self.write() = Catalog {
            dir: Some(dir.to_path_buf()),
            messages,
        };
        Ok(paths.len())
    }

    /// Look up `id` for `locale`.
    pub fn message(&self, locale: Locale, id: &str) -> String {
        self.translate_with_fallback(locale, id, &(), "")
    }

    /// Look up `id` for `locale`, using `fallback` if it is unknown.
    pub fn message_with_fallback(&self, locale: Locale, id: &str, fallback: &str) -> String {
        self.translate_with_fallback(locale, id, &(), fallback)
    }

    /// Look up `id` for `locale` and fill its `{{.key}}` placeholders from `data`.
    pub fn translate<T>(&self, locale: Locale, id: &str, data: &T) -> String
    where
        T: Serialize + ?Sized,
    {
        self.translate_with_fallback(locale, id, data, "")
    }

    /// Look up `id` for `locale`, using `fallback` if it is unknown, and fill
    /// its `{{.key}}` placeholders from `data`.
    ///
    /// `data` should serialize to a map, such as a `HashMap` or a struct.
    pub fn translate_with_fallback<T>(
        &self,
        locale: Locale,
        id: &str,
        data: &T,
        fallback: &str,
    ) -> String
    where
        T: Serialize + ?Sized,
    {
        let id = normalize_id(id);
        if let Some(message) = self.lookup(locale, &id) {
            return template::render(&message, data);
        }
        if fallback.is_empty() {
            return id;
        }
        if !self.config.release {
            self.record_missing(&id, fallback);
        }
        template::render(fallback, data)
    }

    /// The message for `id` in every Discord locale.
    ///
    /// With `replace_spaces`, spaces become `-`, as Discord requires for
    /// localized command names.
    pub fn message_map(&self, id: &str, replace_spaces: bool) -> BTreeMap<Locale, String> {
        Locale::iter()
            .map(|locale| {
                let message = self.message(locale, id);
                let message = if replace_spaces {
                    message.replace(' ', "-")
                } else {
                    message
                };
                (locale, message)
            })
            .collect()
    }

    fn lookup(&self, locale: Locale, id: &str) -> Option<String> {
        let catalog = self.read();
        catalog
            .find(locale, id)
            .or_else(|| catalog.find(self.config.fallback_locale, id))
            .map(str::to_owned)
    }

    fn record_missing(&self, id: &str, message: &str) {
        let mut catalog = self.write();
        let Some(dir) = catalog.dir.clone() else {
            return;
        };
        let tag = self.config.default_locale.code();
        if catalog
            .messages
            .get(tag)
            .is_some_and(|messages| messages.contains_key(id))
        {
            return;
        }

        let path = dir.join(format!("{}.yaml", tag));
        match append_message(&path, id, message) {
            Ok(()) => {
                debug!(id, path = %path.display(), "Recorded missing message");
                catalog
                    .messages
                    .entry(tag.to_string())
                    .or_default()
                    .insert(id.to_string(), message.to_string());
            }
            Err(e) => warn!(id, error = %e, "Failed to record missing message"),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn normalize_id(id: &str) -> String {
    id.replace('.', "_")
}

fn read_catalog_file(path: &Path) -> TranslationResult<(String, HashMap<String, String>)> {
    let extension = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    if !matches!(extension, "yaml" | "yml" | "json" | "toml") {
        return Err(TranslationError::new(
            TranslationErrorKind::UnsupportedFormat(path.display().to_string()),
        ));
    }
    let tag = path
        .file_stem()
        .and_then(OsStr::to_str)
        .ok_or_else(|| {
            TranslationError::new(TranslationErrorKind::ReadFile(format!(
                "{}: file name is not a locale",
                path.display()
            )))
        })?
        .to_string();

    let contents = fs::read_to_string(path).map_err(|e| {
        TranslationError::new(TranslationErrorKind::ReadFile(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })?;
    if contents.trim().is_empty() {
        return Ok((tag, HashMap::new()));
    }

    let parse_error = |e: String| {
        TranslationError::new(TranslationErrorKind::Parse(format!(
            "{}: {}",
            path.display(),
            e
        )))
    };
    let parsed: HashMap<String, String> = match extension {
        "json" => serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
        "toml" => toml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
        _ => serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?,
    };

    let messages = parsed
        .into_iter()
        .map(|(id, message)| (normalize_id(&id), message))
        .collect();
    Ok((tag, messages))
}

fn append_message(path: &Path, id: &str, message: &str) -> TranslationResult<()> {
    let write_error = |e: String| {
        TranslationError::new(TranslationErrorKind::Write(format!(
            "{}: {}",
            path.display(),
            e
        )))
    };

    let entry = serde_yaml::to_string(&BTreeMap::from([(id, message)]))
        .map_err(|e| write_error(e.to_string()))?;
    // a file without a trailing newline would swallow the new key
    let separator = match fs::read(path) {
        Ok(bytes) if bytes.last().is_some_and(|&byte| byte != b'\n') => "\n",
        _ => "",
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| write_error(e.to_string()))?;
    file.write_all(format!("{}{}", separator, entry).as_bytes())
        .map_err(|e| write_error(e.to_string()))
}
