//! Translated messages keyed by Discord locale.
//!
//! A [`Translator`] loads one flat `id -> message` file per locale from a
//! directory (`ja.yaml`, `en-US.json`, `fr.toml`, ...) and resolves message
//! ids against it. Dots in ids are read as underscores, so `command.ping`
//! and `command_ping` name the same message.
//!
//! Resolution order: the requested locale, its base language, the fallback
//! locale, the caller's fallback string, and finally the id itself.
//!
//! ```no_run
//! use sabafly_i18n::{Locale, Translator, TranslatorConfig};
//! use std::collections::HashMap;
//!
//! let translator = Translator::new(TranslatorConfig::default());
//! translator.load_dir("lang").unwrap();
//! let data = HashMap::from([("name", "saba")]);
//! let greeting = translator.translate(Locale::EnglishUs, "greeting", &data);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod locale;
mod template;
mod translator;

pub use locale::Locale;
pub use sabafly_error::{TranslationError, TranslationErrorKind};
pub use translator::{Translator, TranslatorConfig};

/// Result type for catalogue loading.
pub type TranslationResult<T> = Result<T, TranslationError>;
