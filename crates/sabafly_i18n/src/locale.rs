//! Discord locale codes.

use serde::{Deserialize, Serialize};

/// A locale Discord reports for users and guilds.
///
/// Displays and parses as the Discord code, e.g. `en-US` or `ja`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[serde(try_from = "String", into = "String")]
#[allow(missing_docs)]
pub enum Locale {
    #[strum(serialize = "id")]
    Indonesian,
    #[strum(serialize = "da")]
    Danish,
    #[strum(serialize = "de")]
    German,
    #[strum(serialize = "en-GB")]
    EnglishGb,
    #[strum(serialize = "en-US")]
    EnglishUs,
    #[strum(serialize = "es-ES")]
    SpanishEs,
    #[strum(serialize = "es-419")]
    SpanishLatam,
    #[strum(serialize = "fr")]
    French,
    #[strum(serialize = "hr")]
    Croatian,
    #[strum(serialize = "it")]
    Italian,
    #[strum(serialize = "lt")]
    Lithuanian,
    #[strum(serialize = "hu")]
    Hungarian,
    #[strum(serialize = "nl")]
    Dutch,
    #[strum(serialize = "no")]
    Norwegian,
    #[strum(serialize = "pl")]
    Polish,
    #[strum(serialize = "pt-BR")]
    PortugueseBr,
    #[strum(serialize = "ro")]
    Romanian,
    #[strum(serialize = "fi")]
    Finnish,
    #[strum(serialize = "sv-SE")]
    Swedish,
    #[strum(serialize = "vi")]
    Vietnamese,
    #[strum(serialize = "tr")]
    Turkish,
    #[strum(serialize = "cs")]
    Czech,
    #[strum(serialize = "el")]
    Greek,
    #[strum(serialize = "bg")]
    Bulgarian,
    #[strum(serialize = "ru")]
    Russian,
    #[strum(serialize = "uk")]
    Ukrainian,
    #[strum(serialize = "hi")]
    Hindi,
    #[strum(serialize = "th")]
    Thai,
    #[strum(serialize = "zh-CN")]
    ChineseCn,
    #[strum(serialize = "ja")]
    Japanese,
    #[strum(serialize = "zh-TW")]
    ChineseTw,
    #[strum(serialize = "ko")]
    Korean,
}

impl Locale {
    /// The Discord code, e.g. `en-US`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// The language part of the code: `en` for `en-US`.
    pub fn language(self) -> &'static str {
        let code = self.code();
        code.split('-').next().unwrap_or(code)
    }
}

impl TryFrom<String> for Locale {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}
