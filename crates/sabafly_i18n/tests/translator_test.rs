//! Tests for loading and resolving translation files.

use sabafly_i18n::{Locale, TranslationErrorKind, Translator, TranslatorConfig};
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn lang_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::write(dir.join("ja.yaml"), "test: テスト\ngreeting: \"{{.name}}さん、こんにちは\"\n").unwrap();
    fs::write(
        dir.join("en-US.json"),
        r#"{"test": "Test", "greeting": "Hello, {{.name}}", "command.ping": "ping pong"}"#,
    )
    .unwrap();
    fs::write(dir.join("fr.toml"), "test = \"Essai\"\n").unwrap();
    temp_dir
}

fn load(dir: &Path, config: TranslatorConfig) -> Translator {
    let translator = Translator::new(config);
    assert_eq!(translator.load_dir(dir).unwrap(), 3);
    translator
}

#[test]
fn resolves_each_file_format() {
    let temp_dir = lang_dir();
    let translator = load(temp_dir.path(), TranslatorConfig::default());

    assert_eq!(translator.message(Locale::Japanese, "test"), "テスト");
    assert_eq!(translator.message(Locale::EnglishUs, "test"), "Test");
    assert_eq!(translator.message(Locale::French, "test"), "Essai");
    assert_eq!(translator.message(Locale::German, "test"), "テスト");
    assert_eq!(translator.message(Locale::Japanese, "not_exist"), "not_exist");
}

#[test]
fn substitutes_template_data() {
    #[derive(Serialize)]
    struct Greeting<'a> {
        name: &'a str,
    }

    let temp_dir = lang_dir();
    let translator = load(temp_dir.path(), TranslatorConfig::default());

    let data = HashMap::from([("name", "saba")]);
    assert_eq!(
        translator.translate(Locale::EnglishUs, "greeting", &data),
        "Hello, saba"
    );
    assert_eq!(
        translator.translate(Locale::Japanese, "greeting", &Greeting { name: "saba" }),
        "sabaさん、こんにちは"
    );
}

#[test]
fn records_missing_messages_in_default_locale_file() {
    let temp_dir = lang_dir();
    let translator = load(temp_dir.path(), TranslatorConfig::default());

    let first = translator.message_with_fallback(Locale::EnglishUs, "menu.title", "Menu: main");
    assert_eq!(first, "Menu: main");

    let written = fs::read_to_string(temp_dir.path().join("ja.yaml")).unwrap();
    assert!(written.starts_with("test: テスト\n"));
    assert!(written.contains("menu_title:"), "{written}");

    // now known in memory, and written once only
    assert_eq!(translator.message(Locale::Korean, "menu_title"), "Menu: main");
    translator.message_with_fallback(Locale::EnglishUs, "menu.title", "Menu: main");
    let again = fs::read_to_string(temp_dir.path().join("ja.yaml")).unwrap();
    assert_eq!(again, written);

    // and the file still loads
    let reloaded = Translator::new(TranslatorConfig::default());
    reloaded.load_dir(temp_dir.path()).unwrap();
    assert_eq!(reloaded.message(Locale::Japanese, "menu.title"), "Menu: main");
}

#[test]
fn release_mode_never_writes() {
    let temp_dir = lang_dir();
    let before = fs::read_to_string(temp_dir.path().join("ja.yaml")).unwrap();
    let translator = load(temp_dir.path(), TranslatorConfig::default().with_release(true));

    assert_eq!(
        translator.message_with_fallback(Locale::Japanese, "missing", "fallback"),
        "fallback"
    );
    assert_eq!(fs::read_to_string(temp_dir.path().join("ja.yaml")).unwrap(), before);
    assert_eq!(translator.message(Locale::Japanese, "missing"), "missing");
}

#[test]
fn message_map_covers_every_locale() {
    let temp_dir = lang_dir();
    let translator = load(temp_dir.path(), TranslatorConfig::default());

    let names = translator.message_map("command.ping", true);
    assert_eq!(names.len(), 32);
    assert_eq!(names[&Locale::EnglishUs], "ping-pong");
    assert_eq!(names[&Locale::Japanese], "command_ping");

    let plain = translator.message_map("command.ping", false);
    assert_eq!(plain[&Locale::EnglishUs], "ping pong");
}

#[test]
fn fallback_locale_is_configurable() {
    let temp_dir = lang_dir();
    let config = TranslatorConfig::default().with_fallback_locale(Locale::EnglishUs);
    let translator = load(temp_dir.path(), config);

    assert_eq!(translator.message(Locale::German, "test"), "Test");
}

#[test]
fn unsupported_file_is_an_error() {
    let temp_dir = lang_dir();
    fs::write(temp_dir.path().join("notes.txt"), "hello").unwrap();

    let err = Translator::new(TranslatorConfig::default())
        .load_dir(temp_dir.path())
        .unwrap_err();
    assert!(matches!(err.kind, TranslationErrorKind::UnsupportedFormat(_)));
}

#[test]
fn malformed_file_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("ja.json"), "{not json").unwrap();

    let err = Translator::new(TranslatorConfig::default())
        .load_dir(temp_dir.path())
        .unwrap_err();
    assert!(matches!(err.kind, TranslationErrorKind::Parse(_)));
}

#[test]
fn missing_directory_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Translator::new(TranslatorConfig::default())
        .load_dir(temp_dir.path().join("absent"))
        .unwrap_err();
    assert!(matches!(err.kind, TranslationErrorKind::ReadDir(_)));
}
