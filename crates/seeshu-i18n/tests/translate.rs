use std::str::FromStr;

use seeshu_i18n::{Language, LanguagePreference, catalog, translate};

#[test]
fn known_key_resolves_in_each_language() {
    assert_eq!(translate(Language::English, "login.title"), "Swasthye Seeshu");
    assert_eq!(translate(Language::Hindi, "login.title"), "स्वास्थ्य शिशु");
    assert_eq!(translate(Language::Bengali, "login.title"), "স্বাস্থ্য শিশু");
    assert_eq!(translate(Language::Tamil, "login.title"), "சுகாதார குழந்தை");
}

#[test]
fn unknown_key_falls_through_to_the_key_itself() {
    assert_eq!(translate(Language::Hindi, "login.noSuchKey"), "login.noSuchKey");
}

/// Every catalog must cover the full English key set, in order, so a view
/// never mixes languages mid-page.
#[test]
fn catalogs_cover_the_english_key_set() {
    let english_keys: Vec<&str> = catalog::table(Language::English)
        .iter()
        .map(|(k, _)| *k)
        .collect();

    for language in Language::ALL {
        let keys: Vec<&str> = catalog::table(language).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, english_keys, "catalog mismatch for {language:?}");
    }
}

#[test]
fn language_parses_from_wire_form() {
    for language in Language::ALL {
        assert_eq!(Language::from_str(language.as_str()).unwrap(), language);
    }
    assert!(Language::from_str("klingon").is_err());
}

#[test]
fn preference_starts_english_and_changes_only_via_setter() {
    let mut prefs = LanguagePreference::new();
    assert_eq!(prefs.language(), Language::English);
    assert_eq!(prefs.t("login.signIn"), "Sign In");

    prefs.set_language(Language::Tamil);
    assert_eq!(prefs.language(), Language::Tamil);
    assert_eq!(prefs.t("login.signIn"), "உள்நுழையவும்");
}
