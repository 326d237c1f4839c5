// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let (bundles, available_locales) = load_embedded_bundles();

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

type Bundles = HashMap<LanguageIdentifier, FluentBundle<FluentResource>>;

/// Parse every embedded `<locale>.ftl` into a Fluent bundle. The bundles
/// ship inside the binary, so a parse failure is a build defect and panics.
fn load_embedded_bundles() -> (Bundles, Vec<LanguageIdentifier>) {
    let mut bundles = HashMap::new();
    let mut available_locales = Vec::new();

    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        let Some(content) = Asset::get(filename) else {
            continue;
        };

        let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
        let res = FluentResource::try_new(source).expect("Failed to parse FTL file.");
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        bundle.add_resource(res).expect("Failed to add resource.");

        bundles.insert(locale.clone(), bundle);
        available_locales.push(locale);
    }

    (bundles, available_locales)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use unic_langid::LanguageIdentifier;

    #[test]
    fn resolve_locale_prefers_cli() {
        let mut config = Config::default();
        config.language = Some("en-US".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "hi".parse().unwrap()];
        let lang = resolve_locale(Some("hi".to_string()), &config, &available);
        assert_eq!(lang, Some("hi".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let mut config = Config::default();
        config.language = Some("hi".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "hi".parse().unwrap()];
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("hi".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_languages() {
        let mut config = Config::default();
        config.language = Some("fr".to_string());
        let available: Vec<LanguageIdentifier> =
            vec!["en-US".parse().unwrap(), "hi".parse().unwrap()];
        let lang = resolve_locale(Some("de".to_string()), &config, &available);
        // Neither CLI nor config match; only the OS locale could resolve here.
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn embedded_bundles_cover_both_languages() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n
            .available_locales
            .contains(&"en-US".parse::<LanguageIdentifier>().unwrap()));
        assert!(i18n
            .available_locales
            .contains(&"hi".parse::<LanguageIdentifier>().unwrap()));
    }

    #[test]
    fn tr_reports_missing_keys() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert!(i18n.tr("no-such-key").starts_with("MISSING:"));
    }

    #[test]
    fn tr_resolves_window_title_in_both_locales() {
        let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let english = i18n.tr("window-title");
        assert!(!english.starts_with("MISSING:"));

        i18n.set_locale("hi".parse().unwrap());
        let hindi = i18n.tr("window-title");
        assert!(!hindi.starts_with("MISSING:"));
    }
}
