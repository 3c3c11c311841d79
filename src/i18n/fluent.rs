// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const DEFAULT_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|s| s.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((_, errors)) => {
                    tracing::warn!(file = filename, ?errors, "skipping malformed translation file");
                    continue;
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Plain interpolation; the UI does not mix text directions
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, ?errors, "translation file has conflicting keys");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| default_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        for locale in [&self.current_locale, &self.default_locale] {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. CLI args
    if let Some(lang) = cli_lang.and_then(|s| s.parse::<LanguageIdentifier>().ok()) {
        if available.contains(&lang) {
            return Some(lang);
        }
    }

    // 2. Config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|s| s.parse::<LanguageIdentifier>().ok())
    {
        if available.contains(&lang) {
            return Some(lang);
        }
    }

    // 3. OS locale
    if let Some(os_lang) =
        sys_locale::get_locale().and_then(|s| s.parse::<LanguageIdentifier>().ok())
    {
        if available.contains(&os_lang) {
            return Some(os_lang);
        }
    }

    None
}
