// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::{langid, LanguageIdentifier};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale used when nothing else matches.
pub const DEFAULT_LOCALE: LanguageIdentifier = langid!("en-US");

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
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
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            match build_bundle(&locale, source) {
                Ok(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                Err(error) => tracing::warn!(%locale, %error, "skipping translation file"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(DEFAULT_LOCALE);
        tracing::debug!(locale = %current_locale, "i18n initialized");

        Self {
            bundles,
            available_locales,
            current_locale,
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

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
                tracing::debug!(key, ?errors, "fluent formatting errors");
            }
        }
        format!("MISSING: {key}")
    }
}

fn build_bundle(locale: &LanguageIdentifier, source: String) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| Error::I18n(format!("{} parse errors", errors.len())))?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Plain output; the views are not bidi-sensitive.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::I18n(format!("{} duplicate messages", errors.len())))?;
    Ok(bundle)
}

/// Picks the UI locale: CLI flag, then config, then OS locale.
fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    resolve_locale_from(
        cli_lang.as_deref(),
        config.general.language.as_deref(),
        sys_locale::get_locale().as_deref(),
        available,
    )
}

fn resolve_locale_from(
    cli_lang: Option<&str>,
    config_lang: Option<&str>,
    os_lang: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config_lang, os_lang]
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|lang| available.contains(lang))
}
