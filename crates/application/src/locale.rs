use std::sync::Arc;

use crate::ports::KeyValueStore;

/// Storage key for the last-selected locale.
pub const LOCALE_KEY: &str = "appLocale";

const DEFAULT_LOCALE: &str = "en-US";

/// One supported display locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, e.g. `en-US`.
    pub code: &'static str,
    /// Human-readable name shown in the selector.
    pub name: &'static str,
    /// Date display pattern for this locale.
    pub date_format: &'static str,
    /// ISO 4217 currency code.
    pub currency: &'static str,
}

const SUPPORTED: &[Locale] = &[
    Locale {
        code: "en-US",
        name: "English (US)",
        date_format: "MM/dd/yyyy",
        currency: "USD",
    },
    Locale {
        code: "es-ES",
        name: "Español",
        date_format: "dd/MM/yyyy",
        currency: "EUR",
    },
    Locale {
        code: "fr-FR",
        name: "Français",
        date_format: "dd/MM/yyyy",
        currency: "EUR",
    },
    Locale {
        code: "ru-RU",
        name: "Русский",
        date_format: "dd.MM.yyyy",
        currency: "RUB",
    },
    Locale {
        code: "hy-AM",
        name: "Հայերեն",
        date_format: "dd.MM.yyyy",
        currency: "AMD",
    },
];

/// Persists the locale selection and answers display-format lookups.
///
/// An unknown stored code falls back to the default locale rather
/// than failing, so a stale value from an older release never breaks
/// startup.
#[derive(Clone)]
pub struct LocaleService {
    store: Arc<dyn KeyValueStore>,
}

impl LocaleService {
    /// Creates a locale service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the full table of supported locales.
    #[must_use]
    pub fn supported(&self) -> &'static [Locale] {
        SUPPORTED
    }

    /// Returns the active locale, falling back to the default when
    /// nothing valid is stored.
    #[must_use]
    pub fn current(&self) -> Locale {
        let saved = self.store.get(LOCALE_KEY);
        let code = saved.as_deref().unwrap_or(DEFAULT_LOCALE);
        self.lookup(code).unwrap_or_else(Self::default_locale)
    }

    /// Selects a locale and persists the choice.
    ///
    /// Unknown codes are ignored so the stored value always names a
    /// supported locale.
    pub fn set(&self, code: &str) {
        if self.lookup(code).is_some() {
            self.store.put(LOCALE_KEY, code);
        }
    }

    /// Date display pattern of the active locale.
    #[must_use]
    pub fn date_format(&self) -> &'static str {
        self.current().date_format
    }

    /// Currency code of the active locale.
    #[must_use]
    pub fn currency_code(&self) -> &'static str {
        self.current().currency
    }

    /// Language code of the active locale, e.g. `en` for `en-US`.
    #[must_use]
    pub fn language(&self) -> &'static str {
        let locale = self.current();
        locale.code.split('-').next().unwrap_or(locale.code)
    }

    fn lookup(&self, code: &str) -> Option<Locale> {
        SUPPORTED.iter().copied().find(|locale| locale.code == code)
    }

    fn default_locale() -> Locale {
        SUPPORTED[0]
    }
}
