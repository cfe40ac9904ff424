use std::collections::HashMap;

use serde_json::{Value, json};

const DEFAULT_LANGUAGE: &str = "en";

/// Resolves dot-separated message keys against per-language
/// dictionaries.
///
/// Lookup order: requested language, then the default language, then
/// the key itself. Values may carry `{{name}}` placeholders filled by
/// [`TranslationService::translate_with`].
pub struct TranslationService {
    dictionaries: HashMap<String, Value>,
    default_language: String,
}

impl TranslationService {
    /// Creates an empty service with the given default language.
    #[must_use]
    pub fn new(default_language: &str) -> Self {
        Self {
            dictionaries: HashMap::new(),
            default_language: default_language.to_owned(),
        }
    }

    /// Creates a service preloaded with the built-in English
    /// dictionary.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut service = Self::new(DEFAULT_LANGUAGE);
        service.add_language(DEFAULT_LANGUAGE, builtin_english());
        service
    }

    /// Registers or replaces the dictionary for a language.
    pub fn add_language(&mut self, language: &str, dictionary: Value) {
        self.dictionaries.insert(language.to_owned(), dictionary);
    }

    /// Resolves a key for a language, falling back to the default
    /// language and finally to the key itself.
    #[must_use]
    pub fn translate(&self, language: &str, key: &str) -> String {
        self.resolve(language, key)
            .unwrap_or_else(|| key.to_owned())
    }

    /// Resolves a key and substitutes `{{name}}` placeholders.
    #[must_use]
    pub fn translate_with(&self, language: &str, key: &str, params: &[(&str, &str)]) -> String {
        let mut message = self.translate(language, key);
        for (name, value) in params {
            message = message.replace(&format!("{{{{{name}}}}}"), value);
        }
        message
    }

    fn resolve(&self, language: &str, key: &str) -> Option<String> {
        if let Some(value) = self.lookup(language, key) {
            return Some(value);
        }
        if language != self.default_language {
            return self.lookup(&self.default_language, key);
        }
        None
    }

    fn lookup(&self, language: &str, key: &str) -> Option<String> {
        let mut node = self.dictionaries.get(language)?;
        for segment in key.split('.') {
            node = node.get(segment)?;
        }
        node.as_str().map(str::to_owned)
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn builtin_english() -> Value {
    json!({
        "errors": {
            "backendNotAvailable": "The server is not reachable. Please try again later.",
            "serverError": "The server reported an internal error.",
            "connectionFailed": "Connection failed. Check your network and try again.",
            "permissionDenied": "You do not have permission to perform this action.",
            "generic": "Something went wrong. Please try again."
        },
        "citizens": {
            "loadFailed": "Could not load the citizen registry.",
            "searchFailed": "Citizen search failed.",
            "created": "Citizen registered.",
            "updated": "Citizen updated.",
            "deleted": "Citizen deleted.",
            "saveFailed": "Could not save the citizen.",
            "deleteFailed": "Could not delete the citizen.",
            "householdCreated": "Household created for {{name}}.",
            "householdFailed": "Could not create the household.",
            "confirmDelete": "Delete this citizen? This cannot be undone."
        },
        "programs": {
            "loadFailed": "Could not load assistance programs.",
            "created": "Program created.",
            "updated": "Program updated.",
            "deleted": "Program deleted.",
            "saveFailed": "Could not save the program.",
            "deleteFailed": "Could not delete the program.",
            "confirmDelete": "Delete this program?"
        },
        "applications": {
            "loadFailed": "Could not load benefit applications.",
            "submitted": "Application submitted.",
            "draftSaved": "Draft saved.",
            "statusUpdated": "Application moved to {{status}}.",
            "statusFailed": "Could not update the application status.",
            "deleted": "Application deleted.",
            "saveFailed": "Could not save the application.",
            "deleteFailed": "Could not delete the application.",
            "confirmDelete": "Delete this application?"
        },
        "users": {
            "loadFailed": "Could not load user accounts.",
            "created": "User created.",
            "updated": "User updated.",
            "deleted": "User deleted.",
            "saveFailed": "Could not save the user.",
            "deleteFailed": "Could not delete the user.",
            "confirmDelete": "Delete this user account?"
        },
        "roles": {
            "loadFailed": "Could not load roles.",
            "saved": "Role saved.",
            "saveFailed": "Could not save the role.",
            "deleted": "Role deleted.",
            "deleteFailed": "Could not delete the role.",
            "confirmDelete": "Delete this role? Users holding it lose its permissions."
        },
        "analytics": {
            "loadFailed": "Could not load the dashboard."
        }
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::TranslationService;

    #[test]
    fn nested_keys_resolve() {
        let service = TranslationService::with_defaults();

        assert_eq!(
            service.translate("en", "programs.created"),
            "Program created."
        );
    }

    #[test]
    fn missing_language_falls_back_to_the_default() {
        let mut service = TranslationService::with_defaults();
        service.add_language("es", json!({ "programs": { "created": "Programa creado." } }));

        assert_eq!(
            service.translate("es", "programs.created"),
            "Programa creado."
        );
        // not translated into Spanish, English copy steps in
        assert_eq!(
            service.translate("es", "programs.deleted"),
            "Program deleted."
        );
    }

    #[test]
    fn unknown_key_surfaces_as_the_key_itself() {
        let service = TranslationService::with_defaults();

        assert_eq!(service.translate("en", "missing.key"), "missing.key");
    }

    #[test]
    fn placeholders_are_substituted() {
        let service = TranslationService::with_defaults();

        let message =
            service.translate_with("en", "applications.statusUpdated", &[("status", "APPROVED")]);

        assert_eq!(message, "Application moved to APPROVED.");
    }
}
