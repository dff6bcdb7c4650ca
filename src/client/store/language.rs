/// Display languages offered by the storefront chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
    De,
    Fr,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Es, Language::De, Language::Fr];

    /// ISO 639-1 code, as stored in the user's language preference.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::De => "de",
            Language::Fr => "fr",
        }
    }

    /// Native-language label shown in the switcher dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::De => "Deutsch",
            Language::Fr => "Français",
        }
    }

    /// Maps a stored preference code back to a language, defaulting to English.
    pub fn from_code(code: &str) -> Self {
        Language::ALL
            .into_iter()
            .find(|language| language.code() == code)
            .unwrap_or_default()
    }
}

/// Currently selected display language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LanguageState {
    pub current: Language,
}
