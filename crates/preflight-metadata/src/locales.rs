//! Known Google Play listing locales.

/// Locale codes accepted for Google Play store listings, as used for
/// fastlane `metadata/android/<locale>` directory names.
pub const GOOGLE_PLAY_LOCALES: &[&str] = &[
    "af", "am", "ar", "hy-AM", "az-AZ", "eu-ES", "be", "bn-BD", "bg", "my-MM", "ca", "zh-HK",
    "zh-CN", "zh-TW", "hr", "cs-CZ", "da-DK", "nl-NL", "en-AU", "en-CA", "en-IN", "en-SG",
    "en-ZA", "en-GB", "en-US", "et", "fil", "fi-FI", "fr-CA", "fr-FR", "gl-ES", "ka-GE", "de-DE",
    "el-GR", "gu", "iw-IL", "hi-IN", "hu-HU", "is-IS", "id", "it-IT", "ja-JP", "kn-IN", "kk",
    "km-KH", "ko-KR", "ky-KG", "lo-LA", "lv", "lt", "mk-MK", "ms", "ms-MY", "ml-IN", "mr-IN",
    "mn-MN", "ne-NP", "no-NO", "fa", "fa-AE", "fa-AF", "fa-IR", "pl-PL", "pt-BR", "pt-PT", "pa",
    "ro", "rm", "ru-RU", "sr", "si-LK", "sk", "sl", "sq", "es-419", "es-ES", "es-US", "sw", "sv-SE",
    "ta-IN", "te-IN", "th", "tr-TR", "uk", "ur", "vi", "zu",
];

/// Returns `true` if `locale` is a known Google Play listing locale.
///
/// The comparison is exact: directory names are not normalized.
///
/// # Example
///
/// ```rust
/// use preflight_metadata::locales::is_known_locale;
///
/// assert!(is_known_locale("en-US"));
/// assert!(!is_known_locale("en_US"));
/// ```
pub fn is_known_locale(locale: &str) -> bool {
    GOOGLE_PLAY_LOCALES.contains(&locale)
}
