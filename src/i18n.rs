//! Two-language string catalog with dotted-key lookup.
//!
//! Pure lookup layer: the active language lives in the site context and the
//! on-disk preference lives in [`crate::prefs`]. A key missing in the active
//! language falls back to English; a key unknown in both languages is echoed
//! back so a typo shows up in the UI instead of panicking.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
}

impl Language {
    /// ISO 639-1 code, also used in the preferences file.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uk => "uk",
        }
    }

    /// Label shown in the language selector, in its own language.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Uk => "Українська",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::En),
            "uk" => Some(Language::Uk),
            _ => None,
        }
    }

    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Uk]
    }
}

/// Resolve a dotted key (`"nav.works"`) against the given language.
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    let resolved: Option<&'a str> = lookup(lang, key).or_else(|| lookup(Language::En, key));
    resolved.unwrap_or(key)
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    let text = match lang {
        Language::En => match key {
            "nav.works" => "Works",
            "nav.gallery" => "Gallery",
            "nav.about" => "About",
            "home.featuredWork" => "FEATURED WORK",
            "home.latestExhibition" => "Latest Exhibition",
            "home.openingReception" => "Opening Reception",
            "home.viewDetails" => "VIEW DETAILS",
            "home.viewAllExhibitions" => "VIEW ALL EXHIBITIONS",
            "works.allWorks" => "All Works",
            "gallery.exhibitions" => "Exhibitions",
            "gallery.showsSubtitle" => "Past and Upcoming Shows",
            "gallery.upcomingExhibitions" => "Upcoming Exhibitions",
            "gallery.pastExhibitions" => "Past Exhibitions",
            "gallery.learnMore" => "LEARN MORE",
            "about.aboutTheArtist" => "About the Artist",
            "about.bio" => "Galla Zubko is a contemporary artist based in Kyiv, Ukraine, known for her vibrant and emotionally charged paintings that explore themes of nature, urban life, and human connection.",
            "about.contact" => "Contact",
            "artwork.back" => "Back",
            "artwork.inquire" => "INQUIRE ABOUT THIS PIECE",
            "footer.quickLinks" => "Quick Links",
            "footer.contact" => "Contact",
            "footer.rights" => "All rights reserved.",
            _ => return None,
        },
        Language::Uk => match key {
            "nav.works" => "Роботи",
            "nav.gallery" => "Галерея",
            "nav.about" => "Про художницю",
            "home.featuredWork" => "ОБРАНА РОБОТА",
            "home.latestExhibition" => "Остання виставка",
            "home.openingReception" => "Відкриття",
            "home.viewDetails" => "ДЕТАЛЬНІШЕ",
            "home.viewAllExhibitions" => "УСІ ВИСТАВКИ",
            "works.allWorks" => "Усі роботи",
            "gallery.exhibitions" => "Виставки",
            "gallery.showsSubtitle" => "Минулі та майбутні покази",
            "gallery.upcomingExhibitions" => "Майбутні виставки",
            "gallery.pastExhibitions" => "Минулі виставки",
            "gallery.learnMore" => "ДІЗНАТИСЬ БІЛЬШЕ",
            "about.aboutTheArtist" => "Про художницю",
            "about.bio" => "Галла Зубко - сучасна художниця з Києва, Україна, відома своїми яскравими та емоційно насиченими картинами, які досліджують теми природи, міського життя та людських звʼязків.",
            "about.contact" => "Контакти",
            "artwork.back" => "Назад",
            "artwork.inquire" => "ЗАМОВИТИ РОБОТУ",
            "footer.quickLinks" => "Швидкі посилання",
            "footer.contact" => "Контакти",
            "footer.rights" => "Всі права захищені.",
            _ => return None,
        },
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[&str] = &[
        "nav.works",
        "nav.gallery",
        "nav.about",
        "home.featuredWork",
        "home.latestExhibition",
        "home.openingReception",
        "home.viewDetails",
        "home.viewAllExhibitions",
        "works.allWorks",
        "gallery.exhibitions",
        "gallery.showsSubtitle",
        "gallery.upcomingExhibitions",
        "gallery.pastExhibitions",
        "gallery.learnMore",
        "about.aboutTheArtist",
        "about.bio",
        "artwork.back",
        "artwork.inquire",
        "footer.quickLinks",
        "footer.contact",
        "footer.rights",
    ];

    #[test]
    fn language_switch_changes_works_header() {
        assert_eq!(translate(Language::Uk, "works.allWorks"), "Усі роботи");
        assert_eq!(translate(Language::En, "works.allWorks"), "All Works");
    }

    #[test]
    fn unknown_key_echoes_key() {
        assert_eq!(translate(Language::En, "nav.shop"), "nav.shop");
        assert_eq!(translate(Language::Uk, "nav.shop"), "nav.shop");
    }

    #[test]
    fn both_languages_cover_every_key() {
        for key in ALL_KEYS {
            for &lang in Language::all() {
                let text = translate(lang, key);
                assert_ne!(text, *key, "{} missing for {:?}", key, lang);
                assert!(!text.is_empty());
            }
        }
    }

    #[test]
    fn code_round_trip() {
        for &lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn serde_uses_language_codes() {
        assert_eq!(serde_json::to_string(&Language::Uk).unwrap(), "\"uk\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
