//! Language selector dropdown.

use dioxus::prelude::*;

use crate::i18n::Language;
use crate::prefs::{self, Preferences};
use crate::state::SiteContext;

#[component]
pub fn LanguageSwitch() -> Element {
    let mut ctx = use_context::<SiteContext>();
    let current = *ctx.language.read();

    rsx! {
        select {
            class: "language-switch",
            value: "{current.code()}",
            onchange: move |evt| {
                let Some(lang) = Language::from_code(&evt.value()) else {
                    return;
                };
                ctx.language.set(lang);
                if let Err(err) = prefs::save(&Preferences { language: lang }) {
                    tracing::warn!("failed to persist language choice: {err}");
                }
            },
            for lang in Language::all().iter().copied() {
                option {
                    value: "{lang.code()}",
                    selected: lang == current,
                    "{lang.display_name()}"
                }
            }
        }
    }
}
