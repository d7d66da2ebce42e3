//! About page: artist bio and contact details.

use dioxus::prelude::*;

use crate::state::SiteContext;

#[component]
pub fn AboutView() -> Element {
    let ctx = use_context::<SiteContext>();

    rsx! {
        div { class: "about reveal",
            h1 { class: "page-title", {ctx.t("about.aboutTheArtist")} }
            p { class: "about-bio", {ctx.t("about.bio")} }

            div { class: "about-contact",
                h2 { {ctx.t("about.contact")} }
                div { class: "contact-line", "contact@gallazubko.art" }
                div { class: "contact-line", "+380 XX XXX XX XX" }
                div { class: "contact-line", "Kyiv, Ukraine" }
            }
        }
    }
}
