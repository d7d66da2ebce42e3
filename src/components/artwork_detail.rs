//! Artwork detail view, shown whenever a selection is set.

use dioxus::prelude::*;

use crate::catalog::Artwork;
use crate::state::SiteContext;

#[component]
pub fn ArtworkDetail(artwork: &'static Artwork) -> Element {
    let mut ctx = use_context::<SiteContext>();

    rsx! {
        div { class: "artwork-detail reveal",
            button {
                class: "back-button",
                onclick: move |_| ctx.view.write().clear_selection(),
                {format!("\u{2190} {}", ctx.t("artwork.back"))}
            }

            div { class: "artwork-detail-layout",
                div { class: "artwork-detail-image",
                    img { src: "{artwork.image}", alt: "{artwork.title}" }
                }
                div { class: "artwork-detail-info",
                    h1 { "{artwork.title}" }
                    p { class: "artwork-meta", "{artwork.technique}, {artwork.year}" }
                    p { class: "artwork-dimensions", "{artwork.dimensions}" }
                    p { class: "artwork-description", "{artwork.description}" }
                    button { class: "outline-button", {ctx.t("artwork.inquire")} }
                }
            }
        }
    }
}
