//! Works page: the full artwork grid.

use dioxus::prelude::*;

use crate::catalog;
use crate::state::SiteContext;

#[component]
pub fn WorksView() -> Element {
    let mut ctx = use_context::<SiteContext>();

    rsx! {
        div { class: "works reveal",
            h1 { class: "page-title", {ctx.t("works.allWorks")} }
            div { class: "works-grid",
                for (index, artwork) in catalog::ARTWORKS.iter().enumerate() {
                    div {
                        key: "{artwork.title}",
                        class: "work-card",
                        onclick: move |_| ctx.view.write().select_artwork(index),
                        div { class: "work-card-image",
                            img { src: "{artwork.image}", alt: "{artwork.title}" }
                        }
                        h3 { class: "work-card-title", "{artwork.title}" }
                        p { class: "work-card-meta", "{artwork.technique}, {artwork.dimensions}" }
                        p { class: "work-card-year", "{artwork.year}" }
                    }
                }
            }
        }
    }
}
