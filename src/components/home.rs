//! Home page: featured-work hero, latest exhibition blurb, thumbnail grid.

use dioxus::prelude::*;

use crate::catalog;
use crate::state::{Page, SiteContext};

use super::navigate_to;

#[component]
pub fn HomeView() -> Element {
    let mut ctx = use_context::<SiteContext>();
    let featured = catalog::featured();

    rsx! {
        section { class: "hero reveal",
            div { class: "hero-text",
                div { class: "hero-kicker", {ctx.t("home.featuredWork")} }
                h1 { class: "hero-title", "{featured.title}" }
                p { class: "hero-subtitle", "{featured.technique}, {featured.year}" }
                p { class: "hero-description", "{featured.description}" }
                button {
                    class: "outline-button",
                    onclick: move |_| ctx.view.write().select_artwork(0),
                    {ctx.t("home.viewDetails")}
                }
            }
            div { class: "hero-image",
                img { src: "{featured.image}", alt: "{featured.title}" }
            }
        }

        section { class: "home-exhibition reveal",
            div { class: "home-exhibition-text",
                h2 { {ctx.t("home.latestExhibition")} }
                p { class: "exhibition-name", "Contemporary Visions 2024" }
                p { class: "exhibition-date",
                    {format!("{}: March 15, 2024", ctx.t("home.openingReception"))}
                }
                p { class: "exhibition-blurb",
                    "Join us for an evening of art and conversation as we unveil new works exploring themes of nature, urban life, and human connection."
                }
                button {
                    class: "outline-button",
                    onclick: move |_| navigate_to(ctx, Page::Gallery),
                    {ctx.t("home.viewAllExhibitions")}
                }
            }

            div { class: "home-thumb-grid",
                for (index, artwork) in catalog::ARTWORKS.iter().enumerate() {
                    div {
                        key: "{artwork.title}",
                        class: "home-thumb",
                        onclick: move |_| ctx.view.write().select_artwork(index),
                        img { src: "{artwork.image}", alt: "{artwork.title}" }
                    }
                }
            }
        }
    }
}
