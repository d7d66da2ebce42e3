//! Gallery page: hero banner plus upcoming and past exhibition sections.

use dioxus::prelude::*;

use crate::catalog::{self, Exhibition};
use crate::state::SiteContext;

#[component]
pub fn GalleryView() -> Element {
    let ctx = use_context::<SiteContext>();
    let (upcoming, past) = catalog::partition_by_status(catalog::EXHIBITIONS);

    rsx! {
        div { class: "gallery reveal",
            div { class: "gallery-hero",
                img { src: catalog::GALLERY_HERO_IMAGE, alt: "Gallery space" }
                div { class: "gallery-hero-overlay",
                    h1 { {ctx.t("gallery.exhibitions")} }
                    p { {ctx.t("gallery.showsSubtitle")} }
                }
            }

            section { class: "gallery-section reveal",
                h2 { {ctx.t("gallery.upcomingExhibitions")} }
                for exhibition in upcoming {
                    UpcomingExhibition { exhibition }
                }
            }

            section { class: "gallery-section reveal",
                h2 { {ctx.t("gallery.pastExhibitions")} }
                div { class: "past-grid",
                    for exhibition in past {
                        PastExhibition { exhibition }
                    }
                }
            }
        }
    }
}

/// Wide two-column card for a show that has not opened yet.
#[component]
fn UpcomingExhibition(exhibition: &'static Exhibition) -> Element {
    let ctx = use_context::<SiteContext>();

    rsx! {
        div { class: "upcoming-exhibition",
            div { class: "upcoming-exhibition-image",
                img { src: "{exhibition.image}", alt: "{exhibition.title}" }
            }
            div { class: "upcoming-exhibition-info",
                h3 { "{exhibition.title}" }
                p { class: "exhibition-date", "{exhibition.date}" }
                p { class: "exhibition-location", "{exhibition.location}" }
                p { class: "exhibition-description", "{exhibition.description}" }
                button { class: "outline-button", {ctx.t("gallery.learnMore")} }
            }
        }
    }
}

#[component]
fn PastExhibition(exhibition: &'static Exhibition) -> Element {
    rsx! {
        div { class: "past-exhibition",
            div { class: "past-exhibition-image",
                img { src: "{exhibition.image}", alt: "{exhibition.title}" }
            }
            h3 { "{exhibition.title}" }
            p { class: "exhibition-date", "{exhibition.date}" }
            p { class: "exhibition-location", "{exhibition.location}" }
        }
    }
}
