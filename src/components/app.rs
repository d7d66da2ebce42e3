//! Root app component: navbar, content region, footer.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::prefs;
use crate::reveal;
use crate::state::{ActiveView, Page, SiteContext, ViewState};

use super::navigate_to;

/// Root application component. Owns the site context and dispatches the
/// content region on the derived active view.
#[component]
pub fn App() -> Element {
    let ctx = use_context_provider(|| SiteContext {
        view: Signal::new(ViewState::default()),
        language: Signal::new(prefs::load().language),
    });

    // Re-run the reveal pass whenever navigation or a language switch
    // rebuilds the tree.
    use_effect(move || {
        let _ = ctx.view.read();
        let _ = ctx.language.read();
        document::eval(&reveal::install_script());
    });

    let content = match ctx.view.read().active_view() {
        ActiveView::Detail(artwork) => rsx! {
            super::artwork_detail::ArtworkDetail { artwork }
        },
        ActiveView::Home => rsx! {
            super::home::HomeView {}
        },
        ActiveView::Works => rsx! {
            super::works::WorksView {}
        },
        ActiveView::Gallery => rsx! {
            super::gallery::GalleryView {}
        },
        ActiveView::About => rsx! {
            super::about::AboutView {}
        },
    };

    rsx! {
        div { class: "site",
            NavBar {}
            main { class: "content",
                {content}
            }
            Footer {}
        }
    }
}

/// Fixed top navigation with desktop links and a mobile menu.
#[component]
fn NavBar() -> Element {
    let mut ctx = use_context::<SiteContext>();
    let menu_open = ctx.view.read().menu_open();

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-inner",
                h1 {
                    class: "brand",
                    onclick: move |_| navigate_to(ctx, Page::Home),
                    "Galla Zubko"
                }

                div { class: "nav-links",
                    for page in Page::nav_pages().iter().copied() {
                        NavLink { page }
                    }
                    super::language_switch::LanguageSwitch {}
                }

                button {
                    class: "menu-toggle",
                    onclick: move |_| ctx.view.write().toggle_menu(),
                    if menu_open { "\u{2715}" } else { "\u{2630}" }
                }
            }

            if menu_open {
                div { class: "mobile-menu",
                    for page in Page::nav_pages().iter().copied() {
                        MobileNavLink { page }
                    }
                    div { class: "mobile-menu-language",
                        super::language_switch::LanguageSwitch {}
                    }
                }
            }
        }
    }
}

#[component]
fn NavLink(page: Page) -> Element {
    let ctx = use_context::<SiteContext>();
    let label = page.nav_key().map(|key| ctx.t(key)).unwrap_or_default();

    rsx! {
        a {
            class: "nav-link",
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                navigate_to(ctx, page);
            },
            "{label}"
        }
    }
}

#[component]
fn MobileNavLink(page: Page) -> Element {
    let ctx = use_context::<SiteContext>();
    let label = page.nav_key().map(|key| ctx.t(key)).unwrap_or_default();

    rsx! {
        a {
            class: "mobile-nav-link",
            href: "#",
            onclick: move |evt| {
                evt.prevent_default();
                navigate_to(ctx, page);
            },
            "{label}"
        }
    }
}

/// Footer with quick links, contact details, and social links.
#[component]
fn Footer() -> Element {
    let ctx = use_context::<SiteContext>();
    let year = chrono::Utc::now().year();

    rsx! {
        footer { class: "footer reveal",
            div { class: "footer-columns",
                div { class: "footer-column",
                    h3 { {ctx.t("footer.quickLinks")} }
                    for page in Page::nav_pages().iter().copied() {
                        a {
                            class: "footer-link",
                            href: "#",
                            onclick: move |evt| {
                                evt.prevent_default();
                                navigate_to(ctx, page);
                            },
                            {page.nav_key().map(|key| ctx.t(key)).unwrap_or_default()}
                        }
                    }
                }

                div { class: "footer-column",
                    h3 { {ctx.t("footer.contact")} }
                    div { class: "footer-contact-line", "contact@gallazubko.art" }
                    div { class: "footer-contact-line", "+380 XX XXX XX XX" }
                    div { class: "footer-contact-line", "Kyiv, Ukraine" }
                }

                div { class: "footer-column",
                    h3 { "Social" }
                    div { class: "footer-social",
                        a { class: "footer-link", href: "#", "Instagram" }
                        a { class: "footer-link", href: "#", "Facebook" }
                        a { class: "footer-link", href: "#", "Twitter" }
                    }
                }
            }

            div { class: "footer-copyright",
                {format!("\u{a9} {} Galla Zubko. {}", year, ctx.t("footer.rights"))}
            }
        }
    }
}
