//! Dioxus components, one module per view.

use dioxus::prelude::*;

use crate::reveal;
use crate::state::{Page, SiteContext};

pub mod about;
pub mod app;
pub mod artwork_detail;
pub mod gallery;
pub mod home;
pub mod language_switch;
pub mod works;

/// Switch pages and smooth-scroll back to the top of the window. The scroll
/// is a webview side effect, so it lives here rather than in the state
/// transition itself.
pub fn navigate_to(mut ctx: SiteContext, page: Page) {
    ctx.view.write().navigate(page);
    document::eval(reveal::SCROLL_TO_TOP);
}
