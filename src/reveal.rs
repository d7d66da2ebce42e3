//! Scroll-reveal effect.
//!
//! Marked `.reveal` containers fade in once their top edge comes within
//! [`REVEAL_THRESHOLD_PX`] of the viewport bottom. One-way: an element that
//! has been revealed stays revealed. The observer runs in the webview with no
//! knowledge of controller state, so it is installed as a standalone snippet.

/// Distance from the viewport bottom at which an element counts as visible.
pub const REVEAL_THRESHOLD_PX: u32 = 100;

/// Snippet run after each view change. Installs the scroll listener once and
/// performs an immediate pass so above-the-fold content reveals without
/// scrolling.
pub fn install_script() -> String {
    format!(
        r#"(function() {{
    var reveal = function() {{
        var els = document.querySelectorAll('.reveal');
        for (var i = 0; i < els.length; i++) {{
            if (els[i].getBoundingClientRect().top < window.innerHeight - {threshold}) {{
                els[i].classList.add('active');
            }}
        }}
    }};
    if (!window.__revealInstalled) {{
        window.__revealInstalled = true;
        window.addEventListener('scroll', reveal);
    }}
    reveal();
}})();"#,
        threshold = REVEAL_THRESHOLD_PX
    )
}

/// Smooth scroll-to-top, issued by the navbar on page changes.
pub const SCROLL_TO_TOP: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_embeds_threshold() {
        let script = install_script();
        assert!(script.contains("window.innerHeight - 100"));
    }

    #[test]
    fn reveal_only_adds_class() {
        // One-way effect: the snippet must never remove the class.
        let script = install_script();
        assert!(script.contains("classList.add"));
        assert!(!script.contains("classList.remove"));
    }
}
