//! Staggered reveal-on-scroll. Purely cosmetic: the markup only carries a
//! `data-reveal` marker and a delay; `/assets/reveal.js` does the rest.

const STEP_MS: usize = 80;
const MAX_STEPS: usize = 8;

/// Inline style giving the `index`-th item of a list its reveal delay.
pub fn delay_style(index: usize) -> String {
    format!("--reveal-delay: {}ms", index.min(MAX_STEPS) * STEP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_grows_then_caps() {
        assert_eq!(delay_style(0), "--reveal-delay: 0ms");
        assert_eq!(delay_style(2), "--reveal-delay: 160ms");
        assert_eq!(delay_style(50), "--reveal-delay: 640ms");
    }
}
