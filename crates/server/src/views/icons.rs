use maud::{html, Markup};

/// SVG path data for the icon names editors may pick in the CMS.
fn path_for(name: &str) -> Option<&'static str> {
    let path = match name.trim().to_ascii_lowercase().as_str() {
        "code" | "web" => "M8 6l-6 6 6 6M16 6l6 6-6 6",
        "globe" | "site" => "M12 2a10 10 0 100 20 10 10 0 000-20zM2 12h20M12 2c3 3 3 17 0 20M12 2c-3 3-3 17 0 20",
        "mobile" | "smartphone" => "M7 2h10a1 1 0 011 1v18a1 1 0 01-1 1H7a1 1 0 01-1-1V3a1 1 0 011-1zM11 18h2",
        "design" | "palette" => "M12 2a10 10 0 000 20c1 0 2-1 2-2s-1-2 0-3 3 0 4 0a4 4 0 004-4c0-6-4-11-10-11z",
        "seo" | "search" => "M11 4a7 7 0 100 14 7 7 0 000-14zM21 21l-5-5",
        "chart" | "marketing" => "M4 20V10M10 20V4M16 20v-7M22 20H2",
        "shield" | "security" => "M12 2l8 4v6c0 5-3.5 9-8 10-4.5-1-8-5-8-10V6z",
        "rocket" => "M5 19c1-3 3-5 5-6l1 1c-1 2-3 4-6 5zM12 14l-2-2c2-6 6-9 12-10-1 6-4 10-10 12z",
        "cloud" | "hosting" => "M7 18h10a4 4 0 000-8 6 6 0 00-11.5 1.5A3.5 3.5 0 007 18z",
        "check" => "M4 12l5 5L20 6",
        _ => return None,
    };
    Some(path)
}

const FALLBACK: &str = "M12 3l2.5 6.5L21 12l-6.5 2.5L12 21l-2.5-6.5L3 12l6.5-2.5z";

/// Inline SVG icon; unknown names get a neutral sparkle.
pub fn icon(name: &str) -> Markup {
    let d = path_for(name).unwrap_or(FALLBACK);
    html! {
        svg class="icon" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
            stroke-linejoin="round" aria-hidden="true" {
            path d=(d) {}
        }
    }
}
