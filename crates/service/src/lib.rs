//! Service layer between the Content Store and the pages.
//! - `content`: typed REST client and the `ContentRepository` pages read from.
//! - `shaping`: render-time list transforms (dedupe, categories, sorting).
//! - `contact`: validation of contact form submissions.

pub mod contact;
pub mod content;
pub mod errors;
pub mod metrics;
pub mod shaping;
