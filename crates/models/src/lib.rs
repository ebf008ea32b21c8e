//! Content types of the agency site.
//!
//! Two layers live here: wire types that mirror the Content Store's JSON
//! (`strapi`, `*Attributes`) and the normalized records pages render
//! (`Service`, `Project`, ...). Converting an `Entry<..Attributes>` into its
//! record is the single place where defaults are applied.

pub mod components;
pub mod errors;
pub mod media;
pub mod project;
pub mod richtext;
pub mod service;
pub mod slug;
pub mod strapi;

pub use components::{Characteristic, FaqItem, ProcessStep, Seo, Tag, Technology, TypeService};
pub use media::Image;
pub use project::{Project, ProjectAttributes};
pub use richtext::{Block, Inline, ListBlock, ListFormat, ListNode, RichText, TextRun};
pub use service::{Service, ServiceAttributes};
pub use slug::Slug;
pub use strapi::{Entry, Envelope, Relation};
