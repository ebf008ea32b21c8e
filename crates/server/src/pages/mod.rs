//! Route handlers. Each fetches through the `ContentRepository` in state and
//! hands plain records to `views`.

pub mod contact;
pub mod home;
pub mod projects;
pub mod services;
pub mod sitemap;
pub mod system;
