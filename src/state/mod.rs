//! Browser-free state machines behind the page.
//!
//! Each module here is driven by the glue in `theme`, `tracker`,
//! `preferences` and the contact form component, and is unit-tested on the
//! host.

pub mod contact;
pub mod preferences;
pub mod scroll;
pub mod theme;
