//! Reusable HTML components for server-rendered pages

pub mod layout;
