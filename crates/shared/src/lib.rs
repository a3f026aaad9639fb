//! Domain types shared between the navigation controller and its hosts.

pub mod domain;
pub mod error;
