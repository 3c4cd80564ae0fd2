//! Construction of the services the page depends on.

pub mod api;
pub mod controller;
