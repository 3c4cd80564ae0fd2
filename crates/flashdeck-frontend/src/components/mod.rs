//! Reusable UI components for the flashdeck frontend.
//!
//! The components only hold their own input state; everything that crosses
//! the network goes through the page controller.

pub mod account_bar;
pub mod create_set_form;
pub mod login_form;
pub mod status_banner;

pub use account_bar::*;
pub use create_set_form::*;
pub use login_form::*;
pub use status_banner::*;
