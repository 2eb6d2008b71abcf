// Landing page sections

/// Brand name used across the page (single source of truth)
pub const SITE_NAME: &str = "AHTesters";

/// Form-backend endpoint the quote modal posts to
pub const QUOTE_ENDPOINT: &str = "https://formsubmit.co/ajax/info@ahtesters.com";

mod about;
mod contact;
mod footer;
mod greeting;
mod hero;
mod nav;
mod quote_modal;
mod services;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use greeting::ConsoleGreeting;
pub use hero::Hero;
pub use nav::Nav;
pub use quote_modal::QuoteModal;
pub use services::Services;
