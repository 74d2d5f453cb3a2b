// static page sections
//
// none of these hold state; each renders fixed content from minted_common::catalog
mod about;
mod features;
mod footer;
mod hero;
mod newsletter;
mod shop;

pub use about::AboutSection;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use newsletter::Newsletter;
pub use shop::ShopSection;

// in-page anchor for the newsletter signup, targeted by the hero's secondary action
pub const NEWSLETTER_ANCHOR: &str = "newsletter";
