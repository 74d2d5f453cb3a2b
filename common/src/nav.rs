use std::fmt;

// navigation links
//
// the order here is the order shown in both the inline nav and the mobile drawer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavLink {
    Home,
    ShopDrops,
    AboutUs,
    Contact,
}

impl NavLink {
    pub const ALL: [NavLink; 4] = [
        NavLink::Home,
        NavLink::ShopDrops,
        NavLink::AboutUs,
        NavLink::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::ShopDrops => "Shop Drops",
            Self::AboutUs => "About Us",
            Self::Contact => "Contact",
        }
    }

    // in-page anchor owned by one of the static sections
    pub fn anchor(self) -> String {
        anchor_id(self.label())
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for NavLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Derives an anchor identifier from a navigation label.
///
/// The label is lower-cased and only its first space becomes a hyphen, so
/// `"Shop Drops"` maps to `"shop-drops"`.
pub fn anchor_id(label: &str) -> String {
    label.to_lowercase().replacen(' ', "-", 1)
}
