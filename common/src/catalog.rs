// static page content
//
// nothing here is fetched or persisted; the storefront display is rebuilt from these
// tables on every page load

use std::fmt;

use crate::style::Palette;

pub const BRAND_NAME: &str = "Carolina Minted";
pub const BRAND_WORDMARK: (&str, &str) = ("CAROLINA", "MINTED");
pub const BRAND_MONOGRAM: &str = "CM";
pub const ESTABLISHED: &str = "Est. 2024 • Chapel Hill, NC";
pub const COPYRIGHT: &str = "© 2024 Carolina Minted Collectibles, LLC. All rights reserved.";

// identities for the fixed icon set
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Menu,
    Close,
    Bag,
    Shield,
    Star,
    Bolt,
}

impl Glyph {
    // accent glyphs are stroked in the brand color, chrome glyphs inherit the text color
    pub fn stroke(self) -> &'static str {
        match self {
            Self::Shield | Self::Star | Self::Bolt => Palette::CarolinaBlue.hex(),
            Self::Menu | Self::Close | Self::Bag => "currentColor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Menu => "Open menu",
            Self::Close => "Close menu",
            Self::Bag => "Cart",
            Self::Shield => "Certified",
            Self::Star => "Mint",
            Self::Bolt => "Fast shipping",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        glyph: Glyph::Shield,
        title: "Certified Authentic",
        description: "Every item is verified by our expert team or third-party graders.",
    },
    Feature {
        glyph: Glyph::Bolt,
        title: "Lightning Fast Shipping",
        description: "Same-day processing on all orders placed before 2PM EST.",
    },
    Feature {
        glyph: Glyph::Star,
        title: "Mint Condition",
        description: "We specialize in Gem Mint 10s and pristine raw cards.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductKind {
    Grail,
    Sealed,
    Memorabilia,
    Auto,
}

impl ProductKind {
    pub fn badge(self) -> &'static str {
        match self {
            Self::Grail => "GRAIL",
            Self::Sealed => "SEALED",
            Self::Memorabilia => "MEMORABILIA",
            Self::Auto => "AUTO",
        }
    }
}

// color of the card mock-up shown in the product image slot
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFinish {
    Gold,
    Blue,
}

impl CardFinish {
    pub fn palette(self) -> Palette {
        match self {
            Self::Gold => Palette::Gold,
            Self::Blue => Palette::CarolinaBlue,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Product {
    pub title: &'static str,
    pub price_cents: u32,
    pub kind: ProductKind,
    pub finish: CardFinish,
}

impl Product {
    pub fn price(&self) -> Price {
        Price(self.price_cents)
    }
}

pub const PRODUCTS: [Product; 4] = [
    Product {
        title: "#23 Retro Rookie Card (Mint 10)",
        price_cents: 450_00,
        kind: ProductKind::Grail,
        finish: CardFinish::Gold,
    },
    Product {
        title: "Carolina Blue Hobby Box '24",
        price_cents: 120_00,
        kind: ProductKind::Sealed,
        finish: CardFinish::Blue,
    },
    Product {
        title: "Championship Court Floor Piece",
        price_cents: 85_00,
        kind: ProductKind::Memorabilia,
        finish: CardFinish::Blue,
    },
    Product {
        title: "Coach's Signature Series",
        price_cents: 299_00,
        kind: ProductKind::Auto,
        finish: CardFinish::Gold,
    },
];

// US dollar amount in cents, displayed as $1,234.56
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(pub u32);

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dollars = (self.0 / 100).to_string();
        let cents = self.0 % 100;

        let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
        for (i, digit) in dollars.chars().enumerate() {
            if i > 0 && (dollars.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "${grouped}.{cents:02}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_BLURB: &str =
    "The premier destination for high-end sports collectibles in the Tar Heel State.";

pub const FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        heading: "Shop",
        links: &["New Arrivals", "Best Sellers", "Graded Cards", "Memorabilia"],
    },
    FooterColumn {
        heading: "Support",
        links: &[
            "FAQ",
            "Shipping & Returns",
            "Authenticity Guarantee",
            "Contact Us",
        ],
    },
];
