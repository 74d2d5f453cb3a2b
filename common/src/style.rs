// design tokens
//
// the webapp builds its global stylesheet from these values, and components query them
// instead of carrying their own color literals

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Palette {
    CarolinaBlue,
    Navy,
    White,
    OffWhite,
    Text,
    LightGray,
    Gold,
    Muted,
    Slate,
    Ink,
    FooterText,
}

// exposed as plain constants so they can be spliced into const stylesheets
pub const CAROLINA_BLUE: &str = "#7BAFD4";
pub const NAVY: &str = "#13294B";
pub const WHITE: &str = "#FFFFFF";
pub const OFF_WHITE: &str = "#F8F9FA";
pub const TEXT: &str = "#1F2937";
pub const LIGHT_GRAY: &str = "#E5E7EB";
pub const GOLD: &str = "#FCD34D";
pub const MUTED: &str = "#6B7280";
pub const SLATE: &str = "#4B5563";
pub const INK: &str = "#0F172A";
pub const FOOTER_TEXT: &str = "#94A3B8";

impl Palette {
    pub const ALL: [Palette; 11] = [
        Self::CarolinaBlue,
        Self::Navy,
        Self::White,
        Self::OffWhite,
        Self::Text,
        Self::LightGray,
        Self::Gold,
        Self::Muted,
        Self::Slate,
        Self::Ink,
        Self::FooterText,
    ];

    pub const fn hex(self) -> &'static str {
        match self {
            Self::CarolinaBlue => CAROLINA_BLUE,
            Self::Navy => NAVY,
            Self::White => WHITE,
            Self::OffWhite => OFF_WHITE,
            Self::Text => TEXT,
            Self::LightGray => LIGHT_GRAY,
            Self::Gold => GOLD,
            Self::Muted => MUTED,
            Self::Slate => SLATE,
            Self::Ink => INK,
            Self::FooterText => FOOTER_TEXT,
        }
    }

    pub const fn css_var(self) -> &'static str {
        match self {
            Self::CarolinaBlue => "--carolina-blue",
            Self::Navy => "--navy",
            Self::White => "--white",
            Self::OffWhite => "--off-white",
            Self::Text => "--text",
            Self::LightGray => "--light-gray",
            Self::Gold => "--gold",
            Self::Muted => "--muted",
            Self::Slate => "--slate",
            Self::Ink => "--ink",
            Self::FooterText => "--footer-text",
        }
    }

    // var(--navy), for inline style attributes
    pub fn var(self) -> String {
        format!("var({})", self.css_var())
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

// layout tokens
pub const CONTAINER_MAX_WIDTH: &str = "1200px";
pub const CONTAINER_GUTTER: &str = "20px";
pub const SECTION_PADDING: &str = "80px";
pub const HEADER_PADDING: &str = "20px";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
        }
    }
}
