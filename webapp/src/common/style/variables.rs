use constcat::concat;

use minted_common::style::{
    CAROLINA_BLUE, CONTAINER_GUTTER, CONTAINER_MAX_WIDTH, FOOTER_TEXT, GOLD, HEADER_PADDING, INK,
    LIGHT_GRAY, MUTED, NAVY, OFF_WHITE, SECTION_PADDING, SLATE, TEXT, WHITE,
};

pub const CSS_VARIABLES: &str = concat!(
    r#"
:root {
  /* Brand */
  --carolina-blue: "#,
    CAROLINA_BLUE,
    r#";
  --navy: "#,
    NAVY,
    r#";
  --gold: "#,
    GOLD,
    r#";

  /* Neutrals */
  --white: "#,
    WHITE,
    r#";
  --off-white: "#,
    OFF_WHITE,
    r#";
  --light-gray: "#,
    LIGHT_GRAY,
    r#";
  --text: "#,
    TEXT,
    r#";
  --muted: "#,
    MUTED,
    r#";
  --slate: "#,
    SLATE,
    r#";
  --ink: "#,
    INK,
    r#";
  --footer-text: "#,
    FOOTER_TEXT,
    r#";

  /* Layout */
  --container-width: "#,
    CONTAINER_MAX_WIDTH,
    r#";
  --gutter: "#,
    CONTAINER_GUTTER,
    r#";
  --section-padding: "#,
    SECTION_PADDING,
    r#";
  --header-padding: "#,
    HEADER_PADDING,
    r#";

  /* Radius */
  --radius-sm: 4px;
  --radius-md: 6px;
  --radius-lg: 12px;
  --radius-xl: 16px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-header: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
  --shadow-drawer: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
  --shadow-card: 0 4px 6px -1px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 0.2s ease;
  --transition-normal: 0.3s ease;
}
"#
);
