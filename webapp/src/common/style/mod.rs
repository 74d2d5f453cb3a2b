use constcat::concat;

mod components;
mod home;
mod variables;

pub use components::BASE_COMPONENTS;
pub use home::HOME_STYLES;
pub use variables::CSS_VARIABLES;

// the whole page stylesheet, injected once by the app root
pub const GLOBAL_STYLES: &str = concat!(
    r#"
@import url('https://fonts.googleapis.com/css2?family=Inter:wght@400;500;700;800&display=swap');

html, body {
  margin: 0;
  padding: 0;
  font-family: 'Inter', sans-serif;
  background-color: var(--off-white);
  color: var(--text);
  overflow-x: hidden;
}

* {
  box-sizing: border-box;
}

/* Scrollbar */
::-webkit-scrollbar { width: 8px; }
::-webkit-scrollbar-track { background: #f1f1f1; }
::-webkit-scrollbar-thumb { background: var(--carolina-blue); border-radius: 4px; }
::-webkit-scrollbar-thumb:hover { background: var(--navy); }
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    HOME_STYLES,
);

#[cfg(test)]
mod tests {
    use minted_common::style::Palette;

    use super::*;

    #[test]
    fn every_palette_entry_is_declared() {
        for color in Palette::ALL {
            let declaration = format!("{}: {};", color.css_var(), color.hex());
            assert!(GLOBAL_STYLES.contains(&declaration), "missing {declaration}");
        }
    }

    #[test]
    fn layout_tokens_are_declared() {
        for declaration in [
            "--container-width: 1200px;",
            "--gutter: 20px;",
            "--section-padding: 80px;",
            "--header-padding: 20px;",
        ] {
            assert!(GLOBAL_STYLES.contains(declaration), "missing {declaration}");
        }
    }

    #[test]
    fn imports_come_first() {
        assert!(GLOBAL_STYLES.trim_start().starts_with("@import"));
    }
}
