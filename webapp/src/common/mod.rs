pub mod icons;
pub mod style;
pub mod viewport;
