pub mod catalog;
pub mod config;
pub mod header;
pub mod nav;
pub mod style;
pub mod viewport;

// page defaults
//
// both values can be overridden from the [config.header] table, but the page is designed
// around them: the header turns opaque once the hero's top padding has scrolled away, and
// the inline nav no longer fits the container below a tablet-portrait width
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

// id of the element the application is mounted into
pub const MOUNT_ID: &str = "root";
