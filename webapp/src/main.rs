#![allow(non_snake_case)]
use std::rc::Rc;

use anyhow::anyhow;
use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::{Level, error, info, warn};

use minted_common::{
    MOUNT_ID,
    config::{SiteConfig, read_config},
};

mod common;
use common::viewport::{BrowserViewport, ViewportSignals};

mod components;
use components::header::Header;

mod sections;
use sections::{AboutSection, Features, Footer, Hero, Newsletter, ShopSection};

// compiled in; there is no runtime configuration source for a static page
const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    let (config, config_err) = match read_config(SITE_CONFIG) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    let level = config.logging.level().unwrap_or(Level::DEBUG);
    if let Err(err) = dioxus_logger::init(level) {
        console_error!(format!("failed to init logger: {err:?}"));
    }

    if let Some(err) = config_err {
        warn!("using default site config: {err:#}");
    }

    // the host page has to provide the container; without it there is nothing to render into
    if let Err(err) = mount_target() {
        error!("{err:#}");
        return;
    }

    info!("mounting storefront into #{MOUNT_ID}");

    LaunchBuilder::web()
        .with_cfg(dioxus::web::Config::new().rootname(MOUNT_ID))
        .with_context(config.header)
        .launch(App);
}

fn mount_target() -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document available to mount into"))?;

    match document.get_element_by_id(MOUNT_ID) {
        Some(_) => Ok(()),
        None => Err(anyhow!("mount element #{MOUNT_ID} is missing from the page")),
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| ViewportSignals(Rc::new(BrowserViewport)));

    rsx! {
        style { "{common::style::GLOBAL_STYLES}" }
        Header {}
        main {
            Hero {}
            Features {}
            ShopSection {}
            AboutSection {}
            Newsletter {}
        }
        Footer {}
    }
}
