mod alert;
mod bootstrap;
mod config;
mod continuation;
mod download;
mod error;
mod json;
mod login;
mod login_form;
mod query;
mod utils;
mod web;

use crate::config::AppConfig;
use crate::continuation::ContinuationRegistry;
use crate::error::unwrap_or_log;
use crate::utils::get_document;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Entry point of the Marvin pages.
///
/// ```js
/// const marvin = new Marvin($SCRIPT_ROOT);
/// marvin.register_continuation("reloadPage", () => window.location.reload());
/// marvin.init();
/// ```
#[wasm_bindgen]
pub struct Marvin {
    config: Rc<AppConfig>,
    continuations: Rc<RefCell<ContinuationRegistry>>,
}

#[wasm_bindgen]
impl Marvin {
    #[wasm_bindgen(constructor)]
    pub fn new(script_root: &str) -> Marvin {
        Marvin {
            config: Rc::new(AppConfig::new(script_root)),
            continuations: Rc::new(RefCell::new(ContinuationRegistry::new())),
        }
    }

    /// Make `function` available to the login form under `name`.
    pub fn register_continuation(&self, name: &str, function: js_sys::Function) {
        self.continuations.borrow_mut().register_js(name, function);
    }

    /// Bind the login keyboard shortcuts and the download menus present on the page.
    pub fn init(&self) {
        let Some(document) = unwrap_or_log(get_document()) else {
            return;
        };
        if document.get_element_by_id(login_form::USERNAME_ID).is_some() {
            unwrap_or_log(login_form::init_login_form(
                &document,
                self.config.clone(),
                self.continuations.clone(),
            ));
        }
        unwrap_or_log(download::init_download_menus(&document, self.config.clone()));
        log::info!(
            "Marvin initialised [root: `{}`, {:?}]",
            self.config.script_root(),
            self.continuations.borrow()
        );
    }

    /// Submit the login form, then run the continuation registered under `continuation_name`.
    pub fn login(&self, continuation_name: String) {
        let config = self.config.clone();
        let continuations = self.continuations.clone();
        spawn_local(async move {
            login::login_with_continuation_name(&config, &continuations, &continuation_name)
                .await;
        });
    }

    /// Hide the login modal and clear its form.
    pub fn reset_login(&self) {
        unwrap_or_log(login::reset_login());
    }
}

/// Raw value of a parameter of the current page URL, `undefined` if absent.
#[wasm_bindgen]
pub fn get_url_parameter(name: &str) -> Option<String> {
    unwrap_or_log(query::get_page_parameter(name)).flatten()
}
