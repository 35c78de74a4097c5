use crate::Result;
use crate::error::Error;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// Action run once a login succeeds.
pub type Continuation = Rc<dyn Fn()>;

/// Symbolic names the login form can refer to, through its hidden `fxn` field.
#[derive(Default, Clone)]
pub struct ContinuationRegistry {
    continuations: HashMap<String, Continuation>,
}

impl ContinuationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `continuation` under `name`, replacing any previous one.
    pub fn register<F>(&mut self, name: &str, continuation: F)
    where
        F: Fn() + 'static,
    {
        self.continuations.insert(name.to_owned(), Rc::new(continuation));
    }

    /// Register a JS function. Exceptions it throws are logged.
    pub fn register_js(&mut self, name: &str, function: js_sys::Function) {
        let continuation_name = name.to_owned();
        self.register(name, move || {
            if let Err(error) = function.call0(&JsValue::NULL) {
                log::error!("Continuation `{continuation_name}` has failed: {error:?}");
            }
        });
    }

    pub fn resolve(&self, name: &str) -> Result<Continuation> {
        self.continuations.get(name).cloned().ok_or_else(|| {
            Error::new(
                &format!("Unknown login action: {name}"),
                &format!("No continuation registered under `{name}`"),
            )
        })
    }
}

impl Debug for ContinuationRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut names = self.continuations.keys().collect::<Vec<_>>();
        names.sort();
        write!(f, "ContinuationRegistry {{names={names:?}}}")
    }
}
