use crate::Result;
use crate::config::AppConfig;
use crate::continuation::ContinuationRegistry;
use crate::login::login_with_continuation_name;
use crate::utils::{get_document, get_element_by_id_dyn, get_value_from_element};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlInputElement, KeyboardEvent};

pub const USERNAME_ID: &str = "username";
pub const PASSWORD_ID: &str = "password";
/// Hidden field holding the name of the continuation to run after login.
pub const CONTINUATION_NAME_ID: &str = "fxn";

/// Submit the login form when any of the Enter keys is released in the username or password field.
pub fn init_login_form(
    document: &Document,
    config: Rc<AppConfig>,
    registry: Rc<RefCell<ContinuationRegistry>>,
) -> Result<()> {
    let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        let config = config.clone();
        let registry = registry.clone();
        spawn_local(async move {
            on_key_up_in_login_form(&e, &config, &registry).await;
        });
    }) as Box<dyn Fn(_)>);
    for id in [USERNAME_ID, PASSWORD_ID] {
        let field = get_element_by_id_dyn::<HtmlInputElement>(document, id)?;
        field.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
    }
    closure.forget();
    Ok(())
}

/// Both Enter keys report the `Enter` key value, soft keyboards included.
pub fn is_enter_key(key: &str) -> bool {
    key == "Enter"
}

/// Only submit once both credentials are typed.
pub fn has_credentials(username: &str, password: &str) -> bool {
    !username.is_empty() && !password.is_empty()
}

async fn on_key_up_in_login_form(
    event: &KeyboardEvent,
    config: &AppConfig,
    registry: &RefCell<ContinuationRegistry>,
) {
    if !is_enter_key(&event.key()) {
        return;
    }

    let fields = get_document().and_then(|document| {
        let username = get_element_by_id_dyn::<HtmlInputElement>(&document, USERNAME_ID)?;
        let password = get_element_by_id_dyn::<HtmlInputElement>(&document, PASSWORD_ID)?;
        let continuation_name =
            get_element_by_id_dyn::<HtmlInputElement>(&document, CONTINUATION_NAME_ID)?;
        Ok((
            get_value_from_element(&username),
            get_value_from_element(&password),
            get_value_from_element(&continuation_name),
        ))
    });
    let (username, password, continuation_name) = match fields {
        Ok(fields) => fields,
        Err(error) => {
            log::error!("Login form is incomplete: {error:?}");
            return;
        }
    };

    if has_credentials(&username, &password) {
        login_with_continuation_name(config, registry, &continuation_name).await;
    }
}

#[cfg(test)]
mod tests {
    use crate::login_form::{has_credentials, is_enter_key};

    #[test]
    fn should_recognize_enter_key() {
        assert!(is_enter_key("Enter"));
    }

    #[test]
    fn should_ignore_other_keys() {
        assert!(!is_enter_key("a"));
        assert!(!is_enter_key("Tab"));
        assert!(!is_enter_key(""));
    }

    #[test]
    fn should_submit_with_both_fields() {
        assert!(has_credentials("bhardwaj", "s3cret"));
    }

    #[test]
    fn should_not_submit_with_only_username() {
        assert!(!has_credentials("bhardwaj", ""));
    }

    #[test]
    fn should_not_submit_with_only_password() {
        assert!(!has_credentials("", "s3cret"));
    }
}
