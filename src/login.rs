use crate::Result;
use crate::alert::{AlertLevel, render_alert};
use crate::bootstrap::hide_modal;
use crate::config::{AppConfig, LOGIN_ROUTE};
use crate::continuation::{Continuation, ContinuationRegistry};
use crate::error::{Error, unwrap_or_log};
use crate::json;
use crate::utils::{clear_element, get_document, get_element_by_id, get_element_by_id_dyn};
use crate::web::{Response, post_form};
use dto::login_response::{LoginResponse, LoginResult};
use dto::login_status::LoginStatus;
use std::cell::RefCell;
use web_sys::{Document, Element, FormData, HtmlFormElement, UrlSearchParams};

pub const LOGIN_FORM_ID: &str = "login_form";
pub const LOGIN_MODAL_ID: &str = "loginform";
pub const LOGIN_MESSAGE_ID: &str = "loginmessage";

const LOGIN_SERVICE_UNREACHABLE_MESSAGE: &str =
    "Unable to reach the login service. Please try again.";

/// What the page has to do once the login route has answered.
#[derive(Debug, Eq, PartialEq, Clone)]
pub enum LoginOutcome {
    /// The submission was invalid: the form is reset.
    RejectedBadSubmit,
    /// The credentials were refused, with an optional explanation.
    RejectedWithMessage(Option<String>),
    /// The user is logged in: the continuation has to run.
    Success(Option<String>),
    /// Status above 1: the message is shown as a success, nothing else happens.
    Acknowledged(Option<String>),
}

impl From<&LoginResult> for LoginOutcome {
    fn from(result: &LoginResult) -> Self {
        let message = result.displayable_message().map(str::to_owned);
        match result.login_status() {
            LoginStatus::Invalid => LoginOutcome::RejectedBadSubmit,
            LoginStatus::Refused => LoginOutcome::RejectedWithMessage(message),
            LoginStatus::Accepted => LoginOutcome::Success(message),
            LoginStatus::Other(_) => LoginOutcome::Acknowledged(message),
        }
    }
}

/// The parts of the login modal a login outcome acts upon.
pub trait LoginView {
    fn show_alert(&self, text: &str, level: AlertLevel) -> Result<()>;

    /// Hide the modal, clear the form and its message area.
    fn reset(&self) -> Result<()>;
}

pub struct DomLoginView {
    document: Document,
}

impl DomLoginView {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn login_form(&self) -> Result<HtmlFormElement> {
        get_element_by_id_dyn(&self.document, LOGIN_FORM_ID)
    }

    fn message_container(&self) -> Result<Element> {
        get_element_by_id(&self.document, LOGIN_MESSAGE_ID)
    }

    /// Current fields of the login form, in document order.
    pub fn serialize_form(&self) -> Result<UrlSearchParams> {
        let form_data = FormData::new_with_form(&self.login_form()?)?;
        Ok(UrlSearchParams::new_with_str_sequence_sequence(&form_data)?)
    }
}

impl LoginView for DomLoginView {
    fn show_alert(&self, text: &str, level: AlertLevel) -> Result<()> {
        render_alert(&self.document, &self.message_container()?, text, level)?;
        Ok(())
    }

    fn reset(&self) -> Result<()> {
        self.login_form()?.reset();
        clear_element(&self.message_container()?);
        // Only logged: the form is cleared even when the modal can't be hidden.
        unwrap_or_log(hide_modal(&format!("#{LOGIN_MODAL_ID}")));
        Ok(())
    }
}

/// Apply `outcome` to the view. The continuation runs exactly once on success,
/// even if the success message can't be rendered, and never otherwise.
pub fn apply_outcome(
    view: &impl LoginView,
    outcome: &LoginOutcome,
    continuation: &Continuation,
) -> Result<()> {
    match outcome {
        LoginOutcome::RejectedBadSubmit => view.reset(),
        LoginOutcome::RejectedWithMessage(message) => match message {
            Some(message) => view.show_alert(message, AlertLevel::Danger),
            None => Ok(()),
        },
        LoginOutcome::Success(message) => {
            let rendered = match message {
                Some(message) => view.show_alert(message, AlertLevel::Success),
                None => Ok(()),
            };
            continuation();
            rendered
        }
        LoginOutcome::Acknowledged(message) => match message {
            Some(message) => view.show_alert(message, AlertLevel::Success),
            None => Ok(()),
        },
    }
}

/// Read the login route reply. Anything but a well-formed envelope is a failure.
pub fn parse_login_response(status: u16, body: Option<String>) -> Result<LoginOutcome> {
    let body = Response::new(status, body)
        .into_success_body()
        .map_err(|error| Error::from_parent(LOGIN_SERVICE_UNREACHABLE_MESSAGE, error))?;
    let response: LoginResponse = json::from_str(&body)
        .map_err(|error| Error::from_parent(LOGIN_SERVICE_UNREACHABLE_MESSAGE, error))?;
    Ok(LoginOutcome::from(response.result()))
}

/// Send the login form with `post` and apply the answer to `view`.
/// Any failure ends up as a `danger` alert: the continuation is not run and the form is kept.
pub async fn submit_login<V, P, F>(view: &V, post: P, continuation: &Continuation)
where
    V: LoginView,
    P: FnOnce() -> F,
    F: Future<Output = Result<Response>>,
{
    if let Err(error) = post_and_apply(view, post, continuation).await {
        log::error!("Login has failed: {error:?}");
        unwrap_or_log(view.show_alert(error.message(), AlertLevel::Danger));
    }
}

async fn post_and_apply<V, P, F>(view: &V, post: P, continuation: &Continuation) -> Result<()>
where
    V: LoginView,
    P: FnOnce() -> F,
    F: Future<Output = Result<Response>>,
{
    let response = post()
        .await
        .map_err(|error| Error::from_parent(LOGIN_SERVICE_UNREACHABLE_MESSAGE, error))?;

    let status = response.status();
    let outcome = parse_login_response(status, response.body().clone())?;
    log::info!("Login answered [status: {status}, outcome: {outcome:?}]");

    apply_outcome(view, &outcome, continuation)
}

/// Resolve `continuation_name`, then submit. Nothing is sent if the name is unknown.
pub async fn submit_named_login<V, P, F>(
    view: &V,
    registry: &RefCell<ContinuationRegistry>,
    continuation_name: &str,
    post: P,
) where
    V: LoginView,
    P: FnOnce() -> F,
    F: Future<Output = Result<Response>>,
{
    let continuation = registry.borrow().resolve(continuation_name);
    match continuation {
        Ok(continuation) => submit_login(view, post, &continuation).await,
        Err(error) => {
            log::error!("Can't log in: {error:?}");
            unwrap_or_log(view.show_alert(error.message(), AlertLevel::Danger));
        }
    }
}

/// Post `#login_form` to the login route, then run the continuation registered
/// under `continuation_name` once the user is logged in.
pub async fn login_with_continuation_name(
    config: &AppConfig,
    registry: &RefCell<ContinuationRegistry>,
    continuation_name: &str,
) {
    let Some(document) = unwrap_or_log(get_document()) else {
        return;
    };
    let view = &DomLoginView::new(document);
    let url = &config.url(LOGIN_ROUTE);
    let post = move || async move {
        let params = view.serialize_form()?;
        Ok::<_, Error>(post_form(url, &params).await?)
    };
    submit_named_login(view, registry, continuation_name, post).await;
}

/// Back to an empty, hidden login form.
pub fn reset_login() -> Result<()> {
    DomLoginView::new(get_document()?).reset()
}
