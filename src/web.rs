use crate::Result;
use crate::error::{DEFAULT_SERVER_ERROR_MESSAGE, Error};
use crate::utils::get_window;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Headers, Request, RequestInit, UrlSearchParams};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

#[derive(Debug)]
pub struct Response {
    status: u16,
    body: Option<String>,
}

impl Response {
    pub fn new(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Option<String> {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..400).contains(&self.status)
    }

    /// Body of a successful response. Any other response is an error.
    pub fn into_success_body(self) -> Result<String> {
        if !self.is_success() {
            return Err(Error::new(
                DEFAULT_SERVER_ERROR_MESSAGE,
                &format!("Server error [status: {}]", self.status),
            ));
        }
        self.body
            .ok_or_else(|| Error::new(DEFAULT_SERVER_ERROR_MESSAGE, "No body"))
    }
}

/// A function to make simple AJAX requests.
pub async fn fetch(
    url: &str,
    method: &str,
    content_type: Option<&str>,
    body: Option<&str>,
) -> Result<Response> {
    let window = get_window()?;
    let request_init = RequestInit::new();
    if let Some(body) = body {
        request_init.set_body(&JsValue::from_str(body));
    }
    request_init.set_method(method);
    let headers = Headers::new()?;
    if let Some(content_type) = content_type {
        headers.append("Content-Type", content_type)?;
    }
    request_init.set_headers(&JsValue::from(&headers));
    let request = Request::new_with_str_and_init(url, &request_init)?;
    let promise = window.fetch_with_request(&request);
    let response = wasm_bindgen_futures::JsFuture::from(promise)
        .await?
        .dyn_into::<web_sys::Response>()?;
    let status = response.status();
    Ok(Response {
        status,
        body: wasm_bindgen_futures::JsFuture::from(response.text()?)
            .await?
            .as_string(),
    })
}

/// POST `params` URL-encoded, the way a browser submits a form.
pub async fn post_form(url: &str, params: &UrlSearchParams) -> Result<Response> {
    let body = String::from(params.to_string());
    log::debug!("POST {url}");
    fetch(url, "post", Some(FORM_CONTENT_TYPE), Some(&body)).await
}

pub fn encode_fields(fields: &[(&str, String)]) -> Result<UrlSearchParams> {
    let params = UrlSearchParams::new()?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(params)
}
