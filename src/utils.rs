use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, Location, Window};

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    //
    // For more details see
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn get_window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "No global `window` exists"))
}

pub fn get_document() -> Result<Document> {
    get_window()?
        .document()
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, "Should have a document on window"))
}

pub fn get_location() -> Result<Location> {
    Ok(get_window()?.location())
}

pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| Error::new(DEFAULT_ERROR_MESSAGE, &format!("`{id}` element does not exist")))
}

pub fn get_element_by_id_dyn<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    Ok(get_element_by_id(document, id)?.dyn_into::<T>()?)
}

pub fn get_value_from_element(input: &HtmlInputElement) -> String {
    input.value()
}

/// Set the value of an `<input>` or a `<textarea>`.
pub fn set_field_value(element: &Element, value: &str) -> Result<()> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(text_area) = element.dyn_ref::<HtmlTextAreaElement>() {
        text_area.set_value(value);
    } else {
        Err(Error::new(
            DEFAULT_ERROR_MESSAGE,
            &format!("`{}` is not a text field", element.id()),
        ))?;
    }
    Ok(())
}

/// First element matching `selectors` in the whole document, if any.
pub fn query_selector(document: &Document, selectors: &str) -> Result<Option<Element>> {
    Ok(document.query_selector(selectors)?)
}

pub fn clear_element(element: &Element) {
    element.set_inner_html("");
}

pub fn add_class(element: &Element, class: &str) -> Result<()> {
    Ok(element.class_list().add_1(class)?)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_get_window() {
        assert!(get_window().is_ok());
    }

    #[wasm_bindgen_test]
    fn should_fail_on_missing_element() {
        let document = get_document().unwrap();
        assert!(get_element_by_id(&document, "does-not-exist").is_err());
    }

    #[wasm_bindgen_test]
    fn should_set_value_of_text_fields() {
        let document = get_document().unwrap();
        let input = document.create_element("input").unwrap();
        set_field_value(&input, "rsync -avz").unwrap();
        assert_eq!("rsync -avz", input.dyn_into::<HtmlInputElement>().unwrap().value());

        let text_area = document.create_element("textarea").unwrap();
        set_field_value(&text_area, "rsync -avz").unwrap();
        assert_eq!(
            "rsync -avz",
            text_area.dyn_into::<HtmlTextAreaElement>().unwrap().value()
        );

        let div = document.create_element("div").unwrap();
        assert!(set_field_value(&div, "rsync -avz").is_err());
    }

    #[wasm_bindgen_test]
    fn should_add_class() {
        let document = get_document().unwrap();
        let element = document.create_element("div").unwrap();
        add_class(&element, "alert").unwrap();
        add_class(&element, "alert-danger").unwrap();
        assert_eq!("alert alert-danger", element.class_name());
    }
}
