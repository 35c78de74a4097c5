use crate::Result;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

/// Hide a Bootstrap modal, e.g. `#loginform`.
pub fn hide_modal(selector: &str) -> Result<()> {
    jquery(selector)?.modal("hide")?;
    Ok(())
}

/// Rows of a bootstrap-table widget, as JSON text.
pub fn get_table_data(selector: &str) -> Result<String> {
    let data = jquery(selector)?.bootstrap_table("getData")?;
    Ok(String::from(js_sys::JSON::stringify(&data)?))
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = jQuery)]
    type JQuery;

    #[wasm_bindgen(catch, js_namespace = window, js_name = jQuery)]
    fn jquery(selector: &str) -> std::result::Result<JQuery, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn modal(this: &JQuery, action: &str) -> std::result::Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = bootstrapTable)]
    fn bootstrap_table(this: &JQuery, method: &str) -> std::result::Result<JsValue, JsValue>;
}
