use crate::Result;
use crate::utils::{add_class, clear_element};
use web_sys::{Document, Element};

#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum AlertLevel {
    Success,
    Danger,
}

impl AlertLevel {
    /// Bootstrap contextual class of the alert.
    pub fn class_name(&self) -> &'static str {
        match self {
            AlertLevel::Success => "alert-success",
            AlertLevel::Danger => "alert-danger",
        }
    }
}

/// Replace the content of `container` with a single alert.
/// `text` is inserted as text, never parsed as HTML.
pub fn render_alert(
    document: &Document,
    container: &Element,
    text: &str,
    level: AlertLevel,
) -> Result<Element> {
    let alert = document.create_element("div")?;
    add_class(&alert, "alert")?;
    add_class(&alert, level.class_name())?;
    alert.set_attribute("role", "alert")?;

    let heading = document.create_element("h4")?;
    heading.set_text_content(Some(text));
    alert.append_child(&heading)?;

    clear_element(container);
    container.append_child(&alert)?;

    Ok(alert)
}

#[cfg(test)]
mod tests {
    use crate::alert::AlertLevel;

    #[test]
    fn should_map_level_to_bootstrap_class() {
        assert_eq!("alert-success", AlertLevel::Success.class_name());
        assert_eq!("alert-danger", AlertLevel::Danger.class_name());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use crate::alert::{AlertLevel, render_alert};
    use crate::utils::get_document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_replace_container_content() {
        let document = get_document().unwrap();
        let container = document.create_element("div").unwrap();
        container.set_inner_html("<p>previous</p>");

        render_alert(&document, &container, "bad password", AlertLevel::Danger).unwrap();

        assert_eq!(
            r#"<div class="alert alert-danger" role="alert"><h4>bad password</h4></div>"#,
            container.inner_html()
        );
    }

    #[wasm_bindgen_test]
    fn should_escape_message() {
        let document = get_document().unwrap();
        let container = document.create_element("div").unwrap();

        render_alert(&document, &container, "<b>hi</b>", AlertLevel::Success).unwrap();

        assert_eq!(
            r#"<div class="alert alert-success" role="alert"><h4>&lt;b&gt;hi&lt;/b&gt;</h4></div>"#,
            container.inner_html()
        );
    }
}
