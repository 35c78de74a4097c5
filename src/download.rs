use crate::Result;
use crate::bootstrap::get_table_data;
use crate::config::{AppConfig, DOWNLOAD_FILES_ROUTE};
use crate::error::{Error, unwrap_or_log};
use crate::json;
use crate::query::get_page_parameter;
use crate::utils::{get_document, get_element_by_id, query_selector, set_field_value};
use crate::web::{Response, encode_fields, post_form};
use dto::download_request::DownloadRequest;
use dto::download_response::DownloadResponse;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, Node};

pub const RSYNC_BOX_ID: &str = "rsyncbox";
pub const DOWNLOAD_FAILURE_MESSAGE: &str = "Request for rsync link failed.";

const MENU_CLASS: &str = "dropdown-menu";
const MENU_ITEM_SELECTOR: &str = "li a";
const TABLE_SELECTOR: &str = ".sastable";

/// Listen to clicks on the items of every dropdown menu of the page.
/// Each click asks the server for an rsync command and displays it in the `rsyncbox` field.
pub fn init_download_menus(document: &Document, config: Rc<AppConfig>) -> Result<()> {
    let menus = document.get_elements_by_class_name(MENU_CLASS);
    for i in 0..menus.length() {
        let Some(menu) = menus.item(i) else {
            continue;
        };
        let handler_menu = menu.clone();
        let handler_config = config.clone();
        let closure = Closure::wrap(Box::new(move |e: Event| {
            if let Some(item) = unwrap_or_log(find_clicked_item(&handler_menu, &e)).flatten() {
                let config = handler_config.clone();
                spawn_local(async move {
                    on_menu_item_click(&config, &item).await;
                });
            }
        }) as Box<dyn Fn(_)>);
        menu.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    log::debug!("Download listener added to {} menu(s)", menus.length());
    Ok(())
}

/// The menu item the click happened in, if any.
fn find_clicked_item(menu: &Element, event: &Event) -> Result<Option<Element>> {
    let Some(target) = event.target() else {
        return Ok(None);
    };
    let Ok(target) = target.dyn_into::<Element>() else {
        return Ok(None);
    };
    find_menu_item(menu, &target)
}

/// The `li a` anchor holding `target`, when both the anchor and its `li` are inside `menu`.
pub fn find_menu_item(menu: &Element, target: &Element) -> Result<Option<Element>> {
    let Some(item) = target.closest(MENU_ITEM_SELECTOR)? else {
        return Ok(None);
    };
    let Some(list_item) = item.closest("li")? else {
        return Ok(None);
    };
    let list_item: &Node = &list_item;
    if menu.contains(Some(list_item)) {
        Ok(Some(item))
    } else {
        Ok(None)
    }
}

async fn on_menu_item_click(config: &AppConfig, item: &Element) {
    let text = match request_download_link(config, item).await {
        Ok(result) => result,
        Err(error) => {
            log::error!("Can't retrieve rsync link: {error:?}");
            DOWNLOAD_FAILURE_MESSAGE.to_owned()
        }
    };
    // Clicks are not sequenced: the last response to arrive is the one displayed.
    if let Some(document) = unwrap_or_log(get_document()) {
        unwrap_or_log(
            get_element_by_id(&document, RSYNC_BOX_ID)
                .and_then(|rsync_box| set_field_value(&rsync_box, &text)),
        );
    }
}

async fn request_download_link(config: &AppConfig, item: &Element) -> Result<String> {
    let document = get_document()?;
    let request = build_download_request(&document, item)?;
    log::debug!("Requesting rsync link: {request:?}");

    let params = encode_fields(&request.to_form_fields())?;
    let response = post_form(&config.url(DOWNLOAD_FILES_ROUTE), &params).await?;
    parse_download_response(response)
}

/// Gather the menu item id, the plate and version of the page and the rendered table, if any.
pub fn build_download_request(document: &Document, item: &Element) -> Result<DownloadRequest> {
    let table = match query_selector(document, TABLE_SELECTOR)? {
        Some(_) => Some(get_table_data(TABLE_SELECTOR)?),
        None => None,
    };
    Ok(DownloadRequest::new(
        item.get_attribute("id"),
        get_page_parameter("plateID")?,
        get_page_parameter("version")?,
        table,
    ))
}

fn parse_download_response(response: Response) -> Result<String> {
    let body = response
        .into_success_body()
        .map_err(|error| Error::from_parent(DOWNLOAD_FAILURE_MESSAGE, error))?;
    let response: DownloadResponse = json::from_str(&body)
        .map_err(|error| Error::from_parent(DOWNLOAD_FAILURE_MESSAGE, error))?;
    Ok(response.result().to_owned())
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use crate::download::{build_download_request, find_menu_item};
    use crate::utils::get_document;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn should_send_null_table_when_no_table_is_rendered() {
        let document = get_document().unwrap();
        let item = document.create_element("a").unwrap();
        item.set_attribute("id", "cubes").unwrap();

        let request = build_download_request(&document, &item).unwrap();
        let fields = request.to_form_fields();

        assert_eq!(&Some("cubes".to_owned()), request.id());
        assert_eq!(&None, request.table());
        assert_eq!(("table", "null".to_owned()), fields[3]);
    }

    #[wasm_bindgen_test]
    fn should_find_item_of_menu() {
        let document = get_document().unwrap();
        let menu = document.create_element("ul").unwrap();
        menu.set_inner_html(r#"<li><a id="cubes"><span>Cubes</span></a></li>"#);
        let label = menu.query_selector("span").unwrap().unwrap();

        let item = find_menu_item(&menu, &label).unwrap().unwrap();

        assert_eq!("cubes", item.id());
    }

    #[wasm_bindgen_test]
    fn should_ignore_anchor_whose_list_item_is_outside_menu() {
        let document = get_document().unwrap();
        let list_item = document.create_element("li").unwrap();
        list_item.set_inner_html(r#"<div class="dropdown-menu"><a id="cubes">Cubes</a></div>"#);
        let menu = list_item.query_selector(".dropdown-menu").unwrap().unwrap();
        let anchor = menu.query_selector("a").unwrap().unwrap();

        assert!(find_menu_item(&menu, &anchor).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn should_ignore_clicks_outside_anchors() {
        let document = get_document().unwrap();
        let menu = document.create_element("ul").unwrap();
        menu.set_inner_html(r#"<li class="divider"></li>"#);
        let divider = menu.query_selector("li").unwrap().unwrap();

        assert!(find_menu_item(&menu, &divider).unwrap().is_none());
    }
}
