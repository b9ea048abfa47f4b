//! Full-page navigation and the unenhanced form submission fallback.
//!
//! Both paths deliberately leave the single-page world: the final
//! authoritative write always goes through the page's normal request
//! cycle, not the pre-validation channel.

use std::collections::BTreeMap;

use wasm_bindgen::JsCast;
use web_sys::HtmlFormElement;

use super::escape::escape_markup;

/// Navigate the whole page to `url`. Used when no enhanced navigation
/// channel is wired up.
pub fn full_page_navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            crate::console_error!("Full-page navigation failed: {:?}", err);
        }
    }
}

/// Build the markup for a hidden POST form targeting `action`, one
/// hidden input per field. Every interpolated string is escaped.
pub fn hidden_form_markup(action: &str, data: &BTreeMap<String, String>) -> String {
    let mut html = format!(r#"<form method="POST" action="{}">"#, escape_markup(action));
    for (name, value) in data {
        html.push_str(&format!(
            r#"<input type="hidden" name="{}" value="{}">"#,
            escape_markup(name),
            escape_markup(value)
        ));
    }
    html.push_str("</form>");
    html
}

/// POST `data` to the current page URL through a freshly constructed,
/// unenhanced form submission (full navigation).
pub fn submit_to_current_page(data: &BTreeMap<String, String>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let action = match window.location().href() {
        Ok(href) => href,
        Err(err) => {
            crate::console_error!("Could not read page URL for submission: {:?}", err);
            return;
        }
    };

    let container = match document.create_element("div") {
        Ok(el) => el,
        Err(err) => {
            crate::console_error!("Could not build submission form: {:?}", err);
            return;
        }
    };
    container.set_inner_html(&hidden_form_markup(&action, data));

    let form = container
        .first_element_child()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    let Some(form) = form else {
        crate::console_error!("Submission form construction produced no form element");
        return;
    };

    if let Some(body) = document.body() {
        if body.append_child(&form).is_ok() {
            if let Err(err) = form.submit() {
                crate::console_error!("Form submission failed: {:?}", err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_form_markup_escapes_everything() {
        let data = BTreeMap::from([
            ("notes".to_string(), r#"<b>"great"</b>"#.to_string()),
            ("name".to_string(), "Ada & Grace".to_string()),
        ]);
        let html = hidden_form_markup("/event/1?a=b&c=d", &data);

        assert!(html.starts_with(r#"<form method="POST" action="/event/1?a=b&amp;c=d">"#));
        assert!(html.contains(r#"name="name" value="Ada &amp; Grace""#));
        assert!(html.contains("&lt;b&gt;&quot;great&quot;&lt;/b&gt;"));
        assert!(!html.contains(r#"value="<b>"#));
        assert!(html.ends_with("</form>"));
    }

    #[test]
    fn test_hidden_form_markup_empty_data() {
        let html = hidden_form_markup("/x", &BTreeMap::new());
        assert_eq!(html, r#"<form method="POST" action="/x"></form>"#);
    }
}
