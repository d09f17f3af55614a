use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const COOKIE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Finds `name` in a `document.cookie` style string and percent-decodes it.
pub fn find_cookie(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key.trim() == name).then_some(value.trim())
        })
        .next()
        .map(|raw| percent_decode_str(raw).decode_utf8_lossy().into_owned())
}

/// Session cookie: no expiry, visible on every route.
pub fn build_set_cookie(name: &str, value: &str) -> String {
    format!(
        "{}={}; path=/; SameSite=Lax",
        name,
        utf8_percent_encode(value, COOKIE_VALUE)
    )
}

pub fn build_expired_cookie(name: &str) -> String {
    format!("{}=; path=/; Max-Age=0; SameSite=Lax", name)
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{build_expired_cookie, build_set_cookie, find_cookie};
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlDocument, Window};

    fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    fn html_document() -> Result<HtmlDocument, String> {
        window()?
            .document()
            .ok_or_else(|| "No document".to_string())?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| "Document is not an HTML document".to_string())
    }

    pub fn read(name: &str) -> Option<String> {
        let cookies = html_document().ok()?.cookie().ok()?;
        find_cookie(&cookies, name)
    }

    pub fn write(name: &str, value: &str) -> Result<(), String> {
        html_document()?
            .set_cookie(&build_set_cookie(name, value))
            .map_err(|_| format!("Failed to write cookie '{}'", name))
    }

    pub fn remove(name: &str) {
        match html_document() {
            Ok(document) => {
                if document.set_cookie(&build_expired_cookie(name)).is_err() {
                    log::warn!("Failed to expire cookie '{}'", name);
                }
            }
            Err(err) => log::warn!("Cannot remove cookie '{}': {}", name, err),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{read, remove, write};


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn cookie_round_trip_in_document() {
        write("staffdesk_probe", "value-1").unwrap();
        assert_eq!(read("staffdesk_probe").as_deref(), Some("value-1"));
        remove("staffdesk_probe");
        assert_eq!(read("staffdesk_probe"), None);
    }
}
