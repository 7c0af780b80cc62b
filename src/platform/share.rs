use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::PortfolioError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = navigator, js_name = share, catch)]
    async fn navigator_share(data: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = writeText, catch)]
    async fn clipboard_write_text(text: &str) -> Result<JsValue, JsValue>;
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct ShareData {
    title: String,
    text: String,
    url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

fn navigator_has(property: &str) -> bool {
    web_sys::window()
        .map(|w| w.navigator())
        .and_then(|nav| js_sys::Reflect::has(&nav, &JsValue::from_str(property)).ok())
        .unwrap_or(false)
}

pub async fn copy_text(text: &str) -> Result<(), PortfolioError> {
    if !navigator_has("clipboard") {
        return Err(PortfolioError::Unavailable("Clipboard"));
    }
    clipboard_write_text(text)
        .await
        .map(|_| ())
        .map_err(|e| PortfolioError::js("clipboard.writeText", e))
}

/// Open the native share sheet, or copy the link when the browser has none.
pub async fn share_page(title: &str, text: &str) -> Result<ShareOutcome, PortfolioError> {
    let url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();

    if navigator_has("share") {
        let args = serde_wasm_bindgen::to_value(&ShareData {
            title: title.to_string(),
            text: text.to_string(),
            url,
        })
        .map_err(|e| PortfolioError::Js {
            op: "serialize share data",
            message: e.to_string(),
        })?;

        navigator_share(args)
            .await
            .map(|_| ShareOutcome::Shared)
            .map_err(|e| PortfolioError::js("navigator.share", e))
    } else {
        copy_text(&url).await.map(|_| ShareOutcome::Copied)
    }
}
