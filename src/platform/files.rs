//! Reading a picked image file into a base64 data URL.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::PortfolioError;

const ACCEPTED_TYPES: [&str; 4] = ["image/png", "image/jpeg", "image/webp", "image/gif"];

/// Reject non-images and files over `max_bytes` before reading them.
pub fn check_upload(mime: &str, size: f64, max_bytes: u64) -> Result<(), PortfolioError> {
    if !ACCEPTED_TYPES.contains(&mime) {
        return Err(PortfolioError::InvalidUpload(
            "Please choose a PNG, JPEG, WebP or GIF image".to_string(),
        ));
    }
    if size > max_bytes as f64 {
        return Err(PortfolioError::InvalidUpload(format!(
            "Image must be smaller than {}",
            format_bytes(max_bytes)
        )));
    }
    Ok(())
}

pub fn format_bytes(bytes: u64) -> String {
    const MIB: u64 = 1024 * 1024;
    const KIB: u64 = 1024;
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else if bytes >= MIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{} KB", bytes / KIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Read `file` with a `FileReader` and hand the data URL to `on_done`.
pub fn read_as_data_url(
    file: &web_sys::File,
    max_bytes: u64,
    on_done: impl FnOnce(Result<String, PortfolioError>) + 'static,
) {
    if let Err(e) = check_upload(&file.type_(), file.size(), max_bytes) {
        on_done(Err(e));
        return;
    }

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(_) => {
            on_done(Err(PortfolioError::Unavailable("FileReader")));
            return;
        }
    };

    let source = reader.clone();
    let on_load = Closure::once_into_js(move |_: web_sys::Event| {
        let result = source
            .result()
            .ok()
            .and_then(|value| value.as_string())
            .ok_or_else(|| PortfolioError::InvalidUpload("Could not read the image".to_string()));
        on_done(result);
    });
    reader.set_onload(Some(on_load.unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(file) {
        reader.set_onload(None);
        log::warn!("FileReader failed to start: {}", PortfolioError::js("readAsDataURL", e));
    }
}
