//! Hand an [`ExportFile`] to the browser as a download.

use docview_core::ExportFile;

/// The browser refused one of the steps of handing out a file.
#[derive(thiserror::Error, Debug)]
#[error("download failed: {0}")]
pub struct DownloadError(String);

/// Offer `file` through a temporary object URL and a synthetic link click.
#[cfg(all(target_family = "wasm", target_os = "unknown"))]
pub fn offer(file: &ExportFile) -> Result<(), DownloadError> {
    use docview_core::EXPORT_MIME_TYPE;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let js = |e: JsValue| DownloadError(format!("{e:?}"));

    let window = web_sys::window().ok_or_else(|| DownloadError("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError("no document".into()))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(&file.contents));
    let options = BlobPropertyBag::new();
    options.set_type(EXPORT_MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js)?;

    let anchor = document
        .create_element("a")
        .map_err(js)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| js(e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(&file.file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js)?;
    tracing::debug!("offered {} for download", file.file_name);
    Ok(())
}

/// Outside the browser there is nowhere to save to; the file is only logged.
#[cfg(not(all(target_family = "wasm", target_os = "unknown")))]
pub fn offer(file: &ExportFile) -> Result<(), DownloadError> {
    tracing::info!(
        bytes = file.contents.len(),
        "download of {} requested outside the browser",
        file.file_name
    );
    Ok(())
}
