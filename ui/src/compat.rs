// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use wasm_bindgen::prelude::*;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    use crate::grid::ExportFile;

    fn js_err(e: JsValue) -> String {
        e.as_string().unwrap_or_else(|| format!("{:?}", e))
    }

    /// Starts a browser download of `file`.
    pub async fn save_file(file: ExportFile) -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let body = document.body().ok_or("no body")?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        options.set_type(file.mime_type);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| "Failed to cast to HtmlAnchorElement".to_string())?;
        anchor.set_href(&url);
        anchor.set_download(file.file_name);

        body.append_child(&anchor).map_err(js_err)?;
        anchor.click();
        body.remove_child(&anchor).map_err(js_err)?;
        Url::revoke_object_url(&url).map_err(js_err)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use crate::grid::ExportFile;

    /// Prompts the user for a location and writes `file` there. Cancelling
    /// the dialog is not an error.
    pub async fn save_file(file: ExportFile) -> Result<(), String> {
        let extension = file.file_name.rsplit('.').next().unwrap_or_default();
        let handle = rfd::AsyncFileDialog::new()
            .set_file_name(file.file_name)
            .add_filter(extension.to_uppercase(), &[extension])
            .save_file()
            .await;

        if let Some(handle) = handle {
            tokio::fs::write(handle.path(), &file.bytes)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok(())
    }
}
