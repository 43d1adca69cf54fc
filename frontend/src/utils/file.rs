use crate::api::{ApiError, FileUpload};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};

pub fn first_selected_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}

/// Reads the whole file into memory so it can be attached to a multipart body.
pub async fn read_upload(file: File) -> Result<FileUpload, ApiError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| ApiError::unknown(format!("Failed to read {}: {:?}", file.name(), err)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(FileUpload {
        file_name: file.name(),
        mime_type: file.type_(),
        bytes,
    })
}
