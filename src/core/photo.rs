use crate::errors::AppResult;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use std::fs;
use std::path::Path;

/// Read an image file and embed it as a `data:` URL.
pub fn load_photo(path: &Path) -> AppResult<String> {
    let bytes = fs::read(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Ok(format!("data:{};base64,{}", mime.essence_str(), B64.encode(bytes)))
}

/// MIME type of an embedded photo, if the payload is a data URL.
pub fn photo_mime(data_url: &str) -> Option<&str> {
    data_url
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(mime, _)| mime)
}
