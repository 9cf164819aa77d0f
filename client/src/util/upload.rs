//! Image file selection: validation, the pending `File` handle, and preview
//! reading.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser `File` objects are not `Send`, so they cannot live inside a
//! signal. The selected file is kept in a thread-local slot here and the
//! session only records its metadata.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;

/// Largest accepted upload: 10 MiB.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Check a candidate file's declared media type and size.
///
/// # Errors
///
/// Returns the user-facing rejection message.
pub fn validate_upload(media_type: &str, size: u64) -> Result<(), &'static str> {
    if !media_type.starts_with("image/") {
        return Err("Please select an image file (PNG, JPG, JPEG)");
    }
    if size > MAX_UPLOAD_BYTES {
        return Err("File size must be less than 10MB");
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
thread_local! {
    static PENDING_FILE: RefCell<Option<web_sys::File>> = const { RefCell::new(None) };
}

/// Remember `file` as the upload for the next transform request.
#[cfg(feature = "hydrate")]
pub fn set_pending_file(file: web_sys::File) {
    PENDING_FILE.with(|slot| *slot.borrow_mut() = Some(file));
}

/// Run `f` against the pending file, if one is selected.
#[cfg(feature = "hydrate")]
pub fn with_pending_file<R>(f: impl FnOnce(&web_sys::File) -> R) -> Option<R> {
    PENDING_FILE.with(|slot| slot.borrow().as_ref().map(f))
}

/// Forget the pending file (logout).
pub fn clear_pending_file() {
    #[cfg(feature = "hydrate")]
    PENDING_FILE.with(|slot| *slot.borrow_mut() = None);
}

/// Read `file` into a `data:` URL for the local preview.
///
/// # Errors
///
/// Returns a message when the reader cannot be created or fails.
#[cfg(feature = "hydrate")]
pub async fn read_data_url(file: &web_sys::File) -> Result<String, String> {
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = web_sys::FileReader::new().map_err(|e| format!("{e:?}"))?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let load_reader = reader.clone();
    let load_tx = Rc::clone(&tx);
    let on_load = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev: web_sys::ProgressEvent| {
        let result = load_reader
            .result()
            .ok()
            .and_then(|v| v.as_string())
            .ok_or_else(|| "file could not be read".to_owned());
        if let Some(tx) = load_tx.borrow_mut().take() {
            let _ = tx.send(result);
        }
    });
    let error_tx = Rc::clone(&tx);
    let on_error = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev: web_sys::ProgressEvent| {
        if let Some(tx) = error_tx.borrow_mut().take() {
            let _ = tx.send(Err("file could not be read".to_owned()));
        }
    });

    reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    reader.read_as_data_url(file).map_err(|e| format!("{e:?}"))?;

    let result = rx.await.map_err(|_| "file read cancelled".to_owned())?;
    reader.set_onload(None);
    reader.set_onerror(None);
    drop((on_load, on_error));
    result
}
