//! Task Commands
//!
//! `GET {base}/getScheduledJobs`, decoded into grid items.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::Item;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid task payload: {0}")]
    Decode(String),
}

fn js_message(value: JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn transport(value: JsValue) -> FetchError {
    FetchError::Transport(js_message(value))
}

/// Decode a `/getScheduledJobs` response body
pub fn parse_tasks(body: &str) -> Result<Vec<Item>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

pub async fn fetch_tasks(url: &str) -> Result<Vec<Item>, FetchError> {
    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(transport)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(transport)?;

    let window = web_sys::window().ok_or_else(|| FetchError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?
        .dyn_into()
        .map_err(transport)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?
        .as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;
    parse_tasks(&body)
}
