use desa_core::auth::{AccessToken, Credentials, Registration};
use desa_core::error::ClientError;
use desa_core::metrics::DashboardMetrics;
use desa_core::records::{NewPenduduk, Penduduk};
use desa_core::session::auth_headers;
use desa_core::surat::SuratRequest;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Snapshot of the headers a single request is issued with.
pub type HeaderSet = Vec<(&'static str, String)>;

/// Endpoint root, fixed at build time. Defaults to the relative `/api` so a
/// reverse proxy in front of the backend needs no extra configuration.
fn api_base() -> &'static str {
    option_env!("DESA_API_URL").unwrap_or("/api")
}

fn js_error(context: &str, value: JsValue) -> ClientError {
    ClientError::Network(format!("{context}: {value:?}"))
}

/// One fetch, no retry. The caller decides whether to re-request.
async fn send(
    method: &str,
    path: &str,
    body: Option<String>,
    headers: &HeaderSet,
) -> Result<Response, ClientError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{}{}", api_base(), path);
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| js_error("build request", e))?;
    for (name, value) in headers {
        request
            .headers()
            .set(name, value)
            .map_err(|e| js_error("set header", e))?;
    }

    let window =
        web_sys::window().ok_or_else(|| ClientError::Network("window not available".into()))?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("fetch", e))?;
    response
        .dyn_into::<Response>()
        .map_err(|e| js_error("unexpected fetch result", e))
}

async fn read_text(response: &Response) -> Result<String, ClientError> {
    let promise = response.text().map_err(|e| js_error("read body", e))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| js_error("read body", e))?;
    Ok(value.as_string().unwrap_or_default())
}

/// Classify a non-2xx response: the raw backend text when there is one, a
/// bare status line otherwise. The client invents no error detail.
async fn failure(response: Response) -> ClientError {
    let status = response.status();
    let body = read_text(&response).await.unwrap_or_default();
    let body = if body.trim().is_empty() {
        format!("request failed with status {status}")
    } else {
        body
    };
    ClientError::Request { status, body }
}

async fn get_json<T: DeserializeOwned>(path: &str, headers: &HeaderSet) -> Result<T, ClientError> {
    let response = send("GET", path, None, headers).await?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    let text = read_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| ClientError::Network(format!("decode response: {e}")))
}

async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    headers: &HeaderSet,
) -> Result<T, ClientError> {
    let body = serde_json::to_string(body).map_err(|e| ClientError::Network(e.to_string()))?;
    let response = send("POST", path, Some(body), headers).await?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    let text = read_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| ClientError::Network(format!("decode response: {e}")))
}

/// POST where the success body is irrelevant to the caller.
async fn post<B: Serialize>(path: &str, body: &B, headers: &HeaderSet) -> Result<(), ClientError> {
    let body = serde_json::to_string(body).map_err(|e| ClientError::Network(e.to_string()))?;
    let response = send("POST", path, Some(body), headers).await?;
    if !response.ok() {
        return Err(failure(response).await);
    }
    Ok(())
}

pub async fn login(credentials: &Credentials) -> Result<AccessToken, ClientError> {
    post_json("/auth/login", credentials, &auth_headers(None)).await
}

pub async fn register(registration: &Registration) -> Result<AccessToken, ClientError> {
    post_json("/auth/register", registration, &auth_headers(None)).await
}

pub async fn dashboard_metrics(headers: &HeaderSet) -> Result<DashboardMetrics, ClientError> {
    get_json("/dashboard/metrics", headers).await
}

pub async fn list_penduduk(headers: &HeaderSet) -> Result<Vec<Penduduk>, ClientError> {
    get_json("/penduduk", headers).await
}

pub async fn create_penduduk(record: &NewPenduduk, headers: &HeaderSet) -> Result<(), ClientError> {
    post("/penduduk", record, headers).await
}

pub async fn submit_surat(request: &SuratRequest, headers: &HeaderSet) -> Result<(), ClientError> {
    post("/surat", request, headers).await
}
