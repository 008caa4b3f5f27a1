use std::sync::mpsc::{self, Receiver};

use crate::data::read_questions_embedded;
use crate::machine::Action;
use crate::model::Question;

/// Endpoint por defecto (el que sirve `json-server` en desarrollo).
const DEFAULT_ENDPOINT: &str = "http://localhost:9000/questions";

#[cfg(not(target_arch = "wasm32"))]
fn questions_endpoint() -> String {
    std::env::var("QUIZ_QUESTIONS_ENDPOINT")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
}

#[cfg(target_arch = "wasm32")]
fn questions_endpoint() -> String {
    option_env!("QUIZ_QUESTIONS_ENDPOINT")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

/// Convierte el resultado de la carga remota en la acción final:
/// banco remoto, si no el embebido, y si ninguno responde `DataFailed`.
fn resolve(remote: Result<Vec<Question>, String>) -> Action {
    match remote {
        Ok(questions) => Action::DataReceived(questions),
        Err(err) => {
            log::warn!("banco remoto no disponible ({err}); usando el embebido");
            match read_questions_embedded() {
                Ok(questions) => Action::DataReceived(questions),
                Err(err) => {
                    log::warn!("banco embebido ilegible: {err}");
                    Action::DataFailed
                }
            }
        }
    }
}

/// Lanza la carga de preguntas en segundo plano. Por el canal llegará
/// exactamente una acción: `DataReceived` o `DataFailed`.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_load() -> Receiver<Action> {
    let (tx, rx) = mpsc::channel();
    let endpoint = questions_endpoint();

    // Hilo que descarga el banco; la UI sondea el canal en cada frame
    std::thread::spawn(move || {
        let _ = tx.send(resolve(fetch_remote(&endpoint)));
    });

    rx
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_remote(endpoint: &str) -> Result<Vec<Question>, String> {
    let body = reqwest::blocking::get(endpoint)
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.text())
        .map_err(|err| err.to_string())?;

    serde_json::from_str(&body).map_err(|err| err.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn spawn_load() -> Receiver<Action> {
    let (tx, rx) = mpsc::channel();
    let endpoint = questions_endpoint();

    wasm_bindgen_futures::spawn_local(async move {
        let _ = tx.send(resolve(fetch_remote(&endpoint).await));
    });

    rx
}

#[cfg(target_arch = "wasm32")]
async fn fetch_remote(endpoint: &str) -> Result<Vec<Question>, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(endpoint, &opts)
        .map_err(|err| format!("no se pudo crear el request fetch: {err:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no hay window en el entorno WASM".to_string())?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| format!("fetch falló: {err:?}"))?;

    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| "la respuesta fetch no es un Response válido".to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|err| format!("sin cuerpo de respuesta: {err:?}"))?,
    )
    .await
    .map_err(|err| format!("no se pudo leer el cuerpo: {err:?}"))?;

    let body = text
        .as_string()
        .ok_or_else(|| "el cuerpo de la respuesta no es texto".to_string())?;

    serde_json::from_str(&body).map_err(|err| err.to_string())
}
