//! `fetch` transport for the recipe API.
//!
//! Every call resolves to a [`Reply`] once a response arrives, whatever its
//! status; judging the reply is left to `tastetales::api`.

use gloo::net::http::{Request, Response};
use tastetales::{ClientError, NewRecipe, Reply};
use web_sys::FormData;

fn network(err: gloo::net::Error) -> ClientError {
    ClientError::Network(err.to_string())
}

async fn into_reply(response: Response) -> Result<Reply, ClientError> {
    let ok = response.ok();
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    log::debug!("{} -> {}", response.url(), status);
    Ok(Reply { ok, status, body })
}

pub async fn get(url: &str) -> Result<Reply, ClientError> {
    let response = Request::get(url).send().await.map_err(network)?;
    into_reply(response).await
}

pub async fn post(url: &str) -> Result<Reply, ClientError> {
    let response = Request::post(url).send().await.map_err(network)?;
    into_reply(response).await
}

pub async fn post_json(url: &str, body: &NewRecipe) -> Result<Reply, ClientError> {
    let request = Request::post(url).json(body).map_err(network)?;
    let response = request.send().await.map_err(network)?;
    into_reply(response).await
}

/// The browser supplies the multipart content type and boundary.
pub async fn post_form(url: &str, body: FormData) -> Result<Reply, ClientError> {
    let request = Request::post(url).body(body).map_err(network)?;
    let response = request.send().await.map_err(network)?;
    into_reply(response).await
}

pub async fn delete(url: &str) -> Result<Reply, ClientError> {
    let response = Request::delete(url).send().await.map_err(network)?;
    into_reply(response).await
}
