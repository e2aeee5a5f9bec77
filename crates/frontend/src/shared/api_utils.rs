//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making
//! authorized requests. Every endpoint except login/register expects a
//! bearer token.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, using
/// port 8080 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8080", protocol, hostname)
}

/// Build a full API URL from a path (should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// GET a JSON resource with the session token attached.
pub async fn get_json<T: DeserializeOwned>(path: &str, token: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("İstek gönderilemedi: {}", e))?;

    if !response.ok() {
        return Err(format!("Sunucu hatası: HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Yanıt çözümlenemedi: {}", e))
}

/// POST a JSON body and parse a JSON answer.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| format!("İstek oluşturulamadı: {}", e))?
        .send()
        .await
        .map_err(|e| format!("İstek gönderilemedi: {}", e))?;

    if !response.ok() {
        return Err(format!("Sunucu hatası: HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Yanıt çözümlenemedi: {}", e))
}

/// PUT a JSON body and parse a JSON answer.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .header("Authorization", &bearer(token))
        .json(body)
        .map_err(|e| format!("İstek oluşturulamadı: {}", e))?
        .send()
        .await
        .map_err(|e| format!("İstek gönderilemedi: {}", e))?;

    if !response.ok() {
        return Err(format!("Sunucu hatası: HTTP {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Yanıt çözümlenemedi: {}", e))
}

/// POST without a body, for endpoints that answer with no content.
pub async fn post_empty(path: &str, token: &str) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("İstek gönderilemedi: {}", e))?;

    if !response.ok() {
        return Err(format!("Sunucu hatası: HTTP {}", response.status()));
    }
    Ok(())
}

/// DELETE a resource; the backend answers with an empty body.
pub async fn delete(path: &str, token: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(|e| format!("İstek gönderilemedi: {}", e))?;

    if !response.ok() {
        return Err(format!("Sunucu hatası: HTTP {}", response.status()));
    }
    Ok(())
}
