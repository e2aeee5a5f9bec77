use contracts::system::auth::{Account, LoginRequest, LoginResponse, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{self, api_url};

/// Login with username and password.
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("İstek oluşturulamadı: {}", e))?
        .send()
        .await
        .map_err(|_| {
            "Bağlantı hatası oluştu. Lütfen internet bağlantınızı kontrol edip tekrar deneyin."
                .to_string()
        })?;

    if !response.ok() {
        return Err(login_error_message(response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Yanıt çözümlenemedi: {}", e))
}

/// Create a branch account (admin panel). Answers with the same shape as
/// login, but the caller's own session stays as it is.
pub async fn register(
    username: String,
    password: String,
    branch_id: String,
) -> Result<LoginResponse, String> {
    let request = RegisterRequest {
        username,
        password,
        branch_id,
    };

    let response = Request::post(&api_url("/api/auth/register"))
        .json(&request)
        .map_err(|e| format!("İstek oluşturulamadı: {}", e))?
        .send()
        .await
        .map_err(|_| {
            "Bağlantı hatası oluştu. Lütfen internet bağlantınızı kontrol edip tekrar deneyin."
                .to_string()
        })?;

    if !response.ok() {
        return Err(register_error_message(response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Yanıt çözümlenemedi: {}", e))
}

/// Every account, for the admin panel.
pub async fn fetch_accounts(token: &str) -> Result<Vec<Account>, String> {
    api_utils::get_json("/api/auth/branches", token).await
}

pub async fn delete_account(token: &str, id: &str) -> Result<(), String> {
    api_utils::delete(&format!("/api/auth/accounts/{}", id), token).await
}

// User-facing Turkish messages by status class, as the screens show them.
fn login_error_message(status: u16) -> String {
    match status {
        400 | 401 => {
            "Kullanıcı adı veya şifre hatalı. Lütfen bilgilerinizi kontrol edip tekrar deneyin."
        }
        403 => "Bu işlem için yetkiniz bulunmamaktadır.",
        404 => "Kullanıcı bulunamadı.",
        500 => "Sunucu hatası oluştu. Lütfen daha sonra tekrar deneyin.",
        _ => "Giriş başarısız. Kullanıcı adı veya şifre hatalı.",
    }
    .to_string()
}

fn register_error_message(status: u16) -> String {
    match status {
        400 => "Geçersiz bilgiler. Lütfen tüm alanları doğru şekilde doldurun.",
        409 => "Bu kullanıcı adı zaten kullanılıyor.",
        _ => "Kayıt işlemi başarısız.",
    }
    .to_string()
}
