use contracts::domain::branch::Branch;
use contracts::system::auth::{Account, AccountType};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::branches::api;
use crate::system::auth::api as auth_api;
use crate::system::auth::context::use_session;

/// Admin panel: branch CRUD and branch-account management. The sidebar
/// only exposes this page to admin sessions.
#[component]
pub fn AdminPanelPage() -> impl IntoView {
    let session = use_session();

    let branches = RwSignal::new(Vec::<Branch>::new());
    let accounts = RwSignal::new(Vec::<Account>::new());
    let error = RwSignal::new(Option::<String>::None);

    let new_branch_name = RwSignal::new(String::new());
    let new_username = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let new_account_branch = RwSignal::new(String::new());

    let reload_branches = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::fetch_branches(&token).await {
                Ok(list) => branches.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    let reload_accounts = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match auth_api::fetch_accounts(&token).await {
                Ok(list) => accounts.set(list),
                Err(e) => error.set(Some(e)),
            }
        });
    };
    reload_branches();
    reload_accounts();

    let branch_name_for = move |branch_id: &str| {
        branches
            .get()
            .iter()
            .find(|branch| branch.id == branch_id)
            .map(|branch| branch.name.clone())
            .unwrap_or_else(|| branch_id.to_string())
    };

    let on_create_branch = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_branch_name.get_untracked().trim().to_string();
        if name.is_empty() {
            error.set(Some("Şube adı boş olamaz".to_string()));
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::create_branch(&token, name).await {
                Ok(_) => {
                    new_branch_name.set(String::new());
                    error.set(None);
                    reload_branches();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete_branch = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Bu şubeyi silmek istediğinize emin misiniz?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_branch(&token, &id).await {
                Ok(()) => reload_branches(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let username = new_username.get_untracked().trim().to_string();
        let password = new_password.get_untracked();
        let branch_id = new_account_branch.get_untracked();
        if username.is_empty() || password.is_empty() || branch_id.is_empty() {
            error.set(Some("Lütfen tüm alanları doldurunuz".to_string()));
            return;
        }
        spawn_local(async move {
            match auth_api::register(username, password, branch_id).await {
                Ok(_) => {
                    new_username.set(String::new());
                    new_password.set(String::new());
                    error.set(None);
                    reload_accounts();
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete_account = move |id: String| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message("Bu hesabı silmek istediğinize emin misiniz?")
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match auth_api::delete_account(&token, &id).await {
                Ok(()) => reload_accounts(),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h2>"Yönetim Paneli"</h2>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <section class="panel-section">
                <h3>"Şubeler"</h3>
                <form class="inline-form" on:submit=on_create_branch>
                    <input
                        type="text"
                        class="input-field"
                        placeholder="Yeni şube adı"
                        prop:value=move || new_branch_name.get()
                        on:input=move |ev| new_branch_name.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn-primary">"Şube Ekle"</button>
                </form>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Şube"</th>
                            <th>"Stok"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            branches
                                .get()
                                .into_iter()
                                .map(|branch| {
                                    let delete_id = branch.id.clone();
                                    view! {
                                        <tr>
                                            <td>{branch.name.clone()}</td>
                                            <td>
                                                {if branch.stock_enabled { "Açık" } else { "Kapalı" }}
                                            </td>
                                            <td>
                                                <button
                                                    class="btn-danger"
                                                    on:click=move |_| delete_branch(delete_id.clone())
                                                >
                                                    "Sil"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>

            <section class="panel-section">
                <h3>"Hesaplar"</h3>
                <form class="inline-form" on:submit=on_register>
                    <input
                        type="text"
                        class="input-field"
                        placeholder="Kullanıcı adı"
                        prop:value=move || new_username.get()
                        on:input=move |ev| new_username.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        class="input-field"
                        placeholder="Şifre"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <select
                        class="input-field"
                        on:change=move |ev| new_account_branch.set(event_target_value(&ev))
                    >
                        <option value="">"Şube seçiniz"</option>
                        <For
                            each=move || branches.get()
                            key=|branch| branch.id.clone()
                            children=|branch| {
                                view! {
                                    <option value=branch.id.clone()>{branch.name.clone()}</option>
                                }
                            }
                        />
                    </select>
                    <button type="submit" class="btn-primary">"Hesap Oluştur"</button>
                </form>

                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Kullanıcı"</th>
                            <th>"Tip"</th>
                            <th>"Şube"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            accounts
                                .get()
                                .into_iter()
                                .map(|account| {
                                    let delete_id = account.id.clone();
                                    let type_label = match account.account_type {
                                        AccountType::Admin => "Admin",
                                        AccountType::Branch => "Şube",
                                    };
                                    view! {
                                        <tr>
                                            <td>{account.username.clone()}</td>
                                            <td>{type_label}</td>
                                            <td>{branch_name_for(&account.branch_id)}</td>
                                            <td>
                                                <button
                                                    class="btn-danger"
                                                    on:click=move |_| delete_account(delete_id.clone())
                                                >
                                                    "Sil"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </section>
        </div>
    }
}
