use contracts::system::auth::AccountType;
use leptos::prelude::*;

use super::global_context::AppGlobalContext;
use crate::system::auth::context::use_session;
use crate::system::notifications::NotificationCenter;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notifications =
        use_context::<NotificationCenter>().expect("NotificationCenter not found in component tree");

    let unread = notifications.unread_count();
    let all_notifications = notifications.notifications();
    let panel_open = RwSignal::new(false);

    let account_badge = move || {
        session.get().map(|s| match s.account_type {
            AccountType::Admin => "Admin",
            AccountType::Branch => "Şube",
        })
    };
    let username = move || session.get().map(|s| s.username).unwrap_or_default();

    view! {
        <header class="app-header">
            <button class="btn-secondary" title="Menü" on:click=move |_| ctx.toggle_sidebar()>
                "☰"
            </button>
            <span class="app-title">"Çelik ERP"</span>

            <div class="header-right">
                <button
                    class="bell"
                    title="Bildirimler"
                    on:click=move |_| panel_open.update(|open| *open = !*open)
                >
                    "🔔"
                    <Show when=move || (unread.get() > 0)>
                        <span class="badge">{move || unread.get()}</span>
                    </Show>
                </button>

                <Show when=move || panel_open.get()>
                    <div class="notification-panel">
                        <div class="notification-panel-header">
                            <button
                                class="btn-secondary"
                                on:click=move |_| notifications.mark_all_read()
                            >
                                "Tümünü Okundu Say"
                            </button>
                            <button class="btn-secondary" on:click=move |_| notifications.clear()>
                                "Temizle"
                            </button>
                        </div>
                        <Show
                            when=move || !all_notifications.get().is_empty()
                            fallback=|| view! { <p class="field-hint">"Bildirim yok."</p> }
                        >
                            {move || {
                                all_notifications
                                    .get()
                                    .into_iter()
                                    .map(|notification| {
                                        let read_id = notification.id.clone();
                                        view! {
                                            <div
                                                class="notification-row"
                                                class:unread=!notification.read
                                                on:click=move |_| {
                                                    notifications
                                                        .mark_as_read(&read_id, session.token())
                                                }
                                            >
                                                <p>{notification.message.clone()}</p>
                                                <span class="field-hint">
                                                    {notification.created_at.clone()}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </Show>
                    </div>
                </Show>

                <span class="user-name">{username}</span>
                <span class="user-badge">{account_badge}</span>

                <button class="btn-secondary" on:click=move |_| session.logout()>
                    "Çıkış"
                </button>
            </div>
        </header>
    }
}
