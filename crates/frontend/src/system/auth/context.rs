use contracts::system::auth::{LoginResponse, Session};
use leptos::prelude::*;

use super::{api, monitor::ExpiryMonitor, storage};

/// Session state owned by the app root and provided via context. Screens
/// read it through [`use_session`]; there is no other auth state.
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    monitor: StoredValue<Option<ExpiryMonitor>, LocalStorage>,
}

impl SessionContext {
    /// Restore-from-storage runs synchronously before anything renders, so
    /// an expired stored token never flashes an authenticated screen.
    pub fn new() -> Self {
        let restored = storage::restore_session();
        let ctx = Self {
            session: RwSignal::new(restored.clone()),
            monitor: StoredValue::new_local(None),
        };
        if let Some(session) = restored {
            ctx.watch_expiry(session.token);
        }
        ctx
    }

    pub fn get(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.session.with(|s| s.as_ref().is_some_and(Session::is_admin))
    }

    pub fn can_manage_stock(&self, branch_id: &str) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(|s| s.can_manage_stock(branch_id)))
    }

    /// Current bearer token for API calls. Untracked: a request should not
    /// subscribe the caller to session changes.
    pub fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub async fn login(&self, username: String, password: String) -> Result<(), String> {
        let response = api::login(username.clone(), password).await?;
        self.establish(response, username);
        Ok(())
    }

    /// Explicit logout and detected expiry share one teardown path: cancel
    /// the watch, purge both storage entries, drop the session value.
    pub fn logout(&self) {
        self.stop_monitor();
        storage::clear_session();
        self.session.set(None);
    }

    fn establish(&self, response: LoginResponse, username: String) {
        let session = Session {
            token: response.token,
            branch_id: response.branch_id,
            account_type: response.account_type,
            username,
        };
        storage::save_session(&session);
        self.watch_expiry(session.token.clone());
        self.session.set(Some(session));
    }

    fn watch_expiry(&self, token: String) {
        // Cancel-before-restart: at most one interval is ever live.
        self.stop_monitor();
        let this = *self;
        let handle = ExpiryMonitor::start(token, move || {
            log::warn!("oturum süresi doldu, çıkış yapılıyor");
            this.logout();
        });
        self.monitor.set_value(Some(handle));
    }

    fn stop_monitor(&self) {
        self.monitor.update_value(|slot| {
            if let Some(mut monitor) = slot.take() {
                monitor.stop();
            }
        });
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
