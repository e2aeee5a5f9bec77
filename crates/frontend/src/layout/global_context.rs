use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Stock,
    Orders,
    CreateOrder,
    Statistics,
    Admin,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Stock,
        Page::Orders,
        Page::CreateOrder,
        Page::Statistics,
        Page::Admin,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Stock => "stock",
            Self::Orders => "orders",
            Self::CreateOrder => "create-order",
            Self::Statistics => "statistics",
            Self::Admin => "admin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Ana Sayfa",
            Self::Stock => "Stok Yönetimi",
            Self::Orders => "Siparişler",
            Self::CreateOrder => "Sipariş Oluştur",
            Self::Statistics => "İstatistikler",
            Self::Admin => "Yönetim Paneli",
        }
    }

    /// Only admins see these entries.
    pub fn admin_only(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Page>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Page::default()),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn navigate(&self, page: Page) {
        self.active.set(page);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Mirror the active page into the `?page=` query so a reload lands on
    /// the same screen. Runs once when the main layout is created.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "page".to_string(),
                page.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}
