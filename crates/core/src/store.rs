//! # Storefront Store
//!
//! The single state owner. Holds the tri-state catalog result, the view
//! selection state, and the display mode; every transition goes through a
//! method here and publishes a [`StoreEvent`].
//!
//! One logical thread of control: state sits behind async locks only so the
//! catalog fetch can suspend without blocking interaction. Rapid category
//! switches are allowed to race; both fetches complete and the last response
//! to resolve wins. That inconsistency is documented, not guarded against.

use crate::catalog::{
    CatalogClient, CatalogState, Category, DisplayProduct, DEFAULT_BASE_URL, LOAD_FAILED_MESSAGE,
};
use crate::events::{StoreEvent, StoreEventKind};
use crate::prefs::{self, DisplayMode};
use crate::view::ViewFrame;
use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, Mutex, RwLock};
use tokio::task::JoinHandle;

/// How long the add-to-cart notification stays up without user action
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(3000);

/// Broadcast channel capacity for store events
const EVENT_CAPACITY: usize = 64;

/// View-side selection state.
///
/// `selected` is a value copy taken at selection time, so a later items
/// replacement never invalidates it; the detail view keeps showing the
/// fields captured when the product was clicked.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionState {
    /// Product captured by the last select or add-to-cart
    pub selected: Option<DisplayProduct>,
    /// Detail view is open
    pub detail_open: bool,
    /// Add-to-cart notification is showing
    pub notification_open: bool,
}

/// Configuration for the storefront
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Catalog service base endpoint
    pub base_url: String,
    /// Data directory for persisted preferences (default: see [`prefs::data_dir`])
    pub data_dir: Option<PathBuf>,
    /// Seed for the cosmetic price/discount derivation (None = entropy)
    pub rng_seed: Option<u64>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: None,
            rng_seed: None,
        }
    }
}

/// The storefront state owner
pub struct Storefront {
    client: CatalogClient,
    data_dir: PathBuf,
    catalog: RwLock<CatalogState>,
    selection: RwLock<SelectionState>,
    mode: RwLock<DisplayMode>,
    rng: Mutex<StdRng>,
    dismiss_timer: Mutex<Option<JoinHandle<()>>>,
    events: broadcast::Sender<StoreEvent>,
}

impl Storefront {
    /// Create a storefront from the given configuration
    pub fn new(config: StorefrontConfig) -> Result<Arc<Self>> {
        let client = CatalogClient::new(&config.base_url)?;
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Arc::new(Self {
            client,
            data_dir: config.data_dir.unwrap_or_else(prefs::data_dir),
            catalog: RwLock::new(CatalogState::default()),
            selection: RwLock::new(SelectionState::default()),
            mode: RwLock::new(DisplayMode::default()),
            rng: Mutex::new(rng),
            dismiss_timer: Mutex::new(None),
            events,
        }))
    }

    /// Subscribe to state-transition events
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    /// Initial mount: restore the persisted display mode, then fire the one
    /// automatic load for the default category.
    pub async fn mount(&self) {
        let mode = prefs::load_mode(&self.data_dir).await;
        *self.mode.write().await = mode;

        let category = self.catalog.read().await.category;
        self.load(category).await;
    }

    /// Fetch the catalog for a category and apply the result.
    ///
    /// Exactly one outbound request; no retry, no dedup of concurrent calls.
    /// On failure the previous items are left untouched and the fixed
    /// user-facing message is set.
    pub async fn load(&self, category: Category) {
        {
            let mut catalog = self.catalog.write().await;
            catalog.loading = true;
            catalog.error = None;
        }
        self.publish(
            StoreEvent::new(StoreEventKind::LoadStarted)
                .with_data(serde_json::json!({ "category": category })),
        );

        match self.client.fetch(category).await {
            Ok(products) => {
                let items: Vec<DisplayProduct> = {
                    let mut rng = self.rng.lock().await;
                    products
                        .into_iter()
                        .map(|p| DisplayProduct::derive(p, &mut *rng))
                        .collect()
                };
                let count = items.len();

                let mut catalog = self.catalog.write().await;
                catalog.items = items;
                catalog.loading = false;
                drop(catalog);

                tracing::info!(%category, count, "catalog loaded");
                self.publish(
                    StoreEvent::new(StoreEventKind::LoadCompleted)
                        .with_data(serde_json::json!({ "category": category, "count": count })),
                );
            }
            Err(err) => {
                tracing::error!(%category, %err, "catalog fetch failed");

                let mut catalog = self.catalog.write().await;
                catalog.error = Some(LOAD_FAILED_MESSAGE.to_string());
                catalog.loading = false;
                drop(catalog);

                self.publish(
                    StoreEvent::new(StoreEventKind::LoadFailed)
                        .with_data(serde_json::json!({ "category": category })),
                );
            }
        }
    }

    /// Switch the category filter. A change triggers exactly one reload;
    /// re-selecting the active filter is a no-op.
    pub async fn set_category(&self, category: Category) {
        {
            let mut catalog = self.catalog.write().await;
            if catalog.category == category {
                return;
            }
            catalog.category = category;
        }
        self.publish(
            StoreEvent::new(StoreEventKind::CategoryChanged)
                .with_data(serde_json::json!({ "category": category })),
        );

        self.load(category).await;
    }

    /// Open the detail view for a product (grid image/title click)
    pub async fn select_product(&self, product: DisplayProduct) {
        {
            let mut selection = self.selection.write().await;
            selection.selected = Some(product);
            selection.detail_open = true;
        }
        self.publish(StoreEvent::new(StoreEventKind::ProductSelected));
    }

    /// Close the detail view. The selected product is kept so anything still
    /// referencing it (a closing animation, say) stays valid.
    pub async fn close_detail(&self) {
        {
            let mut selection = self.selection.write().await;
            selection.detail_open = false;
        }
        self.publish(StoreEvent::new(StoreEventKind::DetailClosed));
    }

    /// Acknowledge an add-to-cart. No cart exists; this only selects the
    /// product, shows the notification, and arms the auto-dismiss timer.
    pub async fn add_to_cart(self: &Arc<Self>, product: DisplayProduct) {
        {
            let mut selection = self.selection.write().await;
            selection.selected = Some(product);
            selection.notification_open = true;
        }
        self.publish(StoreEvent::new(StoreEventKind::NotificationOpened));
        self.arm_dismiss_timer().await;
    }

    /// Detail-view "buy now": add to cart and close the detail in the same
    /// logical step.
    pub async fn buy_now(self: &Arc<Self>, product: DisplayProduct) {
        self.close_detail().await;
        self.add_to_cart(product).await;
    }

    /// Dismiss the notification and cancel the pending auto-dismiss
    pub async fn dismiss_notification(&self) {
        if let Some(timer) = self.dismiss_timer.lock().await.take() {
            timer.abort();
        }

        let mut selection = self.selection.write().await;
        if !selection.notification_open {
            return;
        }
        selection.notification_open = false;
        drop(selection);

        self.publish(StoreEvent::new(StoreEventKind::NotificationDismissed));
    }

    /// Flip the display mode and persist it
    pub async fn toggle_mode(&self) -> Result<DisplayMode> {
        let next = {
            let mut mode = self.mode.write().await;
            *mode = mode.toggled();
            *mode
        };
        prefs::save_mode(&self.data_dir, next).await?;

        self.publish(
            StoreEvent::new(StoreEventKind::ModeToggled)
                .with_data(serde_json::json!({ "mode": next })),
        );
        Ok(next)
    }

    /// Snapshot of the catalog state
    pub async fn catalog_state(&self) -> CatalogState {
        self.catalog.read().await.clone()
    }

    /// Snapshot of the selection state
    pub async fn selection_state(&self) -> SelectionState {
        self.selection.read().await.clone()
    }

    /// Current display mode
    pub async fn display_mode(&self) -> DisplayMode {
        *self.mode.read().await
    }

    /// Compose the renderable frame from the current state
    pub async fn frame(&self) -> ViewFrame {
        let catalog = self.catalog.read().await.clone();
        let selection = self.selection.read().await.clone();
        let mode = *self.mode.read().await;
        ViewFrame::compose(&catalog, &selection, mode)
    }

    /// One-shot auto-dismiss for the notification; re-arming replaces and
    /// cancels any previous timer.
    async fn arm_dismiss_timer(self: &Arc<Self>) {
        let store = Arc::clone(self);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(NOTIFICATION_TIMEOUT).await;

            let mut selection = store.selection.write().await;
            if selection.notification_open {
                selection.notification_open = false;
                drop(selection);
                store.publish(StoreEvent::new(StoreEventKind::NotificationDismissed));
            }
        });

        if let Some(previous) = self.dismiss_timer.lock().await.replace(timer) {
            previous.abort();
        }
    }

    fn publish(&self, event: StoreEvent) {
        // send only fails with no live receivers, which is fine
        let _ = self.events.send(event);
    }
}
