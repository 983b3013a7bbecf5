//! Store state machine: notification timing (paused clock), buy-now,
//! event emission, and display-mode persistence.

use std::sync::Arc;
use std::time::Duration;
use vitrine_core::{
    DisplayMode, DisplayProduct, StoreEventKind, Storefront, StorefrontConfig,
};

/// Storefront pointed at a closed port; these tests never fetch.
fn storefront() -> Arc<Storefront> {
    Storefront::new(StorefrontConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        data_dir: None,
        rng_seed: Some(7),
    })
    .expect("storefront")
}

fn sample_product() -> DisplayProduct {
    DisplayProduct {
        id: 1,
        title: "Shirt".to_string(),
        price: 80.0,
        description: "A sturdy shirt".to_string(),
        image: "https://example.com/shirt.png".to_string(),
        category: "men's clothing".to_string(),
        rating: None,
        original_price: 95.0,
        discount: 20,
    }
}

#[tokio::test(start_paused = true)]
async fn test_notification_auto_dismisses_after_3s() {
    let store = storefront();

    store.add_to_cart(sample_product()).await;
    assert!(store.selection_state().await.notification_open);

    tokio::time::sleep(Duration::from_millis(3100)).await;

    let selection = store.selection_state().await;
    assert!(!selection.notification_open);
    // the selected product is kept
    assert_eq!(selection.selected.unwrap().title, "Shirt");
}

#[tokio::test(start_paused = true)]
async fn test_manual_dismiss_cancels_auto_dismiss() {
    let store = storefront();
    let mut events = store.subscribe();

    store.add_to_cart(sample_product()).await;
    tokio::time::sleep(Duration::from_millis(1000)).await;
    store.dismiss_notification().await;
    assert!(!store.selection_state().await.notification_open);

    // well past the 3000ms mark; the cancelled timer must not fire again
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(!store.selection_state().await.notification_open);

    let mut dismissals = 0;
    while let Ok(event) = events.try_recv() {
        if event.kind == StoreEventKind::NotificationDismissed {
            dismissals += 1;
        }
    }
    assert_eq!(dismissals, 1);
}

#[tokio::test(start_paused = true)]
async fn test_re_adding_restarts_the_timer() {
    let store = storefront();

    store.add_to_cart(sample_product()).await;
    tokio::time::sleep(Duration::from_millis(2000)).await;
    store.add_to_cart(sample_product()).await;

    // t=4000: the first timer would have fired at 3000, but was replaced
    tokio::time::sleep(Duration::from_millis(2000)).await;
    assert!(store.selection_state().await.notification_open);

    // t=5100: the replacement timer fires at 5000
    tokio::time::sleep(Duration::from_millis(1100)).await;
    assert!(!store.selection_state().await.notification_open);
}

#[tokio::test]
async fn test_buy_now_closes_detail_and_opens_notification() {
    let store = storefront();
    let product = sample_product();

    store.select_product(product.clone()).await;
    assert!(store.selection_state().await.detail_open);

    store.buy_now(product).await;

    let selection = store.selection_state().await;
    assert!(!selection.detail_open);
    assert!(selection.notification_open);
    assert_eq!(selection.selected.unwrap().title, "Shirt");
}

#[tokio::test]
async fn test_close_detail_keeps_selected_product() {
    let store = storefront();

    store.select_product(sample_product()).await;
    store.close_detail().await;

    let selection = store.selection_state().await;
    assert!(!selection.detail_open);
    assert!(selection.selected.is_some());
}

#[tokio::test]
async fn test_events_emitted_per_transition() {
    let store = storefront();
    let mut events = store.subscribe();

    store.select_product(sample_product()).await;
    store.close_detail().await;
    store.add_to_cart(sample_product()).await;
    store.dismiss_notification().await;

    let mut kinds = Vec::new();
    while let Ok(event) = events.try_recv() {
        kinds.push(event.kind);
    }
    assert_eq!(
        kinds,
        vec![
            StoreEventKind::ProductSelected,
            StoreEventKind::DetailClosed,
            StoreEventKind::NotificationOpened,
            StoreEventKind::NotificationDismissed,
        ]
    );
}

#[tokio::test]
async fn test_display_mode_persists_across_storefronts() {
    let dir = tempfile::tempdir().unwrap();

    let store = Storefront::new(StorefrontConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        data_dir: Some(dir.path().to_path_buf()),
        rng_seed: Some(7),
    })
    .unwrap();
    assert_eq!(store.display_mode().await, DisplayMode::Light);
    assert_eq!(store.toggle_mode().await.unwrap(), DisplayMode::Dark);

    // a fresh storefront picks the persisted mode up on mount
    let fresh = Storefront::new(StorefrontConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        data_dir: Some(dir.path().to_path_buf()),
        rng_seed: Some(7),
    })
    .unwrap();
    fresh.mount().await;
    assert_eq!(fresh.display_mode().await, DisplayMode::Dark);
}
