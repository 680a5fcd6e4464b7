use rust_decimal::Decimal;
use small_shop::core::cart::{count, total, CART_KEY};
use small_shop::core::KeyValueStore;
use small_shop::utils::error::Result;
use small_shop::{Cart, CartStore, LineItem, MemoryStore, Product};
use std::sync::Arc;
use tokio::sync::Barrier;

fn product(id: u64, title: &str, price: Decimal, image: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        image: image.to_string(),
    }
}

fn sample(id: u64) -> Product {
    product(id, &format!("Item {}", id), Decimal::new(id as i64 * 100, 2), "u")
}

/// 完整情境：加入 → 再加入 → 設定數量 → 移除
#[tokio::test]
async fn test_cart_scenario() {
    let store = CartStore::new(MemoryStore::new());
    let a = product(1, "A", Decimal::new(999, 2), "u");

    store.add(&a).await.unwrap();
    assert_eq!(
        store.load().await,
        vec![LineItem {
            id: 1,
            title: "A".to_string(),
            price: Decimal::new(999, 2),
            image: "u".to_string(),
            quantity: 1,
        }]
    );

    store.add(&a).await.unwrap();
    assert_eq!(store.load().await[0].quantity, 2);

    store.set_quantity(1, 5).await.unwrap();
    let cart = store.load().await;
    assert_eq!(cart[0].quantity, 5);
    assert_eq!(total(&cart), Some(Decimal::new(4995, 2)));

    store.remove(1).await.unwrap();
    assert!(store.load().await.is_empty());
}

#[tokio::test]
async fn test_distinct_adds_each_get_quantity_one() {
    let store = CartStore::new(MemoryStore::new());
    for id in [5, 3, 9, 1] {
        store.add(&sample(id)).await.unwrap();
    }

    let cart = store.load().await;
    assert_eq!(count(&cart), 4);
    assert!(cart.iter().all(|item| item.quantity == 1));
    // 保留加入順序
    let ids: Vec<u64> = cart.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![5, 3, 9, 1]);
}

#[tokio::test]
async fn test_add_twice_merges_by_id() {
    let store = CartStore::new(MemoryStore::new());
    store.add(&sample(4)).await.unwrap();
    store.add(&sample(4)).await.unwrap();

    let cart = store.load().await;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, 4);
    assert_eq!(cart[0].quantity, 2);
}

#[tokio::test]
async fn test_non_positive_quantity_removes_item() {
    for quantity in [0, -1] {
        let store = CartStore::new(MemoryStore::new());
        store.add(&sample(1)).await.unwrap();
        store.add(&sample(2)).await.unwrap();

        store.set_quantity(1, quantity).await.unwrap();

        let cart = store.load().await;
        assert_eq!(cart.len(), 1, "quantity {} should remove the item", quantity);
        assert_eq!(cart[0].id, 2);
    }
}

#[tokio::test]
async fn test_remove_missing_id_keeps_cart() {
    let store = CartStore::new(MemoryStore::new());
    for id in [3, 1, 2] {
        store.add(&sample(id)).await.unwrap();
    }
    store.set_quantity(1, 4).await.unwrap();
    let before = store.load().await;

    store.remove(42).await.unwrap();

    assert_eq!(store.load().await, before);
}

#[tokio::test]
async fn test_clear_empties_cart() {
    let storage = MemoryStore::new();
    let store = CartStore::new(storage.clone());
    store.add(&sample(1)).await.unwrap();
    store.add(&sample(2)).await.unwrap();

    store.clear().await.unwrap();

    assert!(store.load().await.is_empty());
    assert_eq!(storage.get(CART_KEY).await.unwrap(), None);

    // 空購物車也可以清除
    store.clear().await.unwrap();
    assert!(store.load().await.is_empty());
}

#[test]
fn test_total_and_count_example() {
    let cart = vec![
        LineItem {
            quantity: 2,
            ..LineItem::from_product(&product(1, "A", Decimal::new(10, 0), "a"))
        },
        LineItem {
            quantity: 3,
            ..LineItem::from_product(&product(2, "B", Decimal::new(5, 0), "b"))
        },
    ];
    assert_eq!(total(&cart), Some(Decimal::new(35, 0)));
    assert_eq!(count(&cart), 5);
}

#[tokio::test]
async fn test_persisted_cart_round_trips() {
    let storage = MemoryStore::new();
    let store = CartStore::new(storage.clone());
    store.add(&product(1, "A", Decimal::new(999, 2), "u")).await.unwrap();
    store.add(&product(2, "B", Decimal::new(10, 0), "v")).await.unwrap();
    store.add(&product(1, "A", Decimal::new(999, 2), "u")).await.unwrap();

    let loaded = store.load().await;
    let encoded = serde_json::to_string(&loaded).unwrap();
    let decoded: Cart = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, loaded);

    // 另一個 store 看到同樣的內容
    let reopened = CartStore::new(storage);
    assert_eq!(reopened.load().await, loaded);
}

#[tokio::test]
async fn test_corrupt_payload_is_replaced_on_next_add() {
    let storage = MemoryStore::new();
    storage.set(CART_KEY, "[{\"id\": \"oops\"}]").await.unwrap();
    let store = CartStore::new(storage.clone());

    assert!(store.load().await.is_empty());

    store.add(&sample(7)).await.unwrap();
    let cart = store.load().await;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, 7);
}

#[tokio::test]
async fn test_read_failure_loads_empty_but_write_failure_surfaces() {
    let storage = MemoryStore::new();
    let store = CartStore::new(storage.clone());
    store.add(&sample(1)).await.unwrap();

    storage.fail_reads(true);
    assert!(store.load().await.is_empty());
    storage.fail_reads(false);

    storage.fail_writes(true);
    assert!(store.add(&sample(2)).await.is_err());
    assert!(store.clear().await.is_err());
    storage.fail_writes(false);

    // 失敗的寫入沒有改動已存的內容
    let cart = store.load().await;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].id, 1);
}

/// 兩個讀取都完成後才寫入的儲存，用來重現交錯的讀改寫
#[derive(Clone)]
struct InterleavingStore {
    inner: MemoryStore,
    barrier: Arc<Barrier>,
}

impl KeyValueStore for InterleavingStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.inner.get(key).await;
        self.barrier.wait().await;
        value
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.inner.set(key, value).await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.inner.delete(key).await
    }
}

#[tokio::test]
async fn test_concurrent_adds_last_writer_wins() {
    let inner = MemoryStore::new();
    let storage = InterleavingStore {
        inner: inner.clone(),
        barrier: Arc::new(Barrier::new(2)),
    };
    let store = CartStore::new(storage);
    let p = sample(1);

    let (a, b) = tokio::join!(store.add(&p), store.add(&p));
    a.unwrap();
    b.unwrap();

    // 兩次加入都讀到空購物車，其中一次更新遺失
    let cart = CartStore::new(inner).load().await;
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 1);
}
