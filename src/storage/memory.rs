//! In-process implementation of [`CafeStore`] with the same observable
//! semantics as the Postgres store: monotonic never-reused ids, unique
//! names, insertion-order iteration. Backs the HTTP integration tests and
//! database-free local runs.

use crate::domain::cafe::{Cafe, NewCafe};
use crate::storage::{CafeStore, StoreError};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    cafes: Vec<Cafe>,
    // Highest id ever assigned; never decremented, so ids are not reused
    // even after a delete.
    last_id: i32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CafeStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Cafe>, StoreError> {
        let inner = self.inner.lock().expect("cafe store mutex poisoned");
        Ok(inner.cafes.clone())
    }

    async fn find_by_location(&self, location: &str) -> Result<Option<Cafe>, StoreError> {
        let inner = self.inner.lock().expect("cafe store mutex poisoned");
        Ok(inner
            .cafes
            .iter()
            .find(|c| c.location == location)
            .cloned())
    }

    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, StoreError> {
        let mut inner = self.inner.lock().expect("cafe store mutex poisoned");
        if inner.cafes.iter().any(|c| c.name == cafe.name) {
            return Err(StoreError::NameTaken(cafe.name));
        }
        inner.last_id += 1;
        let stored = Cafe {
            id: inner.last_id,
            name: cafe.name,
            map_url: cafe.map_url,
            img_url: cafe.img_url,
            location: cafe.location,
            seats: cafe.seats,
            has_toilet: cafe.has_toilet,
            has_wifi: cafe.has_wifi,
            has_sockets: cafe.has_sockets,
            can_take_calls: cafe.can_take_calls,
            coffee_price: cafe.coffee_price,
        };
        inner.cafes.push(stored.clone());
        Ok(stored)
    }

    async fn update_price(&self, id: i32, new_price: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("cafe store mutex poisoned");
        let cafe = inner
            .cafes
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound)?;
        cafe.coffee_price = Some(new_price.to_string());
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().expect("cafe store mutex poisoned");
        let before = inner.cafes.len();
        inner.cafes.retain(|c| c.id != id);
        if inner.cafes.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::domain::cafe::NewCafe;
    use crate::storage::{CafeStore, StoreError};

    fn new_cafe(name: &str, location: &str) -> NewCafe {
        NewCafe {
            name: name.to_string(),
            map_url: "https://maps.example/a".to_string(),
            img_url: "https://img.example/a.jpg".to_string(),
            location: location.to_string(),
            seats: "10-20".to_string(),
            has_toilet: false,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: Some("£2.50".to_string()),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_monotonically_and_never_reused() {
        let store = MemoryStore::new();
        let a = store.insert(new_cafe("A", "Soho")).await.unwrap();
        let b = store.insert(new_cafe("B", "Soho")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete(b.id).await.unwrap();
        let c = store.insert(new_cafe("C", "Soho")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let store = MemoryStore::new();
        store.insert(new_cafe("A", "Soho")).await.unwrap();
        let err = store.insert(new_cafe("A", "Peckham")).await.unwrap_err();
        assert!(matches!(err, StoreError::NameTaken(name) if name == "A"));
        assert_eq!(store.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn find_by_location_returns_first_match_only() {
        let store = MemoryStore::new();
        let first = store.insert(new_cafe("A", "Peckham")).await.unwrap();
        store.insert(new_cafe("B", "Peckham")).await.unwrap();

        let found = store.find_by_location("Peckham").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(store.find_by_location("Hackney").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_price_only_touches_coffee_price() {
        let store = MemoryStore::new();
        let cafe = store.insert(new_cafe("A", "Soho")).await.unwrap();
        store.update_price(cafe.id, "£3.00").await.unwrap();

        let stored = &store.all().await.unwrap()[0];
        assert_eq!(stored.coffee_price.as_deref(), Some("£3.00"));
        assert_eq!(stored.name, cafe.name);

        let err = store.update_price(999, "£1.00").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn delete_is_not_idempotent() {
        let store = MemoryStore::new();
        let cafe = store.insert(new_cafe("A", "Soho")).await.unwrap();
        store.delete(cafe.id).await.unwrap();
        let err = store.delete(cafe.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }
}
