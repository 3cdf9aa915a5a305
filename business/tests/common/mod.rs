#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::authorization::errors::AccessError;
use business::domain::authorization::model::Action;
use business::domain::authorization::services::AuthorizationService;
use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartItemRepository;
use business::domain::category::model::Category;
use business::domain::category::repository::CategoryRepository;
use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::option::{OptionValue, ProductOption};
use business::domain::product::repository::{ProductOptionRepository, ProductRepository};
use business::domain::shared::pagination::Pagination;
use business::domain::shared::value_objects::UserId;
use business::domain::wishlist::model::WishlistItem;
use business::domain::wishlist::repository::WishlistItemRepository;

pub struct SilentLogger;

impl Logger for SilentLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

pub fn logger() -> Arc<dyn Logger> {
    Arc::new(SilentLogger)
}

/// Oracle holding an explicit list of `(user, action)` grants.
#[derive(Default)]
pub struct StaticAuthorizer {
    grants: Vec<(UserId, Action)>,
}

impl StaticAuthorizer {
    pub fn granting(grants: Vec<(UserId, Action)>) -> Arc<Self> {
        Arc::new(Self { grants })
    }
}

#[async_trait]
impl AuthorizationService for StaticAuthorizer {
    async fn check_permission(
        &self,
        user_id: &UserId,
        action: Action,
        _resource_id: Option<Uuid>,
    ) -> Result<bool, AccessError> {
        Ok(self
            .grants
            .iter()
            .any(|(user, granted)| user == user_id && *granted == action))
    }
}

#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<HashMap<Uuid, Product>>,
}

impl InMemoryProducts {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProducts {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_category_id(&self, category_id: Uuid) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|product| product.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .insert(product.id, product.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}

#[derive(Default)]
pub struct InMemoryCategories {
    rows: Mutex<HashMap<Uuid, Category>>,
}

impl InMemoryCategories {
    pub fn insert(&self, category: Category) {
        self.rows.lock().unwrap().insert(category.id, category);
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategories {
    async fn get_all(&self) -> Result<Vec<Category>, RepositoryError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Category, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[derive(Default)]
pub struct InMemoryOptions {
    rows: Mutex<HashMap<Uuid, (ProductOption, Vec<OptionValue>)>>,
}

impl InMemoryOptions {
    pub fn insert(&self, option: ProductOption, values: Vec<OptionValue>) {
        self.rows.lock().unwrap().insert(option.id, (option, values));
    }
}

#[async_trait]
impl ProductOptionRepository for InMemoryOptions {
    async fn get_by_id(&self, id: Uuid) -> Result<ProductOption, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .get(&id)
            .map(|(option, _)| option.clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_values(&self, option_id: Uuid) -> Result<Vec<OptionValue>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&option_id)
            .map(|(_, values)| values.clone())
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct InMemoryCart {
    rows: Mutex<Vec<CartItem>>,
}

#[async_trait]
impl CartItemRepository for InMemoryCart {
    async fn get_page(&self, pagination: Pagination) -> Result<Vec<CartItem>, RepositoryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows
            .into_iter()
            .skip(pagination.offset() as usize)
            .take(pagination.limit() as usize)
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<CartItem, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<CartItem>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|item| item.is_owned_by(user_id))
            .cloned()
            .collect())
    }

    async fn save(&self, item: &CartItem) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|existing| existing.id != item.id);
        rows.push(item.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().retain(|item| item.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryWishlist {
    rows: Mutex<Vec<WishlistItem>>,
}

#[async_trait]
impl WishlistItemRepository for InMemoryWishlist {
    async fn get_all(&self) -> Result<Vec<WishlistItem>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<WishlistItem, RepositoryError> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<WishlistItem>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|item| &item.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_and_product(
        &self,
        user_id: &UserId,
        product_id: Uuid,
    ) -> Result<Option<WishlistItem>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|item| &item.user_id == user_id && item.product_id == product_id)
            .cloned())
    }

    async fn save(&self, item: &WishlistItem) -> Result<WishlistItem, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(stored) = rows
            .iter()
            .find(|row| row.user_id == item.user_id && row.product_id == item.product_id)
        {
            return Ok(stored.clone());
        }
        rows.push(item.clone());
        Ok(item.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.rows.lock().unwrap().retain(|item| item.id != id);
        Ok(())
    }
}
