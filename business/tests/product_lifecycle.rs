mod common;

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::domain::authorization::model::Action;
use business::domain::category::model::Category;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, ProductPatch};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_by_category::{
    GetProductsByCategoryParams, GetProductsByCategoryUseCase,
};
use business::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::field_update::FieldUpdate;
use business::domain::shared::value_objects::{Caller, UserId};
use common::{InMemoryCategories, InMemoryProducts, StaticAuthorizer, logger};

struct Catalog {
    products: Arc<InMemoryProducts>,
    categories: Arc<InMemoryCategories>,
    create: CreateProductUseCaseImpl,
    get: GetProductByIdUseCaseImpl,
    update: UpdateProductUseCaseImpl,
    delete: DeleteProductUseCaseImpl,
    by_category: GetProductsByCategoryUseCaseImpl,
}

fn merchant() -> Caller {
    Caller::Authenticated(UserId::new("merchant"))
}

fn catalog() -> Catalog {
    let products = Arc::new(InMemoryProducts::default());
    let categories = Arc::new(InMemoryCategories::default());
    let authorizer = StaticAuthorizer::granting(vec![
        (UserId::new("merchant"), Action::CreateProduct),
        (UserId::new("merchant"), Action::UpdateProduct),
        (UserId::new("merchant"), Action::DeleteProduct),
    ]);

    Catalog {
        create: CreateProductUseCaseImpl {
            repository: products.clone(),
            category_repository: categories.clone(),
            authorizer: authorizer.clone(),
            logger: logger(),
        },
        get: GetProductByIdUseCaseImpl {
            repository: products.clone(),
            logger: logger(),
        },
        update: UpdateProductUseCaseImpl {
            repository: products.clone(),
            category_repository: categories.clone(),
            authorizer: authorizer.clone(),
            logger: logger(),
        },
        delete: DeleteProductUseCaseImpl {
            repository: products.clone(),
            authorizer,
            logger: logger(),
        },
        by_category: GetProductsByCategoryUseCaseImpl {
            repository: products.clone(),
            category_repository: categories.clone(),
            logger: logger(),
        },
        products,
        categories,
    }
}

#[tokio::test]
async fn should_run_full_product_lifecycle() {
    let catalog = catalog();
    let category = Category::from_repository(Uuid::new_v4(), "Outdoor".to_string(), Utc::now());
    let category_id = category.id;
    catalog.categories.insert(category);

    let created = catalog
        .create
        .execute(CreateProductParams {
            caller: merchant(),
            props: NewProductProps {
                name: Some("Trail Boots".to_string()),
                description: Some("Waterproof".to_string()),
                price: Some(120.0),
                stock: Some(6),
                is_featured: Some(true),
                city: Some("Da Nang".to_string()),
                category_id: Some(category_id.to_string()),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    let fetched = catalog
        .get
        .execute(GetProductByIdParams { id: created.id })
        .await
        .unwrap();
    assert_eq!(fetched, created);

    catalog
        .update
        .execute(UpdateProductParams {
            caller: merchant(),
            id: created.id,
            patch: ProductPatch {
                price: Some(99.0),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    let patched = catalog
        .get
        .execute(GetProductByIdParams { id: created.id })
        .await
        .unwrap();
    assert_eq!(patched.price, 99.0);
    assert_eq!(patched.name, created.name);
    assert_eq!(patched.description, created.description);
    assert_eq!(patched.stock, created.stock);
    assert_eq!(patched.is_featured, created.is_featured);
    assert_eq!(patched.city, created.city);
    assert_eq!(patched.category_id, Some(category_id));

    let in_category = catalog
        .by_category
        .execute(GetProductsByCategoryParams { category_id })
        .await
        .unwrap();
    assert_eq!(in_category.len(), 1);

    catalog
        .delete
        .execute(DeleteProductParams {
            caller: merchant(),
            id: created.id,
        })
        .await
        .unwrap();

    let after_delete = catalog
        .get
        .execute(GetProductByIdParams { id: created.id })
        .await;
    assert!(matches!(after_delete.unwrap_err(), ProductError::NotFound));
}

#[tokio::test]
async fn should_not_store_product_with_unknown_category() {
    let catalog = catalog();

    let result = catalog
        .create
        .execute(CreateProductParams {
            caller: merchant(),
            props: NewProductProps {
                name: Some("Orphan".to_string()),
                price: Some(1.0),
                stock: Some(1),
                category_id: Some(Uuid::new_v4().to_string()),
                ..Default::default()
            },
        })
        .await;

    assert!(matches!(result.unwrap_err(), ProductError::InvalidCategory));
    assert_eq!(catalog.products.len(), 0);
}

#[tokio::test]
async fn should_leave_product_untouched_when_relinking_to_unknown_category() {
    let catalog = catalog();
    let created = catalog
        .create
        .execute(CreateProductParams {
            caller: merchant(),
            props: NewProductProps {
                name: Some("Lamp".to_string()),
                price: Some(15.0),
                stock: Some(3),
                ..Default::default()
            },
        })
        .await
        .unwrap();

    let result = catalog
        .update
        .execute(UpdateProductParams {
            caller: merchant(),
            id: created.id,
            patch: ProductPatch {
                name: Some("Desk Lamp".to_string()),
                category_id: FieldUpdate::Set(Uuid::new_v4().to_string()),
                ..Default::default()
            },
        })
        .await;

    assert!(matches!(result.unwrap_err(), ProductError::InvalidCategory));
    let stored = catalog
        .get
        .execute(GetProductByIdParams { id: created.id })
        .await
        .unwrap();
    assert_eq!(stored.name, "Lamp");
}

#[tokio::test]
async fn should_reject_writes_from_anonymous_caller() {
    let catalog = catalog();

    let result = catalog
        .create
        .execute(CreateProductParams {
            caller: Caller::Anonymous,
            props: NewProductProps {
                name: Some("Ghost".to_string()),
                price: Some(1.0),
                stock: Some(1),
                ..Default::default()
            },
        })
        .await;

    assert!(matches!(result.unwrap_err(), ProductError::Access(_)));
    assert_eq!(catalog.products.len(), 0);
}
