//! Catalog store
//!
//! In-memory product and category administration for a single register.
//! Persistence is out of scope; the store is plain Vec-backed state with
//! the usual CRUD surface plus the category filter the product grid uses.

use shared::error::{PosError, PosResult};
use shared::models::{Category, CategoryCreate, Product, ProductCreate, ProductUpdate};
use shared::util::snowflake_id;

/// Product and category store
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// The reference cafe menu, used by the demo flow and tests
    pub fn demo() -> Self {
        let mut catalog = Self::new();

        let beverages = catalog.add_category(CategoryCreate {
            name: "Beverages".into(),
            icon: Some("coffee".into()),
        });
        let food = catalog.add_category(CategoryCreate {
            name: "Food".into(),
            icon: Some("utensils".into()),
        });
        let desserts = catalog.add_category(CategoryCreate {
            name: "Desserts".into(),
            icon: Some("cake".into()),
        });
        let snacks = catalog.add_category(CategoryCreate {
            name: "Snacks".into(),
            icon: Some("cookie".into()),
        });

        let menu = [
            ("Cappuccino", 4.99, &beverages),
            ("Club Sandwich", 12.99, &food),
            ("Chocolate Cake", 6.99, &desserts),
            ("Green Tea", 3.99, &beverages),
            ("Caesar Salad", 10.99, &food),
            ("Mixed Nuts", 5.99, &snacks),
        ];
        for (name, price, category) in menu {
            catalog
                .add_product(ProductCreate {
                    name: name.into(),
                    price,
                    category: category.id.clone(),
                    image: None,
                })
                .expect("demo categories exist");
        }

        catalog
    }

    // ========== Categories ==========

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn add_category(&mut self, payload: CategoryCreate) -> Category {
        let category = Category {
            id: snowflake_id().to_string(),
            name: payload.name,
            icon: payload.icon.unwrap_or_default(),
        };
        self.categories.push(category.clone());
        category
    }

    // ========== Products ==========

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in one category, or all products when `category` is None
    pub fn products_in_category(&self, category: Option<&str>) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .collect()
    }

    /// Add a product. The referenced category must exist.
    pub fn add_product(&mut self, payload: ProductCreate) -> PosResult<Product> {
        if !self.categories.iter().any(|c| c.id == payload.category) {
            return Err(PosError::not_found(format!(
                "category {}",
                payload.category
            )));
        }
        let product = Product {
            id: snowflake_id().to_string(),
            name: payload.name,
            price: payload.price,
            category: payload.category,
            image: payload.image.unwrap_or_default(),
        };
        tracing::debug!(id = %product.id, name = %product.name, "product added");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Merge an update into an existing product
    pub fn update_product(&mut self, id: &str, update: ProductUpdate) -> PosResult<Product> {
        if let Some(category) = &update.category
            && !self.categories.iter().any(|c| &c.id == category)
        {
            return Err(PosError::not_found(format!("category {category}")));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| PosError::not_found(format!("product {id}")))?;

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(category) = update.category {
            product.category = category;
        }
        if let Some(image) = update.image {
            product.image = image;
        }
        Ok(product.clone())
    }

    /// Remove a product, returning the removed entry
    pub fn remove_product(&mut self, id: &str) -> PosResult<Product> {
        let idx = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PosError::not_found(format!("product {id}")))?;
        Ok(self.products.remove(idx))
    }
}
