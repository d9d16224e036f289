//! Product to dashboard view mapping.
//!
//! | Product         | ProductDashboardResponse | rule            |
//! |-----------------|--------------------------|-----------------|
//! | `id`            | `id`                     | copied          |
//! | `name`          | `name`                   | copied          |
//! | `category_id`   | `category_id`            | copied, `None` stays `None` |
//! | `brand`         | `brand`                  | `None` → `""`   |
//! | `import_price`  | `import_price`           | copied          |
//! | `selling_price` | `selling_price`          | copied          |
//! | `quantity`      | `quantity`               | copied          |
//! | `image`         | `image`                  | `None` → `""`   |
//! | `status`        | `status`                 | copied          |
//! | `created_at`    | `created_at`             | copied          |
//! | `updated_at`    | `updated_at`             | copied          |
//!
//! `description` and `attributes` are not part of the dashboard view.

use crate::dto::{ProductDashboardListResponse, ProductDashboardResponse};
use techshop_core::{Mapper, Page, Product};

/// Converts catalog products into dashboard rows.
///
/// Stateless; every conversion borrows its input and returns a fresh,
/// independently owned view.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductListMapper;

impl ProductListMapper {
    /// Converts one product into its dashboard row.
    #[must_use]
    pub fn to_dto(product: &Product) -> ProductDashboardResponse {
        ProductDashboardResponse {
            id: product.id,
            name: product.name.clone(),
            category_id: product.category_id,
            brand: product.brand.clone().unwrap_or_default(),
            import_price: product.import_price,
            selling_price: product.selling_price,
            quantity: product.quantity,
            image: product.image.clone().unwrap_or_default(),
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    /// Converts a slice of products, preserving order.
    #[must_use]
    pub fn to_dto_list(products: &[Product]) -> Vec<ProductDashboardResponse> {
        products.iter().map(Self::to_dto).collect()
    }

    /// Converts a page of products, keeping the paging metadata.
    #[must_use]
    pub fn to_list_response(page: &Page<Product>) -> ProductDashboardListResponse {
        ProductDashboardListResponse {
            products: Self::to_dto_list(&page.content),
            page: page.info.page,
            size: page.info.size,
            total_elements: page.info.total_elements,
            total_pages: page.info.total_pages,
        }
    }
}

impl<'a> Mapper<&'a Product, ProductDashboardResponse> for ProductListMapper {
    fn map(from: &'a Product) -> ProductDashboardResponse {
        Self::to_dto(from)
    }
}

impl From<&Product> for ProductDashboardResponse {
    fn from(product: &Product) -> Self {
        ProductListMapper::to_dto(product)
    }
}

impl From<Product> for ProductDashboardResponse {
    fn from(product: Product) -> Self {
        ProductListMapper::to_dto(&product)
    }
}

impl From<Page<Product>> for ProductDashboardListResponse {
    fn from(page: Page<Product>) -> Self {
        ProductListMapper::to_list_response(&page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use techshop_core::{CategoryId, ProductId, ProductStatus};

    fn widget() -> Product {
        Product::new(ProductId::new(1), "Widget", Decimal::new(999, 2))
    }

    fn full_product(id: i64) -> Product {
        Product::builder(ProductId::new(id), format!("Laptop {id}"))
            .category_id(CategoryId::new(3))
            .brand("Dell")
            .description("14 inch")
            .import_price(Decimal::new(1_500_000, 2))
            .selling_price(Decimal::new(1_899_900, 2))
            .quantity(i32::try_from(id).unwrap())
            .image(format!("https://cdn.techshop.vn/{id}.png"))
            .attribute("cpu", "i7")
            .status(ProductStatus::Inactive)
            .build()
    }

    #[test]
    fn test_widget_exposes_id_name_and_price() {
        let view = ProductListMapper::to_dto(&widget());

        assert_eq!(view.id, ProductId::new(1));
        assert_eq!(view.name, "Widget");
        assert_eq!(view.selling_price, Decimal::new(999, 2));
        assert_eq!(view.selling_price.to_string(), "9.99");
    }

    #[test]
    fn test_every_field_is_copied() {
        let product = full_product(8);
        let view = ProductListMapper::to_dto(&product);

        assert_eq!(view.id, product.id);
        assert_eq!(view.name, "Laptop 8");
        assert_eq!(view.category_id, Some(CategoryId::new(3)));
        assert_eq!(view.brand, "Dell");
        assert_eq!(view.import_price, product.import_price);
        assert_eq!(view.selling_price, product.selling_price);
        assert_eq!(view.quantity, 8);
        assert_eq!(view.image, "https://cdn.techshop.vn/8.png");
        assert_eq!(view.status, ProductStatus::Inactive);
        assert_eq!(view.created_at, product.created_at);
        assert_eq!(view.updated_at, product.updated_at);
    }

    #[test]
    fn test_absent_optionals_use_documented_defaults() {
        let view = ProductListMapper::to_dto(&widget());

        assert_eq!(view.brand, "");
        assert_eq!(view.image, "");
        assert_eq!(view.category_id, None);
        assert_eq!(view.quantity, 0);
        assert_eq!(view.import_price, Decimal::ZERO);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let a = full_product(5);
        let b = a.clone();

        assert_eq!(ProductListMapper::to_dto(&a), ProductListMapper::to_dto(&b));
        assert_eq!(ProductListMapper::to_dto(&a), ProductListMapper::to_dto(&a));
    }

    #[test]
    fn test_conversion_does_not_mutate_input() {
        let product = full_product(2);
        let before = product.clone();

        let _ = ProductListMapper::to_dto(&product);

        assert_eq!(product, before);
    }

    #[test]
    fn test_view_is_independent_of_input() {
        let mut product = full_product(4);
        let view = ProductListMapper::to_dto(&product);

        product.name.push_str(" (renamed)");
        product.brand = None;

        assert_eq!(view.name, "Laptop 4");
        assert_eq!(view.brand, "Dell");
    }

    #[test]
    fn test_from_impls_agree_with_mapper() {
        let product = full_product(6);
        let expected = ProductListMapper::to_dto(&product);

        assert_eq!(ProductDashboardResponse::from(&product), expected);
        assert_eq!(<ProductListMapper as Mapper<_, _>>::map(&product), expected);
        assert_eq!(ProductDashboardResponse::from(product), expected);
    }

    #[test]
    fn test_mapper_trait_maps_collections_in_order() {
        let products = vec![full_product(1), widget(), full_product(3)];
        let views = ProductListMapper::map_all(products.iter());

        assert_eq!(views.len(), 3);
        assert_eq!(views, ProductListMapper::to_dto_list(&products));
        assert_eq!(views[1].name, "Widget");
    }

    #[test]
    fn test_page_conversion_keeps_metadata() {
        let page = Page::new(vec![full_product(1), full_product(2)], 1, 2, 5);
        let list = ProductDashboardListResponse::from(page);

        assert_eq!(list.products.len(), 2);
        assert_eq!(list.page, 1);
        assert_eq!(list.size, 2);
        assert_eq!(list.total_elements, 5);
        assert_eq!(list.total_pages, 3);
        assert_eq!(list.products[1].id, ProductId::new(2));
    }

    #[test]
    fn test_empty_page_conversion() {
        let page: Page<Product> = Page::empty(techshop_core::PageRequest::first());
        let list = ProductDashboardListResponse::from(page);

        assert!(list.products.is_empty());
        assert_eq!(list.total_elements, 0);
    }

    #[test]
    fn test_concurrent_conversions_do_not_cross_contaminate() {
        let products: Vec<Product> = (1..=64).map(full_product).collect();

        let views: Vec<Vec<ProductDashboardResponse>> = std::thread::scope(|scope| {
            let handles: Vec<_> = products
                .chunks(8)
                .map(|chunk| scope.spawn(move || ProductListMapper::to_dto_list(chunk)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let flat: Vec<_> = views.into_iter().flatten().collect();
        assert_eq!(flat.len(), products.len());
        for (product, view) in products.iter().zip(&flat) {
            assert_eq!(view.id, product.id);
            assert_eq!(view.name, product.name);
            assert_eq!(view.quantity, product.quantity);
            assert_eq!(view.image, format!("https://cdn.techshop.vn/{}.png", product.id));
        }
    }
}
