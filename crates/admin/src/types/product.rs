//! Product, variant and image domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shopdesk_core::{CategoryId, DiscountPercent, ProductId, ProductImageId, Sku, Slug, VariantId};

// =============================================================================
// Product Types
// =============================================================================

/// A product as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// URL handle; products are addressed by slug.
    pub slug: Slug,
    /// Display name.
    pub name: String,
    /// HTML description.
    pub description: String,
    /// Owning category.
    pub category: CategoryId,
    /// Brand name.
    #[serde(default)]
    pub brand: Option<String>,
    /// Whether the product is visible on the storefront.
    pub is_active: bool,
    /// Size-level configurations.
    #[serde(default)]
    pub variants: Vec<Variant>,
    /// Product images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A purchasable size/SKU-level configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    /// Variant ID.
    pub id: VariantId,
    /// Owning product.
    pub product: ProductId,
    /// Size label (e.g., "M", "Extra Large").
    pub size: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i64,
    /// SKU, unique per product.
    pub sku: Sku,
    /// Whether the discount fields apply.
    pub is_discount_active: bool,
    /// Discount percentage, present only while the discount is active.
    #[serde(default)]
    pub discount_percentage: Option<DiscountPercent>,
    /// Derived discounted price, present only while the discount is active.
    #[serde(default)]
    pub discount_price: Option<Decimal>,
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image ID.
    pub id: ProductImageId,
    /// Owning product.
    pub product: ProductId,
    /// Image URL.
    pub image: String,
    /// Alt text for accessibility.
    #[serde(default)]
    pub alt_text: Option<String>,
}

// =============================================================================
// Inputs
// =============================================================================

/// Payload for creating a product.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// HTML description.
    pub description: String,
    /// Owning category.
    pub category: CategoryId,
    /// Brand name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Whether the product starts active.
    pub is_active: bool,
}

/// Payload for updating a product.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New owning category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryId>,
    /// New brand name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// New active flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Payload for creating a variant.
///
/// Built by [`crate::forms::VariantForm::validate`], which derives the
/// suffixed SKU and the discount price.
#[derive(Debug, Clone, Serialize)]
pub struct NewVariant {
    /// Size label.
    pub size: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub stock: i64,
    /// SKU with the client-side uniqueness suffix applied.
    pub sku: Sku,
    /// Whether the discount fields apply.
    pub is_discount_active: bool,
    /// Discount percentage, present only when active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<DiscountPercent>,
    /// Derived discounted price, present only when active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
}

/// Payload for updating a variant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariantUpdate {
    /// New unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// New stock count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    /// New discount flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_discount_active: Option<bool>,
    /// New discount percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<DiscountPercent>,
    /// New derived discounted price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_price: Option<Decimal>,
}

/// An image file staged for multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original filename, sent as the multipart part name.
    pub filename: String,
    /// MIME type (e.g., "image/jpeg").
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_variant_omits_inactive_discount_fields() {
        let variant = NewVariant {
            size: "M".to_string(),
            price: "100".parse().unwrap(),
            stock: 5,
            sku: Sku::new("ABC-m"),
            is_discount_active: false,
            discount_percentage: None,
            discount_price: None,
        };
        let json = serde_json::to_value(&variant).unwrap();
        assert!(json.get("discount_percentage").is_none());
        assert!(json.get("discount_price").is_none());
    }

    #[test]
    fn test_product_update_serializes_only_set_fields() {
        let update = ProductUpdate {
            name: Some("Renamed".to_string()),
            ..ProductUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["name"], "Renamed");
    }

    #[test]
    fn test_variant_deserializes_without_discount() {
        let json = r#"{
            "id": 10, "product": 1, "size": "M", "price": "19.99",
            "stock": 3, "sku": "TEE-m", "is_discount_active": false
        }"#;
        let variant: Variant = serde_json::from_str(json).unwrap();
        assert_eq!(variant.discount_percentage, None);
        assert_eq!(variant.discount_price, None);
    }
}
