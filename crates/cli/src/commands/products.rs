//! Product screens: CRUD, variants, images, and the multi-step create.

use std::path::{Path, PathBuf};

use clap::Subcommand;
use rust_decimal::Decimal;
use serde::Deserialize;

use shopdesk_admin::AdminClient;
use shopdesk_admin::forms::VariantForm;
use shopdesk_admin::types::{ImageUpload, NewProduct, ProductUpdate};
use shopdesk_core::{CategoryId, ProductId, ProductImageId, Sku, Slug, VariantId};

use super::print_json;

#[derive(Subcommand)]
pub enum ProductAction {
    /// List products
    List {
        /// Page number
        #[arg(long)]
        page: Option<u32>,

        /// Search term
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one product with its variants and images
    Show {
        /// Product slug
        slug: String,
    },
    /// Create a product with variants and images from a JSON file
    Create {
        /// Path to the product description file
        #[arg(long)]
        file: PathBuf,
    },
    /// Update product fields
    Update {
        /// Product slug
        slug: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Category ID
        #[arg(long)]
        category: Option<i64>,

        #[arg(long)]
        brand: Option<String>,

        /// Set the active flag
        #[arg(long)]
        active: Option<bool>,
    },
    /// Delete a product
    Delete {
        /// Product slug
        slug: String,
    },
    /// Flip a product's active flag
    Toggle {
        /// Product slug
        slug: String,
    },
    /// Add a variant to an existing product
    AddVariant {
        /// Product ID
        #[arg(long)]
        product: i64,

        #[arg(long)]
        size: String,

        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        stock: i64,

        /// Base SKU; the size suffix is appended client-side
        #[arg(long)]
        sku: String,

        /// Discount percentage (1-100); enables the discount
        #[arg(long)]
        discount_percent: Option<u8>,
    },
    /// Delete a variant
    RemoveVariant {
        /// Variant ID
        id: i64,
    },
    /// Upload an image to an existing product
    AddImage {
        /// Product ID
        #[arg(long)]
        product: i64,

        /// Image file path
        #[arg(long)]
        path: PathBuf,

        /// Alt text
        #[arg(long)]
        alt: Option<String>,
    },
    /// Delete an image
    RemoveImage {
        /// Image ID
        id: i64,
    },
}

/// On-disk description for the multi-step create screen.
#[derive(Debug, Deserialize)]
struct ProductFile {
    name: String,
    description: String,
    category: i64,
    #[serde(default)]
    brand: Option<String>,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    variants: Vec<VariantEntry>,
    #[serde(default)]
    images: Vec<ImageEntry>,
}

const fn default_active() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct VariantEntry {
    #[serde(default)]
    size: String,
    price: Decimal,
    stock: i64,
    sku: String,
    #[serde(default)]
    is_discount_active: bool,
    #[serde(default)]
    discount_percentage: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct ImageEntry {
    path: PathBuf,
    #[serde(default)]
    alt_text: Option<String>,
}

pub async fn run(
    client: &AdminClient,
    action: ProductAction,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProductAction::List { page, search } => {
            let products = client.list_products(page, search.as_deref()).await?;
            print_json(&products)
        }
        ProductAction::Show { slug } => {
            let product = client.get_product(&Slug::new(slug)).await?;
            print_json(&product)
        }
        ProductAction::Create { file } => create_from_file(client, &file).await,
        ProductAction::Update {
            slug,
            name,
            description,
            category,
            brand,
            active,
        } => {
            let update = ProductUpdate {
                name,
                description,
                category: category.map(CategoryId::new),
                brand,
                is_active: active,
            };
            let product = client.update_product(&Slug::new(slug), &update).await?;
            print_json(&product)
        }
        ProductAction::Delete { slug } => {
            client.delete_product(&Slug::new(slug)).await?;
            eprintln!("deleted");
            Ok(())
        }
        ProductAction::Toggle { slug } => {
            let product = client.toggle_product_status(&Slug::new(slug)).await?;
            eprintln!(
                "{} is now {}",
                product.slug,
                if product.is_active { "active" } else { "inactive" }
            );
            Ok(())
        }
        ProductAction::AddVariant {
            product,
            size,
            price,
            stock,
            sku,
            discount_percent,
        } => {
            let form = VariantForm {
                size,
                price,
                stock,
                sku: Sku::new(sku),
                is_discount_active: discount_percent.is_some(),
                discount_percentage: discount_percent,
            };
            let payload = form.validate(chrono::Utc::now())?;
            let variant = client
                .create_variant(ProductId::new(product), &payload)
                .await?;
            print_json(&variant)
        }
        ProductAction::RemoveVariant { id } => {
            client.delete_variant(VariantId::new(id)).await?;
            eprintln!("deleted");
            Ok(())
        }
        ProductAction::AddImage { product, path, alt } => {
            let upload = read_image(&path, alt)?;
            let image = client
                .upload_product_image(ProductId::new(product), &upload)
                .await?;
            print_json(&image)
        }
        ProductAction::RemoveImage { id } => {
            client.delete_product_image(ProductImageId::new(id)).await?;
            eprintln!("deleted");
            Ok(())
        }
    }
}

/// The multi-step create: base product, then variants, then images.
/// Partial failures are printed and turn into a non-zero exit.
async fn create_from_file(
    client: &AdminClient,
    file: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(file)?;
    let manifest: ProductFile = serde_json::from_str(&content)?;

    let product = NewProduct {
        name: manifest.name,
        description: manifest.description,
        category: CategoryId::new(manifest.category),
        brand: manifest.brand,
        is_active: manifest.is_active,
    };

    let variant_forms = manifest
        .variants
        .into_iter()
        .map(|v| VariantForm {
            size: v.size,
            price: v.price,
            stock: v.stock,
            sku: Sku::new(v.sku),
            is_discount_active: v.is_discount_active,
            discount_percentage: v.discount_percentage,
        })
        .collect();

    let mut uploads = Vec::with_capacity(manifest.images.len());
    for entry in manifest.images {
        uploads.push(read_image(&entry.path, entry.alt_text)?);
    }

    let outcome = client
        .create_product_with_details(product, variant_forms, uploads)
        .await?;

    eprintln!(
        "created {} with {} variant(s) and {} image(s)",
        outcome.product.slug,
        outcome.variants.len(),
        outcome.images.len()
    );
    for failure in &outcome.failures {
        eprintln!("failed: {}: {}", failure.step, failure.error);
    }
    if outcome.is_complete() {
        Ok(())
    } else {
        Err(format!("{} creation step(s) failed", outcome.failures.len()).into())
    }
}

fn read_image(
    path: &Path,
    alt_text: Option<String>,
) -> Result<ImageUpload, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("invalid image path: {}", path.display()))?
        .to_owned();
    Ok(ImageUpload {
        content_type: content_type_for(&filename).to_owned(),
        filename,
        bytes,
        alt_text,
    })
}

fn content_type_for(filename: &str) -> &'static str {
    match filename.rsplit('.').next().map(str::to_lowercase).as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for_common_extensions() {
        assert_eq!(content_type_for("front.JPG"), "image/jpeg");
        assert_eq!(content_type_for("front.png"), "image/png");
        assert_eq!(content_type_for("archive"), "application/octet-stream");
    }

    #[test]
    fn test_product_file_minimal() {
        let manifest: ProductFile = serde_json::from_str(
            r#"{"name": "Tee", "description": "<p>x</p>", "category": 1}"#,
        )
        .unwrap();
        assert!(manifest.is_active);
        assert!(manifest.variants.is_empty());
        assert!(manifest.images.is_empty());
    }
}
