//! Product, variant and image operations.

use tracing::instrument;

use shopdesk_core::{ProductId, ProductImageId, Slug, VariantId};

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::types::{
    ImageUpload, NewProduct, NewVariant, Paginated, Product, ProductImage, ProductUpdate, Variant,
    VariantUpdate,
};

impl AdminClient {
    /// Get a paginated list of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
        page: Option<u32>,
        search: Option<&str>,
    ) -> Result<Paginated<Product>, ApiError> {
        let mut query = Vec::new();
        if let Some(page) = page {
            query.push(("page", page.to_string()));
        }
        if let Some(search) = search {
            query.push(("search", search.to_string()));
        }
        self.get_json("api/products/", &query).await
    }

    /// Get a product by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or the product does not
    /// exist.
    #[instrument(skip(self), fields(product = %slug))]
    pub async fn get_product(&self, slug: &Slug) -> Result<Product, ApiError> {
        self.get_json(&format!("api/products/{slug}/"), &[]).await
    }

    /// Create the base product entity.
    ///
    /// Variants and images are created separately; see
    /// [`Self::create_product_with_details`] for the full sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.post_json("api/products/", product).await
    }

    /// Update an existing product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self, update), fields(product = %slug))]
    pub async fn update_product(
        &self,
        slug: &Slug,
        update: &ProductUpdate,
    ) -> Result<Product, ApiError> {
        self.put_json(&format!("api/products/{slug}/"), update).await
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self), fields(product = %slug))]
    pub async fn delete_product(&self, slug: &Slug) -> Result<(), ApiError> {
        self.delete(&format!("api/products/{slug}/")).await
    }

    /// Flip a product's active flag, returning the updated product.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self), fields(product = %slug))]
    pub async fn toggle_product_status(&self, slug: &Slug) -> Result<Product, ApiError> {
        self.patch_empty(&format!("api/products/{slug}/toggle_status/"))
            .await
    }

    // =========================================================================
    // Variants
    // =========================================================================

    /// Create a variant under a product.
    ///
    /// The payload comes from [`crate::forms::VariantForm::validate`],
    /// which derives the suffixed SKU and discount price.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self, variant), fields(sku = %variant.sku))]
    pub async fn create_variant(
        &self,
        product: ProductId,
        variant: &NewVariant,
    ) -> Result<Variant, ApiError> {
        #[derive(serde::Serialize)]
        struct VariantPayload<'a> {
            product: ProductId,
            #[serde(flatten)]
            variant: &'a NewVariant,
        }

        self.post_json("api/product-variants/", &VariantPayload { product, variant })
            .await
    }

    /// Update a variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self, update))]
    pub async fn update_variant(
        &self,
        id: VariantId,
        update: &VariantUpdate,
    ) -> Result<Variant, ApiError> {
        self.put_json(&format!("api/product-variants/{id}/"), update)
            .await
    }

    /// Delete a variant.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn delete_variant(&self, id: VariantId) -> Result<(), ApiError> {
        self.delete(&format!("api/product-variants/{id}/")).await
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// Upload a product image as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self, upload), fields(filename = %upload.filename))]
    pub async fn upload_product_image(
        &self,
        product: ProductId,
        upload: &ImageUpload,
    ) -> Result<ProductImage, ApiError> {
        let upload = upload.clone();
        let make_form = Box::new(move || {
            let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
                .file_name(upload.filename.clone())
                .mime_str(&upload.content_type)
                .map_err(ApiError::Http)?;
            let mut form = reqwest::multipart::Form::new()
                .text("product", product.to_string())
                .part("image", part);
            if let Some(alt) = &upload.alt_text {
                form = form.text("alt_text", alt.clone());
            }
            Ok(form)
        });
        self.post_multipart("api/product-images/", make_form).await
    }

    /// Delete a product image.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error
    /// response.
    #[instrument(skip(self))]
    pub async fn delete_product_image(&self, id: ProductImageId) -> Result<(), ApiError> {
        self.delete(&format!("api/product-images/{id}/")).await
    }
}
