//! Multi-step product creation.
//!
//! Creating a product is three dependent calls: the base entity first,
//! then each variant, then each image. The sequence is deliberately
//! best-effort and non-atomic: a variant or image failure is logged,
//! recorded and skipped - it is not retried and does not roll back the
//! base product or earlier siblings. The outcome report carries every
//! partial failure so callers can surface them instead of reporting
//! unqualified success.

use chrono::Utc;

use crate::client::AdminClient;
use crate::error::ApiError;
use crate::forms::VariantForm;
use crate::types::{ImageUpload, NewProduct, Product, ProductImage, Variant};

/// A step of the creation sequence that can fail independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreationStep {
    /// Creating the variant with the given (already suffixed) SKU.
    Variant { sku: String },
    /// Uploading the image with the given filename.
    Image { filename: String },
}

impl std::fmt::Display for CreationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variant { sku } => write!(f, "variant {sku}"),
            Self::Image { filename } => write!(f, "image {filename}"),
        }
    }
}

/// A recorded partial failure.
#[derive(Debug, Clone)]
pub struct StepFailure {
    /// Which step failed.
    pub step: CreationStep,
    /// The error message, as it would have been toasted.
    pub error: String,
}

/// Outcome of the creation sequence.
#[derive(Debug, Clone)]
pub struct ProductCreation {
    /// The created base product.
    pub product: Product,
    /// Variants that were created.
    pub variants: Vec<Variant>,
    /// Images that were uploaded.
    pub images: Vec<ProductImage>,
    /// Steps that failed and were skipped.
    pub failures: Vec<StepFailure>,
}

impl ProductCreation {
    /// Whether every step succeeded.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl AdminClient {
    /// Create a product together with its variants and images.
    ///
    /// Every variant form is validated up front; any rejection blocks
    /// the whole operation before a single request is made. The base
    /// product is created next and its failure aborts the sequence.
    /// After that, each variant and image is attempted in order and
    /// failures are collected rather than propagated.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if any variant form is rejected,
    /// or the underlying error if the base product creation fails.
    /// Per-variant and per-image failures do not error; they are
    /// recorded in [`ProductCreation::failures`].
    pub async fn create_product_with_details(
        &self,
        product: NewProduct,
        variant_forms: Vec<VariantForm>,
        image_uploads: Vec<ImageUpload>,
    ) -> Result<ProductCreation, ApiError> {
        let now = Utc::now();
        let mut payloads = Vec::with_capacity(variant_forms.len());
        for form in variant_forms {
            payloads.push(form.validate(now)?);
        }

        let product = self.create_product(&product).await?;

        let mut variants = Vec::new();
        let mut images = Vec::new();
        let mut failures = Vec::new();

        for payload in &payloads {
            match self.create_variant(product.id, payload).await {
                Ok(variant) => variants.push(variant),
                Err(e) => {
                    tracing::warn!(
                        product = %product.slug,
                        sku = %payload.sku,
                        error = %e,
                        "variant creation failed, skipping"
                    );
                    failures.push(StepFailure {
                        step: CreationStep::Variant {
                            sku: payload.sku.to_string(),
                        },
                        error: e.to_string(),
                    });
                }
            }
        }

        for upload in &image_uploads {
            match self.upload_product_image(product.id, upload).await {
                Ok(image) => images.push(image),
                Err(e) => {
                    tracing::warn!(
                        product = %product.slug,
                        filename = %upload.filename,
                        error = %e,
                        "image upload failed, skipping"
                    );
                    failures.push(StepFailure {
                        step: CreationStep::Image {
                            filename: upload.filename.clone(),
                        },
                        error: e.to_string(),
                    });
                }
            }
        }

        Ok(ProductCreation {
            product,
            variants,
            images,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_step_display() {
        let step = CreationStep::Variant {
            sku: "ABC-m".to_string(),
        };
        assert_eq!(step.to_string(), "variant ABC-m");

        let step = CreationStep::Image {
            filename: "front.jpg".to_string(),
        };
        assert_eq!(step.to_string(), "image front.jpg");
    }
}
