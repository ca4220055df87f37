//! Banner form validation.

use shopdesk_core::BannerPosition;

use super::{FormError, validate_http_url, validate_required};
use crate::types::NewBanner;

/// Raw banner form input.
#[derive(Debug, Clone)]
pub struct BannerForm {
    /// Headline text.
    pub title: String,
    /// Secondary text.
    pub subtitle: Option<String>,
    /// Call-to-action label.
    pub button_text: Option<String>,
    /// Where the call-to-action links.
    pub target_url: Option<String>,
    /// Storefront slot the banner renders into.
    pub position: BannerPosition,
    /// Whether the banner starts live.
    pub is_active: bool,
    /// Banner image URL.
    pub image: String,
}

impl BannerForm {
    /// Validate the form and build the request payload.
    ///
    /// # Errors
    ///
    /// - [`FormError::Required`] when the title or image is blank
    /// - [`FormError::InvalidUrl`] when a target URL is present but not
    ///   http(s)
    pub fn validate(self) -> Result<NewBanner, FormError> {
        validate_required(&self.title, "title")?;
        validate_required(&self.image, "image")?;

        if let Some(url) = &self.target_url {
            validate_http_url(url, "target_url")?;
        }

        Ok(NewBanner {
            title: self.title.trim().to_owned(),
            subtitle: self.subtitle,
            button_text: self.button_text,
            target_url: self.target_url,
            position: self.position,
            is_active: self.is_active,
            image: self.image,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_form() -> BannerForm {
        BannerForm {
            title: "Summer Sale".to_string(),
            subtitle: Some("Up to 50% off".to_string()),
            button_text: Some("Shop now".to_string()),
            target_url: Some("https://shop.test/sale".to_string()),
            position: BannerPosition::Hero,
            is_active: true,
            image: "https://cdn.shop.test/banners/summer.jpg".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(base_form().validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_title() {
        let mut form = base_form();
        form.title = " ".to_string();
        assert_eq!(form.validate().unwrap_err(), FormError::Required("title"));
    }

    #[test]
    fn test_rejects_blank_image() {
        let mut form = base_form();
        form.image = String::new();
        assert_eq!(form.validate().unwrap_err(), FormError::Required("image"));
    }

    #[test]
    fn test_rejects_bad_target_url() {
        let mut form = base_form();
        form.target_url = Some("javascript:alert(1)".to_string());
        assert_eq!(
            form.validate().unwrap_err(),
            FormError::InvalidUrl("target_url")
        );
    }
}
