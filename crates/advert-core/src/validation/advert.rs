//! Advert field validation.

use thiserror::Error;

use crate::domain::AdvertInput;

/// Maximum `name` length, in Unicode code points.
pub const MAX_NAME_CHARS: usize = 200;
/// Maximum `description` length, in Unicode code points.
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
/// Maximum number of photo URLs per advert.
pub const MAX_PHOTO_URLS: usize = 3;

/// A single advert field violation.
///
/// The `Display` text is the client-facing detail; [`ValidationError::title`]
/// is the short error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description length exceeded")]
    DescriptionTooLong,

    #[error("name length exceeded")]
    NameTooLong,

    #[error("photo_urls quantity exceeded")]
    TooManyPhotoUrls,

    #[error("name is required")]
    NameRequired,

    #[error("description is required")]
    DescriptionRequired,

    #[error("price is required")]
    PriceRequired,

    #[error("photo_urls must have at least 1 url")]
    PhotoUrlsRequired,
}

impl ValidationError {
    /// Short error class shown next to the detail.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::DescriptionTooLong | Self::NameTooLong | Self::TooManyPhotoUrls => {
                "Request Entity Too Large"
            }
            Self::NameRequired
            | Self::DescriptionRequired
            | Self::PriceRequired
            | Self::PhotoUrlsRequired => "request has empty fields",
        }
    }
}

/// Size limits shared by create and update. First violation wins.
fn check_limits(input: &AdvertInput) -> Result<(), ValidationError> {
    if input.description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }
    if input.name.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::NameTooLong);
    }
    if input.photo_urls.len() > MAX_PHOTO_URLS {
        return Err(ValidationError::TooManyPhotoUrls);
    }
    Ok(())
}

/// Validate a create request.
///
/// Rules are evaluated in a fixed order and only the first violation is
/// reported: size limits first, then required fields.
pub fn validate_new_advert(input: &AdvertInput) -> Result<(), ValidationError> {
    check_limits(input)?;

    if input.name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if input.description.is_empty() {
        return Err(ValidationError::DescriptionRequired);
    }
    if input.price == 0 {
        return Err(ValidationError::PriceRequired);
    }
    if input.photo_urls.is_empty() {
        return Err(ValidationError::PhotoUrlsRequired);
    }
    Ok(())
}

/// Validate a partial update.
///
/// Empty fields mean "unchanged", so only the size limits apply.
pub fn validate_advert_patch(input: &AdvertInput) -> Result<(), ValidationError> {
    check_limits(input)
}
