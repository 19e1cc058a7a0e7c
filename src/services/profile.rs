//! Measurement profile form.
//!
//! Holds the editable field buffers and validates them into an immutable
//! `UserSizes` on explicit submit. Validation failures stay local; nothing
//! propagates to a global error channel.

use crate::domain::types::UserSizes;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),
}

/// Editable form fields, addressed by index in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Bust,
    Waist,
    Hips,
    TopSize,
    BottomSize,
    ShoeSize,
    Height,
    Weight,
}

impl ProfileField {
    pub const ALL: [ProfileField; 8] = [
        ProfileField::Bust,
        ProfileField::Waist,
        ProfileField::Hips,
        ProfileField::TopSize,
        ProfileField::BottomSize,
        ProfileField::ShoeSize,
        ProfileField::Height,
        ProfileField::Weight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Bust => "Bust",
            ProfileField::Waist => "Waist",
            ProfileField::Hips => "Hips",
            ProfileField::TopSize => "Top Size",
            ProfileField::BottomSize => "Bottom Size",
            ProfileField::ShoeSize => "Shoe Size",
            ProfileField::Height => "Height (cm)",
            ProfileField::Weight => "Weight (kg)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            ProfileField::Bust => "e.g., 90",
            ProfileField::Waist => "e.g., 70",
            ProfileField::Hips => "e.g., 95",
            ProfileField::TopSize => "e.g., M, L, XL",
            ProfileField::BottomSize => "e.g., 32, 34, 36",
            ProfileField::ShoeSize => "e.g., 8, 9, 10",
            ProfileField::Height => "e.g., 170",
            ProfileField::Weight => "e.g., 70",
        }
    }
}

/// Measurement form state
#[derive(Debug, Clone, Default)]
pub struct ProfileForm {
    fields: [String; 8],
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ProfileField) -> &str {
        &self.fields[field as usize]
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        self.fields[field as usize] = value.into();
    }

    pub fn push_char(&mut self, field: ProfileField, c: char) {
        self.fields[field as usize].push(c);
    }

    pub fn pop_char(&mut self, field: ProfileField) {
        self.fields[field as usize].pop();
    }

    /// Validate and build the immutable `UserSizes` record.
    ///
    /// Shoe size, height, and weight are required; bust/waist/hips are
    /// accepted as entered. Succeeds at most once per submit attempt.
    pub fn submit(&self) -> Result<UserSizes, ProfileError> {
        self.require(ProfileField::ShoeSize, "shoe_size")?;
        self.require(ProfileField::Height, "height")?;
        self.require(ProfileField::Weight, "weight")?;

        Ok(UserSizes {
            bust: self.value(ProfileField::Bust).trim().to_string(),
            waist: self.value(ProfileField::Waist).trim().to_string(),
            hips: self.value(ProfileField::Hips).trim().to_string(),
            top_size: non_empty(self.value(ProfileField::TopSize)),
            bottom_size: non_empty(self.value(ProfileField::BottomSize)),
            shoe_size: non_empty(self.value(ProfileField::ShoeSize)),
            height: non_empty(self.value(ProfileField::Height)),
            weight: non_empty(self.value(ProfileField::Weight)),
        })
    }

    fn require(&self, field: ProfileField, name: &'static str) -> Result<(), ProfileError> {
        if self.value(field).trim().is_empty() {
            return Err(ProfileError::MissingField(name));
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
