//! Eatery API data transfer objects
//!
//! These types mirror the records the review service sends over the wire.
//! Identifiers are server-issued object ids serialized as `_id`; comparing
//! them as plain strings absorbs mixed representations from older payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First page of every paginated listing.
pub const FIRST_PAGE: u32 = 1;

/// Page size applied when a listing request leaves it unspecified.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Account role reported by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May manage other accounts and any restaurant
    Admin,
    /// Regular diner account
    #[default]
    Regular,
}

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-issued identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Full name
    pub name: String,

    /// Contact email (also the login name)
    pub email: String,

    /// Contact phone number
    #[serde(default, rename = "phoneNo", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Profile picture reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A restaurant record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Server-issued identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Restaurant name
    pub name: String,

    /// Short description
    pub description: String,

    /// Street address or neighborhood
    pub location: String,

    /// When the restaurant opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<DateTime<Utc>>,

    /// Owning user, embedded by the server
    pub user: User,

    /// Average of all review ratings, computed server-side
    #[serde(default)]
    pub avg_rating: f64,

    /// Whether the current user has already reviewed this restaurant
    #[serde(default)]
    pub is_reviewed: bool,
}

/// A review left on a restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Server-issued identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// Identifier of the reviewed restaurant
    #[serde(rename = "restaurant")]
    pub restaurant_id: String,

    /// Rating between 1 and 5
    pub rating: f64,

    /// Free-text comment
    pub comment: String,

    /// When the reviewer visited
    pub visit_date: DateTime<Utc>,

    /// Reviewing user, embedded by the server
    pub user: User,

    /// Owner's reply, absent until one is posted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

/// Login request body
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Registration request body
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default, rename = "phoneNo", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl fmt::Debug for SignupData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupData")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"***")
            .field("phone", &self.phone)
            .field("role", &self.role)
            .finish()
    }
}

/// Partial user update
///
/// Every field is optional; only the fields that are present are written.
/// The same shape drives the profile-edit merge on the client side, so a
/// patch applied to a `User` overwrites exactly the keys it carries.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, rename = "phoneNo", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserPatch {
    /// Key-wise overwrite of `user` with the fields present in this patch.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            user.phone = Some(phone.clone());
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(image) = &self.image {
            user.image = Some(image.clone());
        }
        // password is write-only; it never lands in the user record
    }
}

impl fmt::Debug for UserPatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPatch")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("role", &self.role)
            .field("image", &self.image)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// New restaurant request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDraft {
    pub name: String,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<DateTime<Utc>>,
}

/// Partial restaurant update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<DateTime<Utc>>,
}

/// New review request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub rating: f64,
    pub comment: String,
    pub visit_date: DateTime<Utc>,
}

/// Partial review update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<DateTime<Utc>>,
}

/// Owner reply request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyDraft {
    pub reply: String,
}

/// Page selector for the paginated listings
///
/// Both fields are optional on purpose; the server and the store apply the
/// same defaults (`FIRST_PAGE`, `DEFAULT_PAGE_SIZE`) when they are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_no: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl PageQuery {
    /// Select a specific page with an explicit size
    pub fn new(page_no: u32, page_size: u32) -> Self {
        Self {
            page_no: Some(page_no),
            page_size: Some(page_size),
        }
    }

    /// Requested page number, defaulting to the first page
    pub fn page_no(&self) -> u32 {
        self.page_no.unwrap_or(FIRST_PAGE)
    }

    /// Requested page size, defaulting to `DEFAULT_PAGE_SIZE`
    pub fn page_size(&self) -> u32 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
