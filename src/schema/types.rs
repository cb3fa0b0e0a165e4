//! API Entity Records
//!
//! One record per document-store collection; the collection name is the
//! lowercase of the type name (`ContactMessage` -> `contactmessage`).
//! Content records (`Program`, `Event`) are written by administrators
//! directly into the store and only read through the API. Form records are
//! created by visitor submissions and never updated or deleted.

use serde::{Deserialize, Serialize};

use super::Schema;

/// A published program offered by the organization, e.g. an after-school
/// coding club.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub title: String,
    pub summary: String,
    /// Target ages, e.g. "Ages 8-12".
    pub age_group: String,
    #[serde(default)]
    pub topics: Vec<String>,
    /// Public image URL.
    #[serde(default)]
    pub image: Option<String>,
}

impl Schema for Program {
    const COLLECTION: &'static str = "program";
}

/// A published event, either in person or online.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: String,
    /// ISO date string or human readable date.
    pub date: String,
    pub location: String,
    /// External registration link, if any.
    #[serde(default)]
    pub signup_url: Option<String>,
}

impl Schema for Event {
    const COLLECTION: &'static str = "event";
}

/// A message left through the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub subject: Option<String>,
}

impl Schema for ContactMessage {
    const COLLECTION: &'static str = "contactmessage";
}

/// A volunteer application submitted by a visitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerApplication {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Areas of interest: mentoring, events, curriculum.
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Schema for VolunteerApplication {
    const COLLECTION: &'static str = "volunteerapplication";
}

/// A newsletter subscription. Duplicates are a data-store concern, not
/// enforced here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Schema for Subscriber {
    const COLLECTION: &'static str = "subscriber";
}
