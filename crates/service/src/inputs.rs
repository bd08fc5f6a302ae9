//! Request shapes for create/update calls.
//!
//! Every input rejects unknown fields. Update inputs carry the target `id`
//! plus any subset of the record's fields.

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::patch::{non_null, Patch};
use crate::validation::{self, Validate};

/// Create input for offerings, solutions, services and insights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateContentInput {
    pub title: String,
    pub description: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateContentInput {
    pub id: i32,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCaseStudyInput {
    pub main_title: String,
    pub primary_subtitle: String,
    pub primary_description: String,
    #[serde(default)]
    pub secondary_subtitle: Option<String>,
    #[serde(default)]
    pub secondary_description: Option<String>,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCaseStudyInput {
    pub id: i32,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub main_title: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub primary_subtitle: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub primary_description: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub secondary_subtitle: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub secondary_description: Patch<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateLeadershipProfileInput {
    pub name: String,
    pub title: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateLeadershipProfileInput {
    pub id: i32,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null", skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

/// Contact form payload. It has no `order_index`; sending
/// one is an unknown-field error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateContactSubmissionInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl Validate for CreateContentInput {
    fn validate(&self) -> Result<(), ServiceError> {
        validation::required_text("title", &self.title)?;
        validation::required_text("description", &self.description)?;
        validation::order_index(self.order_index)
    }
}

impl Validate for UpdateContentInput {
    fn validate(&self) -> Result<(), ServiceError> {
        validation::record_id(self.id)?;
        validation::optional_text("title", self.title.as_ref())?;
        validation::optional_text("description", self.description.as_ref())?;
        validation::optional_order_index(self.order_index)
    }
}

impl Validate for CreateCaseStudyInput {
    fn validate(&self) -> Result<(), ServiceError> {
        validation::required_text("main_title", &self.main_title)?;
        validation::required_text("primary_subtitle", &self.primary_subtitle)?;
        validation::required_text("primary_description", &self.primary_description)?;
        validation::order_index(self.order_index)
    }
}

impl Validate for UpdateCaseStudyInput {
    fn validate(&self) -> Result<(), ServiceError> {
        validation::record_id(self.id)?;
        validation::optional_text("main_title", self.main_title.as_ref())?;
        validation::optional_text("primary_subtitle", self.primary_subtitle.as_ref())?;
        validation::optional_text("primary_description", self.primary_description.as_ref())?;
        validation::optional_order_index(self.order_index)
    }
}

impl Validate for CreateLeadershipProfileInput {
    fn validate(&self) -> Result<(), ServiceError> {
        validation::required_text("name", &self.name)?;
        validation::required_text("title", &self.title)?;
        validation::order_index(self.order_index)
    }
}

impl Validate for UpdateLeadershipProfileInput {
    fn validate(&self) -> Result<(), ServiceError> {
        validation::record_id(self.id)?;
        validation::optional_text("name", self.name.as_ref())?;
        validation::optional_text("title", self.title.as_ref())?;
        validation::optional_order_index(self.order_index)
    }
}

impl Validate for CreateContactSubmissionInput {
    fn validate(&self) -> Result<(), ServiceError> {
        validation::required_text("first_name", &self.first_name)?;
        validation::required_text("last_name", &self.last_name)?;
        validation::email("email", &self.email)?;
        validation::required_text("phone", &self.phone)?;
        validation::required_text("message", &self.message)
    }
}
