//! Binds each entity model to its input shapes, key column and list order.

use std::cmp::Ordering;
use std::fmt;

use models::{case_study, contact_submission, insight, leadership_profile, offering, service, solution};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, FromQueryResult, Order};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::inputs::{
    CreateCaseStudyInput, CreateContactSubmissionInput, CreateContentInput, CreateLeadershipProfileInput,
    UpdateCaseStudyInput, UpdateContentInput, UpdateLeadershipProfileInput,
};
use crate::patch::{assign, set_if_present, NoUpdate};
use crate::validation::Validate;

pub type Offering = offering::Model;
pub type Solution = solution::Model;
pub type Service = service::Model;
pub type Insight = insight::Model;
pub type CaseStudy = case_study::Model;
pub type LeadershipProfile = leadership_profile::Model;
pub type ContactSubmission = contact_submission::Model;

type ColumnOf<R> = <<R as Resource>::Entity as EntityTrait>::Column;

/// A stored record kind that can be listed and created.
pub trait Resource: Clone + fmt::Debug + Serialize + FromQueryResult + Send + Sync + Sized + 'static {
    /// Human readable kind, used in errors and logs.
    const KIND: &'static str;

    type Entity: EntityTrait<Model = Self>;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + Sync + 'static;
    type CreateInput: Validate + DeserializeOwned + fmt::Debug + Send + Sync + 'static;
    /// [`NoUpdate`] for append-only kinds.
    type UpdateInput: Validate + DeserializeOwned + fmt::Debug + Send + Sync + 'static;

    fn id(&self) -> i32;
    fn id_column() -> ColumnOf<Self>;
    /// Sort keys for `list`, most significant first.
    fn ordering() -> Vec<(ColumnOf<Self>, Order)>;
    /// Same order as [`Resource::ordering`], for stores that sort in memory.
    fn display_cmp(&self, other: &Self) -> Ordering;
    fn from_input(input: Self::CreateInput, id: i32, now: DateTimeWithTimeZone) -> Self;

    fn target_id(input: &Self::UpdateInput) -> i32;
    fn updated_at(&self) -> DateTimeWithTimeZone;
    /// Copy the provided fields over and stamp `updated_at`.
    fn apply_update(&mut self, input: Self::UpdateInput, now: DateTimeWithTimeZone);
    /// Active model with only the provided fields and `updated_at` set.
    fn changes(input: Self::UpdateInput, now: DateTimeWithTimeZone) -> Self::ActiveModel;
}

/// Record kinds whose update procedure is exposed.
pub trait Editable: Resource {}

// offerings, solutions, services and insights share one shape
macro_rules! titled_content {
    ($($module:ident => $kind:literal),+ $(,)?) => {$(
        impl Resource for $module::Model {
            const KIND: &'static str = $kind;

            type Entity = $module::Entity;
            type ActiveModel = $module::ActiveModel;
            type CreateInput = CreateContentInput;
            type UpdateInput = UpdateContentInput;

            fn id(&self) -> i32 { self.id }

            fn id_column() -> $module::Column { $module::Column::Id }

            fn ordering() -> Vec<($module::Column, Order)> {
                vec![($module::Column::OrderIndex, Order::Asc), ($module::Column::Id, Order::Asc)]
            }

            fn display_cmp(&self, other: &Self) -> Ordering {
                (self.order_index, self.id).cmp(&(other.order_index, other.id))
            }

            fn from_input(input: CreateContentInput, id: i32, now: DateTimeWithTimeZone) -> Self {
                Self {
                    id,
                    title: input.title,
                    description: input.description,
                    order_index: input.order_index,
                    created_at: now,
                    updated_at: now,
                }
            }

            fn target_id(input: &UpdateContentInput) -> i32 { input.id }

            fn updated_at(&self) -> DateTimeWithTimeZone { self.updated_at }

            fn apply_update(&mut self, input: UpdateContentInput, now: DateTimeWithTimeZone) {
                assign(&mut self.title, input.title);
                assign(&mut self.description, input.description);
                assign(&mut self.order_index, input.order_index);
                self.updated_at = now;
            }

            fn changes(input: UpdateContentInput, now: DateTimeWithTimeZone) -> $module::ActiveModel {
                $module::ActiveModel {
                    title: set_if_present(input.title),
                    description: set_if_present(input.description),
                    order_index: set_if_present(input.order_index),
                    updated_at: Set(now),
                    ..Default::default()
                }
            }
        }

        impl Editable for $module::Model {}
    )+};
}

titled_content! {
    offering => "offering",
    solution => "solution",
    service => "service",
    insight => "insight",
}

impl Resource for CaseStudy {
    const KIND: &'static str = "case study";

    type Entity = case_study::Entity;
    type ActiveModel = case_study::ActiveModel;
    type CreateInput = CreateCaseStudyInput;
    type UpdateInput = UpdateCaseStudyInput;

    fn id(&self) -> i32 { self.id }

    fn id_column() -> case_study::Column { case_study::Column::Id }

    fn ordering() -> Vec<(case_study::Column, Order)> {
        vec![(case_study::Column::OrderIndex, Order::Asc), (case_study::Column::Id, Order::Asc)]
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        (self.order_index, self.id).cmp(&(other.order_index, other.id))
    }

    fn from_input(input: CreateCaseStudyInput, id: i32, now: DateTimeWithTimeZone) -> Self {
        Self {
            id,
            main_title: input.main_title,
            primary_subtitle: input.primary_subtitle,
            primary_description: input.primary_description,
            // blank secondary text is stored as null
            secondary_subtitle: input.secondary_subtitle.filter(|s| !s.is_empty()),
            secondary_description: input.secondary_description.filter(|s| !s.is_empty()),
            order_index: input.order_index,
            created_at: now,
            updated_at: now,
        }
    }

    fn target_id(input: &UpdateCaseStudyInput) -> i32 { input.id }

    fn updated_at(&self) -> DateTimeWithTimeZone { self.updated_at }

    fn apply_update(&mut self, input: UpdateCaseStudyInput, now: DateTimeWithTimeZone) {
        assign(&mut self.main_title, input.main_title);
        assign(&mut self.primary_subtitle, input.primary_subtitle);
        assign(&mut self.primary_description, input.primary_description);
        input.secondary_subtitle.apply_to(&mut self.secondary_subtitle);
        input.secondary_description.apply_to(&mut self.secondary_description);
        assign(&mut self.order_index, input.order_index);
        self.updated_at = now;
    }

    fn changes(input: UpdateCaseStudyInput, now: DateTimeWithTimeZone) -> case_study::ActiveModel {
        case_study::ActiveModel {
            main_title: set_if_present(input.main_title),
            primary_subtitle: set_if_present(input.primary_subtitle),
            primary_description: set_if_present(input.primary_description),
            secondary_subtitle: input.secondary_subtitle.into_active_value(),
            secondary_description: input.secondary_description.into_active_value(),
            order_index: set_if_present(input.order_index),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

impl Editable for CaseStudy {}

impl Resource for LeadershipProfile {
    const KIND: &'static str = "leadership profile";

    type Entity = leadership_profile::Entity;
    type ActiveModel = leadership_profile::ActiveModel;
    type CreateInput = CreateLeadershipProfileInput;
    type UpdateInput = UpdateLeadershipProfileInput;

    fn id(&self) -> i32 { self.id }

    fn id_column() -> leadership_profile::Column { leadership_profile::Column::Id }

    fn ordering() -> Vec<(leadership_profile::Column, Order)> {
        vec![(leadership_profile::Column::OrderIndex, Order::Asc), (leadership_profile::Column::Id, Order::Asc)]
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        (self.order_index, self.id).cmp(&(other.order_index, other.id))
    }

    fn from_input(input: CreateLeadershipProfileInput, id: i32, now: DateTimeWithTimeZone) -> Self {
        Self { id, name: input.name, title: input.title, order_index: input.order_index, created_at: now, updated_at: now }
    }

    fn target_id(input: &UpdateLeadershipProfileInput) -> i32 { input.id }

    fn updated_at(&self) -> DateTimeWithTimeZone { self.updated_at }

    fn apply_update(&mut self, input: UpdateLeadershipProfileInput, now: DateTimeWithTimeZone) {
        assign(&mut self.name, input.name);
        assign(&mut self.title, input.title);
        assign(&mut self.order_index, input.order_index);
        self.updated_at = now;
    }

    fn changes(input: UpdateLeadershipProfileInput, now: DateTimeWithTimeZone) -> leadership_profile::ActiveModel {
        leadership_profile::ActiveModel {
            name: set_if_present(input.name),
            title: set_if_present(input.title),
            order_index: set_if_present(input.order_index),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

impl Editable for LeadershipProfile {}

// append-only: no Editable impl, and NoUpdate cannot be constructed
impl Resource for ContactSubmission {
    const KIND: &'static str = "contact submission";

    type Entity = contact_submission::Entity;
    type ActiveModel = contact_submission::ActiveModel;
    type CreateInput = CreateContactSubmissionInput;
    type UpdateInput = NoUpdate;

    fn id(&self) -> i32 { self.id }

    fn id_column() -> contact_submission::Column { contact_submission::Column::Id }

    fn ordering() -> Vec<(contact_submission::Column, Order)> {
        vec![(contact_submission::Column::CreatedAt, Order::Desc), (contact_submission::Column::Id, Order::Desc)]
    }

    fn display_cmp(&self, other: &Self) -> Ordering {
        (other.created_at, other.id).cmp(&(self.created_at, self.id))
    }

    fn from_input(input: CreateContactSubmissionInput, id: i32, now: DateTimeWithTimeZone) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            message: input.message,
            created_at: now,
        }
    }

    fn target_id(input: &NoUpdate) -> i32 { match *input {} }

    fn updated_at(&self) -> DateTimeWithTimeZone { self.created_at }

    fn apply_update(&mut self, input: NoUpdate, _: DateTimeWithTimeZone) { match input {} }

    fn changes(input: NoUpdate, _: DateTimeWithTimeZone) -> contact_submission::ActiveModel { match input {} }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;
    use crate::patch::Patch;

    fn study(id: i32, order_index: i32) -> CaseStudy {
        CaseStudy::from_input(
            CreateCaseStudyInput {
                main_title: "M".into(),
                primary_subtitle: "P".into(),
                primary_description: "D".into(),
                secondary_subtitle: Some("S".into()),
                secondary_description: Some("SD".into()),
                order_index,
            },
            id,
            clock::now(),
        )
    }

    #[test]
    fn from_input_sets_equal_timestamps() {
        let o = Offering::from_input(
            CreateContentInput { title: "X".into(), description: "Y".into(), order_index: 0 },
            7,
            clock::now(),
        );
        assert_eq!(o.id, 7);
        assert_eq!(o.created_at, o.updated_at);
    }

    #[test]
    fn blank_secondary_text_stored_as_null() {
        let s = CaseStudy::from_input(
            CreateCaseStudyInput {
                main_title: "M".into(),
                primary_subtitle: "P".into(),
                primary_description: "D".into(),
                secondary_subtitle: Some(String::new()),
                secondary_description: Some("kept".into()),
                order_index: 0,
            },
            1,
            clock::now(),
        );
        assert_eq!(s.secondary_subtitle, None);
        assert_eq!(s.secondary_description.as_deref(), Some("kept"));
    }

    #[test]
    fn changes_leave_omitted_columns_unset() {
        use sea_orm::ActiveValue::NotSet;
        let now = clock::now();
        let active = CaseStudy::changes(
            UpdateCaseStudyInput { id: 1, main_title: Some("M2".into()), secondary_subtitle: Patch::Null, ..Default::default() },
            now,
        );
        assert_eq!(active.main_title, Set("M2".to_string()));
        assert_eq!(active.secondary_subtitle, Set(None));
        assert_eq!(active.secondary_description, NotSet);
        assert_eq!(active.primary_subtitle, NotSet);
        assert_eq!(active.order_index, NotSet);
        assert_eq!(active.id, NotSet);
        assert_eq!(active.updated_at, Set(now));
    }

    #[test]
    fn content_orders_by_index_then_id() {
        let mut rows = vec![study(3, 1), study(1, 2), study(2, 1)];
        rows.sort_by(|a, b| a.display_cmp(b));
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn case_study_patch_clears_only_named_field() {
        let mut s = study(1, 0);
        let before = s.updated_at;
        let later = clock::next_after(before);
        s.apply_update(
            UpdateCaseStudyInput { id: 1, secondary_subtitle: Patch::Null, ..Default::default() },
            later,
        );
        assert_eq!(s.secondary_subtitle, None);
        assert_eq!(s.secondary_description.as_deref(), Some("SD"));
        assert_eq!(s.main_title, "M");
        assert!(s.updated_at > before);
    }

    #[test]
    fn contact_submissions_newest_first() {
        let input = CreateContactSubmissionInput {
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.co".into(),
            phone: "1".into(),
            message: "m".into(),
        };
        let t = clock::now();
        let older = ContactSubmission::from_input(input.clone(), 1, t);
        let newer = ContactSubmission::from_input(input.clone(), 2, clock::next_after(t));
        let tie = ContactSubmission::from_input(input, 3, t);
        let mut rows = vec![older, tie, newer];
        rows.sort_by(|a, b| a.display_cmp(b));
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
