use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use super::setup_test_db;
use crate::{case_study, contact_submission, leadership_profile, offering};

#[tokio::test]
async fn test_offering_insert_and_read_back() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now().into();

    let created = offering::ActiveModel {
        id: NotSet,
        title: Set("Generative AI".into()),
        description: Set("Models that write".into()),
        order_index: Set(2),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;

    assert!(created.id > 0);
    let found = offering::Entity::find_by_id(created.id).one(&db).await?.expect("stored");
    assert_eq!(found.title, "Generative AI");
    assert_eq!(found.order_index, 2);
    assert_eq!(found.created_at, found.updated_at);
    Ok(())
}

#[tokio::test]
async fn test_case_study_nullable_columns() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now().into();

    let created = case_study::ActiveModel {
        id: NotSet,
        main_title: Set("Retail".into()),
        primary_subtitle: Set("Chatbots".into()),
        primary_description: Set("Faster answers".into()),
        secondary_subtitle: Set(None),
        secondary_description: Set(Some("Results".into())),
        order_index: Set(0),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&db)
    .await?;

    let found = case_study::Entity::find_by_id(created.id).one(&db).await?.expect("stored");
    assert_eq!(found.secondary_subtitle, None);
    assert_eq!(found.secondary_description.as_deref(), Some("Results"));
    Ok(())
}

#[tokio::test]
async fn test_ids_are_assigned_in_insert_order() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let now = Utc::now().into();

    let mut ids = vec![];
    for name in ["Ada", "Grace", "Linus"] {
        let m = leadership_profile::ActiveModel {
            id: NotSet,
            name: Set(name.into()),
            title: Set("Engineer".into()),
            order_index: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&db)
        .await?;
        ids.push(m.id);
    }
    assert!(ids.windows(2).all(|w| w[0] < w[1]));

    let names: Vec<String> = leadership_profile::Entity::find()
        .order_by_asc(leadership_profile::Column::Id)
        .all(&db)
        .await?
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, ["Ada", "Grace", "Linus"]);
    Ok(())
}

#[tokio::test]
async fn test_contact_submission_serializes_flat() -> anyhow::Result<()> {
    let db = setup_test_db().await?;
    let created = contact_submission::ActiveModel {
        id: NotSet,
        first_name: Set("John".into()),
        last_name: Set("Doe".into()),
        email: Set("john.doe@example.com".into()),
        phone: Set("555-0123".into()),
        message: Set("I need help with my project".into()),
        created_at: Set(Utc::now().into()),
    }
    .insert(&db)
    .await?;

    let json = serde_json::to_value(&created)?;
    assert_eq!(json["email"], "john.doe@example.com");
    assert!(json.get("updated_at").is_none());
    assert!(json["created_at"].is_string());
    Ok(())
}
