use migration::{Migrator, MigratorTrait};
use sea_orm_migration::sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

async fn memory_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // one connection, otherwise every pooled connection sees its own empty database
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opt).await.expect("connect sqlite")
}

async fn table_names(db: &DatabaseConnection) -> Vec<String> {
    let rows = db
        .query_all(Statement::from_string(
            db.get_database_backend(),
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name".to_owned(),
        ))
        .await
        .expect("list tables");
    rows.iter()
        .map(|r| r.try_get::<String>("", "name").expect("name column"))
        .collect()
}

#[tokio::test]
async fn up_creates_every_table() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.expect("migrate up");

    let tables = table_names(&db).await;
    for t in [
        "offerings",
        "solutions",
        "services",
        "insights",
        "case_studies",
        "leadership_profiles",
        "contact_submissions",
    ] {
        assert!(tables.iter().any(|n| n == t), "missing table {t}: {tables:?}");
    }
}

#[tokio::test]
async fn down_then_up_is_repeatable() {
    let db = memory_db().await;
    Migrator::up(&db, None).await.expect("first up");
    Migrator::down(&db, None).await.expect("down");

    let tables = table_names(&db).await;
    assert!(!tables.iter().any(|n| n == "offerings"));

    Migrator::up(&db, None).await.expect("second up");
    assert!(table_names(&db).await.iter().any(|n| n == "contact_submissions"));
}
