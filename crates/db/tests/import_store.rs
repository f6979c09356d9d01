//! Integration tests for the Postgres import store.
//!
//! Each test gets a fresh database from `DATABASE_URL` with the migrations
//! applied.

use sqlx::PgPool;
use taskmind_core::import::{
    import_tasks, CategoryKind, CategorySeed, ImportOptions, ImportStore, ProjectSeed, StoreError,
    TaskDraft,
};
use taskmind_db::import_store::PgImportStore;
use taskmind_db::repositories::{CategoryRepo, NoteRepo, ProjectRepo, TaskRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn project_seed(owner_id: i64, name: &str) -> ProjectSeed {
    ProjectSeed {
        owner_id,
        name: name.to_string(),
        description: String::new(),
        color: "#4A90E2".to_string(),
        icon: "folder".to_string(),
        ai_generated: false,
    }
}

fn category_seed(owner_id: i64, name: &str, kind: CategoryKind) -> CategorySeed {
    CategorySeed {
        owner_id,
        name: name.to_string(),
        color: "#808080".to_string(),
        icon: "tag".to_string(),
        kind,
        ai_generated: false,
    }
}

fn draft(text: &str, project: &str, topic: &str) -> TaskDraft {
    TaskDraft {
        task_text: text.to_string(),
        priority: Some("Low".to_string()),
        estimated_minutes: Some(20),
        suggested_project: Some(project.to_string()),
        suggested_topic: Some(topic.to_string()),
        confidence: None,
    }
}

// ---------------------------------------------------------------------------
// Constraint behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn case_insensitive_duplicate_project_is_duplicate_key(pool: PgPool) {
    let store = PgImportStore::new(&pool);
    store.create_project(&project_seed(1, "Work")).await.unwrap();

    let err = store
        .create_project(&project_seed(1, "WORK"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicateKey(ref c) if c == "uq_projects_owner_lower_name"));

    // Another owner may use the same name.
    store.create_project(&project_seed(2, "work")).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn task_categories_exclude_note_only(pool: PgPool) {
    CategoryRepo::create(&pool, &category_seed(1, "Ideas", CategoryKind::Note))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &category_seed(1, "Code", CategoryKind::Task))
        .await
        .unwrap();
    CategoryRepo::create(&pool, &category_seed(1, "Misc", CategoryKind::Both))
        .await
        .unwrap();

    let for_tasks = CategoryRepo::list_for_tasks(&pool, 1).await.unwrap();
    let names: Vec<_> = for_tasks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Code", "Misc"]);

    let found = CategoryRepo::find_by_name(&pool, 1, "IDEAS").await.unwrap();
    assert_eq!(found.unwrap().kind, "note");
}

// ---------------------------------------------------------------------------
// Full pipeline against Postgres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn import_twice_reuses_created_entities(pool: PgPool) {
    let note = NoteRepo::create(&pool, 5, "Họp nhóm marketing thứ hai")
        .await
        .unwrap();
    let store = PgImportStore::new(&pool);
    let drafts = vec![
        draft("Chuẩn bị slide", "Launch", "Họp nhóm marketing"),
        draft("Gửi biên bản", "launch", "họp nhóm MARKETING"),
    ];
    let options = ImportOptions {
        source_note_id: Some(note.id),
        auto_create: true,
    };

    let first = import_tasks(&store, 5, &drafts, &options).await.unwrap();
    let second = import_tasks(&store, 5, &drafts, &options).await.unwrap();

    assert_eq!(first.summary.projects_created, 1);
    assert_eq!(first.summary.categories_created, 1);
    assert_eq!(second.summary.projects_created, 0);
    assert_eq!(second.summary.categories_created, 0);
    assert_eq!(first.tasks[0].project_id, first.tasks[1].project_id);
    assert_eq!(first.tasks[0].project_id, second.tasks[0].project_id);
    assert_eq!(first.tasks[0].priority, "Thấp");
    assert_eq!(first.tasks[0].source_note_id, Some(note.id));

    let categories = CategoryRepo::list_by_owner(&pool, 5).await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].icon, "users");
    assert_eq!(categories[0].kind, "task");

    assert_eq!(ProjectRepo::list_by_owner(&pool, 5).await.unwrap().len(), 1);
    assert_eq!(TaskRepo::list_by_owner(&pool, 5).await.unwrap().len(), 4);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ai_suggestions_are_owner_scoped(pool: PgPool) {
    let note = NoteRepo::create(&pool, 1, "text").await.unwrap();
    let payload = serde_json::json!({"tasks": []});

    let foreign = NoteRepo::record_ai_suggestions(&pool, 2, note.id, &payload)
        .await
        .unwrap();
    assert!(foreign.is_none());

    let updated = NoteRepo::record_ai_suggestions(&pool, 1, note.id, &payload)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.ai_suggestions, Some(payload));
    assert!(updated.analyzed_at.is_some());
}
