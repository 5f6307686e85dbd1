use uuid::Uuid;

use quill_service::{Error, NoteCreateRequest, NotebookCreateRequest, NotebookUpdateRequest};

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn duplicate_names_conflict_per_owner_only() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping duplicate_names_conflict_per_owner_only; set QUILL_PG_DSN to run this test."
		);

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner_a = Uuid::new_v4();
	let owner_b = Uuid::new_v4();

	service
		.create_notebook(owner_a, NotebookCreateRequest { name: "Work".to_string() })
		.await
		.expect("First create failed.");

	let err = service
		.create_notebook(owner_a, NotebookCreateRequest { name: "Work".to_string() })
		.await
		.expect_err("Duplicate name under one owner must conflict.");

	assert!(matches!(err, Error::Conflict { .. }));

	service
		.create_notebook(owner_b, NotebookCreateRequest { name: "Work".to_string() })
		.await
		.expect("The same name under another owner must succeed.");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn rename_recheck_uniqueness() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping rename_recheck_uniqueness; set QUILL_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();

	service
		.create_notebook(owner, NotebookCreateRequest { name: "Work".to_string() })
		.await
		.expect("Create failed.");

	let personal = service
		.create_notebook(owner, NotebookCreateRequest { name: "Personal".to_string() })
		.await
		.expect("Create failed.");
	let err = service
		.update_notebook(
			owner,
			personal.id,
			NotebookUpdateRequest { name: Some("Work".to_string()), is_favorite: None },
		)
		.await
		.expect_err("Renaming onto a taken name must conflict.");

	assert!(matches!(err, Error::Conflict { .. }));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn partial_update_leaves_unset_fields() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping partial_update_leaves_unset_fields; set QUILL_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let notebook = service
		.create_notebook(owner, NotebookCreateRequest { name: "Work".to_string() })
		.await
		.expect("Create failed.");
	let updated = service
		.update_notebook(
			owner,
			notebook.id,
			NotebookUpdateRequest { name: None, is_favorite: Some(true) },
		)
		.await
		.expect("Update failed.");

	assert_eq!(updated.name, "Work");
	assert!(updated.is_favorite);
	assert!(updated.updated_at.is_some());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn delete_takes_contained_notes_along() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping delete_takes_contained_notes_along; set QUILL_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let notebook = service
		.create_notebook(owner, NotebookCreateRequest { name: "Doomed".to_string() })
		.await
		.expect("Create failed.");
	let note = service
		.create_note(
			owner,
			notebook.id,
			NoteCreateRequest { title: "Inside".to_string(), content: None },
		)
		.await
		.expect("Note create failed.");

	service.delete_notebook(owner, notebook.id).await.expect("Delete failed.");

	let err = service
		.get_note(owner, notebook.id, note.id)
		.await
		.expect_err("Cascaded note must be gone.");

	assert!(matches!(err, Error::NotFound { .. }));
	assert!(service.list_all_notes(owner).await.expect("List failed.").is_empty());

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
