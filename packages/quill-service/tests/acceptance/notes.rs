use uuid::Uuid;

use quill_service::{
	Error, NoteCreateRequest, NoteUpdateRequest, NotebookCreateRequest, TagCreateRequest,
};

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn lookup_requires_matching_notebook() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping lookup_requires_matching_notebook; set QUILL_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let home = service
		.create_notebook(owner, NotebookCreateRequest { name: "Home".to_string() })
		.await
		.expect("Create failed.");
	let other = service
		.create_notebook(owner, NotebookCreateRequest { name: "Other".to_string() })
		.await
		.expect("Create failed.");
	let note = service
		.create_note(owner, home.id, NoteCreateRequest { title: "Draft".to_string(), content: None })
		.await
		.expect("Note create failed.");

	// Correct id under the wrong (but owned and existing) notebook.
	let err = service
		.get_note(owner, other.id, note.id)
		.await
		.expect_err("A mismatched notebook id must not resolve.");

	assert!(matches!(err, Error::NotFound { .. }));

	service.get_note(owner, home.id, note.id).await.expect("Matching lookup failed.");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn move_to_foreign_notebook_is_rejected() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping move_to_foreign_notebook_is_rejected; set QUILL_PG_DSN to run this test."
		);

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let intruder_target = {
		let other_user = Uuid::new_v4();

		service
			.create_notebook(other_user, NotebookCreateRequest { name: "Theirs".to_string() })
			.await
			.expect("Create failed.")
	};
	let notebook = service
		.create_notebook(owner, NotebookCreateRequest { name: "Mine".to_string() })
		.await
		.expect("Create failed.");
	let note = service
		.create_note(
			owner,
			notebook.id,
			NoteCreateRequest { title: "Anchored".to_string(), content: None },
		)
		.await
		.expect("Note create failed.");

	let err = service
		.update_note(
			owner,
			notebook.id,
			note.id,
			NoteUpdateRequest { notebook_id: Some(intruder_target.id), ..Default::default() },
		)
		.await
		.expect_err("Moving into a foreign notebook must fail.");

	assert!(matches!(err, Error::NotFound { .. }));

	// The note stayed where it was.
	let unchanged = service.get_note(owner, notebook.id, note.id).await.expect("Get failed.");

	assert_eq!(unchanged.notebook_id, notebook.id);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn move_between_own_notebooks_updates_the_anchor() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping move_between_own_notebooks_updates_the_anchor; set QUILL_PG_DSN to run this test."
		);

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let source = service
		.create_notebook(owner, NotebookCreateRequest { name: "Source".to_string() })
		.await
		.expect("Create failed.");
	let target = service
		.create_notebook(owner, NotebookCreateRequest { name: "Target".to_string() })
		.await
		.expect("Create failed.");
	let note = service
		.create_note(
			owner,
			source.id,
			NoteCreateRequest { title: "Wandering".to_string(), content: None },
		)
		.await
		.expect("Note create failed.");
	let moved = service
		.update_note(
			owner,
			source.id,
			note.id,
			NoteUpdateRequest { notebook_id: Some(target.id), ..Default::default() },
		)
		.await
		.expect("Move failed.");

	assert_eq!(moved.notebook_id, target.id);

	// Old triple no longer matches; new one does.
	let err = service.get_note(owner, source.id, note.id).await.expect_err("Old anchor resolved.");

	assert!(matches!(err, Error::NotFound { .. }));

	service.get_note(owner, target.id, note.id).await.expect("New anchor lookup failed.");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn partial_update_distinguishes_absent_from_null() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping partial_update_distinguishes_absent_from_null; set QUILL_PG_DSN to run this test."
		);

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let notebook = service
		.create_notebook(owner, NotebookCreateRequest { name: "Patchwork".to_string() })
		.await
		.expect("Create failed.");
	let note = service
		.create_note(
			owner,
			notebook.id,
			NoteCreateRequest {
				title: "Patchable".to_string(),
				content: Some("original body".to_string()),
			},
		)
		.await
		.expect("Note create failed.");

	// An absent content field leaves the column untouched.
	let patch: NoteUpdateRequest =
		serde_json::from_value(serde_json::json!({ "is_favorite": true }))
			.expect("Patch must deserialize.");
	let updated = service
		.update_note(owner, notebook.id, note.id, patch)
		.await
		.expect("Favorite update failed.");

	assert!(updated.is_favorite);
	assert_eq!(updated.content.as_deref(), Some("original body"));

	// An explicit null clears it.
	let patch: NoteUpdateRequest = serde_json::from_value(serde_json::json!({ "content": null }))
		.expect("Patch must deserialize.");
	let cleared =
		service.update_note(owner, notebook.id, note.id, patch).await.expect("Clear failed.");

	assert_eq!(cleared.content, None);
	assert_eq!(cleared.title, "Patchable");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn tag_attachment_is_idempotent() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping tag_attachment_is_idempotent; set QUILL_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let notebook = service
		.create_notebook(owner, NotebookCreateRequest { name: "Tagged".to_string() })
		.await
		.expect("Create failed.");
	let note = service
		.create_note(
			owner,
			notebook.id,
			NoteCreateRequest { title: "Labelled".to_string(), content: None },
		)
		.await
		.expect("Note create failed.");
	let tag = service
		.create_tag(owner, TagCreateRequest { name: "urgent".to_string() })
		.await
		.expect("Tag create failed.");

	service
		.add_tag_to_note(owner, notebook.id, note.id, tag.id)
		.await
		.expect("First attach failed.");
	service
		.add_tag_to_note(owner, notebook.id, note.id, tag.id)
		.await
		.expect("Second attach must be a no-op.");

	let associations = quill_storage::notes::count_tags(&service.db.pool, note.id)
		.await
		.expect("Count failed.");

	assert_eq!(associations, 1, "Exactly one association row must exist.");

	// Removing twice is just as quiet.
	service
		.remove_tag_from_note(owner, notebook.id, note.id, tag.id)
		.await
		.expect("First detach failed.");
	service
		.remove_tag_from_note(owner, notebook.id, note.id, tag.id)
		.await
		.expect("Second detach must be a no-op.");

	let associations = quill_storage::notes::count_tags(&service.db.pool, note.id)
		.await
		.expect("Count failed.");

	assert_eq!(associations, 0);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
