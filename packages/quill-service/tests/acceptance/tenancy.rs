use uuid::Uuid;

use quill_service::{
	Error, NoteCreateRequest, NotebookCreateRequest, NotebookUpdateRequest, TagCreateRequest,
	TemplateCreateRequest,
};

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn foreign_rows_behave_as_absent() {
	let Some(test_db) = super::test_db().await else {
		eprintln!("Skipping foreign_rows_behave_as_absent; set QUILL_PG_DSN to run this test.");

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let intruder = Uuid::new_v4();

	let notebook = service
		.create_notebook(owner, NotebookCreateRequest { name: "Private".to_string() })
		.await
		.expect("Notebook create failed.");
	let note = service
		.create_note(
			owner,
			notebook.id,
			NoteCreateRequest { title: "Secret".to_string(), content: None },
		)
		.await
		.expect("Note create failed.");
	let tag = service
		.create_tag(owner, TagCreateRequest { name: "mine".to_string() })
		.await
		.expect("Tag create failed.");
	let template = service
		.create_template(owner, TemplateCreateRequest { name: "Mine".to_string(), content: None })
		.await
		.expect("Template create failed.");

	let err = service
		.get_notebook(intruder, notebook.id)
		.await
		.expect_err("Foreign notebook must not resolve.");

	assert!(matches!(err, Error::NotFound { .. }));

	let err = service
		.get_note(intruder, notebook.id, note.id)
		.await
		.expect_err("Foreign note must not resolve.");

	assert!(matches!(err, Error::NotFound { .. }));

	let err = service.get_tag(intruder, tag.id).await.expect_err("Foreign tag must not resolve.");

	assert!(matches!(err, Error::NotFound { .. }));

	let err = service
		.get_template(intruder, template.id)
		.await
		.expect_err("Foreign template must not resolve.");

	assert!(matches!(err, Error::NotFound { .. }));

	let err = service
		.update_notebook(
			intruder,
			notebook.id,
			NotebookUpdateRequest { name: Some("Hijacked".to_string()), is_favorite: None },
		)
		.await
		.expect_err("Foreign update must not resolve.");

	assert!(matches!(err, Error::NotFound { .. }));

	let err = service
		.delete_notebook(intruder, notebook.id)
		.await
		.expect_err("Foreign delete must not resolve.");

	assert!(matches!(err, Error::NotFound { .. }));

	// Nothing above leaked into the intruder's listings, and the owner's
	// rows survived the attempted mutations untouched.
	assert!(service.list_notebooks(intruder).await.expect("List failed.").is_empty());
	assert!(service.list_tags(intruder).await.expect("List failed.").is_empty());
	assert!(service.list_templates(intruder).await.expect("List failed.").is_empty());

	let survivor = service.get_notebook(owner, notebook.id).await.expect("Owner get failed.");

	assert_eq!(survivor.name, "Private");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
