use uuid::Uuid;

use quill_domain::capture::QUICK_CAPTURE_NOTEBOOK_NAME;
use quill_service::QuickNoteRequest;

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn long_content_is_truncated_into_the_title() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping long_content_is_truncated_into_the_title; set QUILL_PG_DSN to run this test."
		);

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let content = "An idea that rambles on far past the point of a usable title".to_string();
	let note = service
		.create_quick_note(owner, QuickNoteRequest { content: content.clone() })
		.await
		.expect("Quick note failed.");

	assert_eq!(note.title, format!("{}...", &content[..30]));
	assert_eq!(note.content.as_deref(), Some(content.as_str()));

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn short_content_becomes_the_title_verbatim() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping short_content_becomes_the_title_verbatim; set QUILL_PG_DSN to run this test."
		);

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let note = service
		.create_quick_note(owner, QuickNoteRequest { content: "Call the plumber".to_string() })
		.await
		.expect("Quick note failed.");

	assert_eq!(note.title, "Call the plumber");

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}

#[tokio::test]
#[ignore = "Requires external Postgres. Set QUILL_PG_DSN to run."]
async fn repeated_captures_share_one_reserved_notebook() {
	let Some(test_db) = super::test_db().await else {
		eprintln!(
			"Skipping repeated_captures_share_one_reserved_notebook; set QUILL_PG_DSN to run this test."
		);

		return;
	};
	let service = super::build_service(test_db.dsn()).await;
	let owner = Uuid::new_v4();
	let first = service
		.create_quick_note(owner, QuickNoteRequest { content: "first".to_string() })
		.await
		.expect("First capture failed.");
	let second = service
		.create_quick_note(owner, QuickNoteRequest { content: "second".to_string() })
		.await
		.expect("Second capture failed.");

	assert_eq!(first.notebook_id, second.notebook_id);

	let notebooks = service.list_notebooks(owner).await.expect("List failed.");
	let reserved: Vec<_> =
		notebooks.iter().filter(|nb| nb.name == QUICK_CAPTURE_NOTEBOOK_NAME).collect();

	assert_eq!(reserved.len(), 1, "Exactly one reserved notebook must exist.");
	assert_eq!(reserved[0].id, first.notebook_id);

	test_db.cleanup().await.expect("Failed to cleanup test database.");
}
