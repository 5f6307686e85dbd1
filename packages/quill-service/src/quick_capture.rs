use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, NoteCreateRequest, NoteResponse, QuillService, Result};
use quill_domain::capture;
use quill_storage::notebooks;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuickNoteRequest {
	pub content: String,
}

impl QuillService {
	/// Files raw captured text into the per-user reserved notebook, creating
	/// that notebook on first use. The get-or-create is a single atomic
	/// upsert, so concurrent first captures land in one notebook.
	pub async fn create_quick_note(
		&self,
		owner: Uuid,
		req: QuickNoteRequest,
	) -> Result<NoteResponse> {
		if req.content.trim().is_empty() {
			return Err(Error::InvalidRequest {
				message: "Quick note content must be non-empty.".to_string(),
			});
		}

		let notebook =
			notebooks::get_or_create(&self.db.pool, owner, capture::QUICK_CAPTURE_NOTEBOOK_NAME)
				.await?;
		let title = capture::derive_title(&req.content);

		tracing::debug!(%owner, notebook_id = %notebook.id, "Quick note captured.");

		self.create_note(owner, notebook.id, NoteCreateRequest { title, content: Some(req.content) })
			.await
	}
}
