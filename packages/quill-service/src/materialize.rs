use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
	NoteCreateRequest, NoteResponse, QuillService, Result, TemplateCreateRequest, TemplateResponse,
};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateFromNoteRequest {
	pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteFromTemplateRequest {
	pub title: String,
}

/// Conversions copy content once; no link persists between the origin and
/// the derived entity.
impl QuillService {
	pub async fn create_template_from_note(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		note_id: Uuid,
		req: TemplateFromNoteRequest,
	) -> Result<TemplateResponse> {
		let note = self.require_note(owner, notebook_id, note_id).await?;

		self.create_template(owner, TemplateCreateRequest { name: req.name, content: note.content })
			.await
	}

	pub async fn create_note_from_template(
		&self,
		owner: Uuid,
		template_id: Uuid,
		notebook_id: Uuid,
		req: NoteFromTemplateRequest,
	) -> Result<NoteResponse> {
		let template = self.require_template(owner, template_id).await?;

		self.create_note(
			owner,
			notebook_id,
			NoteCreateRequest { title: req.title, content: template.content },
		)
		.await
	}
}
