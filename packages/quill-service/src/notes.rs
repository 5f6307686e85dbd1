use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, QuillService, Result};
use quill_storage::{models::Note, notes};

const TITLE_MAX_CHARS: usize = 200;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteCreateRequest {
	pub title: String,
	pub content: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NoteUpdateRequest {
	pub title: Option<String>,
	#[serde(default, deserialize_with = "crate::patch::deserialize")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<Option<String>>,
	pub notebook_id: Option<Uuid>,
	pub is_favorite: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteResponse {
	pub id: Uuid,
	pub notebook_id: Uuid,
	pub title: String,
	pub content: Option<String>,
	pub is_favorite: bool,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde::option")]
	pub updated_at: Option<OffsetDateTime>,
}
impl From<Note> for NoteResponse {
	fn from(note: Note) -> Self {
		Self {
			id: note.id,
			notebook_id: note.notebook_id,
			title: note.title,
			content: note.content,
			is_favorite: note.is_favorite,
			created_at: note.created_at,
			updated_at: note.updated_at,
		}
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NoteTagResponse {
	pub note_title: String,
	pub tag_name: String,
}

impl QuillService {
	pub async fn create_note(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		req: NoteCreateRequest,
	) -> Result<NoteResponse> {
		let notebook = self.require_notebook(owner, notebook_id).await?;
		let note = Note {
			id: Uuid::new_v4(),
			user_id: owner,
			notebook_id: notebook.id,
			title: valid_title(&req.title)?,
			content: req.content,
			is_favorite: false,
			created_at: OffsetDateTime::now_utc(),
			updated_at: None,
		};

		notes::insert(&self.db.pool, &note).await?;

		Ok(note.into())
	}

	pub async fn get_note(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		note_id: Uuid,
	) -> Result<NoteResponse> {
		Ok(self.require_note(owner, notebook_id, note_id).await?.into())
	}

	pub async fn list_notes(&self, owner: Uuid, notebook_id: Uuid) -> Result<Vec<NoteResponse>> {
		let notebook = self.require_notebook(owner, notebook_id).await?;
		let rows = notes::list(&self.db.pool, owner, notebook.id).await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	pub async fn list_all_notes(&self, owner: Uuid) -> Result<Vec<NoteResponse>> {
		let rows = notes::list_all(&self.db.pool, owner).await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	pub async fn update_note(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		note_id: Uuid,
		req: NoteUpdateRequest,
	) -> Result<NoteResponse> {
		// A move revalidates the destination notebook before the note itself
		// is touched, so a foreign destination fails with nothing written.
		if let Some(target) = req.notebook_id {
			self.require_notebook(owner, target).await?;
		}

		let mut note = self.require_note(owner, notebook_id, note_id).await?;

		if let Some(title) = req.title {
			note.title = valid_title(&title)?;
		}
		if let Some(content) = req.content {
			note.content = content;
		}
		if let Some(target) = req.notebook_id {
			note.notebook_id = target;
		}
		if let Some(is_favorite) = req.is_favorite {
			note.is_favorite = is_favorite;
		}

		note.updated_at = Some(OffsetDateTime::now_utc());

		notes::update(&self.db.pool, &note).await?;

		Ok(note.into())
	}

	pub async fn delete_note(&self, owner: Uuid, notebook_id: Uuid, note_id: Uuid) -> Result<()> {
		let note = self.require_note(owner, notebook_id, note_id).await?;

		notes::delete(&self.db.pool, owner, note.notebook_id, note.id).await?;

		Ok(())
	}

	pub async fn add_tag_to_note(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		note_id: Uuid,
		tag_id: Uuid,
	) -> Result<NoteTagResponse> {
		let note = self.require_note(owner, notebook_id, note_id).await?;
		let tag = self.require_tag(owner, tag_id).await?;

		notes::attach_tag(&self.db.pool, note.id, tag.id).await?;

		Ok(NoteTagResponse { note_title: note.title, tag_name: tag.name })
	}

	pub async fn remove_tag_from_note(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		note_id: Uuid,
		tag_id: Uuid,
	) -> Result<()> {
		let note = self.require_note(owner, notebook_id, note_id).await?;
		let tag = self.require_tag(owner, tag_id).await?;

		notes::detach_tag(&self.db.pool, note.id, tag.id).await?;

		Ok(())
	}

	pub(crate) async fn require_note(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		note_id: Uuid,
	) -> Result<Note> {
		notes::fetch(&self.db.pool, owner, notebook_id, note_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: "Note not found.".to_string() })
	}
}

fn valid_title(raw: &str) -> Result<String> {
	let title = raw.trim();

	if title.is_empty() || title.chars().count() > TITLE_MAX_CHARS {
		return Err(Error::InvalidRequest {
			message: format!("Note title must be 1-{TITLE_MAX_CHARS} characters."),
		});
	}

	Ok(title.to_string())
}
