use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{NoteResponse, NotebookResponse, QuillService, Result, TemplateResponse};
use quill_storage::dashboard;

const SECTION_LIMIT: i64 = 5;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PopularTagResponse {
	pub id: Uuid,
	pub name: String,
	pub note_count: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
	pub recent_notes: Vec<NoteResponse>,
	pub popular_tags: Vec<PopularTagResponse>,
	pub favorite_notes: Vec<NoteResponse>,
	pub recent_templates: Vec<TemplateResponse>,
	pub favorite_notebooks: Vec<NotebookResponse>,
}

impl QuillService {
	/// Read-only fan-out over five owner-scoped projections. The first
	/// failing sub-query fails the whole aggregation; no section is served
	/// from a partially readable store.
	pub async fn dashboard(&self, owner: Uuid) -> Result<DashboardResponse> {
		let recent_notes = dashboard::recent_notes(&self.db.pool, owner, SECTION_LIMIT).await?;
		let recent_templates =
			dashboard::recent_templates(&self.db.pool, owner, SECTION_LIMIT).await?;
		let favorite_notes = dashboard::favorite_notes(&self.db.pool, owner, SECTION_LIMIT).await?;
		let favorite_notebooks =
			dashboard::favorite_notebooks(&self.db.pool, owner, SECTION_LIMIT).await?;
		let popular_tags = dashboard::popular_tags(&self.db.pool, owner, SECTION_LIMIT).await?;

		Ok(DashboardResponse {
			recent_notes: recent_notes.into_iter().map(Into::into).collect(),
			popular_tags: popular_tags
				.into_iter()
				.map(|tag| PopularTagResponse {
					id: tag.id,
					name: tag.name,
					note_count: tag.note_count,
				})
				.collect(),
			favorite_notes: favorite_notes.into_iter().map(Into::into).collect(),
			recent_templates: recent_templates.into_iter().map(Into::into).collect(),
			favorite_notebooks: favorite_notebooks.into_iter().map(Into::into).collect(),
		})
	}
}
