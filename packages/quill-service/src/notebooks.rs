use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, QuillService, Result};
use quill_storage::{models::Notebook, notebooks};

const NAME_MAX_CHARS: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotebookCreateRequest {
	pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NotebookUpdateRequest {
	pub name: Option<String>,
	pub is_favorite: Option<bool>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotebookResponse {
	pub id: Uuid,
	pub name: String,
	pub is_favorite: bool,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde::option")]
	pub updated_at: Option<OffsetDateTime>,
}
impl From<Notebook> for NotebookResponse {
	fn from(notebook: Notebook) -> Self {
		Self {
			id: notebook.id,
			name: notebook.name,
			is_favorite: notebook.is_favorite,
			created_at: notebook.created_at,
			updated_at: notebook.updated_at,
		}
	}
}

impl QuillService {
	pub async fn create_notebook(
		&self,
		owner: Uuid,
		req: NotebookCreateRequest,
	) -> Result<NotebookResponse> {
		let notebook = Notebook {
			id: Uuid::new_v4(),
			user_id: owner,
			name: valid_name(&req.name)?,
			is_favorite: false,
			created_at: OffsetDateTime::now_utc(),
			updated_at: None,
		};

		notebooks::insert(&self.db.pool, &notebook).await?;

		Ok(notebook.into())
	}

	pub async fn get_notebook(&self, owner: Uuid, notebook_id: Uuid) -> Result<NotebookResponse> {
		Ok(self.require_notebook(owner, notebook_id).await?.into())
	}

	pub async fn list_notebooks(&self, owner: Uuid) -> Result<Vec<NotebookResponse>> {
		let rows = notebooks::list(&self.db.pool, owner).await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	pub async fn update_notebook(
		&self,
		owner: Uuid,
		notebook_id: Uuid,
		req: NotebookUpdateRequest,
	) -> Result<NotebookResponse> {
		let mut notebook = self.require_notebook(owner, notebook_id).await?;

		if let Some(name) = req.name {
			notebook.name = valid_name(&name)?;
		}
		if let Some(is_favorite) = req.is_favorite {
			notebook.is_favorite = is_favorite;
		}

		notebook.updated_at = Some(OffsetDateTime::now_utc());

		notebooks::update(&self.db.pool, &notebook).await?;

		Ok(notebook.into())
	}

	pub async fn delete_notebook(&self, owner: Uuid, notebook_id: Uuid) -> Result<()> {
		let notebook = self.require_notebook(owner, notebook_id).await?;

		notebooks::delete(&self.db.pool, owner, notebook.id).await?;

		Ok(())
	}

	pub(crate) async fn require_notebook(&self, owner: Uuid, notebook_id: Uuid) -> Result<Notebook> {
		notebooks::fetch(&self.db.pool, owner, notebook_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: "Notebook not found.".to_string() })
	}
}

fn valid_name(raw: &str) -> Result<String> {
	let name = raw.trim();

	if name.is_empty() || name.chars().count() > NAME_MAX_CHARS {
		return Err(Error::InvalidRequest {
			message: format!("Notebook name must be 1-{NAME_MAX_CHARS} characters."),
		});
	}

	Ok(name.to_string())
}
