use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, QuillService, Result};
use quill_storage::{models::Tag, tags};

const NAME_MAX_CHARS: usize = 20;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TagCreateRequest {
	pub name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TagUpdateRequest {
	pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TagResponse {
	pub id: Uuid,
	pub name: String,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde::option")]
	pub updated_at: Option<OffsetDateTime>,
}
impl From<Tag> for TagResponse {
	fn from(tag: Tag) -> Self {
		Self { id: tag.id, name: tag.name, created_at: tag.created_at, updated_at: tag.updated_at }
	}
}

impl QuillService {
	pub async fn create_tag(&self, owner: Uuid, req: TagCreateRequest) -> Result<TagResponse> {
		let tag = Tag {
			id: Uuid::new_v4(),
			user_id: owner,
			name: valid_name(&req.name)?,
			created_at: OffsetDateTime::now_utc(),
			updated_at: None,
		};

		tags::insert(&self.db.pool, &tag).await?;

		Ok(tag.into())
	}

	pub async fn get_tag(&self, owner: Uuid, tag_id: Uuid) -> Result<TagResponse> {
		Ok(self.require_tag(owner, tag_id).await?.into())
	}

	pub async fn list_tags(&self, owner: Uuid) -> Result<Vec<TagResponse>> {
		let rows = tags::list(&self.db.pool, owner).await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	pub async fn update_tag(
		&self,
		owner: Uuid,
		tag_id: Uuid,
		req: TagUpdateRequest,
	) -> Result<TagResponse> {
		let mut tag = self.require_tag(owner, tag_id).await?;

		if let Some(name) = req.name {
			tag.name = valid_name(&name)?;
		}

		tag.updated_at = Some(OffsetDateTime::now_utc());

		tags::update(&self.db.pool, &tag).await?;

		Ok(tag.into())
	}

	pub async fn delete_tag(&self, owner: Uuid, tag_id: Uuid) -> Result<()> {
		let tag = self.require_tag(owner, tag_id).await?;

		tags::delete(&self.db.pool, owner, tag.id).await?;

		Ok(())
	}

	pub(crate) async fn require_tag(&self, owner: Uuid, tag_id: Uuid) -> Result<Tag> {
		tags::fetch(&self.db.pool, owner, tag_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: "Tag not found.".to_string() })
	}
}

fn valid_name(raw: &str) -> Result<String> {
	let name = raw.trim();

	if name.is_empty() || name.chars().count() > NAME_MAX_CHARS {
		return Err(Error::InvalidRequest {
			message: format!("Tag name must be 1-{NAME_MAX_CHARS} characters."),
		});
	}

	Ok(name.to_string())
}
