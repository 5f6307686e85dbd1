use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, QuillService, Result};
use quill_storage::{models::Template, templates};

const NAME_MAX_CHARS: usize = 200;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateCreateRequest {
	pub name: String,
	pub content: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TemplateUpdateRequest {
	pub name: Option<String>,
	#[serde(default, deserialize_with = "crate::patch::deserialize")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub content: Option<Option<String>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TemplateResponse {
	pub id: Uuid,
	pub name: String,
	pub content: Option<String>,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	#[serde(with = "crate::time_serde::option")]
	pub updated_at: Option<OffsetDateTime>,
}
impl From<Template> for TemplateResponse {
	fn from(template: Template) -> Self {
		Self {
			id: template.id,
			name: template.name,
			content: template.content,
			created_at: template.created_at,
			updated_at: template.updated_at,
		}
	}
}

impl QuillService {
	pub async fn create_template(
		&self,
		owner: Uuid,
		req: TemplateCreateRequest,
	) -> Result<TemplateResponse> {
		let template = Template {
			id: Uuid::new_v4(),
			user_id: owner,
			name: valid_name(&req.name)?,
			content: req.content,
			created_at: OffsetDateTime::now_utc(),
			updated_at: None,
		};

		templates::insert(&self.db.pool, &template).await?;

		Ok(template.into())
	}

	pub async fn get_template(&self, owner: Uuid, template_id: Uuid) -> Result<TemplateResponse> {
		Ok(self.require_template(owner, template_id).await?.into())
	}

	pub async fn list_templates(&self, owner: Uuid) -> Result<Vec<TemplateResponse>> {
		let rows = templates::list(&self.db.pool, owner).await?;

		Ok(rows.into_iter().map(Into::into).collect())
	}

	pub async fn update_template(
		&self,
		owner: Uuid,
		template_id: Uuid,
		req: TemplateUpdateRequest,
	) -> Result<TemplateResponse> {
		let mut template = self.require_template(owner, template_id).await?;

		if let Some(name) = req.name {
			template.name = valid_name(&name)?;
		}
		if let Some(content) = req.content {
			template.content = content;
		}

		template.updated_at = Some(OffsetDateTime::now_utc());

		templates::update(&self.db.pool, &template).await?;

		Ok(template.into())
	}

	pub async fn delete_template(&self, owner: Uuid, template_id: Uuid) -> Result<()> {
		let template = self.require_template(owner, template_id).await?;

		templates::delete(&self.db.pool, owner, template.id).await?;

		Ok(())
	}

	pub(crate) async fn require_template(&self, owner: Uuid, template_id: Uuid) -> Result<Template> {
		templates::fetch(&self.db.pool, owner, template_id)
			.await?
			.ok_or_else(|| Error::NotFound { message: "Template not found.".to_string() })
	}
}

fn valid_name(raw: &str) -> Result<String> {
	let name = raw.trim();

	if name.is_empty() || name.chars().count() > NAME_MAX_CHARS {
		return Err(Error::InvalidRequest {
			message: format!("Template name must be 1-{NAME_MAX_CHARS} characters."),
		});
	}

	Ok(name.to_string())
}
