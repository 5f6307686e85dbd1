use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Error, Result, models::Template};

const NAME_TAKEN: &str = "A template with this name already exists.";

pub async fn insert<'e, E>(executor: E, template: &Template) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
INSERT INTO templates (id, user_id, name, content, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6)",
	)
	.bind(template.id)
	.bind(template.user_id)
	.bind(template.name.as_str())
	.bind(template.content.as_deref())
	.bind(template.created_at)
	.bind(template.updated_at)
	.execute(executor)
	.await
	.map_err(|err| Error::or_conflict(err, NAME_TAKEN))?;

	Ok(())
}

pub async fn fetch<'e, E>(executor: E, user_id: Uuid, template_id: Uuid) -> Result<Option<Template>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Template>(
		"\
SELECT id, user_id, name, content, created_at, updated_at
FROM templates
WHERE user_id = $1 AND id = $2
LIMIT 1",
	)
	.bind(user_id)
	.bind(template_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

pub async fn list<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Template>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Template>(
		"\
SELECT id, user_id, name, content, created_at, updated_at
FROM templates
WHERE user_id = $1
ORDER BY created_at",
	)
	.bind(user_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn update<'e, E>(executor: E, template: &Template) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
UPDATE templates
SET name = $1, content = $2, updated_at = $3
WHERE user_id = $4 AND id = $5",
	)
	.bind(template.name.as_str())
	.bind(template.content.as_deref())
	.bind(template.updated_at)
	.bind(template.user_id)
	.bind(template.id)
	.execute(executor)
	.await
	.map_err(|err| Error::or_conflict(err, NAME_TAKEN))?;

	Ok(())
}

pub async fn delete<'e, E>(executor: E, user_id: Uuid, template_id: Uuid) -> Result<u64>
where
	E: PgExecutor<'e>,
{
	let result = sqlx::query("DELETE FROM templates WHERE user_id = $1 AND id = $2")
		.bind(user_id)
		.bind(template_id)
		.execute(executor)
		.await?;

	Ok(result.rows_affected())
}
