use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Error, Result, models::Tag};

const NAME_TAKEN: &str = "A tag with this name already exists.";

pub async fn insert<'e, E>(executor: E, tag: &Tag) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
INSERT INTO tags (id, user_id, name, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5)",
	)
	.bind(tag.id)
	.bind(tag.user_id)
	.bind(tag.name.as_str())
	.bind(tag.created_at)
	.bind(tag.updated_at)
	.execute(executor)
	.await
	.map_err(|err| Error::or_conflict(err, NAME_TAKEN))?;

	Ok(())
}

pub async fn fetch<'e, E>(executor: E, user_id: Uuid, tag_id: Uuid) -> Result<Option<Tag>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Tag>(
		"\
SELECT id, user_id, name, created_at, updated_at
FROM tags
WHERE user_id = $1 AND id = $2
LIMIT 1",
	)
	.bind(user_id)
	.bind(tag_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

pub async fn list<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Tag>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Tag>(
		"\
SELECT id, user_id, name, created_at, updated_at
FROM tags
WHERE user_id = $1
ORDER BY created_at",
	)
	.bind(user_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn update<'e, E>(executor: E, tag: &Tag) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
UPDATE tags
SET name = $1, updated_at = $2
WHERE user_id = $3 AND id = $4",
	)
	.bind(tag.name.as_str())
	.bind(tag.updated_at)
	.bind(tag.user_id)
	.bind(tag.id)
	.execute(executor)
	.await
	.map_err(|err| Error::or_conflict(err, NAME_TAKEN))?;

	Ok(())
}

pub async fn delete<'e, E>(executor: E, user_id: Uuid, tag_id: Uuid) -> Result<u64>
where
	E: PgExecutor<'e>,
{
	let result = sqlx::query("DELETE FROM tags WHERE user_id = $1 AND id = $2")
		.bind(user_id)
		.bind(tag_id)
		.execute(executor)
		.await?;

	Ok(result.rows_affected())
}
