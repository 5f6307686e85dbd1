use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Result, models::Note};

pub async fn insert<'e, E>(executor: E, note: &Note) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
INSERT INTO notes (id, user_id, notebook_id, title, content, is_favorite, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
	)
	.bind(note.id)
	.bind(note.user_id)
	.bind(note.notebook_id)
	.bind(note.title.as_str())
	.bind(note.content.as_deref())
	.bind(note.is_favorite)
	.bind(note.created_at)
	.bind(note.updated_at)
	.execute(executor)
	.await?;

	Ok(())
}

/// Lookup matches id, notebook, and owner together; a wrong notebook id for
/// an otherwise-valid note id yields no row.
pub async fn fetch<'e, E>(
	executor: E,
	user_id: Uuid,
	notebook_id: Uuid,
	note_id: Uuid,
) -> Result<Option<Note>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Note>(
		"\
SELECT id, user_id, notebook_id, title, content, is_favorite, created_at, updated_at
FROM notes
WHERE user_id = $1 AND notebook_id = $2 AND id = $3
LIMIT 1",
	)
	.bind(user_id)
	.bind(notebook_id)
	.bind(note_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

pub async fn list<'e, E>(executor: E, user_id: Uuid, notebook_id: Uuid) -> Result<Vec<Note>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Note>(
		"\
SELECT id, user_id, notebook_id, title, content, is_favorite, created_at, updated_at
FROM notes
WHERE user_id = $1 AND notebook_id = $2
ORDER BY created_at",
	)
	.bind(user_id)
	.bind(notebook_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn list_all<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Note>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Note>(
		"\
SELECT id, user_id, notebook_id, title, content, is_favorite, created_at, updated_at
FROM notes
WHERE user_id = $1
ORDER BY updated_at DESC NULLS LAST",
	)
	.bind(user_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn update<'e, E>(executor: E, note: &Note) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
UPDATE notes
SET notebook_id = $1, title = $2, content = $3, is_favorite = $4, updated_at = $5
WHERE user_id = $6 AND id = $7",
	)
	.bind(note.notebook_id)
	.bind(note.title.as_str())
	.bind(note.content.as_deref())
	.bind(note.is_favorite)
	.bind(note.updated_at)
	.bind(note.user_id)
	.bind(note.id)
	.execute(executor)
	.await?;

	Ok(())
}

pub async fn delete<'e, E>(
	executor: E,
	user_id: Uuid,
	notebook_id: Uuid,
	note_id: Uuid,
) -> Result<u64>
where
	E: PgExecutor<'e>,
{
	let result =
		sqlx::query("DELETE FROM notes WHERE user_id = $1 AND notebook_id = $2 AND id = $3")
			.bind(user_id)
			.bind(notebook_id)
			.bind(note_id)
			.execute(executor)
			.await?;

	Ok(result.rows_affected())
}

/// Idempotent: attaching a tag that is already attached is a no-op.
pub async fn attach_tag<'e, E>(executor: E, note_id: Uuid, tag_id: Uuid) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
INSERT INTO note_tags (note_id, tag_id)
VALUES ($1, $2)
ON CONFLICT (note_id, tag_id) DO NOTHING",
	)
	.bind(note_id)
	.bind(tag_id)
	.execute(executor)
	.await?;

	Ok(())
}

/// Idempotent: detaching a tag that is not attached is a no-op.
pub async fn detach_tag<'e, E>(executor: E, note_id: Uuid, tag_id: Uuid) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query("DELETE FROM note_tags WHERE note_id = $1 AND tag_id = $2")
		.bind(note_id)
		.bind(tag_id)
		.execute(executor)
		.await?;

	Ok(())
}

pub async fn count_tags<'e, E>(executor: E, note_id: Uuid) -> Result<i64>
where
	E: PgExecutor<'e>,
{
	let count: i64 = sqlx::query_scalar("SELECT count(*) FROM note_tags WHERE note_id = $1")
		.bind(note_id)
		.fetch_one(executor)
		.await?;

	Ok(count)
}
