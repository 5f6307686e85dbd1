use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{
	Result,
	models::{Note, Notebook, TagNoteCount, Template},
};

pub async fn recent_notes<'e, E>(executor: E, user_id: Uuid, limit: i64) -> Result<Vec<Note>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Note>(
		"\
SELECT id, user_id, notebook_id, title, content, is_favorite, created_at, updated_at
FROM notes
WHERE user_id = $1
ORDER BY updated_at DESC NULLS LAST
LIMIT $2",
	)
	.bind(user_id)
	.bind(limit)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn favorite_notes<'e, E>(executor: E, user_id: Uuid, limit: i64) -> Result<Vec<Note>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Note>(
		"\
SELECT id, user_id, notebook_id, title, content, is_favorite, created_at, updated_at
FROM notes
WHERE user_id = $1 AND is_favorite
ORDER BY updated_at DESC NULLS LAST
LIMIT $2",
	)
	.bind(user_id)
	.bind(limit)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn favorite_notebooks<'e, E>(
	executor: E,
	user_id: Uuid,
	limit: i64,
) -> Result<Vec<Notebook>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Notebook>(
		"\
SELECT id, user_id, name, is_favorite, created_at, updated_at
FROM notebooks
WHERE user_id = $1 AND is_favorite
ORDER BY updated_at DESC NULLS LAST
LIMIT $2",
	)
	.bind(user_id)
	.bind(limit)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn recent_templates<'e, E>(executor: E, user_id: Uuid, limit: i64) -> Result<Vec<Template>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Template>(
		"\
SELECT id, user_id, name, content, created_at, updated_at
FROM templates
WHERE user_id = $1
ORDER BY created_at DESC
LIMIT $2",
	)
	.bind(user_id)
	.bind(limit)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

/// Tags ranked by how many of the owner's notes reference them. The
/// association table's primary key keeps the count per distinct note.
pub async fn popular_tags<'e, E>(executor: E, user_id: Uuid, limit: i64) -> Result<Vec<TagNoteCount>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, TagNoteCount>(
		"\
SELECT t.id, t.name, count(nt.note_id) AS note_count
FROM tags t
JOIN note_tags nt ON nt.tag_id = t.id
WHERE t.user_id = $1
GROUP BY t.id, t.name
ORDER BY note_count DESC, t.name
LIMIT $2",
	)
	.bind(user_id)
	.bind(limit)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}
