use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Error, Result, models::Notebook};

const NAME_TAKEN: &str = "A notebook with this name already exists.";

pub async fn insert<'e, E>(executor: E, notebook: &Notebook) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
INSERT INTO notebooks (id, user_id, name, is_favorite, created_at, updated_at)
VALUES ($1, $2, $3, $4, $5, $6)",
	)
	.bind(notebook.id)
	.bind(notebook.user_id)
	.bind(notebook.name.as_str())
	.bind(notebook.is_favorite)
	.bind(notebook.created_at)
	.bind(notebook.updated_at)
	.execute(executor)
	.await
	.map_err(|err| Error::or_conflict(err, NAME_TAKEN))?;

	Ok(())
}

pub async fn fetch<'e, E>(executor: E, user_id: Uuid, notebook_id: Uuid) -> Result<Option<Notebook>>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Notebook>(
		"\
SELECT id, user_id, name, is_favorite, created_at, updated_at
FROM notebooks
WHERE user_id = $1 AND id = $2
LIMIT 1",
	)
	.bind(user_id)
	.bind(notebook_id)
	.fetch_optional(executor)
	.await?;

	Ok(row)
}

pub async fn list<'e, E>(executor: E, user_id: Uuid) -> Result<Vec<Notebook>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, Notebook>(
		"\
SELECT id, user_id, name, is_favorite, created_at, updated_at
FROM notebooks
WHERE user_id = $1
ORDER BY created_at",
	)
	.bind(user_id)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}

pub async fn update<'e, E>(executor: E, notebook: &Notebook) -> Result<()>
where
	E: PgExecutor<'e>,
{
	sqlx::query(
		"\
UPDATE notebooks
SET name = $1, is_favorite = $2, updated_at = $3
WHERE user_id = $4 AND id = $5",
	)
	.bind(notebook.name.as_str())
	.bind(notebook.is_favorite)
	.bind(notebook.updated_at)
	.bind(notebook.user_id)
	.bind(notebook.id)
	.execute(executor)
	.await
	.map_err(|err| Error::or_conflict(err, NAME_TAKEN))?;

	Ok(())
}

/// Deleting a notebook takes its notes with it via the declared cascade.
pub async fn delete<'e, E>(executor: E, user_id: Uuid, notebook_id: Uuid) -> Result<u64>
where
	E: PgExecutor<'e>,
{
	let result = sqlx::query("DELETE FROM notebooks WHERE user_id = $1 AND id = $2")
		.bind(user_id)
		.bind(notebook_id)
		.execute(executor)
		.await?;

	Ok(result.rows_affected())
}

/// Atomic get-or-create by (owner, name). The no-op DO UPDATE makes the
/// RETURNING clause yield the existing row on conflict, so two concurrent
/// callers both land on the same notebook.
pub async fn get_or_create<'e, E>(executor: E, user_id: Uuid, name: &str) -> Result<Notebook>
where
	E: PgExecutor<'e>,
{
	let row = sqlx::query_as::<_, Notebook>(
		"\
INSERT INTO notebooks (id, user_id, name, is_favorite, created_at)
VALUES ($1, $2, $3, FALSE, now())
ON CONFLICT (user_id, name)
DO UPDATE
SET name = notebooks.name
RETURNING id, user_id, name, is_favorite, created_at, updated_at",
	)
	.bind(Uuid::new_v4())
	.bind(user_id)
	.bind(name)
	.fetch_one(executor)
	.await?;

	Ok(row)
}
