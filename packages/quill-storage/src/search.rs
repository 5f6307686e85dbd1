use sqlx::PgExecutor;
use uuid::Uuid;

use crate::{Result, models::SearchHit};

/// One unioned pass over the four owner-scoped relations. The branch_rank
/// column pins the output order to notes, notebooks, tags, templates; only
/// the notes branch projects a snippet.
pub async fn unified<'e, E>(executor: E, user_id: Uuid, pattern: &str) -> Result<Vec<SearchHit>>
where
	E: PgExecutor<'e>,
{
	let rows = sqlx::query_as::<_, SearchHit>(
		"\
SELECT id, title AS name, 'note' AS kind, content AS snippet, 1 AS branch_rank
FROM notes
WHERE user_id = $1 AND (title ILIKE $2 OR content ILIKE $2)
UNION ALL
SELECT id, name, 'notebook', NULL, 2
FROM notebooks
WHERE user_id = $1 AND name ILIKE $2
UNION ALL
SELECT id, name, 'tag', NULL, 3
FROM tags
WHERE user_id = $1 AND name ILIKE $2
UNION ALL
SELECT id, name, 'template', NULL, 4
FROM templates
WHERE user_id = $1 AND name ILIKE $2
ORDER BY branch_rank",
	)
	.bind(user_id)
	.bind(pattern)
	.fetch_all(executor)
	.await?;

	Ok(rows)
}
