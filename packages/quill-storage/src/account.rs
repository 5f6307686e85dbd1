use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::Result;

#[derive(Clone, Copy, Debug)]
pub struct ErasureCounts {
	pub notebooks: u64,
	pub tags: u64,
	pub templates: u64,
}

/// Deletes everything the owner has. Notes and association rows fall to the
/// declared cascades, so three statements cover all five relations. Runs
/// inside the caller's transaction so erasure is all-or-nothing.
pub async fn clear_user_data(
	tx: &mut Transaction<'_, Postgres>,
	user_id: Uuid,
) -> Result<ErasureCounts> {
	let notebooks = sqlx::query("DELETE FROM notebooks WHERE user_id = $1")
		.bind(user_id)
		.execute(&mut **tx)
		.await?
		.rows_affected();
	let tags = sqlx::query("DELETE FROM tags WHERE user_id = $1")
		.bind(user_id)
		.execute(&mut **tx)
		.await?
		.rows_affected();
	let templates = sqlx::query("DELETE FROM templates WHERE user_id = $1")
		.bind(user_id)
		.execute(&mut **tx)
		.await?
		.rows_affected();

	Ok(ErasureCounts { notebooks, tags, templates })
}
