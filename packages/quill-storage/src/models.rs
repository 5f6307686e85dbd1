use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Notebook {
	pub id: Uuid,
	pub user_id: Uuid,
	pub name: String,
	pub is_favorite: bool,
	pub created_at: OffsetDateTime,
	pub updated_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Note {
	pub id: Uuid,
	pub user_id: Uuid,
	pub notebook_id: Uuid,
	pub title: String,
	pub content: Option<String>,
	pub is_favorite: bool,
	pub created_at: OffsetDateTime,
	pub updated_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Tag {
	pub id: Uuid,
	pub user_id: Uuid,
	pub name: String,
	pub created_at: OffsetDateTime,
	pub updated_at: Option<OffsetDateTime>,
}

#[derive(Clone, Debug, sqlx::FromRow)]
pub struct Template {
	pub id: Uuid,
	pub user_id: Uuid,
	pub name: String,
	pub content: Option<String>,
	pub created_at: OffsetDateTime,
	pub updated_at: Option<OffsetDateTime>,
}

/// A tag together with how many of the owner's notes reference it.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct TagNoteCount {
	pub id: Uuid,
	pub name: String,
	pub note_count: i64,
}

/// One row of the unified search projection. `kind` discriminates which
/// relation the row came from; only note rows carry a snippet.
#[derive(Clone, Debug, sqlx::FromRow)]
pub struct SearchHit {
	pub id: Uuid,
	pub name: String,
	pub kind: String,
	pub snippet: Option<String>,
}
