const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Sqlx(#[from] sqlx::Error),
	#[error("Not found: {0}")]
	NotFound(String),
	#[error("Conflict: {0}")]
	Conflict(String),
}
impl Error {
	/// Translates a unique-constraint violation into `Conflict`; every other
	/// database failure passes through untouched. Uniqueness is enforced by
	/// the constraint itself, never by a pre-check, so this is where the
	/// conflict surfaces under concurrent writers.
	pub fn or_conflict(err: sqlx::Error, message: &str) -> Self {
		let unique = err
			.as_database_error()
			.and_then(|db_err| db_err.code())
			.map(|code| code == UNIQUE_VIOLATION)
			.unwrap_or(false);

		if unique { Self::Conflict(message.to_string()) } else { Self::Sqlx(err) }
	}
}
