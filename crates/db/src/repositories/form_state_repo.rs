//! Repository for the `form_states` table.

use sqlx::SqlitePool;

use crate::models::form_state::FormState;

const COLUMNS: &str = "form_name, is_visible, updated_at";

/// Provides data access for front-end form flags.
pub struct FormStateRepo;

impl FormStateRepo {
    /// Every stored flag, by name.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<FormState>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_states ORDER BY form_name");
        sqlx::query_as::<_, FormState>(&query).fetch_all(pool).await
    }

    /// Returns `None` when the form has never been stored.
    pub async fn find(pool: &SqlitePool, form_name: &str) -> Result<Option<FormState>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM form_states WHERE form_name = $1");
        sqlx::query_as::<_, FormState>(&query)
            .bind(form_name)
            .fetch_optional(pool)
            .await
    }

    /// Insert or overwrite the flag for a form.
    pub async fn upsert(
        pool: &SqlitePool,
        form_name: &str,
        is_visible: bool,
    ) -> Result<FormState, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_states (form_name, is_visible) VALUES ($1, $2) \
             ON CONFLICT (form_name) DO UPDATE SET \
                 is_visible = excluded.is_visible, \
                 updated_at = CURRENT_TIMESTAMP \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormState>(&query)
            .bind(form_name)
            .bind(is_visible)
            .fetch_one(pool)
            .await
    }

    /// Flip the flag. A form that was never stored flips from `default`.
    pub async fn toggle(
        pool: &SqlitePool,
        form_name: &str,
        default: bool,
    ) -> Result<FormState, sqlx::Error> {
        let query = format!(
            "INSERT INTO form_states (form_name, is_visible) VALUES ($1, $2) \
             ON CONFLICT (form_name) DO UPDATE SET \
                 is_visible = NOT form_states.is_visible, \
                 updated_at = CURRENT_TIMESTAMP \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FormState>(&query)
            .bind(form_name)
            .bind(!default)
            .fetch_one(pool)
            .await
    }
}
