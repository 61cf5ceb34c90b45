use sqlx::PgPool;

use crate::domain::{ContentType, ResultRecord};

/// Inserts one categorized result. Each insert commits on its own, so a
/// mid-run termination never leaves a half-written batch.
pub async fn insert_result(
    pool: &PgPool,
    term_id: i64,
    content_type: ContentType,
    record: &ResultRecord,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        insert into search_results
            (term_id, content_type_id, headline, description, url)
        values
            ($1, $2, $3, $4, $5)
        ",
    )
    .bind(term_id)
    .bind(content_type.id())
    .bind(&record.headline)
    .bind(&record.description)
    .bind(&record.url)
    .execute(pool)
    .await?;

    Ok(())
}
