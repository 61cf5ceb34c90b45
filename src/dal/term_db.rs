use sqlx::PgPool;

use crate::domain::SearchTerm;

/// Records one search term. Term identity is load-bearing for every result
/// that follows it, so the caller aborts the run when this fails.
pub async fn insert_term(pool: &PgPool, text: &str) -> Result<SearchTerm, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        insert into search_terms
            ("desc")
        values
            ($1)
        returning id
        "#,
    )
    .bind(text)
    .fetch_one(pool)
    .await?;

    Ok(SearchTerm {
        id,
        text: text.to_string(),
    })
}

/// Resets the term and result tables, establishing the run boundary. The
/// seeded `content_type` table is left alone.
pub async fn truncate_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        truncate table search_results, search_terms restart identity
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}
