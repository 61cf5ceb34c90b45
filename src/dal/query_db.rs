use sqlx::PgPool;

/// Read-path result: an empty match is a distinct, reportable outcome, not
/// a storage error.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryOutcome<T> {
    Found(Vec<T>),
    NotFound,
}

impl<T> QueryOutcome<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            QueryOutcome::NotFound
        } else {
            QueryOutcome::Found(rows)
        }
    }
}

#[derive(Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct TermResultRow {
    pub headline: String,
    pub url: String,
    pub description: String,
    pub content_type: String,
}

#[derive(Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct ContentTypeResultRow {
    pub headline: String,
    pub url: String,
    pub description: String,
    pub search_term: String,
}

pub async fn results_by_term(
    pool: &PgPool,
    term: &str,
) -> Result<QueryOutcome<TermResultRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, TermResultRow>(
        r#"
        select
            sr.headline,
            sr.url,
            sr.description,
            ct."desc" as content_type
        from
            search_results sr
            join search_terms st on sr.term_id = st.id
            join content_type ct on sr.content_type_id = ct.id
        where
            st."desc" = $1
        "#,
    )
    .bind(term)
    .fetch_all(pool)
    .await?;

    Ok(QueryOutcome::from_rows(rows))
}

pub async fn results_by_content_type(
    pool: &PgPool,
    label: &str,
) -> Result<QueryOutcome<ContentTypeResultRow>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ContentTypeResultRow>(
        r#"
        select
            sr.headline,
            sr.url,
            sr.description,
            st."desc" as search_term
        from
            search_results sr
            join search_terms st on sr.term_id = st.id
            join content_type ct on sr.content_type_id = ct.id
        where
            ct."desc" = $1
        "#,
    )
    .bind(label)
    .fetch_all(pool)
    .await?;

    Ok(QueryOutcome::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::QueryOutcome;

    #[test]
    fn empty_rows_become_not_found() {
        assert_eq!(
            QueryOutcome::<String>::from_rows(vec![]),
            QueryOutcome::NotFound
        );
    }

    #[test]
    fn rows_are_passed_through() {
        let outcome = QueryOutcome::from_rows(vec!["row".to_string()]);
        assert_eq!(outcome, QueryOutcome::Found(vec!["row".to_string()]));
    }
}
