//! `PostgreSQL` repository implementation for broadcast content reads.

use crate::content::{
    adapters::{
        conversion::{
            assemble_rows, row_to_broadcast_info, row_to_comment, row_to_header_sort_order,
            row_to_info_text, row_to_sport_result,
        },
        models::{BroadcastRow, CommentRow, HeaderSortOrderRow, InfoTextRow, SportResultRow},
    },
    domain::{ArticleId, BroadcastInfo, Comment, HeaderSortOrder, InfoText, SportResult},
    ports::{
        Assembled, BroadcastContentRepository, ContentRepositoryError, ContentRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::connection::{DefaultLoadingMode, SimpleConnection};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Error as R2d2Error, Pool};
use diesel::result::Error as DieselError;
use diesel::sql_types::Text;
use std::time::Duration;
use tracing::debug;

use super::queries;

/// `PostgreSQL` connection pool type used by content adapters.
pub type ContentPgPool = Pool<ConnectionManager<PgConnection>>;

/// Pool customizer that caps the run time of every statement on a pooled
/// connection.
///
/// The setting is applied once per physical connection when the pool opens
/// it, so it holds for every later checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTimeout(Duration);

impl StatementTimeout {
    /// Creates a customizer for the given limit. A zero duration disables
    /// the limit.
    #[must_use]
    pub const fn new(limit: Duration) -> Self {
        Self(limit)
    }

    /// Returns the session statement that applies the limit.
    #[must_use]
    pub fn to_sql(self) -> String {
        format!("SET statement_timeout = {}", self.0.as_millis())
    }
}

impl CustomizeConnection<PgConnection, R2d2Error> for StatementTimeout {
    fn on_acquire(&self, connection: &mut PgConnection) -> Result<(), R2d2Error> {
        connection
            .batch_execute(&self.to_sql())
            .map_err(R2d2Error::QueryError)
    }
}

/// `PostgreSQL`-backed content repository.
///
/// Each call checks out one pooled connection on a blocking worker, runs a
/// single query and drains its cursor before the connection returns to the
/// pool, on success and failure alike.
///
/// Cancelling a call does not cancel its statement. The worker keeps the
/// connection until the query ends, so pools should be built with a
/// [`StatementTimeout`].
#[derive(Debug, Clone)]
pub struct PostgresContentRepository {
    pool: ContentPgPool,
}

impl PostgresContentRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ContentPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ContentRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ContentRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ContentRepositoryError::query)?;
            f(&mut connection)
        })
        .await
        .map_err(ContentRepositoryError::query)?
    }
}

#[async_trait]
impl BroadcastContentRepository for PostgresContentRepository {
    async fn broadcast_info(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<BroadcastInfo> {
        let article = article_id.as_str().to_owned();
        let info = self
            .run_blocking(move |connection| {
                let row = diesel::sql_query(queries::BROADCAST_INFO)
                    .bind::<Text, _>(article)
                    .get_result::<BroadcastRow>(connection)
                    .optional()
                    .map_err(single_row_error)?;
                Ok(row.map(row_to_broadcast_info))
            })
            .await?;
        debug!(
            article_id = %article_id,
            found = info.is_some(),
            "loaded broadcast info"
        );
        Ok(info.unwrap_or_default())
    }

    async fn info_texts(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<InfoText>> {
        let article = article_id.as_str().to_owned();
        let assembled = self
            .run_blocking(move |connection| {
                let rows = diesel::sql_query(queries::INFO_TEXTS)
                    .bind::<Text, _>(article)
                    .load_iter::<InfoTextRow, DefaultLoadingMode>(connection)
                    .map_err(ContentRepositoryError::query)?;
                Ok(assemble_rows(rows, row_to_info_text))
            })
            .await?;
        log_assembled("info texts", article_id, &assembled);
        Ok(assembled)
    }

    async fn sport_results(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<SportResult>> {
        let article = article_id.as_str().to_owned();
        let assembled = self
            .run_blocking(move |connection| {
                let rows = diesel::sql_query(queries::SPORT_RESULTS)
                    .bind::<Text, _>(article)
                    .load_iter::<SportResultRow, DefaultLoadingMode>(connection)
                    .map_err(ContentRepositoryError::query)?;
                Ok(assemble_rows(rows, row_to_sport_result))
            })
            .await?;
        log_assembled("sport results", article_id, &assembled);
        Ok(assembled)
    }

    async fn header_sort_order(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<HeaderSortOrder>> {
        let article = article_id.as_str().to_owned();
        let assembled = self
            .run_blocking(move |connection| {
                let rows = diesel::sql_query(queries::HEADER_SORT_ORDER)
                    .bind::<Text, _>(article)
                    .load_iter::<HeaderSortOrderRow, DefaultLoadingMode>(connection)
                    .map_err(ContentRepositoryError::query)?;
                Ok(assemble_rows(rows, row_to_header_sort_order))
            })
            .await?;
        log_assembled("header sort order", article_id, &assembled);
        Ok(assembled)
    }

    async fn published_comments(
        &self,
        article_id: &ArticleId,
    ) -> ContentRepositoryResult<Assembled<Comment>> {
        let article = article_id.as_str().to_owned();
        let assembled = self
            .run_blocking(move |connection| {
                let rows = diesel::sql_query(queries::PUBLISHED_COMMENTS)
                    .bind::<Text, _>(article)
                    .load_iter::<CommentRow, DefaultLoadingMode>(connection)
                    .map_err(ContentRepositoryError::query)?;
                Ok(assemble_rows(rows, row_to_comment))
            })
            .await?;
        log_assembled("published comments", article_id, &assembled);
        Ok(assembled)
    }
}

/// Splits single-row lookup failures into decode and query errors.
fn single_row_error(err: DieselError) -> ContentRepositoryError {
    match err {
        DieselError::DeserializationError(_) => ContentRepositoryError::decode(0, err),
        _ => ContentRepositoryError::query(err),
    }
}

fn log_assembled<T>(kind: &str, article_id: &ArticleId, assembled: &Assembled<T>) {
    debug!(
        article_id = %article_id,
        rows = assembled.items().len(),
        complete = assembled.is_complete(),
        "assembled {kind}"
    );
}
