//! Shared helpers for `PostgreSQL` content integration tests.

pub use super::cluster::{BoxError, PostgresCluster, shared_cluster};
use broadcast_content::config::ContentConfig;
use broadcast_content::content::{
    adapters::postgres::{ContentPgPool, PostgresContentRepository},
    domain::ArticleId,
};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use rstest::fixture;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::runtime::Runtime;

/// SQL that creates the content schema.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../../migrations/2026-10-01-000000_create_broadcast_content_tables/up.sql");

/// Article identifier of the seeded broadcast.
pub const ARTICLE: &str = "ART-100";

/// Customer, users, identities and one broadcast shared by most tests.
///
/// User 7 has no last name and comment user 4 still carries the guest name
/// it was created with before the account existed.
pub const BASE_SEED_SQL: &str = "
    INSERT INTO languages (id, short_name) VALUES (1, 'sv');
    INSERT INTO customers (id, short_name) VALUES (3, 'gp');
    INSERT INTO customer_settings (customer_id, archive_after_days) VALUES (3, 30);
    INSERT INTO customer_signup_settings
        (customer_id, language_id, anon_comment_require_email, user_terms_version)
        VALUES (3, 1, TRUE, 'v2');
    INSERT INTO aliases (id, name, profile_picture, image_rotation)
        VALUES (1, 'Moderator', 'mod.png', 180);
    INSERT INTO users
        (id, first_name, last_name, email, profile_picture, image_rotation, slug, alias_id)
        VALUES
        (21, 'Jane', 'Doe', 'jane@example.com', 'jane.png', 90, 'jane-doe', NULL),
        (42, 'Mo', 'Derator', 'mo@example.com', 'mo.png', 0, 'mo', 1),
        (7, 'Prince', NULL, 'first@example.com', 'me.png', NULL, NULL, NULL);
    INSERT INTO broadcasts
        (id, article_id, customer_id, subject, description, start_time,
         scheduled_start, scheduled_end, has_comments, allow_anon_comments, posts_to_show)
        VALUES (1, 'ART-100', 3, 'Derby day', 'Live from the stadium',
                '2024-01-01T18:05:00Z', '2024-01-01T18:00:00Z', '2024-01-01T20:00:00Z',
                TRUE, TRUE, 25);
    INSERT INTO comment_users (id, ifr_user_id, user_name, email) VALUES
        (1, 21, NULL, NULL),
        (2, 42, NULL, NULL),
        (3, NULL, 'Visitor', 'visitor@example.com'),
        (4, 7, 'Legacy', 'legacy@example.com');
";

static NEXT_DATABASE: AtomicUsize = AtomicUsize::new(0);

/// A migrated database that is dropped with the value.
pub struct ContentDatabase {
    /// Repository under test.
    pub repo: PostgresContentRepository,
    /// Pool the repository draws from.
    pub pool: ContentPgPool,
    /// Runtime that drives the repository futures.
    pub rt: Runtime,
    cluster: PostgresCluster,
    name: String,
}

impl ContentDatabase {
    /// Creates and migrates a fresh database with the default pool settings.
    pub fn create(cluster: PostgresCluster) -> Result<Self, BoxError> {
        Self::with_config(cluster, |config| config)
    }

    /// Creates and migrates a fresh database, letting the caller adjust the
    /// pool configuration.
    pub fn with_config(
        cluster: PostgresCluster,
        adjust: impl FnOnce(ContentConfig) -> ContentConfig,
    ) -> Result<Self, BoxError> {
        let name = format!(
            "broadcast_content_test_{}_{}",
            std::process::id(),
            NEXT_DATABASE.fetch_add(1, Ordering::Relaxed)
        );
        cluster.create_database(&name)?;
        let prepared = prepare(cluster, &name, adjust);
        if prepared.is_err() {
            drop(cluster.drop_database(&name));
        }
        let (pool, rt) = prepared?;
        Ok(Self {
            repo: PostgresContentRepository::new(pool.clone()),
            pool,
            rt,
            cluster,
            name,
        })
    }

    /// Runs seed statements against the database.
    pub fn seed(&self, sql: &str) -> Result<(), BoxError> {
        let mut conn = self.pool.get().map_err(|err| Box::new(err) as BoxError)?;
        conn.batch_execute(sql)
            .map_err(|err| Box::new(err) as BoxError)
    }
}

impl Drop for ContentDatabase {
    fn drop(&mut self) {
        drop(self.cluster.drop_database(&self.name));
    }
}

fn prepare(
    cluster: PostgresCluster,
    name: &str,
    adjust: impl FnOnce(ContentConfig) -> ContentConfig,
) -> Result<(ContentPgPool, Runtime), BoxError> {
    let url = cluster.database_url(name);
    let mut conn = PgConnection::establish(&url).map_err(|err| Box::new(err) as BoxError)?;
    conn.batch_execute(CREATE_SCHEMA_SQL)
        .map_err(|err| Box::new(err) as BoxError)?;
    let config = adjust(ContentConfig {
        database_url: url,
        pool_max_size: 2,
        ..ContentConfig::default()
    });
    let pool = config.build_pool().map_err(|err| Box::new(err) as BoxError)?;
    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .map_err(|err| Box::new(err) as BoxError)?;
    Ok((pool, rt))
}

/// Returns the identifier of the seeded broadcast.
///
/// # Panics
///
/// Panics if [`ARTICLE`] is not a valid identifier.
#[must_use]
pub fn article() -> ArticleId {
    ArticleId::new(ARTICLE).expect("valid article id")
}

/// Provides a fresh migrated database, or `None` when no server is
/// available and the test should be skipped.
///
/// # Panics
///
/// Panics if a server is available but the database cannot be prepared.
#[fixture]
pub fn content_db() -> Option<ContentDatabase> {
    let cluster = shared_cluster()?;
    match ContentDatabase::create(cluster) {
        Ok(database) => Some(database),
        Err(err) => panic!("failed to prepare test database: {err}"),
    }
}

/// Like [`content_db`], with [`BASE_SEED_SQL`] applied.
///
/// # Panics
///
/// Panics if a server is available but the database cannot be prepared.
#[fixture]
pub fn seeded_db(content_db: Option<ContentDatabase>) -> Option<ContentDatabase> {
    let database = content_db?;
    database.seed(BASE_SEED_SQL).expect("base seed");
    Some(database)
}
