//! Bulk synthetic data generator for the convd dataset
//!
//! Runs four strictly ordered phases:
//! 1. Load the message-body corpus (fatal if empty)
//! 2. Insert N contacts in fixed-size batches
//! 3. Insert M messages in the same batching scheme
//! 4. Recompute every contact's last_message_timestamp in one bulk update
//!
//! Any phase failure aborts the whole run. Each insert phase holds one
//! pooled connection for its duration and releases it on every exit path.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use sqlx::PgPool;
use tracing::info;

use convd_server::config::DbConfig;
use convd_server::db::create_pool_with_options;
use convd_server::MIGRATOR;

mod corpus;
mod synth;

/// The seeder is single-writer; batches are never interleaved.
const SEED_MAX_CONNECTIONS: u32 = 2;

#[derive(Args, Debug)]
pub struct SeedArgs {
    /// Line-oriented corpus of candidate message bodies (first CSV field per record)
    #[arg(long, value_name = "PATH", default_value = "message_content.csv")]
    pub corpus: PathBuf,

    /// Number of synthetic contacts to insert
    #[arg(long, default_value = "100000")]
    pub contacts: u64,

    /// Number of synthetic messages to insert
    #[arg(long, default_value = "5000000")]
    pub messages: u64,

    /// Rows per INSERT statement
    #[arg(long, default_value = "10000")]
    pub batch_size: usize,

    /// Database URL (overrides DB_* environment variables)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Disable progress bar output
    #[arg(long)]
    pub no_progress: bool,
}

/// Reject argument combinations the insert loops cannot make progress on.
fn validate_args(args: &SeedArgs) -> Result<()> {
    if args.batch_size == 0 {
        bail!("--batch-size must be at least 1");
    }
    if args.contacts == 0 && args.messages > 0 {
        bail!("--messages requires at least one contact to assign them to");
    }
    Ok(())
}

/// Run the full seed pipeline.
pub async fn run_seed(args: SeedArgs) -> Result<()> {
    dotenvy::dotenv().ok();
    validate_args(&args)?;

    let corpus = corpus::load(&args.corpus).await?;
    info!(
        "loaded {} message bodies from {}",
        corpus.len(),
        args.corpus.display()
    );

    let config = match &args.database_url {
        Some(url) => DbConfig::Url(url.clone()),
        None => DbConfig::from_env(),
    };
    let options = config
        .connect_options()
        .context("invalid database configuration")?;
    let pool = create_pool_with_options(options, SEED_MAX_CONNECTIONS)
        .await
        .context("failed to connect to the database")?;
    MIGRATOR.run(&pool).await.context("migration failed")?;

    insert_contacts(&pool, args.contacts, args.batch_size, args.no_progress)
        .await
        .context("contact generation failed")?;
    insert_messages(
        &pool,
        &corpus,
        args.messages,
        args.contacts,
        args.batch_size,
        args.no_progress,
    )
    .await
    .context("message generation failed")?;
    update_last_message_timestamps(&pool)
        .await
        .context("timestamp update failed")?;

    info!(
        "seed complete: {} contacts, {} messages",
        args.contacts, args.messages
    );
    Ok(())
}

/// Phase 2: batched contact inserts.
async fn insert_contacts(
    pool: &PgPool,
    total: u64,
    batch_size: usize,
    no_progress: bool,
) -> Result<()> {
    let mut conn = pool.acquire().await?;
    let bar = progress_bar(total, "contacts", no_progress);

    let mut inserted = 0u64;
    while inserted < total {
        let count = batch_size.min((total - inserted) as usize);
        let (names, phones) = synth::contact_batch(count);

        sqlx::query(
            r#"
            INSERT INTO contacts (name, phone_number)
            SELECT * FROM UNNEST($1::text[], $2::text[])
            "#,
        )
        .bind(&names)
        .bind(&phones)
        .execute(&mut *conn)
        .await?;

        inserted += count as u64;
        bar.set_position(inserted);
    }

    bar.finish_with_message("contacts done");
    info!("inserted {} contacts", inserted);
    Ok(())
}

/// Phase 3: batched message inserts.
async fn insert_messages(
    pool: &PgPool,
    corpus: &[String],
    total: u64,
    num_contacts: u64,
    batch_size: usize,
    no_progress: bool,
) -> Result<()> {
    let mut conn = pool.acquire().await?;
    let bar = progress_bar(total, "messages", no_progress);

    let mut inserted = 0u64;
    while inserted < total {
        let count = batch_size.min((total - inserted) as usize);
        let batch = synth::message_batch(count, num_contacts, corpus);

        sqlx::query(
            r#"
            INSERT INTO messages (contact_id, content, timestamp)
            SELECT * FROM UNNEST($1::int8[], $2::text[], $3::timestamptz[])
            "#,
        )
        .bind(&batch.contact_ids)
        .bind(&batch.bodies)
        .bind(&batch.timestamps)
        .execute(&mut *conn)
        .await?;

        inserted += count as u64;
        bar.set_position(inserted);
    }

    bar.finish_with_message("messages done");
    info!("inserted {} messages", inserted);
    Ok(())
}

/// Phase 4: recompute last_message_timestamp for every contact.
async fn update_last_message_timestamps(pool: &PgPool) -> Result<()> {
    let mut conn = pool.acquire().await?;

    sqlx::query(
        r#"
        UPDATE contacts c
        SET last_message_timestamp = m.max_ts
        FROM (
            SELECT contact_id, MAX(timestamp) AS max_ts
            FROM messages
            GROUP BY contact_id
        ) m
        WHERE c.id = m.contact_id
        "#,
    )
    .execute(&mut *conn)
    .await?;

    info!("updated contact last_message_timestamp");
    Ok(())
}

fn progress_bar(len: u64, msg: &'static str, no_progress: bool) -> ProgressBar {
    if no_progress {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:30.cyan/dim}] {pos}/{len} ({eta})")
            .expect("valid template")
            .progress_chars("━╸─"),
    );
    bar.set_message(msg);
    bar.enable_steady_tick(Duration::from_millis(200));
    bar
}
