use crate::domain::model::{format_timestamp, RecordSet};
use crate::domain::ports::{Backend, RecordStore};
use crate::utils::error::{GcaError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};
use std::time::Duration;

const SCHEMA: [&str; 4] = [
    r#"
    CREATE TABLE IF NOT EXISTS meetup_groups (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        category TEXT,
        member_count INTEGER,
        description TEXT,
        location TEXT,
        organizer TEXT,
        created_date TEXT,
        last_event_date TEXT,
        scraped_date TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS climbing_gyms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        address TEXT,
        phone TEXT,
        membership_demographics TEXT,
        class_schedule TEXT,
        pricing TEXT,
        amenities TEXT,
        scraped_date TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS university_programs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        institution TEXT,
        program_name TEXT,
        degree_type TEXT,
        female_enrollment_pct REAL,
        total_enrollment INTEGER,
        evening_classes BOOLEAN,
        networking_events TEXT,
        scraped_date TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS coworking_spaces (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        address TEXT,
        membership_count INTEGER,
        industry_mix TEXT,
        pricing TEXT,
        amenities TEXT,
        events TEXT,
        scraped_date TEXT
    )
    "#,
];

/// Relational tier backed by a single SQLite file.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure all four tables exist.
    pub async fn connect(path: &str) -> Result<Self> {
        tracing::info!("Opening relational store at {}", path);

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await
            .map_err(|e| GcaError::connection(Backend::RelationalStore, e.to_string()))?;

        let store = Self { pool };
        store
            .initialize_schema()
            .await
            .map_err(|e| GcaError::connection(Backend::RelationalStore, e.to_string()))?;

        Ok(store)
    }

    async fn initialize_schema(&self) -> Result<()> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

async fn insert_rows(
    tx: &mut Transaction<'_, Sqlite>,
    records: &RecordSet,
    scraped_date: &str,
) -> Result<()> {
    match records {
        RecordSet::MeetupGroups(groups) => {
            for group in groups {
                sqlx::query(
                    "INSERT INTO meetup_groups \
                     (name, category, member_count, description, location, organizer, scraped_date) \
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(group.name.as_str())
                .bind(group.category.as_str())
                .bind(i64::from(group.member_count))
                .bind(group.description.as_str())
                .bind(group.location.as_str())
                .bind(group.organizer.as_str())
                .bind(scraped_date)
                .execute(&mut **tx)
                .await?;
            }
        }
        RecordSet::ClimbingGyms(gyms) => {
            for gym in gyms {
                let amenities = serde_json::to_string(&gym.amenities)?;
                sqlx::query(
                    "INSERT INTO climbing_gyms \
                     (name, address, phone, membership_demographics, amenities, pricing, scraped_date) \
                     VALUES (?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(gym.name.as_str())
                .bind(gym.address.as_str())
                .bind(gym.phone.as_deref())
                .bind(gym.demographics.as_str())
                .bind(amenities)
                .bind(gym.membership_pricing.as_deref().unwrap_or("N/A"))
                .bind(scraped_date)
                .execute(&mut **tx)
                .await?;
            }
        }
        RecordSet::UniversityPrograms(programs) => {
            for program in programs {
                sqlx::query(
                    "INSERT INTO university_programs \
                     (institution, program_name, degree_type, female_enrollment_pct, \
                      total_enrollment, evening_classes, networking_events, scraped_date) \
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(program.institution.as_str())
                .bind(program.program_name.as_str())
                .bind(program.degree_type.as_str())
                .bind(program.female_enrollment_pct)
                .bind(i64::from(program.total_enrollment))
                .bind(program.evening_classes)
                .bind(program.networking_events.as_str())
                .bind(scraped_date)
                .execute(&mut **tx)
                .await?;
            }
        }
        RecordSet::CoworkingSpaces(spaces) => {
            for space in spaces {
                let amenities = serde_json::to_string(&space.amenities)?;
                sqlx::query(
                    "INSERT INTO coworking_spaces \
                     (name, address, membership_count, industry_mix, pricing, amenities, events, scraped_date) \
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
                )
                .bind(space.name.as_str())
                .bind(space.address.as_str())
                .bind(i64::from(space.membership_count))
                .bind(space.industry_mix.as_str())
                .bind(space.pricing.as_str())
                .bind(amenities)
                .bind(space.events.as_str())
                .bind(scraped_date)
                .execute(&mut **tx)
                .await?;
            }
        }
    }
    Ok(())
}

#[async_trait]
impl RecordStore for SqliteStore {
    fn backend(&self) -> Backend {
        Backend::RelationalStore
    }

    /// Replaces the category's table contents in a single transaction.
    async fn store(&self, records: &RecordSet, scraped_at: DateTime<Utc>) -> Result<usize> {
        let table = records.category().as_str();
        let scraped_date = format_timestamp(scraped_at);

        let mut tx = self.pool.begin().await?;
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
        insert_rows(&mut tx, records, &scraped_date).await?;
        tx.commit().await?;

        tracing::info!("Stored {} rows in table: {}", records.len(), table);
        Ok(records.len())
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        tracing::debug!("Closed relational store");
        Ok(())
    }
}
