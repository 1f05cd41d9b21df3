//! PostgreSQL implementation of EntityStore.
//!
//! Every query filters on `tenant_id`. `commit` runs its writes inside one
//! transaction; litter updates are guarded by the `version` column.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

use crate::adapters::ensure_tenant;
use crate::config::DatabaseConfig;
use crate::domain::dog::{Dog, DogStatus, ParentFilter};
use crate::domain::fact_log::{EntityRef, EntityType, Event, EventRecord, EventType, Payload};
use crate::domain::foundation::{
    DogId, DomainError, ErrorCode, EventId, LitterId, PuppyId, Sex, TenantId, Timestamp,
};
use crate::domain::litter::{
    BirthType, Litter, LitterRecord, LitterStatus, MatingType, PregnancyTestMethod,
};
use crate::domain::puppy::{Puppy, PuppyStatus};
use crate::ports::{ChangeSet, EntityStore, StoreWrite};

const PUPPY_IDENTIFIER_CONSTRAINT: &str = "puppies_litter_identifier_key";

const DOG_COLUMNS: &str = "id, tenant_id, name, registered_name, registration_number, breed, \
     color, sex, birth_date, sire_id, dam_id, status";

const LITTER_COLUMNS: &str = "id, tenant_id, name, dam_id, sire_id, status, heat_start_date, \
     mating_date, mating_type, pregnancy_confirmed_date, pregnancy_test_method, \
     expected_birth_date, actual_birth_date, birth_type, puppies_born_count, \
     puppies_alive_count, males_count, females_count, notes, version, created_at, updated_at";

const PUPPY_COLUMNS: &str = "id, tenant_id, litter_id, identifier, name, sex, color, status, \
     birth_order, birth_weight, notes, created_at";

const EVENT_COLUMNS: &str = "id, tenant_id, entity_type, entity_id, event_type, event_date, \
     payload, reminder_date, reminder_completed, notes, created_at, deleted_at";

/// PostgreSQL implementation of EntityStore.
#[derive(Clone)]
pub struct PostgresEntityStore {
    pool: PgPool,
}

impl PostgresEntityStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool from configuration and applies migrations when enabled.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(Some(config.idle_timeout()))
            .max_lifetime(Some(config.max_lifetime()))
            .connect(&config.url)
            .await
            .map_err(store_error("connect to database"))?;

        let store = Self::new(pool);
        if config.run_migrations {
            store.migrate().await?;
        }
        Ok(store)
    }

    /// Applies the bundled schema migrations.
    pub async fn migrate(&self) -> Result<(), DomainError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_litters(
        &self,
        tenant: &TenantId,
        filter_column: &str,
        bind: LitterFilter,
    ) -> Result<Vec<Litter>, DomainError> {
        let sql = format!(
            "SELECT {} FROM litters WHERE tenant_id = $1 AND {} = $2 ORDER BY created_at ASC",
            LITTER_COLUMNS, filter_column
        );
        let query = sqlx::query(&sql).bind(tenant.as_str());
        let query = match bind {
            LitterFilter::Status(status) => query.bind(status.as_str()),
            LitterFilter::Dog(id) => query.bind(*id.as_uuid()),
        };
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("fetch litters"))?;
        rows.iter().map(row_to_litter).collect()
    }
}

enum LitterFilter {
    Status(LitterStatus),
    Dog(DogId),
}

#[async_trait]
impl EntityStore for PostgresEntityStore {
    async fn find_dog(&self, tenant: &TenantId, id: DogId) -> Result<Option<Dog>, DomainError> {
        let sql = format!("SELECT {} FROM dogs WHERE tenant_id = $1 AND id = $2", DOG_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("fetch dog"))?;
        row.as_ref().map(row_to_dog).transpose()
    }

    async fn find_dogs_by_parent(
        &self,
        tenant: &TenantId,
        filter: ParentFilter,
    ) -> Result<Vec<Dog>, DomainError> {
        let (column, parent) = match filter {
            ParentFilter::Sire(id) => ("sire_id", id),
            ParentFilter::Dam(id) => ("dam_id", id),
        };
        let sql = format!(
            "SELECT {} FROM dogs WHERE tenant_id = $1 AND {} = $2 ORDER BY created_at ASC",
            DOG_COLUMNS, column
        );
        let rows = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(parent.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("fetch offspring"))?;
        rows.iter().map(row_to_dog).collect()
    }

    async fn find_litter(
        &self,
        tenant: &TenantId,
        id: LitterId,
    ) -> Result<Option<Litter>, DomainError> {
        let sql = format!(
            "SELECT {} FROM litters WHERE tenant_id = $1 AND id = $2",
            LITTER_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("fetch litter"))?;
        row.as_ref().map(row_to_litter).transpose()
    }

    async fn find_litters_by_status(
        &self,
        tenant: &TenantId,
        status: LitterStatus,
    ) -> Result<Vec<Litter>, DomainError> {
        self.fetch_litters(tenant, "status", LitterFilter::Status(status))
            .await
    }

    async fn find_litters_by_dam(
        &self,
        tenant: &TenantId,
        dam_id: DogId,
    ) -> Result<Vec<Litter>, DomainError> {
        self.fetch_litters(tenant, "dam_id", LitterFilter::Dog(dam_id))
            .await
    }

    async fn find_litters_by_sire(
        &self,
        tenant: &TenantId,
        sire_id: DogId,
    ) -> Result<Vec<Litter>, DomainError> {
        self.fetch_litters(tenant, "sire_id", LitterFilter::Dog(sire_id))
            .await
    }

    async fn find_puppy(
        &self,
        tenant: &TenantId,
        id: PuppyId,
    ) -> Result<Option<Puppy>, DomainError> {
        let sql = format!(
            "SELECT {} FROM puppies WHERE tenant_id = $1 AND id = $2",
            PUPPY_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("fetch puppy"))?;
        row.as_ref().map(row_to_puppy).transpose()
    }

    async fn find_puppies_by_litter(
        &self,
        tenant: &TenantId,
        litter_id: LitterId,
    ) -> Result<Vec<Puppy>, DomainError> {
        let sql = format!(
            "SELECT {} FROM puppies WHERE tenant_id = $1 AND litter_id = $2 ORDER BY birth_order ASC",
            PUPPY_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(litter_id.as_uuid())
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("fetch puppies"))?;
        rows.iter().map(row_to_puppy).collect()
    }

    async fn find_event(
        &self,
        tenant: &TenantId,
        id: EventId,
    ) -> Result<Option<Event>, DomainError> {
        let sql = format!(
            "SELECT {} FROM events WHERE tenant_id = $1 AND id = $2 AND deleted_at IS NULL",
            EVENT_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(store_error("fetch event"))?;
        row.as_ref().map(row_to_event).transpose()
    }

    async fn find_events_by_entity(
        &self,
        tenant: &TenantId,
        entity: EntityRef,
    ) -> Result<Vec<Event>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM events
            WHERE tenant_id = $1 AND entity_type = $2 AND entity_id = $3 AND deleted_at IS NULL
            ORDER BY event_date DESC, seq DESC
            "#,
            EVENT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(entity.entity_type.as_str())
            .bind(entity.entity_id)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("fetch events"))?;
        rows.iter().map(row_to_event).collect()
    }

    async fn find_pending_reminders(
        &self,
        tenant: &TenantId,
        until: NaiveDate,
    ) -> Result<Vec<Event>, DomainError> {
        let sql = format!(
            r#"
            SELECT {} FROM events
            WHERE tenant_id = $1
              AND deleted_at IS NULL
              AND reminder_completed = FALSE
              AND reminder_date IS NOT NULL
              AND reminder_date <= $2
            ORDER BY reminder_date ASC, seq ASC
            "#,
            EVENT_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(tenant.as_str())
            .bind(until)
            .fetch_all(&self.pool)
            .await
            .map_err(store_error("fetch reminders"))?;
        rows.iter().map(row_to_event).collect()
    }

    async fn commit(&self, tenant: &TenantId, changes: ChangeSet) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(store_error("begin transaction"))?;

        // Dropping the transaction on error rolls every write back.
        for write in changes.into_writes() {
            apply_write(&mut tx, tenant, write).await?;
        }

        tx.commit()
            .await
            .map_err(store_error("commit transaction"))?;
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Writes
// ════════════════════════════════════════════════════════════════════════════════

async fn apply_write(
    tx: &mut Transaction<'_, Postgres>,
    tenant: &TenantId,
    write: StoreWrite,
) -> Result<(), DomainError> {
    match write {
        StoreWrite::InsertLitter(litter) => {
            ensure_tenant(tenant, litter.tenant_id())?;
            insert_litter(tx, litter.record()).await
        }
        StoreWrite::UpdateLitter {
            litter,
            expected_version,
        } => update_litter(tx, tenant, litter.record(), expected_version).await,
        StoreWrite::InsertPuppy(puppy) => {
            ensure_tenant(tenant, &puppy.tenant_id)?;
            insert_puppy(tx, &puppy).await
        }
        StoreWrite::InsertEvent(event) => {
            ensure_tenant(tenant, event.tenant_id())?;
            insert_event(tx, event.record()).await
        }
        StoreWrite::CompleteReminder(id) => complete_reminder(tx, tenant, id).await,
        StoreWrite::SoftDeleteEvent(id) => soft_delete_event(tx, tenant, id).await,
    }
}

async fn insert_litter(
    tx: &mut Transaction<'_, Postgres>,
    record: &LitterRecord,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO litters (
            id, tenant_id, name, dam_id, sire_id, status, heat_start_date, mating_date,
            mating_type, pregnancy_confirmed_date, pregnancy_test_method, expected_birth_date,
            actual_birth_date, birth_type, puppies_born_count, puppies_alive_count,
            males_count, females_count, notes, version, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                  $17, $18, $19, $20, $21, $22)
        "#,
    )
    .bind(record.id.as_uuid())
    .bind(record.tenant_id.as_str())
    .bind(&record.name)
    .bind(record.dam_id.as_uuid())
    .bind(record.sire_id.as_uuid())
    .bind(record.status.as_str())
    .bind(record.heat_start_date)
    .bind(record.mating_date)
    .bind(record.mating_type.map(|t| t.as_str()))
    .bind(record.pregnancy_confirmed_date)
    .bind(record.pregnancy_test_method.map(|m| m.as_str()))
    .bind(record.expected_birth_date)
    .bind(record.actual_birth_date)
    .bind(record.birth_type.map(|t| t.as_str()))
    .bind(record.puppies_born_count as i32)
    .bind(record.puppies_alive_count as i32)
    .bind(record.males_count as i32)
    .bind(record.females_count as i32)
    .bind(record.notes.as_deref())
    .bind(record.version as i64)
    .bind(record.created_at.as_datetime())
    .bind(record.updated_at.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(store_error("insert litter"))?;

    Ok(())
}

async fn update_litter(
    tx: &mut Transaction<'_, Postgres>,
    tenant: &TenantId,
    record: &LitterRecord,
    expected_version: u64,
) -> Result<(), DomainError> {
    let result = sqlx::query(
        r#"
        UPDATE litters SET
            name = $4,
            status = $5,
            heat_start_date = $6,
            mating_date = $7,
            mating_type = $8,
            pregnancy_confirmed_date = $9,
            pregnancy_test_method = $10,
            expected_birth_date = $11,
            actual_birth_date = $12,
            birth_type = $13,
            puppies_born_count = $14,
            puppies_alive_count = $15,
            males_count = $16,
            females_count = $17,
            notes = $18,
            updated_at = $19,
            version = version + 1
        WHERE tenant_id = $1 AND id = $2 AND version = $3
        "#,
    )
    .bind(tenant.as_str())
    .bind(record.id.as_uuid())
    .bind(expected_version as i64)
    .bind(&record.name)
    .bind(record.status.as_str())
    .bind(record.heat_start_date)
    .bind(record.mating_date)
    .bind(record.mating_type.map(|t| t.as_str()))
    .bind(record.pregnancy_confirmed_date)
    .bind(record.pregnancy_test_method.map(|m| m.as_str()))
    .bind(record.expected_birth_date)
    .bind(record.actual_birth_date)
    .bind(record.birth_type.map(|t| t.as_str()))
    .bind(record.puppies_born_count as i32)
    .bind(record.puppies_alive_count as i32)
    .bind(record.males_count as i32)
    .bind(record.females_count as i32)
    .bind(record.notes.as_deref())
    .bind(record.updated_at.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(store_error("update litter"))?;

    if result.rows_affected() == 1 {
        return Ok(());
    }

    let current: Option<i64> =
        sqlx::query_scalar("SELECT version FROM litters WHERE tenant_id = $1 AND id = $2")
            .bind(tenant.as_str())
            .bind(record.id.as_uuid())
            .fetch_optional(&mut **tx)
            .await
            .map_err(store_error("check litter version"))?;

    match current {
        None => Err(DomainError::new(
            ErrorCode::LitterNotFound,
            format!("Litter not found: {}", record.id),
        )
        .with_detail("id", record.id.to_string())),
        Some(found) => Err(DomainError::conflict(format!(
            "Litter {} was modified concurrently (expected version {}, found {})",
            record.id, expected_version, found
        ))
        .with_detail("id", record.id.to_string())),
    }
}

async fn insert_puppy(tx: &mut Transaction<'_, Postgres>, puppy: &Puppy) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO puppies (
            id, tenant_id, litter_id, identifier, name, sex, color, status,
            birth_order, birth_weight, notes, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(puppy.id.as_uuid())
    .bind(puppy.tenant_id.as_str())
    .bind(puppy.litter_id.as_uuid())
    .bind(&puppy.identifier)
    .bind(puppy.name.as_deref())
    .bind(puppy.sex.as_str())
    .bind(puppy.color.as_deref())
    .bind(puppy.status.as_str())
    .bind(puppy.birth_order as i32)
    .bind(puppy.birth_weight)
    .bind(puppy.notes.as_deref())
    .bind(puppy.created_at.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(store_error("insert puppy"))?;

    Ok(())
}

async fn insert_event(
    tx: &mut Transaction<'_, Postgres>,
    record: &EventRecord,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO events (
            id, tenant_id, entity_type, entity_id, event_type, event_date, payload,
            reminder_date, reminder_completed, notes, created_at, deleted_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(record.id.as_uuid())
    .bind(record.tenant_id.as_str())
    .bind(record.entity.entity_type.as_str())
    .bind(record.entity.entity_id)
    .bind(record.event_type.as_str())
    .bind(record.event_date)
    .bind(Json(&record.payload))
    .bind(record.reminder_date)
    .bind(record.reminder_completed)
    .bind(record.notes.as_deref())
    .bind(record.created_at.as_datetime())
    .bind(record.deleted_at.map(|t| *t.as_datetime()))
    .execute(&mut **tx)
    .await
    .map_err(store_error("insert event"))?;

    Ok(())
}

async fn complete_reminder(
    tx: &mut Transaction<'_, Postgres>,
    tenant: &TenantId,
    id: EventId,
) -> Result<(), DomainError> {
    let reminder: Option<Option<NaiveDate>> = sqlx::query_scalar(
        r#"
        SELECT reminder_date FROM events
        WHERE tenant_id = $1 AND id = $2 AND deleted_at IS NULL
        FOR UPDATE
        "#,
    )
    .bind(tenant.as_str())
    .bind(id.as_uuid())
    .fetch_optional(&mut **tx)
    .await
    .map_err(store_error("lock event"))?;

    match reminder {
        None => Err(event_not_found(id)),
        Some(None) => Err(DomainError::validation(
            "reminder_date",
            format!("Event {} has no reminder", id),
        )),
        Some(Some(_)) => {
            sqlx::query("UPDATE events SET reminder_completed = TRUE WHERE tenant_id = $1 AND id = $2")
                .bind(tenant.as_str())
                .bind(id.as_uuid())
                .execute(&mut **tx)
                .await
                .map_err(store_error("complete reminder"))?;
            Ok(())
        }
    }
}

async fn soft_delete_event(
    tx: &mut Transaction<'_, Postgres>,
    tenant: &TenantId,
    id: EventId,
) -> Result<(), DomainError> {
    let result = sqlx::query(
        r#"
        UPDATE events SET deleted_at = NOW()
        WHERE tenant_id = $1 AND id = $2 AND deleted_at IS NULL
        "#,
    )
    .bind(tenant.as_str())
    .bind(id.as_uuid())
    .execute(&mut **tx)
    .await
    .map_err(store_error("delete event"))?;

    if result.rows_affected() == 0 {
        return Err(event_not_found(id));
    }
    Ok(())
}

fn event_not_found(id: EventId) -> DomainError {
    DomainError::new(ErrorCode::EventNotFound, format!("Event not found: {}", id))
        .with_detail("id", id.to_string())
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Mapping
// ════════════════════════════════════════════════════════════════════════════════

fn store_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |err| classify(context, err)
}

/// Maps serialization failures and deadlocks to `Conflict` so callers can retry.
fn classify(context: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &err {
        match db.code().as_deref() {
            Some("40001") | Some("40P01") => {
                return DomainError::conflict(format!("Failed to {}: {}", context, db.message()));
            }
            Some("23505") if db.constraint() == Some(PUPPY_IDENTIFIER_CONSTRAINT) => {
                return DomainError::validation(
                    "identifier",
                    "Puppy identifier is already used in this litter",
                );
            }
            Some("23505") => {
                return DomainError::conflict(format!("Failed to {}: {}", context, db.message()));
            }
            _ => {}
        }
    }
    DomainError::database(format!("Failed to {}: {}", context, err))
}

// ════════════════════════════════════════════════════════════════════════════════
// Row Conversions
// ════════════════════════════════════════════════════════════════════════════════

fn col<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to read column '{}': {}", name, e)))
}

fn parse_col<T>(row: &PgRow, name: &str, parse: fn(&str) -> Option<T>) -> Result<T, DomainError> {
    let value: String = col(row, name)?;
    parse(&value).ok_or_else(|| invalid_value(name, &value))
}

fn parse_opt_col<T>(
    row: &PgRow,
    name: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, DomainError> {
    let value: Option<String> = col(row, name)?;
    value
        .map(|v| parse(&v).ok_or_else(|| invalid_value(name, &v)))
        .transpose()
}

fn count_col(row: &PgRow, name: &str) -> Result<u32, DomainError> {
    let value: i32 = col(row, name)?;
    u32::try_from(value).map_err(|_| invalid_value(name, &value.to_string()))
}

fn invalid_value(column: &str, value: &str) -> DomainError {
    DomainError::database(format!("Invalid value '{}' in column '{}'", value, column))
}

fn tenant_col(row: &PgRow) -> Result<TenantId, DomainError> {
    let value: String = col(row, "tenant_id")?;
    TenantId::new(value).map_err(|e| DomainError::database(e.to_string()))
}

fn timestamp_col(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: DateTime<Utc> = col(row, name)?;
    Ok(Timestamp::from_datetime(value))
}

fn row_to_dog(row: &PgRow) -> Result<Dog, DomainError> {
    let sire_id: Option<Uuid> = col(row, "sire_id")?;
    let dam_id: Option<Uuid> = col(row, "dam_id")?;

    Ok(Dog {
        id: DogId::from_uuid(col(row, "id")?),
        tenant_id: tenant_col(row)?,
        name: col(row, "name")?,
        registered_name: col(row, "registered_name")?,
        registration_number: col(row, "registration_number")?,
        breed: col(row, "breed")?,
        color: col(row, "color")?,
        sex: parse_col(row, "sex", Sex::parse)?,
        birth_date: col(row, "birth_date")?,
        sire_id: sire_id.map(DogId::from_uuid),
        dam_id: dam_id.map(DogId::from_uuid),
        status: parse_col(row, "status", DogStatus::parse)?,
    })
}

fn row_to_litter(row: &PgRow) -> Result<Litter, DomainError> {
    let version: i64 = col(row, "version")?;

    Ok(Litter::reconstitute(LitterRecord {
        id: LitterId::from_uuid(col(row, "id")?),
        tenant_id: tenant_col(row)?,
        name: col(row, "name")?,
        dam_id: DogId::from_uuid(col(row, "dam_id")?),
        sire_id: DogId::from_uuid(col(row, "sire_id")?),
        status: parse_col(row, "status", LitterStatus::parse)?,
        heat_start_date: col(row, "heat_start_date")?,
        mating_date: col(row, "mating_date")?,
        mating_type: parse_opt_col(row, "mating_type", MatingType::parse)?,
        pregnancy_confirmed_date: col(row, "pregnancy_confirmed_date")?,
        pregnancy_test_method: parse_opt_col(
            row,
            "pregnancy_test_method",
            PregnancyTestMethod::parse,
        )?,
        expected_birth_date: col(row, "expected_birth_date")?,
        actual_birth_date: col(row, "actual_birth_date")?,
        birth_type: parse_opt_col(row, "birth_type", BirthType::parse)?,
        puppies_born_count: count_col(row, "puppies_born_count")?,
        puppies_alive_count: count_col(row, "puppies_alive_count")?,
        males_count: count_col(row, "males_count")?,
        females_count: count_col(row, "females_count")?,
        notes: col(row, "notes")?,
        version: u64::try_from(version).map_err(|_| invalid_value("version", &version.to_string()))?,
        created_at: timestamp_col(row, "created_at")?,
        updated_at: timestamp_col(row, "updated_at")?,
    }))
}

fn row_to_puppy(row: &PgRow) -> Result<Puppy, DomainError> {
    Ok(Puppy {
        id: PuppyId::from_uuid(col(row, "id")?),
        tenant_id: tenant_col(row)?,
        litter_id: LitterId::from_uuid(col(row, "litter_id")?),
        identifier: col(row, "identifier")?,
        name: col(row, "name")?,
        sex: parse_col(row, "sex", Sex::parse)?,
        color: col(row, "color")?,
        status: parse_col(row, "status", PuppyStatus::parse)?,
        birth_order: count_col(row, "birth_order")?,
        birth_weight: col(row, "birth_weight")?,
        notes: col(row, "notes")?,
        created_at: timestamp_col(row, "created_at")?,
    })
}

fn row_to_event(row: &PgRow) -> Result<Event, DomainError> {
    let payload: Json<Payload> = col(row, "payload")?;
    let deleted_at: Option<DateTime<Utc>> = col(row, "deleted_at")?;

    Ok(Event::reconstitute(EventRecord {
        id: EventId::from_uuid(col(row, "id")?),
        tenant_id: tenant_col(row)?,
        entity: EntityRef {
            entity_type: parse_col(row, "entity_type", EntityType::parse)?,
            entity_id: col(row, "entity_id")?,
        },
        event_type: parse_col(row, "event_type", EventType::parse)?,
        event_date: col(row, "event_date")?,
        payload: payload.0,
        reminder_date: col(row, "reminder_date")?,
        reminder_completed: col(row, "reminder_completed")?,
        notes: col(row, "notes")?,
        created_at: timestamp_col(row, "created_at")?,
        deleted_at: deleted_at.map(Timestamp::from_datetime),
    }))
}
