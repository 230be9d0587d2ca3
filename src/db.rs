//! MongoDB connection bootstrap and typed collection access.

use std::time::Duration;

use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Collection, Database,
};

use crate::{
    config::Config,
    error::AppError,
    models::{
        AttendanceRecord, Department, Employee, LeaveRequest, Notification, PayrollEntry,
        TaskItem, User,
    },
};

/// Server-selection timeout for the boot-time connection attempt.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Database name used when the connection string names none.
const FALLBACK_DATABASE: &str = "hr";

/// Connect to MongoDB and verify reachability before returning.
///
/// The ping makes the database dependency explicit: the caller must not start
/// listening until this resolves. There is no retry and no degraded mode; a
/// failure here is fatal at boot.
///
/// # Errors
/// Returns [`AppError::Database`] on a malformed URI, a selection timeout, or
/// any other connection failure.
pub async fn connect(config: &Config) -> Result<Store, AppError> {
    let mut options = ClientOptions::parse(&config.mongo_uri).await?;
    options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

    let client = Client::with_options(options)?;
    let database = client
        .default_database()
        .unwrap_or_else(|| client.database(FALLBACK_DATABASE));

    database.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("MongoDB connected successfully (database: {})", database.name());

    Ok(Store::new(database))
}

/// Shared handle over the application's collections, created once at startup
/// and cloned into every handler through the router state.
#[derive(Clone)]
pub struct Store {
    database: Database,
}

impl Store {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn users(&self) -> Collection<User> {
        self.database.collection("users")
    }

    pub fn employees(&self) -> Collection<Employee> {
        self.database.collection("employees")
    }

    pub fn departments(&self) -> Collection<Department> {
        self.database.collection("departments")
    }

    pub fn attendance(&self) -> Collection<AttendanceRecord> {
        self.database.collection("attendance")
    }

    pub fn leaves(&self) -> Collection<LeaveRequest> {
        self.database.collection("leaves")
    }

    pub fn payroll(&self) -> Collection<PayrollEntry> {
        self.database.collection("payroll")
    }

    pub fn notifications(&self) -> Collection<Notification> {
        self.database.collection("notifications")
    }

    pub fn tasks(&self) -> Collection<TaskItem> {
        self.database.collection("tasks")
    }
}
