//! Patient record, assessment history and progress analytics.
//!
//! A [`Session`] owns the resident [`UserRecord`] for this device and a
//! [`Store`] it is persisted through. Assessments are appended to the record's
//! history as [`AssessmentEntry`] values, and [`summarize`] turns that history
//! into per-category [`Analytics`].

mod analytics;
pub mod checkup;
mod credential;
mod entry;
mod error;
mod record;
mod remote;
mod session;
mod store;

pub use analytics::{Analytics, PhobiaAnalytics, RECENT_ACTIVITY_LEN, Trend, summarize};
pub use credential::{Credential, MIN_PASSWORD_LEN, check_password};
pub use entry::{AssessmentEntry, EntryKind, MAX_SCORE, Severity, clamp_score, mean_score};
pub use error::{AccountError, AuthErrorCode};
pub use record::{DEFAULT_NAME, UserRecord};
pub use remote::{InMemoryAccountService, RemoteAccountService, RemoteStore, SharedAccountService};
pub use session::{Recorded, Session};
pub use store::{FileStore, LANGUAGE_FILE, MemoryStore, Store, USER_FILE, UserStore};
