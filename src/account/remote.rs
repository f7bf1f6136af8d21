use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Result, bail};
use sha2::{Digest, Sha256};

use super::{AuthErrorCode, Credential, MIN_PASSWORD_LEN, UserRecord, UserStore};

/// A hosted account provider: email/password sign-in plus one document per
/// account holding the patient record.
pub trait RemoteAccountService {
    /// Create an account and return its uid.
    fn create_account(&self, email: &str, password: &str) -> Result<String, AuthErrorCode>;
    /// Sign in and return the account's uid.
    fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthErrorCode>;
    fn get_document(&self, uid: &str) -> Result<Option<UserRecord>, AuthErrorCode>;
    /// Store the record for `uid`. The uid itself is not part of the document.
    fn set_document(&self, uid: &str, record: &UserRecord) -> Result<(), AuthErrorCode>;
}

pub type SharedAccountService = Arc<dyn RemoteAccountService + Send + Sync>;

/// Account provider kept in memory, for tests and offline use.
#[derive(Debug, Default)]
pub struct InMemoryAccountService {
    accounts: Mutex<HashMap<String, Account>>,
    documents: Mutex<HashMap<String, UserRecord>>,
    offline: AtomicBool,
}

#[derive(Debug)]
struct Account {
    uid: String,
    credential: Credential,
}

impl InMemoryAccountService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with `NetworkRequestFailed` while set.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), AuthErrorCode> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AuthErrorCode::NetworkRequestFailed);
        }
        Ok(())
    }
}

fn poisoned<T>(_: T) -> AuthErrorCode {
    AuthErrorCode::Other {
        code: "internal".to_string(),
        message: None,
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn uid_for(email: &str) -> String {
    let digest = hex::encode(Sha256::digest(email.as_bytes()));
    digest[..28].to_string()
}

impl RemoteAccountService for InMemoryAccountService {
    fn create_account(&self, email: &str, password: &str) -> Result<String, AuthErrorCode> {
        self.ensure_online()?;
        let email = email.trim().to_ascii_lowercase();
        if !is_valid_email(&email) {
            return Err(AuthErrorCode::InvalidEmail);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthErrorCode::WeakPassword);
        }

        let mut accounts = self.accounts.lock().map_err(poisoned)?;
        if accounts.contains_key(&email) {
            return Err(AuthErrorCode::EmailAlreadyInUse);
        }
        let credential = Credential::new(password).map_err(|e| AuthErrorCode::Other {
            code: "internal".to_string(),
            message: Some(e.to_string()),
        })?;
        let uid = uid_for(&email);
        accounts.insert(
            email,
            Account {
                uid: uid.clone(),
                credential,
            },
        );
        Ok(uid)
    }

    fn sign_in(&self, email: &str, password: &str) -> Result<String, AuthErrorCode> {
        self.ensure_online()?;
        let email = email.trim().to_ascii_lowercase();
        if !is_valid_email(&email) {
            return Err(AuthErrorCode::InvalidEmail);
        }
        let accounts = self.accounts.lock().map_err(poisoned)?;
        let account = accounts.get(&email).ok_or(AuthErrorCode::UserNotFound)?;
        if !account.credential.validate(password) {
            return Err(AuthErrorCode::WrongPassword);
        }
        Ok(account.uid.clone())
    }

    fn get_document(&self, uid: &str) -> Result<Option<UserRecord>, AuthErrorCode> {
        self.ensure_online()?;
        let documents = self.documents.lock().map_err(poisoned)?;
        Ok(documents.get(uid).cloned().map(|mut record| {
            record.uid = Some(uid.to_string());
            record
        }))
    }

    fn set_document(&self, uid: &str, record: &UserRecord) -> Result<(), AuthErrorCode> {
        self.ensure_online()?;
        let mut document = record.clone();
        document.uid = None;
        self.documents
            .lock()
            .map_err(poisoned)?
            .insert(uid.to_string(), document);
        Ok(())
    }
}

/// Keeps the resident record in the signed-in account's document.
///
/// The language preference stays on the device.
pub struct RemoteStore {
    service: SharedAccountService,
    uid: Option<String>,
    language: Option<String>,
}

impl fmt::Debug for RemoteStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteStore")
            .field("uid", &self.uid)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl RemoteStore {
    pub fn new(service: SharedAccountService) -> Self {
        Self {
            service,
            uid: None,
            language: None,
        }
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn create_account(&mut self, email: &str, password: &str) -> Result<String, AuthErrorCode> {
        let uid = self.service.create_account(email, password)?;
        self.uid = Some(uid.clone());
        Ok(uid)
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<String, AuthErrorCode> {
        let uid = self.service.sign_in(email, password)?;
        self.uid = Some(uid.clone());
        Ok(uid)
    }

    pub fn sign_out(&mut self) {
        self.uid = None;
    }
}

impl UserStore for RemoteStore {
    fn load(&self) -> Result<Option<UserRecord>> {
        match &self.uid {
            Some(uid) => Ok(self.service.get_document(uid)?),
            None => Ok(None),
        }
    }

    fn save(&mut self, record: &UserRecord) -> Result<()> {
        let Some(uid) = record.uid.as_deref().or(self.uid.as_deref()) else {
            bail!("No signed-in account to save the patient record to");
        };
        self.service.set_document(uid, record)?;
        tracing::debug!(uid, entries = record.history.len(), "saved patient record remotely");
        Ok(())
    }

    /// Signs out. The account's document is left in place.
    fn clear(&mut self) -> Result<()> {
        self.sign_out();
        Ok(())
    }

    fn load_language(&self) -> Result<Option<String>> {
        Ok(self.language.clone())
    }

    fn save_language(&mut self, code: &str) -> Result<()> {
        self.language = Some(code.to_string());
        Ok(())
    }
}
