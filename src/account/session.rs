use chrono::Utc;

use super::{
    AccountError, Analytics, AssessmentEntry, Credential, EntryKind, Store, UserRecord, UserStore,
    check_password, checkup, summarize,
};

/// Result of recording an assessment.
///
/// The entry is kept in memory either way; `persisted` says whether the store
/// accepted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub entry: AssessmentEntry,
    pub persisted: bool,
}

/// The resident patient record on this device and whether it is checked in.
#[derive(Debug)]
pub struct Session {
    store: Store,
    user: Option<UserRecord>,
    checked_in: bool,
    saved: bool,
}

impl Session {
    /// Load whatever record the store holds. A record that cannot be read is
    /// treated as no record.
    pub fn open(store: Store) -> Self {
        let user = match store.load() {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "could not load patient record");
                None
            }
        };
        let checked_in = user.is_some();
        Self {
            store,
            user,
            checked_in,
            saved: true,
        }
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Whether the store holds the resident record as it is in memory.
    ///
    /// False after a save failed; the record then lives only in this session.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Create a new resident record, replacing any previous one.
    ///
    /// The password is optional; an empty one counts as none.
    pub fn register(
        &mut self,
        name: &str,
        password: Option<&str>,
    ) -> Result<&UserRecord, AccountError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AccountError::MissingName);
        }
        let credential = match password.filter(|p| !p.is_empty()) {
            Some(password) => {
                check_password(password)?;
                Some(Credential::new(password)?)
            }
            None => None,
        };

        let mut record = UserRecord::new(name, Utc::now());
        record.credential = credential;
        Ok(self.install(record))
    }

    /// Register with a hosted account when the store is remote. Other stores
    /// keep the email on a local record.
    pub fn register_with_email(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&UserRecord, AccountError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(AccountError::MissingName);
        }
        if email.is_empty() {
            return Err(AccountError::MissingEmail);
        }
        check_password(password)?;

        let mut record = UserRecord::new(name, Utc::now());
        record.email = Some(email.to_string());
        match &mut self.store {
            Store::Remote(remote) => {
                let uid = remote.create_account(email, password)?;
                record.id = uid.chars().take(8).collect();
                record.uid = Some(uid);
            }
            _ => record.credential = Some(Credential::new(password)?),
        }
        Ok(self.install(record))
    }

    /// Open the check-in gate. Records without a credential need no password.
    pub fn check_in(&mut self, password: Option<&str>) -> Result<&UserRecord, AccountError> {
        let Some(user) = &self.user else {
            return Err(AccountError::NoRecord);
        };
        if !user.validate_credential(password.unwrap_or_default()) {
            return Err(AccountError::IncorrectPassword);
        }
        self.checked_in = true;
        Ok(user)
    }

    /// Sign in to a hosted account and load its record. Other stores fall
    /// back to the local password check.
    pub fn sign_in_with_email(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<&UserRecord, AccountError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AccountError::MissingEmail);
        }
        if password.is_empty() {
            return Err(AccountError::MissingPassword);
        }

        let remote = match &mut self.store {
            Store::Remote(remote) => remote,
            _ => return self.check_in(Some(password)),
        };
        let uid = remote.sign_in(email, password)?;
        let loaded = remote
            .load()
            .map_err(|e| AccountError::Storage(format!("{:#}", e)))?;
        let record = match loaded {
            Some(record) => record,
            None => {
                let mut record = UserRecord::new("", Utc::now());
                record.id = uid.chars().take(8).collect();
                record.uid = Some(uid);
                record.email = Some(email.to_string());
                record
            }
        };
        Ok(self.install(record))
    }

    /// End the session. The record stays on the device.
    pub fn check_out(&mut self) {
        self.checked_in = false;
    }

    /// Forget the resident record.
    pub fn reset(&mut self) -> Result<(), AccountError> {
        self.store
            .clear()
            .map_err(|e| AccountError::Storage(format!("{:#}", e)))?;
        self.user = None;
        self.checked_in = false;
        self.saved = true;
        Ok(())
    }

    pub fn record_diagnostic(&mut self, category: &str, answers: Vec<u8>, score: u8) -> Recorded {
        self.record(category, EntryKind::Diagnostic, answers, score)
    }

    /// Record a post-experience checkup, scored as the mean of its answers.
    pub fn record_checkup(&mut self, category: &str, answers: Vec<u8>) -> Recorded {
        let score = checkup::score_answers(&answers);
        self.record(category, EntryKind::Checkup, answers, score)
    }

    /// Entries for one category, or all of them. Empty without a record.
    pub fn history(&self, category: Option<&str>) -> Vec<&AssessmentEntry> {
        self.user
            .as_ref()
            .map(|user| user.history(category))
            .unwrap_or_default()
    }

    pub fn has_diagnostic(&self, category: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.has_diagnostic(category))
    }

    pub fn analytics(&self) -> Option<Analytics> {
        let user = self.user.as_ref()?;
        summarize(&user.history, user.created)
    }

    /// The persisted language code, if any.
    pub fn language(&self) -> Option<String> {
        match self.store.load_language() {
            Ok(code) => code,
            Err(e) => {
                tracing::warn!(error = %format!("{:#}", e), "could not read saved language");
                None
            }
        }
    }

    /// Persist the language code. Returns whether it was saved.
    pub fn save_language(&mut self, code: &str) -> bool {
        match self.store.save_language(code) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(language = code, error = %format!("{:#}", e), "could not save language");
                false
            }
        }
    }

    fn record(
        &mut self,
        category: &str,
        kind: EntryKind,
        answers: Vec<u8>,
        score: u8,
    ) -> Recorded {
        if self.user.is_none() {
            self.checked_in = true;
        }
        let user = self
            .user
            .get_or_insert_with(|| UserRecord::new("", Utc::now()));
        let entry = user.append(category, kind, answers, score, Utc::now()).clone();
        let persisted = persist(&mut self.store, user);
        self.saved = persisted;
        Recorded { entry, persisted }
    }

    fn install(&mut self, record: UserRecord) -> &UserRecord {
        self.checked_in = true;
        let user = self.user.insert(record);
        self.saved = persist(&mut self.store, user);
        user
    }
}

fn persist(store: &mut Store, user: &UserRecord) -> bool {
    match store.save(user) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %format!("{:#}", e), "patient record was not saved");
            false
        }
    }
}
