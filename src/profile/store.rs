//! In-memory profile store with synchronous change notification
//!
//! One writer (the input form), any number of readers. Every change is written
//! back to storage; write failures are logged and dropped.

use log::{debug, warn};
use serde_json::Value;

use super::data::{coerce_number, FinancialProfile, ProfileField};
use super::storage::KeyValueStorage;

/// Storage key holding the JSON-serialized profile
pub const STORAGE_KEY: &str = "finance:data:v1";

/// Handle returned by [`ProfileStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FinancialProfile)>;

/// Holds the current profile and persists every change
pub struct ProfileStore<S: KeyValueStorage> {
    profile: FinancialProfile,
    storage: S,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl<S: KeyValueStorage> ProfileStore<S> {
    /// Load the persisted profile, falling back to defaults
    ///
    /// Partial records are merged field by field over the default profile.
    pub fn load(storage: S) -> Self {
        let profile = match storage.get(STORAGE_KEY) {
            Ok(Some(raw)) => parse_profile(&raw),
            Ok(None) => {
                debug!("No stored profile under {}, using defaults", STORAGE_KEY);
                FinancialProfile::default()
            }
            Err(e) => {
                warn!("Failed to read stored profile, using defaults: {}", e);
                FinancialProfile::default()
            }
        };

        Self::with_profile(storage, profile)
    }

    /// Store seeded with an explicit profile (nothing is read or written)
    pub fn with_profile(storage: S, profile: FinancialProfile) -> Self {
        Self {
            profile,
            storage,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get(&self) -> &FinancialProfile {
        &self.profile
    }

    /// Replace the profile, notify subscribers, then write back
    pub fn set(&mut self, profile: FinancialProfile) {
        self.profile = profile;

        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.profile);
        }

        self.persist();
    }

    /// Apply one form edit: parse the text and replace a single field
    ///
    /// Growth is entered in percent. Unparsable text coerces to 0.
    pub fn edit(&mut self, field: ProfileField, text: &str) {
        let mut value = coerce_number(text);
        if field.is_percentage() {
            value /= 100.0;
        }
        debug!("Edit {} = {} (from {:?})", field, value, text);
        self.set(self.profile.with_field(field, value));
    }

    /// Register a callback invoked synchronously after every change
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&FinancialProfile) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber; returns false if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.profile) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize profile, not saved: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(STORAGE_KEY, &json) {
            warn!("Failed to save profile, change kept in memory only: {}", e);
        }
    }
}

/// Parse a stored record, merging each numeric field over the defaults
fn parse_profile(raw: &str) -> FinancialProfile {
    let defaults = FinancialProfile::default();
    if raw.trim().is_empty() {
        return defaults;
    }

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Stored profile is not valid JSON, using defaults: {}", e);
            return defaults;
        }
    };

    let Some(record) = value.as_object() else {
        warn!("Stored profile is not a JSON object, using defaults");
        return defaults;
    };

    ProfileField::ALL.iter().fold(defaults, |profile, &field| {
        match record.get(field.key()).and_then(Value::as_f64) {
            Some(v) => profile.with_field(field, v),
            None => profile,
        }
    })
}
