//! Snapshot persistence.
//!
//! The whole application state is written as one JSON document per key under
//! a root directory. Loading never fails: a missing key falls back to its
//! default, and any unreadable key discards the whole snapshot and starts
//! from the signed-out state (logged, not surfaced).

use std::{
    fs,
    path::PathBuf,
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use uuid::Uuid;

use crate::{Business, LedgerError, ResultLedger, User};

const AUTH_KEY: &str = "auth";
const USER_KEY: &str = "user";
const BUSINESSES_KEY: &str = "businesses";
const ACTIVE_BUSINESS_KEY: &str = "active_business";

/// One full application snapshot across all store keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub signed_in: bool,
    pub user: Option<User>,
    pub businesses: Vec<Business>,
    pub active_business: Option<Uuid>,
}

/// Key-value snapshot store backed by JSON files.
#[derive(Clone, Debug)]
pub struct SnapshotStore {
    root: PathBuf,
}

impl SnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, String> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|err| err.to_string())?;
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| err.to_string())
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> ResultLedger<()> {
        let raw = serde_json::to_vec_pretty(value)
            .map_err(|err| LedgerError::Persistence(err.to_string()))?;
        let path = self.key_path(key);
        let tmp = self.root.join(format!("{key}.json.tmp"));
        fs::write(&tmp, raw).map_err(|err| LedgerError::Persistence(err.to_string()))?;
        fs::rename(&tmp, &path).map_err(|err| LedgerError::Persistence(err.to_string()))?;
        Ok(())
    }

    /// Loads the persisted snapshot.
    ///
    /// Missing keys fall back to their defaults. Any key that cannot be read
    /// or parsed resets the whole snapshot to the signed-out default.
    pub fn load(&self) -> Snapshot {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err((key, reason)) => {
                tracing::warn!(key, reason = %reason, "snapshot unreadable, starting fresh");
                Snapshot::default()
            }
        }
    }

    fn try_load(&self) -> Result<Snapshot, (&'static str, String)> {
        let signed_in = self
            .read_key::<bool>(AUTH_KEY)
            .map_err(|reason| (AUTH_KEY, reason))?
            .unwrap_or(false);
        let user = self
            .read_key::<Option<User>>(USER_KEY)
            .map_err(|reason| (USER_KEY, reason))?
            .unwrap_or(None);
        let businesses = self
            .read_key::<Vec<Business>>(BUSINESSES_KEY)
            .map_err(|reason| (BUSINESSES_KEY, reason))?
            .unwrap_or_default();
        let active_business = self
            .read_key::<Option<Uuid>>(ACTIVE_BUSINESS_KEY)
            .map_err(|reason| (ACTIVE_BUSINESS_KEY, reason))?
            .unwrap_or(None);

        Ok(Snapshot {
            signed_in,
            user,
            businesses,
            active_business,
        })
    }

    /// Persists every key of the snapshot, each via a temp file and rename.
    pub fn save(&self, snapshot: &Snapshot) -> ResultLedger<()> {
        fs::create_dir_all(&self.root).map_err(|err| LedgerError::Persistence(err.to_string()))?;
        self.write_key(AUTH_KEY, &snapshot.signed_in)?;
        self.write_key(USER_KEY, &snapshot.user)?;
        self.write_key(BUSINESSES_KEY, &snapshot.businesses)?;
        self.write_key(ACTIVE_BUSINESS_KEY, &snapshot.active_business)?;
        Ok(())
    }
}
