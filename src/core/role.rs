//! User role store - the tri-state customer/contractor flag
//!
//! The role gates which UI variant a visitor sees. It is the only piece of
//! state that survives a restart: one key in a YAML file under the config
//! directory (the local-storage analog). Updates are reducer-style: an
//! action goes in, storage and in-memory state change together.

use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The visitor's role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Customer,
    Contractor,
}

impl UserType {
    /// The exact string persisted to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Customer => "customer",
            UserType::Contractor => "contractor",
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserType::Customer),
            "contractor" => Ok(UserType::Contractor),
            other => Err(RoleError::Invalid {
                value: other.to_string(),
            }),
        }
    }
}

/// Reducer actions for the role store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleAction {
    /// Select a role and persist it
    Select(UserType),
    /// Unset the role and remove the persisted key
    Clear,
}

/// Errors from role storage and parsing
#[derive(Debug, Error)]
pub enum RoleError {
    #[error("invalid role '{value}' (expected 'customer' or 'contractor')")]
    Invalid { value: String },

    #[error("role storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("malformed role file: {message}")]
    Format { message: String },
}

/// Backing storage for the persisted role key
pub trait RoleStorage {
    /// Read the raw persisted value, if any
    fn read(&self) -> Result<Option<String>, RoleError>;

    /// Persist the value, or remove the key when `None`
    fn write(&self, value: Option<&str>) -> Result<(), RoleError>;
}

/// On-disk shape of the role file: a YAML mapping with one key
#[derive(Debug, Default, Serialize, Deserialize)]
struct RoleFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    user_type: Option<String>,
}

/// YAML-file storage under the config directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn load_file(&self) -> Result<RoleFile, RoleError> {
        if !self.path.exists() {
            return Ok(RoleFile::default());
        }
        let contents = fs::read_to_string(&self.path)?;
        serde_yml::from_str(&contents).map_err(|e| RoleError::Format {
            message: e.to_string(),
        })
    }
}

impl RoleStorage for FileStorage {
    fn read(&self) -> Result<Option<String>, RoleError> {
        Ok(self.load_file()?.user_type)
    }

    fn write(&self, value: Option<&str>) -> Result<(), RoleError> {
        let mut file = self.load_file()?;
        file.user_type = value.map(String::from);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yml::to_string(&file).map_err(|e| RoleError::Format {
            message: e.to_string(),
        })?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }
}

/// In-memory storage for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoleStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, RoleError> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: Option<&str>) -> Result<(), RoleError> {
        *self.value.borrow_mut() = value.map(String::from);
        Ok(())
    }
}

/// The role store: current value plus its backing storage
///
/// Any state is reachable from any state; there is no transition graph here,
/// only select and clear.
#[derive(Debug)]
pub struct RoleStore<S: RoleStorage> {
    current: Option<UserType>,
    storage: S,
}

impl<S: RoleStorage> RoleStore<S> {
    /// Read the persisted value once and build the store
    ///
    /// An absent key means unset. A persisted string that is not one of the
    /// two valid roles is an error rather than being carried along silently.
    pub fn load(storage: S) -> Result<Self, RoleError> {
        let current = match storage.read()? {
            Some(raw) => Some(raw.parse()?),
            None => None,
        };
        Ok(Self { current, storage })
    }

    /// Apply a reducer action, updating storage and memory together
    pub fn apply(&mut self, action: RoleAction) -> Result<(), RoleError> {
        match action {
            RoleAction::Select(role) => {
                self.storage.write(Some(role.as_str()))?;
                self.current = Some(role);
            }
            RoleAction::Clear => {
                self.storage.write(None)?;
                self.current = None;
            }
        }
        Ok(())
    }

    /// The tri-state value: selected role or unset
    pub fn current(&self) -> Option<UserType> {
        self.current
    }

    /// Whether a role has been selected yet
    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}
