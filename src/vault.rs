use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::{from_reader, from_value, Value};
use tracing::debug;

use crate::error::ScheduleError;

const CONFIG_FILE: &str = "config.json";

pub trait Vault {
    fn path(&self) -> &PathBuf;
    fn read_vault_values<T: DeserializeOwned>(&self, name: String) -> Result<T, ScheduleError>;
}

/// A section of `config.json`, stored under `KEY`.
pub trait VaultReadable: DeserializeOwned {
    const KEY: &'static str;

    fn from_vault<V: Vault>(vault: &V) -> Result<Self, ScheduleError> {
        vault.read_vault_values(Self::KEY.to_string())
    }
}

pub struct VaultImpl {
    pub path: PathBuf,
}

impl Vault for VaultImpl {
    fn path(&self) -> &PathBuf {
        &self.path
    }

    /// A missing section reads as `null`, which optional sections accept.
    fn read_vault_values<T: DeserializeOwned>(&self, name: String) -> Result<T, ScheduleError> {
        let path = self.path().join(CONFIG_FILE);
        debug!(path = %path.display(), section = %name, "reading vault section");

        let file = File::open(&path).map_err(|why| {
            ScheduleError::Vault(format!("Could not open {}: {}", path.display(), why))
        })?;
        let mut config: Value = from_reader(BufReader::new(file)).map_err(|why| {
            ScheduleError::Vault(format!("Could not parse {}: {}", path.display(), why))
        })?;

        let section = config
            .get_mut(&name)
            .map(Value::take)
            .unwrap_or(Value::Null);
        from_value(section).map_err(|why| {
            ScheduleError::Vault(format!("Could not read section {}: {}", name, why))
        })
    }
}

/// Rent changes kept in their own section, next to `rent`.
pub type RentChangesVaultValue = Option<Value>;
impl VaultReadable for RentChangesVaultValue {
    const KEY: &'static str = "rent_changes";
}
