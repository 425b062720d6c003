use serde::{de::DeserializeOwned, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::config::Theme;
use crate::ledger::{Product, Transaction};

use super::{Result, StorageBackend};

const DEFAULT_DIR_NAME: &str = ".barber_core";
const TMP_SUFFIX: &str = "tmp";

// Key names carry the v3 suffix of the data format they serialize.
const TRANSACTIONS_KEY: &str = "transactions-v3";
const PRODUCTS_KEY: &str = "products-v3";
const THEME_KEY: &str = "theme";

/// Stores each logical key as one pretty-printed JSON file under the data
/// directory. Writes go through a temp file and a rename, so a failed write
/// never corrupts the previous value.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn read_key<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write_key<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let json = serde_json::to_string_pretty(value)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn load_transactions(&self) -> Result<Option<Vec<Transaction>>> {
        self.read_key(TRANSACTIONS_KEY)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        self.write_key(TRANSACTIONS_KEY, &transactions)
    }

    fn load_products(&self) -> Result<Option<Vec<Product>>> {
        self.read_key(PRODUCTS_KEY)
    }

    fn save_products(&self, products: &[Product]) -> Result<()> {
        self.write_key(PRODUCTS_KEY, &products)
    }

    fn load_theme(&self) -> Result<Option<Theme>> {
        self.read_key(THEME_KEY)
    }

    fn save_theme(&self, theme: Theme) -> Result<()> {
        self.write_key(THEME_KEY, &theme)
    }
}

/// Application data directory, `~/.barber_core` unless overridden through
/// the `BARBER_CORE_HOME` environment variable.
pub fn default_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("BARBER_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
