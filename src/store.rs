//! Wallet file persistence
//!
//! Wallets are saved as pretty-printed JSON, one file per wallet. Batch runs
//! use `demos_wallet_{i}.json` names; single creations use a timestamped
//! name. Loading tolerates the legacy `ed25519Address` field and skips files
//! without a mnemonic, as older wallet files in the wild lack one.

use crate::error::{FaucetError, FaucetResult};
use crate::wallet::WalletIdentity;
use chrono::Utc;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Persistence collaborator for the batch orchestrator
///
/// A trait seam so orchestrator tests can inject in-memory or failing stores.
pub trait WalletStore: Send + Sync {
    /// Persist one wallet of a batch run, keyed by its 1-based index
    fn save_batch_wallet(&self, wallet: &WalletIdentity, index: usize) -> FaucetResult<PathBuf>;
}

/// Filesystem-backed wallet store
pub struct FsWalletStore {
    dir: PathBuf,
}

impl FsWalletStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    fn write_wallet(&self, wallet: &WalletIdentity, filename: &str) -> FaucetResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.dir.join(filename);
        let json = serde_json::to_string_pretty(wallet)?;
        fs::write(&path, json)?;

        info!("Wallet saved to {}", path.display());
        Ok(path)
    }

    /// Save a single wallet under a timestamped filename
    pub fn save_wallet(&self, wallet: &WalletIdentity) -> FaucetResult<PathBuf> {
        let filename = format!("wallet_{}.json", Utc::now().format("%Y%m%d_%H%M%S"));
        self.write_wallet(wallet, &filename)
    }
}

impl WalletStore for FsWalletStore {
    fn save_batch_wallet(&self, wallet: &WalletIdentity, index: usize) -> FaucetResult<PathBuf> {
        self.write_wallet(wallet, &format!("demos_wallet_{}.json", index))
    }
}

/// A wallet loaded back from disk
#[derive(Debug, Clone)]
pub struct StoredWallet {
    pub address: String,
    pub mnemonic: String,
    pub path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct WalletFile {
    address: Option<String>,
    #[serde(rename = "ed25519Address")]
    ed25519_address: Option<String>,
    mnemonic: Option<String>,
}

fn is_wallet_file(path: &Path) -> bool {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    name.ends_with(".json") && (name.starts_with("wallet-") || name.starts_with("demos_wallet_"))
}

fn read_wallet_file(path: &Path) -> FaucetResult<StoredWallet> {
    let contents = fs::read_to_string(path)?;
    let file: WalletFile = serde_json::from_str(&contents)?;

    let address = file
        .address
        .or(file.ed25519_address)
        .ok_or_else(|| FaucetError::InvalidAddress(format!("{}: no address field", path.display())))?;

    let mnemonic = file
        .mnemonic
        .ok_or_else(|| FaucetError::MissingMnemonic(path.display().to_string()))?;

    Ok(StoredWallet {
        address,
        mnemonic,
        path: path.to_path_buf(),
    })
}

/// Load all wallet files from `dir`, sorted by filename
///
/// Unreadable or incomplete files are skipped with a warning; one bad file
/// never fails the scan.
pub fn load_wallets<P: AsRef<Path>>(dir: P) -> FaucetResult<Vec<StoredWallet>> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir.as_ref())?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_wallet_file(path))
        .collect();
    paths.sort();

    let mut wallets = Vec::new();
    for path in paths {
        match read_wallet_file(&path) {
            Ok(wallet) => wallets.push(wallet),
            Err(e) => warn!("Skipping {}: {}", path.display(), e),
        }
    }

    Ok(wallets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_batch_wallets() {
        let dir = tempdir().unwrap();
        let store = FsWalletStore::new(dir.path());

        for i in 1..=3 {
            let wallet = WalletIdentity::generate();
            let path = store.save_batch_wallet(&wallet, i).unwrap();
            assert_eq!(
                path.file_name().unwrap().to_str().unwrap(),
                format!("demos_wallet_{}.json", i)
            );
        }

        let loaded = load_wallets(dir.path()).unwrap();
        assert_eq!(loaded.len(), 3);
        for wallet in &loaded {
            assert!(wallet.address.starts_with("0x"));
            assert_eq!(wallet.mnemonic.split(' ').count(), 12);
        }
    }

    #[test]
    fn test_load_accepts_legacy_address_field() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("wallet-1.json"),
            r#"{"ed25519Address": "0xlegacy", "mnemonic": "a b c"}"#,
        )
        .unwrap();

        let loaded = load_wallets(dir.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].address, "0xlegacy");
    }

    #[test]
    fn test_load_skips_files_without_mnemonic() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("wallet-1.json"),
            r#"{"address": "0xaaa"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("wallet-2.json"),
            r#"{"address": "0xbbb", "mnemonic": "a b c"}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not a wallet").unwrap();

        let loaded = load_wallets(dir.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].address, "0xbbb");
    }

    #[test]
    fn test_load_sorted_by_filename() {
        let dir = tempdir().unwrap();
        for i in [3, 1, 2] {
            fs::write(
                dir.path().join(format!("wallet-{}.json", i)),
                format!(r#"{{"address": "0x{}", "mnemonic": "m"}}"#, i),
            )
            .unwrap();
        }

        let loaded = load_wallets(dir.path()).unwrap();
        let addresses: Vec<&str> = loaded.iter().map(|w| w.address.as_str()).collect();
        assert_eq!(addresses, vec!["0x1", "0x2", "0x3"]);
    }
}
