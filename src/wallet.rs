//! Demo wallet generation
//!
//! Produces throwaway identities for faucet testing: a random 32-byte seed
//! hashed into a hex address, plus a 12-word placeholder phrase. This is NOT
//! real wallet derivation — no BIP-32/39 compliance, no signing capability.
//! The mnemonic is a display value only and never leaves the local machine.

use chrono::Utc;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Fixed word pool for placeholder mnemonics
const WORDS: [&str; 24] = [
    "abandon", "ability", "able", "about", "above", "absent", "absorb", "abstract",
    "absurd", "abuse", "access", "accident", "account", "accuse", "achieve", "acid",
    "acoustic", "acquire", "across", "act", "action", "actor", "actress", "actual",
];

/// Number of words sampled per mnemonic
pub const MNEMONIC_WORDS: usize = 12;

/// A generated demo wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletIdentity {
    pub address: String,
    pub mnemonic: String,
    pub created_at: String,
}

impl WalletIdentity {
    /// Generate a fresh demo wallet
    ///
    /// The address is derived from a cryptographically random seed so two
    /// calls never collide in practice. Infallible.
    pub fn generate() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);

        let digest = Sha256::digest(seed);
        let address = format!("0x{}", hex::encode(digest));

        // Sample without replacement so the 12 words are distinct
        let mut rng = OsRng;
        let mnemonic = WORDS
            .choose_multiple(&mut rng, MNEMONIC_WORDS)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            address,
            mnemonic,
            created_at: Utc::now().to_rfc3339(),
        }
    }

    /// Abbreviated address for log output, e.g. `0xc21217ef413cdb90fa0a...e8962dac`
    pub fn short_address(&self) -> String {
        short_address(&self.address)
    }
}

/// Abbreviate an address for display
pub fn short_address(address: &str) -> String {
    if address.len() > 30 {
        format!("{}...{}", &address[..20], &address[address.len() - 10..])
    } else {
        address.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_address_format() {
        let wallet = WalletIdentity::generate();
        assert!(wallet.address.starts_with("0x"));
        assert_eq!(wallet.address.len(), 2 + 64);
        assert!(wallet.address[2..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_addresses_are_distinct() {
        let addresses: HashSet<String> = (0..1000)
            .map(|_| WalletIdentity::generate().address)
            .collect();
        assert_eq!(addresses.len(), 1000);
    }

    #[test]
    fn test_mnemonic_twelve_distinct_words_from_pool() {
        for _ in 0..100 {
            let wallet = WalletIdentity::generate();
            let words: Vec<&str> = wallet.mnemonic.split(' ').collect();
            assert_eq!(words.len(), MNEMONIC_WORDS);

            let distinct: HashSet<&str> = words.iter().copied().collect();
            assert_eq!(distinct.len(), MNEMONIC_WORDS);

            for word in words {
                assert!(WORDS.contains(&word), "unexpected word: {}", word);
            }
        }
    }

    #[test]
    fn test_short_address() {
        let addr = "0xc21217ef413cdb90fa0a8b7a421d2bc3e1fd8cd348b581c8d0976eb4e8962dac";
        let short = short_address(addr);
        assert_eq!(short, "0xc21217ef413cdb90fa...b4e8962dac");
        assert_eq!(short_address("0xabc"), "0xabc");
    }
}
