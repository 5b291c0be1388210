use alloy_primitives::{hex, FixedBytes};
use core::{fmt, str::FromStr};
use std::borrow::Cow;

/// Hash of the transaction that carries a claim or support output.
///
/// Bytes are kept in display order; hashing, SQL ordering, and hex
/// rendering all see the same byte sequence.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxId(pub FixedBytes<32>);

/// 160-bit claim identifier.
///
/// Derived from the outpoint of the transaction that created the claim and
/// carried forward unchanged by claim updates.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(pub FixedBytes<20>);

/// 32-byte Merkle hash of a trie node.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHash(pub FixedBytes<32>);

impl NodeHash {
    /// Sentinel hash of the empty trie and of empty leaves.
    pub const EMPTY_TRIE: Self = Self(FixedBytes::with_last_byte(1));

    /// Creates a hash from raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(FixedBytes(bytes))
    }

    /// Returns the hash bytes.
    pub const fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl TxId {
    /// Creates a transaction id from raw bytes.
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(FixedBytes(bytes))
    }

    /// Creates a transaction id from a 32-byte slice.
    ///
    /// # Panics
    ///
    /// If the slice is not exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(FixedBytes::from_slice(bytes))
    }

    /// Returns the id bytes.
    pub const fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl ClaimId {
    /// Creates a claim id from raw bytes.
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(FixedBytes(bytes))
    }

    /// Creates a claim id from a 20-byte slice.
    ///
    /// # Panics
    ///
    /// If the slice is not exactly 20 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Self {
        Self(FixedBytes::from_slice(bytes))
    }

    /// Returns the id bytes.
    pub const fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

macro_rules! impl_fixed_display {
    ($($t:ty),*) => {$(
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&hex::encode(self.0))
            }
        }

        impl fmt::Debug for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({self})", stringify!($t))
            }
        }

        impl FromStr for $t {
            type Err = hex::FromHexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }

        impl AsRef<[u8]> for $t {
            fn as_ref(&self) -> &[u8] {
                self.0.as_ref()
            }
        }
    )*};
}

impl_fixed_display!(TxId, ClaimId, NodeHash);

/// A transaction output carrying a claim or support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OutPoint {
    /// Hash of the transaction.
    pub txid: TxId,
    /// Index of the output within the transaction.
    pub index: u32,
}

impl OutPoint {
    /// Creates a new outpoint.
    pub const fn new(txid: TxId, index: u32) -> Self {
        Self { txid, index }
    }
}

impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.index)
    }
}

/// Renders a raw name for log output, replacing invalid UTF-8.
pub fn lossy_name(name: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(name)
}
