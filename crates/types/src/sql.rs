//! SQLite bindings for the fixed-byte identifiers.

use crate::{ClaimId, NodeHash, TxId};
use alloy_primitives::FixedBytes;
use rusqlite::{
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
    Result, ToSql,
};

macro_rules! impl_sql {
    ($($t:ty => $n:literal),*) => {$(
        impl ToSql for $t {
            fn to_sql(&self) -> Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.0.as_slice()))
            }
        }

        impl FromSql for $t {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                let blob = value.as_blob()?;
                let bytes: [u8; $n] = blob.try_into().map_err(|_| FromSqlError::InvalidBlobSize {
                    expected_size: $n,
                    blob_size: blob.len(),
                })?;
                Ok(Self(FixedBytes(bytes)))
            }
        }
    )*};
}

impl_sql!(TxId => 32, ClaimId => 20, NodeHash => 32);
