use crate::{Result, StateStore};
use claimtrie_forks::normalize_name;
use claimtrie_types::{Claim, ClaimId, NodeHash, OutPoint, Support, TxId};
use rusqlite::{functions::FunctionFlags, params, Connection, OptionalExtension, Row};
use std::path::Path;
use tracing::trace;

/// SQLite-backed [`StateStore`].
///
/// One connection, one schema, no WAL: the journal lives in memory and the
/// block transaction is the unit of durability, committed by the trie's
/// `flush`. Names are stored as BLOBs so that SQL ordering and prefix
/// arithmetic agree with the bytewise trie.
pub struct SqliteStore {
    conn: Connection,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStore").finish_non_exhaustive()
    }
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS nodes (
    name BLOB NOT NULL PRIMARY KEY,
    parent BLOB REFERENCES nodes(name) DEFERRABLE INITIALLY DEFERRED,
    hash BLOB,
    takeoverHeight INTEGER,
    takeoverID BLOB
);
CREATE INDEX IF NOT EXISTS nodes_parent ON nodes (parent);

CREATE TABLE IF NOT EXISTS claims (
    claimID BLOB NOT NULL PRIMARY KEY,
    name BLOB NOT NULL,
    nodeName BLOB NOT NULL REFERENCES nodes(name) DEFERRABLE INITIALLY DEFERRED,
    txID BLOB NOT NULL,
    txN INTEGER NOT NULL,
    blockHeight INTEGER NOT NULL,
    validHeight INTEGER NOT NULL,
    expirationHeight INTEGER NOT NULL,
    amount INTEGER NOT NULL,
    metadata BLOB
);
CREATE INDEX IF NOT EXISTS claims_validHeight ON claims (validHeight);
CREATE INDEX IF NOT EXISTS claims_expirationHeight ON claims (expirationHeight);
CREATE INDEX IF NOT EXISTS claims_nodeName ON claims (nodeName);

CREATE TABLE IF NOT EXISTS supports (
    txID BLOB NOT NULL,
    txN INTEGER NOT NULL,
    supportedClaimID BLOB NOT NULL,
    name BLOB NOT NULL,
    nodeName BLOB NOT NULL,
    blockHeight INTEGER NOT NULL,
    validHeight INTEGER NOT NULL,
    expirationHeight INTEGER NOT NULL,
    amount INTEGER NOT NULL,
    metadata BLOB,
    PRIMARY KEY(txID, txN)
);
CREATE INDEX IF NOT EXISTS supports_supportedClaimID ON supports (supportedClaimID);
CREATE INDEX IF NOT EXISTS supports_validHeight ON supports (validHeight);
CREATE INDEX IF NOT EXISTS supports_expirationHeight ON supports (expirationHeight);
CREATE INDEX IF NOT EXISTS supports_nodeName ON supports (nodeName);
";

impl SqliteStore {
    /// Opens (or creates) the store at `path`.
    pub fn open(path: impl AsRef<Path>, wipe: bool) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        Self::init(Connection::open(path)?, wipe)
    }

    /// Opens a transient in-memory store.
    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?, false)
    }

    fn init(conn: Connection, wipe: bool) -> Result<Self> {
        conn.create_scalar_function(
            "POPS",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let mut bytes: Vec<u8> = ctx.get(0)?;
                bytes.pop();
                Ok(bytes)
            },
        )?;
        conn.create_scalar_function(
            "NORMALIZED",
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let bytes: Vec<u8> = ctx.get(0)?;
                Ok(normalize_name(&bytes))
            },
        )?;

        conn.pragma_update(None, "cache_size", -200 * 1024)?; // in -KB
        conn.pragma_update(None, "synchronous", "OFF")?; // the block commit is the durability unit
        conn.query_row("PRAGMA journal_mode = MEMORY", [], |_| Ok(()))?;
        conn.pragma_update(None, "temp_store", "MEMORY")?;

        conn.execute_batch(SCHEMA)?;

        if wipe {
            conn.execute_batch("DELETE FROM nodes; DELETE FROM claims; DELETE FROM supports;")?;
        }

        // the root node always exists and carries the empty-trie sentinel
        conn.execute(
            "INSERT OR IGNORE INTO nodes(name, hash) VALUES(?1, ?2)",
            params![&b""[..], NodeHash::EMPTY_TRIE],
        )?;

        Ok(Self { conn })
    }

    /// Direct access to the connection, for tooling and tests.
    #[doc(hidden)]
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

fn claim_from_row(row: &Row<'_>) -> rusqlite::Result<Claim> {
    Ok(Claim {
        claim_id: row.get(0)?,
        name: row.get(1)?,
        node_name: row.get(2)?,
        outpoint: OutPoint::new(row.get::<_, TxId>(3)?, row.get::<_, i64>(4)? as u32),
        block_height: row.get::<_, i64>(5)? as u32,
        valid_height: row.get::<_, i64>(6)? as u32,
        expiration_height: row.get::<_, i64>(7)? as u32,
        amount: row.get::<_, i64>(8)? as u64,
        metadata: row.get::<_, Option<Vec<u8>>>(9)?.unwrap_or_default(),
    })
}

fn support_from_row(row: &Row<'_>) -> rusqlite::Result<Support> {
    Ok(Support {
        supported_claim_id: row.get(0)?,
        name: row.get(1)?,
        node_name: row.get(2)?,
        outpoint: OutPoint::new(row.get::<_, TxId>(3)?, row.get::<_, i64>(4)? as u32),
        block_height: row.get::<_, i64>(5)? as u32,
        valid_height: row.get::<_, i64>(6)? as u32,
        expiration_height: row.get::<_, i64>(7)? as u32,
        amount: row.get::<_, i64>(8)? as u64,
        metadata: row.get::<_, Option<Vec<u8>>>(9)?.unwrap_or_default(),
    })
}

impl StateStore for SqliteStore {
    fn begin(&mut self) -> Result<()> {
        self.conn.execute_batch("BEGIN")?;
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.conn.execute_batch("COMMIT")?;
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.conn.execute_batch("ROLLBACK")?;
        Ok(())
    }

    fn sync_to_disk(&self) -> Result<()> {
        let _ = self
            .conn
            .query_row("PRAGMA wal_checkpoint(FULL)", [], |_| Ok(()))
            .optional()?;
        Ok(())
    }

    fn insert_or_dirty_node(&mut self, name: &[u8]) -> Result<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO nodes(name) VALUES(?1) ON CONFLICT(name) DO UPDATE SET hash = NULL",
            )?
            .execute(params![name])?;
        Ok(())
    }

    fn insert_or_dirty_node_with_parent(&mut self, name: &[u8], parent: &[u8]) -> Result<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO nodes(name, parent, hash) VALUES(?1, ?2, NULL) \
                 ON CONFLICT(name) DO UPDATE SET parent = excluded.parent, hash = NULL",
            )?
            .execute(params![name, parent])?;
        Ok(())
    }

    fn dirty_node(&mut self, name: &[u8]) -> Result<bool> {
        let n = self
            .conn
            .prepare_cached("UPDATE nodes SET hash = NULL WHERE name = ?1")?
            .execute(params![name])?;
        Ok(n > 0)
    }

    fn delete_node(&mut self, name: &[u8]) -> Result<bool> {
        let n = self
            .conn
            .prepare_cached("DELETE FROM nodes WHERE name = ?1")?
            .execute(params![name])?;
        Ok(n > 0)
    }

    fn set_node_parent(&mut self, name: &[u8], parent: &[u8]) -> Result<()> {
        self.conn
            .prepare_cached("UPDATE nodes SET parent = ?1 WHERE name = ?2")?
            .execute(params![parent, name])?;
        Ok(())
    }

    fn node_parent(&self, name: &[u8]) -> Result<Option<Vec<u8>>> {
        let parent = self
            .conn
            .prepare_cached("SELECT parent FROM nodes WHERE name = ?1")?
            .query_row(params![name], |row| row.get::<_, Option<Vec<u8>>>(0))
            .optional()?;
        Ok(parent.map(Option::unwrap_or_default))
    }

    fn child_count_and_last(&self, parent: &[u8]) -> Result<(i64, Option<Vec<u8>>)> {
        let row = self
            .conn
            .prepare_cached("SELECT COUNT(*), MAX(name) FROM nodes WHERE parent = ?1")?
            .query_row(params![parent], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, Option<Vec<u8>>>(1)?))
            })?;
        Ok(row)
    }

    fn children_of(&self, parent: &[u8]) -> Result<Vec<Vec<u8>>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT name FROM nodes WHERE parent = ?1 ORDER BY name")?;
        let rows = stmt.query_map(params![parent], |row| row.get(0))?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn child_hashes(&self, parent: &[u8]) -> Result<Vec<(Vec<u8>, Option<NodeHash>, u32)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT name, hash, IFNULL(takeoverHeight, 0) FROM nodes WHERE parent = ?1 ORDER BY name",
        )?;
        let rows = stmt.query_map(params![parent], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get::<_, i64>(2)? as u32))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn dirty_node_names(&self) -> Result<Vec<Vec<u8>>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT name FROM nodes WHERE hash IS NULL")?;
        let rows = stmt.query_map([], |row| row.get(0))?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn deepest_ancestor(&self, name: &[u8]) -> Result<Option<Vec<u8>>> {
        let found = self
            .conn
            .prepare_cached(
                "SELECT MAX(name) FROM nodes WHERE name IN \
                 (WITH RECURSIVE prefix(p) AS (VALUES(?1) UNION ALL \
                  SELECT POPS(p) FROM prefix WHERE LENGTH(p) > 0) SELECT p FROM prefix)",
            )?
            .query_row(params![name], |row| row.get::<_, Option<Vec<u8>>>(0))?;
        Ok(found)
    }

    fn propagate_dirty_upwards(&mut self) -> Result<()> {
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN (WITH RECURSIVE prefix(p) AS \
                 (SELECT parent FROM nodes WHERE hash IS NULL AND parent IS NOT NULL \
                  UNION SELECT parent FROM prefix, nodes \
                  WHERE name = prefix.p AND LENGTH(prefix.p) > 0) SELECT p FROM prefix)",
            )?
            .execute([])?;
        Ok(())
    }

    fn node_hash(&self, name: &[u8]) -> Result<Option<(Option<NodeHash>, u32)>> {
        let row = self
            .conn
            .prepare_cached("SELECT hash, IFNULL(takeoverHeight, 0) FROM nodes WHERE name = ?1")?
            .query_row(params![name], |row| {
                Ok((row.get(0)?, row.get::<_, i64>(1)? as u32))
            })
            .optional()?;
        Ok(row)
    }

    fn set_node_hash(&mut self, name: &[u8], hash: &NodeHash) -> Result<()> {
        self.conn
            .prepare_cached("UPDATE nodes SET hash = ?1 WHERE name = ?2")?
            .execute(params![hash, name])?;
        Ok(())
    }

    fn nodes_on_path(&self, name: &[u8]) -> Result<Vec<(Vec<u8>, u32)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT name, IFNULL(takeoverHeight, 0) FROM nodes WHERE name IN \
             (WITH RECURSIVE prefix(p) AS (VALUES(?1) UNION ALL \
              SELECT POPS(p) FROM prefix WHERE LENGTH(p) > 0) SELECT p FROM prefix) \
             ORDER BY name",
        )?;
        let rows = stmt.query_map(params![name], |row| {
            Ok((row.get(0)?, row.get::<_, i64>(1)? as u32))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn all_nodes(&self) -> Result<Vec<(Vec<u8>, Option<NodeHash>, u32)>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT name, hash, IFNULL(takeoverHeight, 0) FROM nodes")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get(0)?, row.get(1)?, row.get::<_, i64>(2)? as u32))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn takeover(&self, name: &[u8]) -> Result<Option<(u32, Option<ClaimId>)>> {
        let row = self
            .conn
            .prepare_cached("SELECT IFNULL(takeoverHeight, 0), takeoverID FROM nodes WHERE name = ?1")?
            .query_row(params![name], |row| {
                Ok((row.get::<_, i64>(0)? as u32, row.get(1)?))
            })
            .optional()?;
        Ok(row)
    }

    fn last_takeover(&self, name: &[u8]) -> Result<Option<(ClaimId, u32)>> {
        let row = self
            .conn
            .prepare_cached(
                "SELECT takeoverID, takeoverHeight FROM nodes \
                 WHERE name = ?1 AND takeoverID IS NOT NULL",
            )?
            .query_row(params![name], |row| {
                Ok((row.get(0)?, row.get::<_, i64>(1)? as u32))
            })
            .optional()?;
        Ok(row)
    }

    fn set_takeover(&mut self, name: &[u8], takeover: Option<(u32, &ClaimId)>) -> Result<()> {
        match takeover {
            Some((height, id)) => self
                .conn
                .prepare_cached("UPDATE nodes SET takeoverHeight = ?1, takeoverID = ?2 WHERE name = ?3")?
                .execute(params![i64::from(height), id, name])?,
            None => self
                .conn
                .prepare_cached("UPDATE nodes SET takeoverHeight = NULL, takeoverID = NULL WHERE name = ?1")?
                .execute(params![name])?,
        };
        Ok(())
    }

    fn restore_takeover(&mut self, name: &[u8], takeover: Option<(u32, &ClaimId)>) -> Result<()> {
        match takeover {
            Some((height, id)) => self
                .conn
                .prepare_cached(
                    "UPDATE nodes SET takeoverHeight = ?1, takeoverID = ?2, hash = NULL WHERE name = ?3",
                )?
                .execute(params![i64::from(height), id, name])?,
            None => self
                .conn
                .prepare_cached(
                    "UPDATE nodes SET takeoverHeight = NULL, takeoverID = NULL, hash = NULL WHERE name = ?1",
                )?
                .execute(params![name])?,
        };
        Ok(())
    }

    fn null_all_node_hashes(&mut self) -> Result<()> {
        self.conn.execute_batch("UPDATE nodes SET hash = NULL")?;
        Ok(())
    }

    fn insert_claim(&mut self, claim: &Claim) -> Result<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO claims(claimID, name, nodeName, txID, txN, blockHeight, \
                 validHeight, expirationHeight, amount, metadata) \
                 VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?
            .execute(params![
                claim.claim_id,
                claim.name,
                claim.node_name,
                claim.outpoint.txid,
                i64::from(claim.outpoint.index),
                i64::from(claim.block_height),
                i64::from(claim.valid_height),
                i64::from(claim.expiration_height),
                claim.amount as i64,
                claim.metadata,
            ])?;
        Ok(())
    }

    fn claim_location(&self, claim_id: &ClaimId, outpoint: &OutPoint) -> Result<Option<(Vec<u8>, u32)>> {
        let row = self
            .conn
            .prepare_cached(
                "SELECT nodeName, validHeight FROM claims WHERE claimID = ?1 AND txID = ?2 AND txN = ?3",
            )?
            .query_row(params![claim_id, outpoint.txid, i64::from(outpoint.index)], |row| {
                Ok((row.get(0)?, row.get::<_, i64>(1)? as u32))
            })
            .optional()?;
        Ok(row)
    }

    fn delete_claim(&mut self, claim_id: &ClaimId, outpoint: &OutPoint) -> Result<bool> {
        let n = self
            .conn
            .prepare_cached("DELETE FROM claims WHERE claimID = ?1 AND txID = ?2 AND txN = ?3")?
            .execute(params![claim_id, outpoint.txid, i64::from(outpoint.index)])?;
        Ok(n > 0)
    }

    fn has_claim(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<bool> {
        let found = self
            .conn
            .prepare_cached(
                "SELECT 1 FROM claims WHERE nodeName = ?1 AND txID = ?2 AND txN = ?3 \
                 AND validHeight < ?4 AND expirationHeight >= ?4 LIMIT 1",
            )?
            .query_row(
                params![node_name, outpoint.txid, i64::from(outpoint.index), i64::from(height)],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn claim_in_queue(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<Option<u32>> {
        let row = self
            .conn
            .prepare_cached(
                "SELECT validHeight FROM claims WHERE nodeName = ?1 AND txID = ?2 AND txN = ?3 \
                 AND validHeight >= ?4 AND expirationHeight > validHeight LIMIT 1",
            )?
            .query_row(
                params![node_name, outpoint.txid, i64::from(outpoint.index), i64::from(height)],
                |row| Ok(row.get::<_, i64>(0)? as u32),
            )
            .optional()?;
        Ok(row)
    }

    fn active_claim_count(&self, node_name: &[u8], height: u32) -> Result<i64> {
        let count = self
            .conn
            .prepare_cached(
                "SELECT COUNT(*) FROM claims WHERE nodeName = ?1 \
                 AND validHeight < ?2 AND expirationHeight >= ?2",
            )?
            .query_row(params![node_name, i64::from(height)], |row| row.get(0))?;
        Ok(count)
    }

    fn best_claim(&self, node_name: &[u8], height: u32) -> Result<Option<(Claim, u64)>> {
        let row = self
            .conn
            .prepare_cached(
                "SELECT c.claimID, c.name, c.nodeName, c.txID, c.txN, c.blockHeight, \
                 c.validHeight, c.expirationHeight, c.amount, c.metadata, \
                 (SELECT IFNULL(SUM(s.amount), 0) + c.amount FROM supports s \
                  WHERE s.supportedClaimID = c.claimID AND s.nodeName = c.nodeName \
                  AND s.validHeight < ?1 AND s.expirationHeight >= ?1) AS effectiveAmount \
                 FROM claims c WHERE c.nodeName = ?2 AND c.validHeight < ?1 AND c.expirationHeight >= ?1 \
                 ORDER BY effectiveAmount DESC, c.blockHeight, c.txID, c.txN LIMIT 1",
            )?
            .query_row(params![i64::from(height), node_name], |row| {
                Ok((claim_from_row(row)?, row.get::<_, i64>(10)? as u64))
            })
            .optional()?;
        Ok(row)
    }

    fn claims_by_effective_rank(&self, node_name: &[u8], height: u32) -> Result<Vec<(Claim, u64)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT c.claimID, c.name, c.nodeName, c.txID, c.txN, c.blockHeight, \
             c.validHeight, c.expirationHeight, c.amount, c.metadata, \
             (SELECT IFNULL(SUM(s.amount), 0) + c.amount FROM supports s \
              WHERE s.supportedClaimID = c.claimID AND s.nodeName = c.nodeName \
              AND s.validHeight < ?1 AND s.expirationHeight >= ?1) AS effectiveAmount \
             FROM claims c WHERE c.nodeName = ?2 AND c.validHeight < ?1 AND c.expirationHeight >= ?1 \
             ORDER BY effectiveAmount DESC, c.blockHeight, c.txID, c.txN",
        )?;
        let rows = stmt.query_map(params![i64::from(height), node_name], |row| {
            Ok((claim_from_row(row)?, row.get::<_, i64>(10)? as u64))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn claims_for_node(&self, node_name: &[u8], height: u32) -> Result<Vec<Claim>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT claimID, name, nodeName, txID, txN, blockHeight, validHeight, \
             expirationHeight, amount, metadata \
             FROM claims WHERE nodeName = ?1 AND expirationHeight >= ?2",
        )?;
        let rows = stmt.query_map(params![node_name, i64::from(height)], claim_from_row)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn first_active_name_with_prefix(&self, prefix: &[u8], height: u32) -> Result<Option<Vec<u8>>> {
        let row = self
            .conn
            .prepare_cached(
                "SELECT nodeName FROM claims WHERE nodeName >= ?1 \
                 AND SUBSTR(nodeName, 1, LENGTH(?1)) = ?1 \
                 AND validHeight < ?2 AND expirationHeight >= ?2 \
                 ORDER BY nodeName LIMIT 1",
            )?
            .query_row(params![prefix, i64::from(height)], |row| row.get(0))
            .optional()?;
        Ok(row)
    }

    fn dirty_nodes_for_activating_claims(&mut self, height: u32) -> Result<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO nodes(name) SELECT nodeName FROM claims \
                 WHERE validHeight = ?1 AND expirationHeight > ?1 \
                 ON CONFLICT(name) DO UPDATE SET hash = NULL",
            )?
            .execute(params![i64::from(height)])?;
        Ok(())
    }

    fn expiring_claims(&self, height: u32) -> Result<Vec<Claim>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT claimID, name, nodeName, txID, txN, blockHeight, validHeight, \
             expirationHeight, amount, metadata FROM claims WHERE expirationHeight = ?1",
        )?;
        let rows = stmt.query_map(params![i64::from(height)], claim_from_row)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn dirty_nodes_for_expiring_claims(&mut self, height: u32) -> Result<()> {
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN \
                 (SELECT nodeName FROM claims WHERE expirationHeight = ?1)",
            )?
            .execute(params![i64::from(height)])?;
        Ok(())
    }

    fn pending_claims(&self, node_name: &[u8], height: u32) -> Result<Vec<(OutPoint, u32)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT txID, txN, validHeight FROM claims \
             WHERE nodeName = ?1 AND validHeight > ?2 AND expirationHeight > ?2",
        )?;
        let rows = stmt.query_map(params![node_name, i64::from(height)], |row| {
            Ok((
                OutPoint::new(row.get::<_, TxId>(0)?, row.get::<_, i64>(1)? as u32),
                row.get::<_, i64>(2)? as u32,
            ))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn activate_pending_claims(&mut self, node_name: &[u8], height: u32) -> Result<usize> {
        let n = self
            .conn
            .prepare_cached(
                "UPDATE claims SET validHeight = ?1 \
                 WHERE nodeName = ?2 AND validHeight > ?1 AND expirationHeight > ?1",
            )?
            .execute(params![i64::from(height), node_name])?;
        Ok(n)
    }

    fn reset_claim_valid_height(&mut self, node_name: &[u8], outpoint: &OutPoint, valid_height: u32) -> Result<()> {
        self.conn
            .prepare_cached(
                "UPDATE claims SET validHeight = ?1 WHERE nodeName = ?2 AND txID = ?3 AND txN = ?4",
            )?
            .execute(params![
                i64::from(valid_height),
                node_name,
                outpoint.txid,
                i64::from(outpoint.index)
            ])?;
        Ok(())
    }

    fn dirty_nodes_for_valid_claims_at(&mut self, height: u32) -> Result<()> {
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN \
                 (SELECT nodeName FROM claims WHERE validHeight = ?1 AND expirationHeight > ?1)",
            )?
            .execute(params![i64::from(height)])?;
        Ok(())
    }

    fn total_names(&self, height: u32) -> Result<u64> {
        let count: i64 = self
            .conn
            .prepare_cached(
                "SELECT COUNT(DISTINCT nodeName) FROM claims \
                 WHERE validHeight < ?1 AND expirationHeight >= ?1",
            )?
            .query_row(params![i64::from(height)], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn total_claims(&self, height: u32) -> Result<u64> {
        let count: i64 = self
            .conn
            .prepare_cached(
                "SELECT COUNT(*) FROM claims WHERE validHeight < ?1 AND expirationHeight >= ?1",
            )?
            .query_row(params![i64::from(height)], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn total_value(&self, height: u32) -> Result<u64> {
        let total: i64 = self
            .conn
            .prepare_cached(
                "SELECT IFNULL(SUM(c.amount + (SELECT IFNULL(SUM(s.amount), 0) FROM supports s \
                 WHERE s.supportedClaimID = c.claimID AND s.nodeName = c.nodeName \
                 AND s.validHeight < ?1 AND s.expirationHeight >= ?1)), 0) \
                 FROM claims c WHERE c.validHeight < ?1 AND c.expirationHeight >= ?1",
            )?
            .query_row(params![i64::from(height)], |row| row.get(0))?;
        Ok(total as u64)
    }

    fn claims_by_id_prefix(&self, prefix: &[u8], height: u32, limit: usize) -> Result<Vec<Claim>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT claimID, name, nodeName, txID, txN, blockHeight, validHeight, \
             expirationHeight, amount, metadata FROM claims \
             WHERE SUBSTR(claimID, 1, LENGTH(?1)) = ?1 \
             AND validHeight < ?2 AND expirationHeight >= ?2 LIMIT ?3",
        )?;
        let rows = stmt.query_map(
            params![prefix, i64::from(height), limit as i64],
            claim_from_row,
        )?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn for_each_active_node_name(&self, height: u32, f: &mut dyn FnMut(&[u8])) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT DISTINCT nodeName FROM claims \
             WHERE validHeight < ?1 AND expirationHeight >= ?1 ORDER BY nodeName",
        )?;
        let mut rows = stmt.query(params![i64::from(height)])?;
        while let Some(row) = rows.next()? {
            let name: Vec<u8> = row.get(0)?;
            f(&name);
        }
        Ok(())
    }

    fn insert_support(&mut self, support: &Support) -> Result<()> {
        self.conn
            .prepare_cached(
                "INSERT INTO supports(supportedClaimID, name, nodeName, txID, txN, blockHeight, \
                 validHeight, expirationHeight, amount, metadata) \
                 VALUES(?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            )?
            .execute(params![
                support.supported_claim_id,
                support.name,
                support.node_name,
                support.outpoint.txid,
                i64::from(support.outpoint.index),
                i64::from(support.block_height),
                i64::from(support.valid_height),
                i64::from(support.expiration_height),
                support.amount as i64,
                support.metadata,
            ])?;
        Ok(())
    }

    fn support_location(&self, outpoint: &OutPoint) -> Result<Option<(Vec<u8>, u32)>> {
        let row = self
            .conn
            .prepare_cached("SELECT nodeName, validHeight FROM supports WHERE txID = ?1 AND txN = ?2")?
            .query_row(params![outpoint.txid, i64::from(outpoint.index)], |row| {
                Ok((row.get(0)?, row.get::<_, i64>(1)? as u32))
            })
            .optional()?;
        Ok(row)
    }

    fn delete_support(&mut self, outpoint: &OutPoint) -> Result<bool> {
        let n = self
            .conn
            .prepare_cached("DELETE FROM supports WHERE txID = ?1 AND txN = ?2")?
            .execute(params![outpoint.txid, i64::from(outpoint.index)])?;
        Ok(n > 0)
    }

    fn has_support(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<bool> {
        let found = self
            .conn
            .prepare_cached(
                "SELECT 1 FROM supports WHERE nodeName = ?1 AND txID = ?2 AND txN = ?3 \
                 AND validHeight < ?4 AND expirationHeight >= ?4 LIMIT 1",
            )?
            .query_row(
                params![node_name, outpoint.txid, i64::from(outpoint.index), i64::from(height)],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn support_in_queue(&self, node_name: &[u8], outpoint: &OutPoint, height: u32) -> Result<Option<u32>> {
        let row = self
            .conn
            .prepare_cached(
                "SELECT validHeight FROM supports WHERE nodeName = ?1 AND txID = ?2 AND txN = ?3 \
                 AND validHeight >= ?4 AND expirationHeight > validHeight LIMIT 1",
            )?
            .query_row(
                params![node_name, outpoint.txid, i64::from(outpoint.index), i64::from(height)],
                |row| Ok(row.get::<_, i64>(0)? as u32),
            )
            .optional()?;
        Ok(row)
    }

    fn supports_for_node(&self, node_name: &[u8], height: u32) -> Result<Vec<Support>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT supportedClaimID, name, nodeName, txID, txN, blockHeight, validHeight, \
             expirationHeight, amount, metadata \
             FROM supports WHERE nodeName = ?1 AND expirationHeight >= ?2",
        )?;
        let rows = stmt.query_map(params![node_name, i64::from(height)], support_from_row)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn dirty_nodes_for_activating_supports(&mut self, height: u32) -> Result<()> {
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN \
                 (SELECT nodeName FROM supports WHERE validHeight = ?1 AND expirationHeight > ?1)",
            )?
            .execute(params![i64::from(height)])?;
        Ok(())
    }

    fn expiring_supports(&self, height: u32) -> Result<Vec<Support>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT supportedClaimID, name, nodeName, txID, txN, blockHeight, validHeight, \
             expirationHeight, amount, metadata FROM supports WHERE expirationHeight = ?1",
        )?;
        let rows = stmt.query_map(params![i64::from(height)], support_from_row)?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn dirty_nodes_for_expiring_supports(&mut self, height: u32) -> Result<()> {
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN \
                 (SELECT nodeName FROM supports WHERE expirationHeight = ?1)",
            )?
            .execute(params![i64::from(height)])?;
        Ok(())
    }

    fn pending_supports(&self, node_name: &[u8], height: u32) -> Result<Vec<(OutPoint, u32)>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT txID, txN, validHeight FROM supports \
             WHERE nodeName = ?1 AND validHeight > ?2 AND expirationHeight > ?2",
        )?;
        let rows = stmt.query_map(params![node_name, i64::from(height)], |row| {
            Ok((
                OutPoint::new(row.get::<_, TxId>(0)?, row.get::<_, i64>(1)? as u32),
                row.get::<_, i64>(2)? as u32,
            ))
        })?;
        Ok(rows.collect::<rusqlite::Result<_>>()?)
    }

    fn activate_pending_supports(&mut self, node_name: &[u8], height: u32) -> Result<usize> {
        let n = self
            .conn
            .prepare_cached(
                "UPDATE supports SET validHeight = ?1 \
                 WHERE nodeName = ?2 AND validHeight > ?1 AND expirationHeight > ?1",
            )?
            .execute(params![i64::from(height), node_name])?;
        Ok(n)
    }

    fn reset_support_valid_height(&mut self, outpoint: &OutPoint, valid_height: u32) -> Result<()> {
        self.conn
            .prepare_cached("UPDATE supports SET validHeight = ?1 WHERE txID = ?2 AND txN = ?3")?
            .execute(params![
                i64::from(valid_height),
                outpoint.txid,
                i64::from(outpoint.index)
            ])?;
        Ok(())
    }

    fn dirty_nodes_for_valid_supports_at(&mut self, height: u32) -> Result<()> {
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN \
                 (SELECT nodeName FROM supports WHERE validHeight = ?1 AND expirationHeight > ?1)",
            )?
            .execute(params![i64::from(height)])?;
        Ok(())
    }

    fn shift_pending_expirations(&mut self, delta: i64, height: u32) -> Result<()> {
        trace!(target: "claimtrie::store", delta, height, "shifting pending expirations");
        if delta >= 0 {
            self.conn
                .prepare_cached("UPDATE claims SET expirationHeight = expirationHeight + ?1 WHERE expirationHeight >= ?2")?
                .execute(params![delta, i64::from(height)])?;
            self.conn
                .prepare_cached("UPDATE supports SET expirationHeight = expirationHeight + ?1 WHERE expirationHeight >= ?2")?
                .execute(params![delta, i64::from(height)])?;
        } else {
            self.conn
                .prepare_cached("UPDATE claims SET expirationHeight = expirationHeight + ?1 WHERE expirationHeight + ?1 >= ?2")?
                .execute(params![delta, i64::from(height)])?;
            self.conn
                .prepare_cached("UPDATE supports SET expirationHeight = expirationHeight + ?1 WHERE expirationHeight + ?1 >= ?2")?
                .execute(params![delta, i64::from(height)])?;
        }
        Ok(())
    }

    fn apply_name_normalization(&mut self, height: u32) -> Result<()> {
        trace!(target: "claimtrie::store", height, "normalizing node names");
        let height = i64::from(height);
        self.conn
            .prepare_cached(
                "INSERT INTO nodes(name) SELECT NORMALIZED(name) FROM claims \
                 WHERE NORMALIZED(name) != nodeName AND expirationHeight > ?1 \
                 ON CONFLICT(name) DO UPDATE SET hash = NULL",
            )?
            .execute(params![height])?;
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN (SELECT nodeName FROM claims \
                 WHERE NORMALIZED(name) != nodeName AND expirationHeight > ?1)",
            )?
            .execute(params![height])?;
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN (SELECT nodeName FROM supports \
                 WHERE NORMALIZED(name) != nodeName AND expirationHeight > ?1)",
            )?
            .execute(params![height])?;
        self.conn
            .prepare_cached(
                "UPDATE claims SET nodeName = NORMALIZED(name) \
                 WHERE NORMALIZED(name) != nodeName AND expirationHeight > ?1",
            )?
            .execute(params![height])?;
        self.conn
            .prepare_cached(
                "UPDATE supports SET nodeName = NORMALIZED(name) \
                 WHERE NORMALIZED(name) != nodeName AND expirationHeight > ?1",
            )?
            .execute(params![height])?;
        Ok(())
    }

    fn revert_name_normalization(&mut self) -> Result<()> {
        trace!(target: "claimtrie::store", "reverting node name normalization");
        self.conn
            .prepare_cached(
                "INSERT INTO nodes(name) SELECT name FROM claims WHERE name != nodeName \
                 ON CONFLICT(name) DO UPDATE SET hash = NULL",
            )?
            .execute([])?;
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN \
                 (SELECT nodeName FROM claims WHERE name != nodeName)",
            )?
            .execute([])?;
        self.conn
            .prepare_cached(
                "UPDATE nodes SET hash = NULL WHERE name IN \
                 (SELECT nodeName FROM supports WHERE name != nodeName)",
            )?
            .execute([])?;
        self.conn
            .prepare_cached("UPDATE claims SET nodeName = name WHERE name != nodeName")?
            .execute([])?;
        self.conn
            .prepare_cached("UPDATE supports SET nodeName = name WHERE name != nodeName")?
            .execute([])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimtrie_types::TxId;

    fn claim(name: &[u8], txid: u8, amount: u64, valid: u32, expires: u32) -> Claim {
        Claim {
            claim_id: ClaimId::new([txid; 20]),
            name: name.to_vec(),
            node_name: name.to_vec(),
            outpoint: OutPoint::new(TxId::new([txid; 32]), 0),
            amount,
            block_height: valid,
            valid_height: valid,
            expiration_height: expires,
            metadata: Vec::new(),
        }
    }

    #[test]
    fn root_node_exists_with_sentinel_hash() {
        let store = SqliteStore::in_memory().unwrap();
        let (hash, takeover) = store.node_hash(b"").unwrap().unwrap();
        assert_eq!(hash, Some(NodeHash::EMPTY_TRIE));
        assert_eq!(takeover, 0);
    }

    #[test]
    fn visibility_predicate_hides_pending_and_expired_claims() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_claim(&claim(b"a", 1, 10, 5, 100)).unwrap();

        assert_eq!(store.active_claim_count(b"a", 5).unwrap(), 0); // not yet valid
        assert_eq!(store.active_claim_count(b"a", 6).unwrap(), 1);
        assert_eq!(store.active_claim_count(b"a", 100).unwrap(), 1); // last visible height
        assert_eq!(store.active_claim_count(b"a", 101).unwrap(), 0); // expired
    }

    #[test]
    fn best_claim_ranks_by_effective_amount_with_supports() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_claim(&claim(b"a", 1, 10, 1, 1000)).unwrap();
        store.insert_claim(&claim(b"a", 2, 12, 1, 1000)).unwrap();
        store
            .insert_support(&Support {
                supported_claim_id: ClaimId::new([1; 20]),
                name: b"a".to_vec(),
                node_name: b"a".to_vec(),
                outpoint: OutPoint::new(TxId::new([9; 32]), 0),
                amount: 5,
                block_height: 1,
                valid_height: 1,
                expiration_height: 1000,
                metadata: Vec::new(),
            })
            .unwrap();

        let (best, effective) = store.best_claim(b"a", 10).unwrap().unwrap();
        assert_eq!(best.claim_id, ClaimId::new([1; 20]));
        assert_eq!(effective, 15);

        let ranked = store.claims_by_effective_rank(b"a", 10).unwrap();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[1].1, 12);
    }

    #[test]
    fn deepest_ancestor_walks_the_prefix_chain() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_or_dirty_node_with_parent(b"ab", b"").unwrap();
        assert_eq!(store.deepest_ancestor(b"abcd").unwrap(), Some(b"ab".to_vec()));
        assert_eq!(store.deepest_ancestor(b"zz").unwrap(), Some(Vec::new()));
    }

    #[test]
    fn dirty_propagation_reaches_every_ancestor() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.set_node_hash(b"", &NodeHash::EMPTY_TRIE).unwrap();
        store.insert_or_dirty_node_with_parent(b"a", b"").unwrap();
        store.set_node_hash(b"a", &NodeHash::EMPTY_TRIE).unwrap();
        store.insert_or_dirty_node_with_parent(b"ab", b"a").unwrap();

        store.propagate_dirty_upwards().unwrap();
        let mut dirty = store.dirty_node_names().unwrap();
        dirty.sort();
        assert_eq!(dirty, vec![Vec::new(), b"a".to_vec(), b"ab".to_vec()]);
    }

    #[test]
    fn expiration_shift_round_trips() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_claim(&claim(b"a", 1, 10, 1, 600)).unwrap();
        store.insert_claim(&claim(b"b", 2, 10, 1, 300)).unwrap(); // already expired at the fork

        store.shift_pending_expirations(100, 400).unwrap();
        assert_eq!(store.claims_for_node(b"a", 0).unwrap()[0].expiration_height, 700);
        assert_eq!(store.claims_for_node(b"b", 0).unwrap()[0].expiration_height, 300);

        store.shift_pending_expirations(-100, 400).unwrap();
        assert_eq!(store.claims_for_node(b"a", 0).unwrap()[0].expiration_height, 600);
        assert_eq!(store.claims_for_node(b"b", 0).unwrap()[0].expiration_height, 300);
    }

    #[test]
    fn normalization_rewrites_and_reverts_node_names() {
        let mut store = SqliteStore::in_memory().unwrap();
        let mut c = claim(b"BIG", 1, 10, 1, 1000);
        store.insert_or_dirty_node(b"BIG").unwrap();
        store.insert_claim(&c).unwrap();

        store.apply_name_normalization(250).unwrap();
        c.node_name = b"big".to_vec();
        assert_eq!(store.claims_for_node(b"big", 0).unwrap(), vec![c.clone()]);
        assert!(store.node_hash(b"big").unwrap().is_some());

        store.revert_name_normalization().unwrap();
        c.node_name = b"BIG".to_vec();
        assert_eq!(store.claims_for_node(b"BIG", 0).unwrap(), vec![c]);
    }

    #[test]
    fn takeover_columns_set_clear_and_filter() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_or_dirty_node(b"n").unwrap();
        assert_eq!(store.takeover(b"n").unwrap(), Some((0, None)));
        assert_eq!(store.last_takeover(b"n").unwrap(), None);

        let id = ClaimId::new([7; 20]);
        store.set_takeover(b"n", Some((42, &id))).unwrap();
        assert_eq!(store.last_takeover(b"n").unwrap(), Some((id, 42)));
        assert_eq!(store.takeover(b"n").unwrap(), Some((42, Some(id))));

        store.set_takeover(b"n", None).unwrap();
        assert_eq!(store.last_takeover(b"n").unwrap(), None);
        assert_eq!(store.takeover(b"n").unwrap(), Some((0, None)));
        assert_eq!(store.takeover(b"missing").unwrap(), None);
    }

    #[test]
    fn pending_rows_activate_in_bulk() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_claim(&claim(b"n", 1, 10, 50, 1000)).unwrap(); // valid at 50
        store.insert_claim(&claim(b"n", 2, 10, 5, 1000)).unwrap(); // already active

        let queued = OutPoint::new(TxId::new([1; 32]), 0);
        let active = OutPoint::new(TxId::new([2; 32]), 0);
        assert_eq!(store.claim_in_queue(b"n", &queued, 10).unwrap(), Some(50));
        assert_eq!(store.claim_in_queue(b"n", &active, 10).unwrap(), None);

        assert_eq!(store.pending_claims(b"n", 10).unwrap(), vec![(queued, 50)]);
        assert_eq!(store.activate_pending_claims(b"n", 10).unwrap(), 1);
        assert!(store.pending_claims(b"n", 10).unwrap().is_empty());
        assert_eq!(store.active_claim_count(b"n", 11).unwrap(), 2);
    }

    #[test]
    fn committed_rows_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("claims.sqlite");

        let mut store = SqliteStore::open(&path, false).unwrap();
        store.begin().unwrap();
        store.insert_claim(&claim(b"keep", 1, 10, 1, 1000)).unwrap();
        store.commit().unwrap();
        drop(store);

        let store = SqliteStore::open(&path, false).unwrap();
        assert_eq!(store.active_claim_count(b"keep", 10).unwrap(), 1);

        let store = SqliteStore::open(&path, true).unwrap();
        assert_eq!(store.active_claim_count(b"keep", 10).unwrap(), 0);
    }

    #[test]
    fn rolled_back_rows_vanish() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.begin().unwrap();
        store.insert_claim(&claim(b"gone", 1, 10, 1, 1000)).unwrap();
        store.rollback().unwrap();
        assert_eq!(store.active_claim_count(b"gone", 10).unwrap(), 0);
    }

    #[test]
    fn claim_id_prefix_search_matches_leading_bytes() {
        let mut store = SqliteStore::in_memory().unwrap();
        store.insert_claim(&claim(b"a", 0x5a, 10, 1, 1000)).unwrap();
        let hits = store.claims_by_id_prefix(&[0x5a, 0x5a], 10, 2).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(store.claims_by_id_prefix(&[0x5b], 10, 2).unwrap().is_empty());
    }
}
