//! Command-line inspection tool for a claim trie database.
//!
//! Opens the database read-only in spirit: every subcommand is a query,
//! and nothing here advances blocks or mutates claims.

use clap::{Parser, Subcommand, ValueEnum};
use claimtrie_trie::{verify_proof, Claim, ClaimId, ClaimTrie, ForkRules, NodeHash};
use claimtrie_types::lossy_name;
use eyre::{bail, Result, WrapErr};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Inspect a claim trie database")]
struct Cli {
    /// Directory holding `claims.sqlite`.
    #[arg(long, short = 'd', default_value = ".")]
    datadir: PathBuf,

    /// Fork schedule to interpret the database with.
    #[arg(long, value_enum, default_value_t = Network::Mainnet)]
    network: Network,

    /// Height of the next block, as tracked by the node that wrote the
    /// database. Queries answer as of this height.
    #[arg(long)]
    height: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

impl Network {
    const fn fork_rules(self) -> ForkRules {
        match self {
            Self::Mainnet => ForkRules::mainnet(),
            Self::Testnet => ForkRules::testnet(),
            Self::Regtest => ForkRules::regtest(),
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the merkle root of the trie.
    Root,
    /// Show the controlling claim for a name.
    Info {
        /// The name to look up.
        name: String,
    },
    /// List every unexpired claim and support on a name.
    Claims {
        /// The name to look up.
        name: String,
    },
    /// Build an inclusion proof for a name and verify it locally.
    Proof {
        /// The name to prove.
        name: String,
        /// Hex claim id expected to control the name.
        claim_id: ClaimId,
    },
    /// List every name that currently has an active claim.
    Names,
    /// Print trie totals.
    Stats,
    /// Recompute every node hash and compare the root against `root`.
    Validate {
        /// Hex root hash from the block header.
        root: NodeHash,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut trie = ClaimTrie::open(&cli.datadir, cli.network.fork_rules(), cli.height, false)
        .wrap_err_with(|| format!("opening claim trie in {}", cli.datadir.display()))?;

    match cli.command {
        Command::Root => println!("{}", trie.get_merkle_hash()?),
        Command::Info { name } => match trie.get_info_for_name(name.as_bytes())? {
            Some((claim, effective)) => print_claim(&claim, effective),
            None => bail!("no active claim for {name}"),
        },
        Command::Claims { name } => {
            let claims = trie.get_claims_for_name(name.as_bytes())?;
            println!(
                "{} (last takeover at {})",
                lossy_name(&claims.node_name),
                claims.last_takeover_height
            );
            for entry in &claims.claims {
                print_claim(&entry.claim, entry.effective_amount);
                for support in &entry.supports {
                    println!(
                        "    support {} amount {} valid {}",
                        support.outpoint, support.amount, support.valid_height
                    );
                }
            }
            for support in &claims.unmatched_supports {
                println!(
                    "  unmatched support {} for {}",
                    support.outpoint, support.supported_claim_id
                );
            }
        }
        Command::Proof { name, claim_id } => {
            let root = trie.get_merkle_hash()?;
            let proof = trie.get_proof_for_name(name.as_bytes(), &claim_id)?;
            if !proof.has_value {
                bail!("{claim_id} does not control {name}");
            }
            if !verify_proof(&proof, &root) {
                bail!("proof does not verify against root {root}");
            }
            println!("proof with {} nodes verifies against {}", proof.nodes.len(), root);
        }
        Command::Names => {
            trie.get_names_in_trie(|name| println!("{}", lossy_name(name)))?;
        }
        Command::Stats => {
            println!("names:  {}", trie.get_total_names_in_trie()?);
            println!("claims: {}", trie.get_total_claims_in_trie()?);
            println!("value:  {}", trie.get_total_value_of_claims_in_trie()?);
            println!("root:   {}", trie.get_merkle_hash()?);
        }
        Command::Validate { root } => {
            if !trie.validate_db(&root)? {
                bail!("database does not match root {root}");
            }
            println!("ok");
        }
    }
    Ok(())
}

fn print_claim(claim: &Claim, effective: u64) {
    println!(
        "  {} {} amount {} effective {} height {} valid {}",
        claim.claim_id,
        claim.outpoint,
        claim.amount,
        effective,
        claim.block_height,
        claim.valid_height
    );
}
