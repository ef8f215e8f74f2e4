use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "jfp", version, about = "Order-independent JSON fingerprints")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a fingerprint for a JSON document.
    Create {
        /// JSON file; omitted or `-` reads stdin.
        input: Option<String>,

        /// Hash function: sha256|sha384|sha512
        #[arg(long, default_value = "sha256")]
        hash: String,

        /// Fingerprint algorithm version.
        #[arg(long = "jfp-version", default_value_t = 1)]
        jfp_version: u32,
    },

    /// Split a fingerprint into version, hash function and digest.
    Decode { fingerprint: String },

    /// Check whether a JSON document matches a fingerprint.
    Match {
        input: Option<String>,

        #[arg(long)]
        target: String,
    },

    /// List the fingerprints that match a JSON document.
    Find {
        input: Option<String>,

        /// Candidate fingerprint (repeatable).
        #[arg(long = "fingerprint", required_unless_present = "list")]
        fingerprints: Vec<String>,

        /// File with one fingerprint per line.
        #[arg(long)]
        list: Option<String>,

        /// Collapse duplicate candidates before matching.
        #[arg(long)]
        dedup: bool,
    },

    /// Print the flattened leaves that get hashed.
    Inspect {
        input: Option<String>,

        #[arg(long, default_value = "sha256")]
        hash: String,

        /// Keep sibling sequences unreduced.
        #[arg(long)]
        raw: bool,
    },
}
