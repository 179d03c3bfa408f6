// nct: CLI Module
//
// Command-line interface using clap derive macros.
// Subcommands: list, info, cat, edit, update-expiring.

mod commands;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::unlock::DEFAULT_UNLOCK_SECS;
use crate::workflow::DEFAULT_EXPIRY_THRESHOLD;

pub use commands::execute;

/// nct: view and edit Namecoin names through namecoind.
#[derive(Parser, Debug)]
#[command(name = "nct")]
#[command(version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = ArgAction::Version)]
    version: (),

    /// Path to namecoin.conf (default: ~/.namecoin/namecoin.conf).
    #[arg(long, global = true, value_name = "PATH")]
    pub conf: Option<PathBuf>,

    /// Seconds the wallet stays unlocked after a passphrase is entered.
    #[arg(long, global = true, default_value_t = DEFAULT_UNLOCK_SECS, value_name = "SECS")]
    pub unlock_time: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the wallet's names with address and blocks until expiry.
    List,

    /// Show the daemon's full record for a name.
    Info {
        /// The name, e.g. "d/example".
        name: Option<String>,
    },

    /// Print a name's value, pretty-printed if it is JSON.
    Cat {
        /// The name, e.g. "d/example".
        name: Option<String>,
    },

    /// Edit a name's value in $EDITOR and submit the update.
    Edit {
        /// The name, e.g. "d/example".
        name: Option<String>,
    },

    /// Re-submit every name that is close to expiring.
    UpdateExpiring {
        /// Renew names expiring within this many blocks.
        #[arg(long, default_value_t = DEFAULT_EXPIRY_THRESHOLD)]
        threshold: i64,
    },
}
