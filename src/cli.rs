//! Clap adapter for ldaprc.
//!
//! This module is the optional integration layer between the framework-free
//! core and the [clap](https://docs.rs/clap) CLI parser. It is compiled only
//! when the `clap` Cargo feature is enabled (on by default).
//!
//! The only bridge to the core is [`RcArgs::into_action()`], which converts
//! clap-parsed arguments into an [`RcAction`](crate::RcAction). From there,
//! everything flows through the clap-free
//! [`Ldaprc::handle()`](crate::Ldaprc::handle) API. If you use a different
//! CLI parser (or no CLI at all), skip this module and construct `RcAction`
//! values directly.

use clap::{Args, Subcommand};

use crate::types::RcAction;

/// Clap-derived args for an `rc` inspection subcommand group.
///
/// Embed this into your app's clap derive:
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
///
/// #[derive(Subcommand)]
/// enum Commands {
///     Rc(RcArgs),
/// }
/// ```
#[derive(Debug, Args)]
pub struct RcArgs {
    #[command(subcommand)]
    pub action: Option<RcSubcommand>,
}

/// Available inspection subcommands.
#[derive(Debug, Subcommand)]
pub enum RcSubcommand {
    /// Show which source supplied each resolved setting.
    Explain {
        /// Limit the report to a single setting.
        name: Option<String>,
    },
    /// Print a single setting's resolved value.
    Get {
        /// Setting name (case-insensitive), e.g. "uri".
        name: String,
    },
}

impl RcArgs {
    /// Convert clap-parsed args into a framework-agnostic `RcAction`.
    ///
    /// A bare invocation (no subcommand) and an explicit `explain` with no
    /// name both map to the full provenance report.
    pub fn into_action(self) -> RcAction {
        match self.action {
            None => RcAction::Explain { name: None },
            Some(RcSubcommand::Explain { name }) => RcAction::Explain { name },
            Some(RcSubcommand::Get { name }) => RcAction::Get { name },
        }
    }
}
