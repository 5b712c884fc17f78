//! Message display macros.
//!
//! Every macro prints through `println!`/`eprintln!` in normal runs and
//! through `tracing` when debug output is enabled with `PRESENCE_DEBUG` or
//! `RUST_LOG`, so messages interleave with the structured log.
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build plain errors from a
//! [`Message`](super::Message); the binary prints them with `msg_error!`.
//!
//! ```rust
//! use presence::{msg_info, msg_success};
//! use presence::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::NoRecordsFound, true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// `true` when `PRESENCE_DEBUG` or `RUST_LOG` is set. Checked once per run.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("PRESENCE_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $($arg:tt)+) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!($($arg)+);
        } else {
            $print!($($arg)+);
        }
    };
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "{}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n{}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ {}", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\nℹ️ {}\n", $msg)
    };
}

#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, println, "⚠️ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        $crate::__msg_emit!(error, eprintln, "❌ {}", $msg)
    };
}

#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
