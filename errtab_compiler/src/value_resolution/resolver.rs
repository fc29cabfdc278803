//! Two-pass symbol value resolver
//!
//! Pass one scans every source line-by-line, recording direct integer
//! definitions and queuing symbol-to-symbol aliases. Pass two copies each
//! alias's target value. Alias chains deeper than one level do not occur in
//! the known inputs and are not supported; an alias whose target never
//! resolved is a fatal error, never a silent zero.

use super::error::{ValueResolutionError, ValueResolutionResult};
use crate::config::constants::compile_time::parsing::{DEFINE_KEYWORD, DEFINE_TOKEN_COUNT};
use crate::logging::codes;
use crate::utils::is_error_symbol;
use crate::{log_debug, log_error, log_success};
use std::collections::HashMap;

/// Incremental resolver over any number of header-like sources.
#[derive(Debug, Default)]
pub struct ValueResolver {
    values: HashMap<String, i64>,
    deferred: Vec<(String, String)>,
}

impl ValueResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan one source. A line participates only if it has exactly three
    /// whitespace-separated tokens `#define SYMBOL VALUE`; everything else
    /// is surrounding noise and ignored.
    pub fn scan_source(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                continue;
            }
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() != DEFINE_TOKEN_COUNT {
                continue;
            }
            if parts[0] != DEFINE_KEYWORD || !is_error_symbol(parts[1]) {
                continue;
            }

            if let Some(value) = parse_positive_decimal(parts[2]) {
                // Direct definition; later definitions overwrite earlier ones
                self.values.insert(parts[1].to_string(), value);
            } else if is_error_symbol(parts[2]) {
                self.deferred
                    .push((parts[1].to_string(), parts[2].to_string()));
            }
        }
    }

    /// Fix-up pass: copy the recorded value for every deferred alias.
    pub fn resolve(mut self) -> ValueResolutionResult<HashMap<String, i64>> {
        for (symbol, target) in &self.deferred {
            match self.values.get(target).copied() {
                Some(value) => {
                    self.values.insert(symbol.clone(), value);
                }
                None => {
                    let error = ValueResolutionError::unresolved_alias(symbol, target);
                    log_error!(error.error_code(), "Alias target was never defined",
                        "symbol" => symbol,
                        "target" => target
                    );
                    return Err(error);
                }
            }
        }

        log_debug!("Value resolution fix-up complete",
            "direct_and_aliased" => self.values.len(),
            "aliases" => self.deferred.len()
        );
        Ok(self.values)
    }
}

/// Resolve the combined mapping over a set of sources, in order.
pub fn resolve_values(sources: &[&str]) -> ValueResolutionResult<HashMap<String, i64>> {
    let mut resolver = ValueResolver::new();
    for source in sources {
        resolver.scan_source(source);
    }
    let values = resolver.resolve()?;

    log_success!(codes::success::VALUES_RESOLVED, "Symbol values resolved",
        "symbols" => values.len()
    );
    Ok(values)
}

/// Match a bare positive decimal integer (`[1-9][0-9]*`).
fn parse_positive_decimal(token: &str) -> Option<i64> {
    let mut chars = token.chars();
    let first = chars.next()?;
    if !('1'..='9').contains(&first) {
        return None;
    }
    if !chars.all(|c| c.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
