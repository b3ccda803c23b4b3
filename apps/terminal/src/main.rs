//! # Kantina Terminal Entry Point
//!
//! Interactive terminal front end for the canteen ledger.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kantina Terminal                                 │
//! │                                                                         │
//! │  stdin line ──► parse ──► commands/ ──► LedgerState ──► kantina-core    │
//! │                                                                         │
//! │  main.rs ────► Sets up logging, state, the read-eval-print loop         │
//! │                                                                         │
//! │  commands/ ──► add/list/edit/delete, sell/undo/latest, report/dashboard │
//! │                                                                         │
//! │  state/ ─────► LedgerState (Arc<Mutex<LedgerEngine>>)                   │
//! │                                                                         │
//! │  Output: JSON for data, plain text for errors and confirmations         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging), filter from `RUST_LOG`
//! 2. Create the ledger state (one engine, one lock)
//! 3. Read commands line by line until `quit` or EOF
//!
//! ## Command Syntax
//! Arguments are comma-separated so product names may contain spaces:
//! ```text
//! add Pancit Canton 60g,24,pack,15.50
//! sell Pancit Canton 60g,2,GCash,GC-1234
//! ```

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kantina_core::{Money, PaymentMode, ProductPatch};

mod commands;
mod error;
mod state;

use error::AppError;
use state::LedgerState;

const HELP: &str = "\
Commands (arguments are comma-separated):
  add <name>,<stock>,<unit>,<price>     add a product         (add Rice,50,kg,2.00)
  list                                  list the catalog
  edit <id>,<field>=<value>,...         edit a product        (edit 1,stock=40,price=2.50)
  delete <id>                           delete a product
  sell <name>,<qty>,<mode>[,<ref>]      process a sale        (sell Rice,5,Cash)
  undo                                  reverse the most recent sale
  latest                                show the most recent sale
  report                                recent sales, newest first
  dashboard                             catalog + history + running total
  help                                  show this help
  quit                                  exit";

fn main() {
    // Logging first; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let state = LedgerState::new();
    info!("Kantina terminal ready");

    println!("Kantina canteen ledger. Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF
            Ok(_) => {}
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        match run_command(&state, line) {
            Ok(output) => println!("{}", output),
            Err(err) => println!("error[{:?}]: {}", err.code, err.message),
        }
    }
}

/// Parses one command line and dispatches to the matching handler.
fn run_command(state: &LedgerState, line: &str) -> Result<String, AppError> {
    let (verb, rest) = match line.split_once(' ') {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "help" => Ok(HELP.to_string()),

        "add" => {
            let [name, stock, unit, price] = parse_args::<4>(rest)?;
            let stock = parse_int(stock, "stock")?;
            let price = parse_money(price)?;
            let product = commands::product::add_product(state, name, stock, unit, price)?;
            Ok(render(&product))
        }

        "list" => Ok(render(&commands::product::list_products(state))),

        "edit" => {
            let mut parts = rest.split(',');
            let id = parse_int(parts.next().unwrap_or(""), "id")? as u64;
            let patch = parse_patch(parts)?;
            let product = commands::product::edit_product(state, id, patch)?;
            Ok(render(&product))
        }

        "delete" => {
            let id = parse_int(rest, "id")? as u64;
            commands::product::delete_product(state, id)?;
            Ok(format!("Deleted product {}", id))
        }

        "sell" => {
            let mut parts = rest.splitn(4, ',');
            let name = parts.next().unwrap_or("").trim();
            let quantity = parse_int(parts.next().unwrap_or(""), "quantity")?;
            let mode: PaymentMode = parts
                .next()
                .unwrap_or("")
                .parse()
                .map_err(AppError::bad_command)?;
            let reference = parts.next().unwrap_or("");
            let sale = commands::sale::process_sale(state, name, quantity, mode, reference)?;
            Ok(render(&sale))
        }

        "undo" => match commands::sale::undo_last_sale(state) {
            Some(sale) => Ok(format!(
                "Reversed sale: {} x{} ({})",
                sale.product_name,
                sale.quantity,
                sale.total()
            )),
            None => Ok("Nothing to undo".to_string()),
        },

        "latest" => match commands::sale::latest_sale(state) {
            Some(sale) => Ok(render(&sale)),
            None => Ok("No sales yet".to_string()),
        },

        "report" => Ok(render(&commands::report::sales_report(state))),

        "dashboard" => Ok(render(&commands::report::dashboard(state))),

        other => Err(AppError::bad_command(format!(
            "unknown command: {} (try 'help')",
            other
        ))),
    }
}

// =============================================================================
// Parsing Helpers
// =============================================================================

/// Splits a comma-separated argument list into exactly N trimmed parts.
fn parse_args<const N: usize>(rest: &str) -> Result<[&str; N], AppError> {
    let parts: Vec<&str> = rest.splitn(N, ',').map(str::trim).collect();
    parts
        .try_into()
        .map_err(|_| AppError::bad_command(format!("expected {} comma-separated arguments", N)))
}

/// Parses a decimal integer field.
fn parse_int(s: &str, field: &str) -> Result<i64, AppError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| AppError::bad_command(format!("{} must be an integer, got '{}'", field, s.trim())))
}

/// Parses a peso amount like "2", "2.5", or "2.50" into centavos.
///
/// No floating point: the string is split at the decimal point and both
/// halves parsed as integers, so "2.50" is exactly 250 centavos.
fn parse_money(s: &str) -> Result<Money, AppError> {
    let s = s.trim().trim_start_matches('₱');
    let bad = || AppError::bad_command(format!("price must be a peso amount like 2.50, got '{}'", s));

    let (pesos_str, cents_str) = match s.split_once('.') {
        Some((p, c)) => (p, c),
        None => (s, ""),
    };

    let pesos: i64 = pesos_str.parse().map_err(|_| bad())?;
    if pesos < 0 {
        return Err(bad());
    }

    let cents: i64 = match cents_str.len() {
        0 => 0,
        1 => cents_str.parse::<i64>().map_err(|_| bad())? * 10,
        2 => cents_str.parse().map_err(|_| bad())?,
        _ => return Err(bad()),
    };
    if cents < 0 {
        return Err(bad());
    }

    Ok(Money::from_major_minor(pesos, cents))
}

/// Parses `field=value` pairs into a product patch.
fn parse_patch<'a, I>(pairs: I) -> Result<ProductPatch, AppError>
where
    I: Iterator<Item = &'a str>,
{
    let mut patch = ProductPatch::default();
    for pair in pairs {
        let (field, value) = pair
            .split_once('=')
            .ok_or_else(|| AppError::bad_command(format!("expected field=value, got '{}'", pair)))?;
        let value = value.trim();
        match field.trim() {
            "name" => patch.name = Some(value.to_string()),
            "unit" => patch.unit = Some(value.to_string()),
            "stock" => patch.stock = Some(parse_int(value, "stock")?),
            "price" => patch.price_cents = Some(parse_money(value)?.cents()),
            other => {
                return Err(AppError::bad_command(format!(
                    "unknown field: {} (name, stock, unit, price)",
                    other
                )))
            }
        }
    }
    Ok(patch)
}

/// Renders a response as pretty JSON.
fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("<serialization error: {}>", e))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("2").unwrap().cents(), 200);
        assert_eq!(parse_money("2.5").unwrap().cents(), 250);
        assert_eq!(parse_money("2.50").unwrap().cents(), 250);
        assert_eq!(parse_money("₱10.99").unwrap().cents(), 1099);
        assert_eq!(parse_money("0").unwrap().cents(), 0);

        assert!(parse_money("-2").is_err());
        assert!(parse_money("2.505").is_err());
        assert!(parse_money("abc").is_err());
        assert!(parse_money("2.-5").is_err());
    }

    #[test]
    fn test_parse_patch() {
        let patch = parse_patch("stock=40,price=2.50".split(',')).unwrap();
        assert_eq!(patch.stock, Some(40));
        assert_eq!(patch.price_cents, Some(250));
        assert!(patch.name.is_none());

        assert!(parse_patch("bogus=1".split(',')).is_err());
        assert!(parse_patch("stock".split(',')).is_err());
    }

    #[test]
    fn test_run_command_full_flow() {
        let state = LedgerState::new();

        run_command(&state, "add Rice,50,kg,2.00").unwrap();
        run_command(&state, "sell Rice,5,Cash").unwrap();

        let out = run_command(&state, "undo").unwrap();
        assert!(out.contains("Rice"));
        assert!(out.contains("₱10.00"));

        let out = run_command(&state, "undo").unwrap();
        assert_eq!(out, "Nothing to undo");
    }

    #[test]
    fn test_run_command_sell_with_spaces_in_name() {
        let state = LedgerState::new();
        run_command(&state, "add Pancit Canton 60g,24,pack,15.50").unwrap();

        let out = run_command(&state, "sell Pancit Canton 60g,2,GCash,GC-1234").unwrap();
        assert!(out.contains("Pancit Canton 60g"));
        assert!(out.contains("GC-1234"));
    }

    #[test]
    fn test_run_command_errors() {
        let state = LedgerState::new();

        let err = run_command(&state, "sell Rice,5,Cash").unwrap_err();
        assert_eq!(err.code, error::ErrorCode::NotFound);

        let err = run_command(&state, "frobnicate").unwrap_err();
        assert_eq!(err.code, error::ErrorCode::BadCommand);

        let err = run_command(&state, "add Rice,lots,kg,2.00").unwrap_err();
        assert_eq!(err.code, error::ErrorCode::BadCommand);
    }
}
