//! quickconvert CLI
//!
//! Thin caller around the conversion engine: reads line commands from
//! stdin, keeps a session (selection + history), writes results to stdout.
//!
//! Commands:
//! - categories
//! - units <category>
//! - convert <category> <value> <from> -> <to>
//! - swap: exchange the from/to units of the last selection
//! - history: show the recent conversions
//! - help, quit
//!
//! `--json` switches output to one JSON document per response. Logs go to
//! stderr via tracing.

use std::env;
use std::io::{self, BufRead, Write};

use serde_json::json;
use tracing::{debug, warn};

use quickconvert_core::{Category, ConvertError};
use quickconvert_session::Session;
use quickconvert_units::units_of;

/// A parsed `convert` command line
#[derive(Debug, PartialEq)]
struct ConvertCmd {
    category: String,
    value: f64,
    from_unit: String,
    to_unit: String,
}

/// Parse `convert <category> <value> <from> -> <to>`
///
/// Category labels and unit names may contain spaces ("Fuel Economy",
/// "cubic meters"), so the value token splits the category from the units
/// and `->` splits the unit pair.
fn parse_convert(rest: &[&str]) -> Result<ConvertCmd, String> {
    let value_pos = rest
        .iter()
        .position(|tok| tok.parse::<f64>().is_ok())
        .ok_or("missing numeric value")?;
    let value: f64 = rest[value_pos]
        .parse()
        .map_err(|_| "missing numeric value")?;

    let category = rest[..value_pos].join(" ");
    if category.is_empty() {
        return Err("missing category".to_string());
    }

    let units = &rest[value_pos + 1..];
    let arrow = units
        .iter()
        .position(|tok| *tok == "->")
        .ok_or("missing '->' between units")?;

    let from_unit = units[..arrow].join(" ");
    let to_unit = units[arrow + 1..].join(" ");
    if from_unit.is_empty() || to_unit.is_empty() {
        return Err("missing unit name".to_string());
    }

    Ok(ConvertCmd {
        category,
        value,
        from_unit,
        to_unit,
    })
}

enum Response {
    Lines(Vec<String>),
    Converted { value: f64, entry: String },
    Error(String),
    Quit,
}

fn run_command(line: &str, session: &mut Session) -> Response {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, rest)) = tokens.split_first() else {
        return Response::Lines(Vec::new());
    };

    match command {
        "categories" => Response::Lines(
            Category::ALL.iter().map(|c| c.label().to_string()).collect(),
        ),
        "units" => {
            let name = rest.join(" ");
            match Category::parse(&name) {
                Ok(category) => Response::Lines(
                    units_of(category).iter().map(|u| u.to_string()).collect(),
                ),
                Err(e) => Response::Error(e.to_string()),
            }
        }
        "convert" => match execute_convert(rest, session) {
            Ok(response) => response,
            Err(message) => Response::Error(message),
        },
        "swap" => {
            session.swap_units();
            Response::Lines(vec![format!(
                "{} -> {}",
                session.from_unit(),
                session.to_unit()
            )])
        }
        "history" => Response::Lines(
            session
                .history()
                .recent()
                .iter()
                .map(|entry| entry.to_string())
                .collect(),
        ),
        "help" => Response::Lines(vec![
            "categories".to_string(),
            "units <category>".to_string(),
            "convert <category> <value> <from> -> <to>".to_string(),
            "swap".to_string(),
            "history".to_string(),
            "quit".to_string(),
        ]),
        "quit" | "exit" => Response::Quit,
        other => Response::Error(format!("unknown command: {other}")),
    }
}

fn execute_convert(rest: &[&str], session: &mut Session) -> Result<Response, String> {
    let cmd = parse_convert(rest)?;
    let category = Category::parse(&cmd.category).map_err(|e| e.to_string())?;

    session.select_category(category);
    session
        .select_units(&cmd.from_unit, &cmd.to_unit)
        .map_err(|e: ConvertError| e.to_string())?;

    debug!(
        category = %category,
        from = %cmd.from_unit,
        to = %cmd.to_unit,
        value = cmd.value,
        "converting"
    );

    match session.convert(cmd.value) {
        Ok(result) => {
            let entry = format!(
                "{} {} = {:.2} {}",
                cmd.value, cmd.from_unit, result, cmd.to_unit
            );
            Ok(Response::Converted {
                value: result,
                entry,
            })
        }
        Err(e) => {
            warn!(error = %e, "conversion failed");
            Err(e.to_string())
        }
    }
}

fn print_response(out: &mut impl Write, response: &Response, json: bool) -> io::Result<()> {
    match response {
        Response::Lines(lines) => {
            if json {
                writeln!(out, "{}", json!({ "ok": true, "lines": lines }))?;
            } else {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
        }
        Response::Converted { value, entry } => {
            if json {
                writeln!(out, "{}", json!({ "ok": true, "result": value }))?;
            } else {
                writeln!(out, "{entry}")?;
            }
        }
        Response::Error(message) => {
            if json {
                writeln!(out, "{}", json!({ "ok": false, "error": message }))?;
            } else {
                writeln!(out, "error: {message}")?;
            }
        }
        Response::Quit => {}
    }
    out.flush()
}

fn main() -> io::Result<()> {
    let level = match env::var("QUICKCONVERT_LOG").as_deref() {
        Ok("debug") => tracing::Level::DEBUG,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let json = env::args().any(|arg| arg == "--json");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    for line in stdin.lock().lines() {
        let line = line?;
        let response = run_command(&line, &mut session);
        if matches!(response, Response::Quit) {
            break;
        }
        print_response(&mut stdout, &response, json)?;
    }

    Ok(())
}
