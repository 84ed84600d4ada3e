use std::io::Write;

use crate::core::config::TokenConfig;
use crate::core::error::Error;
use crate::types::{ExampleRequest, Identity};
use crate::utils::auth::encode_jwt;

const WIDTH: usize = 80;

struct Entry<'a> {
    identity: &'a Identity,
    token: String,
}

/// Mint one token per identity and write the copy/paste report to `out`.
pub(crate) fn print_report<W: Write>(
    out: &mut W,
    identities: &[Identity],
    requests: &[ExampleRequest],
    config: &TokenConfig,
) -> Result<(), Error> {
    let entries = identities
        .iter()
        .map(|identity| {
            encode_jwt(identity.id, &identity.username, &identity.role, config)
                .map(|token| Entry { identity, token })
        })
        .collect::<Result<Vec<_>, _>>()?;

    heading(out, "JWT TOKEN GENERATOR - PACKEDGO")?;

    for entry in &entries {
        let identity = entry.identity;

        writeln!(out, ">> {}", identity.description)?;
        writeln!(out, "   User ID: {}", identity.id)?;
        writeln!(out, "   Username: {}", identity.username)?;
        writeln!(out, "   Role: {}", identity.role)?;
        writeln!(out, "   Token: {}", entry.token)?;
        writeln!(out)?;
        writeln!(out, "   # For use with curl:")?;
        writeln!(out, "   {}", export_line(identity, &entry.token))?;
        writeln!(out)?;
        writeln!(out, "{}", "-".repeat(WIDTH))?;
        writeln!(out)?;
    }

    writeln!(out)?;
    heading(out, "ENVIRONMENT VARIABLES TO COPY/PASTE:")?;

    for entry in &entries {
        writeln!(out, "{}", export_line(entry.identity, &entry.token))?;
    }

    writeln!(out)?;
    heading(out, "USAGE EXAMPLES:")?;

    for request in requests {
        writeln!(out, "# {}", request.comment)?;
        writeln!(out, "curl -X GET \"{}\" \\", request.url)?;
        writeln!(out, "  -H \"Authorization: Bearer ${}\"", request.variable)?;
        writeln!(out)?;
    }

    out.flush()?;

    tracing::info!(tokens = entries.len(), "report written");

    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out, "{}", title)?;
    writeln!(out, "{}", "=".repeat(WIDTH))?;
    writeln!(out)
}

fn export_line(identity: &Identity, token: &str) -> String {
    format!("export {}=\"{}\"", identity.env_var(), token)
}
