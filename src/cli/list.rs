//! List command.
//!
//! Without a file, lists the secret files and their formats. With one,
//! decrypts it and lists its keys or aliases. Values are never printed.

use crate::cli::{output, Context};
use crate::core::lookup;
use crate::error::Result;

/// List secret files or the names inside one.
pub fn execute(ctx: &Context, file: Option<&str>, json: bool) -> Result<()> {
    match file {
        Some(name) => names(ctx, name, json),
        None => files(ctx, json),
    }
}

fn files(ctx: &Context, json: bool) -> Result<()> {
    let files = ctx.dir.list()?;

    if json {
        let files: Vec<_> = files
            .iter()
            .map(|f| serde_json::json!({ "name": f.name(), "format": f.format() }))
            .collect();
        let result = serde_json::json!({
            "dir": ctx.dir.root().display().to_string(),
            "files": files,
            "count": files.len(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if files.is_empty() {
        output::warn(&format!("no secret files in {}", ctx.dir.root().display()));
    } else {
        for file in &files {
            output::row(&file.name(), file.format().as_str());
        }
    }

    Ok(())
}

fn names(ctx: &Context, name: &str, json: bool) -> Result<()> {
    let secret_file = ctx.dir.open(name)?;
    let entries = secret_file.load(&ctx.config.decryptor())?;
    let names = lookup::names(&entries);

    if json {
        let result = serde_json::json!({
            "file": secret_file.name(),
            "format": secret_file.format(),
            "names": names,
            "count": names.len(),
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else {
        for name in names {
            output::data(name);
        }
    }

    Ok(())
}
