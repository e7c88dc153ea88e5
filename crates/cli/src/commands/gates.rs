// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use anyhow::Result;

use super::Context;
use crate::output::format_or_json;

pub fn handle(ctx: &Context) -> Result<()> {
    let gates = gk_runbook::collect_all_gates(&ctx.runbooks)?;
    format_or_json(ctx.format, &gates, || {
        if gates.is_empty() {
            println!("No gates found in {}", ctx.runbooks.display());
            return;
        }
        let width = gates.iter().map(|g| g.name.len()).max().unwrap_or(0);
        for gate in &gates {
            let description = gate.description.as_deref().unwrap_or("");
            println!("{:<width$}  {:<5}  {}", gate.name, gate.kind.to_string(), description);
        }
    })
}
