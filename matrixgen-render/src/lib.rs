//! Rendering helpers (markdown) for human-readable matrix summaries.

use matrixgen_types::{Linkage, MatrixDocument};
use std::collections::BTreeSet;

pub fn render_matrix_md(doc: &MatrixDocument) -> String {
    let mut out = String::new();
    out.push_str("# Build matrix\n\n");

    if doc.is_empty() {
        out.push_str("_No combinations._\n");
        return out;
    }

    let versions: BTreeSet<&str> = doc.iter().map(|r| r.version.as_str()).collect();
    let platforms: BTreeSet<&str> = doc.iter().map(|r| r.platform.platform.as_str()).collect();
    let dynamic = doc.iter().filter(|r| r.linkage == Linkage::Dynamic).count();

    out.push_str(&format!("- Combinations: {}\n", doc.len()));
    out.push_str(&format!(
        "- Versions: {}\n",
        versions.into_iter().collect::<Vec<_>>().join(", ")
    ));
    out.push_str(&format!("- Platforms: {}\n", platforms.len()));
    out.push_str(&format!(
        "- Linkage: {} dynamic, {} static\n\n",
        dynamic,
        doc.len() - dynamic
    ));

    out.push_str("| # | Version | Linkage | Platform | OS | Triplet |\n");
    out.push_str("|---|---------|---------|----------|----|---------|\n");
    for (i, r) in doc.iter().enumerate() {
        out.push_str(&format!(
            "| {} | `{}` | {} | `{}` | `{}` | `{}` |\n",
            i + 1,
            r.version,
            r.linkage,
            r.platform.platform,
            r.platform.os,
            r.platform.triplet
        ));
    }

    out
}
