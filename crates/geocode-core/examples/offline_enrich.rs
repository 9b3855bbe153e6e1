//! Offline enrichment example for geocode-core
//!
//! Runs the enricher against a canned geocoder so the fallback and the
//! "unresolved" path can be seen without touching the network.

use geocode_core::{enrich_all, Candidate, CountryRecord, Result, SearchQuery};

fn canned(q: &SearchQuery) -> Result<Vec<Candidate>> {
    let hits = match q {
        SearchQuery::Country(name) if name == "Norway" => vec![Candidate::new("64.5731537", "11.52803643")],
        SearchQuery::FreeText(name) if name == "Korea, Rep." => vec![Candidate::new("36.638392", "127.6961188")],
        _ => vec![],
    };
    Ok(hits)
}

fn main() -> Result<()> {
    println!("=== geocode-core Offline Example ===\n");

    let mut records: Vec<CountryRecord> = serde_json::from_str(
        r#"[{"name": "Norway", "region": "Europe & Central Asia"},
            {"name": "Korea, Rep."},
            {"name": "Atlantis"}]"#,
    )?;

    println!("--- Unresolved names (diagnostic stream) ---");
    let summary = enrich_all(&mut records, &canned, &mut std::io::stdout())?;
    println!();

    println!("--- Summary ---");
    println!("  Total:      {}", summary.total);
    println!("  Primary:    {}", summary.primary);
    println!("  Fallback:   {}", summary.fallback);
    println!("  Unresolved: {}", summary.unresolved.len());
    println!();

    println!("--- Output ---");
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
