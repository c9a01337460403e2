use std::fmt::Write;

use crate::geo::{PartyResult, Standing};

/// Human-readable account of one party's pass: which neighbors lifted each
/// district, the score, and contributors ordered by total vote share given.
pub fn console_summary(result: &PartyResult) -> String {
    let party = &result.party;
    let mut out = String::new();
    let row = |out: &mut String, a: &dyn std::fmt::Display, b: &dyn std::fmt::Display| {
        let _ = writeln!(out, "{:<10} {:<30}", a.to_string(), b.to_string());
    };

    let _ = writeln!(out, "Party {party} GEO calculations\n");
    row(&mut out, &"District", &"Made competitive by");
    for district in &result.newly_competitive {
        let donors = result.transfers_into(district)
            .map(|t| t.donor.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        row(&mut out, district, &donors);
    }

    let newly = result.newly_competitive.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(", ");
    let _ = writeln!(out, "\nGeo score for party {party} is: {}", result.geo_score);
    let _ = writeln!(out, "Newly Competitive Districts for party {party}: [{newly}]");

    let sorted = result.contributions_by_total();
    for (title, won) in [("Contributing won districts:", true), ("Contributing lost districts:", false)] {
        let _ = writeln!(out, "\n{title}");
        row(&mut out, &"District", &"Total vote shares contributed");
        sorted.iter()
            .filter(|c| (c.standing == Standing::Won) == won)
            .for_each(|c| row(&mut out, &c.district, &c.total_shared));
    }

    out
}
