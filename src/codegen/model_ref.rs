//! Decomposition of a catalog model identifier.
//!
//! Catalog identifiers mix vendor, part number, certification marker and a
//! free-text description, e.g.
//! `"FL-202F08R/E50 [Linear Range: 2 mm, Tip Dia.: 8mm, R]"` or
//! `"Shinkawa: CV-86/EX"`. Rules match on the parsed part number, never on
//! the raw string, so text inside the description cannot trigger a rule.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelRef<'a> {
    /// Vendor prefix before `": "`, if any.
    pub vendor: Option<&'a str>,
    /// Part number without certification marker, e.g. `FL-202F08R`.
    pub part: &'a str,
    /// Certification marker including the slash, e.g. `/E50`.
    pub certification: Option<&'a str>,
    /// Bracketed description without the brackets.
    pub description: Option<&'a str>,
}

impl<'a> ModelRef<'a> {
    pub fn parse(model_id: &'a str) -> Self {
        let trimmed = model_id.trim();

        // descriptions contain ": " themselves, so strip them before the vendor
        let (head, description) = match trimmed.split_once('[') {
            Some((head, desc)) => {
                let desc = desc.trim_end().trim_end_matches(']').trim();
                (head.trim(), (!desc.is_empty()).then_some(desc))
            }
            None => (trimmed, None),
        };

        let (vendor, token) = match head.split_once(": ") {
            Some((vendor, token)) => (Some(vendor.trim()), token.trim()),
            None => (None, head),
        };

        let (part, certification) = match token.find('/') {
            Some(idx) => (&token[..idx], Some(&token[idx..])),
            None => (token, None),
        };

        Self {
            vendor,
            part,
            certification,
            description,
        }
    }

    pub fn has_certification(&self, marker: &str) -> bool {
        self.certification == Some(marker)
    }
}
