//! Part-number (product code) generation.
//!
//! `generate_code` is a pure function of the model identifier and the
//! attribute bag. Rules are tried most-specific-first, so a reverse-mount
//! `FL-302F10R` can never be claimed by the `FL-302F10` rule. An unknown
//! model is returned unchanged; an empty model yields the placeholder.

mod attributes;
mod model_ref;
pub mod rules;

pub use attributes::{Attribute, SensorAttributes};
pub use model_ref::ModelRef;
pub use rules::{CertificationMatch, Choice, FamilyRule, FamilySchema, FieldSpec, SuffixRule};

use crate::PLACEHOLDER;
use std::sync::LazyLock;
use tracing::debug;

/// Family rules ordered by descending specificity.
static DISPATCH_ORDER: LazyLock<Vec<&'static FamilyRule>> = LazyLock::new(|| {
    let mut ordered: Vec<&'static FamilyRule> = rules::FAMILIES.iter().collect();
    // stable: equal specificity keeps table order
    ordered.sort_by(|a, b| b.specificity().cmp(&a.specificity()));
    ordered
});

/// The rule that generates codes for `model_id`, if any.
pub fn family_for(model_id: &str) -> Option<&'static FamilyRule> {
    let model = ModelRef::parse(model_id);
    DISPATCH_ORDER
        .iter()
        .copied()
        .find(|rule| rule.matches(&model))
}

/// Generate the canonical product code for a model and its attributes.
pub fn generate_code(model_id: &str, attributes: &SensorAttributes) -> String {
    if model_id.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let model = ModelRef::parse(model_id);
    match DISPATCH_ORDER.iter().find(|rule| rule.matches(&model)) {
        Some(rule) => {
            let code = rule.render(&model, attributes);
            debug!(model = model_id, family = rule.name, code = %code, "generated sensor code");
            code
        }
        None => {
            debug!(model = model_id, "no code family matched, echoing model id");
            model_id.to_string()
        }
    }
}

/// All family rules in table order.
pub fn families() -> &'static [FamilyRule] {
    rules::FAMILIES
}
