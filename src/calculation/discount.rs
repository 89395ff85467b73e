//! Name-prefix discount rule.
//!
//! A person's benefit amount is discounted when their name starts with the
//! discount criteria, compared case-insensitively. Everything the rule needs
//! is passed in explicitly so it can be evaluated on its own.

use rust_decimal::Decimal;

use crate::models::AuditStep;

/// Returns true if `name` qualifies for the discount.
///
/// Both sides are uppercased before the prefix test. An empty name never
/// qualifies, whatever the criteria.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::is_discount_eligible;
///
/// assert!(is_discount_eligible("alice", "A"));
/// assert!(is_discount_eligible("ALICE", "a"));
/// assert!(!is_discount_eligible("Bob", "A"));
/// assert!(!is_discount_eligible("", "A"));
/// ```
pub fn is_discount_eligible(name: &str, criteria: &str) -> bool {
    !name.is_empty() && name.to_uppercase().starts_with(&criteria.to_uppercase())
}

/// Returns the benefit cost for one person after the discount rule.
///
/// Eligible names pay `base_amount - base_amount * discount`; everyone else
/// pays `base_amount` unchanged.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::apply_discount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let discount = Decimal::from_str("0.10").unwrap();
/// let cost = apply_discount("Amy", Decimal::from(500), discount, "A");
/// assert_eq!(cost, Decimal::from(450));
/// ```
pub fn apply_discount(
    name: &str,
    base_amount: Decimal,
    discount: Decimal,
    criteria: &str,
) -> Decimal {
    if is_discount_eligible(name, criteria) {
        base_amount - base_amount * discount
    } else {
        base_amount
    }
}

/// The result of applying the discount rule, including the cost and audit step.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    /// The benefit cost after the rule was applied.
    pub cost: Decimal,
    /// Whether the discount was applied.
    pub discount_applied: bool,
    /// The amount taken off the base amount.
    pub discount_amount: Decimal,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Applies the discount rule and records the decision as an audit step.
///
/// # Arguments
///
/// * `name` - The covered person's name
/// * `base_amount` - The undiscounted benefit amount for this person
/// * `discount` - The discount fraction, between 0 and 1
/// * `criteria` - The name prefix that qualifies for the discount
/// * `step_number` - The step number for audit trail sequencing
pub fn apply_discount_with_audit(
    name: &str,
    base_amount: Decimal,
    discount: Decimal,
    criteria: &str,
    step_number: u32,
) -> DiscountResult {
    let discount_applied = is_discount_eligible(name, criteria);
    let cost = apply_discount(name, base_amount, discount, criteria);
    let discount_amount = base_amount - cost;

    let reasoning = if discount_applied {
        format!(
            "'{}' starts with '{}': ${} - ${} x {} = ${}",
            name,
            criteria.to_uppercase(),
            base_amount.normalize(),
            base_amount.normalize(),
            discount.normalize(),
            cost.normalize()
        )
    } else if name.is_empty() {
        format!("No name entered - full benefit of ${} applies", base_amount.normalize())
    } else {
        format!(
            "'{}' does not start with '{}' - full benefit of ${} applies",
            name,
            criteria.to_uppercase(),
            base_amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "name_prefix_discount".to_string(),
        rule_name: "Name Prefix Discount".to_string(),
        input: serde_json::json!({
            "name": name,
            "base_amount": base_amount.normalize().to_string(),
            "discount": discount.normalize().to_string(),
            "criteria": criteria
        }),
        output: serde_json::json!({
            "cost": cost.normalize().to_string(),
            "discount_applied": discount_applied,
            "discount_amount": discount_amount.normalize().to_string()
        }),
        reasoning,
    };

    DiscountResult {
        cost,
        discount_applied,
        discount_amount,
        audit_step,
    }
}
