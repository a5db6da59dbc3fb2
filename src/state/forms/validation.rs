//! Per-field validation rules

use super::field::{Field, FormValues};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field → message for every invalid field
pub type ValidationErrors = BTreeMap<Field, &'static str>;

pub const REQUIRED: &str = "Required";
pub const REGION_REQUIRED: &str = "Region is required";
pub const ONLY_ALPHABETS: &str = "Only alphabets allowed";
pub const PHONE_DIGITS: &str = "8-15 digit number required";
pub const ADDRESS_CHARS: &str = "Only alphanumerics, spaces, commas, and hyphens allowed";
pub const ONLY_NUMBERS: &str = "Only numbers allowed";

static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z]+$"));
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]{8,15}$"));
static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[a-zA-Z0-9\s,-]+$"));
static CITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[A-Za-z\s]+$"));
static POSTAL_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| pattern(r"^[0-9]+$"));

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("static validation pattern must compile")
}

/// A single check applied to a field value
enum Rule {
    Required(&'static str),
    Pattern(&'static LazyLock<Regex>, &'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required(message) => value.is_empty().then_some(*message),
            Rule::Pattern(regex, message) => (!regex.is_match(value)).then_some(*message),
        }
    }
}

fn rules_for(field: Field, region_required: bool) -> Vec<Rule> {
    match field {
        Field::FirstName | Field::LastName => vec![
            Rule::Required(REQUIRED),
            Rule::Pattern(&NAME_PATTERN, ONLY_ALPHABETS),
        ],
        Field::Phone => vec![
            Rule::Required(REQUIRED),
            Rule::Pattern(&PHONE_PATTERN, PHONE_DIGITS),
        ],
        Field::PhoneCode | Field::Gender | Field::Country | Field::MembershipType => {
            vec![Rule::Required(REQUIRED)]
        }
        Field::Region if region_required => vec![Rule::Required(REGION_REQUIRED)],
        Field::Region => vec![],
        Field::Address => vec![
            Rule::Required(REQUIRED),
            Rule::Pattern(&ADDRESS_PATTERN, ADDRESS_CHARS),
        ],
        Field::City => vec![
            Rule::Required(REQUIRED),
            Rule::Pattern(&CITY_PATTERN, ONLY_ALPHABETS),
        ],
        Field::PostalCode => vec![
            Rule::Required(REQUIRED),
            Rule::Pattern(&POSTAL_CODE_PATTERN, ONLY_NUMBERS),
        ],
    }
}

/// First failing rule's message for one field, if any
pub fn validate_field(field: Field, values: &FormValues, region_required: bool) -> Option<&'static str> {
    let value = values.get(field);
    rules_for(field, region_required)
        .iter()
        .find_map(|rule| rule.check(value))
}

/// Errors for every invalid field
pub fn validate_all(values: &FormValues, region_required: bool) -> ValidationErrors {
    Field::ALL
        .iter()
        .filter_map(|field| {
            validate_field(*field, values, region_required).map(|message| (*field, message))
        })
        .collect()
}
