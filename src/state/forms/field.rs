//! Form field identifiers and values

use serde::{Deserialize, Serialize};

/// How a field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text typed by the user
    Text,
    /// Value picked from an option list
    Select,
}

/// Every field of the loyalty form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    PhoneCode,
    Phone,
    Gender,
    Country,
    Region,
    Address,
    City,
    PostalCode,
    MembershipType,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 11] = [
        Field::FirstName,
        Field::LastName,
        Field::PhoneCode,
        Field::Phone,
        Field::Gender,
        Field::Country,
        Field::Region,
        Field::Address,
        Field::City,
        Field::PostalCode,
        Field::MembershipType,
    ];

    /// Stable field name, matching the stored record keys
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneCode => "phoneCode",
            Self::Phone => "phone",
            Self::Gender => "genderType",
            Self::Country => "country",
            Self::Region => "region",
            Self::Address => "address",
            Self::City => "city",
            Self::PostalCode => "postalCode",
            Self::MembershipType => "membershipType",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::PhoneCode => "Code",
            Self::Phone => "Phone Number",
            Self::Gender => "Gender",
            Self::Country => "Country",
            Self::Region => "Region",
            Self::Address => "Address",
            Self::City => "City",
            Self::PostalCode => "Postal Code",
            Self::MembershipType => "Membership Type",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::PhoneCode | Self::Gender | Self::Country | Self::Region | Self::MembershipType => {
                FieldKind::Select
            }
            _ => FieldKind::Text,
        }
    }

    pub fn is_select(&self) -> bool {
        self.kind() == FieldKind::Select
    }

    /// Position of the field in form order
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    /// Field at a position in form order
    pub fn from_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }
}

/// Current values of every field, owned by the active form session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub phone_code: String,
    pub phone: String,
    pub gender_type: String,
    pub country: String,
    pub region: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub membership_type: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneCode => &self.phone_code,
            Field::Phone => &self.phone,
            Field::Gender => &self.gender_type,
            Field::Country => &self.country,
            Field::Region => &self.region,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::PostalCode => &self.postal_code,
            Field::MembershipType => &self.membership_type,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneCode => &mut self.phone_code,
            Field::Phone => &mut self.phone,
            Field::Gender => &mut self.gender_type,
            Field::Country => &mut self.country,
            Field::Region => &mut self.region,
            Field::Address => &mut self.address,
            Field::City => &mut self.city,
            Field::PostalCode => &mut self.postal_code,
            Field::MembershipType => &mut self.membership_type,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Display name, e.g. "Jane Doe"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
