use serde::{Deserialize, Serialize};

use crate::formats::{AddressProto, PersonProto};

pub const PERSON_NAME: &str = "Hamza RBATI";
pub const PERSON_ID: i32 = 123;
pub const PERSON_EMAIL: &str = "7vmzv@example.com";
pub const PHONE_PREFIX: &str = "555-010";
pub const STREET: &str = "24 hay iqor";
pub const CITY: &str = "Zaouiat chiekh";
pub const STATE: &str = "BM";
pub const ZIP: &str = "12345";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureShape {
    pub phone_numbers: usize,
    pub addresses: usize,
}

impl FixtureShape {
    pub const STANDARD: Self = Self {
        phone_numbers: 100,
        addresses: 100,
    };
}

impl Default for FixtureShape {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AddressData {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonData {
    pub name: String,
    pub id: i32,
    pub email: String,
    pub phone_numbers: Vec<String>,
    pub addresses: Vec<AddressData>,
}

impl PersonData {
    /// Field-by-field comparison against the Protobuf realization of the
    /// same person.
    #[must_use]
    pub fn matches_proto(&self, proto: &PersonProto) -> bool {
        self.name == proto.name
            && self.id == proto.id
            && self.email == proto.email
            && self.phone_numbers == proto.phone_numbers
            && self.addresses.len() == proto.addresses.len()
            && self
                .addresses
                .iter()
                .zip(&proto.addresses)
                .all(|(data, proto)| {
                    data.street == proto.street
                        && data.city == proto.city
                        && data.state == proto.state
                        && data.zip == proto.zip
                })
    }
}

/// Not zero-padded: index 0 gives "555-0100", index 99 gives "555-01099".
#[must_use]
pub fn phone_number(index: usize) -> String {
    format!("{PHONE_PREFIX}{index}")
}

#[must_use]
pub fn create_large_data(shape: FixtureShape) -> PersonData {
    let phone_numbers = (0..shape.phone_numbers).map(phone_number).collect();

    let addresses = (0..shape.addresses)
        .map(|_| AddressData {
            street: STREET.to_string(),
            city: CITY.to_string(),
            state: STATE.to_string(),
            zip: ZIP.to_string(),
        })
        .collect();

    PersonData {
        name: PERSON_NAME.to_string(),
        id: PERSON_ID,
        email: PERSON_EMAIL.to_string(),
        phone_numbers,
        addresses,
    }
}

#[must_use]
pub fn create_large_person(shape: FixtureShape) -> PersonProto {
    let phone_numbers = (0..shape.phone_numbers).map(phone_number).collect();

    let addresses = (0..shape.addresses)
        .map(|_| AddressProto {
            street: STREET.to_string(),
            city: CITY.to_string(),
            state: STATE.to_string(),
            zip: ZIP.to_string(),
        })
        .collect();

    PersonProto {
        name: PERSON_NAME.to_string(),
        id: PERSON_ID,
        email: PERSON_EMAIL.to_string(),
        phone_numbers,
        addresses,
    }
}

/// Both realizations of the benchmark person, built once before any timing.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub shape: FixtureShape,
    pub data: PersonData,
    pub person: PersonProto,
}

impl Fixtures {
    #[must_use]
    pub fn new(shape: FixtureShape) -> Self {
        Self {
            shape,
            data: create_large_data(shape),
            person: create_large_person(shape),
        }
    }

    #[must_use]
    pub fn standard() -> Self {
        Self::new(FixtureShape::STANDARD)
    }
}
