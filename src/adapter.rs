//! Pattern: Adapter (object adapter)
//! Category: Structural
//!
//! Two customer record types store names and phone numbers differently.
//! Each adapter wraps one record by composition and exposes it through the
//! shared [`Customer`] trait, without touching the record itself.

/// First type of customer: first and last name stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyCustomer {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl LegacyCustomer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// Second type of customer: area code and local number stored separately.
#[derive(Debug, Clone, PartialEq)]
pub struct ThirdPartyCustomer {
    pub name: String,
    pub area_code: String,
    pub phone_number: String,
}

impl ThirdPartyCustomer {
    pub fn new(
        name: impl Into<String>,
        area_code: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            area_code: area_code.into(),
            phone_number: phone_number.into(),
        }
    }
}

/// How callers want to talk to any customer.
pub trait Customer {
    /// Full name of the customer.
    fn name(&self) -> String;

    /// Full phone number of the customer.
    fn phone(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct LegacyAdapter {
    customer: LegacyCustomer,
}

impl LegacyAdapter {
    pub fn new(customer: LegacyCustomer) -> Self {
        Self { customer }
    }

    pub fn inner(&self) -> &LegacyCustomer {
        &self.customer
    }

    pub fn into_inner(self) -> LegacyCustomer {
        self.customer
    }
}

impl Customer for LegacyAdapter {
    fn name(&self) -> String {
        format!("{} {}", self.customer.first_name, self.customer.last_name)
    }

    fn phone(&self) -> String {
        self.customer.phone_number.clone()
    }
}

#[derive(Debug, Clone)]
pub struct ThirdPartyAdapter {
    customer: ThirdPartyCustomer,
}

impl ThirdPartyAdapter {
    pub fn new(customer: ThirdPartyCustomer) -> Self {
        Self { customer }
    }

    pub fn inner(&self) -> &ThirdPartyCustomer {
        &self.customer
    }

    pub fn into_inner(self) -> ThirdPartyCustomer {
        self.customer
    }
}

impl Customer for ThirdPartyAdapter {
    fn name(&self) -> String {
        self.customer.name.clone()
    }

    fn phone(&self) -> String {
        format!("{}-{}", self.customer.area_code, self.customer.phone_number)
    }
}

/// Name and phone on separate lines, as the demo prints them.
pub fn describe(customer: &dyn Customer) -> String {
    format!("{}\n{}", customer.name(), customer.phone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> LegacyCustomer {
        LegacyCustomer::new("Bob", "Smith", "555-321-9876")
    }

    fn jackie() -> ThirdPartyCustomer {
        ThirdPartyCustomer::new("Jackie Crusoe", "555", "777-5432")
    }

    #[test]
    fn test_legacy_name_joins_with_space() {
        let adapter = LegacyAdapter::new(bob());
        assert_eq!(adapter.name(), "Bob Smith");
    }

    #[test]
    fn test_legacy_phone_passes_through() {
        let adapter = LegacyAdapter::new(bob());
        assert_eq!(adapter.phone(), "555-321-9876");
    }

    #[test]
    fn test_third_party_name_passes_through() {
        let adapter = ThirdPartyAdapter::new(jackie());
        assert_eq!(adapter.name(), "Jackie Crusoe");
    }

    #[test]
    fn test_third_party_phone_joins_with_hyphen() {
        let adapter = ThirdPartyAdapter::new(jackie());
        assert_eq!(adapter.phone(), "555-777-5432");
    }

    #[test]
    fn test_adapters_do_not_modify_records() {
        let legacy = LegacyAdapter::new(bob());
        let _ = (legacy.name(), legacy.phone());
        assert_eq!(legacy.into_inner(), bob());

        let third = ThirdPartyAdapter::new(jackie());
        let _ = (third.name(), third.phone());
        assert_eq!(third.inner(), &jackie());
    }

    #[test]
    fn test_heterogeneous_customers() {
        let customers: Vec<Box<dyn Customer>> = vec![
            Box::new(LegacyAdapter::new(bob())),
            Box::new(ThirdPartyAdapter::new(jackie())),
        ];
        let lines: Vec<String> = customers.iter().map(|c| describe(c.as_ref())).collect();
        assert_eq!(
            lines,
            vec![
                "Bob Smith\n555-321-9876".to_string(),
                "Jackie Crusoe\n555-777-5432".to_string(),
            ]
        );
    }
}
