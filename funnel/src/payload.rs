//! The query-string contract with the embedded booking widget.
//!
//! The widget is a third party and only some of the key names it autofills from
//! are documented, so every field goes out under both naming conventions plus an
//! `organization` alias for the clinic name. The key set is closed: adding a key
//! means adding a `PayloadKey` variant.

use url::form_urlencoded;

use crate::lead::ValidLead;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadKey {
    FirstNameSnake,
    LastNameSnake,
    Email,
    Phone,
    Organization,
    FirstNameCamel,
    LastNameCamel,
    ClinicName,
    /// Extra phone alias some widget setups autofill from. Off by default.
    PhoneNumber,
}

impl PayloadKey {
    /// Always sent, in this order.
    pub const CANONICAL: [PayloadKey; 8] = [
        PayloadKey::FirstNameSnake,
        PayloadKey::LastNameSnake,
        PayloadKey::Email,
        PayloadKey::Phone,
        PayloadKey::Organization,
        PayloadKey::FirstNameCamel,
        PayloadKey::LastNameCamel,
        PayloadKey::ClinicName,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PayloadKey::FirstNameSnake => "first_name",
            PayloadKey::LastNameSnake => "last_name",
            PayloadKey::Email => "email",
            PayloadKey::Phone => "phone",
            PayloadKey::Organization => "organization",
            PayloadKey::FirstNameCamel => "firstName",
            PayloadKey::LastNameCamel => "lastName",
            PayloadKey::ClinicName => "clinicName",
            PayloadKey::PhoneNumber => "phone_number",
        }
    }

    fn value_from(self, lead: &ValidLead) -> &str {
        match self {
            PayloadKey::FirstNameSnake | PayloadKey::FirstNameCamel => &lead.first_name,
            PayloadKey::LastNameSnake | PayloadKey::LastNameCamel => &lead.last_name,
            PayloadKey::Email => &lead.email,
            PayloadKey::Phone | PayloadKey::PhoneNumber => &lead.phone,
            PayloadKey::Organization | PayloadKey::ClinicName => &lead.clinic_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffOptions {
    /// Append `phone_number` after the canonical keys.
    pub include_phone_number_alias: bool,
    pub schedule_path: String,
}

impl Default for HandoffOptions {
    fn default() -> Self {
        Self {
            include_phone_number_alias: false,
            schedule_path: "/schedule".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundLeadPayload {
    entries: Vec<(PayloadKey, String)>,
}

impl OutboundLeadPayload {
    pub fn from_lead(lead: &ValidLead, options: &HandoffOptions) -> Self {
        let mut keys = PayloadKey::CANONICAL.to_vec();
        if options.include_phone_number_alias {
            keys.push(PayloadKey::PhoneNumber);
        }

        let entries = keys
            .into_iter()
            .map(|key| (key, key.value_from(lead).to_string()))
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: PayloadKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `application/x-www-form-urlencoded`, same as the browser's `URLSearchParams`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }
}

/// First name to greet on the scheduling page, read back out of the forwarded query.
pub fn welcome_name(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == PayloadKey::FirstNameCamel.as_str())
        .map(|(_, value)| value.into_owned())
        .filter(|name| !name.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ValidLead {
        ValidLead {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            clinic_name: "Tranquil Massage".to_string(),
            email: "jane@clinic.com".to_string(),
            phone: "5551234567".to_string(),
        }
    }

    #[test]
    fn canonical_query_string() {
        let payload = OutboundLeadPayload::from_lead(&jane(), &HandoffOptions::default());

        assert_eq!(
            payload.to_query_string(),
            "first_name=Jane&last_name=Doe&email=jane%40clinic.com&phone=5551234567\
             &organization=Tranquil+Massage&firstName=Jane&lastName=Doe&clinicName=Tranquil+Massage"
        );
        assert_eq!(payload.len(), 8);
        assert_eq!(payload.get(PayloadKey::PhoneNumber), None);
    }

    #[test]
    fn aliases_carry_equal_values() {
        let payload = OutboundLeadPayload::from_lead(&jane(), &HandoffOptions::default());

        assert_eq!(
            payload.get(PayloadKey::FirstNameSnake),
            payload.get(PayloadKey::FirstNameCamel)
        );
        assert_eq!(
            payload.get(PayloadKey::LastNameSnake),
            payload.get(PayloadKey::LastNameCamel)
        );
        assert_eq!(
            payload.get(PayloadKey::Organization),
            payload.get(PayloadKey::ClinicName)
        );
    }

    #[test]
    fn phone_number_alias_goes_last() {
        let options = HandoffOptions {
            include_phone_number_alias: true,
            ..HandoffOptions::default()
        };
        let payload = OutboundLeadPayload::from_lead(&jane(), &options);
        let query = payload.to_query_string();

        assert!(query.contains("&phone=5551234567&organization=Tranquil+Massage&"));
        assert!(query.ends_with("&clinicName=Tranquil+Massage&phone_number=5551234567"));
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let mut lead = jane();
        lead.clinic_name = "Smith & Sons / Spa=1".to_string();
        let query =
            OutboundLeadPayload::from_lead(&lead, &HandoffOptions::default()).to_query_string();

        assert!(query.contains("organization=Smith+%26+Sons+%2F+Spa%3D1"));
    }

    #[test]
    fn welcome_name_reads_camel_case_first_name() {
        let query =
            OutboundLeadPayload::from_lead(&jane(), &HandoffOptions::default()).to_query_string();
        assert_eq!(welcome_name(&query), Some("Jane".to_string()));
        assert_eq!(welcome_name(&format!("?{query}")), Some("Jane".to_string()));
    }

    #[test]
    fn welcome_name_absent_or_blank() {
        assert_eq!(welcome_name(""), None);
        assert_eq!(welcome_name("first_name=Jane"), None);
        assert_eq!(welcome_name("firstName="), None);
        assert_eq!(welcome_name("firstName=Mary+Ann"), Some("Mary Ann".to_string()));
    }
}
