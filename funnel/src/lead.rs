use tracing::{debug, info};

use crate::error::LeadError;
use crate::payload::{HandoffOptions, OutboundLeadPayload};
use crate::phone::normalize_phone;

/// Shown in the onboarding header when no clinic name came in with the link.
pub const DEFAULT_BRAND: &str = "Zenith";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    FirstName,
    LastName,
    ClinicName,
    Email,
    Phone,
}

impl LeadField {
    /// Form order.
    pub const ALL: [LeadField; 5] = [
        LeadField::FirstName,
        LeadField::LastName,
        LeadField::ClinicName,
        LeadField::Email,
        LeadField::Phone,
    ];

    /// DOM id of the input, also the field name the server accepts on a plain form post.
    pub fn id(self) -> &'static str {
        match self {
            LeadField::FirstName => "firstName",
            LeadField::LastName => "lastName",
            LeadField::ClinicName => "clinicName",
            LeadField::Email => "email",
            LeadField::Phone => "phone",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        LeadField::ALL.into_iter().find(|field| field.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadField::FirstName => "First Name",
            LeadField::LastName => "Last Name",
            LeadField::ClinicName => "Clinic Name",
            LeadField::Email => "Work Email",
            LeadField::Phone => "Phone",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            LeadField::FirstName => "Jane",
            LeadField::LastName => "Doe",
            LeadField::ClinicName => "Ex. Tranquil Massage",
            LeadField::Email => "jane@clinic.com",
            LeadField::Phone => "(555) 000-0000",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            LeadField::Email => "email",
            LeadField::Phone => "tel",
            _ => "text",
        }
    }
}

/// Header text for the onboarding page.
pub fn header_label(inbound: Option<&str>) -> &str {
    match inbound {
        Some(name) if !name.trim().is_empty() => name,
        _ => DEFAULT_BRAND,
    }
}

/// What the visitor has typed so far. Lives as long as the form page is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    first_name: String,
    last_name: String,
    clinic_name: String,
    email: String,
    phone: String,
    seeded: bool,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::ClinicName => &self.clinic_name,
            LeadField::Email => &self.email,
            LeadField::Phone => &self.phone,
        }
    }

    fn slot_mut(&mut self, field: LeadField) -> &mut String {
        match field {
            LeadField::FirstName => &mut self.first_name,
            LeadField::LastName => &mut self.last_name,
            LeadField::ClinicName => &mut self.clinic_name,
            LeadField::Email => &mut self.email,
            LeadField::Phone => &mut self.phone,
        }
    }

    /// Replaces one field. Anything goes while typing; checks happen on submit.
    pub fn update_field(&mut self, field: LeadField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Applies the clinic name carried in on the link, once per form.
    ///
    /// The inbound value may show up after the first render, so callers can hand
    /// over every value they observe; only the first non-blank one counts. A clinic
    /// name the visitor already typed is never replaced. Returns true when the field
    /// was written.
    pub fn seed_clinic_name(&mut self, inbound: Option<&str>) -> bool {
        if self.seeded {
            return false;
        }
        let Some(value) = inbound.filter(|v| !v.trim().is_empty()) else {
            return false;
        };
        self.seeded = true;

        if !self.clinic_name.is_empty() {
            debug!("clinic name already edited, inbound value ignored");
            return false;
        }
        self.clinic_name = value.to_string();
        true
    }

    pub fn validate(&self) -> Result<ValidLead, LeadError> {
        let missing: Vec<LeadField> = LeadField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect();

        if !missing.is_empty() {
            let ids: Vec<&str> = missing.iter().map(|f| f.id()).collect();
            debug!(missing = ?ids, "lead rejected");
            return Err(LeadError::MissingFields { missing });
        }

        Ok(ValidLead {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            clinic_name: self.clinic_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: normalize_phone(&self.phone),
        })
    }

    /// Validates and builds the navigation target for the scheduling page.
    /// The form itself is left as is either way.
    pub fn submit(&self, options: &HandoffOptions) -> Result<Handoff, LeadError> {
        let lead = self.validate()?;
        let payload = OutboundLeadPayload::from_lead(&lead, options);
        let target = format!("{}?{}", options.schedule_path, payload.to_query_string());

        info!(keys = payload.len(), "lead handoff built");
        Ok(Handoff { payload, target })
    }
}

/// A lead that passed the required-field check. `phone` is already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLead {
    pub first_name: String,
    pub last_name: String,
    pub clinic_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub payload: OutboundLeadPayload,
    /// Path plus query string, ready for `location.href` or a redirect.
    pub target: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PayloadKey;

    fn filled() -> LeadForm {
        let mut form = LeadForm::new();
        form.update_field(LeadField::FirstName, "Jane");
        form.update_field(LeadField::LastName, "Doe");
        form.update_field(LeadField::ClinicName, "Tranquil Massage");
        form.update_field(LeadField::Email, "jane@clinic.com");
        form.update_field(LeadField::Phone, "(555) 123-4567");
        form
    }

    #[test]
    fn field_ids_round_trip() {
        for field in LeadField::ALL {
            assert_eq!(LeadField::from_id(field.id()), Some(field));
        }
        assert_eq!(LeadField::from_id("company"), None);
    }

    #[test]
    fn submit_builds_schedule_target() {
        let handoff = filled().submit(&HandoffOptions::default()).unwrap();

        assert!(handoff.target.starts_with("/schedule?"));
        assert!(handoff.target.contains(
            "first_name=Jane&last_name=Doe&email=jane%40clinic.com&phone=5551234567\
             &organization=Tranquil+Massage"
        ));
        assert!(handoff
            .target
            .ends_with("&firstName=Jane&lastName=Doe&clinicName=Tranquil+Massage"));
    }

    #[test]
    fn blank_or_whitespace_field_blocks_submit() {
        for field in LeadField::ALL {
            for blank in ["", "   ", "\t\n"] {
                let mut form = filled();
                form.update_field(field, blank);
                let before = form.clone();

                let err = form.submit(&HandoffOptions::default()).unwrap_err();
                assert_eq!(err.to_string(), "Please fill in all fields.");
                assert_eq!(err.missing_fields(), &[field]);
                assert_eq!(form, before);
            }
        }
    }

    #[test]
    fn missing_fields_are_listed_in_form_order() {
        let mut form = LeadForm::new();
        form.update_field(LeadField::LastName, "Doe");
        form.update_field(LeadField::Phone, "555");

        let err = form.validate().unwrap_err();
        assert_eq!(
            err.missing_fields(),
            &[LeadField::FirstName, LeadField::ClinicName, LeadField::Email]
        );
    }

    #[test]
    fn values_are_trimmed_before_handoff() {
        let mut form = filled();
        form.update_field(LeadField::FirstName, "  Jane ");
        form.update_field(LeadField::Email, " jane@clinic.com\n");

        let lead = form.validate().unwrap();
        assert_eq!(lead.first_name, "Jane");
        assert_eq!(lead.email, "jane@clinic.com");
        // raw input is untouched
        assert_eq!(form.value(LeadField::FirstName), "  Jane ");
    }

    #[test]
    fn email_format_is_not_checked() {
        let mut form = filled();
        form.update_field(LeadField::Email, "not-an-email");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn empty_form_fails_with_inline_message_not_format_rules() {
        let err = LeadForm::new().submit(&HandoffOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Please fill in all fields.");
        assert_eq!(err.missing_fields(), &LeadField::ALL);

        let mut form = filled();
        form.update_field(LeadField::Email, "not-an-email");
        form.update_field(LeadField::Phone, "call me");
        let handoff = form.submit(&HandoffOptions::default()).unwrap();
        assert_eq!(handoff.payload.get(PayloadKey::Email), Some("not-an-email"));
    }

    #[test]
    fn seed_writes_inbound_clinic_name() {
        let mut form = LeadForm::new();
        assert!(form.seed_clinic_name(Some("Willow Spa")));
        assert_eq!(form.value(LeadField::ClinicName), "Willow Spa");
        assert!(!form.seed_clinic_name(Some("Other Clinic")));
    }

    #[test]
    fn seed_runs_once_and_keeps_later_edits() {
        let mut form = LeadForm::new();
        form.seed_clinic_name(Some("Willow Spa"));
        form.update_field(LeadField::ClinicName, "Willow Spa & Wellness");

        assert!(!form.seed_clinic_name(Some("Willow Spa")));
        assert!(!form.seed_clinic_name(Some("Other Clinic")));
        assert_eq!(form.value(LeadField::ClinicName), "Willow Spa & Wellness");
    }

    #[test]
    fn seed_waits_for_a_late_inbound_value() {
        let mut form = LeadForm::new();
        assert!(!form.seed_clinic_name(None));
        assert!(!form.seed_clinic_name(Some("  ")));
        assert_eq!(form.value(LeadField::ClinicName), "");

        assert!(form.seed_clinic_name(Some("Willow Spa")));
        assert_eq!(form.value(LeadField::ClinicName), "Willow Spa");
    }

    #[test]
    fn seed_does_not_clobber_typed_clinic_name() {
        let mut form = LeadForm::new();
        form.update_field(LeadField::ClinicName, "Typed First");

        assert!(!form.seed_clinic_name(Some("Willow Spa")));
        assert_eq!(form.value(LeadField::ClinicName), "Typed First");

        // seeding is spent even though nothing was written
        form.update_field(LeadField::ClinicName, "");
        assert!(!form.seed_clinic_name(Some("Willow Spa")));
        assert_eq!(form.value(LeadField::ClinicName), "");
    }

    #[test]
    fn header_falls_back_to_brand() {
        assert_eq!(header_label(Some("Willow Spa")), "Willow Spa");
        assert_eq!(header_label(None), "Zenith");
        assert_eq!(header_label(Some(" ")), "Zenith");
    }
}
