use funnel::{BookingWidget, HandoffOptions};

/// Adds the `phone_number` alias to the handoff query. Keep in step with the
/// server's INCLUDE_PHONE_NUMBER_ALIAS so both paths send the same keys.
pub const INCLUDE_PHONE_NUMBER_ALIAS: bool = false;

pub fn handoff_options() -> HandoffOptions {
    HandoffOptions {
        include_phone_number_alias: INCLUDE_PHONE_NUMBER_ALIAS,
        ..HandoffOptions::default()
    }
}

pub fn booking_widget() -> BookingWidget {
    BookingWidget::default()
}
