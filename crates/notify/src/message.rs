use chrono::NaiveDate;

/// The booking details carried in an outbound notice.
///
/// A dedicated struct rather than the persisted booking record: the notice
/// deliberately excludes the cancellation token, which must never leave
/// the booking response.
#[derive(Debug, Clone)]
pub struct BookingNotice {
    pub date: NaiveDate,
    pub time: String,
    pub provider_id: String,
    pub service_id: Option<String>,
    pub name: String,
    pub phone: String,
    pub notes: String,
}

/// Renders the HTML message body for a new booking.
pub fn render_booking_notice(notice: &BookingNotice) -> String {
    let service = notice.service_id.as_deref().unwrap_or("-");
    let notes = if notice.notes.is_empty() {
        "-"
    } else {
        notice.notes.as_str()
    };

    format!(
        "💈 <b>New booking</b>\n\
         📅 {date} {time}\n\
         👤 {name}\n\
         📞 {phone}\n\
         💇 Provider: {provider}\n\
         ✂️ Service: {service}\n\
         📝 {notes}",
        date = notice.date.format("%Y-%m-%d"),
        time = notice.time,
        name = notice.name,
        phone = notice.phone,
        provider = notice.provider_id,
    )
}
