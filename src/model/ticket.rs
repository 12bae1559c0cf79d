use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Timestamp format used for exported cells.
pub static EXPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One ticket joined with the names of everything it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRowDto {
    pub ticket_id: i32,
    pub last_name: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub passport_series: String,
    pub passport_number: String,
    pub train_name: String,
    pub departure_station: String,
    pub arrival_station: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: NaiveDateTime,
    pub seat_number: i32,
    /// Username of the selling cashier, `None` for self-service bookings
    pub cashier: Option<String>,
}

impl TicketRowDto {
    /// Column headers, in the order of [`Self::to_cells`].
    pub const HEADERS: [&'static str; 12] = [
        "ID",
        "Фамилия",
        "Имя",
        "Отчество",
        "Паспорт",
        "Название поезда",
        "Станция отправления",
        "Станция прибытия",
        "Время отправления",
        "Время прибытия",
        "Место",
        "Кассир",
    ];

    /// Renders the row as text cells matching [`Self::HEADERS`].
    pub fn to_cells(&self) -> [String; 12] {
        [
            self.ticket_id.to_string(),
            self.last_name.clone(),
            self.first_name.clone(),
            self.middle_name.clone().unwrap_or_default(),
            format!("{} {}", self.passport_series, self.passport_number),
            self.train_name.clone(),
            self.departure_station.clone(),
            self.arrival_station.clone(),
            self.departure_time.format(EXPORT_TIME_FORMAT).to_string(),
            self.arrival_time.format(EXPORT_TIME_FORMAT).to_string(),
            self.seat_number.to_string(),
            self.cashier.clone().unwrap_or_default(),
        ]
    }
}
