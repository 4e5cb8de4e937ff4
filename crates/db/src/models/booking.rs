//! Types shared by every booking kind and the cross-table reports.

use serde::Serialize;

use super::contact::Contact;
use super::engineering_booking::EngineeringBooking;
use super::karaoke_hosting::KaraokeHostingBooking;
use super::performance_booking::PerformanceBooking;

/// The four tables that carry a status and a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTable {
    Contacts,
    Engineering,
    Performance,
    KaraokeHosting,
}

impl BookingTable {
    pub const ALL: [BookingTable; 4] = [
        BookingTable::Contacts,
        BookingTable::Engineering,
        BookingTable::Performance,
        BookingTable::KaraokeHosting,
    ];

    /// SQL table name.
    pub fn table_name(self) -> &'static str {
        match self {
            BookingTable::Contacts => "contacts",
            BookingTable::Engineering => "engineering_bookings",
            BookingTable::Performance => "performance_bookings",
            BookingTable::KaraokeHosting => "karaoke_hosting_bookings",
        }
    }
}

/// Status/price patch applied to a contact or booking.
#[derive(Debug, Clone, Default)]
pub struct StatusPriceUpdate {
    pub status: Option<String>,
    pub price: Option<f64>,
}

/// Search filters for `GET /bookings/search`. Blank filters are `None`.
#[derive(Debug, Clone, Default)]
pub struct BookingSearch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Rows from every booking table, grouped by category.
#[derive(Debug, Clone, Serialize)]
pub struct BookingCollections {
    pub contacts: Vec<Contact>,
    pub engineering_bookings: Vec<EngineeringBooking>,
    pub performance_bookings: Vec<PerformanceBooking>,
    pub karaoke_hosting_bookings: Vec<KaraokeHostingBooking>,
}

/// Twelve monthly earnings buckets per category (January first).
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyEarnings {
    pub year: Option<i32>,
    pub contact_monthly: [f64; 12],
    pub engineering_monthly: [f64; 12],
    pub performance_monthly: [f64; 12],
    pub karaoke_hosting_monthly: [f64; 12],
}
