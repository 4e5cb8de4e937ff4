//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod booking_report_repo;
pub mod booking_repo;
pub mod contact_repo;
pub mod dj_note_repo;
pub mod finance_repo;
pub mod form_state_repo;
pub mod gallery_repo;
pub mod inquiry_repo;
pub mod instagram_post_repo;
pub mod karaoke_repo;
pub mod karaoke_settings_repo;
pub mod music_break_repo;
pub mod photo_slider_repo;
pub mod promotion_repo;
pub mod review_repo;
pub mod user_repo;

pub use booking_report_repo::BookingReportRepo;
pub use booking_repo::{
    BookingRepo, EngineeringBookingRepo, KaraokeHostingRepo, PerformanceBookingRepo,
};
pub use contact_repo::ContactRepo;
pub use dj_note_repo::DjNoteRepo;
pub use finance_repo::{ExpenseRepo, FinanceRepo, IncomeRepo, MileageRepo};
pub use form_state_repo::FormStateRepo;
pub use gallery_repo::GalleryRepo;
pub use inquiry_repo::InquiryRepo;
pub use instagram_post_repo::InstagramPostRepo;
pub use karaoke_repo::KaraokeRepo;
pub use karaoke_settings_repo::KaraokeSettingsRepo;
pub use music_break_repo::MusicBreakRepo;
pub use photo_slider_repo::PhotoSliderRepo;
pub use promotion_repo::PromotionRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;

/// Lower-cased `%term%` pattern for `LIKE ... ESCAPE '\'`, with the
/// wildcards `%` and `_` in `term` matched literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
