//! Integration tests for appointment booking and cancellation.

use prevention_hub_ui::appointments::{DOCTORS, HOSPITALS, REASONS};
use prevention_hub_ui::{AppointmentBook, AppointmentRequest, AppointmentStatus, UiError};
use time::macros::{date, time};
use time::{Date, Time};

const TODAY: Date = date!(2025-06-01);

fn request(date: Date, time: Time) -> AppointmentRequest {
    AppointmentRequest {
        doctor: DOCTORS[0].to_string(),
        hospital: HOSPITALS[1].to_string(),
        date,
        time,
        reason: REASONS[1].to_string(),
        notes: String::new(),
    }
}

#[test]
fn appointment_booking_tests_books_and_confirms() {
    let mut book = AppointmentBook::new();
    let appointment = book
        .book(request(date!(2025-06-10), time!(9:30)), TODAY)
        .expect("booking should succeed");

    assert_eq!(appointment.id, 1);
    assert_eq!(appointment.status, AppointmentStatus::Booked);
    assert!(appointment.confirmation().contains("2025-06-10"));
    assert!(appointment.confirmation().contains("09:30"));
}

#[test]
fn appointment_booking_tests_same_day_is_allowed() {
    let mut book = AppointmentBook::new();
    assert!(book.book(request(TODAY, time!(14:00)), TODAY).is_ok());
}

#[test]
fn appointment_booking_tests_rejects_past_date() {
    let mut book = AppointmentBook::new();
    let error = book
        .book(request(date!(2025-05-31), time!(9:00)), TODAY)
        .expect_err("past date should be rejected");
    assert_eq!(error, UiError::PastDate("2025-05-31".to_string()));
    assert!(book.is_empty());
}

#[test]
fn appointment_booking_tests_rejects_off_grid_time() {
    let mut book = AppointmentBook::new();
    let error = book
        .book(request(TODAY, time!(9:15)), TODAY)
        .expect_err("off-grid time should be rejected");
    assert_eq!(error, UiError::InvalidTimeSlot("09:15".to_string()));
}

#[test]
fn appointment_booking_tests_rejects_unknown_doctor() {
    let mut book = AppointmentBook::new();
    let mut bad = request(TODAY, time!(10:00));
    bad.doctor = "Dr. Nobody".to_string();
    assert_eq!(
        book.book(bad, TODAY),
        Err(UiError::UnknownCatalogEntry("Dr. Nobody".to_string()))
    );
}

#[test]
fn appointment_booking_tests_sorted_by_date_then_time() {
    let mut book = AppointmentBook::new();
    book.book(request(date!(2025-06-12), time!(8:00)), TODAY)
        .expect("booking should succeed");
    book.book(request(date!(2025-06-10), time!(15:30)), TODAY)
        .expect("booking should succeed");
    book.book(request(date!(2025-06-10), time!(9:00)), TODAY)
        .expect("booking should succeed");

    let ids: Vec<u64> = book.sorted().iter().map(|appointment| appointment.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);
}

#[test]
fn appointment_booking_tests_cancel_marks_status_once() {
    let mut book = AppointmentBook::new();
    let id = book
        .book(request(TODAY, time!(11:00)), TODAY)
        .expect("booking should succeed")
        .id;

    book.cancel(id).expect("cancel should succeed");
    assert_eq!(book.sorted()[0].status, AppointmentStatus::Cancelled);
    assert_eq!(book.len(), 1);
    assert_eq!(book.cancel(id), Err(UiError::AlreadyCancelled(id)));
    assert_eq!(book.cancel(99), Err(UiError::UnknownAppointment(99)));
}
