//! Session-scoped doctor appointment booking.

use time::{Date, Time};
use tracing::{debug, info};

use crate::UiError;

/// Bookable doctors.
pub const DOCTORS: [&str; 3] = [
    "Dr. Alice Smith (Endocrinologist)",
    "Dr. Bob Johnson (General Practitioner)",
    "Dr. Carol White (Nutritionist)",
];

/// Bookable hospitals and clinics.
pub const HOSPITALS: [&str; 3] = [
    "City General Hospital",
    "Diabetes Care Clinic",
    "Wellness Medical Center",
];

/// Selectable appointment reasons.
pub const REASONS: [&str; 5] = [
    "General Check-up",
    "Diabetes Management",
    "Diet Consultation",
    "Symptoms Review",
    "Follow-up",
];

/// Minutes between selectable appointment times.
pub const SLOT_MINUTES: u8 = 30;

/// Booking form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentRequest {
    /// Entry of [`DOCTORS`].
    pub doctor: String,
    /// Entry of [`HOSPITALS`].
    pub hospital: String,
    /// Appointment day.
    pub date: Date,
    /// Appointment start, on a [`SLOT_MINUTES`] step.
    pub time: Time,
    /// Entry of [`REASONS`].
    pub reason: String,
    /// Optional free-text notes.
    pub notes: String,
}

/// Lifecycle of a booked appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Active booking.
    Booked,
    /// Cancelled by the user.
    Cancelled,
}

impl AppointmentStatus {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "Booked",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

/// One stored appointment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    /// Session-unique id.
    pub id: u64,
    /// Booked doctor.
    pub doctor: String,
    /// Booked hospital.
    pub hospital: String,
    /// Appointment day.
    pub date: Date,
    /// Appointment start.
    pub time: Time,
    /// Reason for the visit.
    pub reason: String,
    /// Free-text notes.
    pub notes: String,
    /// Current status.
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Confirmation message shown after booking.
    pub fn confirmation(&self) -> String {
        format!(
            "Appointment with {} at {} on {} at {} has been booked!",
            self.doctor,
            self.hospital,
            format_date(self.date),
            format_time(self.time)
        )
    }
}

/// Appointments booked in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
    next_id: u64,
}

impl AppointmentBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores a booking.
    ///
    /// # Errors
    /// - [`UiError::PastDate`] when `request.date` is before `today`.
    /// - [`UiError::InvalidTimeSlot`] when the time is off the slot grid.
    /// - [`UiError::UnknownCatalogEntry`] for doctors, hospitals or reasons
    ///   outside the catalogues.
    pub fn book(&mut self, request: AppointmentRequest, today: Date) -> Result<&Appointment, UiError> {
        if request.date < today {
            return Err(UiError::PastDate(format_date(request.date)));
        }

        if request.time.minute() % SLOT_MINUTES != 0
            || request.time.second() != 0
            || request.time.nanosecond() != 0
        {
            return Err(UiError::InvalidTimeSlot(format_time(request.time)));
        }

        for (value, catalogue) in [
            (&request.doctor, DOCTORS.as_slice()),
            (&request.hospital, HOSPITALS.as_slice()),
            (&request.reason, REASONS.as_slice()),
        ] {
            if !catalogue.contains(&value.as_str()) {
                return Err(UiError::UnknownCatalogEntry(value.clone()));
            }
        }

        self.next_id += 1;
        let appointment = Appointment {
            id: self.next_id,
            doctor: request.doctor,
            hospital: request.hospital,
            date: request.date,
            time: request.time,
            reason: request.reason,
            notes: request.notes,
            status: AppointmentStatus::Booked,
        };
        info!(appointment_id = appointment.id, "appointment booked");
        self.appointments.push(appointment);

        let index = self.appointments.len() - 1;
        Ok(&self.appointments[index])
    }

    /// Appointments ordered by date then time; ties keep booking order.
    pub fn sorted(&self) -> Vec<&Appointment> {
        let mut sorted: Vec<&Appointment> = self.appointments.iter().collect();
        sorted.sort_by_key(|appointment| (appointment.date, appointment.time));
        sorted
    }

    /// Returns `true` when nothing has been booked.
    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Number of stored appointments, cancelled ones included.
    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    /// Marks a booked appointment as cancelled.
    ///
    /// # Errors
    /// Returns [`UiError::UnknownAppointment`] for unknown ids and
    /// [`UiError::AlreadyCancelled`] when the appointment is not active.
    pub fn cancel(&mut self, id: u64) -> Result<(), UiError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|appointment| appointment.id == id)
            .ok_or(UiError::UnknownAppointment(id))?;

        if appointment.status == AppointmentStatus::Cancelled {
            return Err(UiError::AlreadyCancelled(id));
        }

        appointment.status = AppointmentStatus::Cancelled;
        debug!(appointment_id = id, "appointment cancelled");
        Ok(())
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Formats a time as `HH:MM`.
pub fn format_time(time: Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}
