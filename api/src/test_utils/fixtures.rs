//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{NaiveDate, NaiveTime, Utc};

use crate::domain::entities::{
    Admin, AdminId, Appointment, AppointmentId, AppointmentStatus, Availability, AvailabilityId,
    Specialist, SpecialistId, Specialty, SpecialtyId,
};

/// A Monday (day_of_week 1) used throughout the tests
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
}

/// The day after [`monday`]
pub fn tuesday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 3).unwrap()
}

/// A slot time on the hour
pub fn slot(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap()
}

/// Create a test specialty with default values
pub fn test_specialty() -> Specialty {
    test_specialty_priced(5000)
}

/// Create a test specialty with a specific base price
pub fn test_specialty_priced(base_price_cents: i64) -> Specialty {
    Specialty {
        id: SpecialtyId::new(),
        name: "Sports Therapy".to_string(),
        description: Some("Treatment for sports injuries".to_string()),
        base_price_cents,
        duration_minutes: 60,
        is_active: true,
        created_at: Utc::now(),
    }
}

/// Create a test specialist belonging to a specialty
pub fn test_specialist(specialty_id: SpecialtyId) -> Specialist {
    Specialist {
        id: SpecialistId::new(),
        first_name: "Maria".to_string(),
        last_name: "Gonzalez".to_string(),
        email: "maria@clinic.test".to_string(),
        phone: Some("+34 600 123 456".to_string()),
        bio: Some("Ten years of experience".to_string()),
        photo_url: None,
        is_active: true,
        specialty_id,
        created_at: Utc::now(),
    }
}

/// Create an active availability window for a weekday (0 = Sunday)
pub fn test_availability(specialist_id: SpecialistId, day_of_week: i16) -> Availability {
    Availability {
        id: AvailabilityId::new(),
        specialist_id,
        day_of_week,
        start_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        is_active: true,
    }
}

/// Create an inactive availability window for a weekday
pub fn inactive_availability(specialist_id: SpecialistId, day_of_week: i16) -> Availability {
    Availability {
        is_active: false,
        ..test_availability(specialist_id, day_of_week)
    }
}

/// Create a pending test appointment at a given slot
pub fn test_appointment(
    specialty_id: SpecialtyId,
    specialist_id: SpecialistId,
    date: NaiveDate,
    time: NaiveTime,
) -> Appointment {
    test_appointment_with_status(
        specialty_id,
        specialist_id,
        date,
        time,
        AppointmentStatus::Pending,
    )
}

/// Create a test appointment in a specific status
pub fn test_appointment_with_status(
    specialty_id: SpecialtyId,
    specialist_id: SpecialistId,
    date: NaiveDate,
    time: NaiveTime,
    status: AppointmentStatus,
) -> Appointment {
    let id = AppointmentId::new();
    Appointment {
        id,
        specialty_id,
        specialist_id,
        date,
        time,
        status,
        price_cents: 5000,
        patient_name: "Juan Perez".to_string(),
        patient_email: "juan@example.com".to_string(),
        patient_phone: "+34 600 000 001".to_string(),
        unique_token: format!("tok{}", &id.0.simple().to_string()[..9]),
        notes: None,
        confirmed_at: None,
        confirmed_by: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a test admin
pub fn test_admin() -> Admin {
    Admin {
        id: AdminId::new(),
        name: "Clinic Admin".to_string(),
        email: "admin@clinic.test".to_string(),
        api_key_hash: "abc123hash".to_string(),
        is_active: true,
    }
}
