//! Customer message templates.
//!
//! Booking messages are in Italian, matching what the shop sends today.

use crate::config::SHOP_NAME;
use crate::domain::Booking;

/// Rendered e-mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub subject: String,
    pub body: String,
}

/// SMS text confirming an appointment.
pub fn booking_confirmation_sms(booking: &Booking) -> String {
    format!(
        "Ciao {}, confermiamo il tuo appuntamento per il {} alle {}.",
        booking.name, booking.date, booking.time
    )
}

/// SMS text announcing a cancellation.
pub fn booking_cancellation_sms(booking: &Booking) -> String {
    format!(
        "Ciao {}, il tuo appuntamento del {} è stato cancellato.",
        booking.name, booking.date
    )
}

pub fn booking_confirmation_email(booking: &Booking) -> Rendered {
    Rendered {
        subject: format!("Conferma Prenotazione - {SHOP_NAME}"),
        body: format!(
            "Ciao {name},\n\n\
             Il tuo appuntamento è confermato!\n\
             Servizio: {service}\n\
             Data: {date}\n\
             Ora: {time}\n\
             Barbiere: {barber}\n\n\
             A presto,\n{SHOP_NAME}",
            name = booking.name,
            service = booking.service,
            date = booking.date,
            time = booking.time,
            barber = booking.barber,
        ),
    }
}

pub fn booking_cancellation_email(booking: &Booking) -> Rendered {
    Rendered {
        subject: format!("Cancellazione Appuntamento - {SHOP_NAME}"),
        body: format!(
            "Ciao {name},\n\n\
             Ci dispiace informarti che il tuo appuntamento previsto per il {date} alle {time} è stato cancellato.\n\n\
             Contattaci per fissare un nuovo appuntamento.\n\n\
             {SHOP_NAME}",
            name = booking.name,
            date = booking.date,
            time = booking.time,
        ),
    }
}

pub fn welcome_email(name: &str) -> Rendered {
    Rendered {
        subject: format!("Benvenuto da {SHOP_NAME}"),
        body: format!(
            "Ciao {name},\n\n\
             Grazie per esserti registrato! Ora puoi prenotare i tuoi appuntamenti online.\n\n\
             A presto,\n{SHOP_NAME}"
        ),
    }
}

pub fn goodbye_email(name: &str) -> Rendered {
    Rendered {
        subject: format!("Account eliminato - {SHOP_NAME}"),
        body: format!(
            "Ciao {name},\n\n\
             Il tuo account è stato eliminato. Ci dispiace vederti andare via!\n\n\
             {SHOP_NAME}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn booking() -> Booking {
        Booking {
            id: 1,
            barber: "lele".to_string(),
            service: "Taglio".to_string(),
            date: "2024-06-01".to_string(),
            time: "10:00".to_string(),
            name: "Mario".to_string(),
            surname: "Rossi".to_string(),
            email: "mario@example.com".to_string(),
            phone: "3331234567".to_string(),
            message: None,
            price: 25.0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_confirmation_mentions_slot_and_barber() {
        let rendered = booking_confirmation_email(&booking());
        assert_eq!(rendered.subject, "Conferma Prenotazione - Silla Barber Shop");
        assert!(rendered.body.contains("Servizio: Taglio"));
        assert!(rendered.body.contains("Data: 2024-06-01"));
        assert!(rendered.body.contains("Ora: 10:00"));
        assert!(rendered.body.contains("Barbiere: lele"));
    }

    #[test]
    fn test_cancellation_sms() {
        assert_eq!(
            booking_cancellation_sms(&booking()),
            "Ciao Mario, il tuo appuntamento del 2024-06-01 è stato cancellato."
        );
    }

    #[test]
    fn test_account_mails_greet_by_name() {
        assert!(welcome_email("Anna").body.starts_with("Ciao Anna,"));
        assert!(goodbye_email("Anna").body.starts_with("Ciao Anna,"));
    }
}
