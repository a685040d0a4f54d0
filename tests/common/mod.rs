//! Shared test doubles: an in-memory Unit of Work and a recording notifier.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use silla_booking::config::Config;
use silla_booking::domain::{Barber, Booking, DayOff, NewBooking, User};
use silla_booking::errors::{AppError, AppResult};
use silla_booking::infra::{
    BarberRepository, BookingRepository, DayOffRepository, UnitOfWork, UserRepository,
};
use silla_booking::services::{
    AuthService, Authenticator, BarberManager, BarberService, BookingManager, BookingService,
    DayOffManager, DayOffService, Notifier,
};

/// Every table kept in memory
#[derive(Default)]
pub struct MemoryDb {
    next_id: AtomicI64,
    barbers: Mutex<BTreeMap<String, Barber>>,
    bookings: Mutex<Vec<Booking>>,
    day_offs: Mutex<Vec<DayOff>>,
    users: Mutex<Vec<User>>,
}

impl MemoryDb {
    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn day_off_count(&self) -> usize {
        self.day_offs.lock().unwrap().len()
    }

    pub fn booking_count(&self) -> usize {
        self.bookings.lock().unwrap().len()
    }

    pub fn stored_user(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl BarberRepository for MemoryDb {
    async fn list(&self) -> AppResult<Vec<Barber>> {
        Ok(self.barbers.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Barber>> {
        Ok(self.barbers.lock().unwrap().get(id).cloned())
    }

    async fn upsert(&self, barber: Barber) -> AppResult<Barber> {
        self.barbers
            .lock()
            .unwrap()
            .insert(barber.id.clone(), barber.clone());
        Ok(barber)
    }

    async fn insert_if_absent(&self, barber: Barber) -> AppResult<bool> {
        let mut barbers = self.barbers.lock().unwrap();
        if barbers.contains_key(&barber.id) {
            return Ok(false);
        }
        barbers.insert(barber.id.clone(), barber);
        Ok(true)
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        Ok(self.barbers.lock().unwrap().remove(id).is_some())
    }
}

#[async_trait]
impl BookingRepository for MemoryDb {
    async fn list_newest_first(&self) -> AppResult<Vec<Booking>> {
        let mut bookings = self.bookings.lock().unwrap().clone();
        bookings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(bookings)
    }

    async fn find_by_date_and_barber(&self, date: &str, barber: &str) -> AppResult<Vec<Booking>> {
        let mut matching: Vec<_> = self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.date == date && b.barber == barber)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.time.cmp(&b.time));
        Ok(matching)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn create(&self, input: NewBooking, timestamp: DateTime<Utc>) -> AppResult<Booking> {
        let booking = Booking {
            id: self.next_id(),
            barber: input.barber,
            service: input.service,
            date: input.date,
            time: input.time,
            name: input.name,
            surname: input.surname,
            email: input.email,
            phone: input.phone,
            message: input.message,
            price: input.price,
            timestamp,
        };
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(booking)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut bookings = self.bookings.lock().unwrap();
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        Ok(bookings.len() < before)
    }
}

#[async_trait]
impl DayOffRepository for MemoryDb {
    async fn list(&self) -> AppResult<Vec<DayOff>> {
        let mut day_offs = self.day_offs.lock().unwrap().clone();
        day_offs.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        Ok(day_offs)
    }

    async fn find_by_barber_and_date(
        &self,
        barber_id: &str,
        date: NaiveDate,
    ) -> AppResult<Vec<DayOff>> {
        Ok(self
            .day_offs
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.barber_id == barber_id && d.date == date)
            .cloned()
            .collect())
    }

    async fn create(&self, barber_id: String, date: NaiveDate) -> AppResult<DayOff> {
        let mut day_offs = self.day_offs.lock().unwrap();
        // Same outcome as the store on the (barber_id, date) unique index
        if day_offs
            .iter()
            .any(|d| d.barber_id == barber_id && d.date == date)
        {
            return Err(AppError::conflict("Day off already exists for this barber and date"));
        }
        let day_off = DayOff {
            id: self.next_id(),
            barber_id,
            date,
        };
        day_offs.push(day_off.clone());
        Ok(day_off)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut day_offs = self.day_offs.lock().unwrap();
        let before = day_offs.len();
        day_offs.retain(|d| d.id != id);
        Ok(day_offs.len() < before)
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.stored_user(email))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        // Same outcome as the store on the users(email) unique index
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::conflict("Email already in use"));
        }
        let user = User {
            id: self.next_id(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

/// Unit of Work whose repositories all share one `MemoryDb`
#[derive(Clone, Default)]
pub struct MemoryUow {
    pub db: Arc<MemoryDb>,
}

impl UnitOfWork for MemoryUow {
    fn barbers(&self) -> Arc<dyn BarberRepository> {
        self.db.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.db.clone()
    }

    fn day_offs(&self) -> Arc<dyn DayOffRepository> {
        self.db.clone()
    }

    fn users(&self) -> Arc<dyn UserRepository> {
        self.db.clone()
    }
}

/// Notifier that remembers what it was asked to send
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn booking_confirmed(&self, booking: &Booking) {
        self.push(format!("confirmed:{}", booking.id));
    }

    async fn booking_cancelled(&self, booking: &Booking) {
        self.push(format!("cancelled:{}", booking.id));
    }

    async fn welcome(&self, email: &str, _name: &str) {
        self.push(format!("welcome:{}", email));
    }

    async fn goodbye(&self, email: &str, _name: &str) {
        self.push(format!("goodbye:{}", email));
    }
}

/// Real services over an in-memory store
pub struct Harness {
    pub uow: MemoryUow,
    pub notifier: Arc<RecordingNotifier>,
    pub barbers: Arc<dyn BarberService>,
    pub bookings: Arc<dyn BookingService>,
    pub day_offs: Arc<dyn DayOffService>,
    pub auth: Arc<dyn AuthService>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let uow = MemoryUow::default();
        let shared = Arc::new(uow.clone());
        let notifier = Arc::new(RecordingNotifier::default());

        Self {
            barbers: Arc::new(BarberManager::new(shared.clone())),
            bookings: Arc::new(BookingManager::new(
                shared.clone(),
                notifier.clone(),
                config,
            )),
            day_offs: Arc::new(DayOffManager::new(shared.clone())),
            auth: Arc::new(Authenticator::new(shared, notifier.clone())),
            uow,
            notifier,
        }
    }

    pub fn db(&self) -> &MemoryDb {
        &self.uow.db
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn new_booking(barber: &str, date: &str, time: &str) -> NewBooking {
    NewBooking {
        barber: barber.to_string(),
        service: "Taglio".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        name: "Mario".to_string(),
        surname: "Rossi".to_string(),
        email: "mario@example.com".to_string(),
        phone: "3331234567".to_string(),
        message: None,
        price: 25.0,
    }
}
