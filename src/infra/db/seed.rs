//! Default team shipped with a fresh install.

use crate::domain::Barber;
use crate::errors::AppResult;
use crate::infra::BarberRepository;

const ROLE_BARBER: &str = "team.roles.barber";
const PLACEHOLDER_IMG: &str = "/assets/barber_placeholder.svg";

/// (id, name, description_it, description_en)
const DEFAULT_BARBERS: [(&str, &str, &str, &str); 4] = [
    (
        "lele",
        "Lele",
        "Maestro del taglio classico e moderno. Con oltre 15 anni di esperienza, Lele guida il team con passione e precisione.",
        "Master of classic and modern cuts. With over 15 years of experience, Lele leads the team with passion and precision.",
    ),
    (
        "riccardo",
        "Riccardo",
        "Specialista in sfumature e barbe scolpite. La sua attenzione ai dettagli è maniacale.",
        "Specialist in fades and sculpted beards. His attention to detail is obsessive.",
    ),
    (
        "jurgen",
        "Jurgen",
        "Creativo e sempre aggiornato sulle ultime tendenze. Jurgen trasforma ogni taglio in un'opera d'arte.",
        "Creative and always up to date with the latest trends. Jurgen transforms every cut into a work of art.",
    ),
    (
        "stefano",
        "Stefano",
        "Giovane talento con una mano ferma e un occhio per lo stile. Il futuro del barbering.",
        "Young talent with a steady hand and an eye for style. The future of barbering.",
    ),
];

/// The barbers inserted by [`seed_barbers`].
pub fn default_barbers() -> Vec<Barber> {
    DEFAULT_BARBERS
        .iter()
        .map(|(id, name, it, en)| Barber {
            id: id.to_string(),
            name: name.to_string(),
            role_key: ROLE_BARBER.to_string(),
            img: PLACEHOLDER_IMG.to_string(),
            description_it: Some(it.to_string()),
            description_en: Some(en.to_string()),
        })
        .collect()
}

/// Insert each default barber whose id is not taken yet.
///
/// Existing rows are left untouched, so running this twice is harmless and
/// never overwrites edits made from the admin panel. Returns how many rows
/// were inserted.
pub async fn seed_barbers(repo: &dyn BarberRepository) -> AppResult<usize> {
    let mut inserted = 0;
    for barber in default_barbers() {
        let id = barber.id.clone();
        if repo.insert_if_absent(barber).await? {
            tracing::info!(barber_id = %id, "Seeded barber");
            inserted += 1;
        } else {
            tracing::debug!(barber_id = %id, "Barber already present, skipping");
        }
    }
    Ok(inserted)
}
