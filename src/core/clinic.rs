//! The clinic dataset — every record the page renders.
//!
//! All content is supplied whole at startup as one immutable [`ClinicData`]
//! value.  Records use `&'static str` because the dataset is compiled in;
//! there is no loading, streaming, or persistence.

use chrono::NaiveDate;
use thiserror::Error;

// ───────────────────────────────────────── gallery ───────────

/// Category tag on a gallery photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageCategory {
    Clinic,
    Team,
    BeforeAfter,
    Equipment,
}

impl ImageCategory {
    /// Filter-tab label shown in the gallery section.
    pub fn label(self) -> &'static str {
        match self {
            ImageCategory::Clinic => "Our Clinic",
            ImageCategory::Team => "Our Team",
            ImageCategory::BeforeAfter => "Results",
            ImageCategory::Equipment => "Technology",
        }
    }
}

/// One photo in the gallery.  Identity key is `id`.
#[derive(Debug, Clone, Copy)]
pub struct GalleryImage {
    pub id: &'static str,
    pub src: &'static str,
    pub alt: &'static str,
    pub category: ImageCategory,
    pub title: Option<&'static str>,
}

// ───────────────────────────────────────── people ────────────

#[derive(Debug, Clone)]
pub struct DentistProfile {
    pub name: &'static str,
    pub title: &'static str,
    pub experience: &'static str,
    /// Portrait photo URL.
    pub image: &'static str,
    pub bio: &'static str,
    pub certifications: &'static [&'static str],
    pub specialties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    /// Portrait photo URL.
    pub image: &'static str,
    pub bio: &'static str,
}

/// A patient review.  `rating` is a 0–5 star count.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    /// Reviewer photo URL, when one was provided.
    pub image: Option<&'static str>,
    pub rating: u8,
    pub review: &'static str,
    /// ISO date (`YYYY-MM-DD`), validated at startup.
    pub date: &'static str,
    pub treatment: Option<&'static str>,
}

// ───────────────────────────────────────── services ──────────

#[derive(Debug, Clone, Copy)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price: Option<&'static str>,
}

// ───────────────────────────────────────── contact ───────────

#[derive(Debug, Clone, Copy)]
pub struct Address {
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: &'static str,
    pub country: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub address: Address,
    pub phone: &'static str,
    pub email: &'static str,
    /// Opening hours as (day, hours) pairs in display order.
    pub hours: &'static [(&'static str, &'static str)],
    pub facebook: Option<&'static str>,
    pub instagram: Option<&'static str>,
    pub whatsapp: Option<&'static str>,
}

// ───────────────────────────────────────── aggregate ─────────

/// The whole dataset behind the page.
#[derive(Debug, Clone)]
pub struct ClinicData {
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub dentist: DentistProfile,
    pub team: Vec<TeamMember>,
    pub services: Vec<Service>,
    pub testimonials: Vec<Testimonial>,
    pub gallery: Vec<GalleryImage>,
    pub contact: ContactInfo,
}

/// Flat list of treatments offered by the booking form's service picker.
/// Wider than the service cards on purpose (matches the clinic's intake menu).
pub const SERVICES_LIST: &[&str] = &[
    "General Dentistry",
    "Cosmetic Dentistry",
    "Dental Implants",
    "Orthodontics",
    "Professional Cleaning",
    "Teeth Whitening",
    "Root Canal Treatment",
    "Oral Surgery",
    "Pediatric Dentistry",
    "Emergency Dental Care",
];

// ───────────────────────────────────────── validation ────────

/// Problems a malformed dataset can have.  Checked once at launch so the
/// widgets never have to re-validate records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("duplicate gallery image id {0:?}")]
    DuplicateImageId(&'static str),
    #[error("duplicate testimonial id {0:?}")]
    DuplicateTestimonialId(&'static str),
    #[error("testimonial {id:?} has rating {rating}, expected 0–5")]
    RatingOutOfRange { id: &'static str, rating: u8 },
    #[error("testimonial {id:?} has unparseable date {date:?}")]
    BadDate { id: &'static str, date: &'static str },
}

/// Validate the dataset invariants: unique ids, ratings in `[0, 5]`,
/// testimonial dates in `YYYY-MM-DD` form.
pub fn validate(data: &ClinicData) -> Result<(), DataError> {
    let mut image_ids = Vec::with_capacity(data.gallery.len());
    for img in &data.gallery {
        if image_ids.contains(&img.id) {
            return Err(DataError::DuplicateImageId(img.id));
        }
        image_ids.push(img.id);
    }

    let mut review_ids = Vec::with_capacity(data.testimonials.len());
    for t in &data.testimonials {
        if review_ids.contains(&t.id) {
            return Err(DataError::DuplicateTestimonialId(t.id));
        }
        review_ids.push(t.id);

        if t.rating > 5 {
            return Err(DataError::RatingOutOfRange {
                id: t.id,
                rating: t.rating,
            });
        }
        if NaiveDate::parse_from_str(t.date, "%Y-%m-%d").is_err() {
            return Err(DataError::BadDate {
                id: t.id,
                date: t.date,
            });
        }
    }

    Ok(())
}

// ───────────────────────────────────────── sample data ───────

impl ClinicData {
    /// The built-in Bright Smiles dataset.
    pub fn sample() -> Self {
        Self {
            name: "Bright Smiles Dental",
            tagline: "Your Family's Smile Partner",
            description: "Providing exceptional dental care with a gentle touch for patients \
                          of all ages. Our modern clinic combines advanced technology with \
                          personalized care to ensure your comfort and optimal oral health.",
            dentist: DentistProfile {
                name: "Dr. Sarah Johnson",
                title: "Doctor of Dental Surgery",
                experience: "15+ years of experience",
                image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=400&h=400",
                bio: "Dr. Sarah Johnson has been dedicated to providing exceptional dental \
                      care for over 15 years. She graduated from Harvard School of Dental \
                      Medicine and has completed advanced training in cosmetic and \
                      restorative dentistry. Dr. Johnson is committed to staying current \
                      with the latest dental technologies and techniques to provide her \
                      patients with the best possible care.",
                certifications: &[
                    "Doctor of Dental Surgery (DDS) - Harvard School of Dental Medicine",
                    "Advanced Cosmetic Dentistry Certification",
                    "Invisalign Certified Provider",
                    "Member of American Dental Association (ADA)",
                ],
                specialties: &[
                    "Cosmetic Dentistry",
                    "Restorative Dentistry",
                    "Preventive Care",
                    "Invisalign Treatment",
                ],
            },
            team: vec![
                TeamMember {
                    id: "1",
                    name: "Lisa Rodriguez",
                    role: "Dental Hygienist",
                    image: "https://images.unsplash.com/photo-1551190822-a9333d879b1f?w=300&h=300",
                    bio: "Lisa is a licensed dental hygienist with 8 years of experience. \
                          She specializes in preventive care and patient education.",
                },
                TeamMember {
                    id: "2",
                    name: "Michael Chen",
                    role: "Dental Assistant",
                    image: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=300&h=300",
                    bio: "Michael assists Dr. Johnson with procedures and ensures patient \
                          comfort throughout their visit.",
                },
                TeamMember {
                    id: "3",
                    name: "Emily Davis",
                    role: "Office Manager",
                    image: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?w=300&h=300",
                    bio: "Emily manages scheduling, insurance, and ensures smooth \
                          operations for all patients.",
                },
            ],
            services: vec![
                Service {
                    id: "general",
                    title: "General Dentistry",
                    description: "Comprehensive dental care including checkups, cleanings, \
                                  and preventive treatments.",
                    features: &[
                        "Regular Checkups",
                        "Professional Cleanings",
                        "Fluoride Treatments",
                        "Oral Cancer Screenings",
                    ],
                    price: Some("Starting at $150"),
                },
                Service {
                    id: "cosmetic",
                    title: "Cosmetic Dentistry",
                    description: "Enhance your smile with our cosmetic dental procedures.",
                    features: &["Teeth Whitening", "Veneers", "Bonding", "Smile Makeovers"],
                    price: Some("Starting at $300"),
                },
                Service {
                    id: "implants",
                    title: "Dental Implants",
                    description: "Permanent solution for missing teeth with natural-looking \
                                  results.",
                    features: &[
                        "Single Implants",
                        "Multiple Implants",
                        "Full Mouth Reconstruction",
                        "Implant Crowns",
                    ],
                    price: Some("Starting at $2,500"),
                },
                Service {
                    id: "orthodontics",
                    title: "Orthodontics",
                    description: "Straighten your teeth with traditional braces or clear \
                                  aligners.",
                    features: &[
                        "Traditional Braces",
                        "Invisalign",
                        "Retainers",
                        "Orthodontic Consultations",
                    ],
                    price: Some("Starting at $4,000"),
                },
                Service {
                    id: "cleaning",
                    title: "Professional Cleaning",
                    description: "Deep cleaning and maintenance for optimal oral health.",
                    features: &["Regular Cleanings", "Deep Cleaning", "Plaque Removal", "Gum Care"],
                    price: Some("Starting at $120"),
                },
                Service {
                    id: "whitening",
                    title: "Teeth Whitening",
                    description: "Professional whitening treatments for a brighter, whiter \
                                  smile.",
                    features: &[
                        "In-Office Whitening",
                        "Take-Home Kits",
                        "Touch-Up Treatments",
                        "Consultation",
                    ],
                    price: Some("Starting at $400"),
                },
            ],
            testimonials: vec![
                Testimonial {
                    id: "1",
                    name: "Jennifer Smith",
                    image: Some(
                        "https://images.unsplash.com/photo-1494790108755-2616b612b1a5?w=80&h=80",
                    ),
                    rating: 5,
                    review: "Dr. Johnson and her team are absolutely wonderful! I was \
                             nervous about getting dental work done, but they made me feel \
                             so comfortable. The office is modern and clean, and the \
                             results exceeded my expectations.",
                    date: "2024-01-15",
                    treatment: Some("Cosmetic Dentistry"),
                },
                Testimonial {
                    id: "2",
                    name: "Robert Thompson",
                    image: Some(
                        "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=80&h=80",
                    ),
                    rating: 5,
                    review: "I've been coming to Bright Smiles Dental for 3 years now, and \
                             I couldn't be happier. The staff is professional, friendly, \
                             and always on time. Highly recommend!",
                    date: "2024-01-10",
                    treatment: Some("General Dentistry"),
                },
                Testimonial {
                    id: "3",
                    name: "Maria Garcia",
                    image: Some(
                        "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=80&h=80",
                    ),
                    rating: 5,
                    review: "Got my dental implants here and the process was smooth from \
                             start to finish. Dr. Johnson explained everything clearly and \
                             the results look completely natural.",
                    date: "2024-01-05",
                    treatment: Some("Dental Implants"),
                },
                Testimonial {
                    id: "4",
                    name: "David Wilson",
                    image: Some(
                        "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=80&h=80",
                    ),
                    rating: 5,
                    review: "The Invisalign treatment here changed my life! The team was \
                             supportive throughout the entire process and my teeth look \
                             amazing now.",
                    date: "2023-12-20",
                    treatment: Some("Orthodontics"),
                },
            ],
            gallery: vec![
                GalleryImage {
                    id: "1",
                    src: "https://images.unsplash.com/photo-1629909613654-28e377c37b09?w=600&h=400",
                    alt: "Modern reception area",
                    category: ImageCategory::Clinic,
                    title: Some("Reception Area"),
                },
                GalleryImage {
                    id: "2",
                    src: "https://images.unsplash.com/photo-1631815588090-d4bfec5b1ccb?w=600&h=400",
                    alt: "Treatment room with modern equipment",
                    category: ImageCategory::Clinic,
                    title: Some("Treatment Room"),
                },
                GalleryImage {
                    id: "3",
                    src: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=600&h=400",
                    alt: "Dr. Johnson with patient",
                    category: ImageCategory::Team,
                    title: Some("Dr. Johnson with Patient"),
                },
                GalleryImage {
                    id: "4",
                    src: "https://images.unsplash.com/photo-1606811971618-4486d14f3f99?w=600&h=400",
                    alt: "Before and after teeth whitening",
                    category: ImageCategory::BeforeAfter,
                    title: Some("Teeth Whitening Results"),
                },
                GalleryImage {
                    id: "5",
                    src: "https://images.unsplash.com/photo-1598300042247-d088f8ab3a91?w=600&h=400",
                    alt: "State-of-the-art dental equipment",
                    category: ImageCategory::Equipment,
                    title: Some("Modern Equipment"),
                },
                GalleryImage {
                    id: "6",
                    src: "https://images.unsplash.com/photo-1631815588090-d4bfec5b1ccb?w=600&h=400",
                    alt: "Comfortable waiting area",
                    category: ImageCategory::Clinic,
                    title: Some("Waiting Area"),
                },
                GalleryImage {
                    id: "7",
                    src: "https://images.unsplash.com/photo-1559757148-5c350d0d3c56?w=600&h=400",
                    alt: "Dental team photo",
                    category: ImageCategory::Team,
                    title: Some("Our Team"),
                },
                GalleryImage {
                    id: "8",
                    src: "https://images.unsplash.com/photo-1588776814546-1ffcf47267a5?w=600&h=400",
                    alt: "Smile makeover before and after",
                    category: ImageCategory::BeforeAfter,
                    title: Some("Smile Makeover"),
                },
                GalleryImage {
                    id: "9",
                    src: "https://images.unsplash.com/photo-1579684385127-1ef15d508118?w=600&h=400",
                    alt: "Advanced dental technology",
                    category: ImageCategory::Equipment,
                    title: Some("Digital X-Ray"),
                },
                GalleryImage {
                    id: "10",
                    src: "https://images.unsplash.com/photo-1606811841689-23dfddce3e95?w=600&h=400",
                    alt: "Patient consultation",
                    category: ImageCategory::Team,
                    title: Some("Consultation"),
                },
                GalleryImage {
                    id: "11",
                    src: "https://images.unsplash.com/photo-1631815588090-d4bfec5b1ccb?w=600&h=400",
                    alt: "Modern clinic interior",
                    category: ImageCategory::Clinic,
                    title: Some("Clinic Interior"),
                },
                GalleryImage {
                    id: "12",
                    src: "https://images.unsplash.com/photo-1581056771107-24ca5f033842?w=600&h=400",
                    alt: "Sterilization equipment",
                    category: ImageCategory::Equipment,
                    title: Some("Sterilization Station"),
                },
            ],
            contact: ContactInfo {
                address: Address {
                    street: "123 Health Plaza Drive",
                    city: "Beverly Hills",
                    state: "CA",
                    zip: "90210",
                    country: "USA",
                },
                phone: "+1 (555) 123-4567",
                email: "info@brightsmilesdental.com",
                hours: &[
                    ("Monday", "8:00 AM - 6:00 PM"),
                    ("Tuesday", "8:00 AM - 6:00 PM"),
                    ("Wednesday", "8:00 AM - 6:00 PM"),
                    ("Thursday", "8:00 AM - 6:00 PM"),
                    ("Friday", "8:00 AM - 5:00 PM"),
                    ("Saturday", "9:00 AM - 3:00 PM"),
                    ("Sunday", "Closed"),
                ],
                facebook: Some("https://facebook.com/brightsmilesdental"),
                instagram: Some("https://instagram.com/brightsmilesdental"),
                whatsapp: Some("https://wa.me/15551234567"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_data_is_valid() {
        let data = ClinicData::sample();
        assert_eq!(validate(&data), Ok(()));
        assert_eq!(data.gallery.len(), 12);
        assert_eq!(data.testimonials.len(), 4);
    }

    #[test]
    fn portrait_urls_are_populated() {
        let data = ClinicData::sample();
        assert!(!data.dentist.image.is_empty());
        assert!(data.team.iter().all(|m| !m.image.is_empty()));
        assert!(data.testimonials.iter().all(|t| t.image.is_some()));
    }

    #[test]
    fn rating_out_of_range_is_rejected() {
        let mut data = ClinicData::sample();
        data.testimonials[0].rating = 6;
        assert_eq!(
            validate(&data),
            Err(DataError::RatingOutOfRange { id: "1", rating: 6 })
        );
    }

    #[test]
    fn duplicate_image_id_is_rejected() {
        let mut data = ClinicData::sample();
        data.gallery[3].id = "1";
        assert_eq!(validate(&data), Err(DataError::DuplicateImageId("1")));
    }

    #[test]
    fn bad_testimonial_date_is_rejected() {
        let mut data = ClinicData::sample();
        data.testimonials[2].date = "Jan 5 2024";
        assert!(matches!(
            validate(&data),
            Err(DataError::BadDate { id: "3", .. })
        ));
    }
}
