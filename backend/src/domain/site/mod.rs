//! Landing page content.
//!
//! Copy, prices and testimonials are hand-authored here and rendered by the
//! HTTP adapter. Only the contact details come from configuration.

mod contact;
mod pricing;

pub use contact::{ContactDetails, PhoneNumber, PhoneNumberError};
pub use pricing::{CarType, PackagePrice, PriceRow, PriceTable, Rupees};

/// Accent colour classes used by cards and step badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Secondary,
    Highlight,
    Green,
    Purple,
    Pink,
}

impl Accent {
    /// CSS modifier class.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "accent-primary",
            Self::Secondary => "accent-secondary",
            Self::Highlight => "accent-highlight",
            Self::Green => "accent-green",
            Self::Purple => "accent-purple",
            Self::Pink => "accent-pink",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub pitch: &'static str,
    pub promise_highlight: &'static str,
    pub promise: &'static str,
}

/// One card in the "why choose us" grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

/// The bookable service package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePackage {
    pub title: &'static str,
    pub summary: &'static str,
    pub badge: &'static str,
    pub inclusions: Vec<&'static str>,
    pub prices: PriceTable,
    pub default_car: CarType,
}

/// One step of the booking walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub locality: &'static str,
    pub rating: u8,
    pub review: &'static str,
    pub accent: Accent,
}

impl Testimonial {
    /// Highest rating a review can carry.
    pub const MAX_RATING: u8 = 5;

    /// First letter of the reviewer's name, used as an avatar.
    #[must_use]
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }

    /// Filled stars followed by empty ones, e.g. `★★★★☆`.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(Self::MAX_RATING));
        let empty = usize::from(Self::MAX_RATING) - filled;
        format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
    }
}

/// Outbound contact button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: String,
}

/// Everything the landing page renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    pub brand: &'static str,
    pub hero: Hero,
    pub features: Vec<Feature>,
    pub package: ServicePackage,
    pub steps: Vec<Step>,
    pub testimonials: Vec<Testimonial>,
    pub footer_services: Vec<&'static str>,
    pub contact: ContactDetails,
}

impl SiteContent {
    /// Content for the Cruzo landing page.
    ///
    /// # Examples
    /// ```
    /// use cruzo_backend::domain::EmailAddress;
    /// use cruzo_backend::domain::site::{ContactDetails, PhoneNumber, SiteContent};
    ///
    /// let contact = ContactDetails {
    ///     whatsapp: PhoneNumber::new("+918438347944").expect("valid number"),
    ///     email: EmailAddress::new("hello@cruzo.care").expect("valid email"),
    ///     city: "Chennai, Tamil Nadu".to_owned(),
    /// };
    /// let site = SiteContent::cruzo(contact);
    /// assert_eq!(site.booking_link(), "https://wa.me/918438347944");
    /// ```
    #[must_use]
    pub fn cruzo(contact: ContactDetails) -> Self {
        Self {
            brand: "Cruzo",
            hero: Hero {
                headline: "Premium Car Wash at Your",
                highlight: "Doorstep",
                tagline: "We bring the car spa to you",
                pitch: "We get it! You're juggling work, family, and city traffic. The last \
                        thing you want is to drive to a service center, wait in line, or chase \
                        after your apartment cleaner who doesn't show up half the time.",
                promise_highlight: "Zero effort. No delays.",
                promise: "Just a spotless car, delivered to your doorstep.",
            },
            features: vec![
                feature("🏠", "100% Doorstep", "We bring water, gear & pros to you.", Accent::Primary),
                feature("🌿", "Eco-Friendly", "Water-saving, safe cleaning products.", Accent::Secondary),
                feature("⏰", "On-Time", "Consistent, reliable service every time.", Accent::Highlight),
                feature("💬", "Instant Booking", "WhatsApp booking with confirmation.", Accent::Green),
                feature("😊", "Hassle-Free", "No more waiting at your regular car spa.", Accent::Purple),
                feature("⭐", "First-Time Deal", "Up to 40% off on your first service.", Accent::Pink),
            ],
            package: ServicePackage {
                title: "Premium Doorstep Service",
                summary: "Complete interior & exterior cleaning",
                badge: "Introductory Offer!",
                inclusions: vec![
                    "Exterior wash with premium soap",
                    "Interior vacuum & sanitization",
                    "Dashboard & console cleaning",
                    "Seat conditioning",
                    "Glass cleaning",
                    "Wheel & tire shine",
                    "Air freshener",
                    "Basic paint protection",
                    "Microfiber drying",
                ],
                prices: PriceTable::introductory(),
                default_car: CarType::Sedan,
            },
            steps: vec![
                step("📞", "Call or WhatsApp", "Choose your slot", Accent::Primary),
                step("📅", "Select Package", "Pick service & time", Accent::Secondary),
                step("👥", "We Arrive", "Fully equipped team", Accent::Highlight),
                step("⭐", "Professional Clean", "Spotless results", Accent::Green),
                step("🚗", "Sparkling Car", "Enjoy your clean car", Accent::Purple),
            ],
            testimonials: vec![
                Testimonial {
                    name: "Rajesh Kumar",
                    locality: "Sholinganallur",
                    rating: 5,
                    review: "Amazing service! They came right to my apartment complex and did an \
                             incredible job. My car looks brand new. Will definitely book again.",
                    accent: Accent::Primary,
                },
                Testimonial {
                    name: "Priya Sharma",
                    locality: "Medavakkam",
                    rating: 4,
                    review: "Perfect for busy professionals like me. Booked via WhatsApp, they \
                             arrived on time, and the quality is outstanding. Highly recommended!",
                    accent: Accent::Secondary,
                },
                Testimonial {
                    name: "Arjun Patel",
                    locality: "Perumbakkam",
                    rating: 5,
                    review: "The eco-friendly approach and professional team impressed me. Great \
                             value for money and saved me hours of weekend time.",
                    accent: Accent::Secondary,
                },
            ],
            footer_services: vec![
                "Basic Wash",
                "Premium Clean",
                "Full Detailing",
                "Custom Packages",
            ],
            contact,
        }
    }

    /// Plain WhatsApp link used by every "Book Now" button.
    #[must_use]
    pub fn booking_link(&self) -> String {
        self.contact.whatsapp.whatsapp_link(None)
    }

    /// WhatsApp link with a prefilled request for one car type.
    #[must_use]
    pub fn booking_link_for(&self, car_type: CarType) -> String {
        let text = format!(
            "Hi {}, I'd like to book the {} for my {}.",
            self.brand,
            self.package.title,
            car_type.label()
        );
        self.contact.whatsapp.whatsapp_link(Some(&text))
    }

    /// WhatsApp, phone and email buttons for the contact section.
    #[must_use]
    pub fn channels(&self) -> Vec<ContactChannel> {
        vec![
            ContactChannel {
                icon: "💬",
                label: "WhatsApp",
                href: self.booking_link(),
            },
            ContactChannel {
                icon: "📞",
                label: "Call Us",
                href: self.contact.whatsapp.tel_uri(),
            },
            ContactChannel {
                icon: "✉️",
                label: "Email",
                href: self.contact.mailto_uri(),
            },
        ]
    }
}

fn feature(icon: &'static str, title: &'static str, description: &'static str, accent: Accent) -> Feature {
    Feature {
        icon,
        title,
        description,
        accent,
    }
}

fn step(icon: &'static str, title: &'static str, description: &'static str, accent: Accent) -> Step {
    Step {
        icon,
        title,
        description,
        accent,
    }
}
