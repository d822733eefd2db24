use chrono::{Duration, Utc};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use uuid::Uuid;

use crate::domain::lead::Lead;

const LOCATIONS: &[&str] = &[
    "Manila, Philippines",
    "Bangkok, Thailand",
    "Singapore",
    "Jakarta, Indonesia",
    "Kuala Lumpur, Malaysia",
    "Mumbai, India",
    "Bangalore, India",
    "Shanghai, China",
    "Shenzhen, China",
    "Tokyo, Japan",
    "Osaka, Japan",
    "Seoul, South Korea",
    "Sydney, Australia",
    "Melbourne, Australia",
    "London, United Kingdom",
    "Manchester, United Kingdom",
    "Berlin, Germany",
    "Munich, Germany",
    "Paris, France",
    "Amsterdam, Netherlands",
    "Stockholm, Sweden",
    "Zurich, Switzerland",
    "Madrid, Spain",
    "Milan, Italy",
    "Warsaw, Poland",
    "Dublin, Ireland",
    "San Francisco, CA, USA",
    "New York, NY, USA",
    "Austin, TX, USA",
    "Seattle, WA, USA",
    "Chicago, IL, USA",
    "Toronto, ON, Canada",
    "Vancouver, BC, Canada",
    "Sao Paulo, Brazil",
    "Buenos Aires, Argentina",
    "Dubai, UAE",
    "Tel Aviv, Israel",
    "Cairo, Egypt",
    "Lagos, Nigeria",
    "Cape Town, South Africa",
];

const INDUSTRIES: &[&str] = &[
    "Healthcare",
    "Technology",
    "Financial Services",
    "Manufacturing",
    "Education",
    "Retail",
    "Real Estate",
    "Telecommunications",
    "Energy",
    "Transportation",
    "Hospitality",
    "Media & Entertainment",
    "Construction",
    "Pharmaceutical",
    "Automotive",
    "Agriculture",
    "Food & Beverage",
    "Legal Services",
    "Consulting",
    "Marketing & Advertising",
    "Insurance",
    "Aerospace",
    "Biotechnology",
    "E-commerce",
    "Gaming",
    "Fintech",
    "Edtech",
    "Healthtech",
];

const NAME_PREFIXES: &[&str] = &[
    "Global", "International", "Digital", "Smart", "Advanced", "Premier", "Elite", "Innovative",
    "Modern", "Future", "Next", "Pro", "Tech", "Mega", "Ultra", "Prime", "Alpha", "Apex", "Summit",
    "Peak", "Vertex", "Core", "Central", "Metro", "Urban", "Regional", "National", "Universal",
];

const NAME_SUFFIXES: &[&str] = &[
    "Solutions",
    "Systems",
    "Technologies",
    "Services",
    "Group",
    "Corp",
    "Industries",
    "Enterprises",
    "Company",
    "Inc",
    "Ltd",
    "Partners",
    "Associates",
    "Consulting",
    "Labs",
    "Works",
    "Studio",
    "Hub",
    "Network",
    "Platform",
    "Ventures",
];

const WEBSITE_TLDS: &[&str] = &[".com", ".co", ".net", ".org", ".io", ".tech"];

const CONTACT_FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Lisa", "Robert", "Emma", "James", "Maria",
];

const CONTACT_LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

const CONTACT_TITLES: &[&str] = &[
    "CEO",
    "CTO",
    "CFO",
    "VP Sales",
    "Director",
    "Manager",
    "Head of Business Development",
];

const TAGS: &[&str] = &["High Priority", "Qualified", "Hot Lead", "Enterprise", "SMB"];

/// Produces randomized sample leads from fixed lookup tables. The RNG is
/// injected so tests can pin a seed and assert distributional properties.
pub struct LeadGenerator {
    rng: StdRng,
}

impl LeadGenerator {
    pub fn new() -> Self {
        LeadGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        LeadGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self, count: usize) -> Vec<Lead> {
        (0..count).map(|_| self.generate_one()).collect()
    }

    fn generate_one(&mut self) -> Lead {
        let company_name = self.company_name();
        let industry = *INDUSTRIES.choose(&mut self.rng).unwrap();
        let location = *LOCATIONS.choose(&mut self.rng).unwrap();
        let score = self.rng.gen_range(0..=100u8);

        let has_email = self.rng.gen_bool(0.8);
        let has_phone = self.rng.gen_bool(0.7);
        let has_website = self.rng.gen_bool(0.9);

        let email = has_email.then(|| self.email(&company_name));
        let phone = has_phone.then(|| self.phone(location));
        let website = has_website.then(|| self.website(&company_name));
        let is_valid_email = email.as_ref().map(|_| self.rng.gen_bool(0.8));
        let is_valid_phone = phone.as_ref().map(|_| self.rng.gen_bool(0.85));

        let linkedin_url = self
            .rng
            .gen_bool(0.6)
            .then(|| format!("https://linkedin.com/company/{}", slug(&company_name, "-")));
        let bbb_rating: Option<u8> = self.rng.gen_bool(0.5).then(|| self.rng.gen_range(1..=5));
        let tags = self
            .rng
            .gen_bool(0.4)
            .then(|| vec![TAGS.choose(&mut self.rng).unwrap().to_string()]);
        let notes = self
            .rng
            .gen_bool(0.3)
            .then(|| "Initial contact made via email. Follow up scheduled.".to_string());

        let description = format!(
            "{} is a leading {} company based in {}, providing innovative solutions to clients worldwide.",
            company_name,
            industry.to_lowercase(),
            location
        );

        // updated_at within the last week, created_at some time before that
        let now = Utc::now();
        let updated_at = now - Duration::hours(self.rng.gen_range(0..7 * 24));
        let created_at = updated_at - Duration::hours(self.rng.gen_range(0..53 * 24));
        let last_activity = now - Duration::days(self.rng.gen_range(0..30));

        Lead {
            id: Uuid::new_v4().to_string(),
            company_name,
            industry: industry.to_string(),
            location: location.to_string(),
            address: None,
            email,
            phone,
            website,
            linkedin_url,
            bbb_rating,
            score,
            employee_count: Some(self.rng.gen_range(1..=1000)),
            revenue: Some(format!("${}M", self.rng.gen_range(1..100))),
            description: Some(description),
            last_activity: Some(last_activity.to_rfc3339()),
            contact_person: Some(format!(
                "{} {}",
                CONTACT_FIRST_NAMES.choose(&mut self.rng).unwrap(),
                CONTACT_LAST_NAMES.choose(&mut self.rng).unwrap()
            )),
            contact_title: Some(CONTACT_TITLES.choose(&mut self.rng).unwrap().to_string()),
            is_valid_email,
            is_valid_phone,
            tags,
            notes,
            created_at,
            updated_at,
        }
    }

    fn company_name(&mut self) -> String {
        format!(
            "{} {}",
            NAME_PREFIXES.choose(&mut self.rng).unwrap(),
            NAME_SUFFIXES.choose(&mut self.rng).unwrap()
        )
    }

    fn email(&mut self, company_name: &str) -> String {
        let tld = WEBSITE_TLDS.choose(&mut self.rng).unwrap();
        format!("contact@{}{}", slug(company_name, ""), tld)
    }

    fn website(&mut self, company_name: &str) -> String {
        let tld = WEBSITE_TLDS.choose(&mut self.rng).unwrap();
        format!("https://www.{}{}", slug(company_name, ""), tld)
    }

    // Rough country-code formats keyed off the location string, generic
    // international format for everything else.
    fn phone(&mut self, location: &str) -> String {
        let rng = &mut self.rng;
        if location.contains("USA") || location.contains("Canada") {
            format!(
                "+1-{}-{}-{}",
                rng.gen_range(100..1000),
                rng.gen_range(100..1000),
                rng.gen_range(1000..10000)
            )
        } else if location.contains("Philippines") {
            format!(
                "+63-{}-{}-{}",
                rng.gen_range(100..1000),
                rng.gen_range(100..1000),
                rng.gen_range(1000..10000)
            )
        } else if location.contains("Singapore") || location.contains("Malaysia") {
            format!(
                "+65-{}-{}",
                rng.gen_range(1000..10000),
                rng.gen_range(1000..10000)
            )
        } else if location.contains("United Kingdom") {
            format!(
                "+44-{}-{}",
                rng.gen_range(1000..10000),
                rng.gen_range(100000..1000000)
            )
        } else if location.contains("Germany") {
            format!(
                "+49-{}-{}",
                rng.gen_range(100..1000),
                rng.gen_range(1000000..10000000)
            )
        } else if location.contains("India") {
            format!(
                "+91-{}-{}",
                rng.gen_range(10000..100000),
                rng.gen_range(10000..100000)
            )
        } else if location.contains("China") {
            format!(
                "+86-{}-{}-{}",
                rng.gen_range(100..1000),
                rng.gen_range(1000..10000),
                rng.gen_range(1000..10000)
            )
        } else if location.contains("Japan") {
            format!(
                "+81-{}-{}-{}",
                rng.gen_range(10..100),
                rng.gen_range(1000..10000),
                rng.gen_range(1000..10000)
            )
        } else if location.contains("Australia") {
            format!(
                "+61-{}-{}-{}",
                rng.gen_range(1..10),
                rng.gen_range(1000..10000),
                rng.gen_range(1000..10000)
            )
        } else {
            format!(
                "+{}-{}-{}-{}",
                rng.gen_range(100..1000),
                rng.gen_range(100..1000),
                rng.gen_range(100..1000),
                rng.gen_range(1000..10000)
            )
        }
    }
}

impl Default for LeadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn slug(company_name: &str, separator: &str) -> String {
    company_name
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<String>>()
        .join(separator)
}
